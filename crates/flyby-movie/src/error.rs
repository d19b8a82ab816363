/// An error type for the movie assembly module.
#[derive(thiserror::Error, Debug)]
pub enum MovieError {
    /// The keyframe list expands to zero rendered frames.
    #[error("no frames to render; need at least two keyframes with a non-zero transition time")]
    NoFrames,

    /// Error to manipulate the output directory or an intermediate frame file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to render the current view to an image file.
    #[error("Failed to take a screenshot. {0}")]
    ScreenshotError(String),

    /// Error to load or save a keyframe file.
    #[error(transparent)]
    CameraError(#[from] flyby_camera::CameraError),

    /// Error to encode the rendered frames into a video file.
    #[error("Failed to encode the movie. {0}")]
    EncodeError(String),

    /// An error for an invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An error occurred during GStreamer initialization.
    #[cfg(feature = "gstreamer")]
    #[error(transparent)]
    GlibError(#[from] gst::glib::Error),

    /// An error occurred during GStreamer downcast of a pipeline element.
    #[cfg(feature = "gstreamer")]
    #[error("Failed to downcast pipeline")]
    DowncastPipelineError(gst::Element),

    /// An error occurred looking up a pipeline element by name.
    #[cfg(feature = "gstreamer")]
    #[error("Failed to get an element by name")]
    GetElementByNameError,

    /// An error occurred getting the pipeline bus.
    #[cfg(feature = "gstreamer")]
    #[error("Failed to get the bus")]
    BusError,

    /// An error occurred setting the pipeline state.
    #[cfg(feature = "gstreamer")]
    #[error(transparent)]
    SetPipelineStateError(#[from] gst::StateChangeError),

    /// An error occurred pushing a frame buffer into the pipeline.
    #[cfg(feature = "gstreamer")]
    #[error(transparent)]
    GstreamerFlowError(#[from] gst::FlowError),

    /// Error to decode an intermediate PNG frame.
    #[cfg(feature = "gstreamer")]
    #[error("Failed to decode the png image. {0}")]
    PngDecodeError(String),
}
