use std::path::{Path, PathBuf};

use flyby_camera::ViewerCamera;

use crate::error::MovieError;

/// A running viewer that can be driven frame by frame.
///
/// The two operations are deliberately narrow: move the camera, render the
/// current view to a file. The rendering loop relies on `screenshot` seeing
/// the camera state exactly as it was left by the preceding write.
pub trait Viewer {
    /// Read access to the live camera.
    fn camera(&self) -> &dyn ViewerCamera;

    /// Mutable access to the live camera.
    fn camera_mut(&mut self) -> &mut dyn ViewerCamera;

    /// Render the current view into an image file at `path`.
    ///
    /// The file must be fully written when this returns.
    fn screenshot(&mut self, path: &Path) -> Result<(), MovieError>;
}

/// Encodes an ordered sequence of image files into a single video file.
pub trait VideoEncoder {
    /// Encode `frames`, in order, at `fps` frames per second into `file_path`.
    ///
    /// Implementations must consume every frame before returning `Ok`; the
    /// caller deletes the frame files afterwards.
    fn encode(&mut self, frames: &[PathBuf], fps: u32, file_path: &Path)
        -> Result<(), MovieError>;
}
