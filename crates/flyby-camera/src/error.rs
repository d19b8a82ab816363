/// An error type for the camera module.
#[derive(thiserror::Error, Debug)]
pub enum CameraError {
    /// Error when the keyframe file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to read or write the keyframe file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to encode or decode the keyframe records.
    #[error("Failed to parse the keyframe file. {0}")]
    JsonError(#[from] serde_json::Error),
}
