use std::path::PathBuf;

use flyby_interp::DEFAULT_FPS;

/// File name of the encoded movie inside the output directory.
pub const MOVIE_FILE_NAME: &str = "movie.mp4";

/// Settings for one movie-recording session.
#[derive(Debug, Clone)]
pub struct MovieConfig {
    /// Rendered frames per second of transition time, and the playback rate
    /// of the encoded movie.
    pub fps: u32,

    /// Directory receiving the intermediate frames and the movie file.
    pub output_dir: PathBuf,

    /// Close the camera path by returning to the first keyframe.
    pub looped: bool,
}

impl Default for MovieConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            output_dir: default_output_dir(),
            looped: false,
        }
    }
}

/// The user-scoped default output directory (`flyby` under the home
/// directory, or under the current directory when no home is known).
pub fn default_output_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flyby")
}
