use std::path::{Path, PathBuf};

use flyby_camera::{keyframes, CameraPosition};

use crate::assembler::make_movie;
use crate::config::MovieConfig;
use crate::error::MovieError;
use crate::traits::{VideoEncoder, Viewer};

/// Default seconds of transition into a newly appended position.
pub const DEFAULT_TRANSITION_TIME: f64 = 1.0;

/// An interactive movie-recording session.
///
/// Owns the viewer handle, the keyframe list and the recording configuration;
/// there is no process-wide state, so several sessions can exist side by side
/// as long as they use different output directories.
///
/// The intended flow: move the camera in the viewer, call
/// [`append_position`](RecordingSession::append_position), repeat, then call
/// [`make_movie`](RecordingSession::make_movie).
pub struct RecordingSession<V> {
    viewer: V,
    keyframes: Vec<CameraPosition>,
    config: MovieConfig,
}

impl<V: Viewer> RecordingSession<V> {
    /// Create an empty session around a running viewer.
    pub fn new(viewer: V, config: MovieConfig) -> Self {
        Self {
            viewer,
            keyframes: Vec::new(),
            config,
        }
    }

    /// The keyframes recorded so far, in capture order.
    pub fn keyframes(&self) -> &[CameraPosition] {
        &self.keyframes
    }

    /// The recording configuration.
    pub fn config(&self) -> &MovieConfig {
        &self.config
    }

    /// Read access to the viewer.
    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    /// Mutable access to the viewer, to reposition the camera between
    /// captures.
    pub fn viewer_mut(&mut self) -> &mut V {
        &mut self.viewer
    }

    /// Forget every recorded keyframe.
    pub fn clear(&mut self) {
        self.keyframes.clear();
    }

    /// Snapshot the live camera and append it to the keyframe list.
    ///
    /// # Arguments
    ///
    /// * `transition_time` - Seconds of interpolated transition played into
    ///   this position from the previously appended one.
    pub fn append_position(&mut self, transition_time: f64) {
        let position = CameraPosition::from_camera(self.viewer.camera(), transition_time);
        self.keyframes.push(position);
    }

    /// Write the recorded keyframes to a keyframe file.
    pub fn save_keyframes(&self, file_path: impl AsRef<Path>) -> Result<(), MovieError> {
        keyframes::save(file_path, &self.keyframes)?;
        Ok(())
    }

    /// Replace the recorded keyframes with the contents of a keyframe file.
    pub fn load_keyframes(&mut self, file_path: impl AsRef<Path>) -> Result<(), MovieError> {
        self.keyframes = keyframes::load(file_path)?;
        Ok(())
    }

    /// Render the recorded keyframes and encode them into a movie file.
    ///
    /// # Returns
    ///
    /// The path of the encoded movie file.
    pub fn make_movie<E>(&mut self, encoder: &mut E) -> Result<PathBuf, MovieError>
    where
        E: VideoEncoder + ?Sized,
    {
        make_movie(&mut self.viewer, encoder, &self.keyframes, &self.config)
    }
}
