#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the camera module.
pub mod error;

/// Keyframe file reading and writing.
pub mod keyframes;

/// Camera position value type and live-camera access.
pub mod position;

pub use crate::error::CameraError;
pub use crate::position::{CameraPosition, ViewerCamera};
