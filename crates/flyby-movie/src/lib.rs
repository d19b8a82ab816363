#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Frame rendering loop and video assembly.
pub mod assembler;

/// Recording configuration.
pub mod config;

/// Error types for movie assembly.
pub mod error;

/// GStreamer-backed H.264 video encoder (feature-gated).
///
/// Requires the `gstreamer` feature flag and system GStreamer libraries.
#[cfg(feature = "gstreamer")]
pub mod gstreamer;

/// Interactive capture session owning the keyframe list.
pub mod session;

/// Capability traits for the external viewer and video encoder.
pub mod traits;

pub use crate::assembler::make_movie;
pub use crate::config::MovieConfig;
pub use crate::error::MovieError;
#[cfg(feature = "gstreamer")]
pub use crate::gstreamer::GstEncoder;
pub use crate::session::RecordingSession;
pub use crate::traits::{VideoEncoder, Viewer};
