#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// utilities for wrapping and unwrapping angles in degrees.
pub mod angles;

/// linear interpolation between camera positions.
pub mod interpolate;

pub use crate::interpolate::{interpolate_segment, interpolate_sequence};

/// Default number of rendered frames per second of transition time.
pub const DEFAULT_FPS: u32 = 60;
