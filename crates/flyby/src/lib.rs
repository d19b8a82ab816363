#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use flyby_camera as camera;

#[doc(inline)]
pub use flyby_interp as interp;

#[doc(inline)]
pub use flyby_movie as movie;
