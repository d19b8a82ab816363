use serde::{Deserialize, Serialize};

/// Mutable camera state of a running viewer.
///
/// The recording core reads this to capture keyframes and writes it to drive
/// rendering; it never owns or creates the live camera.
pub trait ViewerCamera {
    /// The world-space focal point of the camera.
    fn center(&self) -> [f64; 3];

    /// The rotation around the three axes, in degrees.
    fn angles(&self) -> [f64; 3];

    /// The magnification factor.
    fn zoom(&self) -> f64;

    /// The projection blend factor.
    fn perspective(&self) -> f64;

    /// Move the focal point.
    fn set_center(&mut self, center: [f64; 3]);

    /// Rotate the camera.
    fn set_angles(&mut self, angles: [f64; 3]);

    /// Change the magnification factor.
    fn set_zoom(&mut self, zoom: f64);

    /// Change the projection blend factor.
    fn set_perspective(&mut self, perspective: f64);
}

/// A single recorded camera state.
///
/// Two positions are equal only if all five fields match exactly; there is no
/// tolerance on the floating point values.
///
/// # Examples
///
/// ```
/// use flyby_camera::CameraPosition;
///
/// let home = CameraPosition {
///     center: [0.0, 0.0, 0.0],
///     angles: [0.0, 0.0, 0.0],
///     zoom: 1.0,
///     perspective: 0.0,
///     transition_time: 0.0,
/// };
///
/// assert_eq!(home.zoom, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPosition {
    /// World-space focal point.
    pub center: [f64; 3],

    /// Rotation around the three axes in degrees, canonically in `[-180, 180)`.
    pub angles: [f64; 3],

    /// Magnification factor.
    pub zoom: f64,

    /// Projection blend factor.
    pub perspective: f64,

    /// Seconds of interpolated transition to play into this position from the
    /// previous one in a sequence. Ignored for the first element.
    pub transition_time: f64,
}

impl CameraPosition {
    /// Snapshot the current state of a live camera.
    ///
    /// # Arguments
    ///
    /// * `camera` - The live camera to read.
    /// * `transition_time` - Seconds of transition into this position.
    pub fn from_camera<C>(camera: &C, transition_time: f64) -> Self
    where
        C: ViewerCamera + ?Sized,
    {
        Self {
            center: camera.center(),
            angles: camera.angles(),
            zoom: camera.zoom(),
            perspective: camera.perspective(),
            transition_time,
        }
    }

    /// Push this position onto a live camera.
    ///
    /// This is a one-way write of the four camera fields. `transition_time`
    /// has no meaning outside a sequence and is not written.
    pub fn apply<C>(&self, camera: &mut C)
    where
        C: ViewerCamera + ?Sized,
    {
        camera.set_center(self.center);
        camera.set_angles(self.angles);
        camera.set_zoom(self.zoom);
        camera.set_perspective(self.perspective);
    }
}
