use flyby_camera::CameraPosition;

use crate::angles::{unwrap_toward, wrap_degrees};

/// Evenly spaced samples between `start` and `end`, endpoints included.
///
/// The last sample is pinned to `end` so arrival values are exact. A single
/// sample is the end value.
fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    if num == 0 {
        return Vec::new();
    }
    if num == 1 {
        return vec![end];
    }

    let step = (end - start) / (num - 1) as f64;
    (0..num)
        .map(|i| if i + 1 == num { end } else { start + step * i as f64 })
        .collect()
}

/// Componentwise [`linspace`] over a 3-axis value.
fn linspace3(start: [f64; 3], end: [f64; 3], num: usize) -> Vec<[f64; 3]> {
    let per_axis: [Vec<f64>; 3] = std::array::from_fn(|axis| linspace(start[axis], end[axis], num));
    (0..num)
        .map(|i| std::array::from_fn(|axis| per_axis[axis][i]))
        .collect()
}

/// Interpolates between two camera positions.
///
/// Produces `round(fps * transition_time)` frames including both endpoints.
/// `center`, `zoom` and `perspective` are interpolated linearly. Each angle
/// axis is first unwrapped onto the shortest path (see
/// [`unwrap_toward`](crate::angles::unwrap_toward)), interpolated, then
/// wrapped back into `[-180, 180)`. Every produced frame carries a
/// `transition_time` of zero.
///
/// A transition that rounds to zero frames or less yields an empty vector; a
/// single-frame transition yields the arrival position.
///
/// # Arguments
///
/// * `start` - The position the transition leaves from.
/// * `end` - The position the transition arrives at.
/// * `transition_time` - Seconds of transition between the two positions.
/// * `fps` - Rendered frames per second of transition time.
///
/// # Examples
///
/// ```
/// use flyby_camera::CameraPosition;
/// use flyby_interp::interpolate_segment;
///
/// let start = CameraPosition {
///     center: [0.0, 0.0, 0.0],
///     angles: [0.0, 0.0, 0.0],
///     zoom: 1.0,
///     perspective: 0.0,
///     transition_time: 0.0,
/// };
/// let end = CameraPosition {
///     zoom: 2.0,
///     ..start
/// };
///
/// let frames = interpolate_segment(&start, &end, 0.1, 60);
/// assert_eq!(frames.len(), 6);
/// assert_eq!(frames[0].zoom, 1.0);
/// assert_eq!(frames[5].zoom, 2.0);
/// ```
pub fn interpolate_segment(
    start: &CameraPosition,
    end: &CameraPosition,
    transition_time: f64,
    fps: u32,
) -> Vec<CameraPosition> {
    let num_frames = (f64::from(fps) * transition_time).round();
    if num_frames < 1.0 || !num_frames.is_finite() {
        return Vec::new();
    }
    let num_frames = num_frames as usize;

    // put each start angle on the shortest path toward its end angle
    let mut start_angles = start.angles;
    for (axis, angle) in start_angles.iter_mut().enumerate() {
        *angle = unwrap_toward(*angle, end.angles[axis]);
    }

    let centers = linspace3(start.center, end.center, num_frames);
    let angles = linspace3(start_angles, end.angles, num_frames);
    let zooms = linspace(start.zoom, end.zoom, num_frames);
    let perspectives = linspace(start.perspective, end.perspective, num_frames);

    centers
        .into_iter()
        .zip(angles)
        .zip(zooms)
        .zip(perspectives)
        .map(|(((center, angles), zoom), perspective)| CameraPosition {
            center,
            angles: angles.map(wrap_degrees),
            zoom,
            perspective,
            transition_time: 0.0,
        })
        .collect()
}

/// Expands a sparse keyframe list into the dense frame sequence.
///
/// Concatenates [`interpolate_segment`] over each consecutive pair of
/// keyframes, using the transition time of the segment's arrival keyframe.
/// The transition time of the first keyframe is ignored. Fewer than two
/// keyframes produce an empty sequence.
///
/// # Arguments
///
/// * `keyframes` - The ordered keyframe list.
/// * `fps` - Rendered frames per second of transition time.
pub fn interpolate_sequence(keyframes: &[CameraPosition], fps: u32) -> Vec<CameraPosition> {
    let mut frames = Vec::new();
    for pair in keyframes.windows(2) {
        frames.extend(interpolate_segment(
            &pair[0],
            &pair[1],
            pair[1].transition_time,
            fps,
        ));
    }
    frames
}
