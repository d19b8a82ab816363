use std::path::{Path, PathBuf};

use flyby_camera::CameraPosition;
use flyby_interp::interpolate_sequence;

use crate::config::{MovieConfig, MOVIE_FILE_NAME};
use crate::error::MovieError;
use crate::traits::{VideoEncoder, Viewer};

/// How often the render loop reports progress, in frames.
const PROGRESS_EVERY: usize = 10;

/// Renders a keyframe list into a movie file.
///
/// Expands the keyframes into the dense frame sequence, drives the viewer
/// through every frame (camera write first, then screenshot), and hands the
/// numbered images to the encoder in ascending filename order. The
/// intermediate images are deleted only after the encoder has consumed all of
/// them; when encoding fails they are left in place so the frames can be
/// recovered or re-encoded manually.
///
/// # Arguments
///
/// * `viewer` - The live viewer to drive.
/// * `encoder` - The video encoder consuming the rendered frames.
/// * `keyframes` - The ordered keyframe list.
/// * `config` - Frame rate, output directory and loop flag.
///
/// # Returns
///
/// The path of the encoded movie file.
///
/// # Errors
///
/// [`MovieError::NoFrames`] when the keyframes expand to an empty sequence;
/// any error surfaced by the viewer, the encoder or the filesystem.
pub fn make_movie<V, E>(
    viewer: &mut V,
    encoder: &mut E,
    keyframes: &[CameraPosition],
    config: &MovieConfig,
) -> Result<PathBuf, MovieError>
where
    V: Viewer + ?Sized,
    E: VideoEncoder + ?Sized,
{
    std::fs::create_dir_all(&config.output_dir)?;

    let mut camera_path = keyframes.to_vec();
    if config.looped {
        if let Some(first) = camera_path.first().copied() {
            camera_path.push(first);
        }
    }

    let frames = interpolate_sequence(&camera_path, config.fps);
    if frames.is_empty() {
        return Err(MovieError::NoFrames);
    }

    log::info!(
        "rendering {} frames into {}",
        frames.len(),
        config.output_dir.display()
    );

    for (i, frame) in frames.iter().enumerate() {
        // the screenshot must observe this frame's camera state
        frame.apply(viewer.camera_mut());
        viewer.screenshot(&frame_path(&config.output_dir, i))?;

        if i % PROGRESS_EVERY == 0 {
            log::info!("rendered frame {} of {}", i, frames.len());
        }
    }

    let frame_files = collect_frame_files(&config.output_dir)?;
    let movie_path = config.output_dir.join(MOVIE_FILE_NAME);
    encoder.encode(&frame_files, config.fps, &movie_path)?;

    // the encoder has consumed every frame; only now drop the intermediates
    for file in &frame_files {
        std::fs::remove_file(file)?;
    }

    Ok(movie_path)
}

/// Path of the intermediate image for frame `index`, zero-padded so that
/// filename order equals render order.
pub(crate) fn frame_path(output_dir: &Path, index: usize) -> PathBuf {
    output_dir.join(format!("{:05}.png", index))
}

/// Every `.png` file in `output_dir`, in ascending filename order.
fn collect_frame_files(output_dir: &Path) -> Result<Vec<PathBuf>, MovieError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(output_dir)? {
        let path = entry?.path();
        if path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("png"))
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::frame_path;
    use std::path::Path;

    #[test]
    fn frame_paths_are_zero_padded() {
        let dir = Path::new("out");
        assert_eq!(frame_path(dir, 0), dir.join("00000.png"));
        assert_eq!(frame_path(dir, 7), dir.join("00007.png"));
        assert_eq!(frame_path(dir, 12345), dir.join("12345.png"));
    }

    #[test]
    fn frame_paths_sort_in_render_order() {
        let dir = Path::new("out");
        let mut paths: Vec<_> = (0..120).rev().map(|i| frame_path(dir, i)).collect();
        paths.sort();

        for (i, path) in paths.iter().enumerate() {
            assert_eq!(*path, frame_path(dir, i));
        }
    }
}
