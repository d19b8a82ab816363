use std::path::{Path, PathBuf};

use flyby_camera::{CameraPosition, ViewerCamera};
use flyby_interp::interpolate_sequence;
use flyby_movie::{make_movie, MovieConfig, MovieError, RecordingSession, VideoEncoder, Viewer};

#[derive(Default)]
struct FakeCamera {
    center: [f64; 3],
    angles: [f64; 3],
    zoom: f64,
    perspective: f64,
}

impl ViewerCamera for FakeCamera {
    fn center(&self) -> [f64; 3] {
        self.center
    }
    fn angles(&self) -> [f64; 3] {
        self.angles
    }
    fn zoom(&self) -> f64 {
        self.zoom
    }
    fn perspective(&self) -> f64 {
        self.perspective
    }
    fn set_center(&mut self, center: [f64; 3]) {
        self.center = center;
    }
    fn set_angles(&mut self, angles: [f64; 3]) {
        self.angles = angles;
    }
    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
    }
    fn set_perspective(&mut self, perspective: f64) {
        self.perspective = perspective;
    }
}

/// Writes a placeholder image per screenshot and remembers the camera state
/// it observed at that moment.
#[derive(Default)]
struct FakeViewer {
    camera: FakeCamera,
    shots: Vec<(CameraPosition, PathBuf)>,
}

impl Viewer for FakeViewer {
    fn camera(&self) -> &dyn ViewerCamera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut dyn ViewerCamera {
        &mut self.camera
    }

    fn screenshot(&mut self, path: &Path) -> Result<(), MovieError> {
        let observed = CameraPosition::from_camera(&self.camera, 0.0);
        std::fs::write(path, b"frame")?;
        self.shots.push((observed, path.to_path_buf()));
        Ok(())
    }
}

/// Records its invocations; writes the movie file on success.
#[derive(Default)]
struct FakeEncoder {
    calls: Vec<(Vec<PathBuf>, u32, PathBuf)>,
    fail: bool,
}

impl VideoEncoder for FakeEncoder {
    fn encode(
        &mut self,
        frames: &[PathBuf],
        fps: u32,
        file_path: &Path,
    ) -> Result<(), MovieError> {
        self.calls
            .push((frames.to_vec(), fps, file_path.to_path_buf()));
        if self.fail {
            return Err(MovieError::EncodeError("encoder exploded".to_string()));
        }
        std::fs::write(file_path, b"movie")?;
        Ok(())
    }
}

fn position(center: [f64; 3], angles: [f64; 3], transition_time: f64) -> CameraPosition {
    CameraPosition {
        center,
        angles,
        zoom: 1.0,
        perspective: 0.0,
        transition_time,
    }
}

fn config(output_dir: PathBuf) -> MovieConfig {
    MovieConfig {
        fps: 60,
        output_dir,
        looped: false,
    }
}

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn renders_frames_in_order_and_cleans_up() -> Result<(), MovieError> {
    let tmp_dir = tempfile::tempdir()?;
    let output_dir = tmp_dir.path().join("movie-out");

    let keyframes = [
        position([0.0, 0.0, 0.0], [0.0, 0.0, 0.0], 0.0),
        position([1.0, 1.0, 1.0], [90.0, 0.0, 0.0], 0.1),
    ];

    let mut viewer = FakeViewer::default();
    let mut encoder = FakeEncoder::default();
    let movie_path = make_movie(&mut viewer, &mut encoder, &keyframes, &config(output_dir.clone()))?;

    // only the movie survives in the output directory
    assert_eq!(movie_path, output_dir.join("movie.mp4"));
    assert!(movie_path.exists());
    assert_eq!(dir_entries(&output_dir), vec!["movie.mp4"]);

    // the encoder saw all six frames, zero-padded, in render order
    assert_eq!(encoder.calls.len(), 1);
    let (frames, fps, target) = &encoder.calls[0];
    assert_eq!(*fps, 60);
    assert_eq!(*target, movie_path);
    let expected: Vec<PathBuf> = (0..6)
        .map(|i| output_dir.join(format!("{:05}.png", i)))
        .collect();
    assert_eq!(*frames, expected);

    // each screenshot observed the camera state of its own frame
    let dense = interpolate_sequence(&keyframes, 60);
    assert_eq!(viewer.shots.len(), dense.len());
    for (shot, frame) in viewer.shots.iter().zip(&dense) {
        assert_eq!(shot.0, *frame);
    }

    Ok(())
}

#[test]
fn encoder_failure_preserves_frames() -> Result<(), MovieError> {
    let tmp_dir = tempfile::tempdir()?;
    let output_dir = tmp_dir.path().join("movie-out");

    let keyframes = [
        position([0.0, 0.0, 0.0], [0.0, 0.0, 0.0], 0.0),
        position([1.0, 1.0, 1.0], [90.0, 0.0, 0.0], 0.1),
    ];

    let mut viewer = FakeViewer::default();
    let mut encoder = FakeEncoder {
        fail: true,
        ..FakeEncoder::default()
    };
    let result = make_movie(&mut viewer, &mut encoder, &keyframes, &config(output_dir.clone()));

    assert!(matches!(result, Err(MovieError::EncodeError(_))));

    // every intermediate frame is still there for manual recovery
    let expected: Vec<String> = (0..6).map(|i| format!("{:05}.png", i)).collect();
    assert_eq!(dir_entries(&output_dir), expected);
    Ok(())
}

#[test]
fn too_few_keyframes_is_a_distinct_error() -> Result<(), MovieError> {
    let tmp_dir = tempfile::tempdir()?;

    let mut viewer = FakeViewer::default();
    let mut encoder = FakeEncoder::default();

    for keyframes in [
        Vec::new(),
        vec![position([0.0; 3], [0.0; 3], 1.0)],
        // a pair with no transition time expands to nothing as well
        vec![
            position([0.0; 3], [0.0; 3], 0.0),
            position([1.0; 3], [0.0; 3], 0.0),
        ],
    ] {
        let output_dir = tmp_dir.path().join("movie-out");
        let result = make_movie(&mut viewer, &mut encoder, &keyframes, &config(output_dir));
        assert!(matches!(result, Err(MovieError::NoFrames)));
    }

    // the viewer and the encoder were never touched
    assert!(viewer.shots.is_empty());
    assert!(encoder.calls.is_empty());
    Ok(())
}

#[test]
fn loop_flag_matches_explicit_closing_keyframe() -> Result<(), MovieError> {
    let tmp_dir = tempfile::tempdir()?;

    let k0 = position([0.0, 0.0, 0.0], [0.0, 0.0, 0.0], 0.1);
    let k1 = position([1.0, 0.0, 0.0], [90.0, 0.0, 0.0], 0.05);
    let k2 = position([0.0, 1.0, 0.0], [-179.0, 0.0, 0.0], 0.05);

    let looped_dir = tmp_dir.path().join("looped");
    let mut looped_config = config(looped_dir.clone());
    looped_config.looped = true;

    let mut looped_viewer = FakeViewer::default();
    let mut looped_encoder = FakeEncoder::default();
    make_movie(
        &mut looped_viewer,
        &mut looped_encoder,
        &[k0, k1, k2],
        &looped_config,
    )?;

    let closed_dir = tmp_dir.path().join("closed");
    let mut closed_viewer = FakeViewer::default();
    let mut closed_encoder = FakeEncoder::default();
    make_movie(
        &mut closed_viewer,
        &mut closed_encoder,
        &[k0, k1, k2, k0],
        &config(closed_dir),
    )?;

    assert_eq!(looped_viewer.shots.len(), closed_viewer.shots.len());
    for (looped_shot, closed_shot) in looped_viewer.shots.iter().zip(&closed_viewer.shots) {
        assert_eq!(looped_shot.0, closed_shot.0);
        assert_eq!(
            looped_shot.1.file_name(),
            closed_shot.1.file_name()
        );
    }
    Ok(())
}

#[test]
fn session_records_and_renders() -> Result<(), MovieError> {
    let tmp_dir = tempfile::tempdir()?;
    let output_dir = tmp_dir.path().join("movie-out");

    let mut session = RecordingSession::new(FakeViewer::default(), config(output_dir.clone()));

    session.append_position(0.0);

    // move the camera before the next capture
    let camera = session.viewer_mut().camera_mut();
    camera.set_center([1.0, 2.0, 3.0]);
    camera.set_angles([45.0, 0.0, 0.0]);
    camera.set_zoom(2.0);
    session.append_position(0.1);

    assert_eq!(session.keyframes().len(), 2);
    assert_eq!(session.keyframes()[1].center, [1.0, 2.0, 3.0]);
    assert_eq!(session.keyframes()[1].transition_time, 0.1);

    let mut encoder = FakeEncoder::default();
    let movie_path = session.make_movie(&mut encoder)?;
    assert!(movie_path.exists());
    assert_eq!(encoder.calls[0].0.len(), 6);
    Ok(())
}

#[test]
fn session_saves_and_reloads_keyframes() -> Result<(), MovieError> {
    let tmp_dir = tempfile::tempdir()?;
    let file_path = tmp_dir.path().join("movie.json");

    let mut session = RecordingSession::new(
        FakeViewer::default(),
        config(tmp_dir.path().join("movie-out")),
    );
    session.append_position(0.0);
    session.viewer_mut().camera_mut().set_zoom(3.0);
    session.append_position(1.0);

    let recorded = session.keyframes().to_vec();
    session.save_keyframes(&file_path)?;

    session.clear();
    assert!(session.keyframes().is_empty());

    session.load_keyframes(&file_path)?;
    assert_eq!(session.keyframes(), recorded.as_slice());
    Ok(())
}
