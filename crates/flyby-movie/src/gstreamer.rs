use std::path::{Path, PathBuf};

use gst::prelude::*;

use crate::error::MovieError;
use crate::traits::VideoEncoder;

/// A [`VideoEncoder`] backed by a GStreamer H.264 pipeline.
///
/// Decodes each intermediate PNG frame and pushes it through
/// `appsrc ! videoconvert ! x264enc ! h264parse ! mp4mux ! filesink`. The
/// pipeline caps are sized from the first frame; every later frame must have
/// the same dimensions.
#[derive(Debug, Default)]
pub struct GstEncoder {}

impl GstEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self {}
    }
}

impl VideoEncoder for GstEncoder {
    fn encode(
        &mut self,
        frames: &[PathBuf],
        fps: u32,
        file_path: &Path,
    ) -> Result<(), MovieError> {
        let Some(first) = frames.first() else {
            return Err(MovieError::NoFrames);
        };

        gst::init()?;

        let (_, width, height) = read_png_rgb8(first)?;

        let location = if cfg!(windows) {
            file_path.to_string_lossy().replace('\\', "/")
        } else {
            file_path.to_string_lossy().into_owned()
        };

        let pipeline_str = format!(
            "appsrc name=src ! \
            videoconvert ! video/x-raw,format=I420 ! \
            x264enc ! \
            video/x-h264,profile=main ! \
            h264parse ! \
            mp4mux ! \
            filesink location=\"{}\"",
            location
        );
        log::debug!("encoder pipeline: {}", pipeline_str);

        let pipeline = gst::parse::launch(&pipeline_str)?
            .dynamic_cast::<gst::Pipeline>()
            .map_err(MovieError::DowncastPipelineError)?;

        let appsrc = pipeline
            .by_name("src")
            .ok_or(MovieError::GetElementByNameError)?
            .dynamic_cast::<gst_app::AppSrc>()
            .map_err(MovieError::DowncastPipelineError)?;

        appsrc.set_format(gst::Format::Time);
        let caps = gst::Caps::builder("video/x-raw")
            .field("format", "RGB")
            .field("width", width as i32)
            .field("height", height as i32)
            .field("framerate", gst::Fraction::new(fps as i32, 1))
            .build();
        appsrc.set_caps(Some(&caps));
        appsrc.set_is_live(true);
        appsrc.set_property("block", false);

        pipeline.set_state(gst::State::Playing)?;

        if let Err(err) = push_frames(&appsrc, frames, fps, width, height) {
            let _ = pipeline.set_state(gst::State::Null);
            return Err(err);
        }

        // drain the bus until the muxer has flushed the file
        let bus = match pipeline.bus() {
            Some(bus) => bus,
            None => {
                let _ = pipeline.set_state(gst::State::Null);
                return Err(MovieError::BusError);
            }
        };
        for msg in bus.iter_timed(gst::ClockTime::NONE) {
            match msg.view() {
                gst::MessageView::Eos(..) => break,
                gst::MessageView::Error(err) => {
                    let _ = pipeline.set_state(gst::State::Null);
                    return Err(MovieError::EncodeError(format!(
                        "{} ({:?})",
                        err.error(),
                        err.debug()
                    )));
                }
                _ => {}
            }
        }

        pipeline.set_state(gst::State::Null)?;
        Ok(())
    }
}

/// Decode every frame and push it into the pipeline with a frame-accurate
/// timestamp, ending the stream afterwards.
fn push_frames(
    appsrc: &gst_app::AppSrc,
    frames: &[PathBuf],
    fps: u32,
    width: u32,
    height: u32,
) -> Result<(), MovieError> {
    for (counter, frame_path) in frames.iter().enumerate() {
        let (data, frame_width, frame_height) = read_png_rgb8(frame_path)?;
        if (frame_width, frame_height) != (width, height) {
            return Err(MovieError::InvalidConfig(format!(
                "frame {} is {}x{}, expected {}x{}",
                frame_path.display(),
                frame_width,
                frame_height,
                width,
                height
            )));
        }

        let mut buffer = gst::Buffer::from_mut_slice(data);
        {
            let buffer_ref = buffer.get_mut().ok_or_else(|| {
                MovieError::InvalidConfig("Failed to get mutable buffer reference".to_string())
            })?;
            let pts = gst::ClockTime::from_nseconds(counter as u64 * 1_000_000_000 / fps as u64);
            let duration = gst::ClockTime::from_nseconds(1_000_000_000 / fps as u64);
            buffer_ref.set_pts(Some(pts));
            buffer_ref.set_duration(Some(duration));
        }
        appsrc
            .push_buffer(buffer)
            .map_err(MovieError::GstreamerFlowError)?;
    }

    appsrc
        .end_of_stream()
        .map_err(MovieError::GstreamerFlowError)?;
    Ok(())
}

/// Read a PNG frame as tightly packed rgb8 pixel data.
///
/// Rgba input is accepted and its alpha channel dropped, since viewers
/// commonly screenshot with an alpha plane.
fn read_png_rgb8(file_path: &Path) -> Result<(Vec<u8>, u32, u32), MovieError> {
    let file = std::fs::File::open(file_path)?;
    let mut reader = png::Decoder::new(std::io::BufReader::new(file))
        .read_info()
        .map_err(|e| MovieError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| MovieError::PngDecodeError(e.to_string()))?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(MovieError::PngDecodeError(format!(
            "expected an 8-bit frame, got {:?}",
            info.bit_depth
        )));
    }

    let buf = match info.color_type {
        png::ColorType::Rgb => buf,
        png::ColorType::Rgba => buf
            .chunks_exact(4)
            .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
            .collect(),
        other => {
            return Err(MovieError::PngDecodeError(format!(
                "expected an rgb8 or rgba8 frame, got {:?}",
                other
            )))
        }
    };

    Ok((buf, info.width, info.height))
}
