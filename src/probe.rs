//! Clip probing with FFmpeg.
//!
//! Available with the `ffmpeg` feature. [`ClipInfo::probe`] opens a media
//! file, reads the best video stream's rate, frame count and geometry, and
//! closes the demuxer again.

use std::path::Path;
use std::time::Duration;

use ffmpeg_next::{codec::context::Context as CodecContext, media::Type};

use crate::clip::ClipInfo;
use crate::error::SeekbarError;
use crate::rate::FrameRate;

impl ClipInfo {
    /// Probe a media file. The path (as given) becomes the file id.
    ///
    /// The frame count is the stream's own count when the container
    /// reports one, otherwise duration × frame rate.
    ///
    /// # Errors
    ///
    /// Returns [`SeekbarError::FileOpen`] if the file cannot be opened,
    /// [`SeekbarError::NoVideoStream`] if it has no video,
    /// [`SeekbarError::InvalidFrameRate`] if the stream reports no rate and
    /// [`SeekbarError::EmptyClip`] if no frame count can be derived.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use seekbar::ClipInfo;
    ///
    /// let clip = ClipInfo::probe("input.mp4")?;
    /// println!("{} frames @ {} fps", clip.frame_count, clip.frame_rate);
    /// # Ok::<(), seekbar::SeekbarError>(())
    /// ```
    pub fn probe<P: AsRef<Path>>(path: P) -> Result<Self, SeekbarError> {
        let path = path.as_ref();
        log::debug!("Probing media file: {}", path.display());

        ffmpeg_next::init().map_err(|error| SeekbarError::FileOpen {
            path: path.to_path_buf(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        let input_context =
            ffmpeg_next::format::input(&path).map_err(|error| SeekbarError::FileOpen {
                path: path.to_path_buf(),
                reason: error.to_string(),
            })?;

        let stream = input_context
            .streams()
            .best(Type::Video)
            .ok_or(SeekbarError::NoVideoStream)?;

        let mut rate = stream.avg_frame_rate();
        if rate.numerator() <= 0 || rate.denominator() <= 0 {
            rate = stream.rate();
        }
        if rate.numerator() <= 0 || rate.denominator() <= 0 {
            return Err(SeekbarError::InvalidFrameRate(format!(
                "{}/{}",
                rate.numerator(),
                rate.denominator()
            )));
        }
        let frame_rate = FrameRate::new(rate.numerator() as u32, rate.denominator() as u32)?;

        let decoder = CodecContext::from_parameters(stream.parameters())?
            .decoder()
            .video()?;
        let width = decoder.width();
        let height = decoder.height();
        let sample_aspect = decoder.aspect_ratio();

        let frame_count = if stream.frames() > 0 {
            stream.frames() as u64
        } else {
            let microseconds = input_context.duration();
            let duration = if microseconds > 0 {
                Duration::from_micros(microseconds as u64)
            } else {
                Duration::ZERO
            };
            (duration.as_secs_f64() * frame_rate.as_f64()) as u64
        };

        let file_id = path.to_string_lossy().into_owned();
        let mut clip = ClipInfo::new(file_id, frame_rate, frame_count)?.with_geometry(width, height);
        if sample_aspect.numerator() > 0 && sample_aspect.denominator() > 0 && height > 0 {
            let pixel_aspect =
                f64::from(sample_aspect.numerator()) / f64::from(sample_aspect.denominator());
            clip = clip.with_aspect_ratio(f64::from(width) * pixel_aspect / f64::from(height));
        }

        log::debug!(
            "Probed {}: {}x{} @ {} fps, {} frames",
            clip.file_id,
            clip.width,
            clip.height,
            clip.frame_rate,
            clip.frame_count,
        );
        Ok(clip)
    }
}
