//! Clip information.
//!
//! [`ClipInfo`] is what the hosting page knows about the clip being
//! scrubbed: its id on the frame server, its frame rate and frame count,
//! and (for the info line of the seek page) its geometry.

use crate::error::SeekbarError;
use crate::rate::FrameRate;
use crate::timecode::{Timecode, format_timecode};

/// A clip served by the frame server.
///
/// # Example
///
/// ```
/// use seekbar::{ClipInfo, FrameRate};
///
/// let clip = ClipInfo::new("robin.avi", FrameRate::new(25, 1)?, 1500)?
///     .with_geometry(720, 576);
/// assert_eq!(clip.last_frame(), 1499);
/// assert_eq!(clip.initial_frame(), 500);
/// assert_eq!(clip.duration().to_string(), "00:01:00:00");
/// # Ok::<(), seekbar::SeekbarError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClipInfo {
    /// Identifier passed as `file=` to the frame server.
    pub file_id: String,
    /// Frame rate.
    pub frame_rate: FrameRate,
    /// Number of frames; frame indices run `0..frame_count`.
    pub frame_count: u64,
    /// Frame width in pixels (0 when unknown).
    pub width: u32,
    /// Frame height in pixels (0 when unknown).
    pub height: u32,
    /// Display aspect ratio (0 when unknown).
    pub aspect_ratio: f64,
}

impl ClipInfo {
    /// Describe a clip.
    ///
    /// # Errors
    ///
    /// Returns [`SeekbarError::EmptyClip`] if `frame_count` is zero.
    pub fn new(
        file_id: impl Into<String>,
        frame_rate: FrameRate,
        frame_count: u64,
    ) -> Result<Self, SeekbarError> {
        if frame_count == 0 {
            return Err(SeekbarError::EmptyClip);
        }
        Ok(Self {
            file_id: file_id.into(),
            frame_rate,
            frame_count,
            width: 0,
            height: 0,
            aspect_ratio: 0.0,
        })
    }

    /// Set frame dimensions. The aspect ratio follows unless set later.
    #[must_use]
    pub fn with_geometry(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        if height > 0 {
            self.aspect_ratio = f64::from(width) / f64::from(height);
        }
        self
    }

    /// Set the display aspect ratio.
    #[must_use]
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Index of the last frame.
    pub fn last_frame(&self) -> u64 {
        self.frame_count.saturating_sub(1)
    }

    /// Frame the seek page opens on, a third of the way in.
    pub fn initial_frame(&self) -> u64 {
        self.frame_count / 3
    }

    /// Clip length as timecode.
    pub fn duration(&self) -> Timecode {
        format_timecode(self.frame_count, &self.frame_rate)
    }

    /// Check that `frame_number` names a frame of this clip.
    ///
    /// # Errors
    ///
    /// Returns [`SeekbarError::FrameOutOfRange`] otherwise.
    pub fn check_frame(&self, frame_number: u64) -> Result<u64, SeekbarError> {
        if frame_number >= self.frame_count {
            return Err(SeekbarError::FrameOutOfRange {
                frame_number,
                total_frames: self.frame_count,
            });
        }
        Ok(frame_number)
    }
}
