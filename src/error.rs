//! Error types for the `seekbar` crate.
//!
//! This module defines [`SeekbarError`], the unified error type returned by
//! the fallible parts of the crate: parsing frame rates, timecodes and image
//! formats, loading configuration, writing seek pages and (with the
//! `ffmpeg` feature) probing media files.
//!
//! The interactive path (pointer mapping, seeking, mode switching) never
//! fails. Out-of-range pointer positions are clamped and preview image
//! loads are fire-and-forget.

use std::io::Error as IoError;
#[cfg(feature = "ffmpeg")]
use std::path::PathBuf;

use serde_json::Error as JsonError;
use thiserror::Error;

/// The unified error type for all `seekbar` operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SeekbarError {
    /// A frame rate could not be parsed or is not positive.
    #[error("Invalid frame rate: {0}")]
    InvalidFrameRate(String),

    /// A timecode string could not be parsed, or a field is out of range
    /// for the frame rate.
    #[error("Invalid timecode: {0}")]
    InvalidTimecode(String),

    /// The slider track has zero width.
    #[error("Track width must be greater than zero")]
    InvalidTrackWidth,

    /// An image format token is not recognised by the frame server.
    #[error("Unsupported image format: {0}")]
    InvalidImageFormat(String),

    /// The clip has no frames to scrub through.
    #[error("Clip has no frames")]
    EmptyClip,

    /// A frame number exceeds the clip's frame count.
    #[error("Frame {frame_number} is out of range (clip has {total_frames} frames)")]
    FrameOutOfRange {
        /// The frame number that was requested.
        frame_number: u64,
        /// The total number of frames in the clip.
        total_frames: u64,
    },

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),

    /// Configuration or report JSON could not be (de)serialized.
    #[error("JSON error: {0}")]
    JsonError(#[from] JsonError),

    /// The media file could not be opened.
    #[cfg(feature = "ffmpeg")]
    #[error("Failed to open media file at {path}: {reason}")]
    FileOpen {
        /// Path that was passed to [`crate::ClipInfo::probe`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The file does not contain a video stream.
    #[cfg(feature = "ffmpeg")]
    #[error("No video stream found in file")]
    NoVideoStream,

    /// An error originating from the FFmpeg libraries.
    #[cfg(feature = "ffmpeg")]
    #[error("FFmpeg error: {0}")]
    FfmpegError(String),
}

#[cfg(feature = "ffmpeg")]
impl From<ffmpeg_next::Error> for SeekbarError {
    fn from(error: ffmpeg_next::Error) -> Self {
        SeekbarError::FfmpegError(error.to_string())
    }
}
