//! Scrubber configuration.
//!
//! [`ScrubberConfig`] is a builder that carries the page-level settings of
//! a scrubber (frame server endpoint, slider geometry, preview size and
//! encoding, default step count) without threading them through every
//! call. It can also be loaded from JSON; missing keys keep their
//! defaults.
//!
//! # Example
//!
//! ```
//! use seekbar::{ImageFormat, ScrubberConfig};
//!
//! let config = ScrubberConfig::new()
//!     .with_base_url("http://localhost:1554/")
//!     .with_track_width(640)
//!     .with_image_format(ImageFormat::Png);
//!
//! let loaded = ScrubberConfig::from_json_str(r#"{ "track_width": 640 }"#)?;
//! assert_eq!(loaded.track_width, config.track_width);
//! # Ok::<(), seekbar::SeekbarError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SeekbarError;
use crate::mode::{DEFAULT_STEP_COUNT, MAX_STEP_COUNT, MIN_STEP_COUNT};
use crate::request::ImageFormat;

/// Settings shared by every seek a scrubber performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubberConfig {
    /// Frame server endpoint. Defaults to `/`.
    pub base_url: String,
    /// Slider track width in pixels. Defaults to 501.
    pub track_width: u32,
    /// Requested preview width; `-1` keeps the aspect ratio. Defaults to -1.
    pub preview_width: i32,
    /// Requested preview height. Defaults to 300.
    pub preview_height: i32,
    /// Preview encoding. Defaults to `jpeg60`.
    pub image_format: ImageFormat,
    /// Step count used when the step-count input is invalid. Defaults to 15.
    pub default_step_count: u32,
}

impl Default for ScrubberConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrubberConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self {
            base_url: "/".to_string(),
            track_width: 501,
            preview_width: -1,
            preview_height: 300,
            image_format: ImageFormat::default(),
            default_step_count: DEFAULT_STEP_COUNT,
        }
    }

    /// Parse a configuration from JSON. The default step count is clamped
    /// to 1–100 as in [`with_default_step_count`](Self::with_default_step_count).
    ///
    /// # Errors
    ///
    /// Returns [`SeekbarError::JsonError`] for malformed JSON and
    /// [`SeekbarError::InvalidTrackWidth`] for a zero track width.
    pub fn from_json_str(json: &str) -> Result<Self, SeekbarError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.validate()?;
        config.default_step_count = config
            .default_step_count
            .clamp(MIN_STEP_COUNT, MAX_STEP_COUNT);
        Ok(config)
    }

    /// Load a JSON configuration file.
    ///
    /// # Errors
    ///
    /// As [`from_json_str`](Self::from_json_str), plus
    /// [`SeekbarError::IoError`] if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SeekbarError> {
        let path = path.as_ref();
        log::debug!("Loading scrubber configuration from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check settings that would make pointer mapping meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`SeekbarError::InvalidTrackWidth`] if the track width is zero.
    pub fn validate(&self) -> Result<(), SeekbarError> {
        if self.track_width == 0 {
            return Err(SeekbarError::InvalidTrackWidth);
        }
        Ok(())
    }

    /// Set the frame server endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the slider track width. Clamped to a minimum of 1.
    #[must_use]
    pub fn with_track_width(mut self, width: u32) -> Self {
        self.track_width = width.max(1);
        self
    }

    /// Set the requested preview size. Use `-1` for either dimension to
    /// let the server derive it from the aspect ratio.
    #[must_use]
    pub fn with_preview_size(mut self, width: i32, height: i32) -> Self {
        self.preview_width = width;
        self.preview_height = height;
        self
    }

    /// Set the preview encoding.
    #[must_use]
    pub fn with_image_format(mut self, format: ImageFormat) -> Self {
        self.image_format = format;
        self
    }

    /// Set the fallback step count, clamped to 1–100.
    #[must_use]
    pub fn with_default_step_count(mut self, step_count: u32) -> Self {
        self.default_step_count = step_count.clamp(MIN_STEP_COUNT, MAX_STEP_COUNT);
        self
    }
}
