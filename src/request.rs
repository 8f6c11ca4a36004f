//! Preview image requests.
//!
//! A seek asks the frame server for a still of the target frame with a GET
//! request of the form
//! `<base_url>?file=<id>&frame=<n>&w=<width>&h=<height>&format=<fmt>`.
//! [`PreviewRequest`] holds those parameters and renders the URL.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeekbarError;

/// Image encoding requested from the frame server.
///
/// Tokens match the server's `format=` query values. JPEG may carry a
/// quality suffix (`jpeg60`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ImageFormat {
    /// JPEG, optionally with an explicit quality (1–100).
    Jpeg {
        /// Encoder quality; `None` leaves it to the server.
        quality: Option<u8>,
    },
    /// PNG.
    Png,
    /// Binary PPM.
    Ppm,
    /// Raw packed RGB.
    Rgb,
    /// Raw packed RGBA.
    Rgba,
}

impl Default for ImageFormat {
    fn default() -> Self {
        ImageFormat::Jpeg { quality: Some(60) }
    }
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ImageFormat::Jpeg { quality: Some(quality) } => write!(f, "jpeg{quality}"),
            ImageFormat::Jpeg { quality: None } => f.write_str("jpeg"),
            ImageFormat::Png => f.write_str("png"),
            ImageFormat::Ppm => f.write_str("ppm"),
            ImageFormat::Rgb => f.write_str("rgb"),
            ImageFormat::Rgba => f.write_str("rgba"),
        }
    }
}

impl FromStr for ImageFormat {
    type Err = SeekbarError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lower = value.trim().to_ascii_lowercase();
        let format = match lower.as_str() {
            "jpeg" | "jpg" => ImageFormat::Jpeg { quality: None },
            "png" => ImageFormat::Png,
            "ppm" => ImageFormat::Ppm,
            "rgb" | "raw" => ImageFormat::Rgb,
            "rgba" => ImageFormat::Rgba,
            other => {
                let quality = other
                    .strip_prefix("jpeg")
                    .or_else(|| other.strip_prefix("jpg"))
                    .and_then(|digits| digits.parse::<u8>().ok())
                    .filter(|quality| (1..=100).contains(quality))
                    .ok_or_else(|| SeekbarError::InvalidImageFormat(value.to_string()))?;
                ImageFormat::Jpeg {
                    quality: Some(quality),
                }
            }
        };
        Ok(format)
    }
}

impl TryFrom<String> for ImageFormat {
    type Error = SeekbarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ImageFormat> for String {
    fn from(format: ImageFormat) -> Self {
        format.to_string()
    }
}

/// One preview image request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRequest {
    /// Endpoint the query string is appended to.
    pub base_url: String,
    /// Identifier of the clip on the frame server (unescaped).
    pub file_id: String,
    /// Frame to render.
    pub frame: u64,
    /// Output width; `-1` lets the server keep the aspect ratio.
    pub width: i32,
    /// Output height; `-1` lets the server keep the aspect ratio.
    pub height: i32,
    /// Output encoding.
    pub format: ImageFormat,
}

impl PreviewRequest {
    /// Render the GET URL. The file id is percent-encoded.
    pub fn to_url(&self) -> String {
        format!(
            "{}?file={}&frame={}&w={}&h={}&format={}",
            self.base_url,
            urlencoding::encode(&self.file_id),
            self.frame,
            self.width,
            self.height,
            self.format,
        )
    }
}

impl Display for PreviewRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.to_url())
    }
}
