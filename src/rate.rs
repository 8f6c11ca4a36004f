//! Frame rates.
//!
//! Frame servers report rates either as rationals (`30000/1001`) or as
//! rounded decimals (`29.97`). [`FrameRate`] normalises both to a rational
//! and records whether timecode for the rate uses SMPTE drop-frame
//! counting.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::error::SeekbarError;

/// NTSC rates expressed as `n * 1000 / 1001`.
const NTSC_BASES: [u32; 5] = [24, 30, 48, 60, 120];

/// A video frame rate as a reduced rational.
///
/// # Example
///
/// ```
/// use seekbar::FrameRate;
///
/// let ntsc: FrameRate = "29.97".parse()?;
/// assert_eq!((ntsc.numerator(), ntsc.denominator()), (30000, 1001));
/// assert!(ntsc.is_drop_frame());
/// assert_eq!(ntsc.timebase(), 30);
/// # Ok::<(), seekbar::SeekbarError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRate {
    numerator: u32,
    denominator: u32,
    drop_frame: bool,
}

impl FrameRate {
    /// Create a rate from a numerator and denominator.
    ///
    /// Drop-frame counting is enabled automatically for 29.97 fps.
    ///
    /// # Errors
    ///
    /// Returns [`SeekbarError::InvalidFrameRate`] if either part is zero.
    pub fn new(numerator: u32, denominator: u32) -> Result<Self, SeekbarError> {
        if numerator == 0 || denominator == 0 {
            return Err(SeekbarError::InvalidFrameRate(format!(
                "{numerator}/{denominator}"
            )));
        }
        let divisor = gcd(numerator, denominator);
        let mut rate = Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
            drop_frame: false,
        };
        rate.drop_frame = is_ntsc_30(rate.as_f64());
        Ok(rate)
    }

    /// Create a rate from a decimal frames-per-second value.
    ///
    /// Values within 0.005 of an NTSC rate (23.976, 29.97, 59.94, ...) map
    /// to the exact `n*1000/1001` rational. Everything else is kept to
    /// millisecond precision.
    ///
    /// # Errors
    ///
    /// Returns [`SeekbarError::InvalidFrameRate`] for non-finite or
    /// non-positive values.
    pub fn from_fps(frames_per_second: f64) -> Result<Self, SeekbarError> {
        if !frames_per_second.is_finite() || frames_per_second <= 0.0 {
            return Err(SeekbarError::InvalidFrameRate(frames_per_second.to_string()));
        }

        for base in NTSC_BASES {
            let ntsc = f64::from(base) * 1000.0 / 1001.0;
            if (frames_per_second - ntsc).abs() < 0.005 {
                return Self::new(base * 1000, 1001);
            }
        }

        let thousandths = (frames_per_second * 1000.0).round();
        if thousandths < 1.0 || thousandths > f64::from(u32::MAX) {
            return Err(SeekbarError::InvalidFrameRate(frames_per_second.to_string()));
        }
        Self::new(thousandths as u32, 1000)
    }

    /// Override drop-frame counting.
    ///
    /// Only 29.97 fps supports drop-frame timecode; requests to enable it
    /// for any other rate are ignored.
    #[must_use]
    pub fn with_drop_frame(mut self, drop_frame: bool) -> Self {
        self.drop_frame = drop_frame && is_ntsc_30(self.as_f64());
        self
    }

    /// Rate numerator.
    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    /// Rate denominator.
    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Whether timecode for this rate skips frame labels 0 and 1 at the
    /// start of each minute not divisible by ten.
    pub fn is_drop_frame(&self) -> bool {
        self.drop_frame
    }

    /// Frames per second as a float.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    /// Integer frame labels per timecode second, `ceil(fps)`.
    pub fn timebase(&self) -> u64 {
        self.numerator.div_ceil(self.denominator) as u64
    }
}

impl Display for FrameRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:.2}", self.as_f64())
    }
}

impl FromStr for FrameRate {
    type Err = SeekbarError;

    /// Parse `"25"`, `"29.97"` or `"30000/1001"`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let invalid = || SeekbarError::InvalidFrameRate(trimmed.to_string());

        if let Some((numerator, denominator)) = trimmed.split_once('/') {
            let numerator = numerator.trim().parse::<u32>().map_err(|_| invalid())?;
            let denominator = denominator.trim().parse::<u32>().map_err(|_| invalid())?;
            return Self::new(numerator, denominator);
        }

        let frames_per_second = trimmed.parse::<f64>().map_err(|_| invalid())?;
        Self::from_fps(frames_per_second)
    }
}

fn is_ntsc_30(frames_per_second: f64) -> bool {
    (frames_per_second * 100.0).round() as i64 == 2997
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
