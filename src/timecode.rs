//! SMPTE timecode formatting.
//!
//! [`format_timecode`] converts a frame number into hour, minute, second
//! and frame fields. Rates whose [`FrameRate::is_drop_frame`] is set use
//! SMPTE drop-frame counting: frame labels `00` and `01` are skipped at the
//! start of every minute except every tenth, which keeps 29.97 fps
//! timecode aligned with wall-clock time.
//!
//! # Example
//!
//! ```
//! use seekbar::{FrameRate, format_timecode};
//!
//! let rate = FrameRate::new(25, 1)?;
//! assert_eq!(format_timecode(90_061, &rate).to_string(), "01:00:02:11");
//!
//! let ntsc: FrameRate = "29.97".parse()?;
//! assert_eq!(format_timecode(1800, &ntsc).to_string(), "00:01:00:02");
//! # Ok::<(), seekbar::SeekbarError>(())
//! ```

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::error::SeekbarError;
use crate::rate::FrameRate;
use crate::view::DisplayField;

/// Frames in ten minutes of 29.97 drop-frame video.
const FRAMES_PER_TEN_MINUTES: u64 = 17_982;
/// Frames in a minute that drops two labels.
const FRAMES_PER_DROP_MINUTE: u64 = 1_798;
/// Labels skipped per ten minutes (two in nine of every ten minutes).
const DROPPED_PER_TEN_MINUTES: u64 = 18;
const DROPPED_PER_MINUTE: u64 = 2;
const DROP_FRAME_TIMEBASE: u64 = 30;

/// A timecode split into display fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Timecode {
    /// Hours, unbounded.
    pub hours: u64,
    /// Minutes, `0..60`.
    pub minutes: u32,
    /// Seconds, `0..60`.
    pub seconds: u32,
    /// Frame label within the second, `0..timebase`.
    pub frames: u32,
}

/// Convert a frame number to timecode.
///
/// Pure; the standard path divides by `ceil(fps)`, the drop-frame path
/// renumbers the frame before dividing by 30.
pub fn format_timecode(frame_number: u64, rate: &FrameRate) -> Timecode {
    let (total_seconds, frames) = if rate.is_drop_frame() {
        let tens = frame_number / FRAMES_PER_TEN_MINUTES;
        let remainder = frame_number % FRAMES_PER_TEN_MINUTES;
        // The first minute of each ten-minute block keeps all labels.
        let dropped_minutes = remainder.saturating_sub(2) / FRAMES_PER_DROP_MINUTE;
        // Renumbering adds about 0.1% and can leave `u64` near the top of
        // the range; the quotient by 30 always fits again.
        let labelled = u128::from(frame_number)
            + u128::from(DROPPED_PER_TEN_MINUTES * tens)
            + u128::from(DROPPED_PER_MINUTE * dropped_minutes);
        let timebase = u128::from(DROP_FRAME_TIMEBASE);
        (
            (labelled / timebase) as u64,
            (labelled % timebase) as u64,
        )
    } else {
        let timebase = rate.timebase();
        (frame_number / timebase, frame_number % timebase)
    };

    Timecode {
        hours: total_seconds / 3600,
        minutes: ((total_seconds / 60) % 60) as u32,
        seconds: (total_seconds % 60) as u32,
        frames: frames as u32,
    }
}

impl Timecode {
    /// Zero-padded text for one display field.
    pub fn field(&self, field: DisplayField) -> String {
        match field {
            DisplayField::Hours => format!("{:02}", self.hours),
            DisplayField::Minutes => format!("{:02}", self.minutes),
            DisplayField::Seconds => format!("{:02}", self.seconds),
            DisplayField::Frames => format!("{:02}", self.frames),
        }
    }

    /// All four fields in page order (frame, seconds, minutes, hours).
    pub fn fields(&self) -> [(DisplayField, String); 4] {
        DisplayField::ALL.map(|field| (field, self.field(field)))
    }

    /// Convert back to a frame number.
    ///
    /// # Errors
    ///
    /// Returns [`SeekbarError::InvalidTimecode`] if a field is out of range
    /// for the rate, or if the timecode names a label that drop-frame
    /// counting skips, or if the frame number would not fit in a `u64`.
    pub fn to_frame_number(&self, rate: &FrameRate) -> Result<u64, SeekbarError> {
        let timebase = if rate.is_drop_frame() {
            DROP_FRAME_TIMEBASE
        } else {
            rate.timebase()
        };

        if self.minutes >= 60 || self.seconds >= 60 || u64::from(self.frames) >= timebase {
            return Err(SeekbarError::InvalidTimecode(format!(
                "{self} exceeds {timebase} frames per second"
            )));
        }

        let total_minutes = u128::from(self.hours) * 60 + u128::from(self.minutes);
        let labelled = (total_minutes * 60 + u128::from(self.seconds)) * u128::from(timebase)
            + u128::from(self.frames);

        let frame_number = if rate.is_drop_frame() {
            if self.seconds == 0 && self.frames < 2 && total_minutes % 10 != 0 {
                return Err(SeekbarError::InvalidTimecode(format!(
                    "{self} is skipped by drop-frame counting"
                )));
            }
            labelled - u128::from(DROPPED_PER_MINUTE) * (total_minutes - total_minutes / 10)
        } else {
            labelled
        };

        u64::try_from(frame_number).map_err(|_| {
            SeekbarError::InvalidTimecode(format!("{self} overflows a frame number"))
        })
    }
}

impl Display for Timecode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}

impl FromStr for Timecode {
    type Err = SeekbarError;

    /// Parse `HH:MM:SS:FF`. The last separator may also be `;` or `.`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let invalid = || SeekbarError::InvalidTimecode(trimmed.to_string());

        let parts: Vec<&str> = trimmed.split([':', ';', '.']).collect();
        let [hours, minutes, seconds, frames] = parts.as_slice() else {
            return Err(invalid());
        };

        Ok(Self {
            hours: hours.parse().map_err(|_| invalid())?,
            minutes: minutes.parse().map_err(|_| invalid())?,
            seconds: seconds.parse().map_err(|_| invalid())?,
            frames: frames.parse().map_err(|_| invalid())?,
        })
    }
}
