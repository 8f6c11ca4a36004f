//! Pointer-to-frame mapping.
//!
//! The slider is a horizontal track of fixed pixel width. A pointer
//! position along it is normalised to `[0, width]` and scaled onto the
//! clip's frame range, either continuously or snapped to one of a fixed
//! number of evenly spaced stops.
//!
//! Both modes round to the nearest frame and clamp the result to
//! `[0, total_frames - 1]`, so the mapping is total and monotonic.

use crate::error::SeekbarError;

/// Position and width of the slider track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Horizontal offset of the track's left edge, in the pointer's
    /// coordinate space.
    pub offset: f64,
    /// Track width in pixels.
    pub width: u32,
}

impl TrackGeometry {
    /// Create a track geometry.
    ///
    /// # Errors
    ///
    /// Returns [`SeekbarError::InvalidTrackWidth`] if `width` is zero.
    pub fn new(offset: f64, width: u32) -> Result<Self, SeekbarError> {
        if width == 0 {
            return Err(SeekbarError::InvalidTrackWidth);
        }
        Ok(Self { offset, width })
    }

    /// Pointer position relative to the track, clamped to `[0, width]`.
    pub fn relative_offset(&self, pointer_x: f64) -> f64 {
        let offset = pointer_x - self.offset;
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, f64::from(self.width))
    }
}

/// Map a pointer position to a frame index.
///
/// With `step_count == 0` the track maps continuously:
/// `round(offset * total_frames / width)`. Otherwise the track is split
/// into `step_count` equal segments and every position in segment `i`
/// maps to `round(i * total_frames / step_count)`; the right edge belongs
/// to the last segment.
///
/// # Example
///
/// ```
/// use seekbar::{TrackGeometry, map_pointer_to_frame};
///
/// let track = TrackGeometry::new(100.0, 500)?;
/// assert_eq!(map_pointer_to_frame(350.0, &track, 1000, 0), 500);
/// assert_eq!(map_pointer_to_frame(0.0, &track, 1000, 0), 0);
/// assert_eq!(map_pointer_to_frame(9999.0, &track, 1000, 0), 999);
/// # Ok::<(), seekbar::SeekbarError>(())
/// ```
pub fn map_pointer_to_frame(
    pointer_x: f64,
    track: &TrackGeometry,
    total_frames: u64,
    step_count: u32,
) -> u64 {
    if total_frames == 0 {
        return 0;
    }

    let offset = track.relative_offset(pointer_x);
    let width = f64::from(track.width);
    let total = total_frames as f64;

    let frame = if step_count == 0 {
        (offset * total / width).round()
    } else {
        let steps = f64::from(step_count);
        let segment = width / steps;
        let index = (offset / segment).floor().min(steps - 1.0);
        (index * total / steps).round()
    };

    (frame.max(0.0) as u64).min(total_frames - 1)
}

/// Knob width in pixels for `frame`: `ceil(width * frame / total_frames)`,
/// capped at the track width.
pub fn knob_width(frame: u64, total_frames: u64, track_width: u32) -> u32 {
    if total_frames == 0 {
        return 0;
    }
    let width = (f64::from(track_width) * frame as f64 / total_frames as f64).ceil();
    (width.max(0.0) as u32).min(track_width)
}
