//! # seekbar
//!
//! The core of a frame scrubber: a horizontal seek bar that steps through
//! the frames of a clip on a frame server by requesting one preview still
//! per position.
//!
//! `seekbar` maps pointer positions on the slider track to frame numbers,
//! formats SMPTE timecode (including 29.97 fps drop-frame), debounces
//! seeks so each frame is requested once, and runs the small Setup/Active
//! mode machine that switches between free dragging and quantized
//! stepping. Rendering is left to the host through the [`WidgetView`] and
//! [`ImageFetcher`] traits.
//!
//! ## Quick Start
//!
//! ### Format Timecode
//!
//! ```
//! use seekbar::{FrameRate, format_timecode};
//!
//! let rate: FrameRate = "29.97".parse()?;
//! let timecode = format_timecode(17_982, &rate);
//! assert_eq!(timecode.to_string(), "00:10:00:00");
//! # Ok::<(), seekbar::SeekbarError>(())
//! ```
//!
//! ### Map a Pointer to a Frame
//!
//! ```
//! use seekbar::{TrackGeometry, map_pointer_to_frame};
//!
//! let track = TrackGeometry::new(0.0, 501)?;
//! // 15 evenly spaced stops across a 1000-frame clip.
//! assert_eq!(map_pointer_to_frame(0.0, &track, 1000, 15), 0);
//! assert_eq!(map_pointer_to_frame(40.0, &track, 1000, 15), 67);
//! # Ok::<(), seekbar::SeekbarError>(())
//! ```
//!
//! ### Drive a Scrubber
//!
//! ```
//! use seekbar::{ClipInfo, FrameRate, HeadlessView, RequestLog, Scrubber, ScrubberConfig};
//!
//! let clip = ClipInfo::new("clip.mov", FrameRate::new(24, 1)?, 2400)?;
//! let mut scrubber = Scrubber::new(clip, ScrubberConfig::new(), HeadlessView::new(), RequestLog::new())?;
//! scrubber.initialize();
//! assert_eq!(scrubber.current_frame(), Some(800));
//! # Ok::<(), seekbar::SeekbarError>(())
//! ```
//!
//! ## Features
//!
//! - **Frame mapping** — continuous or quantized (1–100 stops), rounded and
//!   clamped to the clip
//! - **Timecode** — standard and SMPTE drop-frame, both directions
//! - **Seek dispatch** — knob, timecode fields and preview request, skipped
//!   when the frame is already on screen
//! - **Mode control** — Setup/Active with step-count validation
//! - **Seek pages** — render the HTML page a frame server hands browsers
//!
//! ### Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `ffmpeg` | `ClipInfo::probe` reads rate, frame count and geometry from media files |
//! | `full` | Enables all of the above |

pub mod clip;
pub mod config;
pub mod error;
pub mod mapper;
pub mod mode;
pub mod page;
#[cfg(feature = "ffmpeg")]
pub mod probe;
pub mod rate;
pub mod request;
pub mod scrubber;
pub mod seek;
pub mod timecode;
pub mod view;

pub use clip::ClipInfo;
pub use config::ScrubberConfig;
pub use error::SeekbarError;
pub use mapper::{TrackGeometry, knob_width, map_pointer_to_frame};
pub use mode::{
    DEFAULT_STEP_COUNT, MAX_STEP_COUNT, MIN_STEP_COUNT, Mode, ModeController, Stepping,
    parse_step_count,
};
pub use page::SeekPage;
pub use rate::FrameRate;
pub use request::{ImageFormat, PreviewRequest};
pub use scrubber::Scrubber;
pub use seek::SeekDispatcher;
pub use timecode::{Timecode, format_timecode};
pub use view::{DisplayField, HeadlessView, ImageFetcher, Panel, RequestLog, WidgetView};
