//! The scrubber widget.
//!
//! [`Scrubber`] owns all widget state (clip, track geometry, current
//! frame, mode, step count) together with its [`WidgetView`] and
//! [`ImageFetcher`]. Host bindings forward pointer events and the mode
//! toggle to it; nothing is global, so any number of scrubbers can live
//! on one page.
//!
//! # Example
//!
//! ```
//! use seekbar::{
//!     ClipInfo, FrameRate, HeadlessView, RequestLog, Scrubber, ScrubberConfig, Stepping,
//! };
//!
//! let clip = ClipInfo::new("robin.avi", FrameRate::new(25, 1)?, 1000)?;
//! let config = ScrubberConfig::new().with_track_width(500);
//! let mut scrubber = Scrubber::new(clip, config, HeadlessView::new(), RequestLog::new())?;
//!
//! scrubber.initialize();
//! scrubber.toggle_mode(Stepping::Continuous);
//! scrubber.pointer_move(250.0);
//!
//! assert_eq!(scrubber.current_frame(), Some(500));
//! assert_eq!(scrubber.view().timecode_text(), "00:00:20.00");
//! assert_eq!(
//!     scrubber.fetcher().last_url().as_deref(),
//!     Some("/?file=robin.avi&frame=500&w=-1&h=300&format=jpeg60"),
//! );
//! # Ok::<(), seekbar::SeekbarError>(())
//! ```

use crate::clip::ClipInfo;
use crate::config::ScrubberConfig;
use crate::error::SeekbarError;
use crate::mapper::{TrackGeometry, map_pointer_to_frame};
use crate::mode::{Mode, ModeController, Stepping};
use crate::seek::SeekDispatcher;
use crate::view::{ImageFetcher, WidgetView};

/// A frame scrubber bound to one clip.
#[derive(Debug)]
pub struct Scrubber<V, F> {
    clip: ClipInfo,
    track: TrackGeometry,
    dispatcher: SeekDispatcher,
    modes: ModeController,
    view: V,
    fetcher: F,
}

impl<V: WidgetView, F: ImageFetcher> Scrubber<V, F> {
    /// Create a scrubber whose track starts at offset 0.
    ///
    /// # Errors
    ///
    /// Returns [`SeekbarError::InvalidTrackWidth`] if the configured track
    /// width is zero.
    pub fn new(
        clip: ClipInfo,
        config: ScrubberConfig,
        view: V,
        fetcher: F,
    ) -> Result<Self, SeekbarError> {
        config.validate()?;
        let track = TrackGeometry::new(0.0, config.track_width)?;
        Ok(Self {
            clip,
            track,
            dispatcher: SeekDispatcher::new(&config),
            modes: ModeController::new(config.default_step_count),
            view,
            fetcher,
        })
    }

    /// Set the track's left edge in pointer coordinates.
    ///
    /// Hosts call this whenever layout moves the slider.
    pub fn set_track_offset(&mut self, offset: f64) {
        self.track.offset = offset;
    }

    /// Show the setup panel and seek to the opening frame.
    pub fn initialize(&mut self) {
        self.modes.show(&mut self.view);
        let frame = self.clip.initial_frame();
        self.dispatch(frame);
    }

    /// Handle a press on the track. Always seeks.
    ///
    /// Returns whether a new frame was dispatched.
    pub fn pointer_down(&mut self, pointer_x: f64) -> bool {
        let frame = self.frame_at(pointer_x);
        self.dispatch(frame)
    }

    /// Handle a pointer move over the track. Seeks only while active.
    ///
    /// Returns whether a new frame was dispatched.
    pub fn pointer_move(&mut self, pointer_x: f64) -> bool {
        if !self.modes.tracks_pointer() {
            return false;
        }
        let frame = self.frame_at(pointer_x);
        self.dispatch(frame)
    }

    /// Seek to a frame directly, clamped to the clip.
    pub fn seek_to(&mut self, frame: u64) -> bool {
        let frame = frame.min(self.clip.last_frame());
        self.dispatch(frame)
    }

    /// Flip between setup and active mode.
    pub fn toggle_mode(&mut self, stepping: Stepping) {
        self.modes.toggle(&mut self.view, stepping);
    }

    /// Frame the pointer position maps to under the current stepping.
    pub fn frame_at(&self, pointer_x: f64) -> u64 {
        map_pointer_to_frame(
            pointer_x,
            &self.track,
            self.clip.frame_count,
            self.modes.step_count(),
        )
    }

    /// Frame on screen, if any seek has happened.
    pub fn current_frame(&self) -> Option<u64> {
        self.dispatcher.current_frame()
    }

    /// Current interaction mode.
    pub fn mode(&self) -> Mode {
        self.modes.mode()
    }

    /// Current step count; 0 means continuous.
    pub fn step_count(&self) -> u32 {
        self.modes.step_count()
    }

    /// The clip being scrubbed.
    pub fn clip(&self) -> &ClipInfo {
        &self.clip
    }

    /// The track geometry.
    pub fn track(&self) -> &TrackGeometry {
        &self.track
    }

    /// The view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The view, mutably (to edit the step-count input, for example).
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The image fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Take the view and fetcher back.
    pub fn into_parts(self) -> (V, F) {
        (self.view, self.fetcher)
    }

    fn dispatch(&mut self, frame: u64) -> bool {
        self.dispatcher
            .request_seek(&mut self.view, &mut self.fetcher, &self.clip, frame)
    }
}
