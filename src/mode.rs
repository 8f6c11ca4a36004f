//! Interaction modes.
//!
//! A scrubber starts in [`Mode::Setup`], where the step-count input is
//! editable and hovering the slider does nothing. Activating it switches
//! to [`Mode::Active`]: the setup controls are hidden and pointer moves
//! over the track seek, either continuously or snapped to a fixed number
//! of stops. Modes only change on explicit calls.

use crate::view::{Panel, WidgetView};

/// Fewest stops quantized stepping accepts.
pub const MIN_STEP_COUNT: u32 = 1;
/// Most stops quantized stepping accepts.
pub const MAX_STEP_COUNT: u32 = 100;
/// Step count used when the input is not a number in range.
pub const DEFAULT_STEP_COUNT: u32 = 15;

/// Interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Configuration controls shown; pointer moves are ignored.
    #[default]
    Setup,
    /// Live slider shown; pointer moves seek.
    Active,
}

/// How pointer positions are resolved while active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stepping {
    /// Full pixel resolution.
    #[default]
    Continuous,
    /// Snap to the number of stops entered in the step-count input.
    Quantized,
}

/// Parse a step count, falling back to `fallback` when the input is not
/// an integer in `1..=100`.
pub fn parse_step_count(input: &str, fallback: u32) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(count) if (MIN_STEP_COUNT..=MAX_STEP_COUNT).contains(&count) => count,
        _ => {
            log::debug!("Step count {input:?} out of range, using {fallback}");
            fallback
        }
    }
}

/// The Setup/Active state machine.
#[derive(Debug, Clone)]
pub struct ModeController {
    mode: Mode,
    step_count: u32,
    default_step_count: u32,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_COUNT)
    }
}

impl ModeController {
    /// Create a controller in [`Mode::Setup`] with stepping disabled.
    pub fn new(default_step_count: u32) -> Self {
        Self {
            mode: Mode::Setup,
            step_count: 0,
            default_step_count: default_step_count.clamp(MIN_STEP_COUNT, MAX_STEP_COUNT),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current step count; 0 means continuous.
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Whether pointer moves over the track should seek.
    pub fn tracks_pointer(&self) -> bool {
        self.mode == Mode::Active
    }

    /// Sync panel visibility with the current mode.
    pub fn show<V: WidgetView>(&self, view: &mut V) {
        let active = self.mode == Mode::Active;
        view.set_panel_visible(Panel::Setup, !active);
        view.set_panel_visible(Panel::Active, active);
    }

    /// Switch to [`Mode::Active`].
    ///
    /// For [`Stepping::Quantized`] the step count is read from the view's
    /// step-count input. Activating an already active controller only
    /// re-reads the stepping.
    pub fn activate<V: WidgetView>(&mut self, view: &mut V, stepping: Stepping) {
        self.step_count = match stepping {
            Stepping::Continuous => 0,
            Stepping::Quantized => parse_step_count(&view.step_input(), self.default_step_count),
        };
        self.mode = Mode::Active;
        self.show(view);
        log::debug!("Scrubber active (step_count={})", self.step_count);
    }

    /// Switch to [`Mode::Setup`].
    ///
    /// A nonzero step count is written back into the step-count input
    /// before stepping is reset to continuous.
    pub fn deactivate<V: WidgetView>(&mut self, view: &mut V) {
        if self.step_count > 0 {
            view.set_step_input(&self.step_count.to_string());
        }
        self.step_count = 0;
        self.mode = Mode::Setup;
        self.show(view);
        log::debug!("Scrubber back in setup");
    }

    /// Flip between the two modes.
    pub fn toggle<V: WidgetView>(&mut self, view: &mut V, stepping: Stepping) {
        match self.mode {
            Mode::Setup => self.activate(view, stepping),
            Mode::Active => self.deactivate(view),
        }
    }
}
