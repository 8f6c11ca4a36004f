//! Rendering capabilities.
//!
//! The scrubber never touches a page directly. Everything it shows goes
//! through [`WidgetView`], and preview images are handed to an
//! [`ImageFetcher`] that is not expected to report back. Bindings for a
//! concrete UI layer (a DOM wrapper, a virtual-DOM diff, a native toolkit)
//! implement these two traits.
//!
//! [`HeadlessView`] and [`RequestLog`] are in-memory implementations used
//! by the CLI and by tests.

use std::collections::HashMap;

use crate::request::PreviewRequest;

/// A timecode text field on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayField {
    /// Frame label within the second.
    Frames,
    /// Seconds.
    Seconds,
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
}

impl DisplayField {
    /// Fields in the order the page updates them.
    pub const ALL: [DisplayField; 4] = [
        DisplayField::Frames,
        DisplayField::Seconds,
        DisplayField::Minutes,
        DisplayField::Hours,
    ];

    /// Element id of the text node holding this field.
    pub fn element_id(self) -> &'static str {
        match self {
            DisplayField::Frames => "frame",
            DisplayField::Seconds => "sec",
            DisplayField::Minutes => "min",
            DisplayField::Hours => "hour",
        }
    }
}

/// A group of controls shown in one interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// Configuration controls (step-count entry, activate button).
    Setup,
    /// Live slider controls.
    Active,
}

impl Panel {
    /// Element id of the panel container.
    pub fn element_id(self) -> &'static str {
        match self {
            Panel::Setup => "stepper_setup",
            Panel::Active => "stepper_active",
        }
    }
}

/// Element id of the slider track.
pub const SLIDER_ID: &str = "slider";
/// Element id of the slider knob.
pub const KNOB_ID: &str = "knob";
/// Element id of the preview image.
pub const PREVIEW_IMAGE_ID: &str = "sframe";
/// Element id of the step-count input.
pub const STEP_INPUT_ID: &str = "numsteps";

/// What the scrubber can change on screen.
///
/// All methods are infallible: a binding that cannot find an element
/// decides for itself whether to ignore it or to fail when it is built.
pub trait WidgetView {
    /// Replace the text of a timecode field.
    fn display(&mut self, field: DisplayField, value: &str);

    /// Set the knob width in pixels.
    fn set_knob_width(&mut self, pixels: u32);

    /// Show or hide a control panel.
    fn set_panel_visible(&mut self, panel: Panel, visible: bool);

    /// Current contents of the step-count input.
    fn step_input(&self) -> String;

    /// Replace the contents of the step-count input.
    fn set_step_input(&mut self, value: &str);
}

impl<T: WidgetView + ?Sized> WidgetView for &mut T {
    fn display(&mut self, field: DisplayField, value: &str) {
        (**self).display(field, value);
    }

    fn set_knob_width(&mut self, pixels: u32) {
        (**self).set_knob_width(pixels);
    }

    fn set_panel_visible(&mut self, panel: Panel, visible: bool) {
        (**self).set_panel_visible(panel, visible);
    }

    fn step_input(&self) -> String {
        (**self).step_input()
    }

    fn set_step_input(&mut self, value: &str) {
        (**self).set_step_input(value);
    }
}

/// Submits preview image requests.
///
/// Submission is fire-and-forget: there is no return value, no retry and
/// no error state. A request superseded by a newer one is not cancelled;
/// whichever image arrives last for the preview element wins.
pub trait ImageFetcher {
    /// Start loading the image for `request`.
    fn submit(&mut self, request: &PreviewRequest);
}

impl<T: ImageFetcher + ?Sized> ImageFetcher for &mut T {
    fn submit(&mut self, request: &PreviewRequest) {
        (**self).submit(request);
    }
}

/// An in-memory [`WidgetView`] keyed by element id.
#[derive(Debug, Clone, Default)]
pub struct HeadlessView {
    text: HashMap<&'static str, String>,
    visible: HashMap<Panel, bool>,
    knob_width: u32,
    step_input: String,
}

impl HeadlessView {
    /// Create an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the step-count input.
    #[must_use]
    pub fn with_step_input(mut self, value: impl Into<String>) -> Self {
        self.step_input = value.into();
        self
    }

    /// Text of a timecode field, if it has been set.
    pub fn text(&self, field: DisplayField) -> Option<&str> {
        self.text.get(field.element_id()).map(String::as_str)
    }

    /// The timecode as laid out on the page, `HH:MM:SS.FF`.
    pub fn timecode_text(&self) -> String {
        let field = |field| self.text(field).unwrap_or("00");
        format!(
            "{}:{}:{}.{}",
            field(DisplayField::Hours),
            field(DisplayField::Minutes),
            field(DisplayField::Seconds),
            field(DisplayField::Frames),
        )
    }

    /// Current knob width in pixels.
    pub fn knob_width(&self) -> u32 {
        self.knob_width
    }

    /// Whether a panel is shown. Panels start hidden.
    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible.get(&panel).copied().unwrap_or(false)
    }
}

impl WidgetView for HeadlessView {
    fn display(&mut self, field: DisplayField, value: &str) {
        self.text.insert(field.element_id(), value.to_string());
    }

    fn set_knob_width(&mut self, pixels: u32) {
        self.knob_width = pixels;
    }

    fn set_panel_visible(&mut self, panel: Panel, visible: bool) {
        self.visible.insert(panel, visible);
    }

    fn step_input(&self) -> String {
        self.step_input.clone()
    }

    fn set_step_input(&mut self, value: &str) {
        self.step_input = value.to_string();
    }
}

/// An [`ImageFetcher`] that only records what it was asked to load.
#[derive(Debug, Clone, Default)]
pub struct RequestLog {
    requests: Vec<PreviewRequest>,
}

impl RequestLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request submitted so far, oldest first.
    pub fn requests(&self) -> &[PreviewRequest] {
        &self.requests
    }

    /// Number of submitted requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether nothing has been submitted.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// URL of the most recent request.
    pub fn last_url(&self) -> Option<String> {
        self.requests.last().map(PreviewRequest::to_url)
    }
}

impl ImageFetcher for RequestLog {
    fn submit(&mut self, request: &PreviewRequest) {
        self.requests.push(request.clone());
    }
}
