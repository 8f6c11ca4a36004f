//! Seek page rendering.
//!
//! The frame server hands browsers a small HTML page per clip: an info
//! line, the preview image, the slider with its knob and stepper panels,
//! and the timecode table. The page sets the `fps`, `lastframe` and
//! `fileid` globals the scrubber script reads and opens on the frame a
//! third of the way into the clip. Element ids match
//! [`DisplayField::element_id`] and [`Panel::element_id`].

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::clip::ClipInfo;
use crate::config::ScrubberConfig;
use crate::error::SeekbarError;
use crate::view::{DisplayField, KNOB_ID, PREVIEW_IMAGE_ID, Panel, SLIDER_ID, STEP_INPUT_ID};

/// Builder for a clip's seek page.
///
/// # Example
///
/// ```
/// use seekbar::{ClipInfo, FrameRate, ScrubberConfig, SeekPage};
///
/// let clip = ClipInfo::new("robin.avi", FrameRate::new(25, 1)?, 1500)?;
/// let html = SeekPage::new(&clip, &ScrubberConfig::new()).render();
/// assert!(html.contains("var lastframe=1499;"));
/// # Ok::<(), seekbar::SeekbarError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SeekPage<'a> {
    clip: &'a ClipInfo,
    config: &'a ScrubberConfig,
    title: String,
    script_url: String,
    footer: Option<String>,
}

impl<'a> SeekPage<'a> {
    /// Start a page for `clip`.
    pub fn new(clip: &'a ClipInfo, config: &'a ScrubberConfig) -> Self {
        Self {
            clip,
            config,
            title: "file info".to_string(),
            script_url: "/seek.js".to_string(),
            footer: None,
        }
    }

    /// Set the document title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set where the scrubber script is loaded from.
    #[must_use]
    pub fn with_script_url(mut self, url: impl Into<String>) -> Self {
        self.script_url = url.into();
        self
    }

    /// Add a footer line (server name and address, for example).
    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Render the page.
    pub fn render(&self) -> String {
        let clip = self.clip;
        let file_id = urlencoding::encode(&clip.file_id);
        let initial = clip.initial_frame();
        let track_width = self.config.track_width;

        let mut html = String::with_capacity(4096);
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"utf-8\"/>\n");
        let _ = writeln!(html, "<title>{}</title>", escape_html(&self.title));
        let _ = writeln!(
            html,
            "<script type=\"text/javascript\" src=\"{}\"></script>",
            escape_html(&self.script_url)
        );
        let _ = writeln!(
            html,
            "<script type=\"text/javascript\"><!--\n  var fps={};\n  var lastframe={};\n  var fileid='{file_id}';\n  var base_url='{}';\n--></script>",
            clip.frame_rate,
            clip.last_frame(),
            escape_script_string(&self.config.base_url),
        );
        html.push_str("</head>\n<body style=\"width:900px; margin:0 auto;\">\n");

        html.push_str("<div style=\"text-align:center; background-color:#333; color:#fff; margin:1em; padding:1em; border:1px solid #ccc; user-select:none;\">\n");
        html.push_str("<p style=\"margin-bottom:2em;\">");
        let _ = writeln!(html, "<em>File</em>: {file_id}<br/>");
        let _ = writeln!(html, "<em>Geometry</em>: {}x{}, ", clip.width, clip.height);
        let _ = writeln!(html, "<em>Aspect-Ratio</em>: {:.3}, ", clip.aspect_ratio);
        let _ = writeln!(html, "<em>Framerate</em>: {}, ", clip.frame_rate);
        let _ = writeln!(html, "<em>Duration</em>: {}", clip.duration());
        html.push_str("</p>\n");

        let _ = writeln!(
            html,
            "<div style=\"height:{}px;\"><img src=\"\" alt=\"\" id=\"{PREVIEW_IMAGE_ID}\" style=\"border:4px solid black\"/></div>",
            self.config.preview_height.max(0) + 20
        );
        let _ = writeln!(
            html,
            "<div style=\"width:{}px; margin:2em auto .5em auto; padding:0.5em; border:3px double black;\">",
            track_width + 59
        );
        let _ = writeln!(
            html,
            "  <div style=\"position:relative; width:{track_width}px; height:1em; background-color:#ccc; cursor:crosshair; float:left;\" id=\"{SLIDER_ID}\">"
        );
        let _ = writeln!(
            html,
            "    <div style=\"position:absolute; top:0px; left:0px; width:0px; height:1em; background-color:#666;\" id=\"{KNOB_ID}\"></div>"
        );
        html.push_str("  </div>\n");
        html.push_str("  <div style=\"float:right; max-width:50px; overflow:hidden;\">\n");
        let _ = writeln!(
            html,
            "   <div id=\"{}\" style=\"display:block;\">\n    <input type=\"text\" size=\"3\" id=\"{STEP_INPUT_ID}\" value=\"{}\"/>\n    <button type=\"button\" onclick=\"smode(1);\">click</button>\n   </div>",
            Panel::Setup.element_id(),
            self.config.default_step_count,
        );
        let _ = writeln!(
            html,
            "   <div id=\"{}\" style=\"display:none;\">\n    <button type=\"button\" onclick=\"smode(0);\">hover</button>\n   </div>",
            Panel::Active.element_id(),
        );
        html.push_str("  </div>\n  <div style=\"clear:both;\"></div>\n</div>\n");

        html.push_str("<table style=\"font-family:monospace; font-size:400%; margin:0 auto;\">\n<tr>\n");
        let _ = writeln!(
            html,
            "  <td id=\"{}\">00</td><td>:</td>\n  <td id=\"{}\">00</td><td>:</td>\n  <td id=\"{}\">00</td><td>.</td>\n  <td id=\"{}\">00</td>",
            DisplayField::Hours.element_id(),
            DisplayField::Minutes.element_id(),
            DisplayField::Seconds.element_id(),
            DisplayField::Frames.element_id(),
        );
        html.push_str("</tr>\n</table>\n");

        let _ = writeln!(
            html,
            "<script type=\"text/javascript\"><!--\n  setslider({initial});\n  settc({initial});\n  seek('{file_id}',{initial});\n  document.getElementById('{SLIDER_ID}').onmousedown=movestep;\n--></script>"
        );
        html.push_str("</div>\n");

        if let Some(footer) = &self.footer {
            let _ = writeln!(
                html,
                "<hr/><div style=\"text-align:center; color:#888;\">{}</div>",
                escape_html(footer)
            );
        }
        html.push_str("</body>\n</html>\n");
        html
    }

    /// Render the page and write it to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SeekbarError::IoError`] if the file cannot be written.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), SeekbarError> {
        let path = path.as_ref();
        log::debug!("Writing seek page for {} to {}", self.clip.file_id, path.display());
        fs::write(path, self.render())?;
        Ok(())
    }
}

/// Escape text for HTML content and double-quoted attributes.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Escape text for a single-quoted JavaScript string inside a `<script>`
/// element.
fn escape_script_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            '<' => escaped.push_str("\\x3c"),
            '>' => escaped.push_str("\\x3e"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            other => escaped.push(other),
        }
    }
    escaped
}
