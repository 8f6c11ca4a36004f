//! Seek dispatch.
//!
//! [`SeekDispatcher`] remembers the frame currently on screen. Seeking to
//! that same frame again does nothing, which keeps a pointer hovering
//! inside one frame's pixel span from flooding the frame server with
//! identical image requests.

use crate::clip::ClipInfo;
use crate::config::ScrubberConfig;
use crate::mapper::knob_width;
use crate::request::{ImageFormat, PreviewRequest};
use crate::timecode::format_timecode;
use crate::view::{ImageFetcher, WidgetView};

/// Debounced seek: knob, timecode fields, then the preview request.
#[derive(Debug, Clone)]
pub struct SeekDispatcher {
    current_frame: Option<u64>,
    base_url: String,
    track_width: u32,
    preview_width: i32,
    preview_height: i32,
    image_format: ImageFormat,
}

impl SeekDispatcher {
    /// Create a dispatcher with nothing on screen yet.
    pub fn new(config: &ScrubberConfig) -> Self {
        Self {
            current_frame: None,
            base_url: config.base_url.clone(),
            track_width: config.track_width,
            preview_width: config.preview_width,
            preview_height: config.preview_height,
            image_format: config.image_format,
        }
    }

    /// Frame last dispatched, if any.
    pub fn current_frame(&self) -> Option<u64> {
        self.current_frame
    }

    /// Forget the current frame so the next seek is always dispatched.
    pub fn reset(&mut self) {
        self.current_frame = None;
    }

    /// The request a seek to `frame` would submit.
    pub fn preview_request(&self, clip: &ClipInfo, frame: u64) -> PreviewRequest {
        PreviewRequest {
            base_url: self.base_url.clone(),
            file_id: clip.file_id.clone(),
            frame,
            width: self.preview_width,
            height: self.preview_height,
            format: self.image_format,
        }
    }

    /// Seek to `frame`.
    ///
    /// Returns `false` without touching the view or the fetcher when
    /// `frame` is already on screen. Otherwise updates the knob and the
    /// timecode fields, submits the preview request and returns `true`.
    /// The outcome of the image load is never observed.
    pub fn request_seek<V, F>(
        &mut self,
        view: &mut V,
        fetcher: &mut F,
        clip: &ClipInfo,
        frame: u64,
    ) -> bool
    where
        V: WidgetView + ?Sized,
        F: ImageFetcher + ?Sized,
    {
        if self.current_frame == Some(frame) {
            return false;
        }
        self.current_frame = Some(frame);

        view.set_knob_width(knob_width(frame, clip.frame_count, self.track_width));
        let timecode = format_timecode(frame, &clip.frame_rate);
        for (field, value) in timecode.fields() {
            view.display(field, &value);
        }

        let request = self.preview_request(clip, frame);
        log::debug!("Seeking to frame {frame} ({timecode}): {request}");
        fetcher.submit(&request);
        true
    }
}
