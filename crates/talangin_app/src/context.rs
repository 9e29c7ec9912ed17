//! Page-wide mutable state
//!
//! State that handlers share between events (the page language, scroll
//! positions, the pending navbar frame, the resize debounce deadline) lives
//! here instead of in globals. The clock only moves when the host calls
//! `tick`.

use talangin_content::Language;

#[derive(Clone, Debug, Default)]
pub struct PageContext {
    clock_ms: f64,
    language: Language,
    scroll_y: f32,
    previous_scroll_y: f32,
    navbar_frame_pending: bool,
    resize_deadline: Option<f64>,
    errors_reported: usize,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds the host clock has advanced since start
    pub fn now(&self) -> f64 {
        self.clock_ms
    }

    pub fn advance(&mut self, dt_ms: f32) {
        self.clock_ms += f64::from(dt_ms.max(0.0));
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Record a new scroll offset; the old one becomes the previous offset
    pub fn record_scroll(&mut self, scroll_y: f32) {
        self.previous_scroll_y = std::mem::replace(&mut self.scroll_y, scroll_y);
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn previous_scroll_y(&self) -> f32 {
        self.previous_scroll_y
    }

    /// Ask for a navbar update on the next frame
    ///
    /// Returns `false` when one is already pending.
    pub fn request_navbar_frame(&mut self) -> bool {
        !std::mem::replace(&mut self.navbar_frame_pending, true)
    }

    pub fn navbar_frame_pending(&self) -> bool {
        self.navbar_frame_pending
    }

    pub fn take_navbar_frame(&mut self) -> bool {
        std::mem::take(&mut self.navbar_frame_pending)
    }

    /// (Re)start the resize quiet period
    pub fn schedule_resize(&mut self, debounce_ms: u32) {
        self.resize_deadline = Some(self.clock_ms + f64::from(debounce_ms));
    }

    pub fn resize_pending(&self) -> bool {
        self.resize_deadline.is_some()
    }

    /// Whether the quiet period has elapsed; clears the deadline if so
    pub fn take_due_resize(&mut self) -> bool {
        match self.resize_deadline {
            Some(deadline) if self.clock_ms >= deadline => {
                self.resize_deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn record_error(&mut self) {
        self.errors_reported += 1;
    }

    /// Script errors and unhandled rejections seen so far
    pub fn errors_reported(&self) -> usize {
        self.errors_reported
    }
}
