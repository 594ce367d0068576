//! Output seams the animated components write into.
//!
//! Components never reach for global page state; they own whatever target
//! they were built with, which keeps them testable without a live page.

/// Receives full-content text writes.
pub trait TextTarget {
    /// Replace the whole rendered text.
    fn set_text(&mut self, text: &str);
}

impl TextTarget for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Text target that keeps every frame written to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFrames {
    frames: Vec<String>,
}

impl TextFrames {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames in write order.
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Most recent frame, empty before the first write.
    #[must_use]
    pub fn last(&self) -> &str {
        self.frames.last().map_or("", String::as_str)
    }
}

impl TextTarget for TextFrames {
    fn set_text(&mut self, text: &str) {
        self.frames.push(text.to_string());
    }
}

/// A handle with a binary active/inactive visual state.
pub trait ActiveFlag {
    /// Mark the handle active or inactive.
    fn set_active(&mut self, active: bool);

    /// Whether the handle is currently active.
    fn is_active(&self) -> bool;
}

impl ActiveFlag for bool {
    fn set_active(&mut self, active: bool) {
        *self = active;
    }

    fn is_active(&self) -> bool {
        *self
    }
}
