//! Animation timing options.

use std::time::Duration;

use crate::constants::{ADVANCE_DELAY, DELETE_DELAY, PHRASE_PAUSE, SLIDE_INTERVAL, TYPE_DELAY};

/// Delays used by the typing animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTimings {
    /// Delay after each typed character.
    pub type_delay: Duration,
    /// Pause on a fully typed phrase.
    pub pause: Duration,
    /// Delay after each deleted character.
    pub delete_delay: Duration,
    /// Delay before the next phrase starts.
    pub advance_delay: Duration,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            type_delay: TYPE_DELAY,
            pause: PHRASE_PAUSE,
            delete_delay: DELETE_DELAY,
            advance_delay: ADVANCE_DELAY,
        }
    }
}

/// Options for a whole page run.
#[derive(Debug, Clone)]
pub struct Options {
    /// Typing animation delays.
    pub typing: TypingTimings,
    /// Carousel auto-advance period.
    pub slide_interval: Duration,
    /// Whether the theme preference is written back on toggle.
    pub persist_theme: bool,
    /// Seed for decorative randomness; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            typing: TypingTimings::default(),
            slide_interval: SLIDE_INTERVAL,
            persist_theme: true,
            seed: None,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where durations are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        let defaults = TypingTimings::default();
        if self.typing.type_delay.is_zero() {
            self.typing.type_delay = defaults.type_delay;
        }
        if self.typing.pause.is_zero() {
            self.typing.pause = defaults.pause;
        }
        if self.typing.delete_delay.is_zero() {
            self.typing.delete_delay = defaults.delete_delay;
        }
        if self.typing.advance_delay.is_zero() {
            self.typing.advance_delay = defaults.advance_delay;
        }
        if self.slide_interval.is_zero() {
            self.slide_interval = SLIDE_INTERVAL;
        }
        self
    }
}
