//! Typing-text animation.
//!
//! Cycles forever through a fixed list of phrases: types one character at a
//! time, pauses on the full phrase, deletes it one character at a time, then
//! moves on to the next phrase (wrapping).
//!
//! ```text
//! Typing --(phrase complete)--> Pausing --(pause elapsed)--> Deleting
//!    ^                                                          |
//!    +------ Advancing <--------(phrase fully deleted)----------+
//! ```
//!
//! Every [`TypingAnimator::step`] returns the delay before the next step, so
//! exactly one step is always outstanding while the animation runs.

use std::time::Duration;

use tracing::{debug, trace};

use crate::error::FolioError;
use crate::options::TypingTimings;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::target::TextTarget;

/// Which transition the next step performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingMode {
    /// Appending characters of the current phrase.
    Typing,
    /// Holding the complete phrase.
    Pausing,
    /// Removing characters of the current phrase.
    Deleting,
    /// Waiting to start the next phrase.
    Advancing,
}

/// Character-by-character phrase animator writing into a [`TextTarget`].
pub struct TypingAnimator<O> {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    mode: TypingMode,
    timings: TypingTimings,
    target: O,
    pending: Option<TaskHandle>,
}

impl<O: TextTarget> TypingAnimator<O> {
    /// Create an animator with default timings.
    ///
    /// Fails with [`FolioError::EmptyPhrases`] when `phrases` is empty.
    pub fn new(phrases: Vec<String>, target: O) -> Result<Self, FolioError> {
        if phrases.is_empty() {
            return Err(FolioError::EmptyPhrases);
        }
        Ok(Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            mode: TypingMode::Typing,
            timings: TypingTimings::default(),
            target,
            pending: None,
        })
    }

    /// Replace the step delays.
    #[must_use]
    pub fn with_timings(mut self, timings: TypingTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Perform one transition and return the delay until the next one.
    pub fn step(&mut self) -> Duration {
        match self.mode {
            TypingMode::Typing => self.type_step(),
            TypingMode::Pausing => {
                self.mode = TypingMode::Deleting;
                self.delete_step()
            }
            TypingMode::Deleting => self.delete_step(),
            TypingMode::Advancing => {
                self.mode = TypingMode::Typing;
                self.type_step()
            }
        }
    }

    fn type_step(&mut self) -> Duration {
        if self.char_index < self.phrase_len() {
            self.char_index += 1;
            self.render();
            self.timings.type_delay
        } else {
            trace!(phrase = self.phrase_index, "phrase typed, pausing");
            self.mode = TypingMode::Pausing;
            self.timings.pause
        }
    }

    fn delete_step(&mut self) -> Duration {
        if self.char_index > 0 {
            self.char_index -= 1;
            self.render();
            self.timings.delete_delay
        } else {
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            debug!(phrase = self.phrase_index, "advancing to next phrase");
            self.mode = TypingMode::Advancing;
            self.timings.advance_delay
        }
    }

    fn render(&mut self) {
        let end = self.byte_end();
        let text = &self.phrases[self.phrase_index][..end];
        self.target.set_text(text);
    }

    fn byte_end(&self) -> usize {
        let phrase = &self.phrases[self.phrase_index];
        phrase
            .char_indices()
            .nth(self.char_index)
            .map_or(phrase.len(), |(i, _)| i)
    }

    fn phrase_len(&self) -> usize {
        self.phrases[self.phrase_index].chars().count()
    }

    /// Run the first step now and arm the timer for the next one.
    ///
    /// Restarting a running animator cancels its outstanding step first.
    pub fn start<T: Clone>(&mut self, timers: &mut Scheduler<T>, task: T) {
        self.stop(timers);
        let delay = self.step();
        self.pending = Some(timers.once(delay, task));
    }

    /// Handle the firing of the armed step timer and arm the next one.
    ///
    /// Ignored when the animator is stopped.
    pub fn fire<T: Clone>(&mut self, timers: &mut Scheduler<T>, task: T) {
        if self.pending.take().is_none() {
            return;
        }
        let delay = self.step();
        self.pending = Some(timers.once(delay, task));
    }

    /// Cancel the outstanding step. Returns whether the animator was running.
    pub fn stop<T: Clone>(&mut self, timers: &mut Scheduler<T>) -> bool {
        match self.pending.take() {
            Some(handle) => {
                timers.cancel(handle);
                true
            }
            None => false,
        }
    }

    /// Whether a step is outstanding.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Currently rendered prefix of the current phrase.
    #[must_use]
    pub fn rendered(&self) -> &str {
        &self.phrases[self.phrase_index][..self.byte_end()]
    }

    /// The phrase being typed or deleted.
    #[must_use]
    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    /// All phrases in cycle order.
    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[must_use]
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    #[must_use]
    pub fn mode(&self) -> TypingMode {
        self.mode
    }

    #[must_use]
    pub fn timings(&self) -> TypingTimings {
        self.timings
    }

    /// The output target.
    #[must_use]
    pub fn target(&self) -> &O {
        &self.target
    }

    /// Consume the animator, returning its output target.
    pub fn into_target(self) -> O {
        self.target
    }
}
