//! Slide carousel with indicator dots and auto-advance.
//!
//! Exactly one slide and its index-aligned indicator are active at any time.
//! Manual navigation does not pause or reset the auto-advance timer.

use std::time::Duration;

use tracing::debug;

use crate::constants::SLIDE_INTERVAL;
use crate::error::FolioError;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::target::ActiveFlag;

/// A slide carrying arbitrary content plus its active flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide<C> {
    pub content: C,
    active: bool,
}

impl<C> Slide<C> {
    /// Wrap content in an inactive slide.
    pub fn new(content: C) -> Self {
        Self {
            content,
            active: false,
        }
    }
}

impl<C> ActiveFlag for Slide<C> {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Carousel over slides `S` with indicators `D`.
pub struct SlideCarousel<S, D = bool> {
    slides: Vec<S>,
    indicators: Vec<D>,
    active: usize,
    interval: Duration,
    auto_advance: Option<TaskHandle>,
}

impl<S: ActiveFlag, D: ActiveFlag> SlideCarousel<S, D> {
    /// Build a carousel and activate the first slide.
    ///
    /// Requires at least one slide and exactly one indicator per slide.
    pub fn new(slides: Vec<S>, indicators: Vec<D>) -> Result<Self, FolioError> {
        if slides.is_empty() {
            return Err(FolioError::NoSlides);
        }
        if slides.len() != indicators.len() {
            return Err(FolioError::IndicatorMismatch {
                slides: slides.len(),
                indicators: indicators.len(),
            });
        }
        let mut carousel = Self {
            slides,
            indicators,
            active: 0,
            interval: SLIDE_INTERVAL,
            auto_advance: None,
        };
        carousel.activate(0);
        Ok(carousel)
    }

    /// Replace the auto-advance period. Takes effect on the next start.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    fn activate(&mut self, index: usize) {
        for slide in &mut self.slides {
            slide.set_active(false);
        }
        for dot in &mut self.indicators {
            dot.set_active(false);
        }
        self.slides[index].set_active(true);
        self.indicators[index].set_active(true);
        self.active = index;
    }

    /// Show the slide at `index`. Re-showing the active slide is a no-op.
    pub fn go_to(&mut self, index: usize) -> Result<(), FolioError> {
        if index >= self.slides.len() {
            return Err(FolioError::SlideOutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.activate(index);
        Ok(())
    }

    /// Show the following slide, wrapping to the first. Returns the new index.
    pub fn next(&mut self) -> usize {
        let index = (self.active + 1) % self.slides.len();
        self.activate(index);
        index
    }

    /// Show the preceding slide, wrapping to the last. Returns the new index.
    pub fn prev(&mut self) -> usize {
        let len = self.slides.len();
        let index = (self.active + len - 1) % len;
        self.activate(index);
        index
    }

    /// Arm the repeating auto-advance timer, replacing any previous one.
    pub fn start_auto_advance<T: Clone>(&mut self, timers: &mut Scheduler<T>, task: T) {
        self.stop(timers);
        self.auto_advance = Some(timers.every(self.interval, task));
    }

    /// Handle one auto-advance firing.
    pub fn on_auto_advance(&mut self) -> usize {
        let index = self.next();
        debug!(slide = index, "carousel auto-advanced");
        index
    }

    /// Cancel auto-advance. Returns whether it was running.
    pub fn stop<T: Clone>(&mut self, timers: &mut Scheduler<T>) -> bool {
        match self.auto_advance.take() {
            Some(handle) => timers.cancel(handle),
            None => false,
        }
    }

    /// Whether auto-advance is armed.
    #[must_use]
    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance.is_some()
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`; a carousel cannot be built empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    #[must_use]
    pub fn indicators(&self) -> &[D] {
        &self.indicators
    }

    /// The active slide.
    #[must_use]
    pub fn active_slide(&self) -> &S {
        &self.slides[self.active]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> SlideCarousel<bool> {
        SlideCarousel::new(vec![false; n], vec![false; n]).unwrap()
    }

    fn active_flags(c: &SlideCarousel<bool>) -> (Vec<usize>, Vec<usize>) {
        let slides = c
            .slides()
            .iter()
            .enumerate()
            .filter(|(_, s)| **s)
            .map(|(i, _)| i)
            .collect();
        let dots = c
            .indicators()
            .iter()
            .enumerate()
            .filter(|(_, d)| **d)
            .map(|(i, _)| i)
            .collect();
        (slides, dots)
    }

    #[test]
    fn first_slide_active_on_construction() {
        let c = carousel(3);
        assert_eq!(c.active_index(), 0);
        assert_eq!(active_flags(&c), (vec![0], vec![0]));
    }

    #[test]
    fn rejects_empty_and_mismatched() {
        let empty: Result<SlideCarousel<bool>, _> = SlideCarousel::new(vec![], vec![]);
        assert!(matches!(empty, Err(FolioError::NoSlides)));

        let mismatch: Result<SlideCarousel<bool>, _> =
            SlideCarousel::new(vec![false; 3], vec![false; 2]);
        assert!(matches!(
            mismatch,
            Err(FolioError::IndicatorMismatch {
                slides: 3,
                indicators: 2
            })
        ));
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut c = carousel(3);
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 2);
        assert_eq!(active_flags(&c), (vec![2], vec![2]));
    }

    #[test]
    fn go_to_is_idempotent() {
        let mut c = carousel(4);
        c.go_to(2).unwrap();
        let before = active_flags(&c);
        c.go_to(2).unwrap();
        assert_eq!(c.active_index(), 2);
        assert_eq!(active_flags(&c), before);
    }

    #[test]
    fn go_to_out_of_range() {
        let mut c = carousel(2);
        let err = c.go_to(2).unwrap_err();
        assert!(matches!(err, FolioError::SlideOutOfRange { index: 2, len: 2 }));
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn single_slide_wraps_onto_itself() {
        let mut c = carousel(1);
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
    }

    #[test]
    fn auto_advance_three_times_in_eighteen_seconds() {
        let mut timers = Scheduler::new();
        let mut c = carousel(5);
        c.start_auto_advance(&mut timers, ());
        while timers.pop_due(Duration::from_millis(18_000)).is_some() {
            c.on_auto_advance();
        }
        assert_eq!(c.active_index(), 3);
    }

    #[test]
    fn manual_navigation_does_not_reset_timer() {
        let mut timers = Scheduler::new();
        let mut c = carousel(3);
        c.start_auto_advance(&mut timers, ());

        while timers.pop_due(Duration::from_millis(5_000)).is_some() {
            c.on_auto_advance();
        }
        timers.advance_to(Duration::from_millis(5_000));
        c.go_to(2).unwrap();
        assert_eq!(timers.next_deadline(), Some(Duration::from_millis(6_000)));

        while timers.pop_due(Duration::from_millis(6_000)).is_some() {
            c.on_auto_advance();
        }
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn stop_cancels_auto_advance() {
        let mut timers = Scheduler::new();
        let mut c = carousel(3).with_interval(Duration::from_millis(10));
        c.start_auto_advance(&mut timers, ());
        assert!(c.is_auto_advancing());
        assert!(c.stop(&mut timers));
        assert!(!c.stop(&mut timers));
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn slide_content_wrapper() {
        let slides = vec![Slide::new("a"), Slide::new("b")];
        let mut c = SlideCarousel::new(slides, vec![false, false]).unwrap();
        c.next();
        assert_eq!(c.active_slide().content, "b");
        assert!(c.active_slide().is_active());
        assert!(!c.slides()[0].is_active());
    }
}
