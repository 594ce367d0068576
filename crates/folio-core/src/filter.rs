//! Project grid filter with fade transitions.
//!
//! Each card remembers its pending fade timer. Applying a filter cancels it
//! first, so a hide armed by an earlier filter never lands on a card the
//! current filter shows.

use crate::constants::{FILTER_ALL, FILTER_FADE_IN, FILTER_FADE_OUT};
use crate::content::Project;
use crate::error::FolioError;
use crate::scheduler::{Scheduler, TaskHandle};

/// Render state of one project card.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub category: String,
    /// Whether the card takes part in layout.
    pub displayed: bool,
    pub opacity: f64,
    pending: Option<TaskHandle>,
}

impl Card {
    /// Whether a fade timer is armed for this card.
    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.pending.is_some()
    }

    /// Displayed and fully opaque.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.displayed && self.opacity >= 1.0
    }
}

#[derive(Debug, Clone)]
pub struct ProjectFilter {
    buttons: Vec<String>,
    active: usize,
    cards: Vec<Card>,
}

impl ProjectFilter {
    /// One button for `all` plus one per category, in first-seen order.
    #[must_use]
    pub fn new(projects: &[Project]) -> Self {
        let mut buttons = vec![FILTER_ALL.to_string()];
        for p in projects {
            if !buttons.contains(&p.category) {
                buttons.push(p.category.clone());
            }
        }
        let cards = projects
            .iter()
            .map(|p| Card {
                title: p.title.clone(),
                category: p.category.clone(),
                displayed: true,
                opacity: 1.0,
                pending: None,
            })
            .collect();
        Self {
            buttons,
            active: 0,
            cards,
        }
    }

    /// Activate filter `name`.
    ///
    /// Matching cards are displayed now and fade in after a short delay;
    /// the others go transparent now and leave layout after the fade-out.
    /// Returns the indices of matching cards.
    pub fn apply<T: Clone>(
        &mut self,
        name: &str,
        timers: &mut Scheduler<T>,
        fade_in: impl Fn(usize) -> T,
        fade_out: impl Fn(usize) -> T,
    ) -> Result<Vec<usize>, FolioError> {
        let Some(button) = self.buttons.iter().position(|b| b == name) else {
            return Err(FolioError::UnknownFilter(name.to_string()));
        };
        self.active = button;

        let mut shown = Vec::new();
        for (index, card) in self.cards.iter_mut().enumerate() {
            if let Some(handle) = card.pending.take() {
                timers.cancel(handle);
            }
            if name == FILTER_ALL || card.category == name {
                card.displayed = true;
                card.pending = Some(timers.once(FILTER_FADE_IN, fade_in(index)));
                shown.push(index);
            } else {
                card.opacity = 0.0;
                card.pending = Some(timers.once(FILTER_FADE_OUT, fade_out(index)));
            }
        }
        Ok(shown)
    }

    /// Fade-in timer fired for `index`.
    pub fn finish_fade_in(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.opacity = 1.0;
            card.pending = None;
        }
    }

    /// Fade-out timer fired for `index`.
    pub fn finish_fade_out(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.displayed = false;
            card.pending = None;
        }
    }

    /// Cancel every pending fade.
    pub fn stop<T: Clone>(&mut self, timers: &mut Scheduler<T>) {
        for card in &mut self.cards {
            if let Some(handle) = card.pending.take() {
                timers.cancel(handle);
            }
        }
    }

    #[must_use]
    pub fn buttons(&self) -> &[String] {
        &self.buttons
    }

    /// Name of the active filter button.
    #[must_use]
    pub fn active(&self) -> &str {
        &self.buttons[self.active]
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Fade {
        In(usize),
        Out(usize),
    }

    fn projects() -> Vec<Project> {
        [("A", "web"), ("B", "mobile"), ("C", "web")]
            .iter()
            .map(|(t, c)| Project {
                title: (*t).into(),
                category: (*c).into(),
                summary: String::new(),
            })
            .collect()
    }

    fn run(f: &mut ProjectFilter, timers: &mut Scheduler<Fade>, until_ms: u64) {
        while let Some((_, task)) = timers.pop_due(Duration::from_millis(until_ms)) {
            match task {
                Fade::In(i) => f.finish_fade_in(i),
                Fade::Out(i) => f.finish_fade_out(i),
            }
        }
        timers.advance_to(Duration::from_millis(until_ms));
    }

    #[test]
    fn buttons_are_all_plus_categories() {
        let f = ProjectFilter::new(&projects());
        assert_eq!(f.buttons(), ["all", "web", "mobile"]);
        assert_eq!(f.active(), "all");
        assert!(f.cards().iter().all(Card::is_shown));
    }

    #[test]
    fn filter_hides_non_matching_after_fade() {
        let mut timers = Scheduler::new();
        let mut f = ProjectFilter::new(&projects());
        let shown = f.apply("web", &mut timers, Fade::In, Fade::Out).unwrap();
        assert_eq!(shown, vec![0, 2]);
        assert_eq!(f.active(), "web");

        let b = &f.cards()[1];
        assert!(b.displayed);
        assert!(b.opacity.abs() < f64::EPSILON);

        run(&mut f, &mut timers, 299);
        assert!(f.cards()[1].displayed);
        run(&mut f, &mut timers, 300);
        assert!(!f.cards()[1].displayed);
        assert!(f.cards()[0].is_shown());
        assert!(f.cards()[2].is_shown());
    }

    #[test]
    fn newer_filter_cancels_stale_hide() {
        let mut timers = Scheduler::new();
        let mut f = ProjectFilter::new(&projects());
        f.apply("web", &mut timers, Fade::In, Fade::Out).unwrap();
        run(&mut f, &mut timers, 100);
        f.apply("all", &mut timers, Fade::In, Fade::Out).unwrap();
        run(&mut f, &mut timers, 1000);
        assert!(f.cards().iter().all(Card::is_shown));
        assert!(f.cards().iter().all(|c| !c.is_fading()));
    }

    #[test]
    fn unknown_filter() {
        let mut timers = Scheduler::new();
        let mut f = ProjectFilter::new(&projects());
        let err = f.apply("games", &mut timers, Fade::In, Fade::Out).unwrap_err();
        assert!(matches!(err, FolioError::UnknownFilter(name) if name == "games"));
        assert_eq!(f.active(), "all");
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn stop_cancels_fades() {
        let mut timers = Scheduler::new();
        let mut f = ProjectFilter::new(&projects());
        f.apply("mobile", &mut timers, Fade::In, Fade::Out).unwrap();
        f.stop(&mut timers);
        assert_eq!(timers.pending(), 0);
    }
}
