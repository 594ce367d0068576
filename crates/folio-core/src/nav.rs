//! Navigation bar state: mobile menu, active section, scroll cosmetics.

use crate::constants::{
    NAVBAR_HEIGHT, NAVBAR_SCROLLED_OFFSET, SCROLL_TOP_THRESHOLD, SECTION_ACTIVATION_MARGIN,
};
use crate::content::Section;

/// Navbar and menu state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    menu_open: bool,
    active_section: Option<usize>,
    scrolled: bool,
    scroll_top_visible: bool,
}

impl NavState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the hamburger menu. Returns the new open state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Close the menu. Returns whether it was open.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    /// Update the scroll cosmetics (navbar look, scroll-to-top button).
    pub fn on_scroll(&mut self, scroll_y: u32) {
        self.scrolled = scroll_y > NAVBAR_SCROLLED_OFFSET;
        self.scroll_top_visible = scroll_y > SCROLL_TOP_THRESHOLD;
    }

    /// Recompute the active section. Returns whether it changed.
    pub fn update_active(&mut self, sections: &[Section], scroll_y: u32) -> bool {
        let active = active_section(sections, scroll_y);
        let changed = active != self.active_section;
        self.active_section = active;
        changed
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Index of the active section.
    #[must_use]
    pub fn active_section(&self) -> Option<usize> {
        self.active_section
    }

    /// Whether the navbar shows its scrolled look.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub fn scroll_top_visible(&self) -> bool {
        self.scroll_top_visible
    }
}

/// Last section in document order whose top, less the activation margin,
/// has been scrolled past.
#[must_use]
pub fn active_section(sections: &[Section], scroll_y: u32) -> Option<usize> {
    sections
        .iter()
        .enumerate()
        .filter(|(_, s)| scroll_y >= s.top.saturating_sub(SECTION_ACTIVATION_MARGIN))
        .map(|(i, _)| i)
        .last()
}

/// Scroll position that brings an anchor's section just below the navbar.
#[must_use]
pub fn anchor_target(sections: &[Section], href: &str) -> Option<u32> {
    let id = href.strip_prefix('#').unwrap_or(href);
    sections
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.top.saturating_sub(NAVBAR_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        [("home", 0), ("about", 900), ("contact", 1800)]
            .iter()
            .map(|(id, top)| Section {
                id: (*id).to_string(),
                title: (*id).to_string(),
                top: *top,
                height: 900,
            })
            .collect()
    }

    #[test]
    fn menu_toggle_and_close() {
        let mut nav = NavState::new();
        assert!(nav.toggle_menu());
        assert!(nav.close_menu());
        assert!(!nav.close_menu());
        assert!(!nav.menu_open());
    }

    #[test]
    fn active_section_uses_margin() {
        let s = sections();
        assert_eq!(active_section(&s, 0), Some(0));
        assert_eq!(active_section(&s, 699), Some(0));
        assert_eq!(active_section(&s, 700), Some(1));
        assert_eq!(active_section(&s, 5000), Some(2));
    }

    #[test]
    fn no_active_section_above_first() {
        let s = vec![Section {
            id: "late".into(),
            title: "Late".into(),
            top: 1000,
            height: 100,
        }];
        assert_eq!(active_section(&s, 100), None);
        assert_eq!(active_section(&[], 100), None);
    }

    #[test]
    fn update_active_reports_change() {
        let s = sections();
        let mut nav = NavState::new();
        assert!(nav.update_active(&s, 0));
        assert!(!nav.update_active(&s, 10));
        assert!(nav.update_active(&s, 1700));
        assert_eq!(nav.active_section(), Some(2));
    }

    #[test]
    fn scroll_cosmetics() {
        let mut nav = NavState::new();
        nav.on_scroll(50);
        assert!(!nav.is_scrolled());
        nav.on_scroll(51);
        assert!(nav.is_scrolled());
        assert!(!nav.scroll_top_visible());
        nav.on_scroll(301);
        assert!(nav.scroll_top_visible());
    }

    #[test]
    fn anchor_targets() {
        let s = sections();
        assert_eq!(anchor_target(&s, "#about"), Some(820));
        assert_eq!(anchor_target(&s, "home"), Some(0));
        assert_eq!(anchor_target(&s, "#nowhere"), None);
    }
}
