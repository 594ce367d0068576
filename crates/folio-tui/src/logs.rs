//! Scrollable event log panel.

use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{List, ListItem};
use ratatui::Frame;

use folio_core::event::SiteEvent;

use crate::styles::ColorTheme;

/// Maximum number of retained log lines.
pub const LOG_CAPACITY: usize = 500;

/// Scroll state for the log panel.
///
/// `offset` counts lines scrolled back from the newest one.
#[derive(Debug, Clone)]
pub struct LogScrollState {
    pub offset: usize,
    /// Whether the panel follows new lines.
    pub auto_scroll: bool,
}

impl LogScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
        }
    }

    /// Keep the viewed lines in place when a line arrives while scrolled back.
    pub fn on_new_message(&mut self, total_logs: usize) {
        if !self.auto_scroll {
            self.offset = (self.offset + 1).min(total_logs.saturating_sub(1));
        }
    }

    /// Scroll back by one line.
    pub fn scroll_up(&mut self, total_logs: usize) {
        self.page_up(1, total_logs);
    }

    /// Scroll forward by one line.
    pub fn scroll_down(&mut self) {
        self.page_down(1);
    }

    pub fn page_up(&mut self, page_size: usize, total_logs: usize) {
        self.offset = (self.offset + page_size).min(total_logs.saturating_sub(1));
        self.auto_scroll = self.offset == 0;
    }

    pub fn page_down(&mut self, page_size: usize) {
        self.offset = self.offset.saturating_sub(page_size);
        self.auto_scroll = self.offset == 0;
    }

    /// Jump to the oldest line.
    pub fn home(&mut self, total_logs: usize) {
        self.offset = total_logs.saturating_sub(1);
        self.auto_scroll = self.offset == 0;
    }

    /// Jump back to the newest line and follow.
    pub fn end(&mut self) {
        self.offset = 0;
        self.auto_scroll = true;
    }

    /// Range of `total` lines visible in a panel of `height` rows.
    #[must_use]
    pub fn visible_range(&self, total: usize, height: usize) -> std::ops::Range<usize> {
        let end = total.saturating_sub(self.offset);
        end.saturating_sub(height)..end
    }
}

impl Default for LogScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// One log line for a page event.
#[must_use]
pub fn event_line(at: Duration, event: &SiteEvent) -> String {
    let detail = match event {
        SiteEvent::Started | SiteEvent::Stopped | SiteEvent::ContactSending => String::new(),
        SiteEvent::ContactSent => "message delivered".to_string(),
        SiteEvent::TypingText(text) => format!("{text:?}"),
        SiteEvent::SlideChanged { index, cause } => format!("#{} ({cause:?})", index + 1),
        SiteEvent::ThemeChanged(mode) => format!("{mode:?}"),
        SiteEvent::MenuToggled(open) => if *open { "open" } else { "closed" }.to_string(),
        SiteEvent::SectionChanged(id) => id.as_deref().unwrap_or("-").to_string(),
        SiteEvent::Scrolled { y, progress } => format!("y={y} ({progress:.0}%)"),
        SiteEvent::Revealed(id) => id.clone(),
        SiteEvent::ImageLoaded { id, src } => format!("{id} <- {src}"),
        SiteEvent::FilterApplied(name) => name.clone(),
        SiteEvent::CardVisibility { title, visible } => {
            format!("{title} {}", if *visible { "shown" } else { "hidden" })
        }
        SiteEvent::Notification { kind, message, .. } => format!("{}: {message}", kind.label()),
        SiteEvent::NotificationRemoved(id) => format!("#{id}"),
    };
    format!("{:>8.3}s {:<12} {detail}", at.as_secs_f64(), event.name())
}

/// Render the log panel.
pub fn render_logs(
    frame: &mut Frame,
    area: Rect,
    logs: &[String],
    scroll: &LogScrollState,
    theme: &ColorTheme,
) {
    let visible_height = area.height.saturating_sub(2) as usize; // account for borders
    let range = scroll.visible_range(logs.len(), visible_height);

    let items: Vec<ListItem> = logs[range]
        .iter()
        .map(|log| {
            let style = if log.starts_with("[ERROR]") {
                theme.notification_style(folio_core::notify::NotificationKind::Error)
            } else {
                theme.text_style()
            };
            ListItem::new(Line::raw(log.as_str())).style(style)
        })
        .collect();

    let title = if scroll.auto_scroll {
        "Events".to_string()
    } else {
        format!("Events (-{})", scroll.offset)
    };
    frame.render_widget(List::new(items).block(theme.panel(&title)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::event::SlideCause;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn scroll_state_initial() {
        let state = LogScrollState::new();
        assert_eq!(state.offset, 0);
        assert!(state.auto_scroll);
    }

    #[test]
    fn follows_tail_by_default() {
        let state = LogScrollState::new();
        assert_eq!(state.visible_range(10, 4), 6..10);
        assert_eq!(state.visible_range(2, 4), 0..2);
    }

    #[test]
    fn scrolled_back_view_is_pinned() {
        let mut state = LogScrollState::new();
        state.scroll_up(10);
        assert!(!state.auto_scroll);
        assert_eq!(state.visible_range(10, 4), 5..9);
        state.on_new_message(11);
        assert_eq!(state.visible_range(11, 4), 5..9);
    }

    #[test]
    fn page_down_to_bottom_resumes_following() {
        let mut state = LogScrollState::new();
        state.page_up(10, 50);
        assert_eq!(state.offset, 10);
        state.page_down(100);
        assert_eq!(state.offset, 0);
        assert!(state.auto_scroll);
    }

    #[test]
    fn home_and_end() {
        let mut state = LogScrollState::new();
        state.home(30);
        assert_eq!(state.offset, 29);
        assert_eq!(state.visible_range(30, 5), 0..1);
        state.end();
        assert!(state.auto_scroll);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn page_up_clamps_to_oldest() {
        let mut state = LogScrollState::new();
        state.page_up(100, 3);
        assert_eq!(state.offset, 2);
    }

    #[test]
    fn event_lines() {
        let line = event_line(
            Duration::from_millis(6000),
            &SiteEvent::SlideChanged {
                index: 1,
                cause: SlideCause::Auto,
            },
        );
        assert!(line.contains("6.000s"));
        assert!(line.contains("slide"));
        assert!(line.contains("#2 (Auto)"));
    }

    #[test]
    fn render_shows_latest_lines() {
        let logs: Vec<String> = (0..20).map(|i| format!("line {i}")).collect();
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_logs(frame, area, &logs, &LogScrollState::new(), &ColorTheme::dark());
            })
            .unwrap();
        let row: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 4)].symbol().to_string())
            .collect();
        assert!(row.contains("line 19"));
    }
}
