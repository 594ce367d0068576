//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

const BROWSE_KEYS: &[(&str, &str)] = &[
    ("q", "quit"),
    ("d", "dark"),
    ("m", "menu"),
    ("←/→", "slides"),
    ("f", "filter"),
    ("j/k", "scroll"),
    ("n", "section"),
    ("[/] {/}", "log"),
    ("tab", "contact"),
    ("p", "pause"),
];

const EDIT_KEYS: &[(&str, &str)] = &[
    ("tab", "next field"),
    ("enter", "send"),
    ("esc", "leave form"),
    ("ctrl+c", "quit"),
];

/// Render the footer panel with keyboard shortcuts for the current mode.
pub fn render_footer(frame: &mut Frame, area: Rect, editing: bool, theme: &ColorTheme) {
    let keys = if editing { EDIT_KEYS } else { BROWSE_KEYS };
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (i, (key, label)) in keys.iter().enumerate() {
        spans.push(Span::styled(*key, theme.header_style()));
        let sep = if i + 1 == keys.len() { "" } else { " | " };
        spans.push(Span::raw(format!(": {label}{sep}")));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border_style());
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn footer_row(width: u16, editing: bool) -> String {
        let backend = TestBackend::new(width, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area, editing, &ColorTheme::default());
            })
            .unwrap();
        (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect()
    }

    #[test]
    fn browsing_shortcuts() {
        let row = footer_row(140, false);
        assert!(row.contains("quit"));
        assert!(row.contains("dark"));
        assert!(row.contains("slides"));
        assert!(row.contains("filter"));
    }

    #[test]
    fn editing_shortcuts() {
        let row = footer_row(100, true);
        assert!(row.contains("next field"));
        assert!(row.contains("send"));
        assert!(!row.contains("dark"));
    }

    #[test]
    fn render_footer_small_area() {
        footer_row(20, false);
    }
}
