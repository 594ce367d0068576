//! Project grid panel with filter buttons.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use folio_core::filter::ProjectFilter;

use crate::styles::ColorTheme;

/// Render the filter buttons and the cards still in layout.
///
/// Cards mid-fade are drawn muted.
pub fn render_projects(frame: &mut Frame, area: Rect, filter: &ProjectFilter, theme: &ColorTheme) {
    let mut buttons = Vec::new();
    for (i, name) in filter.buttons().iter().enumerate() {
        let style = if i == filter.active_index() {
            theme.active_style()
        } else {
            theme.muted_style()
        };
        buttons.push(Span::styled(format!("[{name}]"), style));
        buttons.push(Span::raw(" "));
    }

    let mut lines = vec![Line::from(buttons)];
    for card in filter.cards().iter().filter(|c| c.displayed) {
        let style = if card.is_shown() {
            theme.text_style()
        } else {
            theme.muted_style()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("• {}", card.title), style),
            Span::styled(format!("  {}", card.category), theme.muted_style()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(theme.panel("Projects")), area);
}
