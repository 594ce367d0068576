//! Navigation panel: section links, menu state and revealed elements.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use folio_core::site::Site;

use crate::styles::ColorTheme;

/// Render the nav links with the active one highlighted.
pub fn render_sections(frame: &mut Frame, area: Rect, site: &Site, theme: &ColorTheme) {
    let active = site.nav().active_section();
    let mut lines: Vec<Line> = site
        .content()
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            if Some(i) == active {
                Line::from(Span::styled(format!("▸ {}", section.title), theme.active_style()))
            } else {
                Line::from(Span::styled(format!("  {}", section.title), theme.text_style()))
            }
        })
        .collect();

    let reveal = site.reveal();
    lines.push(Line::from(Span::styled(
        format!("revealed {}/{}", reveal.revealed().len(), reveal.len()),
        theme.muted_style(),
    )));
    if site.nav().scroll_top_visible() {
        lines.push(Line::from(Span::styled("↑ back to top (g)", theme.muted_style())));
    }

    let title = if site.nav().menu_open() { "Menu ☰ open" } else { "Menu" };
    frame.render_widget(Paragraph::new(lines).block(theme.panel(title)), area);
}
