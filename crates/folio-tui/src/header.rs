//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Borders, Paragraph};
use ratatui::Frame;

use folio_core::site::Site;

use crate::styles::ColorTheme;

/// Render the header: owner, theme toggle icon, active section and clock.
pub fn render_header(frame: &mut Frame, area: Rect, site: &Site, paused: bool, theme: &ColorTheme) {
    let section = site.active_section_id().unwrap_or("-");
    let navbar = if site.nav().is_scrolled() {
        "scrolled"
    } else {
        "top"
    };
    let mut spans = vec![
        Span::styled(site.content().owner.clone(), theme.header_style()),
        Span::styled(format!(" | [{}] ", site.theme().icon()), theme.muted_style()),
        Span::raw(format!("#{section} | navbar: {navbar} | t={:.1}s", site.now().as_secs_f64())),
    ];
    if site.nav().menu_open() {
        spans.push(Span::styled(" | menu open", theme.active_style()));
    }
    if paused {
        spans.push(Span::styled(" | PAUSED", theme.active_style()));
    }

    let block = theme.panel("folio").borders(Borders::BOTTOM);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
