//! Hero panel: typing headline and decorations.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use folio_core::site::Site;

use crate::styles::ColorTheme;

/// Render the hero with the typed headline followed by a cursor.
pub fn render_hero(frame: &mut Frame, area: Rect, site: &Site, theme: &ColorTheme) {
    let decor = site.decorations();
    let floating = decor
        .floating
        .iter()
        .map(|d| format!("{}ms", d.as_millis()))
        .collect::<Vec<_>>()
        .join(" ");
    let parallax = site
        .parallax_offsets()
        .iter()
        .map(|(id, offset)| format!("{id} {offset:.0}px"))
        .collect::<Vec<_>>()
        .join(", ");

    let lines = vec![
        Line::from(vec![
            Span::styled("Hi, I'm ", theme.muted_style()),
            Span::styled(site.content().owner.clone(), theme.header_style()),
        ]),
        Line::from(vec![
            Span::styled(site.typing_text().to_string(), theme.text_style()),
            Span::styled("|", theme.active_style()),
        ]),
        Line::from(Span::styled(
            format!("floating cards: {floating}  parallax: {parallax}"),
            theme.muted_style(),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .block(theme.panel("Home"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
