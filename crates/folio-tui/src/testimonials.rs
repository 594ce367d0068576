//! Testimonial carousel panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use folio_core::site::TestimonialCarousel;
use folio_core::target::ActiveFlag;

use crate::styles::ColorTheme;

/// Indicator row, one dot per slide.
#[must_use]
pub fn dots(indicators: &[bool]) -> String {
    indicators
        .iter()
        .map(|d| if d.is_active() { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the active testimonial and the indicator dots.
pub fn render_testimonials(
    frame: &mut Frame,
    area: Rect,
    carousel: &TestimonialCarousel,
    theme: &ColorTheme,
) {
    let slide = &carousel.active_slide().content;
    let author = if slide.role.is_empty() {
        slide.author.clone()
    } else {
        format!("{}, {}", slide.author, slide.role)
    };
    let lines = vec![
        Line::from(Span::styled(format!("\"{}\"", slide.quote), theme.text_style())),
        Line::from(Span::styled(format!("- {author}"), theme.muted_style())),
        Line::from(vec![
            Span::raw("‹ "),
            Span::styled(dots(carousel.indicators()), theme.header_style()),
            Span::raw(" ›"),
        ]),
    ];
    let title = format!(
        "Testimonials {}/{}",
        carousel.active_index() + 1,
        carousel.len()
    );
    let paragraph = Paragraph::new(lines)
        .block(theme.panel(&title))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::carousel::{Slide, SlideCarousel};
    use folio_core::content::Testimonial;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn carousel() -> TestimonialCarousel {
        let slides = ["one", "two", "three"]
            .iter()
            .map(|q| {
                Slide::new(Testimonial {
                    quote: (*q).to_string(),
                    author: "Bo".into(),
                    role: String::new(),
                })
            })
            .collect();
        SlideCarousel::new(slides, vec![false; 3]).unwrap()
    }

    #[test]
    fn dot_row_marks_active() {
        assert_eq!(dots(&[false, true, false]), "○ ● ○");
    }

    #[test]
    fn renders_active_quote() {
        let mut c = carousel();
        c.next();
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_testimonials(frame, area, &c, &ColorTheme::default());
            })
            .unwrap();
        let top: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 0)].symbol().to_string())
            .collect();
        let quote: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect();
        assert!(top.contains("2/3"));
        assert!(quote.contains("\"two\""));
    }
}
