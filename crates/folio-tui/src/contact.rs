//! Contact form panel and notification toasts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;

use folio_core::contact::{ContactForm, Field};
use folio_core::notify::{NotificationPhase, Notifier};

use crate::styles::ColorTheme;

/// Render the form. `editing` is the field receiving keystrokes.
pub fn render_contact(
    frame: &mut Frame,
    area: Rect,
    form: &ContactForm,
    editing: Option<Field>,
    theme: &ColorTheme,
) {
    let mut lines = Vec::new();
    for field in Field::ALL {
        let state = form.field(field);
        // Floated labels sit above the value; resting labels act as placeholder.
        let label_style = if state.focused {
            theme.header_style()
        } else {
            theme.muted_style()
        };
        let cursor = if editing == Some(field) { "_" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>8}: ", field.label()), label_style),
            Span::styled(format!("{}{cursor}", state.value), theme.text_style()),
        ]));
    }
    let button_style = if form.is_disabled() {
        theme.muted_style()
    } else {
        theme.active_style()
    };
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", form.button_label()),
        button_style,
    )));

    frame.render_widget(Paragraph::new(lines).block(theme.panel("Contact")), area);
}

/// Render notifications stacked from the top right corner of `area`.
pub fn render_notifications(frame: &mut Frame, area: Rect, notifier: &Notifier, theme: &ColorTheme) {
    let width = area.width.min(44);
    let mut y = area.y;
    for item in notifier.items() {
        if y + 3 > area.y + area.height {
            break;
        }
        let toast = Rect {
            x: area.x + area.width - width,
            y,
            width,
            height: 3,
        };
        let mut style = theme.notification_style(item.kind);
        if item.phase == NotificationPhase::Leaving {
            style = style.add_modifier(ratatui::style::Modifier::DIM);
        }
        let paragraph = Paragraph::new(item.message.as_str())
            .style(style)
            .block(theme.panel(item.kind.label()).style(style))
            .wrap(Wrap { trim: true });
        frame.render_widget(Clear, toast);
        frame.render_widget(paragraph, toast);
        y += 3;
    }
}
