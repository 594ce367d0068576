//! UI helpers for CLI display.

use console::style;

use folio_core::event::SiteEvent;
use folio_core::notify::NotificationKind;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print an aligned `key: value` line.
pub fn print_field(key: &str, value: &str) {
    if is_color_disabled() {
        println!("  {key:<10} {value}");
    } else {
        println!("  {} {value}", style(format!("{key:<10}")).dim());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

/// Color an already formatted event line by event kind.
#[must_use]
pub fn style_event_line(event: &SiteEvent, line: &str) -> String {
    let styled = style(line);
    let styled = match event {
        SiteEvent::TypingText(_) | SiteEvent::Scrolled { .. } => styled.dim(),
        SiteEvent::SlideChanged { .. } => styled.cyan(),
        SiteEvent::ThemeChanged(_) | SiteEvent::MenuToggled(_) => styled.magenta(),
        SiteEvent::Notification {
            kind: NotificationKind::Error,
            ..
        } => styled.red(),
        SiteEvent::Notification {
            kind: NotificationKind::Success,
            ..
        }
        | SiteEvent::ContactSent => styled.green(),
        SiteEvent::Started | SiteEvent::Stopped => styled.bold(),
        _ => styled,
    };
    styled.to_string()
}
