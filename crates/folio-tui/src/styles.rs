//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

use folio_core::notify::NotificationKind;
use folio_core::theme::ThemeMode;

/// Color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTheme {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub highlight: Color,
}

impl ColorTheme {
    /// Light page palette.
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(99, 102, 241),
            secondary: Color::Rgb(236, 72, 153),
            background: Color::Rgb(255, 255, 255),
            text: Color::Rgb(31, 41, 55),
            muted: Color::Rgb(107, 114, 128),
            border: Color::Rgb(209, 213, 219),
            highlight: Color::Rgb(224, 231, 255),
        }
    }

    /// Dark page palette.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(129, 140, 248),
            secondary: Color::Rgb(244, 114, 182),
            background: Color::Rgb(17, 24, 39),
            text: Color::Rgb(243, 244, 246),
            muted: Color::Rgb(156, 163, 175),
            border: Color::Rgb(55, 65, 81),
            highlight: Color::Rgb(49, 46, 129),
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Style for headers.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal text on the page background.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the active item of a group (nav link, dot, filter button).
    #[must_use]
    pub fn active_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Bordered panel with a padded title.
    #[must_use]
    pub fn panel(&self, title: &str) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "))
            .border_style(self.border_style())
            .style(self.text_style())
    }

    /// Accent style for a notification.
    #[must_use]
    pub fn notification_style(&self, kind: NotificationKind) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(hex_color(kind.accent()).unwrap_or(self.primary))
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::light()
    }
}

/// Parse a `#rrggbb` color.
#[must_use]
pub fn hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_follows_mode() {
        assert_eq!(ColorTheme::for_mode(ThemeMode::Dark), ColorTheme::dark());
        assert_eq!(ColorTheme::default(), ColorTheme::light());
        assert_ne!(ColorTheme::light().background, ColorTheme::dark().background);
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(hex_color("#10b981"), Some(Color::Rgb(16, 185, 129)));
        assert_eq!(hex_color("10b981"), None);
        assert_eq!(hex_color("#12345"), None);
        assert_eq!(hex_color("#zzzzzz"), None);
    }

    #[test]
    fn notification_uses_accent() {
        let style = ColorTheme::light().notification_style(NotificationKind::Error);
        assert_eq!(style.bg, Some(Color::Rgb(239, 68, 68)));
    }
}
