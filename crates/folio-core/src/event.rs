//! Inputs the page reacts to and the changes it publishes.

use crate::contact::Field;
use crate::notify::NotificationKind;
use crate::theme::ThemeMode;

/// Key presses the page handles globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Escape closes the mobile menu.
    Escape,
    /// Ctrl/Cmd + `/`, reserved for a future shortcut.
    ShortcutSlash,
}

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteAction {
    ToggleDarkMode,
    ToggleMenu,
    /// Click on a nav link or in-page anchor (`#id`).
    NavigateTo(String),
    /// Absolute scroll position in px.
    ScrollTo(u32),
    /// Relative scroll in px.
    ScrollBy(i64),
    ScrollToTop,
    PrevSlide,
    NextSlide,
    /// Click on the indicator dot at this index.
    JumpToSlide(usize),
    /// Click on a project filter button.
    Filter(String),
    Focus(Field),
    Blur(Field),
    /// Replace a field's value.
    Input(Field, String),
    Submit,
    Key(KeyInput),
}

/// What moved the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideCause {
    Auto,
    Next,
    Prev,
    Jump,
}

/// A published state change.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteEvent {
    Started,
    Stopped,
    /// New content of the typing target.
    TypingText(String),
    SlideChanged {
        index: usize,
        cause: SlideCause,
    },
    ThemeChanged(ThemeMode),
    MenuToggled(bool),
    /// Active nav section, `None` above the first section.
    SectionChanged(Option<String>),
    Scrolled {
        y: u32,
        progress: f64,
    },
    Revealed(String),
    ImageLoaded {
        id: String,
        src: String,
    },
    FilterApplied(String),
    CardVisibility {
        title: String,
        visible: bool,
    },
    ContactSending,
    ContactSent,
    Notification {
        id: u64,
        kind: NotificationKind,
        message: String,
    },
    NotificationRemoved(u64),
}

impl SiteEvent {
    /// Short, stable name for filtering and display.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::Stopped => "stopped",
            Self::TypingText(_) => "typing",
            Self::SlideChanged { .. } => "slide",
            Self::ThemeChanged(_) => "theme",
            Self::MenuToggled(_) => "menu",
            Self::SectionChanged(_) => "section",
            Self::Scrolled { .. } => "scroll",
            Self::Revealed(_) => "reveal",
            Self::ImageLoaded { .. } => "image",
            Self::FilterApplied(_) => "filter",
            Self::CardVisibility { .. } => "card",
            Self::ContactSending => "contact-sending",
            Self::ContactSent => "contact-sent",
            Self::Notification { .. } => "notification",
            Self::NotificationRemoved(_) => "notification-removed",
        }
    }

    /// Whether the event is one of the high-frequency animation frames.
    #[must_use]
    pub fn is_frame(&self) -> bool {
        matches!(self, Self::TypingText(_) | Self::Scrolled { .. })
    }
}
