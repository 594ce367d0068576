//! Keyboard shortcut handling.
//!
//! Two maps: page navigation, and text entry while a contact field has
//! focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    Pause,
    ToggleDarkMode,
    ToggleMenu,
    /// Escape: closes the menu, or leaves the form while editing.
    Escape,
    PrevSlide,
    NextSlide,
    /// Jump to the slide at this zero-based index.
    JumpToSlide(usize),
    CycleFilter,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,
    LogUp,
    LogDown,
    /// Jump to the oldest log line.
    LogOldest,
    /// Jump to the newest log line and follow.
    LogNewest,
    /// Next section link.
    NextSection,
    /// Focus the next contact field.
    NextField,
    Submit,
    Input(char),
    Backspace,
    /// Ctrl + `/`.
    Shortcut,
    None,
}

/// Map a key event to an action. `editing` selects the text-entry map.
#[must_use]
pub fn map_key(key: KeyEvent, editing: bool) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => KeyAction::Cancel,
        KeyCode::Char('/') if ctrl => KeyAction::Shortcut,
        KeyCode::Esc => KeyAction::Escape,
        KeyCode::Tab => KeyAction::NextField,
        _ if editing => map_editing(key),
        _ => map_browsing(key),
    }
}

fn map_editing(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Char(c) => KeyAction::Input(c),
        _ => KeyAction::None,
    }
}

fn map_browsing(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('p') => KeyAction::Pause,
        KeyCode::Char('d') => KeyAction::ToggleDarkMode,
        KeyCode::Char('m') => KeyAction::ToggleMenu,
        KeyCode::Char('f') => KeyAction::CycleFilter,
        KeyCode::Char('n') => KeyAction::NextSection,
        KeyCode::Left | KeyCode::Char('h') => KeyAction::PrevSlide,
        KeyCode::Right | KeyCode::Char('l') => KeyAction::NextSlide,
        KeyCode::Char(c @ '1'..='9') => {
            KeyAction::JumpToSlide(c.to_digit(10).map_or(0, |d| d as usize - 1))
        }
        KeyCode::Up | KeyCode::Char('k') => KeyAction::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::ScrollDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home | KeyCode::Char('g') => KeyAction::ScrollTop,
        KeyCode::End | KeyCode::Char('G') => KeyAction::ScrollBottom,
        KeyCode::Char('[') => KeyAction::LogUp,
        KeyCode::Char(']') => KeyAction::LogDown,
        KeyCode::Char('{') => KeyAction::LogOldest,
        KeyCode::Char('}') => KeyAction::LogNewest,
        KeyCode::Enter => KeyAction::Submit,
        _ => KeyAction::None,
    }
}
