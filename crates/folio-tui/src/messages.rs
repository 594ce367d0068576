//! TUI message types (Elm Messages).

use std::time::Duration;

use folio_core::event::SiteEvent;

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// A page event forwarded by the bridge observer.
    Event { at: Duration, event: SiteEvent },
    /// Free-form log line.
    Log(String),
    /// Tick event for periodic updates.
    Tick,
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Key press event forwarded from the event loop.
    KeyPress(KeyAction),
    /// Error message.
    Error(String),
    /// Quit the application.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_variants() {
        let msg = TuiMessage::Event {
            at: Duration::from_millis(50),
            event: SiteEvent::TypingText("S".into()),
        };
        assert!(matches!(msg, TuiMessage::Event { .. }));

        let msg = TuiMessage::Resize {
            width: 80,
            height: 24,
        };
        assert!(matches!(msg, TuiMessage::Resize { .. }));

        let msg = TuiMessage::KeyPress(KeyAction::Quit);
        assert!(matches!(msg, TuiMessage::KeyPress(KeyAction::Quit)));
    }
}
