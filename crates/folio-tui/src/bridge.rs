//! Bridge between page events and TUI messages.

use std::time::Duration;

use crossbeam_channel::Sender;

use folio_core::event::SiteEvent;
use folio_core::observer::SiteObserver;

use crate::messages::TuiMessage;

/// Page observer that forwards every event to the TUI channel.
pub struct TuiBridgeObserver {
    tx: Sender<TuiMessage>,
}

impl TuiBridgeObserver {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl SiteObserver for TuiBridgeObserver {
    fn on_event(&self, at: Duration, event: &SiteEvent) {
        let _ = self.tx.try_send(TuiMessage::Event {
            at,
            event: event.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn forwards_events() {
        let (tx, rx) = bounded(4);
        let bridge = TuiBridgeObserver::new(tx);
        bridge.on_event(Duration::from_millis(3), &SiteEvent::Started);
        match rx.try_recv().unwrap() {
            TuiMessage::Event { at, event } => {
                assert_eq!(at.as_millis(), 3);
                assert_eq!(event, SiteEvent::Started);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn full_channel_drops_silently() {
        let (tx, rx) = bounded(1);
        let bridge = TuiBridgeObserver::new(tx);
        bridge.on_event(Duration::ZERO, &SiteEvent::Started);
        bridge.on_event(Duration::ZERO, &SiteEvent::Stopped);
        assert_eq!(rx.len(), 1);
    }
}
