//! Concrete observer implementations.

use std::time::Duration;

use crossbeam_channel::Sender;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::event::SiteEvent;
use crate::observer::SiteObserver;

/// Observer that forwards events through a channel (non-blocking).
pub struct ChannelObserver {
    sender: Sender<(Duration, SiteEvent)>,
}

impl ChannelObserver {
    /// Create a new channel observer.
    #[must_use]
    pub fn new(sender: Sender<(Duration, SiteEvent)>) -> Self {
        Self { sender }
    }
}

impl SiteObserver for ChannelObserver {
    fn on_event(&self, at: Duration, event: &SiteEvent) {
        // A full or closed channel drops the event; the page never blocks.
        let _ = self.sender.try_send((at, event.clone()));
    }
}

/// Observer that logs events through `tracing`.
///
/// Animation frames go to `debug`, everything else to `info`.
pub struct LoggingObserver;

impl SiteObserver for LoggingObserver {
    fn on_event(&self, at: Duration, event: &SiteEvent) {
        let at_ms = u64::try_from(at.as_millis()).unwrap_or(u64::MAX);
        if event.is_frame() {
            debug!(at_ms, kind = event.name(), ?event, "frame");
        } else {
            info!(at_ms, kind = event.name(), ?event, "page event");
        }
    }
}

/// Observer that keeps every event it sees.
pub struct CollectingObserver {
    events: Mutex<Vec<(Duration, SiteEvent)>>,
}

impl CollectingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of all collected events.
    #[must_use]
    pub fn events(&self) -> Vec<(Duration, SiteEvent)> {
        self.events.lock().clone()
    }

    /// Collected events matching a predicate.
    #[must_use]
    pub fn filtered(&self, pred: impl Fn(&SiteEvent) -> bool) -> Vec<(Duration, SiteEvent)> {
        self.events
            .lock()
            .iter()
            .filter(|(_, e)| pred(e))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drop everything collected so far.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl Default for CollectingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteObserver for CollectingObserver {
    fn on_event(&self, at: Duration, event: &SiteEvent) {
        self.events.lock().push((at, event.clone()));
    }
}

/// Null object: discards every event.
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteObserver for NoOpObserver {
    fn on_event(&self, _at: Duration, _event: &SiteEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::{bounded, unbounded};

    #[test]
    fn channel_observer_forwards() {
        let (tx, rx) = unbounded();
        let obs = ChannelObserver::new(tx);
        obs.on_event(Duration::from_millis(50), &SiteEvent::TypingText("H".into()));
        let (at, event) = rx.try_recv().unwrap();
        assert_eq!(at, Duration::from_millis(50));
        assert_eq!(event, SiteEvent::TypingText("H".into()));
    }

    #[test]
    fn channel_observer_full_channel_does_not_block() {
        let (tx, rx) = bounded(1);
        let obs = ChannelObserver::new(tx);
        obs.on_event(Duration::ZERO, &SiteEvent::Started);
        obs.on_event(Duration::ZERO, &SiteEvent::Stopped);
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn channel_observer_closed_channel() {
        let (tx, rx) = unbounded();
        drop(rx);
        ChannelObserver::new(tx).on_event(Duration::ZERO, &SiteEvent::Started);
    }

    #[test]
    fn collecting_observer_filters() {
        let obs = CollectingObserver::new();
        assert!(obs.is_empty());
        obs.on_event(Duration::ZERO, &SiteEvent::Started);
        obs.on_event(Duration::ZERO, &SiteEvent::TypingText("a".into()));
        assert_eq!(obs.filtered(SiteEvent::is_frame).len(), 1);
        obs.clear();
        assert_eq!(obs.len(), 0);
    }

    #[test]
    fn logging_and_noop_do_not_panic() {
        LoggingObserver.on_event(Duration::ZERO, &SiteEvent::Started);
        LoggingObserver.on_event(Duration::ZERO, &SiteEvent::TypingText("x".into()));
        NoOpObserver::new().on_event(Duration::ZERO, &SiteEvent::Stopped);
    }
}
