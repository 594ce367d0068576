//! Observer pattern for page state changes.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use crate::event::SiteEvent;

/// Observer trait for receiving page events.
pub trait SiteObserver: Send + Sync {
    /// Receive an event that happened at virtual time `at`.
    fn on_event(&self, at: Duration, event: &SiteEvent);
}

/// Subject that manages a collection of observers.
pub struct SiteSubject {
    observers: RwLock<Vec<Arc<dyn SiteObserver>>>,
}

impl SiteSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn SiteObserver>) {
        self.observers.write().push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Notify all observers of an event.
    pub fn notify(&self, at: Duration, event: &SiteEvent) {
        let observers = self.observers.read();
        for observer in observers.iter() {
            observer.on_event(at, event);
        }
    }

    /// Get the number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.read().len()
    }
}

impl Default for SiteSubject {
    fn default() -> Self {
        Self::new()
    }
}
