//! Transient toast notifications.

use crate::constants::{NOTIFICATION_EXIT, NOTIFICATION_VISIBLE};
use crate::scheduler::{Scheduler, TaskHandle};

/// Notification flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// Accent color as a CSS hex string.
    #[must_use]
    pub fn accent(self) -> &'static str {
        match self {
            Self::Info => "#3b82f6",
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Lifecycle stage of a shown notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    /// Exit animation running; removed when it ends.
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub phase: NotificationPhase,
    timer: Option<TaskHandle>,
}

/// Stack of notifications, newest last.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    items: Vec<Notification>,
    next_id: u64,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification and arm its exit timer. The task is built from the
    /// notification id.
    pub fn show<T: Clone>(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        timers: &mut Scheduler<T>,
        exit_task: impl FnOnce(u64) -> T,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let timer = timers.once(NOTIFICATION_VISIBLE, exit_task(id));
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
            phase: NotificationPhase::Visible,
            timer: Some(timer),
        });
        id
    }

    /// Start the exit animation and arm removal. Returns `false` for unknown
    /// or already leaving notifications.
    pub fn begin_exit<T: Clone>(
        &mut self,
        id: u64,
        timers: &mut Scheduler<T>,
        remove_task: impl FnOnce(u64) -> T,
    ) -> bool {
        let Some(item) = self
            .items
            .iter_mut()
            .find(|n| n.id == id && n.phase == NotificationPhase::Visible)
        else {
            return false;
        };
        item.phase = NotificationPhase::Leaving;
        item.timer = Some(timers.once(NOTIFICATION_EXIT, remove_task(id)));
        true
    }

    /// Drop a notification. Returns whether it existed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drop every notification and cancel their timers.
    pub fn clear<T: Clone>(&mut self, timers: &mut Scheduler<T>) {
        for item in self.items.drain(..) {
            if let Some(timer) = item.timer {
                timers.cancel(timer);
            }
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Most recent notification.
    #[must_use]
    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }
}
