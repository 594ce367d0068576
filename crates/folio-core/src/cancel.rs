//! Cooperative cancellation for realtime runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::FolioError;

/// Shared flag a signal handler sets to stop a running page.
///
/// ```
/// use folio_core::cancel::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handler_copy = token.clone();
/// handler_copy.cancel();
/// assert!(token.check_cancelled().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// `Err(FolioError::Cancelled)` once cancelled.
    pub fn check_cancelled(&self) -> Result<(), FolioError> {
        if self.is_cancelled() {
            Err(FolioError::Cancelled)
        } else {
            Ok(())
        }
    }
}
