//! # folio-core
//!
//! State machines behind a one-page portfolio: the typing headline, the
//! testimonial carousel and the scroll, filter, contact and theme
//! interactions around them, all driven by a deterministic timer queue.

pub mod cancel;
pub mod carousel;
pub mod constants;
pub mod contact;
pub mod content;
pub mod decor;
pub mod error;
pub mod event;
pub mod filter;
pub mod nav;
pub mod notify;
pub mod observer;
pub mod observers;
pub mod options;
pub mod scheduler;
pub mod scroll;
pub mod site;
pub mod target;
pub mod theme;
pub mod typing;

use std::time::Duration;

// Re-exports
pub use cancel::CancellationToken;
pub use carousel::{Slide, SlideCarousel};
pub use constants::exit_codes;
pub use content::SiteContent;
pub use error::FolioError;
pub use event::{KeyInput, SiteAction, SiteEvent, SlideCause};
pub use observer::{SiteObserver, SiteSubject};
pub use options::{Options, TypingTimings};
pub use scheduler::{Scheduler, TaskHandle};
pub use site::{Site, SiteTask};
pub use theme::{FileStore, MemoryStore, PreferenceStore, ThemeMode};
pub use typing::{TypingAnimator, TypingMode};

/// Replay the typing animation for `duration` and return every text frame
/// with the time it was written.
///
/// # Example
/// ```
/// use std::time::Duration;
///
/// let frames = folio_core::typing_timeline(&["Hi"], Duration::from_millis(100)).unwrap();
/// assert_eq!(frames[0], (Duration::ZERO, "H".to_string()));
/// assert_eq!(frames[1], (Duration::from_millis(50), "Hi".to_string()));
/// ```
pub fn typing_timeline(
    phrases: &[&str],
    duration: Duration,
) -> Result<Vec<(Duration, String)>, FolioError> {
    let phrases = phrases.iter().map(|p| (*p).to_string()).collect();
    let mut animator = TypingAnimator::new(phrases, target::TextFrames::new())?;
    let mut timers = Scheduler::new();

    animator.start(&mut timers, ());
    let mut frames: Vec<_> = animator
        .target()
        .frames()
        .iter()
        .map(|f| (Duration::ZERO, f.clone()))
        .collect();
    while timers.pop_due(duration).is_some() {
        let seen = animator.target().frames().len();
        animator.fire(&mut timers, ());
        let at = timers.now();
        frames.extend(animator.target().frames()[seen..].iter().map(|f| (at, f.clone())));
    }
    Ok(frames)
}
