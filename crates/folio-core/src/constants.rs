//! Timing constants, layout thresholds and exit codes.

use std::time::Duration;

/// Delay between two typed characters.
pub const TYPE_DELAY: Duration = Duration::from_millis(50);

/// Pause on a fully typed phrase before deletion starts.
pub const PHRASE_PAUSE: Duration = Duration::from_millis(3000);

/// Delay between two deleted characters.
pub const DELETE_DELAY: Duration = Duration::from_millis(30);

/// Delay before the next phrase starts typing.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(500);

/// Carousel auto-advance period.
pub const SLIDE_INTERVAL: Duration = Duration::from_millis(6000);

/// Scroll offset (px) after which the navbar gets its `scrolled` look.
pub const NAVBAR_SCROLLED_OFFSET: u32 = 50;

/// A section counts as current once scrolled within this many px of its top.
pub const SECTION_ACTIVATION_MARGIN: u32 = 200;

/// Height (px) of the fixed navbar, subtracted from smooth-scroll targets.
pub const NAVBAR_HEIGHT: u32 = 80;

/// Scroll offset (px) after which the scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD: u32 = 300;

/// Minimum visible fraction before a reveal element fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom margin (px) removed from the viewport for reveal checks.
pub const REVEAL_BOTTOM_MARGIN: u32 = 100;

/// Default parallax speed factor.
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;

/// Minimum spacing between two section/progress recomputations.
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(100);

/// Delay before a shown project card fades to full opacity.
pub const FILTER_FADE_IN: Duration = Duration::from_millis(10);

/// Delay before a filtered-out project card is removed from layout.
pub const FILTER_FADE_OUT: Duration = Duration::from_millis(300);

/// Simulated contact form round trip.
pub const CONTACT_SEND_DELAY: Duration = Duration::from_millis(1500);

/// Time a notification stays on screen before leaving.
pub const NOTIFICATION_VISIBLE: Duration = Duration::from_millis(3000);

/// Length of the notification exit animation.
pub const NOTIFICATION_EXIT: Duration = Duration::from_millis(300);

/// Upper bound (exclusive, seconds) of a floating card's animation delay.
pub const FLOATING_DELAY_MAX_SECS: f64 = 0.5;

/// Per-element stagger (seconds) of the entrance animation.
pub const ENTRANCE_STAGGER_SECS: f64 = 0.1;

/// Label of the idle contact form submit button.
pub const SUBMIT_LABEL: &str = "Send Message";

/// Label of the contact form submit button while sending.
pub const SENDING_LABEL: &str = "Sending...";

/// Filter name that matches every project.
pub const FILTER_ALL: &str = "all";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Site content could not be loaded or failed validation.
    pub const ERROR_CONTENT: i32 = 5;
    /// Run cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
