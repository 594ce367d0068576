//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use folio_core::options::{Options, TypingTimings};

/// Default headless run length.
const DEFAULT_SIMULATION: Duration = Duration::from_secs(20);

/// folio: a portfolio page's typing animation, testimonial carousel and
/// scroll effects, in the terminal.
#[derive(Parser, Debug)]
#[command(name = "folio", version)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Launch the interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Headless run length (e.g. "18s", "2m"); default 20s, unbounded with --follow.
    #[arg(long, value_parser = parse_duration, env = "FOLIO_SIMULATE")]
    pub simulate: Option<Duration>,

    /// Virtual time advanced per headless step.
    #[arg(long, value_parser = parse_duration, default_value = "100ms")]
    pub step: Duration,

    /// Pace the headless run in real time until interrupted.
    #[arg(long)]
    pub follow: bool,

    /// Site content JSON file replacing the built-in page.
    #[arg(long, env = "FOLIO_CONTENT")]
    pub content: Option<PathBuf>,

    /// Comma-separated typing phrases overriding the content's.
    #[arg(long, value_delimiter = ',')]
    pub phrases: Vec<String>,

    /// Delay after each typed character (0 = default).
    #[arg(long, value_parser = parse_duration, default_value = "0")]
    pub type_delay: Duration,

    /// Pause on a fully typed phrase (0 = default).
    #[arg(long, value_parser = parse_duration, default_value = "0")]
    pub pause: Duration,

    /// Delay after each deleted character (0 = default).
    #[arg(long, value_parser = parse_duration, default_value = "0")]
    pub delete_delay: Duration,

    /// Delay before the next phrase starts (0 = default).
    #[arg(long, value_parser = parse_duration, default_value = "0")]
    pub advance_delay: Duration,

    /// Testimonial auto-advance period (0 = default).
    #[arg(long, value_parser = parse_duration, default_value = "0")]
    pub slide_interval: Duration,

    /// Start in dark mode.
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Start in light mode.
    #[arg(long)]
    pub light: bool,

    /// Never write the theme preference.
    #[arg(long)]
    pub no_persist: bool,

    /// Preference file location (default: XDG config directory).
    #[arg(long, env = "FOLIO_PREFS")]
    pub prefs: Option<PathBuf>,

    /// Delete the saved theme preference and exit.
    #[arg(long, conflicts_with_all = ["tui", "dark", "light"])]
    pub reset_prefs: bool,

    /// Seed for decorative animation delays.
    #[arg(long, env = "FOLIO_SEED")]
    pub seed: Option<u64>,

    /// Only print the final summary.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also print typing and scroll frames.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Page options from the timing flags; zero durations fall back to defaults.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            typing: TypingTimings {
                type_delay: self.type_delay,
                pause: self.pause,
                delete_delay: self.delete_delay,
                advance_delay: self.advance_delay,
            },
            slide_interval: self.slide_interval,
            persist_theme: !self.no_persist,
            seed: self.seed,
        }
        .normalize()
    }

    /// Theme forced by `--dark` / `--light`.
    #[must_use]
    pub fn forced_dark(&self) -> Option<bool> {
        if self.dark {
            Some(true)
        } else if self.light {
            Some(false)
        } else {
            None
        }
    }

    /// Headless run length; `None` means run until interrupted.
    #[must_use]
    pub fn simulation_length(&self) -> Option<Duration> {
        match (self.simulate, self.follow) {
            (Some(length), _) => Some(length),
            (None, true) => None,
            (None, false) => Some(DEFAULT_SIMULATION),
        }
    }
}

/// Parse a duration string like "500ms", "3s", "5m", "1h" or bare seconds.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let (digits, unit_ms) = if let Some(ms) = s.strip_suffix("ms") {
        (ms, 1)
    } else if let Some(secs) = s.strip_suffix('s') {
        (secs, 1000)
    } else if let Some(mins) = s.strip_suffix('m') {
        (mins, 60_000)
    } else if let Some(hours) = s.strip_suffix('h') {
        (hours, 3_600_000)
    } else {
        (s, 1000)
    };
    let n: u64 = digits
        .trim()
        .parse()
        .map_err(|_| format!("invalid duration '{s}'"))?;
    n.checked_mul(unit_ms)
        .map(Duration::from_millis)
        .ok_or_else(|| format!("duration '{s}' is too large"))
}
