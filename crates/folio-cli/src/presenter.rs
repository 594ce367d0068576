//! Console presenter for headless runs.

use std::io::{self, Write};
use std::time::Duration;

use parking_lot::Mutex;

use folio_core::event::SiteEvent;
use folio_core::observer::SiteObserver;

use crate::output::format_event;
use crate::ui;

/// How much of the event stream is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Nothing; only the final summary.
    Quiet,
    /// Every event except typing and scroll frames.
    Normal,
    /// Every event.
    Verbose,
}

impl Verbosity {
    /// `quiet` wins over `verbose`.
    #[must_use]
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Whether `event` is printed at this level.
    #[must_use]
    pub fn shows(self, event: &SiteEvent) -> bool {
        match self {
            Self::Quiet => false,
            Self::Normal => !event.is_frame(),
            Self::Verbose => true,
        }
    }
}

/// Observer printing one line per event.
pub struct ConsolePresenter<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
    verbosity: Verbosity,
    styled: bool,
}

impl ConsolePresenter {
    /// Presenter writing to stdout, styled unless `NO_COLOR` is set.
    #[must_use]
    pub fn stdout(verbosity: Verbosity) -> Self {
        Self::new(io::stdout(), verbosity, !ui::is_color_disabled())
    }
}

impl<W: Write + Send> ConsolePresenter<W> {
    #[must_use]
    pub fn new(out: W, verbosity: Verbosity, styled: bool) -> Self {
        Self {
            out: Mutex::new(out),
            verbosity,
            styled,
        }
    }

    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Consume the presenter, returning its writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> SiteObserver for ConsolePresenter<W> {
    fn on_event(&self, at: Duration, event: &SiteEvent) {
        if !self.verbosity.shows(event) {
            return;
        }
        let line = format_event(at, event);
        let line = if self.styled {
            ui::style_event_line(event, &line)
        } else {
            line
        };
        let mut out = self.out.lock();
        if let Err(err) = writeln!(out, "{line}") {
            tracing::debug!(%err, "event output failed");
        }
    }
}
