//! Application entry point and dispatch.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use folio_cli::output::summary_lines;
use folio_cli::ui;
use folio_cli::{ConsolePresenter, Verbosity};
use folio_core::cancel::CancellationToken;
use folio_core::content::SiteContent;
use folio_core::error::FolioError;
use folio_core::site::Site;
use folio_core::theme::{FileStore, MemoryStore, PreferenceStore};

use crate::config::AppConfig;
use crate::errors::ConfigError;
use crate::version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        folio_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if config.reset_prefs {
        return reset_prefs(&preference_file(config));
    }

    if config.step.is_zero() {
        return Err(ConfigError("--step must be positive".into()).into());
    }

    let site = build_site(config)?;

    // Handle TUI mode
    if config.tui {
        return run_tui(site);
    }

    // Headless mode
    let cancel = CancellationToken::new();
    if config.follow {
        ctrlc_handler(cancel.clone())?;
    }
    run_headless(site, config, &cancel)
}

/// Load content, apply flag overrides and open the preference store.
pub fn build_site(config: &AppConfig) -> Result<Site> {
    let mut content = match &config.content {
        Some(path) => load_content(path)
            .with_context(|| format!("loading content from {}", path.display()))?,
        None => SiteContent::default(),
    };
    if !config.phrases.is_empty() {
        content.phrases.clone_from(&config.phrases);
    }

    let store = open_store(config)?;
    let site = Site::new(content, store, config.options())?;
    tracing::debug!(theme = ?site.theme(), "site built");
    Ok(site)
}

fn load_content(path: &std::path::Path) -> Result<SiteContent, FolioError> {
    SiteContent::load(path).map_err(|err| match err {
        FolioError::Io(io) => FolioError::Content(io.to_string()),
        other => other,
    })
}

fn preference_file(config: &AppConfig) -> FileStore {
    config
        .prefs
        .as_ref()
        .map_or_else(FileStore::default_location, FileStore::new)
}

/// Remove the saved theme preference.
pub fn reset_prefs(file: &FileStore) -> Result<()> {
    let path = file.path().display();
    if file
        .delete()
        .with_context(|| format!("deleting theme preference {path}"))?
    {
        println!("Removed theme preference {path}");
    } else {
        println!("No theme preference at {path}");
    }
    Ok(())
}

fn open_store(config: &AppConfig) -> Result<Box<dyn PreferenceStore>> {
    let file = preference_file(config);

    if config.no_persist {
        // Still honor a saved preference, but keep toggles in memory.
        let saved = file.load().unwrap_or_else(|err| {
            tracing::warn!(%err, "could not read theme preference");
            None
        });
        let initial = config.forced_dark().or(saved);
        return Ok(Box::new(MemoryStore::new(initial)));
    }

    if let Some(dark) = config.forced_dark() {
        file.save(dark)
            .with_context(|| format!("saving theme preference to {}", file.path().display()))?;
    }
    Ok(Box::new(file))
}

fn run_tui(site: Site) -> Result<()> {
    let mut app = folio_tui::TuiApp::new(site);
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;
    Ok(())
}

/// Drive the page on its virtual clock, printing events as they happen.
///
/// With `--follow` each step also sleeps for its length, so the run plays
/// out in real time until the length elapses or Ctrl+C is pressed.
pub fn run_headless(mut site: Site, config: &AppConfig, cancel: &CancellationToken) -> Result<()> {
    let verbosity = Verbosity::from_flags(config.quiet, config.verbose);
    if verbosity != Verbosity::Quiet {
        ui::print_header(&version::full_version());
    }
    site.subscribe(Arc::new(ConsolePresenter::stdout(verbosity)));

    site.start();
    let outcome = advance(
        &mut site,
        config.simulation_length(),
        config.step,
        config.follow,
        cancel,
    );
    site.stop();
    outcome?;

    ui::print_header("Summary");
    for (key, value) in summary_lines(&site) {
        ui::print_field(key, &value);
    }
    Ok(())
}

fn advance(
    site: &mut Site,
    length: Option<Duration>,
    step: Duration,
    realtime: bool,
    cancel: &CancellationToken,
) -> Result<(), FolioError> {
    loop {
        cancel.check_cancelled()?;
        let next = site.now() + step;
        let next = length.map_or(next, |length| next.min(length));
        if length.is_some_and(|length| site.now() >= length) {
            return Ok(());
        }
        site.advance_to(next);
        if realtime {
            std::thread::sleep(step);
        }
    }
}

fn ctrlc_handler(cancel: CancellationToken) -> Result<()> {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .context("installing Ctrl+C handler")
}
