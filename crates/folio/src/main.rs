//! folio: portfolio page interactions in the terminal.

use folio_cli::ui;
use folio_lib::{app, config, errors};

fn main() {
    // Logs go to stderr so they never land on the TUI screen.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
