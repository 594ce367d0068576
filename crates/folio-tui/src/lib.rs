//! # folio-tui
//!
//! Terminal rendition of the portfolio page using ratatui with Elm
//! architecture.

pub mod bridge;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod progress;
pub mod projects;
pub mod sections;
pub mod styles;
pub mod testimonials;

pub use bridge::TuiBridgeObserver;
pub use logs::LogScrollState;
pub use messages::TuiMessage;
pub use model::TuiApp;
pub use styles::ColorTheme;
