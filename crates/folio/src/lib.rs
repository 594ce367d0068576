//! folio library: application logic for the portfolio page binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
