//! Workspace-level integration tests for folio.
//!
//! The tests live in `tests/`; golden data in `tests/testdata/`.
