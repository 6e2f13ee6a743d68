//! Core library surface for Passbook, a terminal credential keeper backed by
//! a single SQLite table.
//!
//! The binary only wires these pieces together, so tests and other tooling
//! can reuse the store and the shell directly.
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod ui;

/// Persistence entry points used by `main.rs`.
pub use db::{close_store, ensure_schema, fetch_credentials, open_store};

pub use config::AppPaths;
pub use error::ShellError;
pub use models::{Credential, CredentialDraft};

/// The interactive application entry point and state container.
pub use ui::{run_app, App, TerminalClipboard};
