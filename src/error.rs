//! Recoverable errors raised by the shell. Storage failures travel as
//! `anyhow::Error` chains; these are the cases the shell handles on its own.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    /// A required form field was blank after trimming.
    #[error("Name, domain, username and password are required.")]
    MissingRequiredFields,

    /// Edit, delete or copy was requested with no row selected.
    #[error("Select a record to {action} first.")]
    NoSelection { action: &'static str },
}
