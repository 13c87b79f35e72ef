//! Error types for the llama-cli wrapper.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! A non-zero exit from the wrapped server is not an error here; it is
//! reported as a [`crate::launcher::ChildOutcome`].

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for launcher operations.
///
/// Each variant maps to a specific exit code via [`LauncherError::exit_code`].
#[derive(Error, Debug)]
pub enum LauncherError {
    /// No search location held an executable server.
    #[error(
        "'{binary}' binary not found.\n\
         Searched:\n{}\n\
         Please ensure '{binary}' is executable and in one of these locations, or set {env_var}.",
        format_searched(.searched)
    )]
    ServerNotFound {
        binary: String,
        env_var: String,
        searched: Vec<String>,
    },

    /// The server was found but the OS refused to start it.
    #[error("failed to start '{}': {source}", .path.display())]
    SpawnFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The server started but waiting on it failed.
    #[error("failed to wait for '{}': {source}", .path.display())]
    WaitFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LauncherError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LauncherError::ServerNotFound { .. } => exit_codes::NOT_FOUND,
            LauncherError::SpawnFailed { .. } => exit_codes::SPAWN_FAILURE,
            LauncherError::WaitFailed { .. } => exit_codes::INTERNAL_ERROR,
        }
    }
}

fn format_searched(searched: &[String]) -> String {
    searched
        .iter()
        .map(|location| format!("  - {}", location))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;
