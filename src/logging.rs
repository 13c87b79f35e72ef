//! Logging setup for `llama-cli` using `tracing` + `tracing-subscriber`.
//!
//! The level comes from the `LLAMA_CLI_LOG` environment variable (e.g.
//! "info", "debug") and defaults to `warn`.
//!
//! Logs are sent to STDERR. Stdout carries the progress lines and the
//! server's own output, and must stay free of diagnostics.

use anyhow::{Result, anyhow};
use tracing_subscriber::fmt;

use crate::config::LOG_ENV_VAR;

/// Initialise the global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging() -> Result<()> {
    let level = std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|s| parse_level_str(&s))
        .unwrap_or(tracing::Level::WARN);

    fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {}", e))
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
