//! Entry point for the `llama-cli` wrapper.
//!
//! Parses arguments, runs the launcher, and exits with the server's own exit
//! code or the wrapper's code for the error that stopped it.

use llama_cli::cli::Cli;
use llama_cli::config::LLAMA_SERVER;
use llama_cli::context::LaunchContext;
use llama_cli::{exit_codes, launcher, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Usage errors exit here, before any resolution happens.
    let cli = Cli::parse_args();

    if let Err(err) = logging::init_logging() {
        eprintln!("Error: {:#}", err);
        return to_exit_code(exit_codes::INTERNAL_ERROR);
    }

    let ctx = LaunchContext::resolve(&LLAMA_SERVER);

    match launcher::launch(&LLAMA_SERVER, &ctx, &cli.hf_model, cli.c_value) {
        Ok(outcome) => to_exit_code(outcome.exit_code()),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            to_exit_code(err.exit_code())
        }
    }
}

/// Codes outside 0..=255 (possible only on Windows) collapse to 1.
fn to_exit_code(code: i32) -> ExitCode {
    u8::try_from(code)
        .map(ExitCode::from)
        .unwrap_or(ExitCode::FAILURE)
}
