//! CLI argument parsing for llama-cli.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Parse errors (missing options, non-numeric `--c`) are reported by clap
//! and terminate the process before any launcher logic runs.

use clap::Parser;

/// A CLI wrapper to run the llama-server binary.
///
/// This tool wraps the 'llama-server' binary, allowing you to configure and
/// run it with specified parameters. The 'llama-server' binary must be
/// accessible by this wrapper: set LLAMA_SERVER_PATH, place it next to this
/// executable (or in ../Resources), or run from its directory.
#[derive(Parser, Debug)]
#[command(name = "llama-cli")]
#[command(author, version)]
pub struct Cli {
    /// The Hugging Face model identifier (e.g., 'meta-llama/Llama-2-7b-chat-hf')
    /// or a local path to the model. Passed to llama-server as --hf-repo.
    #[arg(long = "hf", value_name = "MODEL")]
    pub hf_model: String,

    /// A numeric value, used as the context size for llama-server
    /// (passed as --ctx-size).
    #[arg(short = 'c', long = "c", value_name = "N", allow_negative_numbers = true)]
    pub c_value: i64,
}

impl Cli {
    /// Parse command-line arguments, exiting with a usage error on failure.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
