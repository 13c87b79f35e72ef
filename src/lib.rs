//! llama-cli: locate the `llama-server` binary and run it.
//!
//! The wrapper resolves the server executable through a fixed-order search,
//! pairs the two user inputs with fixed flags, runs the server with inherited
//! standard streams, and mirrors its exit code.

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod launcher;
pub mod logging;
pub mod resolve;
pub mod server_args;

#[cfg(test)]
mod test_support;
