//! Exit code constants for the llama-cli wrapper.
//!
//! When the wrapped server starts, its own exit code is passed through
//! unchanged. The constants below cover the cases where the wrapper itself
//! decides the outcome:
//! - 0: Success
//! - 1: Internal failure (waiting on the child, logging setup)
//! - 2: Usage error (reported by clap before the launcher runs)
//! - 126: Server found but could not be started
//! - 127: Server not found
//!
//! 126/127 follow the shell convention for "not executable" and "not found".

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Internal failure: the wrapper could not complete for a reason unrelated
/// to the user's input.
pub const INTERNAL_ERROR: i32 = 1;

/// Usage error: missing or malformed command-line options.
pub const USAGE_ERROR: i32 = 2;

/// The server executable was found but could not be started.
pub const SPAWN_FAILURE: i32 = 126;

/// No search location produced an executable server.
pub const NOT_FOUND: i32 = 127;

/// Base added to a signal number when the child was killed by a signal.
pub const SIGNAL_BASE: i32 = 128;
