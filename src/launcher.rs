//! Server launch: resolve, announce, spawn, wait.
//!
//! The child inherits stdin, stdout and stderr, and the wrapper blocks on a
//! single wait with no timeout. Progress lines go to stdout before the child
//! starts and once after it exits.

use crate::config::LaunchProfile;
use crate::context::LaunchContext;
use crate::error::{LauncherError, Result};
use crate::exit_codes;
use crate::resolve::resolve_server;
use crate::server_args::ServerArgs;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, info};

/// How the wrapped server ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOutcome {
    /// Exited with code 0.
    Success,
    /// Exited with a non-zero code.
    Failed(i32),
    /// Killed by a signal (Unix only).
    Signaled(i32),
    /// Ended without a code or signal the platform could report.
    Unknown,
}

impl ChildOutcome {
    /// Classify an exit status.
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(0) => ChildOutcome::Success,
            Some(code) => ChildOutcome::Failed(code),
            None => signal_of(&status).map_or(ChildOutcome::Unknown, ChildOutcome::Signaled),
        }
    }

    /// Exit code the wrapper should terminate with.
    ///
    /// Child codes pass through unchanged; a signal becomes `128 + signal`.
    pub fn exit_code(&self) -> i32 {
        match self {
            ChildOutcome::Success => exit_codes::SUCCESS,
            ChildOutcome::Failed(code) => *code,
            ChildOutcome::Signaled(signal) => exit_codes::SIGNAL_BASE + signal,
            ChildOutcome::Unknown => exit_codes::INTERNAL_ERROR,
        }
    }

    /// Closing progress line.
    pub fn summary(&self, name: &str) -> String {
        match self {
            ChildOutcome::Success => format!("{} exited successfully.", name),
            ChildOutcome::Failed(code) => format!("{} exited with status: {}.", name, code),
            ChildOutcome::Signaled(signal) => {
                format!("{} was terminated by signal {}.", name, signal)
            }
            ChildOutcome::Unknown => format!("{} exited with an unknown status.", name),
        }
    }
}

#[cfg(unix)]
fn signal_of(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Run the full launch sequence for one invocation.
///
/// # Returns
///
/// * `Ok(ChildOutcome)` - The server ran; its outcome decides the exit code
/// * `Err(LauncherError::ServerNotFound)` - Nothing to run (exit code 127)
/// * `Err(LauncherError::SpawnFailed)` - The OS refused to start it (exit code 126)
pub fn launch(
    profile: &LaunchProfile,
    ctx: &LaunchContext,
    model: &str,
    numeric: i64,
) -> Result<ChildOutcome> {
    let name = profile.display_name();

    println!("LlamaCLI preparing to launch {}...", name);
    println!("  Model (--hf): {}", model);
    println!("  C Value (--c): {}", numeric);

    let resolution = resolve_server(profile, ctx, |warning| {
        println!("Warning: {}", warning);
    })?;
    println!("{}", resolution.found_message(profile));

    let args = ServerArgs::build(profile, model, numeric);
    println!("Executing: {}", args.command_line(&resolution.path));

    let status = run_server(&resolution.path, &args)?;
    let outcome = ChildOutcome::from_status(status);
    info!(?outcome, "server exited");

    println!();
    println!("{}", outcome.summary(name));

    Ok(outcome)
}

/// Spawn the server with inherited standard streams and wait for it.
pub fn run_server(path: &Path, args: &ServerArgs) -> Result<ExitStatus> {
    let mut child = Command::new(path)
        .args(args.iter())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| LauncherError::SpawnFailed {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(pid = child.id(), path = %path.display(), "spawned server");

    child.wait().map_err(|source| LauncherError::WaitFailed {
        path: path.to_path_buf(),
        source,
    })
}
