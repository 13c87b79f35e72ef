//! Server executable resolution.
//!
//! The server is searched for in a fixed order and the first executable
//! candidate wins:
//!
//! 1. The override environment variable (a non-executable value only warns)
//! 2. Next to the wrapper's own executable
//! 3. In `../Resources/` relative to the wrapper (app bundle layout)
//! 4. In the current working directory
//!
//! Candidates are probed lazily: a later location is never touched once an
//! earlier one matches. The search is a pure function of the
//! [`LaunchProfile`] and [`LaunchContext`], so it can be exercised against
//! temporary directories without touching process-global state.

use crate::config::LaunchProfile;
use crate::context::LaunchContext;
use crate::error::{LauncherError, Result};
use crate::fs::is_executable_file;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Where a candidate path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchLocation {
    /// Explicit path from the override environment variable.
    EnvOverride,
    /// Same directory as the wrapper executable.
    AlongsideExecutable,
    /// `../Resources/` relative to the wrapper executable.
    BundleResources,
    /// Current working directory.
    CurrentDirectory,
}

impl SearchLocation {
    /// All locations, in search order.
    pub const ORDER: [SearchLocation; 4] = [
        SearchLocation::EnvOverride,
        SearchLocation::AlongsideExecutable,
        SearchLocation::BundleResources,
        SearchLocation::CurrentDirectory,
    ];
}

impl fmt::Display for SearchLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SearchLocation::EnvOverride => "environment override",
            SearchLocation::AlongsideExecutable => "alongside the CLI executable",
            SearchLocation::BundleResources => "Resources folder",
            SearchLocation::CurrentDirectory => "current directory",
        };
        f.write_str(label)
    }
}

/// One probed candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchAttempt {
    pub location: SearchLocation,
    pub path: PathBuf,
    pub found: bool,
}

/// Successful resolution.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Path to hand to the OS when spawning.
    pub path: PathBuf,
    /// Which rule matched.
    pub location: SearchLocation,
    /// Every candidate probed, in order; the last one is the match.
    pub attempts: Vec<SearchAttempt>,
}

impl Resolution {
    /// Progress line announcing which location matched.
    pub fn found_message(&self, profile: &LaunchProfile) -> String {
        let name = profile.display_name();
        let path = self.path.display();
        match self.location {
            SearchLocation::EnvOverride => {
                format!("Using {} from {}: {}", name, profile.path_env_var, path)
            }
            SearchLocation::AlongsideExecutable => {
                format!("Found {} alongside the CLI executable: {}", name, path)
            }
            SearchLocation::BundleResources => {
                format!("Found {} in Resources folder: {}", name, path)
            }
            SearchLocation::CurrentDirectory => {
                format!("Found {} in current directory: {}", name, path)
            }
        }
    }
}

/// Candidate paths in search order.
///
/// Locations that cannot be formed (no override set, unknown executable
/// directory) are omitted.
pub fn candidates(
    profile: &LaunchProfile,
    ctx: &LaunchContext,
) -> Vec<(SearchLocation, PathBuf)> {
    let mut out = Vec::with_capacity(SearchLocation::ORDER.len());

    if let Some(path) = ctx.override_path() {
        out.push((SearchLocation::EnvOverride, path));
    }

    if let Some(exe_dir) = &ctx.exe_dir {
        out.push((
            SearchLocation::AlongsideExecutable,
            exe_dir.join(profile.binary_name),
        ));

        if let Some(parent) = exe_dir.parent() {
            out.push((
                SearchLocation::BundleResources,
                parent.join(profile.resources_dir).join(profile.binary_name),
            ));
        }
    }

    out.push((
        SearchLocation::CurrentDirectory,
        ctx.cwd.join(profile.binary_name),
    ));

    out
}

/// Find the server executable.
///
/// `warn` receives a message when the override variable is set but does not
/// name an executable file. It is called at most once, before the search
/// moves on, so the warning is shown even if nothing is found.
///
/// # Returns
///
/// * `Ok(Resolution)` - The first executable candidate, plus the search trail
/// * `Err(LauncherError::ServerNotFound)` - No candidate was executable
///   (exit code 127); the error lists every location searched
pub fn resolve_server<W>(
    profile: &LaunchProfile,
    ctx: &LaunchContext,
    mut warn: W,
) -> Result<Resolution>
where
    W: FnMut(String),
{
    let mut attempts = Vec::new();

    for (location, path) in candidates(profile, ctx) {
        let found = is_executable_file(&path);
        debug!(%location, path = %path.display(), found, "probed server candidate");

        attempts.push(SearchAttempt {
            location,
            path: path.clone(),
            found,
        });

        if found {
            return Ok(Resolution {
                path,
                location,
                attempts,
            });
        }

        if location == SearchLocation::EnvOverride {
            // Echo the value as the user wrote it, not the cwd-joined probe path.
            let raw = ctx.path_override.as_deref().unwrap_or(&path);
            warn(format!(
                "{} ('{}') is set but the file is not executable or not found. Falling back...",
                profile.path_env_var,
                raw.display()
            ));
        }
    }

    Err(not_found(profile, ctx, &attempts))
}

fn not_found(
    profile: &LaunchProfile,
    ctx: &LaunchContext,
    attempts: &[SearchAttempt],
) -> LauncherError {
    let mut searched = Vec::with_capacity(attempts.len() + 1);

    if ctx.path_override.is_none() {
        searched.push(format!("${} (not set)", profile.path_env_var));
    }

    for attempt in attempts {
        let label = match attempt.location {
            SearchLocation::EnvOverride => format!("${}", profile.path_env_var),
            other => other.to_string(),
        };
        searched.push(format!("{} ({})", attempt.path.display(), label));
    }

    LauncherError::ServerNotFound {
        binary: profile.display_name().to_string(),
        env_var: profile.path_env_var.to_string(),
        searched,
    }
}
