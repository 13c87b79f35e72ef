//! Process environment snapshot for server resolution.
//!
//! Resolution depends on three pieces of ambient state: the override
//! environment variable, the directory holding the wrapper's own executable,
//! and the current working directory. This module reads them once, up front,
//! so that the search itself is a pure function of a [`LaunchContext`].

use crate::config::LaunchProfile;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ambient inputs to the server search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchContext {
    /// Value of the override variable, if set and non-empty.
    pub path_override: Option<PathBuf>,

    /// Directory containing the running wrapper executable, if known.
    pub exe_dir: Option<PathBuf>,

    /// Current working directory (`.` if it could not be determined).
    pub cwd: PathBuf,
}

impl LaunchContext {
    /// Capture the context from the running process.
    pub fn resolve(profile: &LaunchProfile) -> Self {
        let path_override = env::var_os(profile.path_env_var)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let exe_dir = match env::current_exe() {
            Ok(exe) => exe.parent().map(Path::to_path_buf),
            Err(e) => {
                debug!(error = %e, "could not determine own executable path");
                None
            }
        };

        let cwd = env::current_dir().unwrap_or_else(|e| {
            debug!(error = %e, "could not determine current directory, using '.'");
            PathBuf::from(".")
        });

        let ctx = Self {
            path_override,
            exe_dir,
            cwd,
        };
        debug!(?ctx, "captured launch context");
        ctx
    }

    /// The override path, made absolute against the working directory.
    pub fn override_path(&self) -> Option<PathBuf> {
        self.path_override.as_ref().map(|p| self.cwd.join(p))
    }
}
