//! Argument list for the wrapped server.
//!
//! The list always has the same shape: the profile's model flag followed by
//! the identifier, then the numeric flag followed by the number. Inputs are
//! passed through verbatim; only the flag names come from the profile.

use crate::config::LaunchProfile;
use std::ffi::OsStr;
use std::path::Path;

/// Ordered arguments passed to the server process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerArgs(Vec<String>);

impl ServerArgs {
    /// Pair each input with its fixed flag.
    pub fn build(profile: &LaunchProfile, model: &str, numeric: i64) -> Self {
        Self(vec![
            profile.model_flag.to_string(),
            model.to_string(),
            profile.numeric_flag.to_string(),
            numeric.to_string(),
        ])
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &OsStr> {
        self.0.iter().map(OsStr::new)
    }

    /// Shell-quoted command line for the `Executing:` progress line.
    pub fn command_line(&self, program: &Path) -> String {
        let program = program.to_string_lossy();
        let words = std::iter::once(program.as_ref()).chain(self.0.iter().map(String::as_str));
        shell_words::join(words)
    }
}
