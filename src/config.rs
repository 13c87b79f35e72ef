//! Launch profile for the wrapped server.
//!
//! Everything the launcher needs to know about the server it wraps is fixed
//! at compile time: the executable name, the override environment variable,
//! the bundle resources directory, and the two flag names the user inputs are
//! paired with. There is no configuration file; callers cannot override the
//! flag names.

/// Static description of a wrapped server executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchProfile {
    /// File name of the server executable, searched for in every location.
    pub binary_name: &'static str,

    /// Environment variable holding an explicit path to the executable.
    pub path_env_var: &'static str,

    /// Directory one level above the wrapper's own directory that holds
    /// bundled resources (`Contents/Resources` in an app bundle).
    pub resources_dir: &'static str,

    /// Flag paired with the model identifier.
    pub model_flag: &'static str,

    /// Flag paired with the numeric value.
    pub numeric_flag: &'static str,
}

/// Profile for `llama-server` from llama.cpp.
pub const LLAMA_SERVER: LaunchProfile = LaunchProfile {
    binary_name: if cfg!(windows) {
        "llama-server.exe"
    } else {
        "llama-server"
    },
    path_env_var: "LLAMA_SERVER_PATH",
    resources_dir: "Resources",
    model_flag: "--hf-repo",
    numeric_flag: "--ctx-size",
};

/// Environment variable controlling the wrapper's own diagnostic log level.
pub const LOG_ENV_VAR: &str = "LLAMA_CLI_LOG";

impl LaunchProfile {
    /// Short name used in user-facing messages (no platform extension).
    pub fn display_name(&self) -> &'static str {
        self.binary_name
            .strip_suffix(".exe")
            .unwrap_or(self.binary_name)
    }
}
