//! Executable file detection.
//!
//! A candidate path is accepted when it exists, is a regular file after
//! following symlinks, and can be executed by someone.
//!
//! # Cross-Platform Behavior
//!
//! - **Unix**: at least one of the owner/group/other execute bits must be set.
//!   The check does not consult the effective uid; a file executable only by
//!   another user passes here and fails later at spawn time.
//! - **Windows**: there is no execute bit, so any regular file is accepted.

use std::path::Path;

/// Returns true if `path` names a regular file that can be executed.
///
/// Missing paths, directories, and dangling symlinks all return false.
pub fn is_executable_file<P: AsRef<Path>>(path: P) -> bool {
    let Ok(metadata) = std::fs::metadata(path.as_ref()) else {
        return false;
    };

    if !metadata.is_file() {
        return false;
    }

    has_execute_permission(&metadata)
}

#[cfg(unix)]
fn has_execute_permission(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn has_execute_permission(_metadata: &std::fs::Metadata) -> bool {
    true
}
