//! Filesystem utilities for llama-cli.
//!
//! This module provides the executable probe used by every step of the
//! server search.

mod executable;

pub use executable::is_executable_file;
