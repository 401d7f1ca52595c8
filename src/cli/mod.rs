//! CLI module for ai-client-toolkit
//!
//! This module contains the command definitions and execution logic for the
//! `ai-client-configure` and `sync-secrets` binaries.

pub mod configure;
pub mod secrets;

pub use configure::*;
pub use secrets::*;

use crate::error::ToolkitError;
use tracing::error;

/// Print a failed command's error to stderr and return the process exit code.
///
/// Domain errors (invalid configuration, missing secrets) are shown as-is;
/// anything else is also logged as unexpected.
pub fn report_error(err: &ToolkitError) -> i32 {
    if err.is_handled() {
        eprintln!("{err}");
    } else {
        error!(error = %err, "command failed");
        eprintln!("Error: {err}");
    }
    1
}
