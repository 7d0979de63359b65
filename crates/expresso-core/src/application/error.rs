//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
///
/// A composition error leaves partial output in the target directory; a
/// setup error leaves the generated project intact. Neither triggers any
/// automatic cleanup or retry.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A setup command could not be started (missing program, bad cwd).
    #[error("Could not launch '{command}': {reason}")]
    CommandLaunchFailed { command: String, reason: String },

    /// A setup command ran but exited unsuccessfully.
    #[error("Command '{command}' failed{}", exit_status_suffix(.status))]
    CommandFailed { command: String, status: Option<i32> },
}

fn exit_status_suffix(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!(" with exit code {code}"),
        None => " (terminated by signal)".to_string(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::CommandLaunchFailed { command, .. } => vec![
                format!("'{}' could not be started", command),
                "Ensure Node.js and npm are installed and on your PATH".into(),
                "Verify with: npm --version".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("'{}' exited with an error", command),
                "Check the command output above for details".into(),
                "The generated files are intact; rerun the command manually inside the project directory".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::CommandLaunchFailed { .. } => ErrorCategory::Configuration,
            Self::CommandFailed { .. } => ErrorCategory::Internal,
        }
    }
}
