// ============================================================================
// domain/error.rs - CONFIGURATION-TIME ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every variant is raised *before* any artifact is produced: a domain error
/// means generation never started.
///
/// All errors are:
/// - Cloneable (for retry logic at the caller)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Project Name Errors (400-level equivalent)
    // ========================================================================
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error(
        "Invalid project name '{name}': only lowercase letters, numbers, hyphens, and underscores are allowed"
    )]
    InvalidProjectName { name: String },

    // ========================================================================
    // Enumeration Errors
    // ========================================================================
    #[error("Unknown database '{value}'")]
    UnknownDatabase { value: String },

    // ========================================================================
    // Plan Constraint Violations
    // ========================================================================
    #[error("Duplicate path in artifact plan: {path}")]
    DuplicateArtifactPath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectName => vec![
                "Provide a project name, e.g. my-backend-project".into(),
            ],
            Self::InvalidProjectName { name } => vec![
                format!("'{}' contains characters outside [a-z0-9-_]", name),
                "Try a lowercase name like: my-api, blog_service, shop2".into(),
            ],
            Self::UnknownDatabase { value } => vec![
                format!("'{}' is not a supported database", value),
                "Supported: mongodb, postgresql, mysql".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyProjectName
            | Self::InvalidProjectName { .. }
            | Self::UnknownDatabase { .. } => ErrorCategory::Validation,
            Self::DuplicateArtifactPath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
