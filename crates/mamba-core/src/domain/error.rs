// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so services can log and return the same value)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Component contract
    // ========================================================================
    #[error("component '{component}' does not implement render()")]
    NotImplemented { component: String },

    #[error("component '{component}' failed: {reason}")]
    ComponentFailed { component: String, reason: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Project structure is empty")]
    EmptyStructure,

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotImplemented { component } => vec![
                format!("'{component}' is used in the page but has no render()"),
                "Implement `Renderable` for the component and return its markup".into(),
            ],
            Self::ComponentFailed { component, .. } => vec![
                format!("Check the setup or render logic of '{component}'"),
            ],
            Self::InvalidProjectName { .. } => vec![
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Start with a letter".into(),
                "Examples: my-site, my_site, site123".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotImplemented { .. }
            | Self::ComponentFailed { .. }
            | Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
