//! Unified error handling for Mamba Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Mamba Core operations.
#[derive(Debug, Error, Clone)]
pub enum MambaError {
    /// Errors from the domain layer (component contract, validation).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, external tools, server).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

/// Coarse error kinds callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A component's `render()` was never supplied.
    NotImplemented,
    /// Scaffold target already present.
    AlreadyExists,
    /// Asset tool or entry runner binary absent.
    ExternalToolMissing,
    /// Filesystem create/write failure.
    IoFailure,
    Other,
}

impl MambaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(DomainError::NotImplemented { .. }) => ErrorKind::NotImplemented,
            Self::Application(ApplicationError::AlreadyExists { .. }) => ErrorKind::AlreadyExists,
            Self::Application(ApplicationError::ExternalToolMissing { .. }) => {
                ErrorKind::ExternalToolMissing
            }
            Self::Application(ApplicationError::FilesystemError { .. }) => ErrorKind::IoFailure,
            _ => ErrorKind::Other,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your mamba.toml and MAMBA_* environment variables".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Mamba".into(),
                "Please report this issue at: https://github.com/mamba-ssg/mamba/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type MambaResult<T> = Result<T, MambaError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> MambaResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> MambaResult<T> {
        self.map_err(|e| MambaError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn kinds_map_from_layers() {
        let not_impl: MambaError = DomainError::NotImplemented {
            component: "X".into(),
        }
        .into();
        assert_eq!(not_impl.kind(), ErrorKind::NotImplemented);

        let exists: MambaError = ApplicationError::AlreadyExists {
            path: PathBuf::from("demo"),
        }
        .into();
        assert_eq!(exists.kind(), ErrorKind::AlreadyExists);

        let io: MambaError = ApplicationError::FilesystemError {
            path: PathBuf::from("dist"),
            reason: "denied".into(),
        }
        .into();
        assert_eq!(io.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn transparent_display() {
        let err: MambaError = ApplicationError::AlreadyExists {
            path: PathBuf::from("demo"),
        }
        .into();
        assert_eq!(err.to_string(), "Project already exists at demo");
    }

    #[test]
    fn context_wraps_as_internal() {
        let r: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let err = r.context("reading").unwrap_err();
        assert!(matches!(err, MambaError::Internal { .. }));
        assert!(err.to_string().contains("reading: boom"));
    }
}
