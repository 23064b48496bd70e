//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not in the
//! component model. Component and validation errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Scaffold target already present on disk.
    #[error("Project already exists at {path}")]
    AlreadyExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A file the project layout requires is absent.
    #[error("Missing project file: {path}")]
    MissingProjectFile { path: PathBuf },

    /// External binary (asset tool, entry runner) is not installed.
    #[error("External tool '{tool}' not found")]
    ExternalToolMissing { tool: String },

    /// External binary ran but reported failure.
    #[error("External tool '{tool}' failed{}", exit_suffix(.status))]
    ExternalToolFailed { tool: String, status: Option<i32> },

    /// The dev server could not bind its listening socket.
    #[error("Cannot listen on {addr}: {reason}")]
    ServerBind { addr: String, reason: String },

    /// The dev server stopped unexpectedly.
    #[error("Dev server failed: {reason}")]
    ServerFailed { reason: String },
}

fn exit_suffix(status: &Option<i32>) -> String {
    status
        .map(|code| format!(" with exit code {code}"))
        .unwrap_or_default()
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                format!("Or remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::MissingProjectFile { path } => vec![
                format!("Expected to find {}", path.display()),
                "Run this command from the project root".into(),
                "Create a project with: mamba create <name>".into(),
            ],
            Self::ExternalToolMissing { tool } => vec![
                format!("'{tool}' is not installed or not on PATH"),
                "Install Node.js and Tailwind CSS: npm install -D tailwindcss@3".into(),
            ],
            Self::ExternalToolFailed { tool, .. } => vec![
                format!("Check the output of '{tool}' above for details"),
            ],
            Self::ServerBind { addr, .. } => vec![
                format!("Another process may already be listening on {addr}"),
                "Pick another port with: mamba dev --port <PORT>".into(),
            ],
            Self::ServerFailed { .. } => vec!["Restart the dev server".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } => ErrorCategory::Validation,
            Self::MissingProjectFile { .. } | Self::ExternalToolMissing { .. } => {
                ErrorCategory::NotFound
            }
            Self::FilesystemError { .. }
            | Self::ExternalToolFailed { .. }
            | Self::ServerBind { .. }
            | Self::ServerFailed { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_failed_message_includes_status() {
        let err = ApplicationError::ExternalToolFailed {
            tool: "npx".into(),
            status: Some(3),
        };
        assert_eq!(err.to_string(), "External tool 'npx' failed with exit code 3");

        let killed = ApplicationError::ExternalToolFailed {
            tool: "npx".into(),
            status: None,
        };
        assert_eq!(killed.to_string(), "External tool 'npx' failed");
    }

    #[test]
    fn missing_tool_is_not_found() {
        let err = ApplicationError::ExternalToolMissing { tool: "npx".into() };
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
