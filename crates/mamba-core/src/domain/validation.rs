use crate::domain::{error::DomainError, project_structure::ProjectStructure};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    /// A project name must be a single, visible, non-empty path segment.
    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: name.into(),
            reason: reason.into(),
        };

        if name.trim().is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(invalid("name may only contain letters, digits, '-' and '_'"));
        }
        // Cargo package names derive from this; they must start with a letter.
        if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(invalid("name must start with a letter"));
        }
        Ok(())
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
