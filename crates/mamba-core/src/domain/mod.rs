//! Core domain layer for Mamba.
//!
//! Pure logic only: the component contract, the document shell, the
//! starter project templates and the errors they raise.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or process calls
//! - **Few external crates**: std, thiserror, serde/serde_json for values
//!
pub mod component;
pub mod document;
pub mod error;
pub mod project_structure;
pub mod templates;

mod validation;

pub use component::{
    Component, ComponentBase, Lifecycle, Markup, Props, RenderResult, Renderable, State, Value,
};
pub use document::{DocumentShell, FRAGMENT_SEPARATOR};
pub use error::{DomainError, ErrorCategory};
pub use project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
pub use templates::{RenderContext, starter_project};
pub use validation::DomainValidator;
