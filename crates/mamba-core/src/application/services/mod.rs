//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "build the page" or "scaffold a project".

pub mod build_pipeline;
pub mod dev_service;
pub mod project_build_service;
pub mod scaffold_service;

pub use build_pipeline::{BuildPipeline, BuildReport};
pub use dev_service::DevService;
pub use project_build_service::ProjectBuildService;
pub use scaffold_service::ScaffoldService;
