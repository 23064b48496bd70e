//! Application layer for Mamba.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (BuildPipeline, ScaffoldService, ...)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Config**: Plain runtime settings handed to services
//! - **Errors**: Application-specific error types
//!
//! Rendering rules live in `crate::domain`; this layer only sequences them
//! and talks to the outside world through ports.

pub mod config;
pub mod error;
pub mod ports;
pub mod services;

pub use services::{BuildPipeline, BuildReport, DevService, ProjectBuildService, ScaffoldService};

pub use ports::{AssetTool, EntryRunner, Filesystem, StaticServer, WatchHandle};

pub use config::{DEFAULT_PORT, ProjectBuildConfig, ServerConfig};
pub use error::ApplicationError;
