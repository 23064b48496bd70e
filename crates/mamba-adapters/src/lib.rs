//! Infrastructure adapters for Mamba.
//!
//! This crate implements the ports defined in `mamba-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod assets;
pub mod entry;
pub mod filesystem;
pub mod server;

// Re-export commonly used adapters
pub use assets::{TailwindCli, TailwindWatch};
pub use entry::CommandEntry;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use server::TinyHttpServer;
