//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `mamba-adapters` crate provides implementations.

use std::net::SocketAddr;
use std::path::Path;

use crate::error::MambaResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `mamba_adapters::filesystem::LocalFilesystem` (production)
/// - `mamba_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> MambaResult<()>;

    /// Replace the file at `path` with `content`.
    ///
    /// Implementations must not leave a half-written file behind.
    fn write_file(&self, path: &Path, content: &str) -> MambaResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> MambaResult<()>;
}

/// Port for the external CSS processor.
///
/// Implemented by:
/// - `mamba_adapters::assets::TailwindCli`
#[cfg_attr(test, mockall::automock)]
pub trait AssetTool: Send + Sync {
    /// Compile the stylesheet once, minified. Blocks until the tool exits.
    fn compile(&self, project_root: &Path) -> MambaResult<()>;

    /// Start the tool in watch mode as a child process.
    fn watch(&self, project_root: &Path) -> MambaResult<Box<dyn WatchHandle>>;
}

/// Handle to a running asset watcher.
///
/// Dropping the handle must stop the child as well.
#[cfg_attr(test, mockall::automock)]
pub trait WatchHandle: Send {
    /// OS process id, if known.
    fn id(&self) -> Option<u32>;

    /// `true` while the child has not exited.
    fn is_running(&mut self) -> bool;

    /// Kill and reap the child. Idempotent.
    fn stop(&mut self) -> MambaResult<()>;
}

/// Port for running the project's entry point (which drives the build
/// pipeline inside the user's project).
#[cfg_attr(test, mockall::automock)]
pub trait EntryRunner: Send + Sync {
    fn run(&self, project_root: &Path) -> MambaResult<()>;
}

/// Port for the HTTP transport of the dev server.
///
/// The server is bound when constructed; `serve` blocks until `shutdown` is
/// called from another thread.
#[cfg_attr(test, mockall::automock)]
pub trait StaticServer: Send + Sync {
    fn local_addr(&self) -> Option<SocketAddr>;

    fn serve(&self) -> MambaResult<()>;

    fn shutdown(&self);
}
