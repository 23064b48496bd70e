//! Local filesystem adapter using std::fs.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use mamba_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{MambaError, MambaResult},
};
use tracing::debug;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> MambaResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    /// Writes to a sibling temp file, then renames it over `path`.
    fn write_file(&self, path: &Path, content: &str) -> MambaResult<()> {
        let tmp = temp_sibling(path);

        let written = std::fs::File::create(&tmp)
            .and_then(|mut file| {
                file.write_all(content.as_bytes())?;
                file.sync_all()
            })
            .and_then(|()| std::fs::rename(&tmp, path));

        if let Err(e) = written {
            let _ = std::fs::remove_file(&tmp);
            return Err(map_io_error(path, e, "write file"));
        }

        debug!(path = %path.display(), bytes = content.len(), "file replaced");
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> MambaResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> MambaError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
