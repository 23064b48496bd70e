//! Runtime settings handed to the application services.
//!
//! These are plain values built once at startup (the CLI derives them from
//! its layered `AppConfig`) and passed in explicitly. Nothing here reads the
//! environment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::templates::{ASSET_CONFIG_FILE, DEFAULT_OUTPUT_DIR, ENTRY_FILE};

/// Default dev server port.
pub const DEFAULT_PORT: u16 = 8000;

/// Dev server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory served over HTTP and searched for the asset config.
    pub root: PathBuf,
    /// Build output directory, relative to `root`; created if missing.
    pub output_dir: PathBuf,
    /// Start the asset watcher when its config file is present.
    pub watch: bool,
    /// File whose presence enables the watcher.
    pub asset_config_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            root: PathBuf::from("."),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            watch: true,
            asset_config_file: PathBuf::from(ASSET_CONFIG_FILE),
        }
    }
}

impl ServerConfig {
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }

    pub fn asset_config_path(&self) -> PathBuf {
        self.root.join(&self.asset_config_file)
    }
}

/// Settings for `mamba build`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectBuildConfig {
    /// Project root (where the entry file lives).
    pub root: PathBuf,
    pub output_dir: PathBuf,
    pub entry_file: PathBuf,
    /// Run the asset tool once after the entry point.
    pub compile_css: bool,
}

impl Default for ProjectBuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            entry_file: PathBuf::from(ENTRY_FILE),
            compile_css: true,
        }
    }
}

impl ProjectBuildConfig {
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }

    pub fn entry_path(&self) -> PathBuf {
        self.root.join(&self.entry_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_defaults() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 8000);
        assert_eq!(cfg.output_path(), PathBuf::from("./dist"));
        assert_eq!(cfg.asset_config_path(), PathBuf::from("./tailwind.config.js"));
    }

    #[test]
    fn build_defaults() {
        let cfg = ProjectBuildConfig::default();
        assert!(cfg.compile_css);
        assert_eq!(cfg.entry_path(), PathBuf::from("./main.rs"));
    }
}
