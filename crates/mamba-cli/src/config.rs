//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only ever sees the plain
//! `ServerConfig` / `ProjectBuildConfig` values derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables `MAMBA_<SECTION>__<KEY>`
//! 3. The `--config` file
//! 4. `mamba.toml` in the current directory
//! 5. The global config file (see [`AppConfig::config_path`])
//! 6. Built-in defaults (always present)

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use mamba_adapters::{CommandEntry, TailwindCli};
use mamba_core::application::{DEFAULT_PORT, ProjectBuildConfig, ServerConfig};

use crate::error::{CliError, CliResult};

/// Project-local config file, looked up in the current directory.
pub const LOCAL_CONFIG: &str = "mamba.toml";

const ENV_PREFIX: &str = "MAMBA";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSection,
    pub build: BuildSection,
    pub assets: AssetsSection,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
    pub output_dir: PathBuf,
    pub watch: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    pub output_dir: PathBuf,
    /// Argv that runs the project's entry point.
    pub entry: Vec<String>,
    pub css: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsSection {
    pub runner: String,
    pub tool: String,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Its presence in the project root enables the dev watcher.
    pub config_file: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        let core = ServerConfig::default();
        Self {
            host: "0.0.0.0".into(),
            port: DEFAULT_PORT,
            output_dir: core.output_dir,
            watch: core.watch,
        }
    }
}

impl Default for BuildSection {
    fn default() -> Self {
        let core = ProjectBuildConfig::default();
        Self {
            output_dir: core.output_dir,
            entry: vec!["cargo".into(), "run".into(), "--quiet".into()],
            css: core.compile_css,
        }
    }
}

impl Default for AssetsSection {
    fn default() -> Self {
        let tool = TailwindCli::default();
        Self {
            runner: tool.runner,
            tool: tool.tool,
            input: tool.input,
            output: tool.output,
            config_file: ServerConfig::default().asset_config_file,
        }
    }
}

impl AppConfig {
    /// Load configuration by layering every source over the defaults.
    ///
    /// `config_file` is the path passed via `--config`; unlike the implicit
    /// files it must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Self::default()).context("Failed to seed default configuration")?,
        );

        if let Some(global) = Self::config_path() {
            builder = builder.add_source(File::from(global).required(false));
        }

        builder = builder.add_source(File::new(LOCAL_CONFIG, FileFormat::Toml).required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(" ")
                .with_list_parse_key("build.entry"),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the global configuration file, if the platform has one.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "mamba", "mamba")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Dev server settings rooted at `root`, with CLI overrides applied.
    pub fn server_config(&self, root: &Path, port: Option<u16>, no_watch: bool) -> ServerConfig {
        ServerConfig {
            port: port.unwrap_or(self.server.port),
            root: root.to_path_buf(),
            output_dir: self.server.output_dir.clone(),
            watch: self.server.watch && !no_watch,
            asset_config_file: self.assets.config_file.clone(),
        }
    }

    pub fn bind_host(&self) -> CliResult<IpAddr> {
        self.server.host.parse().map_err(|e| CliError::ConfigError {
            message: format!("server.host '{}' is not an IP address", self.server.host),
            source: Some(Box::new(e)),
        })
    }

    pub fn build_config(&self, root: &Path, skip_css: bool) -> ProjectBuildConfig {
        ProjectBuildConfig {
            root: root.to_path_buf(),
            output_dir: self.build.output_dir.clone(),
            compile_css: self.build.css && !skip_css,
            ..ProjectBuildConfig::default()
        }
    }

    pub fn tailwind(&self) -> TailwindCli {
        TailwindCli {
            runner: self.assets.runner.clone(),
            tool: self.assets.tool.clone(),
            input: self.assets.input.clone(),
            output: self.assets.output.clone(),
        }
    }

    pub fn entry(&self) -> CliResult<CommandEntry> {
        CommandEntry::from_argv(&self.build.entry).ok_or_else(|| CliError::ConfigError {
            message: "build.entry must name a program to run".into(),
            source: None,
        })
    }
}
