//! Project Build Service - drives `mamba build` inside a project.
//!
//! The page itself is produced by the project's own entry point (which calls
//! `BuildPipeline`); this service only orchestrates the external steps.

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError, ProjectBuildConfig,
        ports::{AssetTool, EntryRunner, Filesystem},
    },
    error::MambaResult,
};

pub struct ProjectBuildService {
    filesystem: Box<dyn Filesystem>,
    entry: Box<dyn EntryRunner>,
    assets: Box<dyn AssetTool>,
}

impl ProjectBuildService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        entry: Box<dyn EntryRunner>,
        assets: Box<dyn AssetTool>,
    ) -> Self {
        Self {
            filesystem,
            entry,
            assets,
        }
    }

    /// Run the entry point, then compile the stylesheet if enabled.
    #[instrument(skip_all, fields(root = %config.root.display()))]
    pub fn build(&self, config: &ProjectBuildConfig) -> MambaResult<()> {
        let entry = config.entry_path();
        if !self.filesystem.exists(&entry) {
            return Err(ApplicationError::MissingProjectFile { path: entry }.into());
        }

        self.filesystem.create_dir_all(&config.output_path())?;

        info!("Running project entry point");
        self.entry.run(&config.root)?;

        if config.compile_css {
            info!("Compiling stylesheet");
            self.assets.compile(&config.root)?;
        }

        Ok(())
    }
}
