//! Implementation of the `mamba create` command.
//!
//! Responsibility: wire the local filesystem into the core scaffold service
//! and print next steps. Name validation and the already-exists policy live
//! in the core.

use std::path::Path;

use tracing::{info, instrument};

use mamba_adapters::LocalFilesystem;
use mamba_core::application::ScaffoldService;

use crate::{
    cli::{CreateArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: CreateArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()))
        .with_output_dir(config.build.output_dir.to_string_lossy());

    output.header(&format!("Creating '{}'...", args.name))?;
    let root = service.scaffold(&args.name, Path::new("."))?;
    info!(root = %root.display(), "Project created");

    output.success(&format!("Project '{}' created!", args.name))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", args.name))?;
        output.print("  npm install -D tailwindcss@3")?;
        output.print("  mamba build")?;
        output.print("  mamba dev")?;
    }

    Ok(())
}
