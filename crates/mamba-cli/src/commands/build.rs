//! Implementation of the `mamba build` command.

use std::path::Path;

use tracing::instrument;

use mamba_adapters::LocalFilesystem;
use mamba_core::application::ProjectBuildService;

use crate::{cli::BuildArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(skip_css = args.skip_css))]
pub fn execute(args: BuildArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let build = config.build_config(Path::new("."), args.skip_css);
    let service = ProjectBuildService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(config.entry()?),
        Box::new(config.tailwind()),
    );

    output.header("Building...")?;
    service.build(&build)?;

    if !build.compile_css {
        output.info("Skipped stylesheet compile")?;
    }
    output.success(&format!(
        "Build complete! Open {}/index.html to view your app.",
        build.output_dir.display()
    ))?;
    Ok(())
}
