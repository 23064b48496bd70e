//! Implementation of the `mamba dev` command.
//!
//! The server blocks on the main thread. A second thread drives a
//! current-thread tokio runtime that only waits for Ctrl-C and then
//! unblocks the server; `DevService` stops the asset watcher on the way out.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use tracing::{info, instrument, warn};

use mamba_adapters::{LocalFilesystem, TinyHttpServer};
use mamba_core::application::{DevService, ports::StaticServer};

use crate::{
    cli::DevArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: DevArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let server_config = config.server_config(Path::new("."), args.port, args.no_watch);
    let addr = SocketAddr::new(config.bind_host()?, server_config.port);

    let server = Arc::new(TinyHttpServer::bind(addr, &server_config.root)?);
    let handle: Arc<dyn StaticServer> = server.clone();
    spawn_interrupt_listener(handle)?;

    let service = DevService::new(Box::new(LocalFilesystem::new()), Box::new(config.tailwind()));

    output.success(&format!(
        "Serving at http://localhost:{}/{}/",
        server_config.port,
        server_config.output_dir.display()
    ))?;
    output.info("Press Ctrl+C to stop")?;

    service.run(server.as_ref(), &server_config)?;

    output.print("")?;
    output.info("Server stopped")?;
    Ok(())
}

/// Unblock `server` when the process receives Ctrl-C.
fn spawn_interrupt_listener(server: Arc<dyn StaticServer>) -> CliResult<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::IoError {
            message: "Failed to start signal runtime".into(),
            source: e,
        })?;

    thread::Builder::new()
        .name("mamba-signal".into())
        .spawn(move || match runtime.block_on(tokio::signal::ctrl_c()) {
            Ok(()) => {
                info!("Interrupt received, shutting down");
                server.shutdown();
            }
            Err(e) => warn!(error = %e, "Cannot listen for Ctrl-C; stop the server with kill"),
        })?;

    Ok(())
}
