//! Dev Service - serves the output directory with an optional asset watcher.
//!
//! The watcher is a child process started before serving and stopped once
//! `serve` returns, whatever the outcome. Watcher problems never prevent the
//! server from running.

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ServerConfig,
        ports::{AssetTool, Filesystem, StaticServer, WatchHandle},
    },
    error::{ErrorKind, MambaResult},
};

pub struct DevService {
    filesystem: Box<dyn Filesystem>,
    assets: Box<dyn AssetTool>,
}

impl DevService {
    pub fn new(filesystem: Box<dyn Filesystem>, assets: Box<dyn AssetTool>) -> Self {
        Self { filesystem, assets }
    }

    /// Block serving `config.output_path()` until `server` is shut down.
    #[instrument(skip_all, fields(port = config.port))]
    pub fn run(&self, server: &dyn StaticServer, config: &ServerConfig) -> MambaResult<()> {
        self.filesystem.create_dir_all(&config.output_path())?;

        let mut watcher = self.start_watcher(config);

        match server.local_addr() {
            Some(addr) => info!(%addr, "Serving"),
            None => info!("Serving"),
        }
        let served = server.serve();

        if let Some(handle) = watcher.as_mut() {
            if let Err(e) = handle.stop() {
                warn!(error = %e, "Asset watcher did not stop cleanly");
            } else {
                info!("Asset watcher stopped");
            }
        }

        served
    }

    fn start_watcher(&self, config: &ServerConfig) -> Option<Box<dyn WatchHandle>> {
        if !config.watch {
            return None;
        }

        let asset_config = config.asset_config_path();
        if !self.filesystem.exists(&asset_config) {
            info!(
                path = %asset_config.display(),
                "No asset config found, skipping watcher"
            );
            return None;
        }

        match self.assets.watch(&config.root) {
            Ok(handle) => {
                info!(pid = ?handle.id(), "Asset watcher started");
                Some(handle)
            }
            Err(e) if e.kind() == ErrorKind::ExternalToolMissing => {
                warn!(error = %e, "Asset tool not installed, serving without watcher");
                None
            }
            Err(e) => {
                warn!(error = %e, "Asset watcher failed to start");
                None
            }
        }
    }
}
