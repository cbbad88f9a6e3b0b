//! Serve command implementation

use std::path::PathBuf;

use crate::{config::ServerConfig, server, Result};

/// Command-line flags win over `PORT` / `GOOGLE_SERVICE_ACCOUNT_KEY_PATH`.
pub fn resolve_server_config(port: Option<u16>, key_file: Option<PathBuf>) -> ServerConfig {
    let mut config = ServerConfig::from_env();
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(path) = key_file {
        config.service_account_key_path = path;
    }
    config
}

/// Handle the serve command
pub async fn handle_serve(port: Option<u16>, key_file: Option<PathBuf>) -> Result<()> {
    let config = resolve_server_config(port, key_file);
    tracing::debug!(?config, "starting proxy");
    server::serve(config).await
}
