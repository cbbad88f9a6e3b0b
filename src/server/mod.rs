//! Sheets proxy server.
//!
//! Exposes `GET /api/sheets` and `GET /api/health`. The proxy holds no league
//! data; each request is relayed to the configured [`SheetsUpstream`].

pub mod error;
pub mod handlers;

use axum::{middleware, routing::get, Router};
use reqwest::Client;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::sheets::auth::ServiceAccountKey;
use crate::sheets::http::{GoogleSheetsApi, SheetsUpstream};
use crate::{Result, SERVICE_ACCOUNT_ENV_VAR};


/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn SheetsUpstream>,
    service_account_json: Option<String>,
    service_account_path: PathBuf,
}

impl AppState {
    pub fn new(
        upstream: Arc<dyn SheetsUpstream>,
        service_account_json: Option<String>,
        service_account_path: PathBuf,
    ) -> Self {
        Self {
            upstream,
            service_account_json,
            service_account_path,
        }
    }

    /// State for the real Google API, with the key taken from
    /// `GOOGLE_SERVICE_ACCOUNT_KEY` or the configured key file.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            Arc::new(GoogleSheetsApi::new(Client::new())),
            std::env::var(SERVICE_ACCOUNT_ENV_VAR).ok(),
            config.service_account_key_path.clone(),
        )
    }

    /// Read the service-account key. Loaded per request so a key file can be
    /// dropped in without a restart.
    pub fn service_account(&self) -> Result<ServiceAccountKey> {
        ServiceAccountKey::load(
            self.service_account_json.as_deref(),
            &self.service_account_path,
        )
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/sheets",
            get(handlers::sheets_proxy)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/health",
            get(handlers::health).options(handlers::preflight),
        )
        .fallback(handlers::not_found)
        .layer(middleware::map_response(handlers::with_cors))
        .with_state(state)
}

/// Bind `0.0.0.0:{port}` and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let app = build_router(AppState::from_config(&config));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(%addr, "sheets proxy listening");
    println!("Server running on port {}", config.port);
    println!("Health check: http://localhost:{}/api/health", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("sheets proxy stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}
