//! Persistent sheet connection settings and proxy server settings.
//!
//! `SheetsConfig` is stored as camelCase JSON under the user config dir so the
//! CLI remembers which spreadsheet to read between runs. Environment variables
//! override the stored file, and command-line flags override both.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::{config_path, try_read_to_string, write_string};
use crate::{
    LeagueError, Result, SheetRange, SpreadsheetId, API_BASE_URL_ENV_VAR, API_KEY_ENV_VAR,
    PORT_ENV_VAR, SERVICE_ACCOUNT_PATH_ENV_VAR, SPREADSHEET_ID_ENV_VAR,
};

/// Where the proxy listens when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3001;

/// Base URL of a locally running proxy.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

/// Key file consulted when the service-account env var is unset.
pub const DEFAULT_SERVICE_ACCOUNT_PATH: &str = "service-account-key.json";

/// Connection settings used by the sheets client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetsConfig {
    #[serde(default)]
    pub spreadsheet_id: Option<SpreadsheetId>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_range")]
    pub range: SheetRange,
    #[serde(default)]
    pub use_service_account: bool,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_range() -> SheetRange {
    SheetRange::new("Men!A:Z")
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: None,
            api_key: None,
            range: default_range(),
            use_service_account: false,
            api_base_url: default_api_base_url(),
        }
    }
}

impl SheetsConfig {
    /// Stored config with environment overrides applied.
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(&config_path())?.with_env_overrides())
    }

    /// Read a config file; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        match try_read_to_string(path) {
            Some(s) => Ok(serde_json::from_str(&s)?),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = config_path();
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        write_string(path, &json)?;
        Ok(())
    }

    /// Apply `TENNIS_SPREADSHEET_ID`, `GOOGLE_SHEETS_API_KEY` and `TENNIS_API_BASE_URL`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(id) = non_empty_env(SPREADSHEET_ID_ENV_VAR) {
            self.spreadsheet_id = Some(SpreadsheetId::new(id));
        }
        if let Some(key) = non_empty_env(API_KEY_ENV_VAR) {
            self.api_key = Some(key);
        }
        if let Some(url) = non_empty_env(API_BASE_URL_ENV_VAR) {
            self.api_base_url = url;
        }
        self
    }

    /// Pick the spreadsheet from the command line, else from config/env.
    pub fn resolve_spreadsheet_id(&self, cli: Option<SpreadsheetId>) -> Result<SpreadsheetId> {
        cli.or_else(|| self.spreadsheet_id.clone())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| LeagueError::MissingSpreadsheetId {
                env_var: SPREADSHEET_ID_ENV_VAR.to_string(),
            })
    }
}

/// Settings for the proxy server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub service_account_key_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            service_account_key_path: PathBuf::from(DEFAULT_SERVICE_ACCOUNT_PATH),
        }
    }
}

impl ServerConfig {
    /// Read `PORT` and `GOOGLE_SERVICE_ACCOUNT_KEY_PATH`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(port) = non_empty_env(PORT_ENV_VAR) {
            match port.parse::<u16>() {
                Ok(p) => config.port = p,
                Err(e) => tracing::warn!(%port, error = %e, "ignoring invalid PORT"),
            }
        }
        if let Some(path) = non_empty_env(SERVICE_ACCOUNT_PATH_ENV_VAR) {
            config.service_account_key_path = PathBuf::from(path);
        }

        config
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
