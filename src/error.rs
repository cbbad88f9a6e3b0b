//! Error types for the tennis league tools

use thiserror::Error;


pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("URL cannot carry a path: {url}")]
    InvalidBaseUrl { url: String },

    #[error("Token signing failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Spreadsheet ID not provided and {env_var} environment variable not set")]
    MissingSpreadsheetId { env_var: String },

    #[error("API Key is required when not using service account")]
    MissingApiKey,

    #[error("Service account configuration not found. Please set {env_var} environment variable.")]
    ServiceAccountNotConfigured { env_var: String },

    #[error("Service account configuration error: {message}")]
    InvalidServiceAccount { message: String },

    #[error("Token exchange failed: {message}")]
    TokenExchange { message: String },

    #[error("Access denied: {message}")]
    PermissionDenied { message: String },

    #[error("Spreadsheet not found: {message}")]
    SpreadsheetNotFound { message: String },

    #[error("Google Sheets API returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("{message}")]
    Proxy { status: u16, message: String },
}

impl LeagueError {
    /// HTTP status reported by the upstream or the proxy, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            LeagueError::PermissionDenied { .. } => Some(403),
            LeagueError::SpreadsheetNotFound { .. } => Some(404),
            LeagueError::Upstream { status, .. } | LeagueError::Proxy { status, .. } => {
                Some(*status)
            }
            LeagueError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
