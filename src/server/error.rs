//! Proxy error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::sheets::types::ProxyErrorBody;
use crate::LeagueError;

pub const SPREADSHEET_ID_REQUIRED: &str = "Spreadsheet ID is required";
pub const ACCESS_DENIED: &str =
    "Access denied. Please check your authentication and sheet permissions.";
pub const SPREADSHEET_NOT_FOUND: &str = "Spreadsheet not found. Please check the spreadsheet ID.";
pub const SERVICE_ACCOUNT_ERROR: &str =
    "Service account configuration error. Please check your service account configuration.";
pub const FETCH_FAILED: &str = "Failed to fetch sheet data";
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// A status code plus the `{ error, details? }` body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ProxyErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ProxyErrorBody {
                error: error.into(),
                details: None,
            },
        }
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    fn with_details(mut self, details: impl Into<String>) -> Self {
        self.body.details = Some(details.into());
        self
    }
}

impl From<LeagueError> for ApiError {
    fn from(err: LeagueError) -> Self {
        tracing::error!(error = %err, "error fetching sheet data");

        match &err {
            LeagueError::MissingSpreadsheetId { .. } => Self::bad_request(SPREADSHEET_ID_REQUIRED),
            LeagueError::MissingApiKey => Self::bad_request(err.to_string()),
            LeagueError::ServiceAccountNotConfigured { .. } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            LeagueError::InvalidServiceAccount { .. } | LeagueError::Jwt(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, SERVICE_ACCOUNT_ERROR)
            }
            LeagueError::PermissionDenied { .. } => Self::new(StatusCode::FORBIDDEN, ACCESS_DENIED),
            LeagueError::SpreadsheetNotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, SPREADSHEET_NOT_FOUND)
            }
            _ => Self::new(StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED)
                .with_details(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
