//! Route handlers and the CORS layer.

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use super::error::{ApiError, ENDPOINT_NOT_FOUND, METHOD_NOT_ALLOWED, SPREADSHEET_ID_REQUIRED};
use super::AppState;
use crate::sheets::http::SheetsAuth;
use crate::sheets::types::EmptyRangeBody;
use crate::{LeagueError, SheetRange, SpreadsheetId};

pub const NO_DATA_MESSAGE: &str = "No data found in the specified range";

/// Query string of `GET /api/sheets`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetsQuery {
    pub spreadsheet_id: Option<String>,
    pub range: Option<String>,
    pub api_key: Option<String>,
    pub use_service_account: Option<String>,
}

/// GET /api/sheets
///
/// Relays `spreadsheets.values.get` and reshapes the answer for the client.
pub async fn sheets_proxy(
    State(state): State<AppState>,
    Query(query): Query<SheetsQuery>,
) -> Result<Response, ApiError> {
    let spreadsheet_id = query
        .spreadsheet_id
        .as_deref()
        .map(SpreadsheetId::new)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::bad_request(SPREADSHEET_ID_REQUIRED))?;

    let range = query
        .range
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(SheetRange::new)
        .unwrap_or_default();

    let auth = if query.use_service_account.as_deref() == Some("true") {
        SheetsAuth::ServiceAccount(state.service_account()?)
    } else {
        let key = query
            .api_key
            .filter(|k| !k.is_empty())
            .ok_or(LeagueError::MissingApiKey)?;
        SheetsAuth::ApiKey(key)
    };

    tracing::info!(
        %spreadsheet_id,
        %range,
        service_account = matches!(auth, SheetsAuth::ServiceAccount(_)),
        "proxying sheet request"
    );

    let values = state
        .upstream
        .values_get(&spreadsheet_id, &range, &auth)
        .await?;

    if values.is_empty() {
        return Ok(Json(EmptyRangeBody {
            message: NO_DATA_MESSAGE.to_string(),
            values: Vec::new(),
        })
        .into_response());
    }

    Ok(Json(values).into_response())
}

/// GET /api/health
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "OK", "message": "Server is running" }))
}

/// OPTIONS preflight; the CORS layer adds the headers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
}

pub async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, ENDPOINT_NOT_FOUND)
}

/// Open CORS on every response.
pub async fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
