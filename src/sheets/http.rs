use async_trait::async_trait;
use reqwest::{Client, Response, Url};

use crate::core::http::{bearer_headers, json_headers};
use crate::sheets::auth::{ServiceAccountKey, TokenProvider};
use crate::sheets::types::{GoogleErrorEnvelope, ValueRange};
use crate::{LeagueError, Result, SheetRange, SpreadsheetId};

#[cfg(test)]
mod tests;

/// Base URL for the Google Sheets v4 API.
pub const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com";

/// How the proxy authenticates against the Sheets API.
#[derive(Debug, Clone)]
pub enum SheetsAuth {
    ApiKey(String),
    ServiceAccount(ServiceAccountKey),
}

/// Anything that can answer `spreadsheets.values.get`.
#[async_trait]
pub trait SheetsUpstream: Send + Sync {
    async fn values_get(
        &self,
        spreadsheet_id: &SpreadsheetId,
        range: &SheetRange,
        auth: &SheetsAuth,
    ) -> Result<ValueRange>;
}

/// Client for the real Google Sheets API.
pub struct GoogleSheetsApi {
    client: Client,
    base_url: String,
    tokens: TokenProvider,
}

impl GoogleSheetsApi {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, SHEETS_BASE_URL)
    }

    /// Point the client at a different host (tests, emulators).
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            tokens: TokenProvider::new(client.clone()),
            client,
            base_url: base_url.into(),
        }
    }

    /// `{base}/v4/spreadsheets/{id}/values/{range}` with each segment escaped.
    pub fn values_url(&self, spreadsheet_id: &SpreadsheetId, range: &SheetRange) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| LeagueError::InvalidBaseUrl {
                url: self.base_url.clone(),
            })?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", spreadsheet_id.as_str(), "values", range.as_str()]);
        Ok(url)
    }
}

#[async_trait]
impl SheetsUpstream for GoogleSheetsApi {
    #[tracing::instrument(skip_all, fields(%spreadsheet_id, %range))]
    async fn values_get(
        &self,
        spreadsheet_id: &SpreadsheetId,
        range: &SheetRange,
        auth: &SheetsAuth,
    ) -> Result<ValueRange> {
        let url = self.values_url(spreadsheet_id, range)?;

        let request = match auth {
            SheetsAuth::ApiKey(key) => self
                .client
                .get(url)
                .headers(json_headers())
                .query(&[("key", key.as_str())]),
            SheetsAuth::ServiceAccount(account) => {
                let token = self.tokens.access_token(account).await?;
                self.client.get(url).headers(bearer_headers(&token)?)
            }
        };

        let response = request.send().await?;
        let values = read_values_response(response).await?;
        tracing::debug!(rows = values.values.len(), "fetched range");
        Ok(values)
    }
}

/// Decode a success body or map the Google error to a crate error.
pub async fn read_values_response(response: Response) -> Result<ValueRange> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<ValueRange>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<GoogleErrorEnvelope>(&body)
        .map(|envelope| envelope.error.message)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

    tracing::warn!(%status, %message, "Google Sheets API error");

    Err(match status.as_u16() {
        403 => LeagueError::PermissionDenied { message },
        404 => LeagueError::SpreadsheetNotFound { message },
        code => LeagueError::Upstream {
            status: code,
            message,
        },
    })
}
