//! Data access for league views.
//!
//! `SheetsClient` fetches ranges through the `/api/sheets` proxy and memoises
//! each `spreadsheetId + range` response for the cache TTL. Every view shares
//! one client, so switching between players, leaderboard and matches within
//! the TTL does not touch the network.

use reqwest::{Client, Url};
use std::time::Duration;

use crate::config::SheetsConfig;
use crate::core::cache::{SheetCacheKey, TtlCache, DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL};
use crate::core::http::json_headers;
use crate::sheets::types::{ProxyErrorBody, ValueRange};
use crate::{LeagueError, Result, SheetRange, SpreadsheetId, SPREADSHEET_ID_ENV_VAR};


/// Banner text used when a failure carries no message of its own.
pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch sheet data";

/// Where the returned data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Served from the in-memory cache
    Hit,
    /// Not cached (or expired); fetched from the proxy
    Miss,
    /// Cache bypassed on request; fetched from the proxy
    Refreshed,
}

/// Proxy client with a TTL cache.
pub struct SheetsClient {
    http: Client,
    config: SheetsConfig,
    cache: TtlCache<SheetCacheKey, ValueRange>,
}

impl SheetsClient {
    pub fn new(config: SheetsConfig) -> Self {
        Self::with_cache_ttl(config, DEFAULT_CACHE_TTL)
    }

    pub fn with_cache_ttl(config: SheetsConfig, ttl: Duration) -> Self {
        Self {
            http: Client::new(),
            config,
            cache: TtlCache::new(DEFAULT_CACHE_CAPACITY, ttl),
        }
    }

    pub fn config(&self) -> &SheetsConfig {
        &self.config
    }

    /// Fetch a range, serving it from cache while it is fresh.
    pub async fn fetch_sheet_data(
        &self,
        spreadsheet_id: &SpreadsheetId,
        range: &SheetRange,
    ) -> Result<(ValueRange, CacheStatus)> {
        let key = cache_key(spreadsheet_id, range)?;

        if let Some(hit) = self.cache.get(&key) {
            tracing::debug!(key = %key, "sheet cache hit");
            return Ok((hit, CacheStatus::Hit));
        }

        let data = self.request(spreadsheet_id, range).await?;
        self.cache.put(key, data.clone());
        Ok((data, CacheStatus::Miss))
    }

    /// Fetch a range from the proxy regardless of cache state, then re-cache it.
    pub async fn refresh_sheet_data(
        &self,
        spreadsheet_id: &SpreadsheetId,
        range: &SheetRange,
    ) -> Result<(ValueRange, CacheStatus)> {
        let key = cache_key(spreadsheet_id, range)?;
        self.cache.invalidate(&key);

        let data = self.request(spreadsheet_id, range).await?;
        self.cache.put(key, data.clone());
        Ok((data, CacheStatus::Refreshed))
    }

    /// `GET {api_base_url}/api/sheets?spreadsheetId&range&useServiceAccount[&apiKey]`
    pub fn request_url(&self, spreadsheet_id: &SpreadsheetId, range: &SheetRange) -> Result<Url> {
        let base = self.config.api_base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{}/api/sheets", base))?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("spreadsheetId", spreadsheet_id.as_str())
                .append_pair("range", range.as_str())
                .append_pair(
                    "useServiceAccount",
                    if self.config.use_service_account {
                        "true"
                    } else {
                        "false"
                    },
                );
            if !self.config.use_service_account {
                if let Some(key) = self.config.api_key.as_deref().filter(|k| !k.is_empty()) {
                    query.append_pair("apiKey", key);
                }
            }
        }
        Ok(url)
    }

    #[tracing::instrument(skip_all, fields(%spreadsheet_id, %range))]
    async fn request(&self, spreadsheet_id: &SpreadsheetId, range: &SheetRange) -> Result<ValueRange> {
        let url = self.request_url(spreadsheet_id, range)?;
        let response = self.http.get(url).headers(json_headers()).send().await?;

        let status = response.status();
        if status.is_success() {
            let data: ValueRange = response.json().await?;
            tracing::info!(rows = data.values.len(), "fetched sheet data");
            return Ok(data);
        }

        let message = response
            .json::<ProxyErrorBody>()
            .await
            .map(|body| body.error)
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_FETCH_ERROR.to_string());

        tracing::warn!(%status, %message, "proxy returned an error");
        Err(LeagueError::Proxy {
            status: status.as_u16(),
            message,
        })
    }
}

fn cache_key(spreadsheet_id: &SpreadsheetId, range: &SheetRange) -> Result<SheetCacheKey> {
    if spreadsheet_id.is_empty() {
        return Err(LeagueError::MissingSpreadsheetId {
            env_var: SPREADSHEET_ID_ENV_VAR.to_string(),
        });
    }
    Ok(SheetCacheKey::new(spreadsheet_id.clone(), range.clone()))
}

/// The single line shown to the user when a fetch fails.
pub fn error_banner(err: &LeagueError) -> String {
    match err {
        LeagueError::Proxy { message, .. } => message.clone(),
        LeagueError::MissingSpreadsheetId { .. } => err.to_string(),
        _ => GENERIC_FETCH_ERROR.to_string(),
    }
}
