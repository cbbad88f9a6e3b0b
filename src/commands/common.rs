//! Common utilities shared across the view commands.
//!
//! Every view resolves the spreadsheet, fetches one range through the shared
//! client, and falls back to sample rows (with a warning) when nothing usable
//! comes back.

use crate::{
    config::SheetsConfig,
    sheets::{error_banner, CacheStatus, SheetsClient, ValueRange},
    SheetRange, SpreadsheetId,
};

/// Result of fetching one range for a view.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub data: Option<ValueRange>,
    pub status: Option<CacheStatus>,
    /// Banner shown above the view when the fetch failed.
    pub warning: Option<String>,
}

/// Fetch `range`, turning failures into a warning instead of an error.
pub async fn fetch_for_view(
    client: &SheetsClient,
    spreadsheet_id: Option<SpreadsheetId>,
    range: &SheetRange,
    refresh: bool,
) -> FetchOutcome {
    let spreadsheet_id = match client.config().resolve_spreadsheet_id(spreadsheet_id) {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!(error = %e, "no spreadsheet configured, showing sample data");
            return FetchOutcome {
                warning: Some(error_banner(&e)),
                ..FetchOutcome::default()
            };
        }
    };

    let result = if refresh {
        client.refresh_sheet_data(&spreadsheet_id, range).await
    } else {
        client.fetch_sheet_data(&spreadsheet_id, range).await
    };

    match result {
        Ok((data, status)) => {
            tracing::debug!(%range, ?status, rows = data.values.len(), "range loaded");
            FetchOutcome {
                data: Some(data),
                status: Some(status),
                warning: None,
            }
        }
        Err(e) => {
            tracing::warn!(%range, error = %e, "fetch failed, showing sample data");
            FetchOutcome {
                warning: Some(error_banner(&e)),
                ..FetchOutcome::default()
            }
        }
    }
}

/// Load stored config (with env overrides) and build a client from it.
pub fn client_from_config() -> crate::Result<SheetsClient> {
    Ok(SheetsClient::new(SheetsConfig::load()?))
}

/// One-line note printed under a view's title.
pub fn source_note(outcome: &FetchOutcome, is_sample: bool) -> Option<String> {
    if let Some(warning) = &outcome.warning {
        return Some(format!("⚠ {} (showing sample data)", warning));
    }
    if is_sample {
        return Some("⚠ Sheet has no records yet (showing sample data)".to_string());
    }
    match outcome.status {
        Some(CacheStatus::Hit) => Some("✓ Loaded from cache".to_string()),
        Some(CacheStatus::Miss) => Some("✓ Fetched from sheet".to_string()),
        Some(CacheStatus::Refreshed) => Some("✓ Fetched from sheet (refreshed)".to_string()),
        None => None,
    }
}

/// Render rows as a left-aligned, space-padded text table.
pub fn format_table(header: &[String], rows: &[Vec<String>]) -> String {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; columns];
    for row in std::iter::once(header).chain(rows.iter().map(Vec::as_slice)) {
        for (idx, value) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(value.chars().count());
        }
    }

    let render = |row: &[String]| -> String {
        let cells: Vec<String> = (0..columns)
            .map(|idx| {
                let value = row.get(idx).map(String::as_str).unwrap_or("");
                format!("{:<width$}", value, width = widths[idx])
            })
            .collect();
        cells.join("  ").trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&render(header));
    out.push('\n');
    out.push_str(&widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
    out.push('\n');
    for row in rows {
        out.push_str(&render(row));
        out.push('\n');
    }
    out
}

/// Convert `&str` cells into an owned row.
pub fn owned_row<const N: usize>(cells: [&str; N]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}
