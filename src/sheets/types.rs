use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;


/// Cells arrive as JSON strings, but unformatted sheets can also return
/// numbers and booleans; normalise everything to strings.
fn de_cells<'de, D>(deserializer: D) -> Result<Vec<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Vec<Value>>> = Deserialize::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|row| row.into_iter().map(cell_to_string).collect())
        .collect())
}

fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Result of `spreadsheets.values.get`, and the proxy's success body.
///
/// Row 0 is the header; later rows are records whose meaning is positional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,
    #[serde(default, deserialize_with = "de_cells")]
    pub values: Vec<Vec<String>>,
}

impl ValueRange {
    pub fn from_rows(values: Vec<Vec<String>>) -> Self {
        Self {
            range: None,
            major_dimension: Some("ROWS".to_string()),
            values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn header(&self) -> &[String] {
        self.values.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every row after the header.
    pub fn records(&self) -> &[Vec<String>] {
        self.values.get(1..).unwrap_or(&[])
    }

    /// True when there is at least one record below the header.
    pub fn has_records(&self) -> bool {
        self.values.len() >= 2
    }
}

/// Error body returned by the proxy: `{ "error": ..., "details": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Body returned by the proxy when the range exists but holds no rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyRangeBody {
    pub message: String,
    pub values: Vec<Vec<String>>,
}

/// Google API error envelope: `{ "error": { "code", "message", "status" } }`
#[derive(Debug, Deserialize)]
pub struct GoogleErrorEnvelope {
    pub error: GoogleError,
}

#[derive(Debug, Deserialize)]
pub struct GoogleError {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// OAuth token endpoint response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}
