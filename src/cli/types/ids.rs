//! Identifier types for Google Sheets addressing.

use crate::error::{LeagueError, Result};
use crate::SPREADSHEET_ID_ENV_VAR;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a Google Sheets spreadsheet ID.
///
/// The ID is the long token in the sheet URL between `/d/` and `/edit`.
///
/// # Examples
///
/// ```rust
/// use tennis_league::SpreadsheetId;
///
/// let id: SpreadsheetId = " 1LEk1FWjg2tot ".parse().unwrap();
/// assert_eq!(id.as_str(), "1LEk1FWjg2tot");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpreadsheetId(pub String);

impl SpreadsheetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SpreadsheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SpreadsheetId {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        let id = Self::new(s);
        if id.is_empty() {
            return Err(LeagueError::MissingSpreadsheetId {
                env_var: SPREADSHEET_ID_ENV_VAR.to_string(),
            });
        }
        Ok(id)
    }
}

/// A1-notation range such as `Men!A:Z`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SheetRange(pub String);

impl SheetRange {
    pub fn new(range: impl Into<String>) -> Self {
        Self(range.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Sheet (tab) name portion of the range, if the range names one.
    pub fn sheet_name(&self) -> Option<&str> {
        self.0
            .split_once('!')
            .map(|(sheet, _)| sheet.trim_matches('\''))
    }
}

impl Default for SheetRange {
    fn default() -> Self {
        Self("A:Z".to_string())
    }
}

impl fmt::Display for SheetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SheetRange {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self(trimmed.to_string()))
    }
}
