//! Generic table helpers shared by every view: free-text search,
//! client-side pagination, and the dashboard chart series.

use serde::Serialize;

use super::{cell, contains_ci};

#[cfg(test)]
mod tests;

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Rows shown in the dashboard chart.
pub const CHART_ROW_LIMIT: usize = 10;

/// Rows where any cell contains `term`, case-insensitively.
pub fn filter_rows<'a>(rows: &'a [Vec<String>], term: &str) -> Vec<&'a Vec<String>> {
    let needle = term.to_lowercase();
    rows.iter()
        .filter(|row| needle.is_empty() || row.iter().any(|c| !c.is_empty() && contains_ci(c, &needle)))
        .collect()
}

/// Zero-based page cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    rows_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl Pagination {
    /// A zero page size is treated as one row per page.
    pub fn new(page: usize, rows_per_page: usize) -> Self {
        Self {
            page,
            rows_per_page: rows_per_page.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changing the page size always returns to the first page.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page.max(1);
        self.page = 0;
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.rows_per_page)
    }

    /// The rows on the current page; empty past the last page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.page.saturating_mul(self.rows_per_page);
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.rows_per_page).min(items.len());
        &items[start..end]
    }

    /// `"11-20 of 42"` style footer.
    pub fn label(&self, total: usize) -> String {
        if total == 0 {
            return "0-0 of 0".to_string();
        }
        let start = self.page.saturating_mul(self.rows_per_page);
        if start >= total {
            return format!("0-0 of {}", total);
        }
        let end = (start + self.rows_per_page).min(total);
        format!("{}-{} of {}", start + 1, end, total)
    }
}

/// One chart point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub name: String,
    pub value: f64,
}

/// Leading float of a cell, like `"12.5 pts"` -> 12.5.
fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, ch) in s.char_indices() {
        match ch {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + ch.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    s[..end].trim_end_matches('.').parse().ok()
}

/// Chart data from the first column that holds any numeric cell, over the
/// first ten records. Records without a name are labelled `Row N`.
pub fn numeric_series(values: &[Vec<String>]) -> Vec<SeriesPoint> {
    if values.len() < 2 {
        return Vec::new();
    }
    let header = &values[0];
    let rows = &values[1..];

    let Some(column) = (0..header.len())
        .find(|&idx| rows.iter().any(|r| parse_float_prefix(cell(r, idx)).is_some()))
    else {
        return Vec::new();
    };

    rows.iter()
        .take(CHART_ROW_LIMIT)
        .enumerate()
        .map(|(i, row)| {
            let name = cell(row, 0);
            SeriesPoint {
                name: if name.is_empty() {
                    format!("Row {}", i + 1)
                } else {
                    name.to_string()
                },
                value: parse_float_prefix(cell(row, column)).unwrap_or(0.0),
            }
        })
        .collect()
}
