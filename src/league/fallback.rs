//! Sample tables shown when a division's sheet has no records yet.

use std::borrow::Cow;

use crate::sheets::types::ValueRange;
use crate::Division;

const PLAYER_HEADER: [&str; 6] = [
    "Name",
    "Matches Played",
    "Matches Won",
    "Matches Lost",
    "Games Won",
    "Category",
];

const MATCH_HEADER: [&str; 7] = [
    "Date",
    "Player 1",
    "Player 2",
    "Score",
    "Winner",
    "Duration",
    "Tournament",
];

const MEN_PLAYERS: [[&str; 6]; 8] = [
    ["Taimoor Zulfiqar", "2", "2", "0", "12", "Intermediate"],
    ["Farhan", "1", "0", "1", "4", "Beginner"],
    ["Umer", "1", "0", "1", "5", "Intermediate"],
    ["Murtaza", "0", "0", "0", "0", "Beginner"],
    ["Ahmed", "3", "2", "1", "15", "Advanced"],
    ["Bilal", "2", "1", "1", "8", "Intermediate"],
    ["Hassan", "1", "1", "0", "6", "Beginner"],
    ["Usman", "2", "0", "2", "3", "Beginner"],
];

const WOMEN_PLAYERS: [[&str; 6]; 8] = [
    ["Sarah Johnson", "3", "2", "1", "18", "Advanced"],
    ["Emily Davis", "2", "1", "1", "12", "Intermediate"],
    ["Maria Garcia", "1", "1", "0", "8", "Beginner"],
    ["Lisa Chen", "2", "0", "2", "6", "Intermediate"],
    ["Anna Wilson", "1", "1", "0", "10", "Advanced"],
    ["Jessica Brown", "2", "2", "0", "15", "Intermediate"],
    ["Rachel Lee", "1", "0", "1", "4", "Beginner"],
    ["Michelle Taylor", "3", "1", "2", "11", "Intermediate"],
];

const MEN_MATCHES: [[&str; 7]; 8] = [
    ["2024-01-15", "Taimoor Zulfiqar", "Ahmed", "6-4, 6-2", "Taimoor Zulfiqar", "1h 45m", "Winter Cup"],
    ["2024-01-20", "Farhan", "Bilal", "4-6, 6-4, 7-5", "Bilal", "2h 15m", "Winter Cup"],
    ["2024-01-25", "Umer", "Hassan", "6-1, 6-0", "Hassan", "1h 20m", "Winter Cup"],
    ["2024-02-01", "Ahmed", "Usman", "6-3, 6-4", "Ahmed", "1h 55m", "Spring League"],
    ["2024-02-05", "Taimoor Zulfiqar", "Bilal", "7-5, 6-3", "Taimoor Zulfiqar", "2h 10m", "Spring League"],
    ["2024-02-10", "Farhan", "Umer", "6-2, 6-2", "Farhan", "1h 30m", "Spring League"],
    ["2024-02-15", "Hassan", "Usman", "6-4, 7-6", "Hassan", "2h 05m", "Spring League"],
    ["2024-02-20", "Ahmed", "Bilal", "5-7, 6-4, 6-2", "Ahmed", "2h 35m", "Spring League"],
];

const WOMEN_MATCHES: [[&str; 7]; 8] = [
    ["2024-01-16", "Sarah Johnson", "Emily Davis", "6-3, 6-4", "Sarah Johnson", "1h 50m", "Winter Cup"],
    ["2024-01-21", "Maria Garcia", "Lisa Chen", "6-2, 6-1", "Maria Garcia", "1h 25m", "Winter Cup"],
    ["2024-01-26", "Anna Wilson", "Jessica Brown", "7-5, 6-3", "Anna Wilson", "2h 05m", "Winter Cup"],
    ["2024-02-02", "Emily Davis", "Rachel Lee", "6-4, 6-2", "Emily Davis", "1h 40m", "Spring League"],
    ["2024-02-06", "Sarah Johnson", "Michelle Taylor", "6-1, 6-0", "Sarah Johnson", "1h 15m", "Spring League"],
    ["2024-02-11", "Lisa Chen", "Anna Wilson", "4-6, 6-4, 6-2", "Anna Wilson", "2h 20m", "Spring League"],
    ["2024-02-16", "Jessica Brown", "Rachel Lee", "6-3, 7-6", "Jessica Brown", "2h 10m", "Spring League"],
    ["2024-02-21", "Maria Garcia", "Michelle Taylor", "6-4, 6-4", "Maria Garcia", "1h 55m", "Spring League"],
];

fn table<const N: usize>(header: [&str; N], rows: &[[&str; N]]) -> Vec<Vec<String>> {
    std::iter::once(&header)
        .chain(rows.iter())
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

/// Sample player sheet (header included).
pub fn sample_players(division: Division) -> Vec<Vec<String>> {
    match division {
        Division::Men => table(PLAYER_HEADER, &MEN_PLAYERS),
        Division::Women => table(PLAYER_HEADER, &WOMEN_PLAYERS),
    }
}

/// Sample match sheet (header included).
pub fn sample_matches(division: Division) -> Vec<Vec<String>> {
    match division {
        Division::Men => table(MATCH_HEADER, &MEN_MATCHES),
        Division::Women => table(MATCH_HEADER, &WOMEN_MATCHES),
    }
}

/// Rows a view renders, and whether they came from the sample table.
#[derive(Debug, Clone, PartialEq)]
pub struct Rows<'a> {
    pub values: Cow<'a, [Vec<String>]>,
    pub is_sample: bool,
}

impl Rows<'_> {
    pub fn header(&self) -> &[String] {
        self.values.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn records(&self) -> &[Vec<String>] {
        self.values.get(1..).unwrap_or(&[])
    }
}

fn rows_or<'a>(data: Option<&'a ValueRange>, sample: impl FnOnce() -> Vec<Vec<String>>) -> Rows<'a> {
    match data {
        Some(range) if range.has_records() => Rows {
            values: Cow::Borrowed(range.values.as_slice()),
            is_sample: false,
        },
        _ => Rows {
            values: Cow::Owned(sample()),
            is_sample: true,
        },
    }
}

/// Fetched player rows, or the division's sample when there are no records.
pub fn player_rows_or_fallback(data: Option<&ValueRange>, division: Division) -> Rows<'_> {
    rows_or(data, || sample_players(division))
}

/// Fetched match rows, or the division's sample when there are no records.
pub fn match_rows_or_fallback(data: Option<&ValueRange>, division: Division) -> Rows<'_> {
    rows_or(data, || sample_matches(division))
}
