//! Match table rows: Date, Player 1, Player 2, Score, Winner, Duration,
//! Tournament.

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

use super::{cell, contains_ci};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchStatus {
    Completed,
    Scheduled,
}

impl MatchStatus {
    /// A match with a winner is completed; anything else is still to play.
    pub fn from_winner(winner: &str) -> Self {
        if winner.trim().is_empty() {
            MatchStatus::Scheduled
        } else {
            MatchStatus::Completed
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Completed => write!(f, "Completed"),
            MatchStatus::Scheduled => write!(f, "Scheduled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub date: String,
    pub player1: String,
    pub player2: String,
    pub score: String,
    pub winner: String,
    pub duration: String,
    pub tournament: String,
    pub status: MatchStatus,
}

impl MatchRecord {
    pub fn from_row(row: &[String]) -> Self {
        let winner = cell(row, 4).to_string();
        Self {
            date: cell(row, 0).to_string(),
            player1: cell(row, 1).to_string(),
            player2: cell(row, 2).to_string(),
            score: cell(row, 3).to_string(),
            status: MatchStatus::from_winner(&winner),
            winner,
            duration: cell(row, 5).to_string(),
            tournament: cell(row, 6).to_string(),
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        parse_duration_minutes(&self.duration)
    }
}

/// Rows where player 1, player 2 or the winner contains `term`,
/// case-insensitively.
pub fn search_matches<'a>(rows: &'a [Vec<String>], term: &str) -> Vec<&'a Vec<String>> {
    let needle = term.to_lowercase();
    rows.iter()
        .filter(|row| {
            [1, 2, 4].iter().any(|&idx| {
                let value = cell(row, idx);
                !value.is_empty() && contains_ci(value, &needle)
            })
        })
        .collect()
}

fn duration_regex() -> Option<&'static Regex> {
    static DURATION: OnceLock<Option<Regex>> = OnceLock::new();
    DURATION
        .get_or_init(|| Regex::new(r"(\d+)h\s*(\d+)m").ok())
        .as_ref()
}

/// `"1h 45m"` -> 105. Text without an `<h>h <m>m` pair is 0.
pub fn parse_duration_minutes(raw: &str) -> u32 {
    let Some(caps) = duration_regex().and_then(|re| re.captures(raw)) else {
        return 0;
    };
    let hours: u32 = caps[1].parse().unwrap_or(0);
    let minutes: u32 = caps[2].parse().unwrap_or(0);
    hours.saturating_mul(60).saturating_add(minutes)
}

/// Header cards on the matches view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MatchSummary {
    pub total_matches: usize,
    pub completed_matches: usize,
    /// Mean over rows that have a duration, rounded to whole minutes.
    pub avg_duration_minutes: u32,
}

impl MatchSummary {
    pub fn from_rows(rows: &[Vec<String>]) -> Self {
        if rows.is_empty() {
            return Self::default();
        }

        let completed_matches = rows
            .iter()
            .filter(|r| MatchStatus::from_winner(cell(r, 4)) == MatchStatus::Completed)
            .count();
        let durations: Vec<u32> = rows
            .iter()
            .map(|r| cell(r, 5))
            .filter(|d| !d.is_empty())
            .map(parse_duration_minutes)
            .collect();

        let avg_duration_minutes = if durations.is_empty() {
            0
        } else {
            let total: u64 = durations.iter().map(|&d| d as u64).sum();
            (total as f64 / durations.len() as f64).round() as u32
        };

        Self {
            total_matches: rows.len(),
            completed_matches,
            avg_duration_minutes,
        }
    }
}

/// Rows sharing a date cell, in the order the date first appears.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateGroup<'a> {
    pub date: &'a str,
    pub rows: Vec<&'a Vec<String>>,
}

/// Group rows by their first cell, keeping first-seen date order and sheet
/// order within each date.
pub fn group_by_date(rows: &[Vec<String>]) -> Vec<DateGroup<'_>> {
    let mut groups: Vec<DateGroup<'_>> = Vec::new();
    for row in rows {
        let date = cell(row, 0);
        match groups.iter_mut().find(|g| g.date == date) {
            Some(group) => group.rows.push(row),
            None => groups.push(DateGroup {
                date,
                rows: vec![row],
            }),
        }
    }
    groups
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d %B %Y"];

/// `2024-01-15` -> `Monday, January 15, 2024`. Unparsable text is returned
/// unchanged.
pub fn format_match_date(raw: &str) -> String {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .map(|date| date.format("%A, %B %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}
