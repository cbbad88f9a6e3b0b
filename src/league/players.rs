//! Player table rows: Name, Matches Played, Matches Won, Matches Lost,
//! Games Won, Category.

use serde::Serialize;
use std::fmt;

use super::{cell, contains_ci};


/// Skill band from the category column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkillCategory {
    Professional,
    Amateur,
    Junior,
    Advanced,
    Intermediate,
    Beginner,
    Other(String),
}

impl SkillCategory {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "professional" => Self::Professional,
            "amateur" => Self::Amateur,
            "junior" => Self::Junior,
            "advanced" => Self::Advanced,
            "intermediate" => Self::Intermediate,
            "beginner" => Self::Beginner,
            _ => Self::Other(raw.trim().to_string()),
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Professional => "Professional",
            Self::Amateur => "Amateur",
            Self::Junior => "Junior",
            Self::Advanced => "Advanced",
            Self::Intermediate => "Intermediate",
            Self::Beginner => "Beginner",
            Self::Other(s) => s.as_str(),
        };
        write!(f, "{}", s)
    }
}

/// One row of a player sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecord {
    pub name: String,
    pub matches_played: u32,
    pub matches_won: u32,
    pub matches_lost: u32,
    pub games_won: u32,
    pub category: SkillCategory,
}

impl PlayerRecord {
    pub fn from_row(row: &[String]) -> Self {
        Self {
            name: cell(row, 0).to_string(),
            matches_played: parse_int_lenient(cell(row, 1)),
            matches_won: parse_int_lenient(cell(row, 2)),
            matches_lost: parse_int_lenient(cell(row, 3)),
            games_won: parse_int_lenient(cell(row, 4)),
            category: SkillCategory::parse(cell(row, 5)),
        }
    }

    pub fn win_rate_label(&self) -> String {
        win_rate_label(self.matches_won, self.matches_lost)
    }
}

/// Parse the leading run of digits, e.g. `"12 (est)"` -> 12. Anything that
/// does not start with a digit, or is negative, is 0.
pub fn parse_int_lenient(raw: &str) -> u32 {
    let digits: String = raw
        .trim_start()
        .trim_start_matches('+')
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// `won / (won + lost)` as a rounded percentage, `"0%"` with no matches.
pub fn win_rate_label(won: u32, lost: u32) -> String {
    let total = won as u64 + lost as u64;
    if total == 0 {
        return "0%".to_string();
    }
    format!("{}%", (won as f64 / total as f64 * 100.0).round() as u32)
}

/// Rows whose name contains `term`, case-insensitively. Rows without a name
/// never match.
pub fn search_players<'a>(rows: &'a [Vec<String>], term: &str) -> Vec<&'a Vec<String>> {
    let needle = term.to_lowercase();
    rows.iter()
        .filter(|row| {
            let name = cell(row, 0);
            !name.is_empty() && contains_ci(name, &needle)
        })
        .collect()
}

/// Header cards on the players view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlayerSummary {
    pub total_players: usize,
    pub total_matches: u64,
    pub avg_win_rate: u32,
}

impl PlayerSummary {
    pub fn from_rows(rows: &[Vec<String>]) -> Self {
        if rows.is_empty() {
            return Self::default();
        }

        let players: Vec<PlayerRecord> = rows.iter().map(|r| PlayerRecord::from_row(r)).collect();
        let total_matches: u64 = players.iter().map(|p| p.matches_played as u64).sum();
        let wins: u64 = players.iter().map(|p| p.matches_won as u64).sum();
        let losses: u64 = players.iter().map(|p| p.matches_lost as u64).sum();

        let avg_win_rate = if total_matches > 0 && wins + losses > 0 {
            (wins as f64 / (wins + losses) as f64 * 100.0).round() as u32
        } else {
            0
        };

        Self {
            total_players: rows.len(),
            total_matches,
            avg_win_rate,
        }
    }
}
