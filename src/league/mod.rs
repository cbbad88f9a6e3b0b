//! View models over fetched sheet rows.
//!
//! Everything in here is pure: rows in, filtered/sorted/summarised rows out.
//! Column meaning is positional, see [`players`] and [`matches`].

pub mod fallback;
pub mod leaderboard;
pub mod matches;
pub mod players;
pub mod table;

pub use fallback::{match_rows_or_fallback, player_rows_or_fallback, Rows};
pub use leaderboard::{rank_players, Medal, RankedPlayer};
pub use matches::{MatchRecord, MatchStatus, MatchSummary};
pub use players::{PlayerRecord, PlayerSummary, SkillCategory};
pub use table::Pagination;

/// Cell at `idx`, or `""` when the row is short.
pub(crate) fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Case-insensitive substring test. An empty needle matches everything.
pub(crate) fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}
