//! League divisions and the sheet tabs that back them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::SheetRange;

/// League division. Each division has a players tab and a matches tab.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Division {
    #[default]
    Men,
    Women,
}

impl Division {
    /// Range holding the player table (`Men!A:Z` / `Women!A:Z`).
    pub fn players_range(&self) -> SheetRange {
        match self {
            Division::Men => SheetRange::new("Men!A:Z"),
            Division::Women => SheetRange::new("Women!A:Z"),
        }
    }

    /// Range holding the match table (`MenMatches!A:Z` / `WomenMatches!A:Z`).
    pub fn matches_range(&self) -> SheetRange {
        match self {
            Division::Men => SheetRange::new("MenMatches!A:Z"),
            Division::Women => SheetRange::new("WomenMatches!A:Z"),
        }
    }

    /// Possessive label used in headings, e.g. `Men's`.
    pub fn label(&self) -> &'static str {
        match self {
            Division::Men => "Men's",
            Division::Women => "Women's",
        }
    }

    /// Range for a given view of this division.
    pub fn range_for(&self, view: SheetView) -> SheetRange {
        match view {
            SheetView::Players | SheetView::Leaderboard => self.players_range(),
            SheetView::Matches => self.matches_range(),
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Division::Men => "men",
            Division::Women => "women",
        };
        write!(f, "{}", s)
    }
}

/// What a view renders out of a division's sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SheetView {
    /// Player table with search and pagination
    Players,
    /// Ranked leaderboard
    Leaderboard,
    /// Match results
    Matches,
}
