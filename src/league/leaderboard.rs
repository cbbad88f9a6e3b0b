//! Ranked leaderboard.
//!
//! Points are `won * 3 + games_won * 0.1`. Players are ordered by points,
//! then win rate (`won / played`), then games won, all descending. The sort
//! is stable, so full ties keep sheet order.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use super::players::{PlayerRecord, SkillCategory};


/// Podium marker for the top three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPlayer {
    pub rank: usize,
    pub name: String,
    pub matches_played: u32,
    pub matches_won: u32,
    pub matches_lost: u32,
    pub games_won: u32,
    pub category: SkillCategory,
    /// Percentage of matches played that were won, 0 when none were played.
    pub win_rate: f64,
    pub points: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medal: Option<Medal>,
}

impl RankedPlayer {
    fn unranked(player: PlayerRecord) -> Self {
        let win_rate = if player.matches_played > 0 {
            player.matches_won as f64 / player.matches_played as f64 * 100.0
        } else {
            0.0
        };
        let points = player.matches_won as f64 * 3.0 + player.games_won as f64 * 0.1;

        Self {
            rank: 0,
            name: player.name,
            matches_played: player.matches_played,
            matches_won: player.matches_won,
            matches_lost: player.matches_lost,
            games_won: player.games_won,
            category: player.category,
            win_rate,
            points,
            medal: None,
        }
    }
}

/// Rank every record row of a player sheet.
pub fn rank_players(rows: &[Vec<String>]) -> Vec<RankedPlayer> {
    let mut ranked: Vec<RankedPlayer> = rows
        .iter()
        .map(|row| RankedPlayer::unranked(PlayerRecord::from_row(row)))
        .collect();

    ranked.sort_by(|a, b| {
        b.points
            .partial_cmp(&a.points)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.win_rate.partial_cmp(&a.win_rate).unwrap_or(Ordering::Equal))
            .then_with(|| b.games_won.cmp(&a.games_won))
    });

    for (idx, player) in ranked.iter_mut().enumerate() {
        player.rank = idx + 1;
        player.medal = Medal::for_rank(player.rank);
    }

    ranked
}
