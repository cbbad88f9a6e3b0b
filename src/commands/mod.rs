//! Command implementations for the tennis league CLI

pub mod common;
pub mod config;
pub mod leaderboard;
pub mod matches;
pub mod players;
pub mod schedule;
pub mod serve;
pub mod sheet;
pub mod watch;

#[cfg(test)]
mod tests;
