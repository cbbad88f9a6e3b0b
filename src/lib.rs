//! Tennis League Statistics Library
//!
//! Reads a tennis league's players and matches from a Google Sheets
//! spreadsheet and turns them into the views a league organiser needs.
//!
//! ## Features
//!
//! - **Sheets Proxy**: An axum server relaying `spreadsheets.values.get` with an
//!   API key or a service account
//! - **Cached Client**: Proxy client with a two-minute TTL cache per range
//! - **Polling**: Fixed-interval refresh published on a watch channel
//! - **League Views**: Player stats, leaderboard ranking, match summaries,
//!   schedules, search and pagination
//! - **Sample Data**: Built-in tables shown when a sheet has no records
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tennis_league::{config::SheetsConfig, league, sheets::SheetsClient, Division};
//!
//! # async fn example() -> tennis_league::Result<()> {
//! let client = SheetsClient::new(SheetsConfig::load()?);
//! let id = client.config().resolve_spreadsheet_id(None)?;
//! let (data, _status) = client
//!     .fetch_sheet_data(&id, &Division::Men.players_range())
//!     .await?;
//!
//! for player in league::rank_players(data.records()) {
//!     println!("#{} {} {:.1}", player.rank, player.name, player.points);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export TENNIS_SPREADSHEET_ID=1LEk1FWjg2tot...
//! export GOOGLE_SHEETS_API_KEY=AIza...
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod league;
pub mod server;
pub mod sheets;

// Re-export commonly used types
pub use cli::types::{Division, SheetRange, SheetView, SpreadsheetId};
pub use error::{LeagueError, Result};

pub const SPREADSHEET_ID_ENV_VAR: &str = "TENNIS_SPREADSHEET_ID";
pub const API_KEY_ENV_VAR: &str = "GOOGLE_SHEETS_API_KEY";
pub const API_BASE_URL_ENV_VAR: &str = "TENNIS_API_BASE_URL";
pub const SERVICE_ACCOUNT_ENV_VAR: &str = "GOOGLE_SERVICE_ACCOUNT_KEY";
pub const SERVICE_ACCOUNT_PATH_ENV_VAR: &str = "GOOGLE_SERVICE_ACCOUNT_KEY_PATH";
pub const PORT_ENV_VAR: &str = "PORT";
