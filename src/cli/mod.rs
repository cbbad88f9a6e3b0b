//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::league::table::DEFAULT_ROWS_PER_PAGE;
use types::{Division, SheetRange, SheetView, SpreadsheetId};

/// Arguments shared by every league view.
#[derive(Debug, Clone, Args)]
pub struct ViewArgs {
    /// Spreadsheet ID (or set `TENNIS_SPREADSHEET_ID`, or `config set`).
    #[clap(long, short = 'i')]
    pub spreadsheet_id: Option<SpreadsheetId>,

    /// League division.
    #[clap(long, short, value_enum, default_value_t = Division::Men)]
    pub division: Division,

    /// Case-insensitive search term.
    #[clap(long, short)]
    pub search: Option<String>,

    /// Zero-based page number.
    #[clap(long, default_value_t = 0)]
    pub page: usize,

    /// Rows per page.
    #[clap(long, default_value_t = DEFAULT_ROWS_PER_PAGE)]
    pub per_page: usize,

    /// Output results as JSON instead of a text table.
    #[clap(long)]
    pub json: bool,

    /// Bypass the in-memory cache.
    #[clap(long)]
    pub refresh: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCmd {
    /// Print the stored settings and where they live.
    Show,

    /// Update stored settings. Unset flags keep their current value.
    Set {
        #[clap(long)]
        spreadsheet_id: Option<SpreadsheetId>,

        /// Google API key passed through the proxy.
        #[clap(long)]
        api_key: Option<String>,

        /// Default range for the `sheet` view.
        #[clap(long)]
        range: Option<SheetRange>,

        /// Ask the proxy to use its service account instead of the API key.
        #[clap(long)]
        use_service_account: Option<bool>,

        /// Base URL of the sheets proxy.
        #[clap(long)]
        api_base_url: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the Google Sheets proxy.
    Serve {
        /// Port to listen on (or set `PORT`; default 3001).
        #[clap(long, short)]
        port: Option<u16>,

        /// Service-account key file used when `GOOGLE_SERVICE_ACCOUNT_KEY` is unset.
        #[clap(long)]
        key_file: Option<PathBuf>,
    },

    /// Player table with summary cards.
    Players {
        #[clap(flatten)]
        view: ViewArgs,
    },

    /// Ranked leaderboard (points, then win rate, then games won).
    Leaderboard {
        #[clap(flatten)]
        view: ViewArgs,

        /// Only show the top N players.
        #[clap(long)]
        top: Option<usize>,
    },

    /// Match results with summary cards.
    Matches {
        #[clap(flatten)]
        view: ViewArgs,
    },

    /// Matches grouped by date.
    Schedule {
        #[clap(flatten)]
        view: ViewArgs,
    },

    /// Any range as a raw table, plus chart data from its first numeric column.
    Sheet {
        #[clap(flatten)]
        view: ViewArgs,

        /// Range to read (defaults to the configured range).
        #[clap(long, short)]
        range: Option<SheetRange>,
    },

    /// Re-render a view every time the poller fetches new data.
    Watch {
        #[clap(flatten)]
        view: ViewArgs,

        /// Which view to render.
        #[clap(long = "view", value_enum, default_value_t = SheetView::Players)]
        show: SheetView,

        /// Poll interval in seconds.
        #[clap(long, default_value_t = 30)]
        interval: u64,
    },

    /// Show or change stored sheet settings.
    Config {
        #[clap(subcommand)]
        cmd: ConfigCmd,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "tennis-league", about = "Tennis league statistics from Google Sheets")]
pub struct TennisLeague {
    /// Debug-level logging (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
