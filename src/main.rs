//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use tennis_league::{
    cli::{Commands, ConfigCmd, TennisLeague},
    commands::{
        config::{handle_config_set, handle_config_show, ConfigUpdate},
        leaderboard::handle_leaderboard,
        matches::handle_matches,
        players::handle_players,
        schedule::handle_schedule,
        serve::handle_serve,
        sheet::handle_sheet,
        watch::handle_watch,
    },
    core::logging::init_logger,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let app = TennisLeague::parse();
    init_logger(app.verbose);

    match app.command {
        Commands::Serve { port, key_file } => handle_serve(port, key_file)
            .await
            .context("sheets proxy failed")?,

        Commands::Players { view } => handle_players(view).await?,

        Commands::Leaderboard { view, top } => handle_leaderboard(view, top).await?,

        Commands::Matches { view } => handle_matches(view).await?,

        Commands::Schedule { view } => handle_schedule(view).await?,

        Commands::Sheet { view, range } => handle_sheet(view, range).await?,

        Commands::Watch {
            view,
            show,
            interval,
        } => handle_watch(view, show, interval)
            .await
            .context("watch stopped with an error")?,

        Commands::Config { cmd } => match cmd {
            ConfigCmd::Show => handle_config_show().context("could not read config")?,
            ConfigCmd::Set {
                spreadsheet_id,
                api_key,
                range,
                use_service_account,
                api_base_url,
            } => handle_config_set(ConfigUpdate {
                spreadsheet_id,
                api_key,
                range,
                use_service_account,
                api_base_url,
            })
            .context("could not save config")?,
        },
    }

    Ok(())
}
