//! Players view: summary cards plus a searchable, paginated player table.

use serde::Serialize;

use crate::{
    cli::ViewArgs,
    league::{
        fallback::player_rows_or_fallback,
        players::{search_players, PlayerRecord, PlayerSummary},
        Pagination, Rows,
    },
    Division, Result,
};

use super::common::{client_from_config, fetch_for_view, format_table, source_note};

#[derive(Debug, Serialize)]
pub struct PlayerRow {
    #[serde(flatten)]
    pub player: PlayerRecord,
    pub win_rate: String,
}

/// Everything the players view shows, ready for text or JSON output.
#[derive(Debug, Serialize)]
pub struct PlayersReport {
    pub division: Division,
    pub is_sample: bool,
    pub summary: PlayerSummary,
    /// Rows matching the search, before pagination.
    pub matching: usize,
    pub page: usize,
    pub page_count: usize,
    pub players: Vec<PlayerRow>,
}

pub fn build_report(rows: &Rows<'_>, division: Division, search: &str, pagination: Pagination) -> PlayersReport {
    let records = rows.records();
    let hits = search_players(records, search);

    let players = pagination
        .slice(&hits)
        .iter()
        .map(|row| {
            let player = PlayerRecord::from_row(row);
            PlayerRow {
                win_rate: player.win_rate_label(),
                player,
            }
        })
        .collect();

    PlayersReport {
        division,
        is_sample: rows.is_sample,
        summary: PlayerSummary::from_rows(records),
        matching: hits.len(),
        page: pagination.page(),
        page_count: pagination.page_count(hits.len()),
        players,
    }
}

pub fn render(report: &PlayersReport, pagination: Pagination) -> String {
    let header: Vec<String> = [
        "Name", "Played", "Won", "Lost", "Games Won", "Category", "Win Rate",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let rows: Vec<Vec<String>> = report
        .players
        .iter()
        .map(|r| {
            vec![
                r.player.name.clone(),
                r.player.matches_played.to_string(),
                r.player.matches_won.to_string(),
                r.player.matches_lost.to_string(),
                r.player.games_won.to_string(),
                r.player.category.to_string(),
                r.win_rate.clone(),
            ]
        })
        .collect();

    let mut out = format!(
        "{} Players\nTotal Players: {}  Total Matches: {}  Avg Win Rate: {}%\n\n",
        report.division.label(),
        report.summary.total_players,
        report.summary.total_matches,
        report.summary.avg_win_rate,
    );
    out.push_str(&format_table(&header, &rows));
    out.push_str(&pagination.label(report.matching));
    out.push('\n');
    out
}

/// Handle the players command
pub async fn handle_players(args: ViewArgs) -> Result<()> {
    let client = client_from_config()?;
    let range = args.division.players_range();
    let outcome = fetch_for_view(&client, args.spreadsheet_id.clone(), &range, args.refresh).await;

    let rows = player_rows_or_fallback(outcome.data.as_ref(), args.division);
    let pagination = Pagination::new(args.page, args.per_page);
    let report = build_report(&rows, args.division, args.search.as_deref().unwrap_or(""), pagination);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(note) = source_note(&outcome, rows.is_sample) {
        println!("{}", note);
    }
    print!("{}", render(&report, pagination));
    Ok(())
}
