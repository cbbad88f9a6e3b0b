//! Leaderboard view.

use serde::Serialize;

use crate::{
    cli::ViewArgs,
    league::{
        fallback::player_rows_or_fallback,
        leaderboard::{rank_players, Medal, RankedPlayer},
        Pagination, Rows,
    },
    Division, Result,
};

use super::common::{client_from_config, fetch_for_view, format_table, source_note};

#[derive(Debug, Serialize)]
pub struct LeaderboardReport {
    pub division: Division,
    pub is_sample: bool,
    pub matching: usize,
    pub page: usize,
    pub page_count: usize,
    pub players: Vec<RankedPlayer>,
}

/// Rank everyone first so ranks stay stable under search and `top`.
pub fn build_report(
    rows: &Rows<'_>,
    division: Division,
    search: &str,
    top: Option<usize>,
    pagination: Pagination,
) -> LeaderboardReport {
    let needle = search.to_lowercase();
    let mut ranked: Vec<RankedPlayer> = rank_players(rows.records())
        .into_iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .collect();
    if let Some(n) = top {
        ranked.truncate(n);
    }

    LeaderboardReport {
        division,
        is_sample: rows.is_sample,
        matching: ranked.len(),
        page: pagination.page(),
        page_count: pagination.page_count(ranked.len()),
        players: pagination.slice(&ranked).to_vec(),
    }
}

fn medal_mark(medal: Option<Medal>) -> &'static str {
    match medal {
        Some(Medal::Gold) => "🥇",
        Some(Medal::Silver) => "🥈",
        Some(Medal::Bronze) => "🥉",
        None => "",
    }
}

pub fn render(report: &LeaderboardReport, pagination: Pagination) -> String {
    let header: Vec<String> = [
        "Rank", "", "Name", "Played", "Won", "Lost", "Games", "Win Rate", "Points", "Category",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let rows: Vec<Vec<String>> = report
        .players
        .iter()
        .map(|p| {
            vec![
                format!("#{}", p.rank),
                medal_mark(p.medal).to_string(),
                p.name.clone(),
                p.matches_played.to_string(),
                p.matches_won.to_string(),
                p.matches_lost.to_string(),
                p.games_won.to_string(),
                format!("{:.1}%", p.win_rate),
                format!("{:.1}", p.points),
                p.category.to_string(),
            ]
        })
        .collect();

    let mut out = format!("{} Leaderboard\n\n", report.division.label());
    out.push_str(&format_table(&header, &rows));
    out.push_str(&pagination.label(report.matching));
    out.push('\n');
    out
}

/// Handle the leaderboard command
pub async fn handle_leaderboard(args: ViewArgs, top: Option<usize>) -> Result<()> {
    let client = client_from_config()?;
    let range = args.division.players_range();
    let outcome = fetch_for_view(&client, args.spreadsheet_id.clone(), &range, args.refresh).await;

    let rows = player_rows_or_fallback(outcome.data.as_ref(), args.division);
    let pagination = Pagination::new(args.page, args.per_page);
    let report = build_report(
        &rows,
        args.division,
        args.search.as_deref().unwrap_or(""),
        top,
        pagination,
    );

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
