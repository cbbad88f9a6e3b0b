//! Matches view: summary cards plus a searchable, paginated match table.

use serde::Serialize;

use crate::{
    cli::ViewArgs,
    league::{
        fallback::match_rows_or_fallback,
        matches::{search_matches, MatchRecord, MatchSummary},
        Pagination, Rows,
    },
    Division, Result,
};

use super::common::{client_from_config, fetch_for_view, format_table, source_note};

#[derive(Debug, Serialize)]
pub struct MatchesReport {
    pub division: Division,
    pub is_sample: bool,
    pub summary: MatchSummary,
    pub matching: usize,
    pub page: usize,
    pub page_count: usize,
    pub matches: Vec<MatchRecord>,
}

pub fn build_report(rows: &Rows<'_>, division: Division, search: &str, pagination: Pagination) -> MatchesReport {
    let records = rows.records();
    let hits = search_matches(records, search);

    MatchesReport {
        division,
        is_sample: rows.is_sample,
        summary: MatchSummary::from_rows(records),
        matching: hits.len(),
        page: pagination.page(),
        page_count: pagination.page_count(hits.len()),
        matches: pagination
            .slice(&hits)
            .iter()
            .map(|row| MatchRecord::from_row(row))
            .collect(),
    }
}

pub fn render(report: &MatchesReport, pagination: Pagination) -> String {
    let header: Vec<String> = [
        "Date", "Player 1", "Player 2", "Score", "Winner", "Duration", "Tournament", "Status",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let rows: Vec<Vec<String>> = report
        .matches
        .iter()
        .map(|m| {
            vec![
                m.date.clone(),
                m.player1.clone(),
                m.player2.clone(),
                m.score.clone(),
                m.winner.clone(),
                m.duration.clone(),
                m.tournament.clone(),
                m.status.to_string(),
            ]
        })
        .collect();

    let mut out = format!(
        "{} Matches\nTotal Matches: {}  Completed: {}  Avg Duration: {}m\n\n",
        report.division.label(),
        report.summary.total_matches,
        report.summary.completed_matches,
        report.summary.avg_duration_minutes,
    );
    out.push_str(&format_table(&header, &rows));
    out.push_str(&pagination.label(report.matching));
    out.push('\n');
    out
}

/// Handle the matches command
pub async fn handle_matches(args: ViewArgs) -> Result<()> {
    let client = client_from_config()?;
    let range = args.division.matches_range();
    let outcome = fetch_for_view(&client, args.spreadsheet_id.clone(), &range, args.refresh).await;

    let rows = match_rows_or_fallback(outcome.data.as_ref(), args.division);
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
