//! Schedule view: a division's matches grouped by date.

use serde::Serialize;

use crate::{
    cli::ViewArgs,
    league::{
        fallback::match_rows_or_fallback,
        matches::{format_match_date, group_by_date, search_matches, MatchRecord},
        Rows,
    },
    Division, Result,
};

use super::common::{client_from_config, fetch_for_view, source_note};

#[derive(Debug, Serialize)]
pub struct ScheduleDay {
    pub date: String,
    pub label: String,
    pub matches: Vec<MatchRecord>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleReport {
    pub division: Division,
    pub is_sample: bool,
    pub days: Vec<ScheduleDay>,
}

pub fn build_report(rows: &Rows<'_>, division: Division, search: &str) -> ScheduleReport {
    let hits: Vec<Vec<String>> = search_matches(rows.records(), search)
        .into_iter()
        .cloned()
        .collect();

    let days = group_by_date(&hits)
        .into_iter()
        .map(|group| ScheduleDay {
            date: group.date.to_string(),
            label: format_match_date(group.date),
            matches: group.rows.iter().map(|r| MatchRecord::from_row(r)).collect(),
        })
        .collect();

    ScheduleReport {
        division,
        is_sample: rows.is_sample,
        days,
    }
}

pub fn render(report: &ScheduleReport) -> String {
    let mut out = format!("{} Schedule\n", report.division.label());
    for day in &report.days {
        let count = day.matches.len();
        out.push_str(&format!(
            "\n{} ({} {})\n",
            day.label,
            count,
            if count == 1 { "match" } else { "matches" }
        ));
        for m in &day.matches {
            let mut line = format!("  {} vs {}", m.player1, m.player2);
            if !m.score.is_empty() {
                line.push_str(&format!("  {}", m.score));
            }
            line.push_str(&format!("  [{}]", m.status));
            if !m.tournament.is_empty() {
                line.push_str(&format!("  {}", m.tournament));
            }
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

/// Handle the schedule command
pub async fn handle_schedule(args: ViewArgs) -> Result<()> {
    let client = client_from_config()?;
    let range = args.division.matches_range();
    let outcome = fetch_for_view(&client, args.spreadsheet_id.clone(), &range, args.refresh).await;

    let rows = match_rows_or_fallback(outcome.data.as_ref(), args.division);
    let report = build_report(&rows, args.division, args.search.as_deref().unwrap_or(""));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(note) = source_note(&outcome, rows.is_sample) {
        println!("{}", note);
    }
    print!("{}", render(&report));
    Ok(())
}
