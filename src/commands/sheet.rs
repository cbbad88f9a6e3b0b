//! Raw sheet view: any range as a table, filtered on every cell, with the
//! chart series from its first numeric column.

use serde::Serialize;

use crate::{
    cli::ViewArgs,
    league::{
        table::{filter_rows, numeric_series, SeriesPoint},
        Pagination,
    },
    sheets::ValueRange,
    Result, SheetRange,
};

use super::common::{client_from_config, fetch_for_view, format_table, source_note};

#[derive(Debug, Serialize)]
pub struct SheetReport {
    pub range: String,
    pub header: Vec<String>,
    pub total_rows: usize,
    pub matching: usize,
    pub page: usize,
    pub page_count: usize,
    pub rows: Vec<Vec<String>>,
    pub chart: Vec<SeriesPoint>,
}

pub fn build_report(
    data: &ValueRange,
    range: &SheetRange,
    search: &str,
    pagination: Pagination,
) -> SheetReport {
    let hits = filter_rows(data.records(), search);

    SheetReport {
        range: range.to_string(),
        header: data.header().to_vec(),
        total_rows: data.records().len(),
        matching: hits.len(),
        page: pagination.page(),
        page_count: pagination.page_count(hits.len()),
        rows: pagination.slice(&hits).iter().map(|r| (*r).clone()).collect(),
        chart: numeric_series(&data.values),
    }
}

pub fn render(report: &SheetReport, pagination: Pagination) -> String {
    let mut out = format!("{} ({} rows)\n\n", report.range, report.total_rows);
    if report.header.is_empty() {
        out.push_str("No data found in the specified range\n");
        return out;
    }
    out.push_str(&format_table(&report.header, &report.rows));
    out.push_str(&pagination.label(report.matching));
    out.push('\n');

    if !report.chart.is_empty() {
        out.push_str("\nChart\n");
        let max = report
            .chart
            .iter()
            .map(|p| p.value)
            .fold(0.0_f64, f64::max);
        let name_width = report
            .chart
            .iter()
            .map(|p| p.name.chars().count())
            .max()
            .unwrap_or(0);
        for point in &report.chart {
            let bar = if max > 0.0 {
                ((point.value.max(0.0) / max) * 30.0).round() as usize
            } else {
                0
            };
            out.push_str(&format!(
                "{:<width$}  {} {}\n",
                point.name,
                "█".repeat(bar),
                point.value,
                width = name_width
            ));
        }
    }
    out
}

/// Handle the sheet command
pub async fn handle_sheet(args: ViewArgs, range: Option<SheetRange>) -> Result<()> {
    let client = client_from_config()?;
    let range = range.unwrap_or_else(|| client.config().range.clone());
    let outcome = fetch_for_view(&client, args.spreadsheet_id.clone(), &range, args.refresh).await;

    if let Some(warning) = &outcome.warning {
        println!("⚠ {}", warning);
        return Ok(());
    }

    let data = outcome.data.clone().unwrap_or_default();
    let pagination = Pagination::new(args.page, args.per_page);
    let report = build_report(&data, &range, args.search.as_deref().unwrap_or(""), pagination);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(note) = source_note(&outcome, false) {
        println!("{}", note);
    }
    print!("{}", render(&report, pagination));
    Ok(())
}
