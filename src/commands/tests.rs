//! Tests for command report building and rendering

use super::*;
use crate::config::SheetsConfig;
use crate::league::fallback::{match_rows_or_fallback, player_rows_or_fallback};
use crate::league::Pagination;
use crate::sheets::{CacheStatus, SheetState, SheetsClient, ValueRange};
use crate::{Division, SheetRange, SheetView, SpreadsheetId};

fn view_args(division: Division) -> crate::cli::ViewArgs {
    crate::cli::ViewArgs {
        spreadsheet_id: None,
        division,
        search: None,
        page: 0,
        per_page: 10,
        json: false,
        refresh: false,
    }
}

#[cfg(test)]
mod common_tests {
    use super::*;
    use common::{fetch_for_view, format_table, owned_row, source_note, FetchOutcome};
    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[test]
    fn test_format_table_aligns_columns() {
        let header = owned_row(["Name", "Won"]);
        let rows = vec![owned_row(["Taimoor Zulfiqar", "2"]), owned_row(["Umer"])];

        let table = format_table(&header, &rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Name              Won");
        assert_eq!(lines[1], "----------------  ---");
        assert_eq!(lines[2], "Taimoor Zulfiqar  2");
        assert_eq!(lines[3], "Umer");
    }

    #[test]
    fn test_source_note_prefers_warning() {
        let outcome = FetchOutcome {
            warning: Some("Failed to fetch sheet data".to_string()),
            ..FetchOutcome::default()
        };
        assert_eq!(
            source_note(&outcome, true).unwrap(),
            "⚠ Failed to fetch sheet data (showing sample data)"
        );

        let cached = FetchOutcome {
            status: Some(CacheStatus::Hit),
            ..FetchOutcome::default()
        };
        assert_eq!(source_note(&cached, false).unwrap(), "✓ Loaded from cache");
        assert!(source_note(&FetchOutcome::default(), false).is_none());
    }

    #[tokio::test]
    async fn test_fetch_for_view_without_spreadsheet_warns() {
        let client = SheetsClient::new(SheetsConfig::default());

        let outcome = fetch_for_view(&client, None, &SheetRange::new("Men!A:Z"), false).await;

        assert!(outcome.data.is_none());
        assert!(outcome.warning.unwrap().contains("Spreadsheet ID not provided"));
    }

    #[tokio::test]
    async fn test_fetch_for_view_success_and_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/sheets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "values": [["Name"], ["Ahmed"]]
            })))
            .mount(&mock_server)
            .await;

        let client = SheetsClient::new(SheetsConfig {
            api_key: Some("k".to_string()),
            api_base_url: mock_server.uri(),
            ..SheetsConfig::default()
        });

        let outcome = fetch_for_view(
            &client,
            Some(SpreadsheetId::new("sheet-1")),
            &SheetRange::new("Men!A:Z"),
            true,
        )
        .await;

        assert_eq!(outcome.status, Some(CacheStatus::Refreshed));
        assert!(outcome.warning.is_none());
        assert_eq!(outcome.data.unwrap().records()[0][0], "Ahmed");
    }

    #[tokio::test]
    async fn test_fetch_for_view_error_becomes_warning() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/sheets"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "error": "Access denied. Please check your authentication and sheet permissions."
            })))
            .mount(&mock_server)
            .await;

        let client = SheetsClient::new(SheetsConfig {
            api_base_url: mock_server.uri(),
            ..SheetsConfig::default()
        });

        let outcome = fetch_for_view(
            &client,
            Some(SpreadsheetId::new("sheet-1")),
            &SheetRange::new("Men!A:Z"),
            false,
        )
        .await;

        assert!(outcome.data.is_none());
        assert_eq!(
            outcome.warning.as_deref(),
            Some("Access denied. Please check your authentication and sheet permissions.")
        );
    }
}

#[cfg(test)]
mod view_tests {
    use super::*;

    #[test]
    fn test_players_report_on_sample() {
        let rows = player_rows_or_fallback(None, Division::Men);
        let pagination = Pagination::new(0, 5);

        let report = players::build_report(&rows, Division::Men, "", pagination);

        assert!(report.is_sample);
        assert_eq!(report.summary.total_players, 8);
        assert_eq!(report.summary.total_matches, 12);
        assert_eq!(report.matching, 8);
        assert_eq!(report.page_count, 2);
        assert_eq!(report.players.len(), 5);
        assert_eq!(report.players[0].win_rate, "100%");

        let text = players::render(&report, pagination);
        assert!(text.starts_with("Men's Players\n"));
        assert!(text.contains("1-5 of 8"));
    }

    #[test]
    fn test_players_search_keeps_full_summary() {
        let rows = player_rows_or_fallback(None, Division::Women);
        let report = players::build_report(&rows, Division::Women, "chen", Pagination::default());

        assert_eq!(report.matching, 1);
        assert_eq!(report.players[0].player.name, "Lisa Chen");
        assert_eq!(report.summary.total_players, 8);
    }

    #[test]
    fn test_players_json_flattens_record() {
        let rows = player_rows_or_fallback(None, Division::Men);
        let report = players::build_report(&rows, Division::Men, "ahmed", Pagination::default());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["division"], "men");
        assert_eq!(json["players"][0]["name"], "Ahmed");
        assert_eq!(json["players"][0]["win_rate"], "67%");
    }

    #[test]
    fn test_leaderboard_search_keeps_overall_rank() {
        let rows = player_rows_or_fallback(None, Division::Men);
        let report =
            leaderboard::build_report(&rows, Division::Men, "hassan", None, Pagination::default());

        assert_eq!(report.players.len(), 1);
        assert_eq!(report.players[0].name, "Hassan");
        assert_eq!(report.players[0].rank, 4);
        assert!(report.players[0].medal.is_none());
    }

    #[test]
    fn test_leaderboard_top() {
        let rows = player_rows_or_fallback(None, Division::Men);
        let pagination = Pagination::default();
        let report = leaderboard::build_report(&rows, Division::Men, "", Some(3), pagination);

        assert_eq!(report.matching, 3);
        assert_eq!(report.players[0].name, "Ahmed");

        let text = leaderboard::render(&report, pagination);
        assert!(text.contains("#1"));
        assert!(text.contains("7.5"));
    }

    #[test]
    fn test_matches_report() {
        let rows = match_rows_or_fallback(None, Division::Men);
        let report = matches::build_report(&rows, Division::Men, "hassan", Pagination::default());

        assert_eq!(report.summary.total_matches, 8);
        assert_eq!(report.summary.completed_matches, 8);
        assert_eq!(report.matching, 2);
        assert!(matches::render(&report, Pagination::default()).contains("Avg Duration:"));
    }

    #[test]
    fn test_schedule_report_groups_by_day() {
        let data = ValueRange::from_rows(vec![
            common::owned_row(["Date", "Player 1", "Player 2", "Score", "Winner"]),
            common::owned_row(["2024-01-16", "A", "B", "6-3, 6-4", "A"]),
            common::owned_row(["2024-01-16", "C", "D", "", ""]),
            common::owned_row(["2024-01-17", "E", "F", "", ""]),
        ]);
        let rows = match_rows_or_fallback(Some(&data), Division::Women);

        let report = schedule::build_report(&rows, Division::Women, "");

        assert_eq!(report.days.len(), 2);
        assert_eq!(report.days[0].label, "Tuesday, January 16, 2024");
        assert_eq!(report.days[0].matches.len(), 2);

        let text = schedule::render(&report);
        assert!(text.contains("Tuesday, January 16, 2024 (2 matches)"));
        assert!(text.contains("  C vs D  [Scheduled]"));
        assert!(text.contains("Wednesday, January 17, 2024 (1 match)"));
    }

    #[test]
    fn test_sheet_report_filters_any_cell() {
        let data = ValueRange::from_rows(vec![
            common::owned_row(["Name", "Category", "Points"]),
            common::owned_row(["Ahmed", "Advanced", "7.5"]),
            common::owned_row(["Farhan", "Beginner", "0.4"]),
        ]);

        let report = sheet::build_report(
            &data,
            &SheetRange::new("Men!A:Z"),
            "begin",
            Pagination::default(),
        );

        assert_eq!(report.total_rows, 2);
        assert_eq!(report.matching, 1);
        assert_eq!(report.rows[0][0], "Farhan");
        assert_eq!(report.chart.len(), 2);
        assert_eq!(report.chart[0].value, 7.5);

        let text = sheet::render(&report, Pagination::default());
        assert!(text.contains("Chart"));
    }

    #[test]
    fn test_watch_render_states() {
        let args = view_args(Division::Men);

        let loading = SheetState {
            is_loading: true,
            ..SheetState::default()
        };
        assert_eq!(watch::render_state(&loading, &args, SheetView::Players), "Loading...\n");

        let failed = SheetState {
            error: Some("Failed to fetch sheet data".to_string()),
            ..SheetState::default()
        };
        let text = watch::render_state(&failed, &args, SheetView::Leaderboard);
        assert!(text.starts_with("⚠ Failed to fetch sheet data (showing sample data)"));
        assert!(text.contains("Men's Leaderboard"));

        let stale = SheetState {
            data: Some(ValueRange {
                values: vec![
                    vec!["Name".to_string()],
                    vec!["Ahmed".to_string(), "2".to_string(), "1".to_string(), "1".to_string()],
                ],
                ..ValueRange::default()
            }),
            error: Some("Failed to fetch sheet data".to_string()),
            ..SheetState::default()
        };
        let text = watch::render_state(&stale, &args, SheetView::Players);
        assert!(text.starts_with("⚠ Failed to fetch sheet data (showing last good data)"));
    }
}

#[cfg(test)]
mod config_command_tests {
    use super::*;
    use config::{describe, mask_key, ConfigUpdate};

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("AIzaSyD-1234"), "****1234");
        assert_eq!(mask_key("ab"), "****");
        assert_eq!(mask_key("abcd"), "****");
        assert_eq!(mask_key("abcde"), "****bcde");
    }

    #[test]
    fn test_update_applies_only_set_fields() {
        let update = ConfigUpdate {
            spreadsheet_id: Some(SpreadsheetId::new("new-id")),
            use_service_account: Some(true),
            ..ConfigUpdate::default()
        };
        let before = SheetsConfig {
            api_key: Some("kept".to_string()),
            ..SheetsConfig::default()
        };

        let after = update.apply(before);

        assert_eq!(after.spreadsheet_id, Some(SpreadsheetId::new("new-id")));
        assert!(after.use_service_account);
        assert_eq!(after.api_key.as_deref(), Some("kept"));
        assert_eq!(after.range.as_str(), "Men!A:Z");
    }

    #[test]
    fn test_empty_api_key_clears_it() {
        let update = ConfigUpdate {
            api_key: Some(String::new()),
            ..ConfigUpdate::default()
        };
        let after = update.apply(SheetsConfig {
            api_key: Some("old".to_string()),
            ..SheetsConfig::default()
        });
        assert!(after.api_key.is_none());
    }

    #[test]
    fn test_describe_masks_key() {
        let text = describe(&SheetsConfig {
            api_key: Some("AIza-secret-9876".to_string()),
            ..SheetsConfig::default()
        });
        assert!(text.contains("API key: ****9876"));
        assert!(text.contains("Spreadsheet ID: (not set)"));
        assert!(!text.contains("secret"));
    }

    #[test]
    fn test_is_empty() {
        assert!(ConfigUpdate::default().is_empty());
    }
}

#[cfg(test)]
mod serve_command_tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_flags_override_env_defaults() {
        let config = serve::resolve_server_config(Some(8080), Some(PathBuf::from("/tmp/key.json")));
        assert_eq!(config.port, 8080);
        assert_eq!(config.service_account_key_path, PathBuf::from("/tmp/key.json"));
    }
}
