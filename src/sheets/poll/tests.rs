//! Unit tests for the sheet poller

use super::*;
use crate::config::SheetsConfig;
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer, ttl: Duration) -> Arc<SheetsClient> {
    Arc::new(SheetsClient::with_cache_ttl(
        SheetsConfig {
            spreadsheet_id: Some(SpreadsheetId::new("sheet-1")),
            api_key: Some("key".to_string()),
            api_base_url: server.uri(),
            ..SheetsConfig::default()
        },
        ttl,
    ))
}

async fn wait_for<F>(rx: &mut watch::Receiver<SheetState>, mut done: F) -> SheetState
where
    F: FnMut(&SheetState) -> bool,
{
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let snapshot = rx.borrow_and_update().clone();
            if done(&snapshot) {
                return snapshot;
            }
            rx.changed().await.unwrap();
        }
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn test_first_poll_publishes_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sheets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": [["Name"], ["Ahmed"]]
        })))
        .mount(&mock_server)
        .await;

    let poller = SheetPoller::spawn(
        client_for(&mock_server, Duration::from_secs(120)),
        SpreadsheetId::new("sheet-1"),
        SheetRange::new("Men!A:Z"),
        Duration::from_secs(30),
    );
    let mut rx = poller.subscribe();

    let state = wait_for(&mut rx, |s| s.data.is_some()).await;

    assert!(!state.is_loading);
    assert_eq!(state.error, None);
    assert!(state.last_updated.is_some());
    assert_eq!(state.data.unwrap().records()[0][0], "Ahmed");

    poller.stop().await;
}

#[tokio::test]
async fn test_failed_poll_sets_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sheets"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": "Access denied. Please check your authentication and sheet permissions."
        })))
        .mount(&mock_server)
        .await;

    let poller = SheetPoller::spawn(
        client_for(&mock_server, Duration::from_secs(120)),
        SpreadsheetId::new("sheet-1"),
        SheetRange::new("Men!A:Z"),
        Duration::from_secs(30),
    );
    let mut rx = poller.subscribe();

    let state = wait_for(&mut rx, |s| s.error.is_some()).await;

    assert!(state.data.is_none());
    assert_eq!(
        state.error.as_deref(),
        Some("Access denied. Please check your authentication and sheet permissions.")
    );

    poller.stop().await;
}

#[tokio::test]
async fn test_repeated_ticks_refetch_after_ttl() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sheets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": [["Name"], ["Ahmed"]]
        })))
        .mount(&mock_server)
        .await;

    let poller = SheetPoller::spawn(
        client_for(&mock_server, Duration::ZERO),
        SpreadsheetId::new("sheet-1"),
        SheetRange::new("Men!A:Z"),
        Duration::from_millis(20),
    );

    tokio::time::sleep(Duration::from_millis(200)).await;
    poller.stop().await;

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.len() >= 2, "expected several polls, saw {}", requests.len());
}

#[tokio::test]
async fn test_stop_ends_polling() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sheets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "values": [] })))
        .mount(&mock_server)
        .await;

    let poller = SheetPoller::spawn(
        client_for(&mock_server, Duration::ZERO),
        SpreadsheetId::new("sheet-1"),
        SheetRange::new("Men!A:Z"),
        Duration::from_millis(10),
    );
    let mut rx = poller.subscribe();
    wait_for(&mut rx, |s| s.data.is_some()).await;

    poller.stop().await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    let after_stop = mock_server.received_requests().await.unwrap().len();

    tokio::time::sleep(Duration::from_millis(100)).await;
    let later = mock_server.received_requests().await.unwrap().len();

    assert_eq!(after_stop, later);
}
