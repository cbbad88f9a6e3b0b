//! Unit tests for the Google Sheets HTTP client

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn api_for(server: &MockServer) -> GoogleSheetsApi {
    GoogleSheetsApi::with_base_url(Client::new(), server.uri())
}

#[cfg(test)]
mod url_tests {
    use super::*;

    #[test]
    fn test_values_url_default_base() {
        let api = GoogleSheetsApi::new(Client::new());
        let url = api
            .values_url(&SpreadsheetId::new("abc123"), &SheetRange::new("Men!A:Z"))
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/abc123/values/Men!A:Z"
        );
    }

    #[test]
    fn test_values_url_escapes_spaces_and_slashes() {
        let api = GoogleSheetsApi::with_base_url(Client::new(), "http://localhost:9000/");
        let url = api
            .values_url(&SpreadsheetId::new("abc"), &SheetRange::new("Men Matches/2024!A:G"))
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:9000/v4/spreadsheets/abc/values/Men%20Matches%2F2024!A:G"
        );
    }

    #[test]
    fn test_values_url_rejects_garbage_base() {
        let api = GoogleSheetsApi::with_base_url(Client::new(), "not a url");
        let result = api.values_url(&SpreadsheetId::new("abc"), &SheetRange::default());
        assert!(matches!(result, Err(LeagueError::InvalidUrl(_))));
    }
}

#[cfg(test)]
mod http_tests {
    use super::*;

    #[tokio::test]
    async fn test_values_get_with_api_key() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v4/spreadsheets/sheet-1/values/Men!A:Z"))
            .and(query_param("key", "AIza-test"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "range": "Men!A1:F3",
                "majorDimension": "ROWS",
                "values": [
                    ["Name", "Matches Played", "Matches Won", "Matches Lost", "Games Won", "Category"],
                    ["Ahmed", "3", "2", "1", "15", "Advanced"]
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = api_for(&mock_server)
            .values_get(
                &SpreadsheetId::new("sheet-1"),
                &SheetRange::new("Men!A:Z"),
                &SheetsAuth::ApiKey("AIza-test".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(result.range.as_deref(), Some("Men!A1:F3"));
        assert_eq!(result.records()[0][0], "Ahmed");
    }

    #[tokio::test]
    async fn test_values_get_maps_403() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "error": {
                    "code": 403,
                    "message": "The caller does not have permission",
                    "status": "PERMISSION_DENIED"
                }
            })))
            .mount(&mock_server)
            .await;

        let result = api_for(&mock_server)
            .values_get(
                &SpreadsheetId::new("private"),
                &SheetRange::default(),
                &SheetsAuth::ApiKey("key".to_string()),
            )
            .await;

        match result {
            Err(LeagueError::PermissionDenied { message }) => {
                assert_eq!(message, "The caller does not have permission");
            }
            other => panic!("Expected PermissionDenied, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_values_get_maps_404() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&mock_server)
            .await;

        let result = api_for(&mock_server)
            .values_get(
                &SpreadsheetId::new("missing"),
                &SheetRange::default(),
                &SheetsAuth::ApiKey("key".to_string()),
            )
            .await;

        match result {
            Err(LeagueError::SpreadsheetNotFound { message }) => assert_eq!(message, "Not Found"),
            other => panic!("Expected SpreadsheetNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_values_get_other_status_is_upstream_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": { "code": 400, "message": "API key not valid. Please pass a valid API key." }
            })))
            .mount(&mock_server)
            .await;

        let result = api_for(&mock_server)
            .values_get(
                &SpreadsheetId::new("sheet-1"),
                &SheetRange::default(),
                &SheetsAuth::ApiKey("bad".to_string()),
            )
            .await;

        match result {
            Err(LeagueError::Upstream { status, message }) => {
                assert_eq!(status, 400);
                assert!(message.contains("API key not valid"));
            }
            other => panic!("Expected Upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_values_get_with_service_account_uses_bearer_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "ya29.sa-token",
                "expires_in": 3600
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v4/spreadsheets/sheet-1/values/Women!A:Z"))
            .and(header("authorization", "Bearer ya29.sa-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "range": "Women!A1:A1",
                "majorDimension": "ROWS",
                "values": [["Name"]]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let account = ServiceAccountKey {
            client_email: "reader@tennis.iam.gserviceaccount.com".to_string(),
            private_key: include_str!("../../../tests/fixtures/test-service-account.pem")
                .to_string(),
            private_key_id: None,
            project_id: None,
            token_uri: format!("{}/token", mock_server.uri()),
        };

        let result = api_for(&mock_server)
            .values_get(
                &SpreadsheetId::new("sheet-1"),
                &SheetRange::new("Women!A:Z"),
                &SheetsAuth::ServiceAccount(account),
            )
            .await
            .unwrap();

        assert_eq!(result.header(), ["Name"]);
    }
}
