//! Unit tests for the FPL HTTP client

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[cfg(test)]
mod http_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_team_profile_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/entry/2368852/"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 2368852,
                "name": "Moneyball FC",
                "player_first_name": "Alex",
                "player_last_name": "Morgan",
                "summary_overall_points": 60,
                "summary_overall_rank": 500000,
                "summary_event_points": 60,
                "summary_event_rank": 500000
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = FplClient::new(mock_server.uri()).unwrap();
        let profile = client
            .fetch_team_profile(TeamId::new(2368852))
            .await
            .unwrap();

        assert_eq!(profile.name, "Moneyball FC");
        assert_eq!(profile.summary_overall_rank, Some(500000));
    }

    #[tokio::test]
    async fn test_fetch_team_profile_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/entry/42/"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
            .mount(&mock_server)
            .await;

        let client = FplClient::new(mock_server.uri()).unwrap();
        match client.fetch_team_profile(TeamId::new(42)).await {
            Err(FplError::TeamNotFound { team_id }) => assert_eq!(team_id, TeamId::new(42)),
            other => panic!("Expected TeamNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_http_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bootstrap-static/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = FplClient::new(mock_server.uri()).unwrap();
        let result = client.fetch_league_bootstrap().await;
        assert!(matches!(result, Err(FplError::Http(_))));
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/entry/7/event/1/picks/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>The game is being updated.</html>"))
            .mount(&mock_server)
            .await;

        let client = FplClient::new(mock_server.uri()).unwrap();
        let result = client
            .fetch_gameweek_picks(TeamId::new(7), Gameweek::new(1))
            .await;
        assert!(matches!(result, Err(FplError::Json(_))));
    }

    #[tokio::test]
    async fn test_picks_not_found_is_generic_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/entry/7/event/3/picks/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = FplClient::new(mock_server.uri()).unwrap();
        match client
            .fetch_gameweek_picks(TeamId::new(7), Gameweek::new(3))
            .await
        {
            Err(FplError::NotFound { url }) => assert!(url.ends_with("/entry/7/event/3/picks/")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_player_points_sum_double_gameweek() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/element-summary/308/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "history": [
                    {"round": 1, "total_points": 2},
                    {"round": 2, "total_points": 9},
                    {"round": 2, "total_points": 6},
                    {"round": 3, "total_points": 1}
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = FplClient::new(mock_server.uri()).unwrap();
        let id = PlayerId::new(308);
        assert_eq!(client.fetch_player_gameweek_points(id, Gameweek::new(2)).await, 15);
        assert_eq!(client.fetch_player_gameweek_points(id, Gameweek::new(1)).await, 2);
        // Blank gameweek
        assert_eq!(client.fetch_player_gameweek_points(id, Gameweek::new(4)).await, 0);
    }

    #[tokio::test]
    async fn test_player_points_degrade_to_zero() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/element-summary/1/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = FplClient::new(mock_server.uri()).unwrap();
        let points = client
            .fetch_player_gameweek_points(PlayerId::new(1), Gameweek::new(1))
            .await;
        assert_eq!(points, 0);
    }

    #[test]
    fn test_base_url_normalisation() {
        let client = FplClient::new("http://localhost:9999/api/").unwrap();
        assert_eq!(
            client.url("/entry/1/"),
            "http://localhost:9999/api/entry/1/"
        );
    }
}
