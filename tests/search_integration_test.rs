use httpmock::prelude::*;
use zipscope::domain::ports::SearchService;
use zipscope::{CliConfig, DashboardError, SearchController};

fn config_for(server: &MockServer, api_key: &str) -> CliConfig {
    CliConfig {
        zip: None,
        api_key: api_key.to_string(),
        profile_endpoint: server.url("/data"),
        geocode_endpoint: server.url("/geo"),
        year: 2022,
        dataset: "acs/acs5/profile".to_string(),
        table_group: "DP02".to_string(),
        verbose: false,
    }
}

#[tokio::test]
async fn test_end_to_end_search() {
    let server = MockServer::start();
    let profile_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/data/2022/acs/acs5/profile")
            .query_param("get", "group(DP02)")
            .query_param("for", "zip code tabulation area:10001")
            .query_param("key", "X");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([["DP02_0001E"], ["1000"]]));
    });
    let geocode_mock = server.mock(|when, then| {
        when.method(GET).path("/geo/10001");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "places": [{"latitude": "40.1", "longitude": "-73.9"}]
            }));
    });

    let controller = SearchController::new(config_for(&server, "X"));
    let result = controller.search("10001").await.unwrap();

    profile_mock.assert();
    geocode_mock.assert();
    assert_eq!(result.stats.population, "1000");
    assert_eq!(result.coordinates.latitude, 40.1);
    assert_eq!(result.coordinates.longitude, -73.9);
}

#[tokio::test]
async fn test_validation_error_issues_no_network_calls() {
    let server = MockServer::start();
    let any_request = server.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let controller = SearchController::new(config_for(&server, "X"));

    let result = controller.search("").await;
    assert!(matches!(result, Err(DashboardError::Validation { .. })));

    let result = controller.search("not-a-zip").await;
    assert!(matches!(result, Err(DashboardError::Validation { .. })));

    assert_eq!(any_request.hits(), 0);
}

#[tokio::test]
async fn test_primary_failure_surfaces_fetch_error() {
    let server = MockServer::start();
    let profile_mock = server.mock(|when, then| {
        when.method(GET).path("/data/2022/acs/acs5/profile");
        then.status(500);
    });
    let geocode_mock = server.mock(|when, then| {
        when.method(GET).path("/geo/10001");
        then.status(200);
    });

    let controller = SearchController::new(config_for(&server, "X"));
    let result = controller.search("10001").await;

    profile_mock.assert();
    assert!(matches!(result, Err(DashboardError::Fetch { .. })));
    // The geocoder is only consulted after a successful profile fetch.
    assert_eq!(geocode_mock.hits(), 0);
}

#[tokio::test]
async fn test_geocode_transport_failure_masked_by_fallback() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data/2022/acs/acs5/profile");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([["DP02_0001E"], ["1000"]]));
    });

    // Point the geocoder at a closed port so the request itself fails.
    let mut config = config_for(&server, "X");
    config.geocode_endpoint = "http://127.0.0.1:9".to_string();

    let controller = SearchController::new(config);
    let result = controller.search("10001").await.unwrap();

    assert_eq!(result.coordinates.latitude, 39.8283);
    assert_eq!(result.coordinates.longitude, -98.5795);
}
