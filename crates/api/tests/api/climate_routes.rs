use crate::helpers::{mock_store, spawn_app};
use climate_api::MemoryStore;
use hyper::StatusCode;
use serde_json::json;
use time::macros::date;

#[tokio::test]
async fn index_lists_available_routes() {
    let test_app = spawn_app(mock_store());

    let (status, body) = test_app.get("/").await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("Available Routes:"));
    assert!(html.contains("/api/v1.0/precipitation"));
    assert!(html.contains("/api/v1.0/stations"));
    assert!(html.contains("/api/v1.0/tobs"));
}

#[tokio::test]
async fn trailing_year_is_anchored_to_last_observation() {
    let test_app = spawn_app(mock_store());
    assert_eq!(test_app.state.trailing_year.start(), date!(2016 - 08 - 23));
    assert_eq!(test_app.state.trailing_year.end(), Some(date!(2017 - 08 - 23)));
}

#[tokio::test]
async fn precipitation_covers_trailing_year_one_value_per_date() {
    let test_app = spawn_app(mock_store());

    let (status, json) = test_app.get_json("/api/v1.0/precipitation").await;
    assert_eq!(status, StatusCode::OK);
    // 2016-08-22 is outside the window, 2017-08-23 has no reading
    assert_eq!(
        json,
        json!(["2016-08-23", 0.15, "2017-01-10", 0.0, "2017-08-20", 0.5])
    );
}

#[tokio::test]
async fn precipitation_window_can_be_overridden() {
    let test_app = spawn_app(mock_store());

    let (status, json) = test_app
        .get_json("/api/v1.0/precipitation?start=2016-08-01&end=2016-08-22")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!(["2016-08-22", 0.08]));
}

#[tokio::test]
async fn stations_are_flattened_in_load_order() {
    let test_app = spawn_app(mock_store());

    let (status, json) = test_app.get_json("/api/v1.0/stations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([
            "USC00519397",
            "WAIKIKI 717.2, HI US",
            "USC00513117",
            "KANEOHE 838.1, HI US"
        ])
    );

    let (_, again) = test_app.get_json("/api/v1.0/stations").await;
    assert_eq!(json, again);
}

#[tokio::test]
async fn tobs_returns_date_station_temperature_triples() {
    let test_app = spawn_app(mock_store());

    let (status, json) = test_app.get_json("/api/v1.0/tobs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([
            "2016-08-23", "USC00513117", 76.0,
            "2017-01-10", "USC00513117", 68.0,
            "2017-08-20", "USC00519397", 75.0,
            "2017-08-23", "USC00519397", 80.0
        ])
    );
}

#[tokio::test]
async fn tobs_rejects_malformed_window() {
    let test_app = spawn_app(mock_store());

    let (status, json) = test_app.get_json("/api/v1.0/tobs?start=last-week").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "InvalidDateFormat");
}

#[tokio::test]
async fn stats_from_start_date() {
    let test_app = spawn_app(mock_store());

    let (status, json) = test_app.get_json("/api/v1.0/2017-01-01").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([68.0, 74.3, 80.0]));

    let (status, legacy) = test_app.get_json("/api/v1.0/start_temp/2017-01-01").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(legacy, json);
}

#[tokio::test]
async fn stats_between_dates() {
    let test_app = spawn_app(mock_store());

    let (status, json) = test_app.get_json("/api/v1.0/2017-08-20/2017-08-23").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([75.0, 77.5, 80.0]));

    let (status, legacy) = test_app
        .get_json("/api/v1.0/temp_range/2017-08-20/2017-08-23")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(legacy, json);
}

#[tokio::test]
async fn stats_without_data_are_empty() {
    let test_app = spawn_app(mock_store());

    let (status, json) = test_app.get_json("/api/v1.0/2018-01-01").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));

    let (status, json) = test_app.get_json("/api/v1.0/2015-01-01/2015-12-31").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn malformed_start_is_bad_request() {
    let test_app = spawn_app(mock_store());

    let (status, json) = test_app.get_json("/api/v1.0/2016-13-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "InvalidDateFormat");
    assert!(json["message"].as_str().unwrap().contains("2016-13-01"));
}

#[tokio::test]
async fn signed_or_padded_dates_are_bad_request() {
    let test_app = spawn_app(mock_store());

    for uri in [
        "/api/v1.0/+2017-01-01",
        "/api/v1.0/%202017-01-01",
        "/api/v1.0/2017-01-01/+2017-08-23",
        "/api/v1.0/tobs?start=-2017-01-01",
    ] {
        let (status, json) = test_app.get_json(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(json["error"], "InvalidDateFormat", "{uri}");
    }
}

#[tokio::test]
async fn inverted_range_is_bad_request() {
    let test_app = spawn_app(mock_store());

    let (status, json) = test_app.get_json("/api/v1.0/2017-01-05/2017-01-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "InvalidRange");
}

#[tokio::test]
async fn empty_store_serves_empty_results() {
    let test_app = spawn_app(MemoryStore::default());

    for uri in [
        "/api/v1.0/precipitation",
        "/api/v1.0/stations",
        "/api/v1.0/tobs",
        "/api/v1.0/2017-01-01",
        "/api/v1.0/2017-01-01/2017-12-31",
    ] {
        let (status, json) = test_app.get_json(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(json, json!([]), "{uri}");
    }
}

#[tokio::test]
async fn api_docs_are_served() {
    let test_app = spawn_app(mock_store());

    let (status, _) = test_app.get("/docs").await;
    assert_eq!(status, StatusCode::OK);
}
