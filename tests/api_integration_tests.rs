//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint in mock mode.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use hashtag_feed::{api::create_router, AppState, Config};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::from_config(&Config::default()))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

fn ids(json: &Value) -> Vec<String> {
    json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap().to_string())
        .collect()
}

// == Feed Endpoint Tests ==

#[tokio::test]
async fn test_feed_defaults() {
    let (status, json) = get(create_test_app(), "/api/feed").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 25);
    assert_eq!(json["items"].as_array().unwrap().len(), 25);
    assert_eq!(json["items"][0]["id"], "mock-family-1");
}

#[tokio::test]
async fn test_feed_mock_two_tags() {
    let (status, json) = get(create_test_app(), "/api/feed?hashtags=a,b&limit=4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 4);
    assert_eq!(ids(&json), vec!["mock-a-1", "mock-a-2", "mock-b-3", "mock-b-4"]);

    let first = &json["items"][0];
    assert_eq!(first["hashtags"][0], "a");
    assert_eq!(first["username"], "a_demo");
    assert!(first["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_feed_items_sorted_newest_first() {
    let (_, json) = get(create_test_app(), "/api/feed?hashtags=x,y,z&limit=30").await;

    let stamps: Vec<&str> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["timestamp"].as_str().unwrap())
        .collect();
    for pair in stamps.windows(2) {
        assert!(pair[0] >= pair[1], "{} before {}", pair[0], pair[1]);
    }
}

#[tokio::test]
async fn test_feed_limit_clamped_high() {
    let (status, json) = get(create_test_app(), "/api/feed?hashtags=a&limit=500").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 100);
}

#[tokio::test]
async fn test_feed_limit_clamped_negative() {
    let (status, json) = get(create_test_app(), "/api/feed?hashtags=a&limit=-5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_feed_mode_case_insensitive() {
    let (status, json) = get(create_test_app(), "/api/feed?hashtags=a&limit=1&mode=MOCK").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["items"][0]["id"], "mock-a-1");
}

#[tokio::test]
async fn test_feed_cached_response_identical() {
    let app = create_test_app();

    let (_, first) = get(app.clone(), "/api/feed?hashtags=a,b&limit=4").await;
    let (_, second) = get(app.clone(), "/api/feed?hashtags=%20a,%20b%20&limit=4").await;
    assert_eq!(first, second);

    let (_, stats) = get(app, "/stats").await;
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 1);
    assert_eq!(stats["total_entries"], 1);
}

#[tokio::test]
async fn test_feed_live_without_credentials() {
    let (status, json) = get(create_test_app(), "/api/feed?mode=instagram").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"], "failed_to_fetch_feed");
    assert!(json["details"].as_str().unwrap().contains("INSTAGRAM_ACCESS_TOKEN"));
    assert!(json.get("items").is_none());
}

// == Stats / Health Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint_initial() {
    let (status, json) = get(create_test_app(), "/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"], 0);
    assert_eq!(json["misses"], 0);
    assert_eq!(json["expirations"], 0);
    assert_eq!(json["hit_rate"], 0.0);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get(create_test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}
