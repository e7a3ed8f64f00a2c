//! HTTP-level integration tests for the race listing endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, race_ids};
use serde_json::json;

// ---------------------------------------------------------------------------
// POST /api/v1/races/list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_body_lists_every_race_in_start_order() {
    let pool = common::test_pool().await;
    common::seed_scenario(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/races/list", json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(race_ids(&json), vec![1, 2, 3]);
}

#[tokio::test]
async fn visible_only_filter() {
    let pool = common::test_pool().await;
    common::seed_scenario(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/races/list",
        json!({ "filter": { "visibility": "VISIBLE_ONLY" } }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(race_ids(&json), vec![1, 3]);
    for race in json["data"]["races"].as_array().unwrap() {
        assert_eq!(race["visible"], true);
    }
}

#[tokio::test]
async fn meeting_ids_with_visible_only() {
    let pool = common::test_pool().await;
    common::seed_scenario(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/races/list",
        json!({ "filter": { "meeting_ids": [3, 5], "visibility": "VISIBLE_ONLY" } }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(race_ids(&json), vec![1, 3]);
}

#[tokio::test]
async fn descending_direction_reverses_order() {
    let pool = common::test_pool().await;
    common::seed_scenario(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/races/list",
        json!({ "direction": "DESCENDING" }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(race_ids(&json), vec![3, 2, 1]);
}

#[tokio::test]
async fn race_fields_are_serialized() {
    let pool = common::test_pool().await;
    common::seed_scenario(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/races/list",
        json!({ "filter": { "meeting_ids": [5] } }),
    )
    .await;

    let json = body_json(response).await;
    let race = &json["data"]["races"][0];
    assert_eq!(race["id"], 3);
    assert_eq!(race["meeting_id"], 5);
    assert_eq!(race["name"], "Charlie");
    assert_eq!(race["number"], 3);
    assert_eq!(race["visible"], true);
    assert!(race["advertised_start_time"]
        .as_str()
        .unwrap()
        .starts_with("2026-10-19T12:03:00"));
}

#[tokio::test]
async fn unknown_enum_value_is_rejected() {
    let app = common::build_test_app(common::test_pool().await);

    let response = post_json(
        app,
        "/api/v1/races/list",
        json!({ "filter": { "visibility": "INVISIBLE_ONLY" } }),
    )
    .await;

    assert!(response.status().is_client_error());
}

// ---------------------------------------------------------------------------
// GET /api/v1/races
// ---------------------------------------------------------------------------

#[tokio::test]
async fn query_string_filters_and_sorts() {
    let pool = common::test_pool().await;
    common::seed_scenario(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(
        app,
        "/api/v1/races?meeting_ids=3,5&visibility=VISIBLE_ONLY&direction=DESCENDING",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(race_ids(&json), vec![3, 1]);
}

#[tokio::test]
async fn query_string_without_params_lists_everything() {
    let pool = common::test_pool().await;
    common::seed_scenario(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/races").await;

    let json = body_json(response).await;
    assert_eq!(race_ids(&json), vec![1, 2, 3]);
}

#[tokio::test]
async fn malformed_meeting_ids_return_400() {
    let app = common::build_test_app(common::test_pool().await);

    let response = get(app, "/api/v1/races?meeting_ids=3,abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn store_failure_returns_sanitized_500() {
    let pool = common::test_pool().await;
    sqlx::query("DROP TABLE races").execute(&pool).await.unwrap();
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/races").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json["error"].as_str().unwrap().contains("races"));
}

#[tokio::test]
async fn listing_past_the_query_deadline_returns_504() {
    let pool = common::test_pool().await;
    let config = racing_api::config::ServerConfig {
        query_timeout_secs: 1,
        ..common::test_config()
    };
    let app = racing_api::router::build_app_router(racing_api::state::AppState::new(
        pool.clone(),
        config,
    ));
    // The in-memory pool has a single connection; holding it stalls the listing.
    let _held = pool.acquire().await.unwrap();

    let response = get(app, "/api/v1/races").await;

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "QUERY_TIMEOUT");
}
