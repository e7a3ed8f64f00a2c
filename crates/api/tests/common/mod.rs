#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use racing_db::models::race::CreateRace;
use racing_db::DbPool;
use tower::ServiceExt;

use racing_api::config::ServerConfig;
use racing_api::router::build_app_router;
use racing_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        query_timeout_secs: 10,
        seed_race_count: 20,
        seed_on_startup: false,
    }
}

/// Open an in-memory database with the races schema applied.
pub async fn test_pool() -> DbPool {
    let pool = racing_db::create_pool("sqlite::memory:").await.unwrap();
    racing_db::run_migrations(&pool).await.unwrap();
    pool
}

/// Insert ids 1, 2, 3: {meeting 3, visible, T+1m}, {meeting 3, hidden,
/// T+2m}, {meeting 5, visible, T+3m}.
pub async fn seed_scenario(pool: &DbPool) {
    let t = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
    let races = [(3, "Alpha", true, 1), (3, "Bravo", false, 2), (5, "Charlie", true, 3)]
        .into_iter()
        .map(|(meeting_id, name, visible, minutes)| CreateRace {
            meeting_id,
            name: name.to_string(),
            number: minutes,
            visible,
            advertised_start_time: t + Duration::minutes(minutes),
        })
        .collect::<Vec<_>>();

    let mut conn = pool.acquire().await.unwrap();
    racing_db::seed::insert_races(&mut conn, &races).await.unwrap();
}

/// Build the full application router, mirroring `main.rs`.
pub fn build_test_app(pool: DbPool) -> Router {
    build_app_router(AppState::new(pool, test_config()))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Race ids from a `{ "data": { "races": [...] } }` body.
pub fn race_ids(json: &serde_json::Value) -> Vec<i64> {
    json["data"]["races"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect()
}
