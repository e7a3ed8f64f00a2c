pub mod health;
pub mod races;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /races                                           list by query string (GET)
/// /races/list                                      list by JSON body (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/races", races::router())
}
