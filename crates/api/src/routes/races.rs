//! Route definitions for race listing.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::races;
use crate::state::AppState;

/// Race routes mounted at `/races`.
///
/// ```text
/// GET   /        -> list_races_by_query
/// POST  /list    -> list_races
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(races::list_races_by_query))
        .route("/list", post(races::list_races))
}
