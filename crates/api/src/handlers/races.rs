//! Handlers for race listing endpoints.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use racing_core::racing::{parse_meeting_ids, RaceFilter, SortBy, SortDirection, Visibility};
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::service::ListRacesRequest;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /races`.
///
/// `meeting_ids` is a comma-separated list (`?meeting_ids=3,5`).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListRacesParams {
    pub meeting_ids: Option<String>,
    pub visibility: Option<Visibility>,
    pub sort_by: Option<SortBy>,
    pub direction: Option<SortDirection>,
}

impl ListRacesParams {
    fn into_request(self) -> AppResult<ListRacesRequest> {
        let filter = match (self.meeting_ids, self.visibility) {
            (None, None) => None,
            (meeting_ids, visibility) => Some(RaceFilter {
                meeting_ids: match meeting_ids {
                    Some(raw) => parse_meeting_ids(&raw)?,
                    None => Vec::new(),
                },
                visibility: visibility.unwrap_or_default(),
            }),
        };

        Ok(ListRacesRequest {
            filter,
            sort_by: self.sort_by.unwrap_or_default(),
            direction: self.direction.unwrap_or_default(),
        })
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /races/list
///
/// List races for a JSON request body (all fields optional).
pub async fn list_races(
    State(state): State<AppState>,
    Json(request): Json<ListRacesRequest>,
) -> AppResult<impl IntoResponse> {
    let response = state.racing.list_races(&request).await?;
    Ok(Json(DataResponse { data: response }))
}

/// GET /races?meeting_ids=&visibility=&sort_by=&direction=
///
/// Same listing as [`list_races`], driven by query parameters.
pub async fn list_races_by_query(
    State(state): State<AppState>,
    Query(params): Query<ListRacesParams>,
) -> AppResult<impl IntoResponse> {
    let request = params.into_request()?;
    let response = state.racing.list_races(&request).await?;
    Ok(Json(DataResponse { data: response }))
}
