//! Racing service: the request/response envelope around race listing.
//!
//! Sort defaults are resolved by the repository, not here, so they are
//! applied exactly once whichever caller reaches it.

use std::sync::Arc;

use racing_core::racing::{RaceFilter, SortBy, SortDirection, SortSpec};
use racing_db::models::race::Race;
use racing_db::repositories::RaceSource;
use racing_db::RepoError;
use serde::{Deserialize, Serialize};

/// Body of a list request. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListRacesRequest {
    pub filter: Option<RaceFilter>,
    pub sort_by: SortBy,
    pub direction: SortDirection,
}

impl ListRacesRequest {
    pub fn sort(&self) -> SortSpec {
        SortSpec::new(self.sort_by, self.direction)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListRacesResponse {
    pub races: Vec<Race>,
}

/// Delegates list requests to a [`RaceSource`].
#[derive(Clone)]
pub struct RacingService {
    races: Arc<dyn RaceSource>,
}

impl RacingService {
    pub fn new(races: Arc<dyn RaceSource>) -> Self {
        Self { races }
    }

    pub async fn list_races(
        &self,
        request: &ListRacesRequest,
    ) -> Result<ListRacesResponse, RepoError> {
        let races = self
            .races
            .list(request.filter.as_ref(), request.sort())
            .await?;
        tracing::debug!(count = races.len(), "Listed races");
        Ok(ListRacesResponse { races })
    }
}
