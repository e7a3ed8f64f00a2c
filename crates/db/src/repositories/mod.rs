//! Repository layer: one module per table, plus query composition.

pub mod race_query;
pub mod race_repo;
mod seed_gate;

use async_trait::async_trait;
use racing_core::racing::{RaceFilter, SortSpec};

pub use race_repo::RaceRepo;

use crate::error::RepoError;
use crate::models::race::Race;

/// Read access to races, as consumed by the service layer.
///
/// Implemented by [`RaceRepo`]; test doubles implement it directly.
#[async_trait]
pub trait RaceSource: Send + Sync {
    async fn list(
        &self,
        filter: Option<&RaceFilter>,
        sort: SortSpec,
    ) -> Result<Vec<Race>, RepoError>;
}
