//! Repository for the `races` table.

use std::time::Duration;

use async_trait::async_trait;
use futures::{FutureExt, TryStreamExt};
use racing_core::racing::{RaceFilter, SortSpec};
use sqlx::FromRow;

use crate::error::RepoError;
use crate::models::race::Race;
use crate::repositories::race_query::{self, ComposedQuery};
use crate::repositories::seed_gate::SeedGate;
use crate::repositories::RaceSource;
use crate::seed::{self, DEFAULT_SEED_COUNT};
use crate::DbPool;

/// Lists races and owns the one-time bootstrap seed.
///
/// Cheap to share behind an `Arc`; every `list` call is independent.
pub struct RaceRepo {
    pool: DbPool,
    seed_gate: SeedGate,
    seed_count: usize,
    query_timeout: Option<Duration>,
}

impl RaceRepo {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            seed_gate: SeedGate::new(),
            seed_count: DEFAULT_SEED_COUNT,
            query_timeout: None,
        }
    }

    /// Number of demo races written by [`RaceRepo::init`].
    pub fn with_seed_count(mut self, count: usize) -> Self {
        self.seed_count = count;
        self
    }

    /// Abort listings that run longer than `limit`.
    pub fn with_query_timeout(mut self, limit: Duration) -> Self {
        self.query_timeout = Some(limit);
        self
    }

    /// Seed the store with demo races, at most once per repository.
    ///
    /// Concurrent callers share a single attempt and its outcome. A failed
    /// attempt leaves the gate open so a later call can retry.
    pub async fn init(&self) -> Result<(), RepoError> {
        let pool = self.pool.clone();
        let count = self.seed_count;
        self.seed_gate
            .run(move || seed::seed_demo_races(pool, count).boxed())
            .await
            .map_err(RepoError::Seed)
    }

    /// Whether a seed attempt has completed successfully.
    pub fn is_seeded(&self) -> bool {
        self.seed_gate.is_done()
    }

    /// List races matching `filter`, ordered by `sort`.
    ///
    /// Unspecified sort values default to advertised start time ascending.
    /// Ties on start time are always broken by `id` ascending.
    pub async fn list(
        &self,
        filter: Option<&RaceFilter>,
        sort: SortSpec,
    ) -> Result<Vec<Race>, RepoError> {
        let sort = sort.with_defaults();
        let query = race_query::compose(&race_query::base_list_query(), filter, sort);

        tracing::debug!(
            sql = %query.sql,
            arg_count = query.args.len(),
            "Listing races"
        );

        match self.query_timeout {
            Some(limit) => tokio::time::timeout(limit, fetch_races(&self.pool, &query))
                .await
                .map_err(|_| RepoError::Timeout(limit))?,
            None => fetch_races(&self.pool, &query).await,
        }
    }
}

#[async_trait]
impl RaceSource for RaceRepo {
    async fn list(
        &self,
        filter: Option<&RaceFilter>,
        sort: SortSpec,
    ) -> Result<Vec<Race>, RepoError> {
        RaceRepo::list(self, filter, sort).await
    }
}

/// Execute `query` and map each row into a [`Race`].
///
/// The row stream holds a pooled connection; dropping it on any return path
/// hands the connection back.
async fn fetch_races(pool: &DbPool, query: &ComposedQuery) -> Result<Vec<Race>, RepoError> {
    let mut q = sqlx::query(&query.sql);
    for meeting_id in &query.args {
        q = q.bind(*meeting_id);
    }

    let mut rows = q.fetch(pool);
    let mut races = Vec::new();

    loop {
        let next = rows.try_next().await;
        let Some(row) = next.map_err(|e| stream_error(e, races.len()))? else {
            break;
        };
        races.push(Race::from_row(&row).map_err(RepoError::Scan)?);
    }

    Ok(races)
}

/// Tag a row stream failure by how far the stream got.
///
/// SQLite sorts the whole result before emitting the first row, so with an
/// ORDER BY a failing row surfaces here with `rows_read == 0` and counts as
/// a query failure. `Cursor` covers failures once rows are flowing, such as
/// a connection dropped mid-stream.
fn stream_error(err: sqlx::Error, rows_read: usize) -> RepoError {
    if rows_read == 0 {
        RepoError::Query(err)
    } else {
        RepoError::Cursor(err)
    }
}
