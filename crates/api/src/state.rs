use std::sync::Arc;

use racing_db::repositories::RaceRepo;

use crate::config::ServerConfig;
use crate::service::RacingService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: racing_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Race repository, also used for the startup seed.
    pub races: Arc<RaceRepo>,
    /// Racing service handling list requests.
    pub racing: RacingService,
}

impl AppState {
    /// Wire the repository and service around `pool`.
    pub fn new(pool: racing_db::DbPool, config: ServerConfig) -> Self {
        let mut repo = RaceRepo::new(pool.clone()).with_seed_count(config.seed_race_count);
        if let Some(limit) = config.query_timeout() {
            repo = repo.with_query_timeout(limit);
        }
        let races = Arc::new(repo);
        let racing = RacingService::new(races.clone());

        Self {
            pool,
            config: Arc::new(config),
            races,
            racing,
        }
    }
}
