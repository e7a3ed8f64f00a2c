use std::sync::Arc;
use std::time::Duration;

/// Failure of a repository operation, tagged with the phase that failed.
///
/// Callers can tell infrastructure trouble (`Query`, `Cursor`, `Timeout`)
/// apart from a malformed result (`Scan`).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// The store rejected or failed to run the composed statement.
    #[error("query races: {0}")]
    Query(#[source] sqlx::Error),

    /// A row did not decode into a race.
    #[error("scan races: {0}")]
    Scan(#[source] sqlx::Error),

    /// The row stream failed after rows had already been delivered.
    #[error("read race rows: {0}")]
    Cursor(#[source] sqlx::Error),

    /// The query deadline elapsed before the listing completed.
    #[error("query races: timed out after {0:?}")]
    Timeout(Duration),

    /// The bootstrap seed write failed. Shared by every caller that waited
    /// on the same seeding attempt.
    #[error("seed races: {0}")]
    Seed(#[source] Arc<sqlx::Error>),
}

impl RepoError {
    /// Short name of the failing phase, used in logs.
    pub fn phase(&self) -> &'static str {
        match self {
            RepoError::Query(_) => "query",
            RepoError::Scan(_) => "scan",
            RepoError::Cursor(_) => "cursor",
            RepoError::Timeout(_) => "timeout",
            RepoError::Seed(_) => "seed",
        }
    }
}
