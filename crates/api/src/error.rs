use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use racing_core::error::CoreError;
use racing_db::RepoError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`RepoError`] for store
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `racing_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A repository failure, tagged with its phase.
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Repo(err) => classify_repo_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a repository error into an HTTP status, error code, and message.
///
/// - `Timeout` maps to 504.
/// - Everything else maps to 500 with a sanitized message; the phase and the
///   underlying error go to the log.
fn classify_repo_error(err: &RepoError) -> (StatusCode, &'static str, String) {
    match err {
        RepoError::Timeout(limit) => {
            tracing::warn!(?limit, "Race listing timed out");
            (
                StatusCode::GATEWAY_TIMEOUT,
                "QUERY_TIMEOUT",
                "The race query timed out".to_string(),
            )
        }
        other => {
            tracing::error!(phase = other.phase(), error = %other, "Repository error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let response = AppError::from(CoreError::Validation("bad".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn timeout_maps_to_504() {
        let response =
            AppError::from(RepoError::Timeout(Duration::from_secs(1))).into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn query_failure_maps_to_500() {
        let response =
            AppError::from(RepoError::Query(sqlx::Error::PoolClosed)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
