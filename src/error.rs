//! Application error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} query parameter is required")]
    MissingParameter(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body returned to callers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingParameter(_)
            | AppError::InvalidParameter(_)
            | AppError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            // Upstream detail is logged, not echoed to callers
            AppError::Upstream(detail) => {
                error!("Upstream failure: {}", detail);
                (StatusCode::BAD_GATEWAY, "upstream request failed".to_string())
            }
            AppError::Http(e) => {
                error!("Upstream transport error: {}", e);
                (StatusCode::BAD_GATEWAY, "upstream request failed".to_string())
            }
            AppError::Internal(detail) => {
                error!("Internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        let resp = AppError::MissingParameter("isAggregate".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AppError::InvalidParameter("limit must be positive".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_errors_map_to_502() {
        let resp = AppError::Upstream("status 404".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
