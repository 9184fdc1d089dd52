//! Application error type mapping to HTTP status codes.
//!
//! Responses use the flat `{"error": "..."}` shape on failure.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use daylift_types::error::CoachError;
use daylift_types::llm::LlmError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Authentication failure (missing/invalid service token).
    Unauthorized(String),
    /// Token explicitly rejected.
    Forbidden(String),
    /// Validation error in the request body.
    Validation(String),
    /// Upstream generative API failure.
    Upstream(String),
    /// Generic internal error.
    Internal(String),
}

impl From<CoachError> for ApiError {
    fn from(e: CoachError) -> Self {
        match e {
            CoachError::MissingName => ApiError::Validation(e.to_string()),
            CoachError::Llm(llm) => match llm {
                LlmError::AuthenticationFailed => {
                    ApiError::Upstream("upstream authentication failed".to_string())
                }
                other => ApiError::Upstream(other.to_string()),
            },
            CoachError::History(history) => ApiError::Internal(history.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daylift_types::error::HistoryError;

    #[test]
    fn missing_name_maps_to_validation() {
        let err: ApiError = CoachError::MissingName.into();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn llm_errors_map_to_upstream() {
        let err: ApiError = CoachError::Llm(LlmError::Timeout(15)).into();
        assert!(matches!(err, ApiError::Upstream(_)));
    }

    #[test]
    fn history_errors_map_to_internal() {
        let err: ApiError = CoachError::History(HistoryError::Io("disk".to_string())).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
