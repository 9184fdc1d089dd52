//! Token validation endpoint.
//!
//! POST /validate
//!
//! Static compare of the presented token against the configured service
//! token. The `{phone}` success payload is a fixed demo value carried over
//! from the tool manifest contract.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::http::error::ApiError;
use crate::http::extractors::auth::token_matches;
use crate::state::AppState;

/// Request body for the validate endpoint.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub token: String,
}

/// POST /validate - Check a token against the configured service token.
pub async fn validate(
    State(state): State<AppState>,
    Json(body): Json<ValidateRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Some(ref expected) = state.config.token else {
        return Err(ApiError::Forbidden("no service token configured".to_string()));
    };

    if token_matches(expected, &body.token) {
        Ok(Json(json!({ "phone": "+1234567890" })))
    } else {
        Err(ApiError::Forbidden("Invalid token.".to_string()))
    }
}
