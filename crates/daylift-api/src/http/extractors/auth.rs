//! Service token authentication extractor.
//!
//! Extracts the token from:
//! - `Authorization: Bearer <token>` header
//! - `X-API-Key: <token>` header
//!
//! The presented token is compared against the configured service token via
//! SHA-256 digests. When no token is configured the API is open -- the
//! local-demo default.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sha2::{Digest, Sha256};

use crate::http::error::ApiError;
use crate::state::AppState;

/// Authenticated request marker. Extracting this validates the token.
pub struct Authenticated;

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(ref expected) = state.config.token else {
            // No token configured: open API.
            return Ok(Authenticated);
        };

        let presented = extract_token(parts)?;
        if token_matches(expected, &presented) {
            Ok(Authenticated)
        } else {
            Err(ApiError::Unauthorized(
                "Invalid service token. Provide a valid token via 'Authorization: Bearer <token>' or 'X-API-Key: <token>' header.".to_string(),
            ))
        }
    }
}

/// Extract the token from request headers.
fn extract_token(parts: &Parts) -> Result<String, ApiError> {
    // Try Authorization: Bearer <token>
    if let Some(auth) = parts.headers.get("authorization") {
        let auth_str = auth.to_str().map_err(|_| {
            ApiError::Unauthorized("Invalid Authorization header encoding".to_string())
        })?;
        if let Some(token) = auth_str.strip_prefix("Bearer ") {
            return Ok(token.trim().to_string());
        }
    }

    // Try X-API-Key header
    if let Some(key) = parts.headers.get("x-api-key") {
        let key_str = key.to_str().map_err(|_| {
            ApiError::Unauthorized("Invalid X-API-Key header encoding".to_string())
        })?;
        return Ok(key_str.trim().to_string());
    }

    Err(ApiError::Unauthorized(
        "Missing service token. Provide via 'Authorization: Bearer <token>' or 'X-API-Key: <token>' header.".to_string(),
    ))
}

/// Compare two tokens via SHA-256 digests rather than the raw strings.
pub fn token_matches(expected: &str, presented: &str) -> bool {
    Sha256::digest(expected.as_bytes()) == Sha256::digest(presented.as_bytes())
}
