//! Advice generation endpoint.
//!
//! POST /advice (alias POST /lifecoach)
//!
//! Takes the user's form fields, runs one coaching interaction, records it,
//! and returns the flat advice triple. Any field may come back empty when
//! the provider's reply did not yield that section.

use axum::extract::State;
use axum::Json;

use daylift_types::advice::{Advice, AdviceRequest};

use crate::http::error::ApiError;
use crate::http::extractors::auth::Authenticated;
use crate::state::AppState;

/// POST /advice - Run one coaching interaction.
///
/// Body: `{name, mood?, topic?, mode?, tone?, length?}`.
/// Response: `{insight, micro_challenge, affirmation}`.
pub async fn generate_advice(
    State(state): State<AppState>,
    _auth: Authenticated,
    Json(body): Json<AdviceRequest>,
) -> Result<Json<Advice>, ApiError> {
    let advice = state.coach.advise(&body).await?;
    Ok(Json(advice))
}
