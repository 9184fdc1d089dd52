//! History endpoints.
//!
//! GET /history - full record list, file order.
//! DELETE /history - wholesale reset.
//! GET /stats - record count, mood frequency, streak.

use axum::extract::State;
use axum::Json;
use serde_json::json;

use daylift_core::coach::HistorySummary;
use daylift_types::record::MotivationRecord;

use crate::http::error::ApiError;
use crate::http::extractors::auth::Authenticated;
use crate::state::AppState;

/// GET /history - Every recorded interaction.
pub async fn get_history(
    State(state): State<AppState>,
    _auth: Authenticated,
) -> Result<Json<Vec<MotivationRecord>>, ApiError> {
    let records = state.coach.history().await?;
    Ok(Json(records))
}

/// DELETE /history - Wipe the entire history.
pub async fn reset_history(
    State(state): State<AppState>,
    _auth: Authenticated,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.coach.reset().await?;
    Ok(Json(json!({ "status": "reset" })))
}

/// GET /stats - Aggregate view over the history.
pub async fn get_stats(
    State(state): State<AppState>,
    _auth: Authenticated,
) -> Result<Json<HistorySummary>, ApiError> {
    let summary = state.coach.summary().await?;
    Ok(Json(summary))
}
