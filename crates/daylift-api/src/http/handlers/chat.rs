//! Raw chat passthrough endpoint.
//!
//! POST /chat
//!
//! Forwards a conversation verbatim to the provider and returns its reply
//! text. Nothing is recorded in history.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use daylift_types::llm::Message;

use crate::http::error::ApiError;
use crate::http::extractors::auth::Authenticated;
use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

/// Response body for the chat endpoint.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /chat - Forward a conversation to the provider.
pub async fn chat(
    State(state): State<AppState>,
    _auth: Authenticated,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if body.messages.is_empty() {
        return Err(ApiError::Validation("messages must not be empty".to_string()));
    }

    let response = state.coach.chat(body.messages).await?;
    Ok(Json(ChatResponse { response }))
}
