//! Axum router configuration with middleware.
//!
//! Middleware: CORS (allow-any, matching the original deployment), tracing.
//! Generating and history routes go through the token extractor; `/health`,
//! `/manifest`, and `/validate` are open.

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Advice generation
        .route("/advice", post(handlers::advice::generate_advice))
        .route("/lifecoach", post(handlers::advice::generate_advice))
        // Raw chat passthrough
        .route("/chat", post(handlers::chat::chat))
        // Token validation
        .route("/validate", post(handlers::validate::validate))
        // History
        .route("/history", get(handlers::history::get_history))
        .route("/history", delete(handlers::history::reset_history))
        .route("/stats", get(handlers::history::get_stats))
        // Discovery
        .route("/manifest", get(manifest))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint (no auth required).
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /manifest - Static tool manifest describing the service.
async fn manifest() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "server_name": "daylift",
        "description": "Daylift: quick insight, challenge, affirmation.",
        "tools": [
            {
                "id": "validate",
                "name": "validate",
                "description": "Validate a token and return the owner's phone number.",
                "inputs": {
                    "type": "object",
                    "properties": {
                        "token": { "type": "string" }
                    }
                },
                "outputs": {
                    "type": "object",
                    "properties": {
                        "phone": { "type": "string" }
                    }
                }
            },
            {
                "id": "advice",
                "name": "advice",
                "description": "Generate life-coaching advice",
                "inputs": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "mood": { "type": "string" },
                        "topic": { "type": "string" },
                        "mode": { "type": "string" },
                        "tone": { "type": "string" },
                        "length": { "type": "string" }
                    }
                },
                "outputs": {
                    "type": "object",
                    "properties": {
                        "insight": { "type": "string" },
                        "micro_challenge": { "type": "string" },
                        "affirmation": { "type": "string" }
                    }
                }
            }
        ]
    }))
}
