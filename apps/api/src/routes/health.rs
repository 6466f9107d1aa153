use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
pub async fn home_handler() -> &'static str {
    "CareerLens AI Backend is running!"
}

/// GET /debug
pub async fn debug_handler() -> &'static str {
    "DEBUG OK - Chatbot version running"
}

/// GET /health
/// Returns a simple status object with service version and model name.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "careerlens-api",
        "model": state.config.gemini_model,
    }))
}
