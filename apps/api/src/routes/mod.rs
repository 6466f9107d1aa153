pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::counsel::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home_handler))
        .route("/debug", get(health::debug_handler))
        .route("/health", get(health::health_handler))
        // Counselling API
        .route("/chat", post(handlers::handle_chat))
        .route("/analyze", post(handlers::handle_analyze))
        .with_state(state)
}
