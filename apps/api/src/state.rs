use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ModelGateway;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-user data; every request is self-contained.
#[derive(Clone)]
pub struct AppState {
    /// Model gateway. Default: `GeminiClient`. Tests swap in a scripted one.
    pub llm: Arc<dyn ModelGateway>,
    pub config: Config,
}
