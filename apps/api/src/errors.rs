use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Upstream model failures never reach this type: they travel as
/// `ModelText::Failed` inside an otherwise successful response.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request body could not be read into the expected shape.
    #[error("{0}")]
    Request(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Request(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every failure is a 500 with a flat `{ "error": message }` body.
        let message = match self {
            AppError::Request(msg) => {
                tracing::warn!("Rejected request: {msg}");
                msg
            }
        };

        let body = Json(json!({ "error": message }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
