//! Axum route handlers for the counselling API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::counsel::pipeline::{run_analysis, run_chat, AnalysisResult, ChatReply};
use crate::errors::AppError;
use crate::models::conversation::ConversationMessage;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub age: i64,
    pub messages: Vec<ConversationMessage>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub age: i64,
    pub answers: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /chat
///
/// Classifies the user and asks the model for one follow-up question.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(request) = payload?;

    let reply = run_chat(state.llm.as_ref(), request.age, &request.messages).await;
    info!(
        "Chat reply generated: category={}, messages={}",
        reply.category.label(),
        request.messages.len()
    );

    Ok(Json(reply))
}

/// POST /analyze
///
/// Personality → career recommendation, plus skill gap and courses for college users.
/// Upstream model failures still return 200 with marker text in the affected fields.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(request) = payload?;

    let result = run_analysis(
        state.llm.as_ref(),
        request.age,
        &request.answers,
        &request.skills,
    )
    .await;
    info!(
        "Analysis complete: category={}, degraded={}",
        result.category.label(),
        result.is_degraded()
    );

    Ok(Json(result))
}
