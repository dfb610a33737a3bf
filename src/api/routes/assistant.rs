//! Assistant Routes
//!
//! The "Ask M-Pulse AI" chat. The responder itself is instantaneous; the
//! configured thinking delay is applied here to simulate the model working,
//! which keeps latency a presentation concern.
//!
//! - POST /api/v1/assistant/message - Send a message, get the canned reply
//! - GET /api/v1/assistant/history - Full conversation
//! - POST /api/v1/assistant/clear - Reset to the greeting

use axum::{extract::State, Json};
use std::sync::Arc;
use std::time::Duration;

use crate::api::dto::{AssistantRequest, AssistantResponse, HistoryResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// POST /api/v1/assistant/message
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AssistantRequest>,
) -> ApiResult<Json<AssistantResponse>> {
    if req.message.trim().is_empty() {
        return Err(ApiError::Validation("message cannot be empty".to_string()));
    }

    let delay = state.config.assistant.thinking_delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    let reply = state.converse(&req.message).await;
    Ok(Json(AssistantResponse { reply }))
}

/// GET /api/v1/assistant/history
pub async fn get_history(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    let conversation = state.conversation().await;
    Json(HistoryResponse {
        turns: conversation.turns().to_vec(),
    })
}

/// POST /api/v1/assistant/clear
///
/// Resets the visible conversation to exactly the single greeting turn.
pub async fn clear_history(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    let conversation = state.clear_conversation().await;
    Json(HistoryResponse {
        turns: conversation.turns().to_vec(),
    })
}
