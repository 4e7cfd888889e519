//! Assistant API Handlers
//!
//! Both endpoints are pass-through calls: one upstream failure aborts the
//! action with a user-visible message and leaves directory and gate state
//! untouched.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefingResponse {
    pub summary: String,
    pub audio_base64: String,
    pub mime_type: String,
}

fn require_text(payload: &AssistantRequest) -> AppResult<&str> {
    let text = payload.text.trim();
    if text.is_empty() {
        return Err(AppError::required_field("text"));
    }
    Ok(text)
}

/// Summarize pasted presentation text
pub async fn summary(
    State(state): State<AppState>,
    Json(payload): Json<AssistantRequest>,
) -> AppResult<Json<SummaryResponse>> {
    let text = require_text(&payload)?;
    let summary = state.assistant.summarize(text).await?;
    Ok(Json(SummaryResponse { summary }))
}

/// Summarize, then synthesize speech from the summary. If summarization
/// fails, no speech request is issued.
pub async fn briefing(
    State(state): State<AppState>,
    Json(payload): Json<AssistantRequest>,
) -> AppResult<Json<BriefingResponse>> {
    let text = require_text(&payload)?;
    let briefing = state.assistant.briefing(text).await?;
    Ok(Json(BriefingResponse {
        summary: briefing.summary,
        audio_base64: briefing.audio.audio_base64,
        mime_type: briefing.audio.mime_type,
    }))
}
