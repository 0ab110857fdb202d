// src/assistant/handlers.rs

use axum::{extract::Extension, response::Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::assistant::models::*;
use crate::common::{ApiError, AppState};
use crate::services::ai::TextPurpose;

/// POST /api/assistant/chat - Career assistant chat turn
pub async fn chat(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if body.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message is required".to_string()));
    }

    let state = state_lock.read().await.clone();

    let reply = state
        .ai_service
        .generate_text(TextPurpose::ChatAssistant, &body.message)
        .await?;

    info!(
        message_len = body.message.len(),
        reply_len = reply.len(),
        "Assistant chat turn completed"
    );

    Ok(Json(ChatResponse { reply }))
}

/// POST /api/assistant/resume/enhance - Enhance a resume
///
/// Sequential workflow: analyze the resume for improvement points, then
/// rewrite it applying them. No retry; a transport failure surfaces as a
/// generic error on either step.
pub async fn enhance_resume(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(body): Json<EnhanceResumeRequest>,
) -> Result<Json<EnhanceResumeResponse>, ApiError> {
    if body.resume_text.trim().is_empty() {
        return Err(ApiError::BadRequest("Resume text is required".to_string()));
    }

    let state = state_lock.read().await.clone();

    let improvements = state.ai_service.analyze_resume(&body.resume_text).await?;
    let enhanced_resume = state
        .ai_service
        .enhance_resume(&body.resume_text, &improvements)
        .await?;

    info!(
        resume_len = body.resume_text.len(),
        improvement_count = improvements.len(),
        "Resume enhancement completed"
    );

    Ok(Json(EnhanceResumeResponse {
        enhanced_resume,
        improvements,
    }))
}
