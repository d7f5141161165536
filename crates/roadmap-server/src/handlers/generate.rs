use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::prompt::build_roadmap_messages;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    pub topic: String,
    #[serde(default)]
    pub current_knowledge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapResponse {
    pub roadmap: String,
}

/// Upper bound on the request body; larger bodies get an `{error}` reply.
pub const MAX_REQUEST_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Body is taken raw so malformed JSON or an unreadable payload becomes an
/// `{error}` reply rather than one of actix's plain-text 4xx responses.
pub async fn handler(
    state: web::Data<AppState>,
    body: std::result::Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse> {
    let request_id = Uuid::new_v4();

    let body = body.map_err(|e| {
        log::warn!("[{}] Failed to read request body: {}", request_id, e);
        AppError::InvalidRequest(e.to_string())
    })?;

    let request: RoadmapRequest = serde_json::from_slice(&body).map_err(|e| {
        log::warn!("[{}] Rejecting malformed request body: {}", request_id, e);
        AppError::from(e)
    })?;

    if request.topic.trim().is_empty() {
        log::warn!("[{}] Rejecting request with empty topic", request_id);
        return Err(AppError::InvalidRequest("topic is required".to_string()));
    }

    log::info!("[{}] Generating roadmap for: {}", request_id, request.topic);

    let llm = state.provider().map_err(|e| {
        log::error!("[{}] {}", request_id, e);
        e
    })?;

    let messages = build_roadmap_messages(&request.topic, request.current_knowledge.as_deref());

    let roadmap = llm.chat_completion(&messages).await.map_err(|e| {
        log::error!("[{}] Error generating roadmap: {}", request_id, e);
        AppError::from(e)
    })?;

    log::info!("[{}] Roadmap generated successfully", request_id);

    Ok(HttpResponse::Ok().json(RoadmapResponse { roadmap }))
}
