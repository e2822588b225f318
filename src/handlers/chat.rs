use std::sync::Arc;

use axum::extract::State;
use axum::response::Redirect;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::services::conversation::ReplyStatus;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
    pub status: ReplyStatus,
}

// POST /chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let session_id = body.session_id.as_deref().filter(|id| !id.is_empty());
    let reply = state.engine.handle_message(session_id, &body.message).await;

    Json(ChatResponse {
        response: reply.text,
        session_id: reply.session_id,
        status: reply.status,
    })
}

// GET /
pub async fn index() -> Redirect {
    Redirect::temporary("/static/index.html")
}
