//! Session API Handlers
//!
//! Sessions are anonymous and in-memory: creating one hands back an id the
//! client carries through cart and checkout calls; deleting one discards
//! all of its state.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct SessionCreated {
    pub session_id: String,
}

/// POST /api/sessions - 创建新会话
pub async fn create(State(state): State<ServerState>) -> Json<SessionCreated> {
    let session_id = state.sessions.create();
    Json(SessionCreated { session_id })
}

/// DELETE /api/sessions/:id - 丢弃会话及其全部状态
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if !state.sessions.remove(&id) {
        return Err(AppError::not_found(format!("Session {}", id)));
    }
    tracing::debug!(session_id = %id, "Session discarded");
    Ok(Json(true))
}
