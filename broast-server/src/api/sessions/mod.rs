//! Session API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/sessions", post(handler::create))
        .route("/api/sessions/{id}", delete(handler::remove))
}
