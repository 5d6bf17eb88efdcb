//! Payment proof upload API 模块

mod handler;

pub use handler::UploadResponse;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/upload/", post(handler::upload))
        .route("/api/proof/{filename}", get(handler::serve))
}
