//! Menu API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/menu", menu_routes())
}

fn menu_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/categories", get(handler::categories))
        .route("/by-category/{category}", get(handler::list_by_category))
        .route("/{id}", get(handler::get_by_id))
}
