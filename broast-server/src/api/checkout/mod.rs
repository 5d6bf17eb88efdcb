//! Checkout API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/sessions/{id}/checkout", checkout_routes())
}

fn checkout_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get_checkout))
        .route("/details", post(handler::submit_details))
        .route("/position", post(handler::set_position))
        .route("/lock", post(handler::lock_position))
        .route("/unlock", post(handler::unlock_position))
        .route("/location", post(handler::submit_location))
        .route("/back", post(handler::back))
        .route("/proof", post(handler::attach_proof))
        .route("/place", post(handler::place_order))
}
