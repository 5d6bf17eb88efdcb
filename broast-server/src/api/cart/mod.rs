//! Cart API 模块

mod handler;

pub use handler::CartView;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/sessions/{id}/cart", cart_routes())
}

fn cart_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get_cart).delete(handler::clear))
        .route(
            "/items/{item_id}",
            post(handler::add_item).delete(handler::remove_item),
        )
}
