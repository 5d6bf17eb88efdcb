//! Cart API Handlers
//!
//! Every mutation responds with the freshly derived cart view; totals are
//! recomputed from current state on every read.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::order::OrderLineItem;

use crate::catalog::Catalog;
use crate::checkout::CheckoutSession;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, money};

/// Derived cart state: line items joined against the catalog plus totals
#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<OrderLineItem>,
    pub item_count: u32,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
}

impl CartView {
    pub fn derive(session: &CheckoutSession, catalog: &Catalog) -> Self {
        let subtotal = session.cart.subtotal(catalog);
        let fee = session.delivery_fee();
        Self {
            items: session.cart.line_items(catalog).collect(),
            item_count: session.cart.item_count(),
            subtotal: money::to_f64(subtotal),
            delivery_fee: money::to_f64(fee),
            total: money::to_f64(money::round_money(subtotal + fee)),
        }
    }
}

fn session_not_found(id: &str) -> AppError {
    AppError::not_found(format!("Session {}", id))
}

/// GET /api/sessions/:id/cart - 获取购物车视图
pub async fn get_cart(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CartView>> {
    let view = state
        .sessions
        .read(&id, |session| CartView::derive(session, &state.catalog))
        .ok_or_else(|| session_not_found(&id))?;
    Ok(Json(view))
}

/// POST /api/sessions/:id/cart/items/:item_id - 数量 +1
pub async fn add_item(
    State(state): State<ServerState>,
    Path((id, item_id)): Path<(String, String)>,
) -> AppResult<Json<CartView>> {
    if state.catalog.get(&item_id).is_none() {
        // Unknown ids are tracked anyway; the join degrades them to a
        // zero-price placeholder line
        tracing::debug!(item_id = %item_id, "Cart add for id not in catalog");
    }

    let view = state
        .sessions
        .update(&id, |session| {
            let quantity = session.cart.add(&item_id);
            tracing::debug!(session_id = %id, item_id = %item_id, quantity, "Cart item added");
            CartView::derive(session, &state.catalog)
        })
        .ok_or_else(|| session_not_found(&id))?;
    Ok(Json(view))
}

/// DELETE /api/sessions/:id/cart/items/:item_id - 数量 -1 (归零即删除)
pub async fn remove_item(
    State(state): State<ServerState>,
    Path((id, item_id)): Path<(String, String)>,
) -> AppResult<Json<CartView>> {
    let view = state
        .sessions
        .update(&id, |session| {
            session.cart.remove(&item_id);
            CartView::derive(session, &state.catalog)
        })
        .ok_or_else(|| session_not_found(&id))?;
    Ok(Json(view))
}

/// DELETE /api/sessions/:id/cart - 清空购物车
pub async fn clear(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CartView>> {
    let view = state
        .sessions
        .update(&id, |session| {
            session.cart.clear();
            CartView::derive(session, &state.catalog)
        })
        .ok_or_else(|| session_not_found(&id))?;
    Ok(Json(view))
}
