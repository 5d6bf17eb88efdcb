//! Checkout API Handlers
//!
//! The wizard itself lives on the session; handlers validate payload shape,
//! bridge the async resolver boundary, and translate checkout rejections
//! into API errors. A rejection never advances the step.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use shared::models::CustomerDetails;
use shared::order::{LocationResult, OrderSummary, PaymentMethod};
use shared::types::LatLng;
use validator::Validate;

use crate::audit_log;
use crate::checkout::{CheckoutSession, CheckoutStep};
use crate::core::ServerState;
use crate::orders::composer;
use crate::utils::{AppError, AppResult};

/// Wizard state as the client renders it
#[derive(Debug, Serialize)]
pub struct CheckoutView {
    pub step: CheckoutStep,
    pub details: Option<CustomerDetails>,
    pub payment_method: PaymentMethod,
    pub special_instructions: Option<String>,
    pub position: LatLng,
    pub locked: bool,
    pub location: Option<LocationResult>,
    pub payment_proof: Option<String>,
}

impl CheckoutView {
    fn derive(session: &CheckoutSession) -> Self {
        Self {
            step: session.step,
            details: session.details.clone(),
            payment_method: session.payment_method,
            special_instructions: session.special_instructions.clone(),
            position: session.position,
            locked: session.locked,
            location: session.location.clone(),
            payment_proof: session.payment_proof.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct DetailsPayload {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProofPayload {
    /// Reference returned by the upload endpoint
    #[validate(length(min = 1, message = "proof reference is required"))]
    pub proof_url: String,
}

#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub step: CheckoutStep,
}

#[derive(Debug, Serialize)]
pub struct PlaceOrderResponse {
    pub order: OrderSummary,
    /// The formatted order message, as embedded in the deep-link
    pub message: String,
    /// Messaging deep-link for the client to open
    pub whatsapp_link: String,
}

fn session_not_found(id: &str) -> AppError {
    AppError::not_found(format!("Session {}", id))
}

/// GET /api/sessions/:id/checkout - 获取向导状态
pub async fn get_checkout(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CheckoutView>> {
    let view = state
        .sessions
        .read(&id, CheckoutView::derive)
        .ok_or_else(|| session_not_found(&id))?;
    Ok(Json(view))
}

/// POST /api/sessions/:id/checkout/details - Details → Location
pub async fn submit_details(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DetailsPayload>,
) -> AppResult<Json<CheckoutView>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let details = CustomerDetails {
        name: payload.name,
        phone: payload.phone,
        address: payload.address,
        city: payload.city,
        pincode: payload.pincode,
    };

    let view = state
        .sessions
        .update(&id, |session| {
            session.submit_details(details, payload.payment_method, payload.special_instructions)?;
            Ok::<_, AppError>(CheckoutView::derive(session))
        })
        .ok_or_else(|| session_not_found(&id))??;
    Ok(Json(view))
}

/// POST /api/sessions/:id/checkout/position - 移动配送点 (锁定前)
pub async fn set_position(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(position): Json<LatLng>,
) -> AppResult<Json<CheckoutView>> {
    let view = state
        .sessions
        .update(&id, |session| {
            session.set_position(position)?;
            Ok::<_, AppError>(CheckoutView::derive(session))
        })
        .ok_or_else(|| session_not_found(&id))??;
    Ok(Json(view))
}

/// POST /api/sessions/:id/checkout/lock - 锁定配送点
pub async fn lock_position(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CheckoutView>> {
    let view = state
        .sessions
        .update(&id, |session| {
            session.lock_position();
            CheckoutView::derive(session)
        })
        .ok_or_else(|| session_not_found(&id))?;
    Ok(Json(view))
}

/// POST /api/sessions/:id/checkout/unlock - 解锁配送点
pub async fn unlock_position(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CheckoutView>> {
    let view = state
        .sessions
        .update(&id, |session| {
            session.unlock_position();
            CheckoutView::derive(session)
        })
        .ok_or_else(|| session_not_found(&id))?;
    Ok(Json(view))
}

/// POST /api/sessions/:id/checkout/location - 解析距离并进入 Payment
///
/// 解析失败 (路线服务错误) 时向导停留在 Location，由用户手动重试。
pub async fn submit_location(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<LocationResult>> {
    // Validate the gate before spending a routing call
    let destination = state
        .sessions
        .read(&id, |session| session.prepare_resolve())
        .ok_or_else(|| session_not_found(&id))??;

    let result = state.delivery.resolve(destination).await?;

    state
        .sessions
        .update(&id, |session| session.confirm_location(result.clone()))
        .ok_or_else(|| session_not_found(&id))??;

    Ok(Json(result))
}

/// POST /api/sessions/:id/checkout/back - 返回上一步
pub async fn back(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<StepResponse>> {
    let step = state
        .sessions
        .update(&id, |session| session.back())
        .ok_or_else(|| session_not_found(&id))?;
    Ok(Json(StepResponse { step }))
}

/// POST /api/sessions/:id/checkout/proof - 记录支付凭证引用
pub async fn attach_proof(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProofPayload>,
) -> AppResult<Json<CheckoutView>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let view = state
        .sessions
        .update(&id, |session| {
            session.attach_proof(payload.proof_url)?;
            Ok::<_, AppError>(CheckoutView::derive(session))
        })
        .ok_or_else(|| session_not_found(&id))??;
    Ok(Json(view))
}

/// POST /api/sessions/:id/checkout/place - 下单
///
/// 组装订单摘要，生成消息深链。无支付凭证时返回 Payment Required，
/// 不生成深链。
pub async fn place_order(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<PlaceOrderResponse>> {
    let order = state
        .sessions
        .update(&id, |session| session.place(&state.catalog))
        .ok_or_else(|| session_not_found(&id))??;

    let message = composer::format_message(&order);
    let whatsapp_link = composer::deep_link(&state.config.whatsapp_number, &message)
        .ok_or_else(|| AppError::internal("Messaging recipient is misconfigured"))?;

    audit_log!(
        id.as_str(),
        "place_order",
        "order",
        format!(
            "{} items, total {} via {}",
            order.items.len(),
            order.total,
            order.payment_method.label()
        )
    );

    tracing::info!(
        session_id = %id,
        items = order.items.len(),
        total = order.total,
        "Order placed"
    );

    Ok(Json(PlaceOrderResponse {
        order,
        message,
        whatsapp_link,
    }))
}
