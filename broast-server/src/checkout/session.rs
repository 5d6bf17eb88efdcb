//! Checkout sessions
//!
//! A [`CheckoutSession`] owns everything one visitor accumulates: cart
//! quantities, wizard step, contact details, the delivery point, and the
//! payment-proof reference. Sessions live purely in memory and are
//! discarded wholesale; there is no persistence to clean up.
//!
//! All state transitions are synchronous methods returning explicit
//! results; the async boundary (routing service, uploads) stays in the
//! handlers.

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use rust_decimal::Decimal;
use shared::models::CustomerDetails;
use shared::order::{LocationResult, OrderSummary, PaymentMethod};
use shared::types::LatLng;
use uuid::Uuid;

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::checkout::{CheckoutError, CheckoutStep};
use crate::utils::money;

/// Fallback map center when device geolocation is unavailable
pub const DEFAULT_MAP_CENTER: LatLng = LatLng {
    lat: 17.335109,
    lng: 78.0,
};

/// Flat fee shown in totals until a location has been resolved
pub const DEFAULT_DELIVERY_FEE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// One visitor's ordering state
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    pub id: String,
    pub cart: CartStore,
    pub step: CheckoutStep,
    pub details: Option<CustomerDetails>,
    pub payment_method: PaymentMethod,
    pub special_instructions: Option<String>,
    /// Current marker position; starts at the fallback center
    pub position: LatLng,
    /// Whether the marker is frozen pending distance resolution
    pub locked: bool,
    /// Resolved distance/fee, present once the routing service succeeded
    pub location: Option<LocationResult>,
    /// Proof reference returned by the upload endpoint
    pub payment_proof: Option<String>,
    pub created_at: chrono::DateTime<Utc>,
}

impl CheckoutSession {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cart: CartStore::new(),
            step: CheckoutStep::Details,
            details: None,
            payment_method: PaymentMethod::default(),
            special_instructions: None,
            position: DEFAULT_MAP_CENTER,
            locked: false,
            location: None,
            payment_proof: None,
            created_at: Utc::now(),
        }
    }

    fn require_step(&self, expected: CheckoutStep) -> Result<(), CheckoutError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(CheckoutError::StepMismatch {
                expected,
                actual: self.step,
            })
        }
    }

    /// Details → Location
    ///
    /// Guarded by a non-empty cart and complete contact details. On
    /// failure the session stays at Details with nothing recorded.
    pub fn submit_details(
        &mut self,
        details: CustomerDetails,
        payment_method: PaymentMethod,
        special_instructions: Option<String>,
    ) -> Result<(), CheckoutError> {
        self.require_step(CheckoutStep::Details)?;
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if !details.is_complete() {
            return Err(CheckoutError::MissingContact);
        }

        self.details = Some(details);
        self.payment_method = payment_method;
        self.special_instructions =
            special_instructions.filter(|text| !text.trim().is_empty());
        self.step = CheckoutStep::Location;
        Ok(())
    }

    /// Move the marker, pre-lock only
    ///
    /// Repositioning discards any previously resolved distance: the fee is
    /// tied to the point it was computed for.
    pub fn set_position(&mut self, position: LatLng) -> Result<(), CheckoutError> {
        if self.locked {
            return Err(CheckoutError::PositionLocked);
        }
        self.position = position;
        self.location = None;
        Ok(())
    }

    /// Freeze the marker at its current position
    pub fn lock_position(&mut self) {
        self.locked = true;
    }

    /// Release the marker for repositioning, discarding any resolution
    pub fn unlock_position(&mut self) {
        self.locked = false;
        self.location = None;
    }

    /// Validate the Location-submit preconditions and hand out the point
    /// the resolver should route to
    pub fn prepare_resolve(&self) -> Result<LatLng, CheckoutError> {
        self.require_step(CheckoutStep::Location)?;
        if !self.locked {
            return Err(CheckoutError::PositionNotLocked);
        }
        Ok(self.position)
    }

    /// Location → Payment, with a successful resolution in hand
    pub fn confirm_location(&mut self, result: LocationResult) -> Result<(), CheckoutError> {
        self.require_step(CheckoutStep::Location)?;
        if !self.locked {
            return Err(CheckoutError::PositionNotLocked);
        }
        self.location = Some(result);
        self.step = CheckoutStep::Payment;
        Ok(())
    }

    /// Explicit "Back": one step down, never below Details
    pub fn back(&mut self) -> CheckoutStep {
        self.step = self.step.back();
        self.step
    }

    /// Attach the proof reference returned by the upload endpoint
    pub fn attach_proof(&mut self, reference: impl Into<String>) -> Result<(), CheckoutError> {
        self.require_step(CheckoutStep::Payment)?;
        self.payment_proof = Some(reference.into());
        Ok(())
    }

    /// Delivery fee for totals: the resolved fee once present, the default
    /// flat value until then
    pub fn delivery_fee(&self) -> Decimal {
        self.location
            .as_ref()
            .map(|loc| money::round_money(money::dec(loc.delivery_fee)))
            .unwrap_or(DEFAULT_DELIVERY_FEE)
    }

    /// Assemble the immutable order and empty the cart
    ///
    /// Rejected without a proof reference ("Payment Required"), with an
    /// empty cart, or before the Payment step. Line items, totals, and fee
    /// are copied out so later catalog changes cannot alter the order.
    pub fn place(&mut self, catalog: &Catalog) -> Result<OrderSummary, CheckoutError> {
        self.require_step(CheckoutStep::Payment)?;
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let location = self
            .location
            .clone()
            .ok_or(CheckoutError::LocationNotResolved)?;
        let payment_proof = self
            .payment_proof
            .clone()
            .ok_or(CheckoutError::PaymentRequired)?;
        let customer = self
            .details
            .clone()
            .ok_or(CheckoutError::MissingContact)?;

        let subtotal = self.cart.subtotal(catalog);
        let fee = money::round_money(money::dec(location.delivery_fee));
        let total = money::round_money(subtotal + fee);

        let summary = OrderSummary {
            customer,
            items: self.cart.line_items(catalog).collect(),
            subtotal: money::to_f64(subtotal),
            delivery_fee: money::to_f64(fee),
            total: money::to_f64(total),
            payment_method: self.payment_method,
            location,
            payment_proof,
            special_instructions: self.special_instructions.clone(),
            placed_at: Utc::now(),
        };

        self.cart.clear();
        Ok(summary)
    }
}

/// 会话管理器
///
/// 使用 DashMap 实现无锁并发的会话存储。每个会话由单个访客独占，
/// 遵循单写者模型；跨会话没有共享可变状态。
#[derive(Clone, Default)]
pub struct SessionManager {
    sessions: Arc<DashMap<String, CheckoutSession>>,
}

impl SessionManager {
    /// 创建空的会话管理器
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// 创建新会话并返回其 ID
    pub fn create(&self) -> String {
        let id = Uuid::new_v4().to_string();
        self.sessions
            .insert(id.clone(), CheckoutSession::new(id.clone()));
        tracing::debug!(session_id = %id, "Session created");
        id
    }

    /// 读取会话状态
    ///
    /// 会话不存在时返回 None
    pub fn read<T>(&self, id: &str, f: impl FnOnce(&CheckoutSession) -> T) -> Option<T> {
        self.sessions.get(id).map(|session| f(&session))
    }

    /// 更新会话状态
    ///
    /// 会话不存在时返回 None
    pub fn update<T>(&self, id: &str, f: impl FnOnce(&mut CheckoutSession) -> T) -> Option<T> {
        self.sessions.get_mut(id).map(|mut session| f(&mut session))
    }

    /// 删除会话
    pub fn remove(&self, id: &str) -> bool {
        self.sessions.remove(id).is_some()
    }

    /// 当前会话数量
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
