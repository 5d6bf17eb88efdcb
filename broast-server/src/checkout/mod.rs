//! Checkout flow
//!
//! Session-owned cart + three-step wizard. See [`session`] for the state
//! object and [`wizard`] for the step machine and its rejections.

pub mod session;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use session::{CheckoutSession, DEFAULT_DELIVERY_FEE, DEFAULT_MAP_CENTER, SessionManager};
pub use wizard::{CheckoutError, CheckoutStep};
