//! Shared types for the Broast storefront
//!
//! Common types used across the workspace: catalog models, customer
//! details, checkout/order types, and geographic primitives.

pub mod models;
pub mod order;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Category, CustomerDetails, MenuItem};
pub use order::{OrderLineItem, OrderSummary, PaymentMethod};
pub use types::LatLng;
