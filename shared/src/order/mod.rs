//! Order types
//!
//! Types describing an order as it moves through checkout:
//! - Line items: cart entries joined against the catalog
//! - Location result: the locked delivery point with its resolved fee
//! - Summary: the immutable order assembled at submission time

pub mod summary;
pub mod types;

// Re-exports
pub use summary::{OrderLineItem, OrderSummary};
pub use types::{LocationResult, PaymentMethod};
