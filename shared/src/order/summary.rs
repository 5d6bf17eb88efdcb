//! Order summary snapshot

use crate::models::CustomerDetails;
use crate::order::types::{LocationResult, PaymentMethod};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cart entry joined against the catalog
///
/// Derived at read time, never stored independently. Name and price
/// reflect the current catalog until the summary snapshot copies them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl OrderLineItem {
    /// price × quantity, as the display layer shows it
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Immutable order assembled once at submission time
///
/// Copies line items, totals, and the resolved delivery fee so later
/// catalog edits cannot change a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    pub customer: CustomerDetails,
    pub items: Vec<OrderLineItem>,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub payment_method: PaymentMethod,
    pub location: LocationResult,
    /// Proof reference returned by the upload endpoint
    pub payment_proof: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    pub placed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let line = OrderLineItem {
            id: "1".to_string(),
            name: "Crispy Chicken Burger".to_string(),
            price: 180.0,
            quantity: 2,
        };
        assert_eq!(line.line_total(), 360.0);
    }
}
