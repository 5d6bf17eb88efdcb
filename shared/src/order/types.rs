//! Shared checkout types

use crate::types::LatLng;
use serde::{Deserialize, Serialize};

/// Payment method selected on the Payment step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on delivery
    #[default]
    Cash,
    /// UPI transfer
    Upi,
    /// Credit/debit card
    Card,
    /// Net banking
    NetBanking,
}

impl PaymentMethod {
    /// Human-readable label used in the order message
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash on Delivery",
            PaymentMethod::Upi => "UPI Payment",
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::NetBanking => "Net Banking",
        }
    }
}

/// Outcome of resolving the locked delivery point against the routing
/// service
///
/// Produced at most once per location submit; becomes part of the final
/// order only after the position has been locked and the resolve succeeded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationResult {
    /// Link to the chosen point on the map provider
    pub map_link: String,
    /// Display distance, e.g. "4.2 km"
    pub distance_text: String,
    /// Display duration, e.g. "12 mins"
    pub duration_text: String,
    /// Delivery fee derived from the distance
    pub delivery_fee: f64,
    /// The locked delivery point
    pub position: LatLng,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_serde_values() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::NetBanking).unwrap(),
            "\"netbanking\""
        );
        let m: PaymentMethod = serde_json::from_str("\"upi\"").unwrap();
        assert_eq!(m, PaymentMethod::Upi);
    }
}
