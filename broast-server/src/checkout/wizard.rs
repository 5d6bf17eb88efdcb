//! Checkout step state machine
//!
//! The checkout flow is strictly sequential: Details → Location → Payment.
//! Forward transitions are guarded by step-local validation; the only
//! backward transition is an explicit `back`, which never goes below
//! Details.

use serde::{Deserialize, Serialize};

/// The three checkout steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    #[default]
    Details,
    Location,
    Payment,
}

impl CheckoutStep {
    /// The step an explicit "Back" lands on (Details is the floor)
    pub fn back(self) -> Self {
        match self {
            CheckoutStep::Details => CheckoutStep::Details,
            CheckoutStep::Location => CheckoutStep::Details,
            CheckoutStep::Payment => CheckoutStep::Location,
        }
    }
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CheckoutStep::Details => "details",
            CheckoutStep::Location => "location",
            CheckoutStep::Payment => "payment",
        };
        write!(f, "{}", name)
    }
}

/// Checkout-level rejections
///
/// All of these are user-recoverable: state stays where it was and the
/// caller retries after fixing the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error("cart is empty, add items before checking out")]
    EmptyCart,

    #[error("name and phone number are required")]
    MissingContact,

    #[error("operation belongs to the {expected} step, session is at {actual}")]
    StepMismatch {
        expected: CheckoutStep,
        actual: CheckoutStep,
    },

    #[error("delivery point is locked, unlock it to move the marker")]
    PositionLocked,

    #[error("confirm the delivery point before submitting")]
    PositionNotLocked,

    #[error("distance has not been resolved for the delivery point")]
    LocationNotResolved,

    #[error("payment proof has not been uploaded")]
    PaymentRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_never_below_details() {
        assert_eq!(CheckoutStep::Payment.back(), CheckoutStep::Location);
        assert_eq!(CheckoutStep::Location.back(), CheckoutStep::Details);
        assert_eq!(CheckoutStep::Details.back(), CheckoutStep::Details);
    }

    #[test]
    fn test_step_serde_values() {
        assert_eq!(
            serde_json::to_string(&CheckoutStep::Location).unwrap(),
            "\"location\""
        );
    }
}
