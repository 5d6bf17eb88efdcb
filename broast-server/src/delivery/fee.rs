//! Delivery fee policy
//!
//! One authoritative policy, chosen by configuration: a per-kilometer rate
//! (the default) or a flat fee. The multiplier is a configuration constant,
//! not a structural rule.

use rust_decimal::Decimal;

use crate::utils::money;

/// How the delivery fee is derived from the resolved distance
#[derive(Debug, Clone, PartialEq)]
pub enum FeePolicy {
    /// fee = rate × distance in kilometers, rounded to money precision
    PerKm { rate: Decimal },
    /// fee = fixed amount, regardless of distance
    Flat { amount: Decimal },
}

impl FeePolicy {
    /// Delivery fee for a resolved road distance
    pub fn fee_for(&self, distance_km: f64) -> Decimal {
        match self {
            FeePolicy::PerKm { rate } => money::round_money(*rate * money::dec(distance_km)),
            FeePolicy::Flat { amount } => money::round_money(*amount),
        }
    }
}

impl Default for FeePolicy {
    fn default() -> Self {
        FeePolicy::PerKm {
            rate: Decimal::from(20),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_km_fee() {
        let policy = FeePolicy::PerKm {
            rate: Decimal::from(20),
        };
        assert_eq!(policy.fee_for(4.2), Decimal::from(84));
        assert_eq!(policy.fee_for(0.0), Decimal::ZERO);
    }

    #[test]
    fn test_per_km_fee_rounds_to_money_precision() {
        let policy = FeePolicy::PerKm {
            rate: Decimal::from(20),
        };
        // 1.2345 km × 20 = 24.69
        assert_eq!(policy.fee_for(1.2345), Decimal::new(2469, 2));
    }

    #[test]
    fn test_flat_fee_ignores_distance() {
        let policy = FeePolicy::Flat {
            amount: Decimal::from(50),
        };
        assert_eq!(policy.fee_for(0.5), Decimal::from(50));
        assert_eq!(policy.fee_for(25.0), Decimal::from(50));
    }
}
