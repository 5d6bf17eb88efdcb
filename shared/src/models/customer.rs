//! Customer Details Model

use serde::{Deserialize, Serialize};

/// Delivery contact details captured on the first checkout step
///
/// All fields are free-form strings. Name and phone gate progression past
/// the Details step; the remaining fields are carried into the order
/// summary as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub pincode: String,
}

impl CustomerDetails {
    /// Whether the details satisfy the Details-step gate
    ///
    /// Whitespace-only values count as empty.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.phone.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_requires_name_and_phone() {
        let mut details = CustomerDetails::default();
        assert!(!details.is_complete());

        details.name = "Asha".to_string();
        assert!(!details.is_complete());

        details.phone = "9876543210".to_string();
        assert!(details.is_complete());
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let details = CustomerDetails {
            name: "   ".to_string(),
            phone: "9876543210".to_string(),
            ..Default::default()
        };
        assert!(!details.is_complete());
    }
}
