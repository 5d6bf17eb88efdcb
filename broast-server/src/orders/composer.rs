//! Order message composition
//!
//! Formats a placed order into the single human-readable message the shop
//! receives, and wraps it into a messaging deep-link. Formatting is
//! deterministic: the same summary always yields the same text.

use shared::order::OrderSummary;

use crate::utils::money;

fn rupees(amount: f64) -> String {
    format!("₹{}", money::format_amount(money::dec(amount)))
}

/// Render the order summary as the message body
pub fn format_message(summary: &OrderSummary) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("*New Order - Broast*".to_string());
    lines.push(String::new());

    lines.push(format!("Customer: {}", summary.customer.name));
    lines.push(format!("Phone: {}", summary.customer.phone));

    let address: Vec<&str> = [
        summary.customer.address.as_str(),
        summary.customer.city.as_str(),
        summary.customer.pincode.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.trim().is_empty())
    .collect();
    if !address.is_empty() {
        lines.push(format!("Address: {}", address.join(", ")));
    }

    lines.push(format!("Delivery Point: {}", summary.location.map_link));
    lines.push(format!(
        "Distance: {} (approx. {})",
        summary.location.distance_text, summary.location.duration_text
    ));
    lines.push(String::new());

    lines.push("Items:".to_string());
    for (idx, item) in summary.items.iter().enumerate() {
        lines.push(format!(
            "{}. {} x{} - {}",
            idx + 1,
            item.name,
            item.quantity,
            rupees(item.line_total()),
        ));
    }
    lines.push(String::new());

    lines.push(format!("Subtotal: {}", rupees(summary.subtotal)));
    lines.push(format!("Delivery Fee: {}", rupees(summary.delivery_fee)));
    lines.push(format!("Total: {}", rupees(summary.total)));
    lines.push(String::new());

    lines.push(format!("Payment: {}", summary.payment_method.label()));
    lines.push(format!("Payment Proof: {}", summary.payment_proof));
    if let Some(instructions) = &summary.special_instructions {
        lines.push(format!("Instructions: {}", instructions));
    }

    lines.join("\n")
}

/// Build the `wa.me` deep-link carrying the message, URL-encoded
///
/// Fire-and-forget: opening the link is the client's job and there is no
/// delivery confirmation. Returns `None` only for an unusable recipient.
pub fn deep_link(recipient: &str, message: &str) -> Option<String> {
    let mut url = reqwest::Url::parse(&format!("https://wa.me/{}", recipient)).ok()?;
    url.query_pairs_mut().append_pair("text", message);
    Some(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::CustomerDetails;
    use shared::order::{LocationResult, OrderLineItem, PaymentMethod};
    use shared::types::LatLng;

    fn summary() -> OrderSummary {
        OrderSummary {
            customer: CustomerDetails {
                name: "Asha Rao".to_string(),
                phone: "9876543210".to_string(),
                address: "12-3-456 Old Bowenpally".to_string(),
                city: "Hyderabad".to_string(),
                pincode: "500011".to_string(),
            },
            items: vec![
                OrderLineItem {
                    id: "1".to_string(),
                    name: "Crispy Chicken Burger".to_string(),
                    price: 180.0,
                    quantity: 2,
                },
                OrderLineItem {
                    id: "8".to_string(),
                    name: "Broasted Fried Chicken - 2 Piece".to_string(),
                    price: 180.0,
                    quantity: 1,
                },
            ],
            subtotal: 540.0,
            delivery_fee: 50.0,
            total: 590.0,
            payment_method: PaymentMethod::Upi,
            location: LocationResult {
                map_link: "https://www.google.com/maps?q=17.36,78.01".to_string(),
                distance_text: "4.2 km".to_string(),
                duration_text: "12 mins".to_string(),
                delivery_fee: 50.0,
                position: LatLng::new(17.36, 78.01),
            },
            payment_proof: "/api/proof/abc.jpg".to_string(),
            special_instructions: Some("extra napkins".to_string()),
            placed_at: "2025-01-01T12:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_format_message_is_deterministic() {
        let expected = "\
*New Order - Broast*

Customer: Asha Rao
Phone: 9876543210
Address: 12-3-456 Old Bowenpally, Hyderabad, 500011
Delivery Point: https://www.google.com/maps?q=17.36,78.01
Distance: 4.2 km (approx. 12 mins)

Items:
1. Crispy Chicken Burger x2 - ₹360
2. Broasted Fried Chicken - 2 Piece x1 - ₹180

Subtotal: ₹540
Delivery Fee: ₹50
Total: ₹590

Payment: UPI Payment
Payment Proof: /api/proof/abc.jpg
Instructions: extra napkins";

        assert_eq!(format_message(&summary()), expected);
        assert_eq!(format_message(&summary()), format_message(&summary()));
    }

    #[test]
    fn test_format_message_without_instructions() {
        let mut s = summary();
        s.special_instructions = None;
        let message = format_message(&s);
        assert!(!message.contains("Instructions:"));
        assert!(message.ends_with("Payment Proof: /api/proof/abc.jpg"));
    }

    #[test]
    fn test_deep_link_encodes_message() {
        let link = deep_link("910000000000", "Total: ₹590\nsee you").unwrap();
        assert!(link.starts_with("https://wa.me/910000000000?text="));
        // Everything after the query marker must be URL-encoded
        let query = link.split_once("?text=").unwrap().1;
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(!query.contains('₹'));
    }
}
