//! Checkout flow tests
//!
//! Drives full Details → Location → Payment sequences against a seeded
//! catalog, plus the guard rejections at every gate.

use rust_decimal::Decimal;
use shared::models::CustomerDetails;
use shared::order::{LocationResult, PaymentMethod};
use shared::types::LatLng;

use crate::catalog::Catalog;
use crate::checkout::{
    CheckoutError, CheckoutSession, CheckoutStep, DEFAULT_MAP_CENTER, SessionManager,
};

fn details() -> CustomerDetails {
    CustomerDetails {
        name: "Asha Rao".to_string(),
        phone: "9876543210".to_string(),
        address: "12-3-456 Old Bowenpally".to_string(),
        city: "Hyderabad".to_string(),
        pincode: "500011".to_string(),
    }
}

fn resolved_location() -> LocationResult {
    LocationResult {
        map_link: "https://www.google.com/maps?q=17.36,78.01".to_string(),
        distance_text: "4.2 km".to_string(),
        duration_text: "12 mins".to_string(),
        delivery_fee: 50.0,
        position: LatLng::new(17.36, 78.01),
    }
}

/// Session with {"1": 2, "8": 1} in the cart (both items priced 180)
fn session_with_cart() -> CheckoutSession {
    let mut session = CheckoutSession::new("test-session");
    session.cart.add("1");
    session.cart.add("1");
    session.cart.add("8");
    session
}

fn advance_to_payment(session: &mut CheckoutSession) {
    session
        .submit_details(details(), PaymentMethod::Upi, None)
        .unwrap();
    session.set_position(LatLng::new(17.36, 78.01)).unwrap();
    session.lock_position();
    session.confirm_location(resolved_location()).unwrap();
}

#[test]
fn test_new_session_defaults() {
    let session = CheckoutSession::new("s");
    assert_eq!(session.step, CheckoutStep::Details);
    assert_eq!(session.position, DEFAULT_MAP_CENTER);
    assert!(!session.locked);
    assert!(session.cart.is_empty());
    assert!(session.location.is_none());
    assert!(session.payment_proof.is_none());
}

#[test]
fn test_details_gate_requires_name_and_phone() {
    let mut session = session_with_cart();

    let incomplete = CustomerDetails {
        phone: String::new(),
        ..details()
    };
    let err = session
        .submit_details(incomplete, PaymentMethod::Cash, None)
        .unwrap_err();
    assert_eq!(err, CheckoutError::MissingContact);
    // Rejection leaves the session untouched
    assert_eq!(session.step, CheckoutStep::Details);
    assert!(session.details.is_none());
}

#[test]
fn test_details_gate_rejects_empty_cart() {
    let mut session = CheckoutSession::new("s");
    let err = session
        .submit_details(details(), PaymentMethod::Cash, None)
        .unwrap_err();
    assert_eq!(err, CheckoutError::EmptyCart);
}

#[test]
fn test_details_advances_to_location() {
    let mut session = session_with_cart();
    session
        .submit_details(details(), PaymentMethod::Card, Some("extra napkins".to_string()))
        .unwrap();
    assert_eq!(session.step, CheckoutStep::Location);
    assert_eq!(session.payment_method, PaymentMethod::Card);
    assert_eq!(
        session.special_instructions.as_deref(),
        Some("extra napkins")
    );
}

#[test]
fn test_blank_instructions_are_dropped() {
    let mut session = session_with_cart();
    session
        .submit_details(details(), PaymentMethod::Cash, Some("   ".to_string()))
        .unwrap();
    assert!(session.special_instructions.is_none());
}

#[test]
fn test_locked_marker_rejects_repositioning() {
    let mut session = session_with_cart();
    session
        .submit_details(details(), PaymentMethod::Cash, None)
        .unwrap();

    session.set_position(LatLng::new(17.4, 78.1)).unwrap();
    session.lock_position();

    let err = session.set_position(LatLng::new(17.5, 78.2)).unwrap_err();
    assert_eq!(err, CheckoutError::PositionLocked);
    assert_eq!(session.position, LatLng::new(17.4, 78.1));

    // Unlock releases the marker again
    session.unlock_position();
    session.set_position(LatLng::new(17.5, 78.2)).unwrap();
    assert_eq!(session.position, LatLng::new(17.5, 78.2));
}

#[test]
fn test_location_submit_requires_lock() {
    let mut session = session_with_cart();
    session
        .submit_details(details(), PaymentMethod::Cash, None)
        .unwrap();

    assert_eq!(
        session.prepare_resolve().unwrap_err(),
        CheckoutError::PositionNotLocked
    );
    assert_eq!(
        session.confirm_location(resolved_location()).unwrap_err(),
        CheckoutError::PositionNotLocked
    );
    assert_eq!(session.step, CheckoutStep::Location);

    session.lock_position();
    assert_eq!(session.prepare_resolve().unwrap(), session.position);
    session.confirm_location(resolved_location()).unwrap();
    assert_eq!(session.step, CheckoutStep::Payment);
}

#[test]
fn test_prepare_resolve_rejected_outside_location_step() {
    let session = session_with_cart();
    assert!(matches!(
        session.prepare_resolve(),
        Err(CheckoutError::StepMismatch { .. })
    ));
}

#[test]
fn test_repositioning_discards_resolution() {
    let mut session = session_with_cart();
    session
        .submit_details(details(), PaymentMethod::Cash, None)
        .unwrap();
    session.lock_position();
    session.location = Some(resolved_location());

    session.unlock_position();
    assert!(session.location.is_none());
}

#[test]
fn test_back_walks_one_step_and_floors_at_details() {
    let mut session = session_with_cart();
    advance_to_payment(&mut session);

    assert_eq!(session.back(), CheckoutStep::Location);
    assert_eq!(session.back(), CheckoutStep::Details);
    assert_eq!(session.back(), CheckoutStep::Details);
}

#[test]
fn test_attach_proof_only_on_payment_step() {
    let mut session = session_with_cart();
    assert!(matches!(
        session.attach_proof("/api/proof/abc.jpg"),
        Err(CheckoutError::StepMismatch { .. })
    ));

    advance_to_payment(&mut session);
    session.attach_proof("/api/proof/abc.jpg").unwrap();
    assert_eq!(session.payment_proof.as_deref(), Some("/api/proof/abc.jpg"));
}

#[test]
fn test_place_without_proof_is_payment_required() {
    let catalog = Catalog::seed();
    let mut session = session_with_cart();
    advance_to_payment(&mut session);

    let err = session.place(&catalog).unwrap_err();
    assert_eq!(err, CheckoutError::PaymentRequired);
    // The cart survives the rejection
    assert_eq!(session.cart.item_count(), 3);
}

#[test]
fn test_place_builds_summary_and_clears_cart() {
    let catalog = Catalog::seed();
    let mut session = session_with_cart();
    advance_to_payment(&mut session);
    session.attach_proof("/api/proof/abc.jpg").unwrap();

    let summary = session.place(&catalog).unwrap();

    assert_eq!(summary.subtotal, 540.0);
    assert_eq!(summary.delivery_fee, 50.0);
    assert_eq!(summary.total, 590.0);
    assert_eq!(summary.items.len(), 2);
    assert_eq!(summary.payment_method, PaymentMethod::Upi);
    assert_eq!(summary.payment_proof, "/api/proof/abc.jpg");
    assert_eq!(summary.customer.name, "Asha Rao");
    assert_eq!(summary.location.distance_text, "4.2 km");

    // Placement empties the cart; a second attempt is the empty-cart case
    assert!(session.cart.is_empty());
    assert_eq!(session.place(&catalog).unwrap_err(), CheckoutError::EmptyCart);
}

#[test]
fn test_delivery_fee_defaults_to_flat_until_resolved() {
    let mut session = session_with_cart();
    assert_eq!(session.delivery_fee(), Decimal::from(50));

    let mut far = resolved_location();
    far.delivery_fee = 84.0;
    advance_to_payment(&mut session);
    session.location = Some(far);
    assert_eq!(session.delivery_fee(), Decimal::from(84));
}

#[test]
fn test_session_manager_lifecycle() {
    let manager = SessionManager::new();
    assert!(manager.is_empty());

    let id = manager.create();
    assert_eq!(manager.len(), 1);

    manager.update(&id, |s| {
        s.cart.add("1");
    });
    let count = manager.read(&id, |s| s.cart.item_count());
    assert_eq!(count, Some(1));

    assert!(manager.read("missing", |_| ()).is_none());
    assert!(manager.update("missing", |_| ()).is_none());

    assert!(manager.remove(&id));
    assert!(!manager.remove(&id));
    assert!(manager.is_empty());
}
