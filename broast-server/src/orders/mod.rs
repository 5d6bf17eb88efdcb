//! Order assembly
//!
//! The order itself is built by [`crate::checkout::CheckoutSession::place`];
//! this module turns the resulting summary into the outbound message.

pub mod composer;

pub use composer::{deep_link, format_message};
