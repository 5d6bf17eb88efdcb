//! Delivery distance and fee
//!
//! - [`resolver`] - routing-service client and the [`DistanceService`]
//! - [`fee`] - the delivery fee policy

pub mod fee;
pub mod resolver;

pub use fee::FeePolicy;
pub use resolver::{DeliveryError, DistanceMatrixClient, DistanceService, RouteLeg, RouteProvider};
