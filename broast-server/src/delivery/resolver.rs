//! Distance resolution against the external routing service
//!
//! The service speaks a distance-matrix dialect: one origin (the shop), one
//! destination (the locked delivery point), driving mode. Any failure is
//! non-fatal and surfaces to the caller; retry is a manual user action.

use async_trait::async_trait;
use serde::Deserialize;
use shared::order::LocationResult;
use shared::types::LatLng;
use std::sync::Arc;
use std::time::Duration;

use crate::delivery::FeePolicy;
use crate::utils::money;

/// Routing failures, all recoverable by explicit retry
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("routing request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("routing service returned status {0}")]
    ServiceStatus(String),

    #[error("routing response is missing route data")]
    MalformedResponse,
}

/// One resolved route leg from the shop to the delivery point
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    /// Display distance, e.g. "4.2 km"
    pub distance_text: String,
    /// Display duration, e.g. "12 mins"
    pub duration_text: String,
    /// Road distance in kilometers, for fee derivation
    pub distance_km: f64,
}

/// Source of route legs; the production impl talks to the routing service
#[async_trait]
pub trait RouteProvider: Send + Sync {
    async fn route(&self, origin: LatLng, destination: LatLng) -> Result<RouteLeg, DeliveryError>;
}

// ========== Wire format ==========

#[derive(Debug, Deserialize)]
struct MatrixResponse {
    status: String,
    #[serde(default)]
    rows: Vec<MatrixRow>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MatrixRow {
    #[serde(default)]
    elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
struct MatrixElement {
    status: String,
    distance: Option<TextValue>,
    duration: Option<TextValue>,
}

/// Distance in meters / duration in seconds, with a display string
#[derive(Debug, Deserialize)]
struct TextValue {
    text: String,
    value: i64,
}

fn leg_from_response(response: MatrixResponse) -> Result<RouteLeg, DeliveryError> {
    if response.status != "OK" {
        let status = match response.error_message {
            Some(msg) => format!("{} ({})", response.status, msg),
            None => response.status,
        };
        return Err(DeliveryError::ServiceStatus(status));
    }

    let element = response
        .rows
        .first()
        .and_then(|row| row.elements.first())
        .ok_or(DeliveryError::MalformedResponse)?;

    if element.status != "OK" {
        return Err(DeliveryError::ServiceStatus(element.status.clone()));
    }

    let distance = element
        .distance
        .as_ref()
        .ok_or(DeliveryError::MalformedResponse)?;
    let duration = element
        .duration
        .as_ref()
        .ok_or(DeliveryError::MalformedResponse)?;

    Ok(RouteLeg {
        distance_text: distance.text.clone(),
        duration_text: duration.text.clone(),
        distance_km: distance.value as f64 / 1000.0,
    })
}

/// Routing service client (distance-matrix API)
#[derive(Debug, Clone)]
pub struct DistanceMatrixClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DistanceMatrixClient {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to build HTTP client with timeout, using defaults");
                reqwest::Client::new()
            });
        Self {
            http,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl RouteProvider for DistanceMatrixClient {
    async fn route(&self, origin: LatLng, destination: LatLng) -> Result<RouteLeg, DeliveryError> {
        let url = format!("{}/maps/api/distancematrix/json", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("origins", origin.to_query()),
                ("destinations", destination.to_query()),
                ("mode", "driving".to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<MatrixResponse>()
            .await?;

        leg_from_response(response)
    }
}

/// 距离解析服务
///
/// 持有固定起点 (店铺坐标) 和配送费策略，将锁定的配送点解析为
/// [`LocationResult`]。解析失败不推进向导，由用户手动重试。
#[derive(Clone)]
pub struct DistanceService {
    provider: Arc<dyn RouteProvider>,
    origin: LatLng,
    policy: FeePolicy,
}

impl DistanceService {
    pub fn new(provider: Arc<dyn RouteProvider>, origin: LatLng, policy: FeePolicy) -> Self {
        Self {
            provider,
            origin,
            policy,
        }
    }

    /// 店铺坐标 (距离计算起点)
    pub fn origin(&self) -> LatLng {
        self.origin
    }

    /// Resolve the locked delivery point into distance, duration, and fee
    pub async fn resolve(&self, destination: LatLng) -> Result<LocationResult, DeliveryError> {
        let leg = self.provider.route(self.origin, destination).await?;
        let fee = self.policy.fee_for(leg.distance_km);

        tracing::info!(
            distance = %leg.distance_text,
            duration = %leg.duration_text,
            fee = %fee,
            "Distance resolved"
        );

        Ok(LocationResult {
            map_link: format!(
                "https://www.google.com/maps?q={},{}",
                destination.lat, destination.lng
            ),
            distance_text: leg.distance_text,
            duration_text: leg.duration_text,
            delivery_fee: money::to_f64(fee),
            position: destination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn ok_response() -> &'static str {
        r#"{
            "status": "OK",
            "rows": [{
                "elements": [{
                    "status": "OK",
                    "distance": { "text": "4.2 km", "value": 4200 },
                    "duration": { "text": "12 mins", "value": 720 }
                }]
            }]
        }"#
    }

    #[test]
    fn test_leg_from_ok_response() {
        let response: MatrixResponse = serde_json::from_str(ok_response()).unwrap();
        let leg = leg_from_response(response).unwrap();
        assert_eq!(leg.distance_text, "4.2 km");
        assert_eq!(leg.duration_text, "12 mins");
        assert_eq!(leg.distance_km, 4.2);
    }

    #[test]
    fn test_leg_from_denied_response() {
        let response: MatrixResponse = serde_json::from_str(
            r#"{ "status": "REQUEST_DENIED", "error_message": "API key invalid" }"#,
        )
        .unwrap();
        let err = leg_from_response(response).unwrap_err();
        assert!(matches!(err, DeliveryError::ServiceStatus(s) if s.contains("REQUEST_DENIED")));
    }

    #[test]
    fn test_leg_from_unroutable_element() {
        let response: MatrixResponse = serde_json::from_str(
            r#"{
                "status": "OK",
                "rows": [{ "elements": [{ "status": "ZERO_RESULTS" }] }]
            }"#,
        )
        .unwrap();
        let err = leg_from_response(response).unwrap_err();
        assert!(matches!(err, DeliveryError::ServiceStatus(s) if s == "ZERO_RESULTS"));
    }

    #[test]
    fn test_leg_from_empty_rows() {
        let response: MatrixResponse =
            serde_json::from_str(r#"{ "status": "OK", "rows": [] }"#).unwrap();
        assert!(matches!(
            leg_from_response(response),
            Err(DeliveryError::MalformedResponse)
        ));
    }

    struct FixedRoute(RouteLeg);

    #[async_trait]
    impl RouteProvider for FixedRoute {
        async fn route(&self, _: LatLng, _: LatLng) -> Result<RouteLeg, DeliveryError> {
            Ok(self.0.clone())
        }
    }

    struct FailingRoute;

    #[async_trait]
    impl RouteProvider for FailingRoute {
        async fn route(&self, _: LatLng, _: LatLng) -> Result<RouteLeg, DeliveryError> {
            Err(DeliveryError::ServiceStatus("OVER_QUERY_LIMIT".to_string()))
        }
    }

    #[tokio::test]
    async fn test_resolve_builds_location_result() {
        let service = DistanceService::new(
            Arc::new(FixedRoute(RouteLeg {
                distance_text: "4.2 km".to_string(),
                duration_text: "12 mins".to_string(),
                distance_km: 4.2,
            })),
            LatLng::new(17.335109, 78.0),
            FeePolicy::PerKm {
                rate: Decimal::from(20),
            },
        );

        let result = service.resolve(LatLng::new(17.36, 78.01)).await.unwrap();
        assert_eq!(result.distance_text, "4.2 km");
        assert_eq!(result.duration_text, "12 mins");
        assert_eq!(result.delivery_fee, 84.0);
        assert_eq!(result.position, LatLng::new(17.36, 78.01));
        assert_eq!(result.map_link, "https://www.google.com/maps?q=17.36,78.01");
    }

    #[tokio::test]
    async fn test_resolve_propagates_provider_failure() {
        let service = DistanceService::new(
            Arc::new(FailingRoute),
            LatLng::new(17.335109, 78.0),
            FeePolicy::default(),
        );

        let err = service.resolve(LatLng::new(17.36, 78.01)).await.unwrap_err();
        assert!(matches!(err, DeliveryError::ServiceStatus(_)));
    }
}
