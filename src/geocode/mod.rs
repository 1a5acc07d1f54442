//! Address verification against a geocoding service.
//!
//! This module turns a city/state/zip triple into coordinates by querying a
//! Google-style geocode JSON endpoint. Queries are gated by local validation
//! before any network activity: an address that cannot possibly resolve
//! (empty city or state, absent or out-of-range zip) is answered with
//! `Ok(None)` without sending a request. Transport and decoding failures are
//! surfaced as errors; a well-formed "no result" answer from the service is
//! `Ok(None)` as well.
//!
//! No retry, caching, or backoff: callers own whatever resilience policy
//! they need around the single request made here.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::error::{ContactError, ContactResult};

/// Inclusive bounds for a routable US zip code.
pub const ZIP_MIN: u32 = 10_000;
pub const ZIP_MAX: u32 = 99_999;

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A US address to verify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressQuery {
    pub city: String,
    pub state: String,
    pub zip: Option<u32>,
}

impl AddressQuery {
    /// Creates a query from its parts.
    pub fn new(city: impl Into<String>, state: impl Into<String>, zip: Option<u32>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            zip,
        }
    }

    /// Whether the query passes local validation and is worth sending.
    ///
    /// Requires a nonempty city and state and a zip within
    /// [`ZIP_MIN`]..=[`ZIP_MAX`]. This gate runs before any network call.
    pub fn is_routable(&self) -> bool {
        self.routable_zip().is_some()
    }

    /// The validated zip, present only when the whole query is routable.
    fn routable_zip(&self) -> Option<u32> {
        if self.city.is_empty() || self.state.is_empty() {
            return None;
        }
        self.zip.filter(|zip| (ZIP_MIN..=ZIP_MAX).contains(zip))
    }

    /// Renders the `components` filter the geocode endpoint expects.
    fn components(&self, zip: u32) -> String {
        format!(
            "country:US|locality:{}|administrative_area:{}|postal_code:{}",
            self.city, self.state, zip
        )
    }
}

/// Coordinates returned by the geocoding service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Client for the geocoding service.
///
/// Holds a single `reqwest::Client` with an explicit request timeout; cheap
/// to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeocodeClient {
    /// Creates a client against the default geocode endpoint.
    pub fn new() -> ContactResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom endpoint (used by tests and
    /// self-hosted proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> ContactResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Resolves an address to coordinates.
    ///
    /// Returns `Ok(None)` when the query fails the local precondition gate
    /// or when the service reports no usable result; `Err` only for
    /// transport failures, non-success HTTP statuses, and undecodable
    /// bodies.
    pub async fn verify(&self, query: &AddressQuery) -> ContactResult<Option<Coordinates>> {
        let Some(zip) = query.routable_zip() else {
            log::debug!(
                "[geocode] skipping unroutable query city={:?} state={:?} zip={:?}",
                query.city,
                query.state,
                query.zip
            );
            return Ok(None);
        };

        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("components", query.components(zip))])
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            log::warn!("[geocode] service returned {}: {}", status, body);
            return Err(ContactError::Http {
                message: format!("geocoding service returned {}", status),
                source: None,
            });
        }

        let json: Value = serde_json::from_str(&body)?;
        Ok(parse_coordinates(&json))
    }
}

/// Extracts coordinates from a geocode response body.
///
/// Follows `status == "OK"` to `results[0].geometry.location.{lat,lng}`.
/// Any missing or mistyped step yields `None`; the service's own
/// `ZERO_RESULTS`/error statuses land here too.
pub fn parse_coordinates(value: &Value) -> Option<Coordinates> {
    if value.get("status")?.as_str()? != "OK" {
        return None;
    }
    let location = value
        .get("results")?
        .as_array()?
        .first()?
        .get("geometry")?
        .get("location")?;
    Some(Coordinates {
        latitude: location.get("lat")?.as_f64()?,
        longitude: location.get("lng")?.as_f64()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_routable_query() {
        assert!(AddressQuery::new("Boston", "MA", Some(21_340)).is_routable());
    }

    #[test]
    fn test_unroutable_queries() {
        assert!(!AddressQuery::new("Boston", "MA", None).is_routable());
        assert!(!AddressQuery::new("", "MA", Some(21_340)).is_routable());
        assert!(!AddressQuery::new("Boston", "", Some(21_340)).is_routable());
        // Just outside the range on both sides
        assert!(!AddressQuery::new("Boston", "MA", Some(9_999)).is_routable());
        assert!(!AddressQuery::new("Boston", "MA", Some(100_000)).is_routable());
    }

    #[test]
    fn test_zip_bounds_inclusive() {
        assert!(AddressQuery::new("Boston", "MA", Some(ZIP_MIN)).is_routable());
        assert!(AddressQuery::new("Boston", "MA", Some(ZIP_MAX)).is_routable());
    }

    #[test]
    fn test_components_rendering() {
        let query = AddressQuery::new("Boston", "MA", Some(21_340));
        assert_eq!(
            query.components(21_340),
            "country:US|locality:Boston|administrative_area:MA|postal_code:21340"
        );
    }

    #[test]
    fn test_parse_ok_response() {
        let body = json!({
            "status": "OK",
            "results": [{
                "geometry": { "location": { "lat": 42.35, "lng": -71.06 } }
            }]
        });
        let coords = parse_coordinates(&body).expect("coordinates");
        assert_eq!(coords.latitude, 42.35);
        assert_eq!(coords.longitude, -71.06);
    }

    #[test]
    fn test_parse_zero_results() {
        let body = json!({ "status": "ZERO_RESULTS", "results": [] });
        assert_eq!(parse_coordinates(&body), None);
    }

    #[test]
    fn test_parse_missing_geometry() {
        let body = json!({ "status": "OK", "results": [{}] });
        assert_eq!(parse_coordinates(&body), None);
    }

    #[test]
    fn test_parse_non_object_payload() {
        assert_eq!(parse_coordinates(&json!("OK")), None);
        assert_eq!(parse_coordinates(&json!(null)), None);
    }
}
