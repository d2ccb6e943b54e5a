//! Wire format for the Seoul open-data service.
//!
//! Responses are keyed by the service name:
//! `{ "<service>": { "list_total_count": N, "row": [ ... ] } }`
//! Rows carry many more fields than we use; unknown fields are ignored.

use model::{IconId, LatLng, MapPoint};
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// One public-restroom row as the service reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToiletRecord {
    /// Latitude in WGS84 degrees.
    #[serde(rename = "Y_WGS84")]
    pub lat: f64,
    /// Longitude in WGS84 degrees.
    #[serde(rename = "X_WGS84")]
    pub lon: f64,
    /// Facility name.
    #[serde(rename = "FNAME")]
    pub name: String,
    /// Address-like description (managing district).
    #[serde(rename = "ANAME")]
    pub address: String,
}

impl ToiletRecord {
    /// Builds the renderable marker for this record.
    pub fn to_point(&self, icon: IconId) -> MapPoint {
        MapPoint::new(
            LatLng::new(self.lat, self.lon),
            self.name.clone(),
            self.address.clone(),
            icon,
        )
    }
}

/// Body of the service envelope: reported total plus this slice's rows.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceBody {
    pub list_total_count: u32,
    #[serde(default)]
    pub row: Vec<ToiletRecord>,
}

/// Extracts the `<service>` envelope from a raw response body.
///
/// The service also replies with a top-level `RESULT` object (and no
/// envelope) for out-of-range or rejected requests; that surfaces here as a
/// missing-envelope error.
pub fn parse_envelope(service: &str, body: &str) -> Result<ServiceBody, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| FetchError::with_source("Malformed JSON response", e))?;

    let envelope = value
        .get(service)
        .ok_or_else(|| FetchError::new(format!("Response is missing the '{service}' envelope")))?;

    serde_json::from_value(envelope.clone())
        .map_err(|e| FetchError::with_source("Unexpected envelope shape", e))
}
