use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::geo::GeoPoint;

/// One record of the upstream permit feed. Every field is optional so that a
/// single oddly-shaped record can be dropped instead of failing the batch.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct RawTruckRecord {
    pub applicant: Option<String>,
    pub status: Option<String>,
    pub location: Option<RawLocation>,
    pub schedule: Option<String>,
    pub address: Option<String>,
    pub fooditems: Option<String>,
}

/// Coordinates arrive as decimal strings in the feed.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct RawLocation {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TruckView {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fooditems: Option<String>,
}

impl TruckView {
    pub fn position(&self) -> Option<GeoPoint> {
        let lat = self.latitude.parse().ok()?;
        let lng = self.longitude.parse().ok()?;
        Some(GeoPoint { lat, lng })
    }
}

/// Projects one raw feed record into the response shape. Only approved
/// permits with usable coordinates survive. Coordinates stay as the feed's
/// original strings; the food item list swaps colons for commas.
pub fn project(raw: &Value) -> Option<TruckView> {
    let record: RawTruckRecord = serde_json::from_value(raw.clone()).ok()?;

    if record.status.as_deref() != Some("APPROVED") {
        return None;
    }

    let location = record.location?;
    let latitude = location.latitude?;
    let longitude = location.longitude?;
    if !is_finite_decimal(&latitude) || !is_finite_decimal(&longitude) {
        return None;
    }

    Some(TruckView {
        name: record.applicant?,
        latitude,
        longitude,
        address: record.address,
        schedule: record.schedule,
        fooditems: record.fooditems.map(|items| items.replace(':', ",")),
    })
}

fn is_finite_decimal(raw: &str) -> bool {
    raw.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}
