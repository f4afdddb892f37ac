//! Field models and status classification
//!
//! Fields are serialized in camelCase to stay compatible with the data the
//! web client already persists and with the upstream agronomic API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A user-registered field location with its latest known readings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: Uuid,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub last_update: DateTime<Utc>,
    /// Soil moisture percentage, 0-100
    pub soil_moisture: i32,
    /// Air temperature in °C
    pub temperature: i32,
    /// Vegetation index, 0.0-1.0
    pub ndvi: f64,
}

/// Metric snapshot for a coordinate, either fetched from the upstream API or
/// synthesized locally
///
/// Integer readings are rounded on deserialize: the upstream service reports
/// them with one decimal, and a strict integer field would reject every live
/// payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetrics {
    pub lat: f64,
    pub lon: f64,
    #[serde(deserialize_with = "rounded_i32")]
    pub soil_moisture: i32,
    /// Precipitation over the last 7 days, in mm
    pub precipitation: f64,
    #[serde(deserialize_with = "rounded_i32")]
    pub temperature: i32,
    pub ndvi: f64,
    pub status: FieldStatus,
    pub advice: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Qualitative field health tier
///
/// The classification rules only ever produce `Healthy`, `Medium` and `Dry`.
/// `Warning` and `Critical` exist so that payloads from the upstream API,
/// which grades on a four-tier scale, deserialize without loss.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    Healthy,
    Medium,
    Dry,
    Warning,
    Critical,
}

impl FieldStatus {
    /// Action priority implied by the tier
    pub fn priority(self) -> Priority {
        match self {
            FieldStatus::Healthy => Priority::Low,
            FieldStatus::Medium | FieldStatus::Warning => Priority::High,
            FieldStatus::Dry | FieldStatus::Critical => Priority::Urgent,
        }
    }
}

impl std::fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldStatus::Healthy => write!(f, "healthy"),
            FieldStatus::Medium => write!(f, "medium"),
            FieldStatus::Dry => write!(f, "dry"),
            FieldStatus::Warning => write!(f, "warning"),
            FieldStatus::Critical => write!(f, "critical"),
        }
    }
}

/// Action priority attached to a metric snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
}

/// Result of classifying a set of readings
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    /// Canonical tier, keyed on soil moisture
    pub status: FieldStatus,
    /// Farmer-facing recommendation for the tier
    pub advice: String,
    /// Display legend tier, keyed on NDVI; can disagree with `status`
    pub vegetation_status: FieldStatus,
}

// Advice copy shown to farmers, per tier
pub const ADVICE_DRY: &str = "Tlo je suho – hitno zalijte u naredna 2 dana.";
pub const ADVICE_MEDIUM: &str = "Umjerena vlažnost. Planirajte navodnjavanje uskoro.";
pub const ADVICE_HEALTHY: &str = "Odlična vlažnost tla. Nastavite sa redovnim održavanjem.";

/// Classify a set of readings into a status tier and advice text
///
/// Soil moisture is the dominant signal: below 25% the field is dry, below
/// 35% it is medium, otherwise healthy. NDVI feeds only the separate
/// vegetation legend and is never reconciled against the moisture tier.
pub fn assess(soil_moisture: i32, ndvi: f64) -> Assessment {
    let (status, advice) = if soil_moisture < 25 {
        (FieldStatus::Dry, ADVICE_DRY)
    } else if soil_moisture < 35 {
        (FieldStatus::Medium, ADVICE_MEDIUM)
    } else {
        (FieldStatus::Healthy, ADVICE_HEALTHY)
    };

    Assessment {
        status,
        advice: advice.to_string(),
        vegetation_status: vegetation_status(ndvi),
    }
}

/// Map an NDVI reading to the display legend tier
///
/// Values of 0.6 and above read as healthy, 0.4-0.6 as medium, below 0.4 as
/// plant stress.
pub fn vegetation_status(ndvi: f64) -> FieldStatus {
    if ndvi >= 0.6 {
        FieldStatus::Healthy
    } else if ndvi >= 0.4 {
        FieldStatus::Medium
    } else {
        FieldStatus::Dry
    }
}

fn rounded_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.round() as i32)
}
