//! Field registry service
//!
//! Owns the canonical list of registered fields. Every mutation validates its
//! input, applies the change in memory and synchronously persists the whole
//! collection under a fixed key, preserving insertion order.

use std::sync::{Mutex, PoisonError};

use chrono::{Duration, Utc};
use serde::Deserialize;
use uuid::Uuid;

use shared::{
    is_valid_ndvi, is_valid_soil_moisture, validate_field_name, validate_latitude,
    validate_longitude, Field,
};

use crate::error::{AppError, AppResult};
use crate::services::synthetic;
use crate::storage::KvStore;

/// Storage key holding the serialized field collection
const FIELDS_KEY: &str = "userFields";

/// Field registry backed by the key-value store
pub struct FieldStore {
    kv: KvStore,
    fields: Mutex<Vec<Field>>,
}

/// Input for registering a field
#[derive(Debug, Deserialize)]
pub struct CreateFieldInput {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Input for updating a field
///
/// Metrics are optional; when absent the stored readings are kept.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFieldInput {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub soil_moisture: Option<i32>,
    pub temperature: Option<i32>,
    pub ndvi: Option<f64>,
}

impl FieldStore {
    /// Open the store, seeding the default fields on first run.
    /// The seed is persisted before the store becomes usable.
    pub fn open(kv: KvStore) -> AppResult<Self> {
        let fields = match kv.get::<Vec<Field>>(FIELDS_KEY)? {
            Some(fields) => fields,
            None => {
                let seeded = default_fields();
                kv.set(FIELDS_KEY, &seeded)?;
                tracing::info!("Seeded {} default fields", seeded.len());
                seeded
            }
        };

        Ok(Self {
            kv,
            fields: Mutex::new(fields),
        })
    }

    /// Current collection, insertion order preserved
    pub fn list(&self) -> Vec<Field> {
        self.fields
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Register a new field with synthesized metrics
    pub fn add(&self, input: CreateFieldInput) -> AppResult<Field> {
        validate_name(&input.name)?;
        validate_position(input.lat, input.lon)?;

        let metrics = synthetic::generate_metrics(input.lat, input.lon);
        let field = Field {
            id: Uuid::new_v4(),
            name: input.name,
            lat: input.lat,
            lon: input.lon,
            last_update: Utc::now(),
            soil_moisture: metrics.soil_moisture,
            temperature: metrics.temperature,
            ndvi: metrics.ndvi,
        };

        let mut fields = self.fields.lock().unwrap_or_else(PoisonError::into_inner);
        fields.push(field.clone());
        self.kv.set(FIELDS_KEY, &*fields)?;

        Ok(field)
    }

    /// Replace the field stored under `id` and refresh its update time
    pub fn update(&self, id: Uuid, input: UpdateFieldInput) -> AppResult<Field> {
        validate_name(&input.name)?;
        validate_position(input.lat, input.lon)?;
        validate_metrics(&input)?;

        let mut fields = self.fields.lock().unwrap_or_else(PoisonError::into_inner);
        let field = fields
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| AppError::NotFound("Field".to_string()))?;

        field.name = input.name;
        field.lat = input.lat;
        field.lon = input.lon;
        if let Some(soil_moisture) = input.soil_moisture {
            field.soil_moisture = soil_moisture;
        }
        if let Some(temperature) = input.temperature {
            field.temperature = temperature;
        }
        if let Some(ndvi) = input.ndvi {
            field.ndvi = ndvi;
        }
        field.last_update = Utc::now();

        let updated = field.clone();
        self.kv.set(FIELDS_KEY, &*fields)?;

        Ok(updated)
    }

    /// Remove the field stored under `id`.
    /// Removing an absent id is a silent no-op.
    pub fn remove(&self, id: Uuid) -> AppResult<()> {
        let mut fields = self.fields.lock().unwrap_or_else(PoisonError::into_inner);
        fields.retain(|f| f.id != id);
        self.kv.set(FIELDS_KEY, &*fields)?;

        Ok(())
    }
}

/// The three fields every fresh installation starts with
fn default_fields() -> Vec<Field> {
    let now = Utc::now();

    vec![
        Field {
            id: Uuid::new_v4(),
            name: "Polje Tuzla Sjever".to_string(),
            lat: 44.5475,
            lon: 18.6753,
            last_update: now,
            soil_moisture: 45,
            temperature: 24,
            ndvi: 0.72,
        },
        Field {
            id: Uuid::new_v4(),
            name: "Polje Lukavac".to_string(),
            lat: 44.5392,
            lon: 18.5281,
            last_update: now - Duration::days(1),
            soil_moisture: 28,
            temperature: 26,
            ndvi: 0.48,
        },
        Field {
            id: Uuid::new_v4(),
            name: "Polje Živinice".to_string(),
            lat: 44.4486,
            lon: 18.6489,
            last_update: now - Duration::days(2),
            soil_moisture: 18,
            temperature: 29,
            ndvi: 0.31,
        },
    ]
}

fn validate_name(name: &str) -> AppResult<()> {
    validate_field_name(name).map_err(|message| AppError::Validation {
        field: "name".to_string(),
        message: message.to_string(),
        message_bs: "Ime polja je obavezno".to_string(),
    })
}

/// Validate a coordinate pair, reporting the offending field
pub(crate) fn validate_position(lat: f64, lon: f64) -> AppResult<()> {
    validate_latitude(lat).map_err(|message| AppError::Validation {
        field: "lat".to_string(),
        message: message.to_string(),
        message_bs: "Unesite validnu geografsku širinu (-90 do 90)".to_string(),
    })?;
    validate_longitude(lon).map_err(|message| AppError::Validation {
        field: "lon".to_string(),
        message: message.to_string(),
        message_bs: "Unesite validnu geografsku dužinu (-180 do 180)".to_string(),
    })?;

    Ok(())
}

fn validate_metrics(input: &UpdateFieldInput) -> AppResult<()> {
    if let Some(soil_moisture) = input.soil_moisture {
        if !is_valid_soil_moisture(soil_moisture) {
            return Err(AppError::Validation {
                field: "soilMoisture".to_string(),
                message: "Soil moisture must be between 0 and 100".to_string(),
                message_bs: "Vlažnost tla mora biti između 0 i 100".to_string(),
            });
        }
    }
    if let Some(ndvi) = input.ndvi {
        if !is_valid_ndvi(ndvi) {
            return Err(AppError::Validation {
                field: "ndvi".to_string(),
                message: "NDVI must be between 0 and 1".to_string(),
                message_bs: "NDVI mora biti između 0 i 1".to_string(),
            });
        }
    }

    Ok(())
}
