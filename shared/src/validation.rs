//! Validation utilities for the Smart Field platform
//!
//! Field input is validated before anything is persisted: no field with an
//! empty name or out-of-range coordinates may ever reach the store.

// ============================================================================
// Field Input Validations
// ============================================================================

/// Validate a user-supplied field name
pub fn validate_field_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Field name cannot be empty");
    }
    Ok(())
}

/// Validate a latitude in decimal degrees
pub fn validate_latitude(lat: f64) -> Result<(), &'static str> {
    if !lat.is_finite() {
        return Err("Latitude must be a number");
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err("Latitude must be between -90 and 90");
    }
    Ok(())
}

/// Validate a longitude in decimal degrees
pub fn validate_longitude(lon: f64) -> Result<(), &'static str> {
    if !lon.is_finite() {
        return Err("Longitude must be a number");
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate a coordinate pair
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), &'static str> {
    validate_latitude(lat)?;
    validate_longitude(lon)?;
    Ok(())
}

// ============================================================================
// Reading Range Checks
// ============================================================================

/// Check that a soil moisture reading is a valid percentage
pub fn is_valid_soil_moisture(moisture: i32) -> bool {
    (0..=100).contains(&moisture)
}

/// Check that an NDVI reading is inside the index domain used here
pub fn is_valid_ndvi(ndvi: f64) -> bool {
    ndvi.is_finite() && (0.0..=1.0).contains(&ndvi)
}
