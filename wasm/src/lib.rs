//! WebAssembly module for the Smart Field platform
//!
//! Provides client-side computation for:
//! - Field status classification and advice
//! - NDVI display legend
//! - Offline form validation

use serde::Deserialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("smart-field wasm module initialized"));
}

/// Classify readings into a status tier
#[wasm_bindgen]
pub fn field_status(soil_moisture: i32, ndvi: f64) -> String {
    let assessment = shared::assess(soil_moisture, ndvi);
    assessment.status.to_string()
}

/// Advice text for a set of readings
#[wasm_bindgen]
pub fn field_advice(soil_moisture: i32, ndvi: f64) -> String {
    let assessment = shared::assess(soil_moisture, ndvi);
    assessment.advice
}

/// Display legend tier for an NDVI reading
#[wasm_bindgen]
pub fn vegetation_legend(ndvi: f64) -> String {
    shared::vegetation_status(ndvi).to_string()
}

/// Check a field name without a server round-trip
#[wasm_bindgen]
pub fn is_valid_field_name(name: &str) -> bool {
    shared::validate_field_name(name).is_ok()
}

/// Check a coordinate pair without a server round-trip
#[wasm_bindgen]
pub fn is_valid_coordinates(lat: f64, lon: f64) -> bool {
    shared::validate_coordinates(lat, lon).is_ok()
}

/// Add-field form payload
#[derive(Deserialize)]
struct FieldForm {
    name: String,
    lat: f64,
    lon: f64,
}

/// Validate an add-field form payload.
/// Returns the name of the first offending field, or an empty string when
/// the form is valid.
#[wasm_bindgen]
pub fn validate_field_form(form_json: &str) -> Result<String, JsValue> {
    let form: FieldForm = serde_json::from_str(form_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid form JSON: {}", e)))?;

    if shared::validate_field_name(&form.name).is_err() {
        return Ok("name".to_string());
    }
    if shared::validate_latitude(form.lat).is_err() {
        return Ok("lat".to_string());
    }
    if shared::validate_longitude(form.lon).is_err() {
        return Ok("lon".to_string());
    }

    Ok(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_status() {
        assert_eq!(field_status(18, 0.3), "dry");
        assert_eq!(field_status(28, 0.5), "medium");
        assert_eq!(field_status(45, 0.7), "healthy");
    }

    #[test]
    fn test_vegetation_legend() {
        assert_eq!(vegetation_legend(0.72), "healthy");
        assert_eq!(vegetation_legend(0.48), "medium");
        assert_eq!(vegetation_legend(0.31), "dry");
    }

    #[test]
    fn test_coordinate_checks() {
        assert!(is_valid_coordinates(44.5, 18.6));
        assert!(!is_valid_coordinates(95.0, 18.6));
        assert!(!is_valid_coordinates(44.5, 200.0));
    }

    #[test]
    fn test_validate_field_form() {
        let valid = r#"{"name": "Polje Test", "lat": 44.5, "lon": 18.6}"#;
        assert_eq!(validate_field_form(valid).unwrap(), "");

        let empty_name = r#"{"name": "  ", "lat": 44.5, "lon": 18.6}"#;
        assert_eq!(validate_field_form(empty_name).unwrap(), "name");

        let bad_lat = r#"{"name": "Polje Test", "lat": 120.0, "lon": 18.6}"#;
        assert_eq!(validate_field_form(bad_lat).unwrap(), "lat");

        assert!(validate_field_form("not json").is_err());
    }
}
