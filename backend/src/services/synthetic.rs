//! Synthetic field metrics
//!
//! Stands in for the upstream data service: seeds metrics for newly
//! registered fields and serves as the gateway's offline fallback. Every call
//! draws fresh values; identical coordinates do not memoize.

use rand::Rng;

use shared::{assess, FieldMetrics};

/// Generate a plausible metric snapshot for a coordinate
pub fn generate_metrics(lat: f64, lon: f64) -> FieldMetrics {
    let mut rng = rand::thread_rng();

    let soil_moisture = rng.gen_range(15..65);
    let precipitation = round_to(rng.gen_range(0.0..8.0), 1);
    let temperature = rng.gen_range(18..33);
    let ndvi = round_to(rng.gen_range(0.2..0.8), 2);

    let assessment = assess(soil_moisture, ndvi);

    FieldMetrics {
        lat,
        lon,
        soil_moisture,
        precipitation,
        temperature,
        ndvi,
        status: assessment.status,
        advice: assessment.advice,
        priority: Some(assessment.status.priority()),
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.14159, 1), 3.1);
        assert_eq!(round_to(0.6789, 2), 0.68);
        assert_eq!(round_to(7.0, 1), 7.0);
    }
}
