//! Synthetic metric generator tests

use std::collections::HashSet;

use smart_field_backend::services::synthetic::generate_metrics;
use shared::{FieldStatus, Priority};

// ============================================================================
// Ranges
// ============================================================================

#[test]
fn test_generated_metrics_stay_in_range() {
    for _ in 0..500 {
        let metrics = generate_metrics(44.5, 18.6);

        assert!((15..65).contains(&metrics.soil_moisture));
        assert!((18..33).contains(&metrics.temperature));
        assert!((0.2..=0.8).contains(&metrics.ndvi));
        assert!((0.0..=8.0).contains(&metrics.precipitation));
    }
}

#[test]
fn test_generated_values_carry_fixed_precision() {
    for _ in 0..100 {
        let metrics = generate_metrics(44.5, 18.6);

        // One decimal for precipitation, two for NDVI
        let precipitation = metrics.precipitation * 10.0;
        assert!((precipitation - precipitation.round()).abs() < 1e-9);
        let ndvi = metrics.ndvi * 100.0;
        assert!((ndvi - ndvi.round()).abs() < 1e-9);
    }
}

#[test]
fn test_coordinates_are_echoed_back() {
    let metrics = generate_metrics(44.8789, 18.4281);
    assert_eq!((metrics.lat, metrics.lon), (44.8789, 18.4281));
}

// ============================================================================
// Classification Consistency
// ============================================================================

#[test]
fn test_status_and_advice_follow_generated_moisture() {
    for _ in 0..200 {
        let metrics = generate_metrics(44.0, 18.0);
        let expected = shared::assess(metrics.soil_moisture, metrics.ndvi);

        assert_eq!(metrics.status, expected.status);
        assert_eq!(metrics.advice, expected.advice);
    }
}

#[test]
fn test_priority_is_derived_from_status() {
    for _ in 0..200 {
        let metrics = generate_metrics(44.0, 18.0);

        let expected = match metrics.status {
            FieldStatus::Dry => Priority::Urgent,
            FieldStatus::Medium => Priority::High,
            FieldStatus::Healthy => Priority::Low,
            other => panic!("generator produced non-canonical status {}", other),
        };
        assert_eq!(metrics.priority, Some(expected));
    }
}

// ============================================================================
// Independence
// ============================================================================

#[test]
fn test_calls_with_identical_coordinates_are_independent() {
    // No memoization: repeated calls for one coordinate must not return a
    // single frozen snapshot
    let moistures: HashSet<i32> = (0..100)
        .map(|_| generate_metrics(44.5475, 18.6753).soil_moisture)
        .collect();

    assert!(moistures.len() > 1);
}
