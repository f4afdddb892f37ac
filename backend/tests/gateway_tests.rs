//! Data gateway integration tests
//!
//! The gateway must hide upstream failures completely: a failing remote
//! source yields synthetic data of identical shape, a healthy remote source
//! is passed through untouched.

use smart_field_backend::error::{AppError, AppResult};
use smart_field_backend::services::gateway::{FallbackGateway, FieldDataSource};
use shared::{FieldMetrics, FieldStatus, Priority};

/// Remote source that always fails at the transport level
struct FailingSource;

impl FieldDataSource for FailingSource {
    async fn field_metrics(&self, _lat: f64, _lon: f64) -> AppResult<FieldMetrics> {
        Err(AppError::Transport("connection refused".to_string()))
    }

    async fn chat_reply(&self, _message: &str, _context: Option<&FieldMetrics>) -> AppResult<String> {
        Err(AppError::Transport("connection refused".to_string()))
    }
}

/// Remote source that answers with a fixed, four-tier payload
struct StaticSource(FieldMetrics);

impl FieldDataSource for StaticSource {
    async fn field_metrics(&self, _lat: f64, _lon: f64) -> AppResult<FieldMetrics> {
        Ok(self.0.clone())
    }

    async fn chat_reply(&self, _message: &str, _context: Option<&FieldMetrics>) -> AppResult<String> {
        Ok("Preporučujem navodnjavanje sutra ujutro.".to_string())
    }
}

fn critical_payload() -> FieldMetrics {
    FieldMetrics {
        lat: 44.0,
        lon: 18.0,
        soil_moisture: 19,
        precipitation: 0.4,
        temperature: 31,
        ndvi: 0.28,
        status: FieldStatus::Critical,
        advice: "Zalijte odmah!".to_string(),
        priority: Some(Priority::Urgent),
    }
}

// ============================================================================
// Field Metrics
// ============================================================================

#[tokio::test]
async fn test_failed_remote_call_serves_synthetic_metrics() {
    let gateway = FallbackGateway::new(FailingSource);

    let metrics = gateway.field_metrics(44.0, 18.0).await;

    assert_eq!((metrics.lat, metrics.lon), (44.0, 18.0));
    assert!((15..65).contains(&metrics.soil_moisture));
    assert!((18..33).contains(&metrics.temperature));
    assert!((0.2..=0.8).contains(&metrics.ndvi));
    assert!((0.0..=8.0).contains(&metrics.precipitation));
    assert!(!metrics.advice.is_empty());
    assert!(metrics.priority.is_some());
}

#[tokio::test]
async fn test_fallback_metrics_are_shaped_like_remote_metrics() {
    let remote = FallbackGateway::new(StaticSource(critical_payload()))
        .field_metrics(44.0, 18.0)
        .await;
    let synthetic = FallbackGateway::new(FailingSource)
        .field_metrics(44.0, 18.0)
        .await;

    let remote_json = serde_json::to_value(&remote).unwrap();
    let synthetic_json = serde_json::to_value(&synthetic).unwrap();

    let keys = |v: &serde_json::Value| {
        let mut keys: Vec<String> = v.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    };
    assert_eq!(keys(&remote_json), keys(&synthetic_json));
}

#[tokio::test]
async fn test_successful_remote_payload_is_used_as_is() {
    let payload = critical_payload();
    let gateway = FallbackGateway::new(StaticSource(payload.clone()));

    let metrics = gateway.field_metrics(44.0, 18.0).await;

    // The upstream four-tier status survives untouched
    assert_eq!(metrics, payload);
}

#[tokio::test]
async fn test_synthetic_status_matches_synthetic_moisture() {
    let gateway = FallbackGateway::new(FailingSource);

    for _ in 0..50 {
        let metrics = gateway.field_metrics(44.5, 18.6).await;
        let expected = shared::assess(metrics.soil_moisture, metrics.ndvi);
        assert_eq!(metrics.status, expected.status);
        assert_eq!(metrics.advice, expected.advice);
    }
}

// ============================================================================
// Chat
// ============================================================================

#[tokio::test]
async fn test_successful_chat_reply_is_passed_through() {
    let gateway = FallbackGateway::new(StaticSource(critical_payload()));

    let reply = gateway.chat_reply("Kada da zalijem?", None).await;
    assert_eq!(reply, "Preporučujem navodnjavanje sutra ujutro.");
}

#[tokio::test]
async fn test_failed_chat_falls_back_to_keyword_responder() {
    let gateway = FallbackGateway::new(FailingSource);

    let field = gateway.chat_reply("Kako je moje polje?", None).await;
    assert!(field.contains("NDVI indeks je 0.52"));

    let drought = gateway.chat_reply("Da li prijeti suša?", None).await;
    assert!(drought.contains("hitno navodnjavanje"));

    let rain = gateway.chat_reply("Hoće li pasti kiša?", None).await;
    assert!(rain.contains("padavine od 3-5mm"));

    let ndvi = gateway.chat_reply("Objasni mi ndvi", None).await;
    assert!(ndvi.contains("zdravlje vegetacije"));

    let fallback = gateway.chat_reply("Dobar dan", None).await;
    assert!(fallback.contains("Mogu vam pomoći"));
}

#[tokio::test]
async fn test_chat_context_does_not_change_fallback_reply() {
    let gateway = FallbackGateway::new(FailingSource);

    let without = gateway.chat_reply("Dobar dan", None).await;
    let with = gateway
        .chat_reply("Dobar dan", Some(&critical_payload()))
        .await;
    assert_eq!(without, with);
}
