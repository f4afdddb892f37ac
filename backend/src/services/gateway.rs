//! Data gateway with transparent synthetic fallback
//!
//! Callers never observe an upstream failure: a failed remote call is logged
//! and substituted with locally synthesized data of identical shape, once,
//! with no retry. Which path served a response is not visible to the caller.

use shared::FieldMetrics;

use crate::error::AppResult;
use crate::services::{chatbot, synthetic};

/// A source of field metrics and chat replies
pub trait FieldDataSource {
    fn field_metrics(
        &self,
        lat: f64,
        lon: f64,
    ) -> impl std::future::Future<Output = AppResult<FieldMetrics>> + Send;

    fn chat_reply(
        &self,
        message: &str,
        context: Option<&FieldMetrics>,
    ) -> impl std::future::Future<Output = AppResult<String>> + Send;
}

/// Local source backed by the synthetic generator and the rule-based
/// responder. Cannot fail.
#[derive(Clone, Copy, Default)]
pub struct SyntheticSource;

impl SyntheticSource {
    pub fn generate(&self, lat: f64, lon: f64) -> FieldMetrics {
        synthetic::generate_metrics(lat, lon)
    }

    pub fn reply(&self, message: &str) -> String {
        chatbot::local_reply(message)
    }
}

impl FieldDataSource for SyntheticSource {
    async fn field_metrics(&self, lat: f64, lon: f64) -> AppResult<FieldMetrics> {
        Ok(self.generate(lat, lon))
    }

    async fn chat_reply(&self, message: &str, _context: Option<&FieldMetrics>) -> AppResult<String> {
        Ok(self.reply(message))
    }
}

/// Decorator over a primary source that absorbs its failures
pub struct FallbackGateway<S> {
    primary: S,
    fallback: SyntheticSource,
}

impl<S: FieldDataSource> FallbackGateway<S> {
    pub fn new(primary: S) -> Self {
        Self {
            primary,
            fallback: SyntheticSource,
        }
    }

    /// Fetch metrics for a coordinate, substituting synthetic data on any
    /// transport, status or parse failure
    pub async fn field_metrics(&self, lat: f64, lon: f64) -> FieldMetrics {
        match self.primary.field_metrics(lat, lon).await {
            Ok(metrics) => metrics,
            Err(e) => {
                tracing::warn!("Upstream field data unavailable, serving synthetic data: {}", e);
                self.fallback.generate(lat, lon)
            }
        }
    }

    /// Ask the chatbot for a reply, substituting the rule-based responder on
    /// any failure
    pub async fn chat_reply(&self, message: &str, context: Option<&FieldMetrics>) -> String {
        match self.primary.chat_reply(message, context).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("Upstream chatbot unavailable, using local responder: {}", e);
                self.fallback.reply(message)
            }
        }
    }
}
