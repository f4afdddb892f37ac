//! Client for the upstream agronomic data service
//!
//! The service exposes field metrics derived from meteorological data, an
//! AI-assisted chatbot, and a pair of operational endpoints for its data
//! files. Any transport, status or parse failure maps to a transport error;
//! the gateway decides what to do with it.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared::FieldMetrics;

use crate::error::{AppError, AppResult};
use crate::services::gateway::FieldDataSource;

/// Agronomic data service client
#[derive(Clone)]
pub struct AgroApiClient {
    client: Client,
    base_url: String,
}

/// Chatbot request body
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    #[serde(rename = "fieldData", skip_serializing_if = "Option::is_none")]
    field_data: Option<&'a FieldMetrics>,
}

/// Chatbot response body
#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

/// Health report of the upstream service
#[derive(Debug, Deserialize)]
pub struct UpstreamHealth {
    pub status: String,
}

impl AgroApiClient {
    /// Create a new client for the given base URL (e.g.
    /// `http://localhost:5000/api`)
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch field metrics by GPS coordinates
    pub async fn fetch_field_data(&self, lat: f64, lon: f64) -> AppResult<FieldMetrics> {
        let url = format!("{}/field-data?lat={}&lon={}", self.base_url, lat, lon);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("field data request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Transport(format!(
                "field data request returned {}: {}",
                status, body
            )));
        }

        response
            .json::<FieldMetrics>()
            .await
            .map_err(|e| AppError::Transport(format!("failed to parse field data response: {}", e)))
    }

    /// Send a chat message, optionally with the metrics of the field the
    /// farmer is asking about
    pub async fn send_chat_message(
        &self,
        message: &str,
        field_data: Option<&FieldMetrics>,
    ) -> AppResult<String> {
        let url = format!("{}/chatbot", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest { message, field_data })
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("chatbot request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Transport(format!(
                "chatbot request returned {}: {}",
                status, body
            )));
        }

        let data: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::Transport(format!("failed to parse chatbot response: {}", e)))?;

        Ok(data.response)
    }

    /// Fetch the upstream health report
    pub async fn health(&self) -> AppResult<UpstreamHealth> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("health request failed: {}", e)))?;

        response
            .json::<UpstreamHealth>()
            .await
            .map_err(|e| AppError::Transport(format!("failed to parse health response: {}", e)))
    }

    /// True when the upstream service reports itself healthy
    pub async fn is_healthy(&self) -> bool {
        matches!(self.health().await, Ok(health) if health.status == "healthy")
    }

    /// Ask the upstream service to reload its data files. Opaque pass-through.
    pub async fn reload_data(&self) -> AppResult<Value> {
        let url = format!("{}/reload-data", self.base_url);

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("reload request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Transport(format!(
                "reload request returned {}",
                response.status()
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::Transport(format!("failed to parse reload response: {}", e)))
    }

    /// Fetch information about the upstream data files. Opaque pass-through.
    pub async fn data_info(&self) -> AppResult<Value> {
        let url = format!("{}/data-info", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("data info request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Transport(format!(
                "data info request returned {}",
                response.status()
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::Transport(format!("failed to parse data info response: {}", e)))
    }
}

impl FieldDataSource for AgroApiClient {
    async fn field_metrics(&self, lat: f64, lon: f64) -> AppResult<FieldMetrics> {
        self.fetch_field_data(lat, lon).await
    }

    async fn chat_reply(&self, message: &str, context: Option<&FieldMetrics>) -> AppResult<String> {
        self.send_chat_message(message, context).await
    }
}
