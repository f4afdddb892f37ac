//! Smart Field (Pametna Njiva) - Backend Server
//!
//! A field-monitoring service for small farmers: registered field locations,
//! agronomic metrics with a synthetic fallback when the upstream data service
//! is unreachable, and an advisory chatbot.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod storage;

pub use config::Config;

use external::AgroApiClient;
use services::{ChatLog, FallbackGateway, FieldStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FieldStore>,
    pub gateway: Arc<FallbackGateway<AgroApiClient>>,
    pub upstream: AgroApiClient,
    pub chat_log: Arc<ChatLog>,
    pub config: Arc<Config>,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Smart Field API v1.0"
}
