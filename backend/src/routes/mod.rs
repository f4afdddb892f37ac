//! Route definitions for the Smart Field server

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Field registry
        .nest("/fields", field_routes())
        // Metrics for an arbitrary coordinate (map click)
        .route("/field-data", get(handlers::get_field_data))
        // Advisory chatbot
        .nest("/chatbot", chatbot_routes())
        // Operational pass-through to the upstream service
        .route("/reload-data", post(handlers::reload_data))
        .route("/data-info", get(handlers::get_data_info))
}

/// Field registry routes
fn field_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_fields).post(handlers::create_field))
        .route(
            "/:field_id",
            put(handlers::update_field).delete(handlers::delete_field),
        )
}

/// Chatbot routes
fn chatbot_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::send_chat_message))
        .route("/history", get(handlers::get_chat_history))
}
