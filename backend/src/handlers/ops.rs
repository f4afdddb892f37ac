//! Operational pass-through handlers
//!
//! These forward to the upstream service verbatim. They are not covered by
//! the synthetic fallback, so upstream failures surface as transport errors.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::AppState;

/// Ask the upstream service to reload its meteorological data files
pub async fn reload_data(State(state): State<AppState>) -> impl IntoResponse {
    match state.upstream.reload_data().await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Fetch information about the upstream service's loaded data files
pub async fn get_data_info(State(state): State<AppState>) -> impl IntoResponse {
    match state.upstream.data_info().await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => e.into_response(),
    }
}
