//! Field metrics HTTP handler

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::services::field_store::validate_position;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct FieldDataQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Fetch field metrics for a coordinate
///
/// The gateway guarantees a response: live upstream data when available,
/// synthetic data of the same shape otherwise.
pub async fn get_field_data(
    State(state): State<AppState>,
    Query(query): Query<FieldDataQuery>,
) -> impl IntoResponse {
    if let Err(e) = validate_position(query.lat, query.lon) {
        return e.into_response();
    }

    let metrics = state.gateway.field_metrics(query.lat, query.lon).await;

    (StatusCode::OK, Json(metrics)).into_response()
}
