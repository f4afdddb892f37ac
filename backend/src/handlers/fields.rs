//! Field registry HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::services::field_store::{CreateFieldInput, UpdateFieldInput};
use crate::AppState;

/// List all registered fields
pub async fn list_fields(State(state): State<AppState>) -> impl IntoResponse {
    let fields = state.store.list();

    (StatusCode::OK, Json(serde_json::json!({ "fields": fields }))).into_response()
}

/// Register a new field
pub async fn create_field(
    State(state): State<AppState>,
    Json(input): Json<CreateFieldInput>,
) -> impl IntoResponse {
    match state.store.add(input) {
        Ok(field) => (StatusCode::CREATED, Json(field)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update a field
pub async fn update_field(
    State(state): State<AppState>,
    Path(field_id): Path<Uuid>,
    Json(input): Json<UpdateFieldInput>,
) -> impl IntoResponse {
    match state.store.update(field_id, input) {
        Ok(field) => (StatusCode::OK, Json(field)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a field. Client-side confirmation happens before this is called;
/// deleting an absent id is a no-op.
pub async fn delete_field(
    State(state): State<AppState>,
    Path(field_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.store.remove(field_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
