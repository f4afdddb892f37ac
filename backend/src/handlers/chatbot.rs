//! Advisory chatbot HTTP handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::models::{ChatSender, FieldMetrics};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequestBody {
    pub message: String,
    #[serde(rename = "fieldData")]
    pub field_data: Option<FieldMetrics>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponseBody {
    pub response: String,
}

/// Send a message to the chatbot and record the exchange in the transcript
pub async fn send_chat_message(
    State(state): State<AppState>,
    Json(body): Json<ChatRequestBody>,
) -> impl IntoResponse {
    state.chat_log.append(ChatSender::User, body.message.clone());

    let reply = state
        .gateway
        .chat_reply(&body.message, body.field_data.as_ref())
        .await;

    state.chat_log.append(ChatSender::Bot, reply.clone());

    (StatusCode::OK, Json(ChatResponseBody { response: reply })).into_response()
}

/// Return the in-memory chat transcript for this process
pub async fn get_chat_history(State(state): State<AppState>) -> impl IntoResponse {
    let messages = state.chat_log.history();

    (StatusCode::OK, Json(serde_json::json!({ "messages": messages }))).into_response()
}
