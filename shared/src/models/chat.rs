//! Chat transcript models
//!
//! Messages are ephemeral: they live in memory for the lifetime of the chat
//! session and are only ever appended, never edited or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single message in the advisory chat
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Monotonically increasing within one transcript
    pub id: i64,
    pub text: String,
    pub sender: ChatSender,
    pub timestamp: DateTime<Utc>,
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Bot,
}
