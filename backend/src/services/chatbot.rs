//! Rule-based advisory responder and the in-memory chat transcript
//!
//! The responder is the offline stand-in for the upstream chatbot: it matches
//! keywords in the farmer's message and answers with one of five fixed
//! replies. The transcript is ephemeral and append-only, living for the
//! lifetime of the process.

use std::sync::{Mutex, PoisonError};

use chrono::Utc;

use shared::{ChatMessage, ChatSender};

const REPLY_FIELD: &str = "Vaše polje kod Tuzle pokazuje umjerenu vlažnost tla (32%). \
    Preporučujem navodnjavanje u narednih 2-3 dana. NDVI indeks je 0.52, što ukazuje na \
    blagi stres vegetacije.";
const REPLY_DROUGHT: &str = "Detektovao sam niska vlažnost tla na nekoliko lokacija. \
    Preporučujem hitno navodnjavanje i razmatranje sistema za automatsko navodnjavanje.";
const REPLY_RAIN: &str = "Prema satelitskim podacima, očekuju se padavine od 3-5mm u \
    naredna 3 dana. To bi trebalo poboljšati vlažnost tla.";
const REPLY_NDVI: &str = "NDVI indeks pokazuje zdravlje vegetacije. Vrijednosti iznad 0.6 \
    su odlične, 0.4-0.6 su umjerene, ispod 0.4 ukazuju na stres biljaka.";
const REPLY_DEFAULT: &str = "Mogu vam pomoći sa informacijama o vlažnosti tla, padavinama, \
    temperaturi i zdravlju biljaka. Kliknite na mapu da vidite podatke za određenu lokaciju.";

/// Answer a message by keyword matching
pub fn local_reply(message: &str) -> String {
    let lower = message.to_lowercase();

    let reply = if lower.contains("tuzla") || lower.contains("polje") {
        REPLY_FIELD
    } else if lower.contains("suša") || lower.contains("suho") {
        REPLY_DROUGHT
    } else if lower.contains("kiša") || lower.contains("padavine") {
        REPLY_RAIN
    } else if lower.contains("ndvi") || lower.contains("zdravlje") {
        REPLY_NDVI
    } else {
        REPLY_DEFAULT
    };

    reply.to_string()
}

/// Append-only chat transcript with monotonic message ids
pub struct ChatLog {
    messages: Mutex<Vec<ChatMessage>>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Append a message and return the stored record
    pub fn append(&self, sender: ChatSender, text: impl Into<String>) -> ChatMessage {
        let mut messages = self.messages.lock().unwrap_or_else(PoisonError::into_inner);

        let message = ChatMessage {
            id: messages.len() as i64 + 1,
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        };
        messages.push(message.clone());

        message
    }

    /// Snapshot of the transcript in append order
    pub fn history(&self) -> Vec<ChatMessage> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_keyword_routing() {
        assert_eq!(local_reply("Kako je moje polje?"), REPLY_FIELD);
        assert_eq!(local_reply("Prijeti li suša?"), REPLY_DROUGHT);
        assert_eq!(local_reply("Hoće li kiša?"), REPLY_RAIN);
        assert_eq!(local_reply("Šta znači NDVI?"), REPLY_NDVI);
        assert_eq!(local_reply("Pozdrav"), REPLY_DEFAULT);
    }

    #[test]
    fn test_reply_matching_is_case_insensitive() {
        assert_eq!(local_reply("TUZLA"), REPLY_FIELD);
        assert_eq!(local_reply("Ndvi indeks?"), REPLY_NDVI);
    }

    #[test]
    fn test_chat_log_ids_are_monotonic() {
        let log = ChatLog::new();
        let first = log.append(ChatSender::User, "zdravo");
        let second = log.append(ChatSender::Bot, "pozdrav");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(log.history().len(), 2);
    }
}
