#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use chrono::Local;
use chrono::SecondsFormat;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Role;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub role: Role,
    pub content: String,
    pub timestamp: String,
    #[serde(default)]
    pub is_error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Message {
    pub fn new(id: i64, role: Role, content: &str) -> Message {
        return Message {
            id,
            role,
            content: content.to_string(),
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
            is_error: false,
            metadata: None,
        };
    }

    pub fn new_error(id: i64, role: Role, content: &str) -> Message {
        let mut message = Message::new(id, role, content);
        message.is_error = true;
        return message;
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Message {
        self.metadata = Some(metadata);
        return self;
    }
}
