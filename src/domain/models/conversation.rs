#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use chrono::Local;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Message;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// The conversation currently on screen. At most one exists at a time, and its
/// identifier is `None` until the server assigns one on the first reply.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Conversation {
    id: Option<String>,
    messages: Vec<Message>,
}

impl Conversation {
    pub fn id(&self) -> Option<&String> {
        return self.id.as_ref();
    }

    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    pub fn replace(&mut self, id: Option<String>, messages: Vec<Message>) {
        self.id = id;
        self.messages = messages;
    }

    pub fn clear(&mut self) {
        self.id = None;
        self.messages.clear();
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn set_id(&mut self, id: &str) {
        self.id = Some(id.to_string());
    }

    pub fn next_message_id(&self) -> i64 {
        let now = Local::now().timestamp_millis();
        if let Some(last) = self.messages.last() {
            if last.id >= now {
                return last.id + 1;
            }
        }

        return now;
    }
}
