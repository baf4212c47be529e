#[cfg(test)]
#[path = "conversation_store_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use chrono::Local;
use tokio::sync::mpsc;

use crate::domain::models::ChatClientBox;
use crate::domain::models::Confirmation;
use crate::domain::models::Conversation;
use crate::domain::models::ConversationSummary;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::Session;
use crate::domain::models::ValidationError;

/// Holds the conversation summaries plus the single active conversation, and
/// keeps both in sync with the server.
pub struct ConversationStore {
    summaries: Vec<ConversationSummary>,
    active: Conversation,
    chat: ChatClientBox,
    tx: mpsc::UnboundedSender<Event>,
}

impl ConversationStore {
    pub fn new(chat: ChatClientBox, tx: mpsc::UnboundedSender<Event>) -> ConversationStore {
        return ConversationStore {
            summaries: vec![],
            active: Conversation::default(),
            chat,
            tx,
        };
    }

    pub fn summaries(&self) -> &[ConversationSummary] {
        return &self.summaries;
    }

    pub fn active(&self) -> &Conversation {
        return &self.active;
    }

    pub fn active_id(&self) -> Option<&String> {
        return self.active.id();
    }

    pub fn next_message_id(&self) -> i64 {
        return self.active.next_message_id();
    }

    /// Refreshes the summary list. A failure keeps whatever was listed before,
    /// the store never drops data on a flaky fetch.
    pub async fn load_summaries(&mut self, session: &Session) {
        if !session.is_authenticated() {
            return;
        }

        match self.chat.list_conversations(session.access_token()).await {
            Ok(summaries) => {
                self.summaries = summaries;
                self.publish(Event::SummariesReloaded(self.summaries.len()));
            }
            Err(err) => {
                tracing::warn!(error = ?err, "Unable to refresh conversations, keeping the current list");
            }
        }
    }

    pub async fn select_conversation(&mut self, session: &Session, id: &str) -> Result<()> {
        if !session.is_authenticated() {
            bail!(ValidationError::NotSignedIn);
        }

        let fetched = self
            .chat
            .get_conversation(session.access_token(), id)
            .await?;

        // Remote history carries no message ids, they are assigned locally.
        let base = Local::now().timestamp_millis();
        let messages = fetched
            .messages
            .iter()
            .enumerate()
            .map(|(idx, remote)| {
                let mut message = Message::new(base + idx as i64, remote.role, &remote.content);
                if !remote.timestamp.is_empty() {
                    message.timestamp = remote.timestamp.to_string();
                }
                return message;
            })
            .collect::<Vec<Message>>();

        let conversation_id = if fetched.id.is_empty() {
            id.to_string()
        } else {
            fetched.id
        };

        self.active.replace(Some(conversation_id.to_string()), messages);
        self.publish(Event::ActiveConversationChanged(Some(conversation_id)));

        return Ok(());
    }

    pub fn new_conversation(&mut self) {
        self.active.clear();
        self.publish(Event::ActiveConversationChanged(None));
    }

    pub async fn delete_conversation(
        &mut self,
        session: &Session,
        id: &str,
        confirmation: Confirmation,
    ) -> Result<()> {
        if confirmation == Confirmation::Declined {
            return Ok(());
        }
        if !session.is_authenticated() {
            bail!(ValidationError::NotSignedIn);
        }

        self.chat
            .delete_conversation(session.access_token(), id)
            .await?;

        if self.active.id().map(|active| return active.as_str()) == Some(id) {
            self.active.clear();
            self.publish(Event::ActiveConversationChanged(None));
        }

        self.load_summaries(session).await;

        return Ok(());
    }

    pub fn push_message(&mut self, message: Message) {
        self.active.push(message.clone());
        self.publish(Event::MessageAppended(message));
    }

    pub fn adopt_conversation_id(&mut self, id: &str) {
        if self.active.id().map(|active| return active.as_str()) == Some(id) {
            return;
        }

        self.active.set_id(id);
        self.publish(Event::ActiveConversationChanged(Some(id.to_string())));
    }

    fn publish(&self, event: Event) {
        if let Err(err) = self.tx.send(event) {
            tracing::warn!(error = ?err, "Unable to publish conversation event");
        }
    }
}
