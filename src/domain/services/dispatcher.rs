#[cfg(test)]
#[path = "dispatcher_test.rs"]
mod tests;

use anyhow::Result;

use super::ConversationStore;
use super::SessionManager;
use crate::domain::models::ApiError;
use crate::domain::models::ChatClientBox;
use crate::domain::models::Message;
use crate::domain::models::Role;

pub const SEND_FAILURE_REPLY: &str = "Sorry, something went wrong. Please try again.";

/// Sends user messages with optimistic local echo. One send is in flight at a
/// time, a second call while loading is dropped.
pub struct MessageDispatcher {
    chat: ChatClientBox,
    is_loading: bool,
}

impl MessageDispatcher {
    pub fn new(chat: ChatClientBox) -> MessageDispatcher {
        return MessageDispatcher {
            chat,
            is_loading: false,
        };
    }

    pub fn is_loading(&self) -> bool {
        return self.is_loading;
    }

    pub async fn send_message(
        &mut self,
        session: &mut SessionManager,
        store: &mut ConversationStore,
        text: &str,
    ) -> Result<()> {
        if self.is_loading {
            tracing::warn!("A send is already in flight, ignoring the new message");
            return Ok(());
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        let access_token = session.require_token()?;

        self.is_loading = true;
        let target_id = store.active_id().cloned();

        let user_message = Message::new(store.next_message_id(), Role::User, trimmed);
        store.push_message(user_message);

        let res = self
            .chat
            .send_message(&access_token, trimmed, target_id.as_deref())
            .await;

        match res {
            Ok(reply) => {
                if store.active_id().cloned() == target_id {
                    store.adopt_conversation_id(&reply.conversation_id);

                    let metadata = serde_json::to_value(&reply).unwrap_or_default();
                    let assistant_message =
                        Message::new(store.next_message_id(), Role::Assistant, &reply.message)
                            .with_metadata(metadata);
                    store.push_message(assistant_message);
                } else {
                    tracing::warn!(
                        conversation_id = reply.conversation_id,
                        "The conversation changed mid-send, dropping the reply"
                    );
                }

                store.load_summaries(session.state()).await;
            }
            Err(err) => {
                if err.downcast_ref::<ApiError>() == Some(&ApiError::Unauthorized) {
                    session.expire().await;
                }

                tracing::error!(error = ?err, "Sending the message failed");
                let failure =
                    Message::new_error(store.next_message_id(), Role::Assistant, SEND_FAILURE_REPLY);
                store.push_message(failure);
            }
        }

        self.is_loading = false;

        return Ok(());
    }
}
