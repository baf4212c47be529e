#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::expect_success;
use super::parse_response;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ApiError;
use crate::domain::models::ChatClient;
use crate::domain::models::ChatReply;
use crate::domain::models::ConversationSummary;
use crate::domain::models::RemoteConversation;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
struct ChatBody {
    message: String,
    conversation_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ConversationListResponse {
    #[serde(default)]
    conversations: Vec<ConversationSummary>,
}

pub struct HttpChatClient {
    url: String,
    timeout: String,
}

impl Default for HttpChatClient {
    fn default() -> HttpChatClient {
        return HttpChatClient {
            url: Config::get(ConfigKey::ApiUrl),
            timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

impl HttpChatClient {
    fn client(&self) -> Result<reqwest::Client> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .build()?;

        return Ok(client);
    }
}

#[async_trait]
impl ChatClient for HttpChatClient {
    #[allow(clippy::implicit_return)]
    async fn send_message(
        &self,
        access_token: &str,
        message: &str,
        conversation_id: Option<&str>,
    ) -> Result<ChatReply> {
        let body = ChatBody {
            message: message.to_string(),
            conversation_id: conversation_id.map(|id| return id.to_string()),
        };

        let res = self
            .client()?
            .post(format!("{url}/chat", url = self.url))
            .header("Authorization", format!("Bearer {access_token}"))
            .json(&body)
            .send()
            .await
            .map_err(ApiError::from)?;

        return parse_response::<ChatReply>(res).await;
    }

    #[allow(clippy::implicit_return)]
    async fn list_conversations(&self, access_token: &str) -> Result<Vec<ConversationSummary>> {
        let res = self
            .client()?
            .get(format!("{url}/chat/conversations", url = self.url))
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(ApiError::from)?;

        let list = parse_response::<ConversationListResponse>(res).await?;
        return Ok(list.conversations);
    }

    #[allow(clippy::implicit_return)]
    async fn get_conversation(&self, access_token: &str, id: &str) -> Result<RemoteConversation> {
        let res = self
            .client()?
            .get(format!("{url}/chat/conversations/{id}", url = self.url))
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(ApiError::from)?;

        return parse_response::<RemoteConversation>(res).await;
    }

    #[allow(clippy::implicit_return)]
    async fn delete_conversation(&self, access_token: &str, id: &str) -> Result<()> {
        let res = self
            .client()?
            .delete(format!("{url}/chat/conversations/{id}", url = self.url))
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(ApiError::from)?;

        return expect_success(res).await;
    }
}
