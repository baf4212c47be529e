use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::ConversationSummary;
use super::Role;
use super::User;

#[derive(Clone, Debug, Deserialize)]
pub struct AuthPayload {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
    pub conversation_id: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RemoteMessage {
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RemoteConversation {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub messages: Vec<RemoteMessage>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IngestReceipt {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub chunks_added: u64,
}

#[async_trait]
pub trait AuthClient {
    /// Exchanges credentials for a token pair. Errors surface as [`super::ApiError`]
    /// when the server rejects the request.
    async fn login(&self, email: &str, password: &str) -> Result<AuthPayload>;

    /// Creates an account and returns a token pair, signing the new user in.
    async fn signup(&self, email: &str, name: &str, password: &str) -> Result<AuthPayload>;

    /// Invalidates the token server side.
    async fn logout(&self, access_token: &str) -> Result<()>;

    async fn get_profile(&self, access_token: &str) -> Result<User>;

    async fn update_profile(&self, access_token: &str, update: &ProfileUpdate) -> Result<User>;

    async fn delete_account(&self, access_token: &str) -> Result<()>;
}

#[async_trait]
pub trait ChatClient {
    /// Sends a message, optionally continuing an existing conversation. The
    /// reply carries the canonical conversation id assigned by the server.
    async fn send_message(
        &self,
        access_token: &str,
        message: &str,
        conversation_id: Option<&str>,
    ) -> Result<ChatReply>;

    async fn list_conversations(&self, access_token: &str) -> Result<Vec<ConversationSummary>>;

    async fn get_conversation(&self, access_token: &str, id: &str) -> Result<RemoteConversation>;

    async fn delete_conversation(&self, access_token: &str, id: &str) -> Result<()>;
}

#[async_trait]
pub trait DocumentClient {
    /// Stores a snippet of text in the knowledge base.
    async fn add_text(&self, access_token: &str, text: &str, source: &str) -> Result<IngestReceipt>;

    /// Uploads a local file to the knowledge base.
    async fn upload_file(&self, access_token: &str, path: &Path) -> Result<IngestReceipt>;
}

pub type AuthClientBox = Box<dyn AuthClient + Send + Sync>;
pub type ChatClientBox = Box<dyn ChatClient + Send + Sync>;
pub type DocumentClientBox = Box<dyn DocumentClient + Send + Sync>;
