use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[async_trait]
pub trait Storage {
    /// Returns the saved token pair, or `None` when no usable pair exists.
    async fn read_tokens(&self) -> Option<TokenPair>;

    async fn write_tokens(&self, tokens: &TokenPair) -> Result<()>;

    async fn clear_tokens(&self) -> Result<()>;
}

pub type StorageBox = Box<dyn Storage + Send + Sync>;
