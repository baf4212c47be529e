#[cfg(test)]
#[path = "token_file_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Storage;
use crate::domain::models::TokenPair;

pub struct TokenFile {
    pub file_path: path::PathBuf,
}

impl Default for TokenFile {
    fn default() -> TokenFile {
        let configured = Config::get(ConfigKey::TokenFile);
        if !configured.is_empty() {
            return TokenFile::new(path::PathBuf::from(configured));
        }

        let file_path = dirs::cache_dir().unwrap().join("parley/tokens.json");
        return TokenFile::new(file_path);
    }
}

impl TokenFile {
    pub fn new(file_path: path::PathBuf) -> TokenFile {
        return TokenFile { file_path };
    }
}

#[async_trait]
impl Storage for TokenFile {
    #[allow(clippy::implicit_return)]
    async fn read_tokens(&self) -> Option<TokenPair> {
        if !self.file_path.exists() {
            return None;
        }

        let payload = match fs::read_to_string(&self.file_path).await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = ?err, "Unable to read the token file");
                return None;
            }
        };

        match serde_json::from_str::<TokenPair>(&payload) {
            Ok(tokens) => {
                if tokens.access_token.is_empty() {
                    return None;
                }
                return Some(tokens);
            }
            Err(err) => {
                tracing::warn!(error = ?err, "Token file is not valid JSON");
                return None;
            }
        }
    }

    #[allow(clippy::implicit_return)]
    async fn write_tokens(&self, tokens: &TokenPair) -> Result<()> {
        let payload = serde_json::to_string(tokens)?;

        if let Some(parent) = self.file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = fs::File::create(&self.file_path).await?;
        file.write_all(payload.as_bytes()).await?;

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn clear_tokens(&self) -> Result<()> {
        if !self.file_path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.file_path).await?;
        return Ok(());
    }
}
