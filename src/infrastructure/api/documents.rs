#[cfg(test)]
#[path = "documents_test.rs"]
mod tests;

use std::path::Path;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Serialize;
use tokio::fs;

use super::parse_response;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ApiError;
use crate::domain::models::DocumentClient;
use crate::domain::models::IngestReceipt;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
struct TextBody {
    text: String,
    source: String,
}

pub struct HttpDocumentClient {
    url: String,
    timeout: String,
}

impl Default for HttpDocumentClient {
    fn default() -> HttpDocumentClient {
        return HttpDocumentClient {
            url: Config::get(ConfigKey::ApiUrl),
            timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

impl HttpDocumentClient {
    fn client(&self) -> Result<reqwest::Client> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .build()?;

        return Ok(client);
    }
}

#[async_trait]
impl DocumentClient for HttpDocumentClient {
    #[allow(clippy::implicit_return)]
    async fn add_text(&self, access_token: &str, text: &str, source: &str) -> Result<IngestReceipt> {
        let body = TextBody {
            text: text.to_string(),
            source: source.to_string(),
        };

        let res = self
            .client()?
            .post(format!("{url}/documents/text", url = self.url))
            .header("Authorization", format!("Bearer {access_token}"))
            .json(&body)
            .send()
            .await
            .map_err(ApiError::from)?;

        return parse_response::<IngestReceipt>(res).await;
    }

    #[allow(clippy::implicit_return)]
    async fn upload_file(&self, access_token: &str, path: &Path) -> Result<IngestReceipt> {
        if !path.exists() {
            bail!(format!("No file found at {}", path.to_string_lossy()));
        }

        let file_name = path
            .file_name()
            .map(|name| return name.to_string_lossy().to_string())
            .unwrap_or_else(|| return "upload".to_string());

        let bytes = fs::read(path).await?;
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let res = self
            .client()?
            .post(format!("{url}/documents/upload", url = self.url))
            .header("Authorization", format!("Bearer {access_token}"))
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::from)?;

        return parse_response::<IngestReceipt>(res).await;
    }
}
