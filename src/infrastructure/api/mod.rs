pub mod auth;
pub mod chat;
pub mod documents;

use anyhow::Result;
use serde::de::DeserializeOwned;

use crate::domain::models::ApiError;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> ApiError {
        return ApiError::Network(err.to_string());
    }
}

async fn extract_detail(res: reqwest::Response) -> String {
    let status = res.status().as_u16();
    if let Ok(body) = res.json::<serde_json::Value>().await {
        if let Some(detail) = body.get("detail") {
            if let Some(text) = detail.as_str() {
                return text.to_string();
            }
            return detail.to_string();
        }
    }

    return format!("the server returned status {status}");
}

async fn parse_response<T: DeserializeOwned>(res: reqwest::Response) -> Result<T> {
    let status = res.status().as_u16();
    if status == 401 {
        return Err(ApiError::Unauthorized.into());
    }
    if status >= 400 {
        let detail = extract_detail(res).await;
        return Err(ApiError::Server { status, detail }.into());
    }

    return Ok(res.json::<T>().await.map_err(ApiError::from)?);
}

async fn expect_success(res: reqwest::Response) -> Result<()> {
    let status = res.status().as_u16();
    if status == 401 {
        return Err(ApiError::Unauthorized.into());
    }
    if status >= 400 {
        let detail = extract_detail(res).await;
        return Err(ApiError::Server { status, detail }.into());
    }

    return Ok(());
}
