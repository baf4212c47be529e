#[cfg(test)]
#[path = "auth_test.rs"]
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
use crate::domain::models::AuthClient;
use crate::domain::models::AuthPayload;
use crate::domain::models::ProfileUpdate;
use crate::domain::models::User;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
struct SignupBody {
    email: String,
    name: String,
    password: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ProfileResponse {
    id: String,
    email: String,
    name: Option<String>,
    #[serde(default)]
    created_at: String,
    #[serde(default)]
    updated_at: String,
}

impl From<ProfileResponse> for User {
    fn from(res: ProfileResponse) -> User {
        return User {
            id: res.id,
            email: res.email,
            name: res.name,
        };
    }
}

pub struct HttpAuthClient {
    url: String,
    timeout: String,
}

impl Default for HttpAuthClient {
    fn default() -> HttpAuthClient {
        return HttpAuthClient {
            url: Config::get(ConfigKey::ApiUrl),
            timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

impl HttpAuthClient {
    fn client(&self) -> Result<reqwest::Client> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .build()?;

        return Ok(client);
    }
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    #[allow(clippy::implicit_return)]
    async fn login(&self, email: &str, password: &str) -> Result<AuthPayload> {
        let res = self
            .client()?
            .post(format!("{url}/auth/login", url = self.url))
            .form(&[("username", email), ("password", password)])
            .send()
            .await
            .map_err(ApiError::from)?;

        return parse_response::<AuthPayload>(res).await;
    }

    #[allow(clippy::implicit_return)]
    async fn signup(&self, email: &str, name: &str, password: &str) -> Result<AuthPayload> {
        let body = SignupBody {
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
        };

        let res = self
            .client()?
            .post(format!("{url}/auth/signup", url = self.url))
            .json(&body)
            .send()
            .await
            .map_err(ApiError::from)?;

        return parse_response::<AuthPayload>(res).await;
    }

    #[allow(clippy::implicit_return)]
    async fn logout(&self, access_token: &str) -> Result<()> {
        let res = self
            .client()?
            .post(format!("{url}/auth/logout", url = self.url))
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(ApiError::from)?;

        return expect_success(res).await;
    }

    #[allow(clippy::implicit_return)]
    async fn get_profile(&self, access_token: &str) -> Result<User> {
        let res = self
            .client()?
            .get(format!("{url}/users/me", url = self.url))
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(ApiError::from)?;

        let profile = parse_response::<ProfileResponse>(res).await?;
        return Ok(profile.into());
    }

    #[allow(clippy::implicit_return)]
    async fn update_profile(&self, access_token: &str, update: &ProfileUpdate) -> Result<User> {
        let res = self
            .client()?
            .put(format!("{url}/users/me", url = self.url))
            .header("Authorization", format!("Bearer {access_token}"))
            .json(update)
            .send()
            .await
            .map_err(ApiError::from)?;

        let profile = parse_response::<ProfileResponse>(res).await?;
        return Ok(profile.into());
    }

    #[allow(clippy::implicit_return)]
    async fn delete_account(&self, access_token: &str) -> Result<()> {
        let res = self
            .client()?
            .delete(format!("{url}/users/me", url = self.url))
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(ApiError::from)?;

        return expect_success(res).await;
    }
}
