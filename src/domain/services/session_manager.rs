#[cfg(test)]
#[path = "session_manager_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::AuthClientBox;
use crate::domain::models::AuthPayload;
use crate::domain::models::Event;
use crate::domain::models::ProfileUpdate;
use crate::domain::models::Session;
use crate::domain::models::SessionEvent;
use crate::domain::models::StorageBox;
use crate::domain::models::TokenPair;
use crate::domain::models::ValidationError;

/// Owns the authentication lifecycle. Every transition goes through
/// [`Session::apply`], and saved tokens exist on disk only while the session
/// is authenticated.
pub struct SessionManager {
    session: Session,
    auth: AuthClientBox,
    storage: StorageBox,
    tx: mpsc::UnboundedSender<Event>,
}

impl SessionManager {
    pub fn new(
        auth: AuthClientBox,
        storage: StorageBox,
        tx: mpsc::UnboundedSender<Event>,
    ) -> SessionManager {
        return SessionManager {
            session: Session::default(),
            auth,
            storage,
            tx,
        };
    }

    pub fn state(&self) -> &Session {
        return &self.session;
    }

    /// Rebuilds the session from tokens saved by a previous run. Stale or
    /// missing tokens leave the session anonymous rather than erroring, so
    /// startup never fails on auth.
    pub async fn restore(&mut self) {
        let tokens = match self.storage.read_tokens().await {
            Some(tokens) => tokens,
            None => return,
        };

        match self.auth.get_profile(&tokens.access_token).await {
            Ok(user) => {
                self.update(SessionEvent::Restored {
                    access_token: tokens.access_token,
                    refresh_token: tokens.refresh_token,
                    user,
                });
            }
            Err(err) => {
                tracing::warn!(error = ?err, "Saved tokens were rejected, starting signed out");
                if let Err(clear_err) = self.storage.clear_tokens().await {
                    tracing::warn!(error = ?clear_err, "Unable to remove stale tokens");
                }
            }
        }
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        if email.trim().is_empty() {
            bail!(ValidationError::MissingField("email"));
        }
        if password.is_empty() {
            bail!(ValidationError::MissingField("password"));
        }

        self.update(SessionEvent::LoginStarted);

        let payload = match self.auth.login(email, password).await {
            Ok(payload) => payload,
            Err(err) => {
                self.update(SessionEvent::LoginFailed);
                return Err(err);
            }
        };

        return self.establish(payload).await;
    }

    pub async fn signup(
        &mut self,
        email: &str,
        name: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<()> {
        if email.trim().is_empty() {
            bail!(ValidationError::MissingField("email"));
        }
        if name.trim().is_empty() {
            bail!(ValidationError::MissingField("name"));
        }
        if password.is_empty() {
            bail!(ValidationError::MissingField("password"));
        }
        if password != password_confirm {
            bail!(ValidationError::PasswordMismatch);
        }
        if password.len() < 8 {
            bail!(ValidationError::PasswordTooShort);
        }

        self.update(SessionEvent::LoginStarted);

        let payload = match self.auth.signup(email, name, password).await {
            Ok(payload) => payload,
            Err(err) => {
                self.update(SessionEvent::LoginFailed);
                return Err(err);
            }
        };

        return self.establish(payload).await;
    }

    /// Signs out locally no matter what the server says. The remote logout is
    /// best effort.
    pub async fn logout(&mut self) {
        let access_token = self.session.access_token().to_string();
        if !access_token.is_empty() {
            if let Err(err) = self.auth.logout(&access_token).await {
                tracing::warn!(error = ?err, "Remote logout failed, signing out locally");
            }
        }

        if let Err(err) = self.storage.clear_tokens().await {
            tracing::warn!(error = ?err, "Unable to remove saved tokens");
        }

        self.update(SessionEvent::LoggedOut);
    }

    pub async fn delete_account(&mut self) -> Result<()> {
        let access_token = self.require_token()?;
        self.auth.delete_account(&access_token).await?;
        self.logout().await;

        return Ok(());
    }

    pub async fn update_profile(&mut self, update: &ProfileUpdate) -> Result<()> {
        let access_token = self.require_token()?;
        let user = self.auth.update_profile(&access_token, update).await?;
        self.update(SessionEvent::ProfileLoaded(user));

        return Ok(());
    }

    /// Re-fetches the profile from the server. A failure leaves the session
    /// authenticated, only the stale profile sticks around.
    pub async fn refresh_profile(&mut self) -> Result<()> {
        let access_token = self.require_token()?;
        self.update(SessionEvent::RefreshStarted);

        match self.auth.get_profile(&access_token).await {
            Ok(user) => {
                self.update(SessionEvent::ProfileLoaded(user));
                self.update(SessionEvent::RefreshFinished);
                return Ok(());
            }
            Err(err) => {
                self.update(SessionEvent::RefreshFinished);
                return Err(err);
            }
        }
    }

    /// Marks the session expired after the server rejected the token. Saved
    /// tokens are removed so the next run starts signed out.
    pub async fn expire(&mut self) {
        self.update(SessionEvent::TokenRejected);
        if let Err(err) = self.storage.clear_tokens().await {
            tracing::warn!(error = ?err, "Unable to remove rejected tokens");
        }
    }

    pub fn require_token(&self) -> Result<String> {
        if !self.session.is_authenticated() {
            bail!(ValidationError::NotSignedIn);
        }

        return Ok(self.session.access_token().to_string());
    }

    async fn establish(&mut self, payload: AuthPayload) -> Result<()> {
        if payload.access_token.is_empty() {
            self.update(SessionEvent::LoginFailed);
            bail!("The server did not return an access token");
        }

        let tokens = TokenPair {
            access_token: payload.access_token.to_string(),
            refresh_token: payload.refresh_token.to_string(),
        };
        if let Err(err) = self.storage.write_tokens(&tokens).await {
            tracing::warn!(error = ?err, "Unable to save tokens, session will not survive restarts");
        }

        let user = match self.auth.get_profile(&payload.access_token).await {
            Ok(user) => user,
            Err(err) => {
                if let Err(clear_err) = self.storage.clear_tokens().await {
                    tracing::warn!(error = ?clear_err, "Unable to remove saved tokens");
                }
                self.update(SessionEvent::LoginFailed);
                return Err(err);
            }
        };

        self.update(SessionEvent::LoginSucceeded {
            access_token: payload.access_token,
            refresh_token: payload.refresh_token,
            user,
        });

        return Ok(());
    }

    fn update(&mut self, event: SessionEvent) {
        let previous_status = self.session.status;
        self.session = self.session.clone().apply(event);

        if self.session.status != previous_status {
            if let Err(err) = self
                .tx
                .send(Event::SessionChanged(self.session.status))
            {
                tracing::warn!(error = ?err, "Unable to publish session change");
            }
        }
    }
}
