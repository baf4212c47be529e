#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::User;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SessionStatus {
    Anonymous,
    Authenticating,
    Authenticated,
    Refreshing,
    Expired,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    LoginStarted,
    LoginSucceeded {
        access_token: String,
        refresh_token: String,
        user: User,
    },
    LoginFailed,
    Restored {
        access_token: String,
        refresh_token: String,
        user: User,
    },
    RefreshStarted,
    RefreshFinished,
    ProfileLoaded(User),
    TokenRejected,
    LoggedOut,
}

/// Authentication state as a value. Transitions happen only through
/// [`Session::apply`], which consumes the old state and returns the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub status: SessionStatus,
    access_token: String,
    refresh_token: String,
    user: Option<User>,
}

impl Default for Session {
    fn default() -> Session {
        return Session {
            status: SessionStatus::Anonymous,
            access_token: String::new(),
            refresh_token: String::new(),
            user: None,
        };
    }
}

impl Session {
    pub fn apply(self, event: SessionEvent) -> Session {
        match event {
            SessionEvent::LoginStarted => {
                return Session {
                    status: SessionStatus::Authenticating,
                    ..self
                };
            }
            SessionEvent::LoginSucceeded {
                access_token,
                refresh_token,
                user,
            }
            | SessionEvent::Restored {
                access_token,
                refresh_token,
                user,
            } => {
                return Session {
                    status: SessionStatus::Authenticated,
                    access_token,
                    refresh_token,
                    user: Some(user),
                };
            }
            SessionEvent::LoginFailed | SessionEvent::LoggedOut => {
                return Session::default();
            }
            SessionEvent::RefreshStarted => {
                if self.status != SessionStatus::Authenticated {
                    return self;
                }
                return Session {
                    status: SessionStatus::Refreshing,
                    ..self
                };
            }
            SessionEvent::RefreshFinished => {
                if self.status != SessionStatus::Refreshing {
                    return self;
                }
                return Session {
                    status: SessionStatus::Authenticated,
                    ..self
                };
            }
            SessionEvent::ProfileLoaded(user) => {
                return Session {
                    user: Some(user),
                    ..self
                };
            }
            SessionEvent::TokenRejected => {
                return Session {
                    status: SessionStatus::Expired,
                    access_token: String::new(),
                    refresh_token: String::new(),
                    ..self
                };
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        return matches!(
            self.status,
            SessionStatus::Authenticated | SessionStatus::Refreshing
        );
    }

    pub fn access_token(&self) -> &str {
        return &self.access_token;
    }

    pub fn refresh_token(&self) -> &str {
        return &self.refresh_token;
    }

    pub fn user(&self) -> Option<&User> {
        return self.user.as_ref();
    }
}
