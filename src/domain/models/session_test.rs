use super::Session;
use super::SessionEvent;
use super::SessionStatus;
use super::User;

fn user() -> User {
    return User {
        id: "user-1".to_string(),
        email: "ada@example.com".to_string(),
        name: Some("Ada".to_string()),
    };
}

fn login_succeeded() -> SessionEvent {
    return SessionEvent::LoginSucceeded {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        user: user(),
    };
}

#[test]
fn it_starts_anonymous() {
    let session = Session::default();
    assert_eq!(session.status, SessionStatus::Anonymous);
    assert!(!session.is_authenticated());
    assert!(session.access_token().is_empty());
    assert!(session.user().is_none());
}

#[test]
fn it_transitions_through_login() {
    let session = Session::default().apply(SessionEvent::LoginStarted);
    assert_eq!(session.status, SessionStatus::Authenticating);

    let session = session.apply(login_succeeded());
    assert_eq!(session.status, SessionStatus::Authenticated);
    assert!(session.is_authenticated());
    assert_eq!(session.access_token(), "access");
    assert_eq!(session.refresh_token(), "refresh");
    assert_eq!(session.user().unwrap().email, "ada@example.com");
}

#[test]
fn it_resets_on_failed_login() {
    let session = Session::default()
        .apply(SessionEvent::LoginStarted)
        .apply(SessionEvent::LoginFailed);
    assert_eq!(session, Session::default());
}

#[test]
fn it_restores_to_authenticated() {
    let session = Session::default().apply(SessionEvent::Restored {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        user: user(),
    });
    assert_eq!(session.status, SessionStatus::Authenticated);
    assert_eq!(session.access_token(), "access");
}

#[test]
fn it_refreshes_only_when_authenticated() {
    let session = Session::default().apply(SessionEvent::RefreshStarted);
    assert_eq!(session.status, SessionStatus::Anonymous);

    let session = Session::default()
        .apply(login_succeeded())
        .apply(SessionEvent::RefreshStarted);
    assert_eq!(session.status, SessionStatus::Refreshing);
    assert!(session.is_authenticated());

    let session = session.apply(SessionEvent::RefreshFinished);
    assert_eq!(session.status, SessionStatus::Authenticated);
}

#[test]
fn it_ignores_refresh_finished_outside_refreshing() {
    let session = Session::default()
        .apply(login_succeeded())
        .apply(SessionEvent::RefreshFinished);
    assert_eq!(session.status, SessionStatus::Authenticated);
}

#[test]
fn it_replaces_the_profile() {
    let session = Session::default()
        .apply(login_succeeded())
        .apply(SessionEvent::ProfileLoaded(User {
            id: "user-1".to_string(),
            email: "ada@example.com".to_string(),
            name: Some("Ada Lovelace".to_string()),
        }));
    assert_eq!(session.user().unwrap().name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(session.status, SessionStatus::Authenticated);
}

#[test]
fn it_clears_tokens_when_rejected() {
    let session = Session::default()
        .apply(login_succeeded())
        .apply(SessionEvent::TokenRejected);
    assert_eq!(session.status, SessionStatus::Expired);
    assert!(session.access_token().is_empty());
    assert!(session.refresh_token().is_empty());
    assert!(!session.is_authenticated());
    assert!(session.user().is_some());
}

#[test]
fn it_resets_on_logout() {
    let session = Session::default()
        .apply(login_succeeded())
        .apply(SessionEvent::LoggedOut);
    assert_eq!(session, Session::default());
}
