use super::Message;
use super::Role;

#[test]
fn it_creates_a_message() {
    let message = Message::new(1, Role::User, "Hello there");
    assert_eq!(message.id, 1);
    assert_eq!(message.role, Role::User);
    assert_eq!(message.content, "Hello there");
    assert!(!message.is_error);
    assert!(message.metadata.is_none());
    assert!(!message.timestamp.is_empty());
}

#[test]
fn it_creates_an_error_message() {
    let message = Message::new_error(2, Role::Assistant, "It broke");
    assert_eq!(message.id, 2);
    assert!(message.is_error);
}

#[test]
fn it_attaches_metadata() {
    let message = Message::new(3, Role::Assistant, "Hi")
        .with_metadata(serde_json::json!({"conversation_id": "abc"}));
    assert_eq!(
        message.metadata.unwrap()["conversation_id"]
            .as_str()
            .unwrap(),
        "abc"
    );
}

#[test]
fn it_serializes_roles_lowercase() {
    let message = Message::new(4, Role::System, "note");
    let json = serde_json::to_value(&message).unwrap();
    assert_eq!(json["role"], "system");
    assert!(json.get("metadata").is_none());
}

#[test]
fn it_deserializes_without_optional_fields() {
    let message: Message = serde_json::from_value(serde_json::json!({
        "id": 9,
        "role": "assistant",
        "content": "Hello!",
        "timestamp": "2024-01-01T00:00:00+00:00"
    }))
    .unwrap();
    assert_eq!(message.role, Role::Assistant);
    assert!(!message.is_error);
    assert!(message.metadata.is_none());
}
