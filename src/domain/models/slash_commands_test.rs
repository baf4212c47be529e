use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    let text = "";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_space_only() {
    let text = " ";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_single_slash() {
    let text = "/";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_invalid_prefix() {
    let text = "!q";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_valid_prefix() {
    let text = "/q";
    let cmd = SlashCommand::parse(text);
    assert!(cmd.is_some());
    assert_eq!(cmd.unwrap().command, "/q");
}

#[test]
fn it_is_short_quit() {
    let cmd = SlashCommand::parse("/q").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_quit() {
    let cmd = SlashCommand::parse("/quit").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_exit() {
    let cmd = SlashCommand::parse("/exit").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_not_is_quit() {
    let cmd = SlashCommand::parse("/login").unwrap();
    assert!(!cmd.is_quit());
}

#[test]
fn it_is_short_help() {
    let cmd = SlashCommand::parse("/h").unwrap();
    assert!(cmd.is_help());
}
#[test]
fn it_is_help() {
    let cmd = SlashCommand::parse("/help").unwrap();
    assert!(cmd.is_help());
}

#[test]
fn it_is_login() {
    let cmd = SlashCommand::parse("/login").unwrap();
    assert!(cmd.is_login());
}

#[test]
fn it_is_signup() {
    let cmd = SlashCommand::parse("/signup").unwrap();
    assert!(cmd.is_signup());
}
#[test]
fn it_is_register() {
    let cmd = SlashCommand::parse("/register").unwrap();
    assert!(cmd.is_signup());
}

#[test]
fn it_is_logout() {
    let cmd = SlashCommand::parse("/logout").unwrap();
    assert!(cmd.is_logout());
}

#[test]
fn it_is_whoami() {
    let cmd = SlashCommand::parse("/whoami").unwrap();
    assert!(cmd.is_whoami());
}
#[test]
fn it_is_me() {
    let cmd = SlashCommand::parse("/me").unwrap();
    assert!(cmd.is_whoami());
}

#[test]
fn it_is_refresh() {
    let cmd = SlashCommand::parse("/refresh").unwrap();
    assert!(cmd.is_refresh());
}

#[test]
fn it_is_rename_with_args() {
    let cmd = SlashCommand::parse("/rename Ada Lovelace").unwrap();
    assert!(cmd.is_rename());
    assert_eq!(cmd.args, vec!["Ada".to_string(), "Lovelace".to_string()]);
}

#[test]
fn it_is_delete_account() {
    let cmd = SlashCommand::parse("/delete-account").unwrap();
    assert!(cmd.is_delete_account());
}

#[test]
fn it_is_short_conversations() {
    let cmd = SlashCommand::parse("/ls").unwrap();
    assert!(cmd.is_conversations());
}
#[test]
fn it_is_conversations() {
    let cmd = SlashCommand::parse("/conversations").unwrap();
    assert!(cmd.is_conversations());
}

#[test]
fn it_is_short_open() {
    let cmd = SlashCommand::parse("/o conv-1").unwrap();
    assert!(cmd.is_open());
    assert_eq!(cmd.args, vec!["conv-1".to_string()]);
}
#[test]
fn it_is_open() {
    let cmd = SlashCommand::parse("/open conv-1").unwrap();
    assert!(cmd.is_open());
}

#[test]
fn it_is_short_new() {
    let cmd = SlashCommand::parse("/n").unwrap();
    assert!(cmd.is_new());
}
#[test]
fn it_is_new() {
    let cmd = SlashCommand::parse("/new").unwrap();
    assert!(cmd.is_new());
}

#[test]
fn it_is_short_delete() {
    let cmd = SlashCommand::parse("/d conv-1").unwrap();
    assert!(cmd.is_delete());
}
#[test]
fn it_is_delete() {
    let cmd = SlashCommand::parse("/delete conv-1").unwrap();
    assert!(cmd.is_delete());
}
#[test]
fn it_is_not_delete() {
    let cmd = SlashCommand::parse("/delete-account").unwrap();
    assert!(!cmd.is_delete());
}

#[test]
fn it_is_remember() {
    let cmd = SlashCommand::parse("/remember the sky is blue").unwrap();
    assert!(cmd.is_remember());
    assert_eq!(cmd.args.len(), 4);
}

#[test]
fn it_is_upload() {
    let cmd = SlashCommand::parse("/upload ./notes.txt").unwrap();
    assert!(cmd.is_upload());
    assert_eq!(cmd.args, vec!["./notes.txt".to_string()]);
}
