use test_utils::reply_fixture;

use super::segment;
use super::strip_reasoning;
use crate::domain::models::ContentSegment;

fn text(content: &str) -> ContentSegment {
    return ContentSegment::Text {
        content: content.to_string(),
    };
}

fn code(language: &str, body: &str) -> ContentSegment {
    return ContentSegment::Code {
        language: language.to_string(),
        body: body.to_string(),
    };
}

#[test]
fn it_strips_reasoning_blocks() {
    let stripped = strip_reasoning("<think>pondering deeply</think>Here you go.");
    assert_eq!(stripped, "Here you go.");
}

#[test]
fn it_strips_multiple_reasoning_blocks() {
    let stripped = strip_reasoning("<think>one</think>A<think>two</think>B");
    assert_eq!(stripped, "AB");
}

#[test]
fn it_keeps_unterminated_reasoning() {
    let stripped = strip_reasoning("<think>never closed. Answer below.");
    assert_eq!(stripped, "<think>never closed. Answer below.");
}

#[test]
fn it_trims_surrounding_whitespace() {
    let stripped = strip_reasoning("  \n<think>hm</think>  Hello.  \n");
    assert_eq!(stripped, "Hello.");
}

#[test]
fn it_segments_plain_text() {
    let segments = segment("Just a sentence.");
    assert_eq!(segments, vec![text("Just a sentence.")]);
}

#[test]
fn it_segments_empty_input() {
    let segments = segment("");
    assert_eq!(segments, vec![text("")]);
}

#[test]
fn it_segments_text_around_code() {
    let segments = segment("Hello\n```js\nlet x = 1;\n```\nWorld");
    assert_eq!(
        segments,
        vec![text("Hello"), code("js", "let x = 1;"), text("World")]
    );
}

#[test]
fn it_defaults_the_language() {
    let segments = segment("```\nabc123\n```");
    assert_eq!(segments, vec![code("text", "abc123")]);
}

#[test]
fn it_keeps_unterminated_fences_as_text() {
    let segments = segment("Look:\n```rust\nfn broken() {");
    assert_eq!(segments, vec![text("Look:\n```rust\nfn broken() {")]);
}

#[test]
fn it_segments_a_full_reply() {
    let segments = segment(reply_fixture());

    assert_eq!(segments.len(), 7);
    assert_eq!(segments[0], text("Here's how to print in Rust."));

    insta::assert_snapshot!(match &segments[1] {
        ContentSegment::Code { language, body } => format!("{language}\n{body}"),
        _ => panic!("expected a code segment"),
    }, @r###"
    rust
    fn print_numbers() {
        for i in 0..=10 {
            println!("{i}");
        }
    }
    "###);

    assert_eq!(segments[2], text("And in Javascript."));
    insta::assert_snapshot!(match &segments[3] {
        ContentSegment::Code { language, body } => format!("{language}\n{body}"),
        _ => panic!("expected a code segment"),
    }, @r###"
    javascript
    function printNumbers() {
        let numbers = [];
        for (let i = 0; i <= 10; i++) {
            numbers.push(i);
        }
        return numbers.join('\n');
    }
    "###);

    assert_eq!(segments[4], text("This one has no language tag."));
    assert_eq!(segments[5], code("text", "abc123"));
    assert_eq!(segments[6], text("That's it!"));
}
