#[cfg(test)]
#[path = "segmenter_test.rs"]
mod tests;

use crate::domain::models::ContentSegment;

const REASONING_OPEN: &str = "<think>";
const REASONING_CLOSE: &str = "</think>";
const FENCE: &str = "```";

/// Removes complete reasoning blocks from assistant replies. An opening marker
/// without a matching close is left untouched.
pub fn strip_reasoning(content: &str) -> String {
    let mut text = content.to_string();
    while let Some(open) = text.find(REASONING_OPEN) {
        let search_from = open + REASONING_OPEN.len();
        if let Some(close) = text[search_from..].find(REASONING_CLOSE) {
            text.replace_range(open..(search_from + close + REASONING_CLOSE.len()), "");
        } else {
            break;
        }
    }

    return text.trim().to_string();
}

/// Splits reply text into renderable segments. Fenced code blocks become
/// [`ContentSegment::Code`], everything else [`ContentSegment::Text`]. A fence
/// without a closing marker is treated as plain text.
pub fn segment(content: &str) -> Vec<ContentSegment> {
    let stripped = strip_reasoning(content);
    let mut segments: Vec<ContentSegment> = vec![];
    let mut cursor = 0;

    while let Some(fence) = next_fence(&stripped, cursor) {
        let leading = stripped[cursor..fence.start].trim();
        if !leading.is_empty() {
            segments.push(ContentSegment::Text {
                content: leading.to_string(),
            });
        }

        segments.push(ContentSegment::Code {
            language: fence.language,
            body: fence.body,
        });
        cursor = fence.end;
    }

    let trailing = stripped[cursor..].trim();
    if !trailing.is_empty() {
        segments.push(ContentSegment::Text {
            content: trailing.to_string(),
        });
    }

    if segments.is_empty() {
        segments.push(ContentSegment::Text { content: stripped });
    }

    return segments;
}

struct Fence {
    start: usize,
    end: usize,
    language: String,
    body: String,
}

fn next_fence(text: &str, from: usize) -> Option<Fence> {
    let start = text[from..].find(FENCE)? + from;
    let mut pos = start + FENCE.len();

    let lang_start = pos;
    let bytes = text.as_bytes();
    while pos < text.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_') {
        pos += 1;
    }
    let language = if pos > lang_start {
        text[lang_start..pos].to_string()
    } else {
        "text".to_string()
    };

    while let Some(character) = text[pos..].chars().next() {
        if !character.is_whitespace() {
            break;
        }
        pos += character.len_utf8();
    }

    let close = text[pos..].find(FENCE)? + pos;
    return Some(Fence {
        start,
        end: close + FENCE.len(),
        language,
        body: text[pos..close].trim().to_string(),
    });
}
