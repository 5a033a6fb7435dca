//! Locates and classifies the next formatting span in the input.

use std::sync::OnceLock;

use regex::Regex;

use crate::span::{Span, SpanKind};

/// Find the next formatting span at or after byte offset `from`.
///
/// Candidates are tried at each position in [`SpanKind`] declaration order;
/// the earliest-starting match wins. Returns `None` when the rest of the
/// input is plain text. An opening delimiter with no legal closer never
/// matches; its characters stay in the surrounding gap.
pub fn next_span(text: &str, from: usize) -> Option<Span<'_>> {
    let bytes = text.as_bytes();
    let mut pos = from;
    while pos < bytes.len() {
        // Every delimiter opens with one of these ASCII bytes, so any other
        // byte (including UTF-8 continuation bytes) is skipped outright.
        let found = match bytes[pos] {
            b'`' => match_code_block(text, pos).or_else(|| match_inline_code(text, pos)),
            b'*' => match_delimited(text, pos, "***", SpanKind::BoldItalic)
                .or_else(|| match_delimited(text, pos, "**", SpanKind::Bold))
                .or_else(|| match_italic_star(text, pos)),
            b'~' => match_delimited(text, pos, "~~", SpanKind::Strike),
            b'_' => match_italic_underscore(text, pos),
            b'[' => match_link(text, pos),
            _ => None,
        };
        if found.is_some() {
            return found;
        }
        pos += 1;
    }
    None
}

/// Fenced code block. Content may be empty and may span line breaks.
fn match_code_block(text: &str, pos: usize) -> Option<Span<'_>> {
    if !text[pos..].starts_with("```") {
        return None;
    }
    let content_start = pos + 3;
    let close = find_from(text, content_start, "```")?;
    Some(Span {
        kind: SpanKind::CodeBlock,
        start: pos,
        end: close + 3,
        content: &text[content_start..close],
        url: None,
    })
}

/// Inline code. At least one character, backtick-free, single line.
fn match_inline_code(text: &str, pos: usize) -> Option<Span<'_>> {
    if !text[pos..].starts_with('`') {
        return None;
    }
    let content_start = pos + 1;
    let close = find_from(text, content_start, "`")?;
    let content = &text[content_start..close];
    if content.is_empty() || content.contains('\n') {
        return None;
    }
    Some(Span {
        kind: SpanKind::InlineCode,
        start: pos,
        end: close + 1,
        content,
        url: None,
    })
}

/// Symmetric multi-character delimiters (`***`, `**`, `~~`).
///
/// Non-greedy: the closer is the nearest occurrence of `delim` after at
/// least one character of content, and content cannot cross a line break.
fn match_delimited<'a>(text: &'a str, pos: usize, delim: &str, kind: SpanKind) -> Option<Span<'a>> {
    if !text[pos..].starts_with(delim) {
        return None;
    }
    let content_start = pos + delim.len();
    let mut search = content_start;
    loop {
        let close = find_from(text, search, delim)?;
        if close == content_start {
            // Zero-width content; a valid closer must sit at least one
            // character later (delimiter bytes are ASCII, so +1 is safe).
            search = close + 1;
            continue;
        }
        let content = &text[content_start..close];
        if content.contains('\n') {
            return None;
        }
        return Some(Span {
            kind,
            start: pos,
            end: close + delim.len(),
            content,
            url: None,
        });
    }
}

/// Star italics: content excludes `*` and line breaks.
fn match_italic_star(text: &str, pos: usize) -> Option<Span<'_>> {
    if !text[pos..].starts_with('*') {
        return None;
    }
    let content_start = pos + 1;
    let close = find_from(text, content_start, "*")?;
    let content = &text[content_start..close];
    if content.is_empty() || content.contains('\n') {
        return None;
    }
    Some(Span {
        kind: SpanKind::ItalicStar,
        start: pos,
        end: close + 1,
        content,
        url: None,
    })
}

/// Underscore italics: like [`match_italic_star`], plus a word-boundary
/// guard so that identifiers such as `file_name` never open or close
/// italics. The opening `_` must not follow a word character and the
/// closing `_` must not precede one.
fn match_italic_underscore(text: &str, pos: usize) -> Option<Span<'_>> {
    let bytes = text.as_bytes();
    if !text[pos..].starts_with('_') {
        return None;
    }
    if pos > 0 && is_word_byte(bytes[pos - 1]) {
        return None;
    }
    let content_start = pos + 1;
    let close = find_from(text, content_start, "_")?;
    let content = &text[content_start..close];
    if content.is_empty() || content.contains('\n') {
        return None;
    }
    let end = close + 1;
    if end < bytes.len() && is_word_byte(bytes[end]) {
        return None;
    }
    Some(Span {
        kind: SpanKind::ItalicUnderscore,
        start: pos,
        end,
        content,
        url: None,
    })
}

/// Link `[text](url)`: text excludes `]`, url excludes `)`; both may be empty.
fn match_link(text: &str, pos: usize) -> Option<Span<'_>> {
    static LINK_RE: OnceLock<Regex> = OnceLock::new();
    let re = LINK_RE
        .get_or_init(|| Regex::new(r"^\[([^\]]*)\]\(([^)]*)\)").expect("valid regex"));

    let caps = re.captures(&text[pos..])?;
    let whole = caps.get(0)?;
    Some(Span {
        kind: SpanKind::Link,
        start: pos,
        end: pos + whole.end(),
        content: caps.get(1)?.as_str(),
        url: Some(caps.get(2)?.as_str()),
    })
}

/// ASCII word character, the only class the underscore guard cares about.
/// A multi-byte neighbor never counts as a word character, and checking a
/// single byte of it is safe: no UTF-8 continuation or lead byte is ASCII.
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn find_from(text: &str, from: usize, needle: &str) -> Option<usize> {
    text[from..].find(needle).map(|i| from + i)
}
