//! Telegram MarkdownV2 escaping rules.

/// Characters Telegram reserves in plain MarkdownV2 text.
const RESERVED: &str = "_*[]()~`>#+-=|{}.!\\";

/// Escape a plain-text segment: every reserved character gets one leading
/// backslash, position-independent. Applied once per character: captured
/// span content goes through here but is never rescanned for markup.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if RESERVED.contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape a link target. Inside the `(...)` of a link Telegram only
/// reserves `)`; everything else passes through untouched.
pub fn escape_url(url: &str) -> String {
    url.replace(')', "\\)")
}
