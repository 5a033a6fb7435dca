//! Top-level Markdown → Telegram MarkdownV2 conversion.

use crate::escape::{escape_text, escape_url};
use crate::scanner::next_span;
use crate::span::{Span, SpanKind};

/// Convert informal Markdown into Telegram MarkdownV2-safe text.
///
/// Total over all inputs: unterminated or ambiguous markup is not an error,
/// it degrades to literally escaped text. The worst case (no recognizable
/// markup at all) escapes everything.
pub fn markdown_to_v2(input: &str) -> String {
    // `\n` written as two characters is accepted as a line-break shorthand
    // (common in copy-pasted messages); normalized globally, once, before
    // any scanning.
    let text = input.replace("\\n", "\n");

    let mut out = String::with_capacity(text.len() + text.len() / 2);
    let mut last = 0usize;
    while let Some(span) = next_span(&text, last) {
        out.push_str(&escape_text(&text[last..span.start]));
        render_span(&mut out, &text, &span);
        last = span.end;
    }
    out.push_str(&escape_text(&text[last..]));
    out
}

fn render_span(out: &mut String, text: &str, span: &Span<'_>) {
    let (open, close) = match span.kind {
        // Code spans keep their original text, fences included.
        SpanKind::CodeBlock | SpanKind::InlineCode => {
            out.push_str(&text[span.start..span.end]);
            return;
        }
        SpanKind::Link => {
            out.push('[');
            out.push_str(&escape_text(span.content));
            out.push_str("](");
            out.push_str(&escape_url(span.url.unwrap_or_default()));
            out.push(')');
            return;
        }
        SpanKind::BoldItalic => ("*_", "_*"),
        SpanKind::Bold => ("*", "*"),
        SpanKind::Strike => ("~", "~"),
        SpanKind::ItalicStar | SpanKind::ItalicUnderscore => ("_", "_"),
    };
    out.push_str(open);
    out.push_str(&escape_text(span.content));
    out.push_str(close);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(markdown_to_v2(""), "");
    }

    #[test]
    fn plain_text_is_escaped_character_by_character() {
        assert_eq!(markdown_to_v2("hello. world!"), "hello\\. world\\!");
        assert_eq!(markdown_to_v2("a+b=c"), "a\\+b\\=c");
    }

    #[test]
    fn lone_reserved_characters_are_escaped() {
        for c in "_*[]()~`>#+-=|{}.!\\".chars() {
            assert_eq!(markdown_to_v2(&c.to_string()), format!("\\{c}"));
        }
    }

    #[test]
    fn inline_code_is_verbatim() {
        assert_eq!(markdown_to_v2("`a*b_c`"), "`a*b_c`");
    }

    #[test]
    fn code_block_payload_is_verbatim() {
        let text = "```\nlet a_b = c.d;\n```";
        assert_eq!(markdown_to_v2(text), text);
    }

    #[test]
    fn bold() {
        assert_eq!(markdown_to_v2("**hi**"), "*hi*");
    }

    #[test]
    fn bold_italic_takes_precedence_over_bold() {
        assert_eq!(markdown_to_v2("***hi***"), "*_hi_*");
    }

    #[test]
    fn strikethrough() {
        assert_eq!(markdown_to_v2("~~gone~~"), "~gone~");
    }

    #[test]
    fn star_italic() {
        assert_eq!(markdown_to_v2("*hi*"), "_hi_");
    }

    #[test]
    fn underscore_italic() {
        assert_eq!(markdown_to_v2("some _italic_ text"), "some _italic_ text");
    }

    #[test]
    fn snake_case_identifiers_are_escaped_not_italicized() {
        assert_eq!(markdown_to_v2("my_var_name"), "my\\_var\\_name");
    }

    #[test]
    fn unterminated_marker_degrades_to_escaped_text() {
        assert_eq!(markdown_to_v2("*no closing"), "\\*no closing");
        assert_eq!(markdown_to_v2("**oops"), "\\*\\*oops");
    }

    #[test]
    fn link_text_is_escaped_and_url_parens_balanced_by_the_gap() {
        // The url capture stops at the first `)`; the second one falls into
        // the trailing gap and is escaped there.
        assert_eq!(
            markdown_to_v2("[docs](https://e.com/a_(b))"),
            "[docs](https://e.com/a_(b)\\)"
        );
        assert_eq!(markdown_to_v2("[a.b](x)"), "[a\\.b](x)");
    }

    #[test]
    fn newline_shorthand_becomes_a_real_line_break() {
        assert_eq!(markdown_to_v2("line1\\nline2"), "line1\nline2");
    }

    #[test]
    fn emphasis_markers_inside_formatted_content_are_escaped() {
        assert_eq!(markdown_to_v2("**a.b**"), "*a\\.b*");
        assert_eq!(markdown_to_v2("*a[b](c)*"), "_a\\[b\\]\\(c\\)_");
    }

    #[test]
    fn unicode_text_around_markup() {
        assert_eq!(markdown_to_v2("привет **мир**"), "привет *мир*");
    }

    #[test]
    fn mixed_document() {
        let input = "# Title\n**bold** and _it_ or `x.y`";
        assert_eq!(
            markdown_to_v2(input),
            "\\# Title\n*bold* and _it_ or `x.y`"
        );
    }
}
