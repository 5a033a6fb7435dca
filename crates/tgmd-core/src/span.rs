/// Formatting constructs the scanner recognizes.
///
/// Declaration order is the tie-break priority when two kinds could start
/// at the same offset: `***x***` must classify as bold+italic, not as bold
/// with leftover asterisks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpanKind {
    CodeBlock,
    InlineCode,
    BoldItalic,
    Bold,
    Strike,
    ItalicStar,
    ItalicUnderscore,
    Link,
}

/// One classified formatting span.
///
/// `start`/`end` are byte offsets into the scanned text (always char
/// boundaries); `content` borrows the captured inner text. Spans never
/// overlap or nest, and their content is not rescanned for further
/// formatting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span<'a> {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
    pub content: &'a str,
    /// Captured link target; set only for [`SpanKind::Link`].
    pub url: Option<&'a str>,
}
