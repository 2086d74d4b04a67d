//! Inline span types.
//!
//! A [`TextSpan`] is a contiguous run of inline text tagged with a single
//! style kind. Spans are immutable once constructed; the constructors keep
//! the target invariant (only links and images carry one).

/// Inline style kinds a span can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Unstyled text.
    Plain,
    /// Bold text (`**` delimited).
    Bold,
    /// Italic text (`_` delimited).
    Italic,
    /// Inline code (backtick delimited).
    Code,
    /// A hyperlink with label text and a target URL.
    Link,
    /// An image with alt text and a source URL.
    Image,
}

/// A unit of inline content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    content: String,
    kind: SpanKind,
    target: Option<String>,
}

impl TextSpan {
    /// Creates an unstyled span.
    pub fn plain(content: impl Into<String>) -> Self {
        Self::styled(SpanKind::Plain, content)
    }

    /// Creates a span of the given non-target kind.
    pub fn styled(kind: SpanKind, content: impl Into<String>) -> Self {
        debug_assert!(!matches!(kind, SpanKind::Link | SpanKind::Image));
        TextSpan {
            content: content.into(),
            kind,
            target: None,
        }
    }

    /// Creates a link span with label text and a target URL.
    pub fn link(content: impl Into<String>, target: impl Into<String>) -> Self {
        TextSpan {
            content: content.into(),
            kind: SpanKind::Link,
            target: Some(target.into()),
        }
    }

    /// Creates an image span with alt text and a source URL.
    pub fn image(alt: impl Into<String>, target: impl Into<String>) -> Self {
        TextSpan {
            content: alt.into(),
            kind: SpanKind::Image,
            target: Some(target.into()),
        }
    }

    /// The span's text content (alt text for images).
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The span's style kind.
    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    /// The target URL. Present exactly for links and images.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}
