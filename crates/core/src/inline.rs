//! Inline span tokenization.
//!
//! Raw text is split into typed [`TextSpan`]s by a fixed sequence of passes:
//! image extraction, link extraction, then one generic delimiter pass per
//! style. Every pass leaves non-Plain spans untouched, so earlier passes
//! shield their output from later ones. Tokenization is total; unmatched
//! delimiters and malformed patterns degrade to plain text.

use crate::span::{SpanKind, TextSpan};

/// Delimiter passes in the order they are applied.
const DELIMITER_PASSES: &[(&str, SpanKind)] = &[
    ("**", SpanKind::Bold),
    ("_", SpanKind::Italic),
    ("`", SpanKind::Code),
];

/// Tokenizes a line of text into typed spans.
///
/// Text with no delimiter occurrences comes back as a single Plain span
/// equal to the input, including the empty string.
///
/// ```
/// use sitemark_core::{SpanKind, tokenize_inline};
///
/// let spans = tokenize_inline("plain `code` tail");
/// assert_eq!(spans.len(), 3);
/// assert_eq!(spans[1].kind(), SpanKind::Code);
/// assert_eq!(spans[1].content(), "code");
/// ```
pub fn tokenize_inline(text: &str) -> Vec<TextSpan> {
    let mut spans = vec![TextSpan::plain(text)];
    spans = split_images(spans);
    spans = split_links(spans);
    for (delimiter, kind) in DELIMITER_PASSES {
        spans = split_delimiter(spans, delimiter, *kind);
    }
    spans
}

/// Splits every Plain span on a delimiter, alternating the span kind.
///
/// Text left of a delimiter keeps the current kind and is dropped when
/// empty; the kind toggles between `kind` and Plain at each occurrence.
/// A dangling opening delimiter leaves the trailing segment with the
/// toggled kind instead of reverting it to Plain.
pub fn split_delimiter(spans: Vec<TextSpan>, delimiter: &str, kind: SpanKind) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.kind() != SpanKind::Plain || span.content().is_empty() {
            out.push(span);
            continue;
        }
        split_segment(span.content(), delimiter, kind, false, &mut out);
    }
    out
}

fn split_segment(
    text: &str,
    delimiter: &str,
    kind: SpanKind,
    inside: bool,
    out: &mut Vec<TextSpan>,
) {
    let current = if inside { kind } else { SpanKind::Plain };
    let Some(pos) = text.find(delimiter) else {
        if !text.is_empty() {
            out.push(TextSpan::styled(current, text));
        }
        return;
    };

    let left = &text[..pos];
    if !left.is_empty() {
        out.push(TextSpan::styled(current, left));
    }
    let right = &text[pos + delimiter.len()..];
    split_segment(right, delimiter, kind, !inside, out);
}

/// Extracts `![label](target)` patterns from every Plain span.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_patterns(spans, true)
}

/// Extracts `[label](target)` patterns from every Plain span.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_patterns(spans, false)
}

fn split_patterns(spans: Vec<TextSpan>, image: bool) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.kind() != SpanKind::Plain || span.content().is_empty() {
            out.push(span);
            continue;
        }

        let mut rest = span.content();
        while let Some(found) = find_pattern(rest, image) {
            if found.start > 0 {
                out.push(TextSpan::plain(&rest[..found.start]));
            }
            out.push(if image {
                TextSpan::image(found.label, found.target)
            } else {
                TextSpan::link(found.label, found.target)
            });
            rest = &rest[found.end..];
        }
        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }
    out
}

struct InlineMatch<'a> {
    start: usize,
    end: usize,
    label: &'a str,
    target: &'a str,
}

/// Locates the first well-formed image or link pattern.
///
/// The first `]` terminates a label and the first `)` terminates a target,
/// so neither may contain its closer. `](` must be adjacent. Image labels
/// may be empty; link labels and all targets must be non-empty. Candidates
/// failing any of these are skipped and the text stays literal.
fn find_pattern(text: &str, image: bool) -> Option<InlineMatch<'_>> {
    let marker = if image { "![" } else { "[" };
    let mut from = 0;

    while let Some(found) = text[from..].find(marker) {
        let open = from + found;
        from = open + 1;

        let label_start = open + marker.len();
        let close = label_start + text[label_start..].find(']')?;
        let label = &text[label_start..close];
        if !image && label.is_empty() {
            continue;
        }
        if !text[close + 1..].starts_with('(') {
            continue;
        }

        let target_start = close + 2;
        let Some(offset) = text[target_start..].find(')') else {
            continue;
        };
        let target = &text[target_start..target_start + offset];
        if target.is_empty() {
            continue;
        }

        return Some(InlineMatch {
            start: open,
            end: target_start + offset + 1,
            label,
            target,
        });
    }
    None
}
