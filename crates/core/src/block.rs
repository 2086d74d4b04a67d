//! Block segmentation and classification.
//!
//! A block is a maximal run of non-blank lines, separated from its
//! neighbors by at least one blank line and trimmed of surrounding
//! whitespace. Classification is a stateless function of the block text;
//! the kind is never stored alongside the block.

/// The kind a block classifies as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Running prose; soft line breaks join to spaces.
    Paragraph,
    /// A `#`-prefixed heading line.
    Heading,
    /// A fenced code block.
    Code,
    /// Lines all prefixed with `>`.
    Quote,
    /// Lines all prefixed with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... in order.
    OrderedList,
}

/// The fence marker delimiting code blocks.
const FENCE: &str = "```";

/// Splits a document into blocks on blank-line separators.
///
/// Each candidate is trimmed; candidates empty after trimming are
/// discarded. Document order is preserved.
pub fn segment_blocks(markdown: &str) -> Vec<String> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classifies a block, first match wins.
///
/// Precedence: heading, code, quote, unordered list, ordered list,
/// paragraph. Only the block start decides a heading, so a heading line
/// followed by arbitrary lines still classifies as a heading.
pub fn classify_block(block: &str) -> BlockKind {
    if is_heading(block) {
        BlockKind::Heading
    } else if block.starts_with(FENCE) && block.ends_with(FENCE) {
        BlockKind::Code
    } else if block.split('\n').all(|line| line.starts_with('>')) {
        BlockKind::Quote
    } else if block.split('\n').all(is_unordered_item) {
        BlockKind::UnorderedList
    } else if is_ordered_list(block) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

/// Removes block-level markers for the given kind.
pub fn strip_markers(block: &str, kind: BlockKind) -> String {
    match kind {
        BlockKind::Heading => {
            let hashes = block.chars().take_while(|c| *c == '#').count();
            let rest = &block[hashes..];
            let rest = rest.strip_prefix(|c: char| c.is_whitespace()).unwrap_or(rest);
            rest.trim().to_string()
        }
        BlockKind::Code => {
            let inner = block.strip_prefix(FENCE).unwrap_or(block);
            let inner = inner.strip_suffix(FENCE).unwrap_or(inner);
            let inner = inner.strip_prefix('\n').unwrap_or(inner);
            let inner = inner.strip_suffix('\n').unwrap_or(inner);
            inner.to_string()
        }
        BlockKind::Quote => strip_lines(block, |line| line.strip_prefix('>').unwrap_or(line)),
        BlockKind::UnorderedList => strip_lines(block, strip_dash_marker),
        BlockKind::OrderedList => strip_lines(block, strip_ordinal_marker),
        BlockKind::Paragraph => block.replace('\n', " "),
    }
}

/// Removes a per-line marker, then trims the joined result as a whole.
fn strip_lines(block: &str, strip: impl Fn(&str) -> &str) -> String {
    block
        .split('\n')
        .map(strip)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn is_heading(block: &str) -> bool {
    let hashes = block.chars().take_while(|c| *c == '#').count();
    (1..=6).contains(&hashes)
        && block[hashes..]
            .chars()
            .next()
            .is_some_and(char::is_whitespace)
}

/// `- ` followed by at least one character.
fn is_unordered_item(line: &str) -> bool {
    let Some(rest) = line.strip_prefix('-') else {
        return false;
    };
    let mut chars = rest.chars();
    matches!(chars.next(), Some(c) if c.is_whitespace()) && chars.next().is_some()
}

/// Markers must count from 1 in line order; any break disqualifies.
fn is_ordered_list(block: &str) -> bool {
    block.split('\n').enumerate().all(|(i, line)| {
        let marker = format!("{}. ", i + 1);
        line.strip_prefix(&marker).is_some_and(|rest| !rest.is_empty())
    })
}

fn strip_dash_marker(line: &str) -> &str {
    let Some(rest) = line.strip_prefix('-') else {
        return line;
    };
    match rest.chars().next() {
        Some(ws) if ws.is_whitespace() => &rest[ws.len_utf8()..],
        _ => line,
    }
}

fn strip_ordinal_marker(line: &str) -> &str {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return line;
    }
    let Some(rest) = line[digits..].strip_prefix('.') else {
        return line;
    };
    match rest.chars().next() {
        Some(ws) if ws.is_whitespace() => &rest[ws.len_utf8()..],
        _ => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_on_blank_lines_and_trims() {
        let blocks = segment_blocks("first\n\n  second line  \n\n\n\nthird");
        assert_eq!(blocks, vec!["first", "second line", "third"]);
    }

    #[test]
    fn whitespace_only_segments_are_dropped() {
        let blocks = segment_blocks("a\n\n   \n\nb");
        assert_eq!(blocks, vec!["a", "b"]);
    }

    #[test]
    fn classifies_headings_up_to_six_hashes() {
        assert_eq!(classify_block("# one"), BlockKind::Heading);
        assert_eq!(classify_block("###### six"), BlockKind::Heading);
        assert_eq!(classify_block("####### seven"), BlockKind::Paragraph);
        assert_eq!(classify_block("#tight"), BlockKind::Paragraph);
    }

    #[test]
    fn heading_start_wins_over_later_lines() {
        assert_eq!(classify_block("# title\nnot a heading"), BlockKind::Heading);
    }

    #[test]
    fn classifies_fenced_code() {
        assert_eq!(classify_block("```\nx\n```"), BlockKind::Code);
        assert_eq!(classify_block("```"), BlockKind::Code);
        assert_eq!(classify_block("```\nunclosed"), BlockKind::Paragraph);
    }

    #[test]
    fn classifies_quotes_only_when_every_line_is_marked() {
        assert_eq!(classify_block("> a\n> b"), BlockKind::Quote);
        assert_eq!(classify_block("> a\nb"), BlockKind::Paragraph);
    }

    #[test]
    fn classifies_unordered_lists() {
        assert_eq!(classify_block("- one\n- two"), BlockKind::UnorderedList);
        assert_eq!(classify_block("- one\n-two"), BlockKind::Paragraph);
        assert_eq!(classify_block("-"), BlockKind::Paragraph);
    }

    #[test]
    fn ordered_lists_must_count_from_one() {
        assert_eq!(classify_block("1. a\n2. b\n3. c"), BlockKind::OrderedList);
        assert_eq!(classify_block("1. a\n3. b"), BlockKind::Paragraph);
        assert_eq!(classify_block("2. a"), BlockKind::Paragraph);
        assert_eq!(classify_block("1. a\n2. "), BlockKind::Paragraph);
    }

    #[test]
    fn strips_heading_markers() {
        assert_eq!(strip_markers("# Title", BlockKind::Heading), "Title");
        assert_eq!(strip_markers("##   Padded", BlockKind::Heading), "Padded");
    }

    #[test]
    fn strips_code_fences_and_adjacent_newlines() {
        assert_eq!(
            strip_markers("```\ncode here\n```", BlockKind::Code),
            "code here"
        );
        assert_eq!(strip_markers("```", BlockKind::Code), "");
        assert_eq!(
            strip_markers("```\nlet a = 1;\nlet b = 2;\n```", BlockKind::Code),
            "let a = 1;\nlet b = 2;"
        );
    }

    #[test]
    fn quote_marker_stripping_trims_whole_result() {
        // Inner lines keep whitespace left over after the marker.
        assert_eq!(strip_markers("> a\n> b", BlockKind::Quote), "a\n b");
        assert_eq!(strip_markers("> one line", BlockKind::Quote), "one line");
        assert_eq!(strip_markers(">tight", BlockKind::Quote), "tight");
    }

    #[test]
    fn strips_list_markers() {
        assert_eq!(
            strip_markers("- one\n- two", BlockKind::UnorderedList),
            "one\ntwo"
        );
        assert_eq!(
            strip_markers("1. a\n2. b", BlockKind::OrderedList),
            "a\nb"
        );
    }

    #[test]
    fn paragraph_newlines_collapse_to_spaces() {
        assert_eq!(
            strip_markers("soft\nwrapped\nlines", BlockKind::Paragraph),
            "soft wrapped lines"
        );
    }
}
