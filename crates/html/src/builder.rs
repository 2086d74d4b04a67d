//! Markdown to HTML tree construction.

use crate::node::HtmlNode;
use crate::render::render_html;
use sitemark_core::{
    BlockKind, SpanKind, TextSpan, classify_block, segment_blocks, strip_markers, tokenize_inline,
};

/// Builds the HTML tree for a whole document.
///
/// The root is always a `div` holding one child per block, in document
/// order. Construction is deterministic; the same input always produces a
/// structurally equal tree.
pub fn build_document_tree(markdown: &str) -> HtmlNode {
    let mut children = Vec::new();
    for block in segment_blocks(markdown) {
        let kind = classify_block(&block);
        let content = strip_markers(&block, kind);
        children.push(block_to_node(kind, &content));
    }
    HtmlNode::parent("div", children)
}

fn block_to_node(kind: BlockKind, content: &str) -> HtmlNode {
    match kind {
        BlockKind::Paragraph => HtmlNode::parent("p", tokenize_children(content)),
        // Heading depth is discarded; every heading renders as h1.
        BlockKind::Heading => HtmlNode::parent("h1", tokenize_children(content)),
        BlockKind::Code => {
            // Code content skips inline tokenization. The pre leaf holds
            // the serialized code element as its literal value.
            let code = HtmlNode::leaf("code", content);
            HtmlNode::leaf("pre", render_html(&code))
        }
        BlockKind::Quote => HtmlNode::parent("blockquote", tokenize_children(content)),
        BlockKind::UnorderedList => list_node("ul", content),
        BlockKind::OrderedList => list_node("ol", content),
    }
}

fn list_node(tag: &str, content: &str) -> HtmlNode {
    let items = content
        .split('\n')
        .map(|item| HtmlNode::parent("li", tokenize_children(item)))
        .collect();
    HtmlNode::parent(tag, items)
}

fn tokenize_children(text: &str) -> Vec<HtmlNode> {
    tokenize_inline(text).iter().map(span_to_node).collect()
}

/// Converts one inline span to its HTML node.
pub fn span_to_node(span: &TextSpan) -> HtmlNode {
    match span.kind() {
        SpanKind::Plain => HtmlNode::text(span.content()),
        SpanKind::Bold => HtmlNode::leaf("b", span.content()),
        SpanKind::Italic => HtmlNode::leaf("i", span.content()),
        SpanKind::Code => HtmlNode::leaf("code", span.content()),
        SpanKind::Link => HtmlNode::leaf_with_attrs(
            "a",
            span.content(),
            vec![(
                "href".to_string(),
                span.target().unwrap_or_default().to_string(),
            )],
        ),
        SpanKind::Image => HtmlNode::leaf_with_attrs(
            "img",
            "",
            vec![
                (
                    "src".to_string(),
                    span.target().unwrap_or_default().to_string(),
                ),
                ("alt".to_string(), span.content().to_string()),
            ],
        ),
    }
}
