//! HTML tree serialization.

use crate::escape;
use crate::node::HtmlNode;
use serde::{Deserialize, Serialize};

/// Serialization options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Encode bare text and attribute values while serializing. Off by
    /// default; the dialect's output is unescaped for compatibility.
    #[serde(default)]
    pub escape_text: bool,
}

/// Renders a tree to an HTML string with default options.
///
/// ```
/// use sitemark_html::{HtmlNode, render_html};
///
/// let node = HtmlNode::parent("p", vec![HtmlNode::text("hi")]);
/// assert_eq!(render_html(&node), "<p>hi</p>");
/// ```
pub fn render_html(node: &HtmlNode) -> String {
    render_with_options(node, &RenderOptions::default())
}

/// Renders a tree to an HTML string. Pure and recursive; children render
/// in order, attributes render in insertion order.
pub fn render_with_options(node: &HtmlNode, options: &RenderOptions) -> String {
    let mut out = String::new();
    write_node(node, options, &mut out);
    out
}

fn write_node(node: &HtmlNode, options: &RenderOptions, out: &mut String) {
    match node {
        HtmlNode::Leaf {
            tag: None, value, ..
        } => {
            // Bare text passthrough, no wrapping element.
            if options.escape_text {
                out.push_str(&escape::encode_text(value));
            } else {
                out.push_str(value);
            }
        }
        HtmlNode::Leaf {
            tag: Some(tag),
            value,
            attrs,
        } => {
            out.push('<');
            out.push_str(tag);
            write_attrs(attrs, options, out);
            out.push('>');
            // Tagged leaves may hold serialized markup (code blocks), so
            // their values are emitted verbatim in both modes.
            out.push_str(value);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        HtmlNode::Parent {
            tag,
            children,
            attrs,
        } => {
            out.push('<');
            out.push_str(tag);
            write_attrs(attrs, options, out);
            out.push('>');
            for child in children {
                write_node(child, options, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

fn write_attrs(attrs: &[(String, String)], options: &RenderOptions, out: &mut String) {
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        if options.escape_text {
            out.push_str(&escape::encode_attribute(value));
        } else {
            out.push_str(value);
        }
        out.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> RenderOptions {
        RenderOptions { escape_text: true }
    }

    #[test]
    fn bare_text_renders_verbatim() {
        assert_eq!(render_html(&HtmlNode::text("a < b & c")), "a < b & c");
    }

    #[test]
    fn tagged_leaf_wraps_its_value() {
        assert_eq!(render_html(&HtmlNode::leaf("b", "bold")), "<b>bold</b>");
    }

    #[test]
    fn attributes_render_in_insertion_order() {
        let node = HtmlNode::leaf_with_attrs(
            "img",
            "",
            vec![
                ("src".to_string(), "s.png".to_string()),
                ("alt".to_string(), "a".to_string()),
            ],
        );
        assert_eq!(render_html(&node), "<img src=\"s.png\" alt=\"a\"></img>");
    }

    #[test]
    fn attribute_segment_is_omitted_when_empty() {
        let node = HtmlNode::leaf_with_attrs("a", "x", vec![]);
        assert_eq!(render_html(&node), "<a>x</a>");
    }

    #[test]
    fn empty_children_render_an_empty_element() {
        assert_eq!(render_html(&HtmlNode::parent("p", vec![])), "<p></p>");
    }

    #[test]
    fn children_render_in_order() {
        let node = HtmlNode::parent(
            "div",
            vec![
                HtmlNode::parent("p", vec![HtmlNode::text("one")]),
                HtmlNode::parent("p", vec![HtmlNode::text("two")]),
            ],
        );
        assert_eq!(render_html(&node), "<div><p>one</p><p>two</p></div>");
    }

    #[test]
    fn strict_mode_encodes_bare_text() {
        let out = render_with_options(&HtmlNode::text("a<b"), &strict());
        assert_eq!(out, "a&lt;b");
    }

    #[test]
    fn strict_mode_encodes_attribute_values() {
        let node = HtmlNode::leaf_with_attrs(
            "a",
            "x",
            vec![("href".to_string(), "u\"v".to_string())],
        );
        assert_eq!(
            render_with_options(&node, &strict()),
            "<a href=\"u&quot;v\">x</a>"
        );
    }

    #[test]
    fn options_default_to_verbatim_output() {
        let options: RenderOptions = serde_json::from_str("{}").unwrap();
        assert!(!options.escape_text);

        let json = serde_json::to_string(&RenderOptions::default()).unwrap();
        assert_eq!(json, "{\"escape_text\":false}");
    }
}
