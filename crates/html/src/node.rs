//! The HTML document tree.

/// Insertion-ordered attribute list. Attributes serialize in the order they
/// were added, keeping rendered output deterministic.
pub type AttrList = Vec<(String, String)>;

/// A node in the HTML document tree.
///
/// The two variants are exhaustive: a leaf carries a literal value and no
/// children, a parent carries only children. A parent exclusively owns its
/// children; the tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A literal value, optionally wrapped in a tag. A missing tag means
    /// raw text passthrough with no wrapping element.
    Leaf {
        /// Wrapping tag, absent for bare text.
        tag: Option<String>,
        /// Literal content. May be empty.
        value: String,
        /// Attributes in insertion order.
        attrs: AttrList,
    },
    /// An element containing child nodes in document order. An empty
    /// children vector renders as an empty element.
    Parent {
        /// Element tag.
        tag: String,
        /// Child nodes in order.
        children: Vec<HtmlNode>,
        /// Attributes in insertion order.
        attrs: AttrList,
    },
}

impl HtmlNode {
    /// Creates a bare text node with no wrapping element.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    /// Creates a tagged leaf with no attributes.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    /// Creates a tagged leaf with attributes.
    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: AttrList,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs,
        }
    }

    /// Creates a parent element with no attributes.
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attrs: Vec::new(),
        }
    }

    /// Creates a parent element with attributes.
    pub fn parent_with_attrs(
        tag: impl Into<String>,
        children: Vec<HtmlNode>,
        attrs: AttrList,
    ) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attrs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_nodes_have_no_tag() {
        let node = HtmlNode::text("hi");
        assert!(matches!(node, HtmlNode::Leaf { tag: None, .. }));
    }

    #[test]
    fn constructors_preserve_attribute_order() {
        let node = HtmlNode::leaf_with_attrs(
            "img",
            "",
            vec![
                ("src".to_string(), "a.png".to_string()),
                ("alt".to_string(), "a".to_string()),
            ],
        );
        let HtmlNode::Leaf { attrs, .. } = &node else {
            panic!("expected a leaf");
        };
        assert_eq!(attrs[0].0, "src");
        assert_eq!(attrs[1].0, "alt");
    }

    #[test]
    fn trees_compare_structurally() {
        let a = HtmlNode::parent("p", vec![HtmlNode::text("x")]);
        let b = HtmlNode::parent("p", vec![HtmlNode::text("x")]);
        assert_eq!(a, b);
        assert_ne!(a, HtmlNode::parent("p", vec![]));
    }
}
