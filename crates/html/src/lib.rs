#![deny(missing_docs)]
//! sitemark HTML engine: document tree construction and serialization.
//!
//! Markdown text analyzed by `sitemark-core` is assembled here into a
//! generic HTML element tree and rendered to a string. The pipeline is
//! pure and synchronous; each document is built once, rendered once, and
//! discarded.

/// Tree construction from Markdown blocks and spans.
pub mod builder;
/// The HTML escaping boundary.
pub mod escape;
/// The HTML document tree.
pub mod node;
/// Page assembly for the static site generator.
pub mod page;
/// Tree serialization.
pub mod render;

pub use builder::{build_document_tree, span_to_node};
pub use node::{AttrList, HtmlNode};
pub use page::{Page, render_page, render_page_with_options};
pub use render::{RenderOptions, render_html, render_with_options};
