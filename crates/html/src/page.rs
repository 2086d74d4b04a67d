//! Page assembly: body HTML plus extracted title.

use crate::builder::build_document_tree;
use crate::render::{RenderOptions, render_with_options};
use sitemark_core::{MissingTitle, extract_title};

/// A rendered page, ready for template substitution by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Title taken from the first level-1 heading.
    pub title: String,
    /// Serialized HTML for the document body.
    pub body: String,
}

/// Renders a Markdown document into a page with default options.
///
/// Fails only when the document has no level-1 heading to use as a title;
/// malformed Markdown degrades to plain text instead of erroring.
pub fn render_page(markdown: &str) -> Result<Page, MissingTitle> {
    render_page_with_options(markdown, &RenderOptions::default())
}

/// Renders a page with explicit serialization options.
pub fn render_page_with_options(
    markdown: &str,
    options: &RenderOptions,
) -> Result<Page, MissingTitle> {
    let title = extract_title(markdown)?;
    let tree = build_document_tree(markdown);
    let body = render_with_options(&tree, options);
    log::debug!("rendered page {title:?} ({} bytes of body HTML)", body.len());
    Ok(Page { title, body })
}
