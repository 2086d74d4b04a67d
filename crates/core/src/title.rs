//! Page title extraction.

use thiserror::Error;

/// The document has no level-1 heading to use as a page title.
///
/// Fatal for page generation; the pipeline itself never raises this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no level-1 heading found to use as the page title")]
pub struct MissingTitle;

/// Extracts the page title from the first `# ` heading line.
///
/// Exactly one `#` followed by whitespace qualifies; deeper headings are
/// skipped. The marker is removed and the remainder trimmed.
pub fn extract_title(markdown: &str) -> Result<String, MissingTitle> {
    for line in markdown.lines() {
        if let Some(rest) = line.strip_prefix('#')
            && rest.chars().next().is_some_and(char::is_whitespace)
        {
            return Ok(rest.trim().to_string());
        }
    }
    Err(MissingTitle)
}
