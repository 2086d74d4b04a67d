//! HTML escaping boundary.
//!
//! Serialization emits text verbatim by default, matching the dialect's
//! compatibility behavior. All encoding goes through this module so a
//! stricter mode never touches tree construction.

use std::borrow::Cow;

/// Encodes HTML-significant characters in bare text content.
pub fn encode_text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

/// Encodes a value for use inside a double-quoted attribute.
pub fn encode_attribute(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}
