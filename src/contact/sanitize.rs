//! Text sanitization for contact submissions.
//!
//! [`sanitize`] is a denylist: it removes angle brackets and trims. It
//! does not neutralize `&`, quotes or anything else, so it is not an HTML
//! defense on its own. Values interpolated into HTML additionally go
//! through [`escape_html`] unless `contact.escape_html` is disabled.

use serde_json::Value;

/// Sanitize a form value.
///
/// Non-string values (and absent values) become an empty string. Strings
/// are trimmed and every `<` and `>` is removed.
pub fn sanitize(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => sanitize_str(s),
        _ => String::new(),
    }
}

/// Trim surrounding whitespace and drop every `<` and `>`.
pub fn sanitize_str(s: &str) -> String {
    let stripped: String = s.chars().filter(|c| !matches!(c, '<' | '>')).collect();
    stripped.trim().to_string()
}

/// Escape HTML metacharacters for use in element content or quoted attributes.
///
/// Not sufficient for unquoted attributes, `<script>` blocks or URLs.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
