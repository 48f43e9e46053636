//! Input checks for contact submissions.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Check that a string looks like `local@domain.tld`.
///
/// Purely syntactic: one `@`, no whitespace, and a dot in the domain with
/// text on both sides. Deliverability is not checked.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Check whether a form value counts as provided.
///
/// Absent, `null`, `false`, `0` and `""` count as missing. Any other value,
/// including whitespace-only strings, counts as present.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
