//! Literal rendering for HCL values.
//!
//! Converts a typed value into its textual literal form. Collections render
//! on a single line; block-level layout is the renderer's concern, not ours.

use crate::error::{Error, Result};
use crate::types::{Payload, Value};

/// Placeholder token substituted for any masked subtree.
pub const SENSITIVE: &str = "(sensitive)";

/// Render a value as an HCL literal.
///
/// A sensitivity mark on the node (or any nested node) is terminal: the
/// marked subtree collapses to the [`SENSITIVE`] token and its contents are
/// never inspected. Fails when the value has no literal representation
/// (currently only non-finite numbers).
pub fn to_literal(value: &Value) -> Result<String> {
    if value.is_sensitive() {
        return Ok(SENSITIVE.to_string());
    }

    match value.payload() {
        Payload::Null => Ok("null".to_string()),
        Payload::Bool(b) => Ok(b.to_string()),
        Payload::Number(n) => {
            if !n.is_finite() {
                return Err(Error::unrepresentable(format!(
                    "non-finite number {n:?}"
                )));
            }
            Ok(n.to_string())
        }
        Payload::String(s) => Ok(quote_string(s)),
        Payload::List(items) => {
            let rendered: Result<Vec<String>> = items.iter().map(to_literal).collect();
            Ok(format!("[{}]", rendered?.join(", ")))
        }
        Payload::Object(fields) => {
            if fields.is_empty() {
                return Ok("{}".to_string());
            }
            let mut parts = Vec::with_capacity(fields.len());
            for (key, field) in fields {
                parts.push(format!("{} = {}", object_key(key), to_literal(field)?));
            }
            Ok(format!("{{ {} }}", parts.join(", ")))
        }
    }
}

/// Quote and escape a string literal.
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Template introducers must be doubled so the scaffold does not
            // accidentally contain an interpolation.
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.push(c);
                out.push(c);
            }
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Render an object key, quoting it unless it is a bare identifier.
fn object_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        quote_string(key)
    }
}

/// Whether a string is usable as a bare HCL identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Render a `key = value` map entry with the key quoted.
pub fn map_entry(key: &str, rendered_value: &str) -> String {
    format!("{} = {}", quote_string(key), rendered_value)
}
