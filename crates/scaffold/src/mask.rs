//! Sensitivity masking decisions.
//!
//! A node must be masked when its schema declares it sensitive or the bound
//! value (or any ancestor the renderer already descended through) carries a
//! runtime mark. The first masked boundary is terminal: rendering substitutes
//! exactly one placeholder for the whole subtree and never inspects its
//! descendants, so element boundaries of a masked collection are never
//! reconstructed.

use hclkit::Value;

pub use hclkit::SENSITIVE;

/// Whether a schema position bound to an optional value must be masked.
pub fn masked(declared_sensitive: bool, value: Option<&Value>) -> bool {
    declared_sensitive || value.is_some_and(Value::is_sensitive)
}
