//! Loading captured value trees from JSON.
//!
//! A capture file is plain JSON mirroring the resource's attribute structure.
//! Any node may be wrapped in a single-key object `{"$sensitive": <value>}`
//! to carry a runtime sensitivity mark; `$` cannot appear in an HCL
//! identifier, so the marker never collides with a real attribute name.

use crate::error::Result;
use crate::types::Value;

/// Key marking a wrapped node as sensitive.
const SENSITIVE_KEY: &str = "$sensitive";

/// Parse a capture file's text into a value tree.
pub fn parse(text: &str) -> Result<Value> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    Ok(from_json(&json))
}

/// Convert a JSON document into a value tree, honoring `$sensitive` wrappers.
pub fn from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::null(),
        serde_json::Value::Bool(b) => Value::from(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else {
                Value::from(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::from(s.as_str()),
        serde_json::Value::Array(items) => {
            Value::list(items.iter().map(from_json).collect())
        }
        serde_json::Value::Object(fields) => {
            if fields.len() == 1 {
                if let Some(inner) = fields.get(SENSITIVE_KEY) {
                    return from_json(inner).marked();
                }
            }
            Value::object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), from_json(v)))
                    .collect(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Payload;

    fn parse_ok(text: &str) -> Value {
        parse(text).unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(parse_ok("null"), Value::null());
        assert_eq!(parse_ok("true"), Value::from(true));
        assert_eq!(parse_ok("7"), Value::from(7));
        assert_eq!(parse_ok("2.5"), Value::from(2.5));
        assert_eq!(parse_ok("\"ami-1234\""), Value::from("ami-1234"));
    }

    #[test]
    fn test_structures() {
        let v = parse_ok(r#"{"tags": {"env": "prod"}, "ports": [80, 443]}"#);
        assert_eq!(v.attr("tags").unwrap().attr("env"), Some(&Value::from("prod")));
        assert_eq!(v.attr("ports").unwrap().as_list().unwrap().len(), 2);
    }

    #[test]
    fn test_sensitive_wrapper() {
        let v = parse_ok(r#"{"password": {"$sensitive": "hunter2"}}"#);
        let password = v.attr("password").unwrap();
        assert!(password.is_sensitive());
        assert_eq!(password.payload(), &Payload::String("hunter2".to_string()));
        assert!(!v.is_sensitive());
    }

    #[test]
    fn test_sensitive_wrapper_on_container() {
        let v = parse_ok(r#"{"$sensitive": {"user": "root", "pass": "x"}}"#);
        assert!(v.is_sensitive());
        // Contents survive under the mark even though rendering never reads them
        assert_eq!(v.attr("user"), Some(&Value::from("root")));
    }

    #[test]
    fn test_wrapper_requires_single_key() {
        // An object that merely contains "$sensitive" among other keys is data
        let v = parse_ok(r#"{"$sensitive": true, "other": 1}"#);
        assert!(!v.is_sensitive());
        assert_eq!(v.attr("$sensitive"), Some(&Value::from(true)));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(parse("{not json").is_err());
    }
}
