//! Nesting-mode expansion.
//!
//! Maps a nesting mode and an optional bound value to the ordered sequence of
//! child instances to render. This is the single place where cardinality
//! semantics live; the renderer dispatches here for every nested position.

use crate::schema::Nesting;
use hclkit::Value;

/// One child instance produced by expansion.
#[derive(Debug, Clone, Copy)]
pub enum Instance<'a> {
    /// Unlabeled instance; the value is absent in schema-only fallback
    Anonymous(Option<&'a Value>),
    /// Keyed map instance, labeled with its key
    Keyed(&'a str, &'a Value),
}

/// Expand a nesting mode over an optional bound value.
///
/// - `Single`/`Group`: exactly one instance, value or absent.
/// - `List`: one instance per element, input order preserved; an absent or
///   non-list value yields zero instances (nothing can be synthesized
///   without cardinality).
/// - `Set`: elements reordered into a deterministic total order (structural
///   ordering over values), identical across repeated invocations.
/// - `Map`: one labeled instance per entry, keys ascending.
pub fn expand<'a>(nesting: Nesting, value: Option<&'a Value>) -> Vec<Instance<'a>> {
    match nesting {
        Nesting::Single | Nesting::Group => vec![Instance::Anonymous(value)],
        Nesting::List => value
            .and_then(Value::as_list)
            .map(|items| items.iter().map(|v| Instance::Anonymous(Some(v))).collect())
            .unwrap_or_default(),
        Nesting::Set => {
            let mut items: Vec<&Value> = value
                .and_then(Value::as_list)
                .map(|items| items.iter().collect())
                .unwrap_or_default();
            items.sort_unstable();
            items
                .into_iter()
                .map(|v| Instance::Anonymous(Some(v)))
                .collect()
        }
        Nesting::Map => value
            .and_then(Value::as_object)
            .map(|fields| {
                fields
                    .iter()
                    .map(|(key, v)| Instance::Keyed(key.as_str(), v))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn anonymous_values<'a>(instances: &[Instance<'a>]) -> Vec<&'a Value> {
        instances
            .iter()
            .map(|i| match i {
                Instance::Anonymous(Some(v)) => *v,
                other => panic!("expected anonymous instance, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_single_always_one_instance() {
        let v = Value::from("x");
        assert_eq!(expand(Nesting::Single, Some(&v)).len(), 1);
        let schema_only = expand(Nesting::Single, None);
        assert!(matches!(schema_only[0], Instance::Anonymous(None)));
        assert_eq!(expand(Nesting::Group, None).len(), 1);
    }

    #[test]
    fn test_list_preserves_input_order() {
        let v = Value::list(vec![Value::from("foo"), Value::from("bar")]);
        let instances = expand(Nesting::List, Some(&v));
        let values = anonymous_values(&instances);
        assert_eq!(values, vec![&Value::from("foo"), &Value::from("bar")]);
    }

    #[test]
    fn test_list_absent_value_yields_nothing() {
        assert!(expand(Nesting::List, None).is_empty());
        // Mismatched payloads also yield nothing rather than panicking
        let scalar = Value::from(1);
        assert!(expand(Nesting::List, Some(&scalar)).is_empty());
    }

    #[test]
    fn test_set_reorders_deterministically() {
        let forward = Value::list(vec![Value::from("b"), Value::from("a"), Value::from("c")]);
        let backward = Value::list(vec![Value::from("c"), Value::from("b"), Value::from("a")]);

        let first = anonymous_values(&expand(Nesting::Set, Some(&forward)));
        let second = anonymous_values(&expand(Nesting::Set, Some(&backward)));

        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![&Value::from("a"), &Value::from("b"), &Value::from("c")]
        );
    }

    #[test]
    fn test_map_iterates_keys_ascending() {
        let mut fields = BTreeMap::new();
        fields.insert("2".to_string(), Value::from("second"));
        fields.insert("1".to_string(), Value::from("first"));
        let v = Value::object(fields);

        let instances = expand(Nesting::Map, Some(&v));
        let keys: Vec<_> = instances
            .iter()
            .map(|i| match i {
                Instance::Keyed(k, _) => *k,
                other => panic!("expected keyed instance, got {other:?}"),
            })
            .collect();
        assert_eq!(keys, vec!["1", "2"]);
    }
}
