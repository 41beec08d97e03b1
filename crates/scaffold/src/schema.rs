//! Schema model for resource configuration.
//!
//! A resource schema is a tree of attribute and block definitions, loaded
//! from provider schema JSON. Attribute and block names are map keys, so
//! uniqueness per level is guaranteed by construction and iteration order is
//! always ascending, independent of the file's key order.

use crate::error::{Error, Result};
use hclkit::{Kind, Value};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Cardinality tag for nested attributes and blocks.
///
/// `Group` is only meaningful for blocks; the expander treats it like
/// `Single`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nesting {
    /// Exactly one instance
    #[default]
    Single,
    /// Exactly one instance, attribute defaults applied as a group
    Group,
    /// Ordered, repeatable
    List,
    /// Unordered, repeatable
    Set,
    /// Keyed, repeatable
    Map,
}

/// Schema for a single attribute.
#[derive(Debug, Clone, Deserialize)]
pub struct AttributeSchema {
    /// Must be set in configuration
    #[serde(default)]
    pub required: bool,
    /// May be set in configuration
    #[serde(default)]
    pub optional: bool,
    /// Derived by the provider; computed-only attributes are never scaffolded
    #[serde(default)]
    pub computed: bool,
    /// Value must not be printed in the clear
    #[serde(default)]
    pub sensitive: bool,
    /// Scalar/collection type descriptor
    #[serde(rename = "type", default)]
    pub kind: Option<Kind>,
    /// Nested-object schema for object-typed attributes
    #[serde(default)]
    pub nested: Option<ObjectSchema>,
}

impl AttributeSchema {
    /// Inclusion rule: required, or optional when optionals are requested.
    pub fn included(&self, include_optional: bool) -> bool {
        self.required || (self.optional && include_optional)
    }

    /// Friendly type name used in scaffold annotations.
    pub fn friendly_type(&self) -> String {
        if let Some(nested) = &self.nested {
            nested.friendly_name()
        } else if let Some(kind) = &self.kind {
            kind.friendly_name()
        } else {
            "any".to_string()
        }
    }

    /// Placeholder value scaffolded when no concrete value is bound.
    pub fn placeholder(&self) -> Value {
        self.kind.as_ref().map_or_else(Value::null, Kind::placeholder)
    }

    fn validate(&self, path: &str) -> Result<()> {
        if self.kind.is_some() && self.nested.is_some() {
            return Err(Error::InvalidSchema {
                path: path.to_string(),
                reason: "attribute declares both a type and a nested schema".to_string(),
            });
        }
        if self.kind.is_none() && self.nested.is_none() {
            return Err(Error::InvalidSchema {
                path: path.to_string(),
                reason: "attribute declares neither a type nor a nested schema".to_string(),
            });
        }
        if self.required && self.optional {
            return Err(Error::InvalidSchema {
                path: path.to_string(),
                reason: "attribute is both required and optional".to_string(),
            });
        }
        if let Some(nested) = &self.nested {
            nested.validate(path)?;
        }
        Ok(())
    }
}

/// Nested-object schema for object-typed attributes.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectSchema {
    /// Cardinality of the nested object
    #[serde(default)]
    pub nesting: Nesting,
    /// Field definitions, keyed by name
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeSchema>,
}

impl ObjectSchema {
    /// Friendly type name: the nesting applied to `object`.
    pub fn friendly_name(&self) -> String {
        match self.nesting {
            Nesting::Single | Nesting::Group => "object".to_string(),
            Nesting::List => "list of object".to_string(),
            Nesting::Set => "set of object".to_string(),
            Nesting::Map => "map of object".to_string(),
        }
    }

    fn validate(&self, path: &str) -> Result<()> {
        if self.nesting == Nesting::Group {
            return Err(Error::InvalidSchema {
                path: path.to_string(),
                reason: "group nesting is not valid for object-typed attributes".to_string(),
            });
        }
        for (name, attr) in &self.attributes {
            attr.validate(&format!("{path}.{name}"))?;
        }
        Ok(())
    }
}

/// Schema for a block type, recursively containing attributes and blocks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockSchema {
    /// Cardinality of the block
    #[serde(default)]
    pub nesting: Nesting,
    /// Minimum number of occurrences required by the provider
    #[serde(default)]
    pub min_items: u64,
    /// Attribute definitions, keyed by name
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeSchema>,
    /// Child block definitions, keyed by name
    #[serde(default)]
    pub blocks: BTreeMap<String, BlockSchema>,
}

impl BlockSchema {
    /// Validate the block and everything beneath it.
    pub fn validate(&self, path: &str) -> Result<()> {
        for (name, attr) in &self.attributes {
            attr.validate(&format!("{path}.{name}"))?;
        }
        for (name, block) in &self.blocks {
            block.validate(&format!("{path}.{name}"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(json: &str) -> AttributeSchema {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_deserialize_attribute() {
        let a = attr(r#"{"type": "string", "required": true}"#);
        assert!(a.required);
        assert!(!a.optional);
        assert!(!a.sensitive);
        assert_eq!(a.kind, Some(Kind::String));
    }

    #[test]
    fn test_inclusion_rule() {
        let required = attr(r#"{"type": "string", "required": true}"#);
        let optional = attr(r#"{"type": "string", "optional": true}"#);
        let computed = attr(r#"{"type": "string", "computed": true}"#);

        assert!(required.included(false));
        assert!(required.included(true));
        assert!(!optional.included(false));
        assert!(optional.included(true));
        assert!(!computed.included(false));
        assert!(!computed.included(true));
    }

    #[test]
    fn test_friendly_type() {
        assert_eq!(attr(r#"{"type": "string"}"#).friendly_type(), "string");
        assert_eq!(
            attr(r#"{"type": ["list", "number"]}"#).friendly_type(),
            "list of number"
        );
        let nested = attr(
            r#"{"nested": {"nesting": "list", "attributes": {"name": {"type": "string"}}}}"#,
        );
        assert_eq!(nested.friendly_type(), "list of object");
    }

    #[test]
    fn test_validate_rejects_conflicting_flags() {
        let a = attr(r#"{"type": "string", "required": true, "optional": true}"#);
        assert!(a.validate("r.x").is_err());
    }

    #[test]
    fn test_validate_requires_a_type() {
        let a = attr(r#"{"required": true}"#);
        let err = a.validate("r.x").unwrap_err();
        assert!(matches!(err, Error::InvalidSchema { .. }));
    }

    #[test]
    fn test_validate_rejects_group_nested_attribute() {
        let a = attr(r#"{"nested": {"nesting": "group"}}"#);
        assert!(a.validate("r.x").is_err());
    }

    #[test]
    fn test_block_schema_defaults() {
        let b: BlockSchema = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(b.nesting, Nesting::Single);
        assert_eq!(b.min_items, 0);
        assert!(b.attributes.is_empty());
        assert!(b.blocks.is_empty());
    }

    #[test]
    fn test_block_validate_walks_children() {
        let b: BlockSchema = serde_json::from_str(
            r#"{"blocks": {"child": {"attributes": {"bad": {}}}}}"#,
        )
        .unwrap();
        let err = b.validate("res").unwrap_err();
        match err {
            Error::InvalidSchema { path, .. } => assert_eq!(path, "res.child.bad"),
            other => panic!("expected InvalidSchema, got {other:?}"),
        }
    }
}
