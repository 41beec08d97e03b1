//! Core types for HCL values and type descriptors.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Type descriptor for a schema attribute.
///
/// Mirrors the type expressions found in provider schema files: a primitive
/// name (`"string"`) or a tagged pair (`["list", "string"]`,
/// `["object", {"name": "string"}]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// UTF-8 text
    String,
    /// Integer or fractional number
    Number,
    /// Boolean
    Bool,
    /// Ordered sequence of one element type
    List(Box<Kind>),
    /// Unordered collection of one element type
    Set(Box<Kind>),
    /// String-keyed collection of one element type
    Map(Box<Kind>),
    /// Fixed set of named fields
    Object(BTreeMap<String, Kind>),
}

impl Kind {
    /// Human-readable type name used in scaffold annotations.
    pub fn friendly_name(&self) -> String {
        match self {
            Kind::String => "string".to_string(),
            Kind::Number => "number".to_string(),
            Kind::Bool => "bool".to_string(),
            Kind::List(inner) => format!("list of {}", inner.friendly_name()),
            Kind::Set(inner) => format!("set of {}", inner.friendly_name()),
            Kind::Map(inner) => format!("map of {}", inner.friendly_name()),
            Kind::Object(_) => "object".to_string(),
        }
    }

    /// The empty/zero value used to scaffold an attribute absent a concrete
    /// value.
    pub fn placeholder(&self) -> Value {
        match self {
            Kind::String => Value::from(""),
            Kind::Number => Value::from(0),
            Kind::Bool => Value::from(false),
            Kind::List(_) | Kind::Set(_) => Value::list(Vec::new()),
            Kind::Map(_) | Kind::Object(_) => Value::object(BTreeMap::new()),
        }
    }

    /// Parse a type expression from its JSON form.
    pub fn from_type_expr(expr: &serde_json::Value) -> Result<Self, String> {
        match expr {
            serde_json::Value::String(name) => match name.as_str() {
                "string" => Ok(Kind::String),
                "number" => Ok(Kind::Number),
                "bool" => Ok(Kind::Bool),
                other => Err(format!("unknown primitive type '{other}'")),
            },
            serde_json::Value::Array(parts) => {
                if parts.len() != 2 {
                    return Err(format!(
                        "type expression must have exactly 2 elements, got {}",
                        parts.len()
                    ));
                }
                let tag = parts[0]
                    .as_str()
                    .ok_or_else(|| "type tag must be a string".to_string())?;
                match tag {
                    "list" => Ok(Kind::List(Box::new(Kind::from_type_expr(&parts[1])?))),
                    "set" => Ok(Kind::Set(Box::new(Kind::from_type_expr(&parts[1])?))),
                    "map" => Ok(Kind::Map(Box::new(Kind::from_type_expr(&parts[1])?))),
                    "object" => {
                        let fields = parts[1].as_object().ok_or_else(|| {
                            "object type expects a mapping of field types".to_string()
                        })?;
                        let mut attrs = BTreeMap::new();
                        for (name, field_expr) in fields {
                            attrs.insert(name.clone(), Kind::from_type_expr(field_expr)?);
                        }
                        Ok(Kind::Object(attrs))
                    }
                    other => Err(format!("unknown type constructor '{other}'")),
                }
            }
            other => Err(format!("invalid type expression: {other}")),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.friendly_name())
    }
}

impl<'de> Deserialize<'de> for Kind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let expr = serde_json::Value::deserialize(deserializer)?;
        Kind::from_type_expr(&expr).map_err(de::Error::custom)
    }
}

/// Numeric value, integer or floating point.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Whole number
    Int(i64),
    /// Fractional number
    Float(f64),
}

impl Number {
    /// Whether the number has a finite literal representation.
    pub fn is_finite(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(f) => f.is_finite(),
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    fn tag(self) -> u8 {
        match self {
            Number::Int(_) => 0,
            Number::Float(_) => 1,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    // Total order so values can be sorted deterministically; ties between
    // numerically equal Int/Float break on the variant tag to stay
    // consistent with Eq.
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_f64()
            .total_cmp(&other.as_f64())
            .then_with(|| self.tag().cmp(&other.tag()))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) => {
                if x.is_finite() && *x == x.trunc() && x.abs() < 1e15 {
                    write!(f, "{x:.0}")
                } else {
                    write!(f, "{x}")
                }
            }
        }
    }
}

/// The shape of a value node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Payload {
    /// Explicit null
    Null,
    /// Boolean
    Bool(bool),
    /// Number
    Number(Number),
    /// String
    String(String),
    /// Ordered sequence of values
    List(Vec<Value>),
    /// Named fields; doubles as a keyed map (the schema decides which)
    Object(BTreeMap<String, Value>),
}

/// A node of a captured value tree.
///
/// Every node pairs its payload with a sensitivity flag; a mark on any node
/// is terminal for rendering, so descendants are never inspected once an
/// ancestor is masked.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Value {
    payload: Payload,
    sensitive: bool,
}

impl Value {
    /// Create an unmarked value from a payload.
    pub fn new(payload: Payload) -> Self {
        Self {
            payload,
            sensitive: false,
        }
    }

    /// Explicit null value.
    pub fn null() -> Self {
        Self::new(Payload::Null)
    }

    /// List value from elements.
    pub fn list(items: Vec<Value>) -> Self {
        Self::new(Payload::List(items))
    }

    /// Object (or keyed map) value from fields.
    pub fn object(fields: BTreeMap<String, Value>) -> Self {
        Self::new(Payload::Object(fields))
    }

    /// Mark this value as sensitive.
    pub fn marked(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Whether this node carries a sensitivity mark.
    pub fn is_sensitive(&self) -> bool {
        self.sensitive
    }

    /// Whether this node is an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self.payload, Payload::Null)
    }

    /// The payload of this node.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Look up a field of an object value.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        match &self.payload {
            Payload::Object(fields) => fields.get(name),
            _ => None,
        }
    }

    /// View this value as a list of elements.
    pub fn as_list(&self) -> Option<&[Value]> {
        match &self.payload {
            Payload::List(items) => Some(items),
            _ => None,
        }
    }

    /// View this value as an object/keyed map.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match &self.payload {
            Payload::Object(fields) => Some(fields),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::new(Payload::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::new(Payload::Number(Number::Int(i)))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::new(Payload::Number(Number::Float(f)))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::new(Payload::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::new(Payload::String(s))
    }
}
