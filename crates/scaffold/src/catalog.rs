//! Resource schema catalogs.
//!
//! A catalog file maps resource type names to block schemas:
//!
//! ```json
//! {
//!   "resources": {
//!     "aws_instance": {
//!       "attributes": {"ami": {"type": "string", "required": true}}
//!     }
//!   }
//! }
//! ```

use crate::error::{Error, Result};
use crate::schema::BlockSchema;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// A set of resource schemas, keyed by resource type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaCatalog {
    #[serde(default)]
    resources: BTreeMap<String, BlockSchema>,
}

impl SchemaCatalog {
    /// Parse a catalog from JSON text and validate every schema in it.
    pub fn parse(text: &str) -> Result<Self> {
        let catalog: SchemaCatalog = serde_json::from_str(text)?;
        for (resource_type, schema) in &catalog.resources {
            schema.validate(resource_type)?;
        }
        Ok(catalog)
    }

    /// Load and validate a catalog from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Look up a resource type's schema.
    pub fn get(&self, resource_type: &str) -> Result<&BlockSchema> {
        self.resources
            .get(resource_type)
            .ok_or_else(|| Error::UnknownType {
                requested: resource_type.to_string(),
                available: self.types().collect::<Vec<_>>().join(", "),
            })
    }

    /// All resource types the catalog defines, ascending.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    /// Number of resource types defined.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the catalog defines no resource types.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
