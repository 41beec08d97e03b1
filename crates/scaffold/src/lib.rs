//! # scaffold
//!
//! Schema-driven scaffolding of resource configuration text.
//!
//! This crate provides functionality for:
//! - Loading resource schemas from provider schema catalogs
//! - Scaffolding placeholder configuration from a schema alone
//! - Filling in real values from a captured value tree
//! - Honoring sensitivity masking and nesting cardinality
//!
//! ## Example
//!
//! ```
//! use scaffold::{render_resource, RenderOptions, SchemaCatalog};
//!
//! let catalog = SchemaCatalog::parse(r#"{
//!     "resources": {
//!         "aws_instance": {
//!             "attributes": {"ami": {"type": "string", "required": true}}
//!         }
//!     }
//! }"#).unwrap();
//!
//! let schema = catalog.get("aws_instance").unwrap();
//! let text = render_resource(
//!     "aws_instance",
//!     "example",
//!     None,
//!     schema,
//!     None,
//!     RenderOptions::default(),
//! ).unwrap();
//! assert!(text.contains("ami = \"\" # REQUIRED string"));
//! ```
//!
//! Generation is a pure, single-threaded function of its inputs: no shared
//! state, no mutation, byte-identical output for identical inputs. It is
//! safe to invoke concurrently for independent resources.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod emit;
pub mod error;
pub mod expand;
pub mod mask;
pub mod render;
pub mod schema;

pub use catalog::SchemaCatalog;
pub use error::{Error, Result};
pub use render::{render_resource, RenderOptions};
pub use schema::{AttributeSchema, BlockSchema, Nesting, ObjectSchema};
