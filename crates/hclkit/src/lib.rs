//! # hclkit
//!
//! HCL-flavored value toolkit for configuration scaffolding.
//!
//! This crate provides functionality for:
//! - Modeling captured value trees with per-node sensitivity marks
//! - Parsing provider type expressions into type descriptors
//! - Rendering typed values as HCL literals
//! - Re-indenting raw block text into canonical form
//!
//! ## Example
//!
//! ```
//! use hclkit::{capture, to_literal, Value};
//!
//! let value = capture::parse(r#"{"ports": [80, 443]}"#).unwrap();
//! let ports = value.attr("ports").unwrap();
//! assert_eq!(to_literal(ports).unwrap(), "[80, 443]");
//!
//! // Sensitivity marks are terminal for rendering
//! let secret = Value::from("hunter2").marked();
//! assert_eq!(to_literal(&secret).unwrap(), "(sensitive)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod capture;
pub mod error;
pub mod format;
pub mod literal;
pub mod types;

pub use error::{Error, Result};
pub use format::format;
pub use literal::{to_literal, SENSITIVE};
pub use types::{Kind, Number, Payload, Value};
