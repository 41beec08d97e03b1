pub mod config;
pub mod resource;
pub mod schema;

use crate::config::StencilConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Resolve the schema catalog path: an explicit flag wins, then the config
/// file's `schema_path`.
pub(crate) fn resolve_schema_path(
    explicit: Option<PathBuf>,
    config: &StencilConfig,
) -> Result<PathBuf> {
    explicit
        .or_else(|| config.schema_path.clone().map(PathBuf::from))
        .context(
            "No schema catalog given. Pass --schema or set schema_path in ~/.config/stencil/config.toml",
        )
}
