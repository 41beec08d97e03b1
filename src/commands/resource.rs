//! Resource command - scaffold configuration for one resource

use anyhow::{Context, Result};
use scaffold::{render_resource, RenderOptions, SchemaCatalog};
use std::fs;
use std::path::Path;

use crate::cli::ResourceArgs;
use crate::config::StencilConfig;
use crate::ui;
use crate::Context as AppContext;

pub fn run(ctx: &AppContext, args: ResourceArgs) -> Result<()> {
    let config = StencilConfig::load()?;
    let schema_path = super::resolve_schema_path(args.schema, &config)?;

    log::debug!("loading schema catalog from {}", schema_path.display());
    let catalog = SchemaCatalog::load(&schema_path)
        .with_context(|| format!("Could not load schema catalog {}", schema_path.display()))?;
    let schema = catalog.get(&args.resource_type)?;

    let captured = match &args.from_state {
        Some(path) => {
            if !ctx.quiet {
                ui::info(&format!("Using captured state from {}", path.display()));
            }
            let text = fs::read_to_string(path)
                .with_context(|| format!("Could not read state file {}", path.display()))?;
            Some(hclkit::capture::parse(&text)
                .with_context(|| format!("Invalid state file {}", path.display()))?)
        }
        None => None,
    };

    let options = RenderOptions {
        include_optional: args.optional || config.include_optional,
    };

    let raw = render_resource(
        &args.resource_type,
        &args.name,
        args.provider.as_deref(),
        schema,
        captured.as_ref(),
        options,
    )?;
    let formatted = hclkit::format(&raw);

    match &args.out {
        Some(path) => {
            append_to_file(path, &formatted)
                .with_context(|| format!("Could not write to {}", path.display()))?;
            if !ctx.quiet {
                ui::success(&format!(
                    "Added resource \"{}\" \"{}\" to {}",
                    args.resource_type,
                    args.name,
                    path.display()
                ));
            }
        }
        None => println!("{formatted}"),
    }

    Ok(())
}

/// Append generated configuration to a file, creating it if missing.
/// Existing content is separated from the new block by a blank line.
fn append_to_file(path: &Path, text: &str) -> Result<()> {
    use std::io::Write;

    let needs_separator = path.exists() && fs::metadata(path)?.len() > 0;
    let mut payload = String::with_capacity(text.len() + 2);
    if needs_separator {
        payload.push('\n');
    }
    payload.push_str(text);
    payload.push('\n');

    // One write, so a failure leaves no partial block behind
    let mut file = fs::OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(payload.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.tf");

        append_to_file(&path, "resource \"a\" \"b\" {\n}").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "resource \"a\" \"b\" {\n}\n");
    }

    #[test]
    fn test_append_separates_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.tf");

        append_to_file(&path, "resource \"a\" \"b\" {\n}").unwrap();
        append_to_file(&path, "resource \"c\" \"d\" {\n}").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "resource \"a\" \"b\" {\n}\n\nresource \"c\" \"d\" {\n}\n"
        );
    }
}
