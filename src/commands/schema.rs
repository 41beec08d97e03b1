//! Schema command - inspect and validate schema catalogs

use anyhow::{Context, Result};
use scaffold::{render_resource, RenderOptions, SchemaCatalog};
use std::path::Path;

use crate::cli::SchemaCommand;
use crate::config::StencilConfig;
use crate::ui;
use crate::Context as AppContext;

pub fn run(ctx: &AppContext, cmd: SchemaCommand) -> Result<()> {
    match cmd {
        SchemaCommand::List { schema } => list(schema.as_deref()),
        SchemaCommand::Show {
            resource_type,
            schema,
        } => show(&resource_type, schema.as_deref()),
        SchemaCommand::Validate { schema } => validate(ctx, &schema),
    }
}

fn load_catalog(explicit: Option<&Path>) -> Result<SchemaCatalog> {
    let config = StencilConfig::load()?;
    let path = super::resolve_schema_path(explicit.map(Path::to_path_buf), &config)?;
    SchemaCatalog::load(&path)
        .with_context(|| format!("Could not load schema catalog {}", path.display()))
}

fn list(schema: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(schema)?;

    ui::header("Resource types");
    for resource_type in catalog.types() {
        println!("  {resource_type}");
    }
    ui::dim(&format!("{} types", catalog.len()));

    Ok(())
}

fn show(resource_type: &str, schema: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(schema)?;
    let block = catalog.get(resource_type)?;

    // The full shape, optionals included, is the most useful reference
    let raw = render_resource(
        resource_type,
        "example",
        None,
        block,
        None,
        RenderOptions {
            include_optional: true,
        },
    )?;
    println!("{}", hclkit::format(&raw));

    Ok(())
}

fn validate(ctx: &AppContext, schema: &Path) -> Result<()> {
    let catalog = SchemaCatalog::load(schema)
        .with_context(|| format!("Could not load schema catalog {}", schema.display()))?;

    if !ctx.quiet {
        ui::success(&format!(
            "{} is valid ({} resource types)",
            schema.display(),
            catalog.len()
        ));
        if ctx.verbose > 0 {
            for resource_type in catalog.types() {
                ui::dim(resource_type);
            }
        }
    }

    Ok(())
}
