//! Config command - manage the stencil configuration file

use anyhow::Result;

use crate::cli::ConfigCommand;
use crate::config::StencilConfig;
use crate::ui;
use crate::Context as AppContext;

pub fn run(ctx: &AppContext, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => show(),
        ConfigCommand::Init => init(ctx),
        ConfigCommand::Path => {
            println!("{}", StencilConfig::path()?.display());
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let config = StencilConfig::load()?;

    ui::header("Configuration");
    ui::kv(
        "schema_path",
        config.schema_path.as_deref().unwrap_or("(unset)"),
    );
    ui::kv(
        "include_optional",
        if config.include_optional { "true" } else { "false" },
    );
    ui::dim(&format!("file: {}", StencilConfig::path()?.display()));

    Ok(())
}

fn init(ctx: &AppContext) -> Result<()> {
    let path = StencilConfig::path()?;
    if path.exists() {
        ui::warn(&format!("Config file already exists: {}", path.display()));
        return Ok(());
    }

    let written = StencilConfig::default().save()?;
    if !ctx.quiet {
        ui::success(&format!("Wrote default config to {}", written.display()));
    }

    Ok(())
}
