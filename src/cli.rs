use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stencil")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "Scaffold HCL resource configuration from provider schemas", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scaffold configuration for one resource
    Resource(ResourceArgs),

    /// Inspect and validate schema catalogs
    #[command(subcommand)]
    Schema(SchemaCommand),

    /// Manage the stencil configuration file
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ============================================================================
// Resource
// ============================================================================

#[derive(Parser)]
pub struct ResourceArgs {
    /// Resource type as defined by the provider (e.g. aws_instance)
    pub resource_type: String,

    /// Configuration name for the new resource
    pub name: String,

    /// Provider schema catalog (JSON); defaults to schema_path from the config
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Fill in values from a captured state file instead of placeholders
    #[arg(long, value_name = "FILE")]
    pub from_state: Option<PathBuf>,

    /// Include optional attributes, not just required ones
    #[arg(short, long)]
    pub optional: bool,

    /// Provider reference to pin in the generated block (e.g. aws.us_east_1)
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Append the generated configuration to this file instead of stdout
    #[arg(short = 'O', long)]
    pub out: Option<PathBuf>,
}

// ============================================================================
// Schema Commands
// ============================================================================

#[derive(Subcommand)]
pub enum SchemaCommand {
    /// List resource types defined in a catalog
    List {
        /// Provider schema catalog (JSON)
        #[arg(short, long)]
        schema: Option<PathBuf>,
    },

    /// Show the full scaffold for a resource type, optionals included
    Show {
        /// Resource type to show
        resource_type: String,

        /// Provider schema catalog (JSON)
        #[arg(short, long)]
        schema: Option<PathBuf>,
    },

    /// Validate a schema catalog file
    Validate {
        /// Provider schema catalog (JSON)
        schema: PathBuf,
    },
}

// ============================================================================
// Config Commands
// ============================================================================

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the resolved configuration
    Show,

    /// Write a default config file
    Init,

    /// Print the config file location
    Path,
}
