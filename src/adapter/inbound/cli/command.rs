//! Command-line interface definitions.
//!
//! Defines the CLI structure for stockroom using `clap`. The CLI provisions
//! a fresh database instance, imports the supplier product feed, manages the
//! configuration file and checks connectivity.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::ExistingPolicy;

/// Bootstrap and feed import for the product catalogue database
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the stockroom CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the application user and product collection (run once)
    Provision(ProvisionArgs),

    /// Import the supplier XML feed into the product collection
    Import(ImportArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `stockroom config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Subcommands for `stockroom check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Authenticate as the administrator and ping the deployment.
    Connection(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
///
/// Without `--config`, `stockroom.toml` in the working directory is used when
/// present and built-in defaults otherwise.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Existing-object policy as accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OnExisting {
    /// Leave an existing user or collection in place
    Skip,
    /// Abort when the user or collection already exists
    Fail,
}

impl From<OnExisting> for ExistingPolicy {
    fn from(value: OnExisting) -> Self {
        match value {
            OnExisting::Skip => Self::Skip,
            OnExisting::Fail => Self::Fail,
        }
    }
}

/// Arguments for the `provision` subcommand.
#[derive(Parser, Debug)]
pub struct ProvisionArgs {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override `[provision] on_existing`
    #[arg(long, value_enum)]
    pub on_existing: Option<OnExisting>,
}

/// Arguments for the `import` subcommand.
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Feed file to import (overrides `[import] feed`)
    #[arg(short, long)]
    pub feed: Option<PathBuf>,

    /// Parse and compare against the collection without writing
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Path for the new configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}
