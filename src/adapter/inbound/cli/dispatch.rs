//! Command dispatch.

use std::path::Path;

use crate::adapter::inbound::cli::command::{CheckCommand, Cli, Commands, ConfigCommand};
use crate::adapter::inbound::cli::{check, config, import, operator, output, provision};
use crate::error::Result;
use crate::port::inbound::operator::port::OperatorPort;

/// Run the parsed command line against `service`.
///
/// # Errors
///
/// Returns the first error of the selected command.
pub async fn run(cli: Cli, service: &dyn OperatorPort) -> Result<()> {
    match cli.command {
        Commands::Provision(args) => {
            let config_toml = load(service, args.config.as_deref())?;
            provision::execute(service, &args, config_toml).await
        }
        Commands::Import(args) => {
            let config_toml = load(service, args.config.as_deref())?;
            import::execute(service, &args, config_toml).await
        }
        Commands::Config(ConfigCommand::Init(args)) => {
            config::execute_init(args.config.as_deref(), args.force)
        }
        Commands::Config(ConfigCommand::Show(args)) => {
            config::execute_show(service, args.config.as_deref())
        }
        Commands::Config(ConfigCommand::Validate(args)) => {
            config::execute_validate(service, args.config.as_deref())
        }
        Commands::Check(CheckCommand::Connection(args)) => {
            let config_toml = load(service, args.config.as_deref())?;
            check::execute_connection(service, &config_toml).await
        }
    }
}

/// Read the configuration and start logging with the CLI verbosity.
fn load(service: &dyn OperatorPort, path: Option<&Path>) -> Result<String> {
    let config_toml = operator::read_config_toml(path)?;
    service.init_logging(&config_toml, log_level_override())?;
    Ok(config_toml)
}

/// `-q` caps logs at warnings, each `-v` raises the configured level.
fn log_level_override() -> Option<&'static str> {
    if output::is_quiet() {
        return Some("warn");
    }
    match output::verbosity() {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}
