//! Handler for the `config` command group.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapter::inbound::cli::operator::{config_source, read_config_toml, DEFAULT_CONFIG};
use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::port::inbound::operator::port::OperatorPort;

/// Default config template with documentation.
pub const CONFIG_TEMPLATE: &str = include_str!("../../../../stockroom.toml.example");

/// Execute `config init`.
pub fn execute_init(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), Path::to_path_buf);
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(&path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note("2. Set STOCKROOM_ADMIN_PASSWORD and STOCKROOM_APP_PASSWORD instead of storing passwords");
    output::note(&format!(
        "3. Run: stockroom check connection -c {}",
        path.display()
    ));
    output::note(&format!("4. Run: stockroom provision -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(service: &dyn OperatorPort, path: Option<&Path>) -> Result<()> {
    let config_toml = read_config_toml(path)?;
    let view = service.show_config(&config_toml)?;

    if output::is_json() {
        output::record("config", serde_json::to_value(&view)?);
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Source", config_source(path));

    output::section("Logging");
    output::field("Level", &view.log_level);
    output::field("Format", &view.log_format);

    output::section("MongoDB");
    output::field("URI", &view.mongo_uri);
    output::field("App name", &view.app_name);
    output::field("Connect", format!("{}ms", view.connect_timeout_ms));
    output::field("Selection", format!("{}ms", view.server_selection_timeout_ms));

    output::section("Administrator");
    output::field("Database", &view.admin_database);
    output::field("Username", &view.admin_username);
    output::field("Password", &view.admin_password);

    output::section("Application");
    output::field("Database", &view.app_database);
    output::field("Username", &view.app_username);
    output::field("Password", &view.app_password);
    output::field("Roles", &view.roles);
    output::field("Collection", &view.collection);

    output::section("Provision");
    output::field("On existing", &view.on_existing);

    output::section("Import");
    output::field("Feed", &view.feed);

    output::section("Environment");
    for var in &view.environment {
        output::field(var.name, if var.set { "set" } else { "unset" });
    }
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(service: &dyn OperatorPort, path: Option<&Path>) -> Result<()> {
    let config_toml = read_config_toml(path)?;
    let report = service.validate_config(&config_toml)?;

    output::section("Configuration Check");
    output::field("Config", config_source(path));
    output::success("Configuration is valid");

    for warning in &report.warnings {
        output::warning(warning);
    }
    Ok(())
}
