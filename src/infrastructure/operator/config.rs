//! Configuration operator implementation.

use crate::domain::format_roles;
use crate::error::Result;
use crate::infrastructure::config::settings::{
    Config, ENV_ADMIN_PASSWORD, ENV_APP_PASSWORD, ENV_MONGO_URI,
};
use crate::port::inbound::operator::config::{
    ConfigValidationReport, ConfigView, ConfigurationOperator, EnvOverride,
};

use super::entry::Operator;

/// Administrator password a stock container is started with.
const CONTAINER_ADMIN_PASSWORD: &str = "12345678";

fn env_override(name: &'static str) -> EnvOverride {
    EnvOverride {
        name,
        set: std::env::var_os(name).is_some_and(|v| !v.is_empty()),
    }
}

impl ConfigurationOperator for Operator {
    fn show_config(&self, config_toml: &str) -> Result<ConfigView> {
        let config = Config::parse_toml(config_toml)?;
        let roles = format_roles(&config.provision_plan().roles);
        let config = config.redacted();

        Ok(ConfigView {
            log_level: config.logging.level,
            log_format: config.logging.format,
            mongo_uri: config.mongo.uri,
            app_name: config.mongo.app_name,
            connect_timeout_ms: config.mongo.connect_timeout_ms,
            server_selection_timeout_ms: config.mongo.server_selection_timeout_ms,
            admin_database: config.admin.database,
            admin_username: config.admin.username,
            admin_password: config.admin.password,
            app_database: config.application.database,
            app_username: config.application.username,
            app_password: config.application.password,
            roles,
            collection: config.application.collection,
            on_existing: config.provision.on_existing.to_string(),
            feed: config.import.feed.display().to_string(),
            environment: [ENV_MONGO_URI, ENV_ADMIN_PASSWORD, ENV_APP_PASSWORD]
                .into_iter()
                .map(env_override)
                .collect(),
        })
    }

    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport> {
        let config = Config::parse_toml(config_toml)?;
        let mut warnings = Vec::new();

        if config.admin.password == CONTAINER_ADMIN_PASSWORD {
            warnings.push(format!(
                "Administrator password is the container default (set {ENV_ADMIN_PASSWORD})"
            ));
        }
        if config.application.password == config.application.username {
            warnings.push("Application password equals the username".to_string());
        }
        if !config.import.feed.exists() {
            warnings.push(format!(
                "Feed file {} does not exist yet",
                config.import.feed.display()
            ));
        }

        Ok(ConfigValidationReport { warnings })
    }

    fn init_logging(&self, config_toml: &str, level: Option<&str>) -> Result<()> {
        let config = Config::parse_toml(config_toml)?;
        match level {
            Some(level) => config.logging.with_level(level).init(),
            None => config.logging.init(),
        }
        Ok(())
    }
}
