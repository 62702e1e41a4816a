//! Configuration projections for operator-facing adapters.

use serde::Serialize;

use crate::error::Result;

/// Whether an override variable is present in the environment.
#[derive(Debug, Clone, Serialize)]
pub struct EnvOverride {
    pub name: &'static str,
    pub set: bool,
}

/// Effective configuration with secrets masked, for `config show`.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigView {
    pub log_level: String,
    pub log_format: String,
    pub mongo_uri: String,
    pub app_name: String,
    pub connect_timeout_ms: u64,
    pub server_selection_timeout_ms: u64,
    pub admin_database: String,
    pub admin_username: String,
    pub admin_password: String,
    pub app_database: String,
    pub app_username: String,
    pub app_password: String,
    /// Grants as `role@db`, comma separated.
    pub roles: String,
    pub collection: String,
    pub on_existing: String,
    pub feed: String,
    pub environment: Vec<EnvOverride>,
}

/// Validation output for `config validate`.
#[derive(Debug, Clone, Default)]
pub struct ConfigValidationReport {
    pub warnings: Vec<String>,
}

/// Configuration use-cases for operator-facing adapters.
pub trait ConfigurationOperator: Send + Sync {
    /// Build a projection for `config show`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is malformed or invalid.
    fn show_config(&self, config_toml: &str) -> Result<ConfigView>;

    /// Validate configuration and collect non-fatal warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is malformed or invalid.
    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport>;

    /// Install the log subscriber described by the configuration.
    ///
    /// `level` replaces the configured level when given.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is malformed or invalid.
    fn init_logging(&self, config_toml: &str, level: Option<&str>) -> Result<()>;
}
