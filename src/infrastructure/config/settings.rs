//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for the connection string and both passwords. Every section has defaults
//! matching the stock container bootstrap, so an empty file is valid.
//!
//! # Example
//!
//! ```no_run
//! use stockroom::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("stockroom.toml")?;
//!     config.init_logging();
//!     let plan = config.provision_plan();
//!     assert_eq!(plan.collection, "product");
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use crate::adapter::outbound::mongo::MongoConfig;
use crate::domain::{Credential, ExistingPolicy, ProvisionPlan, RoleGrant};
use crate::error::{ConfigError, Result};

pub const ENV_MONGO_URI: &str = "STOCKROOM_MONGO_URI";
pub const ENV_ADMIN_PASSWORD: &str = "STOCKROOM_ADMIN_PASSWORD";
pub const ENV_APP_PASSWORD: &str = "STOCKROOM_APP_PASSWORD";

/// Administrative login used once to bootstrap the instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Database the administrator authenticates against.
    pub database: String,
    pub username: String,
    /// Overridden by `STOCKROOM_ADMIN_PASSWORD`.
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            database: "admin".into(),
            username: "root".into(),
            password: "12345678".into(),
        }
    }
}

/// Application database, its scoped user and the product collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub database: String,
    pub username: String,
    /// Overridden by `STOCKROOM_APP_PASSWORD`.
    pub password: String,
    /// Role granted on `database`.
    pub role: String,
    pub collection: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            database: "products".into(),
            username: "app_user".into(),
            password: "password".into(),
            role: "readWrite".into(),
            collection: "product".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProvisionConfig {
    /// Behaviour when the user or collection already exists.
    pub on_existing: ExistingPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Supplier feed read by `stockroom import`.
    pub feed: PathBuf,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            feed: PathBuf::from("lonca-sample.xml"),
        }
    }
}

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Deployment connection settings.
    #[serde(default)]
    pub mongo: MongoConfig,

    #[serde(default)]
    pub admin: AdminConfig,

    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub provision: ProvisionConfig,

    #[serde(default)]
    pub import: ImportConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Applies overrides from the process environment, then validates.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Like [`Config::parse_toml`] with an explicit environment lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml_with_env(
        content: &str,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(env);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        let set = |value: Option<String>| value.filter(|v| !v.is_empty());
        if let Some(uri) = set(env(ENV_MONGO_URI)) {
            self.mongo.uri = uri;
        }
        if let Some(password) = set(env(ENV_ADMIN_PASSWORD)) {
            self.admin.password = password;
        }
        if let Some(password) = set(env(ENV_APP_PASSWORD)) {
            self.application.password = password;
        }
    }

    /// Validate configuration values.
    ///
    /// Checks that names are present and acceptable to the server, and that
    /// timeouts are positive.
    fn validate(&self) -> Result<()> {
        self.logging.validate()?;

        if self.mongo.uri.is_empty() {
            return Err(ConfigError::MissingField { field: "mongo.uri" }.into());
        }
        if !self.mongo.uri.starts_with("mongodb://") && !self.mongo.uri.starts_with("mongodb+srv://")
        {
            return Err(ConfigError::InvalidValue {
                field: "mongo.uri",
                reason: "must start with mongodb:// or mongodb+srv://".to_string(),
            }
            .into());
        }
        if self.mongo.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "mongo.connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.mongo.server_selection_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "mongo.server_selection_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        validate_database_name("admin.database", &self.admin.database)?;
        validate_database_name("application.database", &self.application.database)?;
        validate_collection_name("application.collection", &self.application.collection)?;

        for (field, value) in [
            ("admin.username", &self.admin.username),
            ("admin.password", &self.admin.password),
            ("application.username", &self.application.username),
            ("application.password", &self.application.password),
            ("application.role", &self.application.role),
        ] {
            if value.is_empty() {
                return Err(ConfigError::MissingField { field }.into());
            }
        }

        if self.import.feed.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "import.feed",
            }
            .into());
        }
        Ok(())
    }

    /// Bootstrap plan described by this configuration.
    #[must_use]
    pub fn provision_plan(&self) -> ProvisionPlan {
        ProvisionPlan {
            admin_db: self.admin.database.clone(),
            admin: Credential::new(&self.admin.username, &self.admin.password),
            app_db: self.application.database.clone(),
            app_user: self.app_credential(),
            roles: vec![RoleGrant::new(
                &self.application.role,
                &self.application.database,
            )],
            collection: self.application.collection.clone(),
            on_existing: self.provision.on_existing,
        }
    }

    /// Login of the application-scoped user.
    #[must_use]
    pub fn app_credential(&self) -> Credential {
        Credential::new(&self.application.username, &self.application.password)
    }

    /// Copy safe to print: both passwords masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.admin.password = mask(&copy.admin.password);
        copy.application.password = mask(&copy.application.password);
        copy
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        "********".to_string()
    }
}

/// Characters the server rejects in database names.
const DATABASE_NAME_FORBIDDEN: &[char] = &['/', '\\', '.', ' ', '"', '$'];

fn validate_database_name(field: &'static str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    if let Some(c) = name.chars().find(|c| DATABASE_NAME_FORBIDDEN.contains(c)) {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("database names may not contain '{c}'"),
        }
        .into());
    }
    if name.len() > 63 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "database names are limited to 63 bytes".to_string(),
        }
        .into());
    }
    Ok(())
}

fn validate_collection_name(field: &'static str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    if name.contains('$') {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "collection names may not contain '$'".to_string(),
        }
        .into());
    }
    if name.starts_with("system.") {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "the system. prefix is reserved".to_string(),
        }
        .into());
    }
    Ok(())
}
