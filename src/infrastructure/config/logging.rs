//! Logging configuration and initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Accepted values for `[logging] format`.
pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`.
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Logs go to
    /// stderr so command output on stdout stays machine-readable.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let result = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init(),
        };
        // A subscriber may already be installed, e.g. by a test harness.
        let _ = result;
    }

    /// Check the level is a valid filter directive and the format is known.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming `logging.level` or `logging.format`.
    pub fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "logging.level",
            }
            .into());
        }
        // A bare word would parse as a target directive, so it must be a level.
        let parsed = if self.level.contains(|c: char| c == '=' || c == ',') {
            EnvFilter::try_new(&self.level).map(|_| ()).map_err(|e| e.to_string())
        } else {
            self.level
                .trim()
                .parse::<LevelFilter>()
                .map(|_| ())
                .map_err(|e| e.to_string())
        };
        if let Err(reason) = parsed {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason,
            }
            .into());
        }
        if !LOG_FORMATS.contains(&self.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }
        Ok(())
    }

    /// Same configuration with the level replaced, e.g. from `-v` flags.
    #[must_use]
    pub fn with_level(&self, level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            format: self.format.clone(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn logging(level: &str, format: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.into(),
            format: format.into(),
        }
    }

    #[test]
    fn default_is_valid() {
        assert!(LoggingConfig::default().validate().is_ok());
    }

    #[test]
    fn accepts_filter_directives() {
        assert!(logging("stockroom=debug,mongodb=warn", "json")
            .validate()
            .is_ok());
    }

    #[test]
    fn rejects_unknown_format() {
        let err = logging("info", "jsn").validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            })
        ));
    }

    #[test]
    fn rejects_misspelled_level() {
        let err = logging("verbos", "pretty").validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "logging.level",
                ..
            })
        ));
    }

    #[test]
    fn rejects_empty_level() {
        let err = logging(" ", "pretty").validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField {
                field: "logging.level"
            })
        ));
    }
}
