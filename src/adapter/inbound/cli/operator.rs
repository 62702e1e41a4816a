//! Configuration file lookup for operator-facing use-cases.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Configuration file picked up from the working directory.
pub const DEFAULT_CONFIG: &str = "stockroom.toml";

/// Path a command will read, if any.
///
/// An explicit path always wins. Otherwise `stockroom.toml` is used when it
/// exists in the working directory.
#[must_use]
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG);
            default.exists().then_some(default)
        }
    }
}

/// Load config TOML for operator-facing use-cases.
///
/// Returns an empty document, meaning built-in defaults, when there is no
/// file to read.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read.
pub fn read_config_toml(explicit: Option<&Path>) -> Result<String> {
    match config_path(explicit) {
        Some(path) => Ok(std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?),
        None => Ok(String::new()),
    }
}

/// Human label for where the configuration came from.
#[must_use]
pub fn config_source(explicit: Option<&Path>) -> String {
    config_path(explicit).map_or_else(
        || "(built-in defaults)".to_string(),
        |path| path.display().to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_is_used_even_if_missing() {
        let path = Path::new("/nonexistent/stockroom.toml");
        assert_eq!(config_path(Some(path)), Some(path.to_path_buf()));
        assert_eq!(config_source(Some(path)), "/nonexistent/stockroom.toml");
        assert!(read_config_toml(Some(path)).is_err());
    }

    #[test]
    fn explicit_file_is_read() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[admin]\nusername = \"ops\"\n").unwrap();
        assert!(read_config_toml(Some(&path)).unwrap().contains("ops"));
    }
}
