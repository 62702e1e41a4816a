//! Miette-based error diagnostics for CLI error presentation.
//!
//! Wraps crate errors with a diagnostic code and, where the failure has a
//! usual cause, a help line suggesting the fix.

use std::io::ErrorKind;

use miette::Diagnostic;
use thiserror::Error;

use crate::error::{ConfigError, Error, FeedError, ProvisionError};

/// Top-level failure of a command.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(stockroom::command))]
pub struct CommandError {
    /// Human-readable error message.
    pub message: String,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl CommandError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help: None,
        }
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl From<&Error> for CommandError {
    fn from(error: &Error) -> Self {
        let diagnostic = Self::new(error.to_string());
        match help_for(error) {
            Some(help) => diagnostic.with_help(help),
            None => diagnostic,
        }
    }
}

fn help_for(error: &Error) -> Option<String> {
    match error {
        Error::Config(ConfigError::ReadFile(_)) => {
            Some("create one with `stockroom config init`".into())
        }
        Error::Config(ConfigError::Parse(_)) => {
            Some("compare with the template from `stockroom config init`".into())
        }
        Error::Provision(ProvisionError::UserExists { .. } | ProvisionError::CollectionExists { .. }) => {
            Some("rerun with `--on-existing skip` to leave existing objects in place".into())
        }
        Error::Provision(ProvisionError::RoleMismatch { .. }) => Some(
            "drop the user or adjust [application] role to match the existing grants".into(),
        ),
        Error::Provision(ProvisionError::Step { .. }) | Error::Mongo(_) => Some(
            "check the deployment with `stockroom check connection`; set \
             STOCKROOM_MONGO_URI and STOCKROOM_ADMIN_PASSWORD if they differ from the config"
                .into(),
        ),
        Error::Feed(FeedError::Xml(_)) => Some("the feed file is not well-formed XML".into()),
        Error::Io(e) => match e.kind() {
            ErrorKind::NotFound => Some("check that the path exists".into()),
            ErrorKind::PermissionDenied => {
                Some("check the file and directory permissions".into())
            }
            _ => None,
        },
        _ => None,
    }
}
