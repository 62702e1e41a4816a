//! Diagnostic use-cases for operator-facing adapters.

use async_trait::async_trait;

use crate::error::Result;

/// Deployment and login a connection check uses.
#[derive(Debug, Clone)]
pub struct ConnectionTarget {
    pub uri: String,
    pub admin_database: String,
    pub admin_username: String,
}

/// Diagnostic use-cases for operator-facing adapters.
#[async_trait]
pub trait DiagnosticOperator: Send + Sync {
    /// Resolve the deployment and administrator a check will use.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    fn connection_target(&self, config_toml: &str) -> Result<ConnectionTarget>;

    /// Authenticate as the administrator and ping the deployment.
    ///
    /// # Errors
    ///
    /// Returns an error if the deployment is unreachable or rejects the
    /// credentials.
    async fn verify_connection(&self, config_toml: &str) -> Result<()>;
}
