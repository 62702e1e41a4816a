//! Provisioning use-cases for operator-facing adapters.

use async_trait::async_trait;

use crate::domain::{ExistingPolicy, ProvisionReport};
use crate::error::Result;

/// Provisioning request from an inbound adapter.
#[derive(Debug, Clone)]
pub struct ProvisionRequest {
    /// Configuration as TOML text (empty for built-in defaults).
    pub config_toml: String,
    /// Replaces `[provision] on_existing` when given.
    pub on_existing: Option<ExistingPolicy>,
}

/// What a provisioning run will touch, shown before it starts.
#[derive(Debug, Clone)]
pub struct ProvisionTarget {
    pub uri: String,
    pub admin_database: String,
    pub admin_username: String,
    pub app_database: String,
    pub app_username: String,
    /// Grants as `role@db`, comma separated.
    pub roles: String,
    pub collection: String,
    pub on_existing: ExistingPolicy,
}

/// Bootstrap use-cases for operator-facing adapters.
#[async_trait]
pub trait ProvisionOperator: Send + Sync {
    /// Resolve the plan a request describes without touching the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    fn prepare_provision(&self, request: &ProvisionRequest) -> Result<ProvisionTarget>;

    /// Authenticate, create the application user and the collection.
    ///
    /// # Errors
    ///
    /// Returns the first failing step; later steps do not run.
    async fn execute_provision(&self, request: ProvisionRequest) -> Result<ProvisionReport>;
}
