//! Feed import use-cases for operator-facing adapters.

use async_trait::async_trait;

use crate::domain::ImportReport;
use crate::error::Result;

/// Import request from an inbound adapter.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    /// Configuration as TOML text (empty for built-in defaults).
    pub config_toml: String,
    /// Feed location replacing `[import] feed`.
    pub feed: Option<String>,
    /// Classify entries without writing.
    pub dry_run: bool,
}

/// Source and destination of an import, shown before it starts.
#[derive(Debug, Clone)]
pub struct ImportTarget {
    pub feed: String,
    pub database: String,
    pub collection: String,
    pub username: String,
    pub dry_run: bool,
}

/// Import use-cases for operator-facing adapters.
#[async_trait]
pub trait ImportOperator: Send + Sync {
    /// Resolve the feed and destination of a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    fn prepare_import(&self, request: &ImportRequest) -> Result<ImportTarget>;

    /// Read the feed and reconcile it with the product collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the feed cannot be read or parsed, or the
    /// existing products cannot be fetched. Per-product failures are
    /// counted in the report instead.
    async fn execute_import(&self, request: ImportRequest) -> Result<ImportReport>;
}
