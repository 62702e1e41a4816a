//! Persistence port for catalogue products.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::domain::{Product, ProductFields};
use crate::error::Result;

/// Storage operations for products, keyed by stock code.
pub trait ProductStore: Send + Sync {
    /// Fetch every stored product whose stock code is in `stock_codes`.
    fn find_by_stock_codes(
        &self,
        stock_codes: &[String],
    ) -> impl Future<Output = Result<Vec<Product>>> + Send;

    /// Insert a new product.
    fn insert(&self, product: &Product) -> impl Future<Output = Result<()>> + Send;

    /// Overwrite the feed fields of an existing product and bump `updatedAt`.
    fn update(
        &self,
        fields: &ProductFields,
        updated_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<()>> + Send;
}
