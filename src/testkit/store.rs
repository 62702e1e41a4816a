//! In-memory product store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domain::{Product, ProductFields};
use crate::error::{Error, Result};
use crate::port::ProductStore;

/// Products keyed by stock code. Inserting a stock code twice fails, as it
/// would against a collection with a unique `stock_code` index.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: RwLock<HashMap<String, Product>>,
    updates: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }

    pub fn get(&self, stock_code: &str) -> Option<Product> {
        self.products.read().get(stock_code).cloned()
    }

    /// Number of successful `update` calls.
    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::Relaxed)
    }

    /// Make every insert and update fail.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(Error::Database("write rejected".into()));
        }
        Ok(())
    }
}

impl ProductStore for MemoryStore {
    async fn find_by_stock_codes(&self, stock_codes: &[String]) -> Result<Vec<Product>> {
        let products = self.products.read();
        Ok(stock_codes
            .iter()
            .filter_map(|code| products.get(code).cloned())
            .collect())
    }

    async fn insert(&self, product: &Product) -> Result<()> {
        self.check_writable()?;
        let mut products = self.products.write();
        if products.contains_key(&product.stock_code) {
            return Err(Error::Database(format!(
                "duplicate stock code {}",
                product.stock_code
            )));
        }
        products.insert(product.stock_code.clone(), product.clone());
        Ok(())
    }

    async fn update(&self, fields: &ProductFields, updated_at: DateTime<Utc>) -> Result<()> {
        self.check_writable()?;
        let mut products = self.products.write();
        let product = products
            .get_mut(&fields.stock_code)
            .ok_or_else(|| Error::Database(format!("no product {}", fields.stock_code)))?;
        product.apply(fields, updated_at);
        self.updates.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
