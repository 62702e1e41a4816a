//! Product feed import.
//!
//! Reconciles parsed feed entries with the product collection: new stock
//! codes are inserted, changed products are updated, unchanged ones are left
//! alone. A bad entry or a failed write is logged and counted, and the import
//! carries on with the next product. A stock code is imported at most once
//! per run; later entries repeating it are skipped.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::domain::{FeedProduct, ImportReport, Product, ProductFields};
use crate::error::Result;
use crate::port::ProductStore;

/// What happened to a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    Inserted,
    Updated,
    Unchanged,
}

/// Imports feed entries into a [`ProductStore`].
pub struct Importer<S> {
    store: S,
    dry_run: bool,
}

impl<S: ProductStore> Importer<S> {
    pub const fn new(store: S) -> Self {
        Self {
            store,
            dry_run: false,
        }
    }

    /// Classify entries without writing anything.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Import every entry of a parsed feed.
    ///
    /// # Errors
    ///
    /// Only the initial lookup of existing products is fatal. Per-product
    /// failures are counted in the report.
    pub async fn run(&self, entries: &[FeedProduct]) -> Result<ImportReport> {
        let mut report = ImportReport::default();

        let mut prepared = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry.preprocess() {
                Ok(fields) => prepared.push(fields),
                Err(e) => {
                    error!(position = entry.position, error = %e, "Skipping feed entry");
                    report.skipped += 1;
                }
            }
        }

        let mut seen = HashSet::with_capacity(prepared.len());
        prepared.retain(|fields| {
            if seen.insert(fields.stock_code.clone()) {
                return true;
            }
            error!(stock_code = %fields.stock_code, "Duplicate stock code in feed, skipping entry");
            report.skipped += 1;
            false
        });

        let stock_codes: Vec<String> = prepared.iter().map(|f| f.stock_code.clone()).collect();
        let mut existing: HashMap<String, Product> = HashMap::with_capacity(stock_codes.len());
        for product in self.store.find_by_stock_codes(&stock_codes).await? {
            if existing.contains_key(&product.stock_code) {
                warn!(
                    stock_code = %product.stock_code,
                    "Collection holds several products with this stock code, comparing against the first"
                );
                continue;
            }
            existing.insert(product.stock_code.clone(), product);
        }
        info!(
            entries = entries.len(),
            existing = existing.len(),
            "Fetched existing products"
        );

        for fields in prepared {
            let stock_code = fields.stock_code.clone();
            let current = existing.get(&stock_code);
            match self.reconcile(fields, current).await {
                Ok(Disposition::Inserted) => report.inserted += 1,
                Ok(Disposition::Updated) => report.updated += 1,
                Ok(Disposition::Unchanged) => report.unchanged += 1,
                Err(e) => {
                    error!(stock_code = %stock_code, error = %e, "Failed to import product");
                    report.failed += 1;
                }
            }
        }

        info!(
            inserted = report.inserted,
            updated = report.updated,
            unchanged = report.unchanged,
            skipped = report.skipped,
            failed = report.failed,
            dry_run = self.dry_run,
            "Import finished"
        );
        Ok(report)
    }

    async fn reconcile(
        &self,
        fields: ProductFields,
        existing: Option<&Product>,
    ) -> Result<Disposition> {
        fields.validate()?;

        match existing {
            Some(existing) if !fields.differs_from(existing) => {
                debug!(stock_code = %fields.stock_code, "No changes detected, update skipped");
                Ok(Disposition::Unchanged)
            }
            Some(_) => {
                if !self.dry_run {
                    self.store.update(&fields, Utc::now()).await?;
                }
                info!(stock_code = %fields.stock_code, "Product updated");
                Ok(Disposition::Updated)
            }
            None => {
                let product = Product::create(fields, Utc::now())?;
                if !self.dry_run {
                    self.store.insert(&product).await?;
                }
                info!(stock_code = %product.stock_code, "Product inserted");
                Ok(Disposition::Inserted)
            }
        }
    }
}
