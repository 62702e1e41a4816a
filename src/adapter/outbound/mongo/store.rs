//! [`ProductStore`] backed by a MongoDB collection.

use bson::doc;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{Client, Collection};

use super::client;
use super::document::ProductDocument;
use super::settings::MongoConfig;
use crate::domain::{Credential, Product, ProductFields};
use crate::error::{Error, Result};
use crate::port::ProductStore;

/// Products stored in one collection, looked up by `stock_code`.
pub struct MongoProductStore {
    collection: Collection<ProductDocument>,
}

impl MongoProductStore {
    pub fn new(client: &Client, db: &str, collection: &str) -> Self {
        Self {
            collection: client.database(db).collection(collection),
        }
    }

    /// Connect as `credential`, authenticating against `db` itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string is invalid.
    pub async fn connect(
        settings: &MongoConfig,
        credential: &Credential,
        db: &str,
        collection: &str,
    ) -> Result<Self> {
        let client = client::connect(settings, credential, db).await?;
        Ok(Self::new(&client, db, collection))
    }
}

impl ProductStore for MongoProductStore {
    async fn find_by_stock_codes(&self, stock_codes: &[String]) -> Result<Vec<Product>> {
        if stock_codes.is_empty() {
            return Ok(Vec::new());
        }
        let cursor = self
            .collection
            .find(doc! { "stock_code": { "$in": stock_codes.to_vec() } })
            .await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Product::from).collect())
    }

    async fn insert(&self, product: &Product) -> Result<()> {
        self.collection
            .insert_one(ProductDocument::from(product))
            .await?;
        Ok(())
    }

    async fn update(&self, fields: &ProductFields, updated_at: DateTime<Utc>) -> Result<()> {
        let mut set = bson::to_document(fields)?;
        set.insert("updatedAt", bson::DateTime::from_chrono(updated_at));
        let result = self
            .collection
            .update_one(
                doc! { "stock_code": fields.stock_code.as_str() },
                doc! { "$set": set },
            )
            .await?;
        if result.matched_count == 0 {
            return Err(Error::Database(format!(
                "no product with stock code {}",
                fields.stock_code
            )));
        }
        Ok(())
    }
}
