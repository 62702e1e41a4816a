//! Catalogue product document.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::FeedError;

pub const DEFAULT_PRICE_UNIT: &str = "USD";
pub const DEFAULT_STATUS: &str = "Active";

/// A product as stored in the `product` collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Store-assigned identifier, absent until the product is inserted.
    pub id: Option<String>,
    pub stock_code: String,
    pub color: Vec<String>,
    pub discounted_price: Option<f64>,
    pub images: Vec<String>,
    pub is_discounted: bool,
    pub name: String,
    pub price: f64,
    pub price_unit: String,
    pub product_type: String,
    pub quantity: i64,
    pub sample_size: Option<String>,
    pub series: Option<String>,
    pub status: String,
    pub fabric: Option<String>,
    pub model_measurements: Option<String>,
    pub product_measurements: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a new document from feed fields, stamping both timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::MissingField`] when a required field is absent.
    pub fn create(fields: ProductFields, now: DateTime<Utc>) -> Result<Self, FeedError> {
        fields.validate()?;
        let missing = |field| FeedError::MissingField {
            stock_code: fields.stock_code.clone(),
            field,
        };
        let name = fields.name.clone().ok_or_else(|| missing("name"))?;
        let price = fields.price.ok_or_else(|| missing("price"))?;
        let product_type = fields
            .product_type
            .clone()
            .ok_or_else(|| missing("product_type"))?;

        Ok(Self {
            id: None,
            stock_code: fields.stock_code,
            color: fields.color,
            discounted_price: fields.discounted_price,
            images: fields.images,
            is_discounted: fields.is_discounted,
            name,
            price,
            price_unit: DEFAULT_PRICE_UNIT.to_string(),
            product_type,
            quantity: fields.quantity,
            sample_size: fields.sample_size,
            series: fields.series,
            status: DEFAULT_STATUS.to_string(),
            fabric: fields.fabric,
            model_measurements: fields.model_measurements,
            product_measurements: fields.product_measurements,
            created_at: now,
            updated_at: now,
        })
    }

    /// Overwrite the feed-owned fields, keeping id, unit, status and
    /// creation time.
    pub fn apply(&mut self, fields: &ProductFields, now: DateTime<Utc>) {
        self.stock_code = fields.stock_code.clone();
        self.color = fields.color.clone();
        self.discounted_price = fields.discounted_price;
        self.images = fields.images.clone();
        self.is_discounted = fields.is_discounted;
        if let Some(name) = &fields.name {
            self.name = name.clone();
        }
        if let Some(price) = fields.price {
            self.price = price;
        }
        if let Some(product_type) = &fields.product_type {
            self.product_type = product_type.clone();
        }
        self.quantity = fields.quantity;
        self.sample_size = fields.sample_size.clone();
        self.series = fields.series.clone();
        self.fabric = fields.fabric.clone();
        self.model_measurements = fields.model_measurements.clone();
        self.product_measurements = fields.product_measurements.clone();
        self.updated_at = now;
    }
}

/// The feed-derived part of a product, after preprocessing.
///
/// This is the set of fields compared against a stored [`Product`] and
/// written back on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductFields {
    pub stock_code: String,
    pub color: Vec<String>,
    pub discounted_price: Option<f64>,
    pub images: Vec<String>,
    pub is_discounted: bool,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub product_type: Option<String>,
    pub quantity: i64,
    pub sample_size: Option<String>,
    pub series: Option<String>,
    pub fabric: Option<String>,
    pub model_measurements: Option<String>,
    pub product_measurements: Option<String>,
}

impl ProductFields {
    /// Check the fields a stored product cannot do without.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::MissingField`] naming the first absent field.
    pub fn validate(&self) -> Result<(), FeedError> {
        let field = if self.color.is_empty() {
            Some("color")
        } else if self.name.is_none() {
            Some("name")
        } else if self.price.is_none() {
            Some("price")
        } else if self.product_type.is_none() {
            Some("product_type")
        } else {
            None
        };

        match field {
            Some(field) => Err(FeedError::MissingField {
                stock_code: self.stock_code.clone(),
                field,
            }),
            None => Ok(()),
        }
    }

    /// True when any feed field differs from the stored product.
    #[must_use]
    pub fn differs_from(&self, existing: &Product) -> bool {
        self.stock_code != existing.stock_code
            || self.color != existing.color
            || self.discounted_price != existing.discounted_price
            || self.images != existing.images
            || self.is_discounted != existing.is_discounted
            || self.name.as_deref() != Some(existing.name.as_str())
            || self.price != Some(existing.price)
            || self.product_type.as_deref() != Some(existing.product_type.as_str())
            || self.quantity != existing.quantity
            || self.sample_size != existing.sample_size
            || self.series != existing.series
            || self.fabric != existing.fabric
            || self.model_measurements != existing.model_measurements
            || self.product_measurements != existing.product_measurements
    }
}
