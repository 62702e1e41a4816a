//! BSON shape of a product in the collection.

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::product::{DEFAULT_PRICE_UNIT, DEFAULT_STATUS};
use crate::domain::Product;

fn default_price_unit() -> String {
    DEFAULT_PRICE_UNIT.to_string()
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// Stored product document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub stock_code: String,
    pub color: Vec<String>,
    #[serde(default)]
    pub discounted_price: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_discounted: bool,
    pub name: String,
    pub price: f64,
    #[serde(default = "default_price_unit")]
    pub price_unit: String,
    pub product_type: String,
    pub quantity: i64,
    #[serde(default)]
    pub sample_size: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub fabric: Option<String>,
    #[serde(default)]
    pub model_measurements: Option<String>,
    #[serde(default)]
    pub product_measurements: Option<String>,
    #[serde(rename = "createdAt", with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl From<&Product> for ProductDocument {
    fn from(product: &Product) -> Self {
        Self {
            // An id that is not a valid ObjectId is left for the server to assign.
            id: product
                .id
                .as_deref()
                .and_then(|id| ObjectId::parse_str(id).ok()),
            stock_code: product.stock_code.clone(),
            color: product.color.clone(),
            discounted_price: product.discounted_price,
            images: product.images.clone(),
            is_discounted: product.is_discounted,
            name: product.name.clone(),
            price: product.price,
            price_unit: product.price_unit.clone(),
            product_type: product.product_type.clone(),
            quantity: product.quantity,
            sample_size: product.sample_size.clone(),
            series: product.series.clone(),
            status: product.status.clone(),
            fabric: product.fabric.clone(),
            model_measurements: product.model_measurements.clone(),
            product_measurements: product.product_measurements.clone(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()),
            stock_code: doc.stock_code,
            color: doc.color,
            discounted_price: doc.discounted_price,
            images: doc.images,
            is_discounted: doc.is_discounted,
            name: doc.name,
            price: doc.price,
            price_unit: doc.price_unit,
            product_type: doc.product_type,
            quantity: doc.quantity,
            sample_size: doc.sample_size,
            series: doc.series,
            status: doc.status,
            fabric: doc.fabric,
            model_measurements: doc.model_measurements,
            product_measurements: doc.product_measurements,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}
