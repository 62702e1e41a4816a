//! Raw supplier feed entries and their preprocessing into [`ProductFields`].

use std::collections::HashMap;

use super::product::ProductFields;
use crate::error::FeedError;

/// Description label that ends the attribute list; later items are marketing
/// copy rather than attributes.
pub const DESCRIPTION_STOP_KEY: &str = "model_ölçüleri";

/// One `<Product>` element as read from the feed.
///
/// `attributes` holds converted keys from `ProductDetails` and the
/// description, in document order, later entries overwriting earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedProduct {
    /// One-based position in the feed, for error messages.
    pub position: usize,
    pub stock_code: Option<String>,
    pub images: Vec<String>,
    pub colors: Vec<String>,
    pub attributes: HashMap<String, String>,
}

impl FeedProduct {
    /// Record a `ProductDetail` or description pair under its converted key.
    pub fn set_attribute(&mut self, key: String, value: String) {
        if key == "color" {
            self.colors.push(value);
        } else {
            self.attributes.insert(key, value);
        }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    fn owned(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    /// Map raw feed attributes onto the product's fields.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::MissingProductId`] when the entry has no stock
    /// code and [`FeedError::InvalidNumber`] when a price or quantity does
    /// not parse.
    pub fn preprocess(&self) -> Result<ProductFields, FeedError> {
        let stock_code = self
            .stock_code
            .clone()
            .ok_or(FeedError::MissingProductId {
                position: self.position,
            })?;

        let discounted_price =
            parse_decimal(&stock_code, "discounted_price", self.get("discounted_price"))?;
        let price = parse_decimal(&stock_code, "price", self.get("price"))?;
        let quantity = match self.get("quantity").filter(|q| !q.is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| FeedError::InvalidNumber {
                    stock_code: stock_code.clone(),
                    field: "quantity",
                    value: raw.to_string(),
                })?,
            None => 0,
        };
        let series = self.owned("series");

        Ok(ProductFields {
            color: self.colors.clone(),
            discounted_price,
            images: self.images.clone(),
            is_discounted: discounted_price.is_some_and(|p| p > 0.0),
            name: self.owned("ürün_bilgisi"),
            price,
            product_type: self.owned("product_type"),
            quantity,
            // An explicit `SampleSize` detail wins over the series. Feeds
            // without one store the series in both fields.
            sample_size: self.owned("sample_size").or_else(|| series.clone()),
            series,
            fabric: self.owned("kumaş_bilgisi"),
            model_measurements: self.owned(DESCRIPTION_STOP_KEY),
            product_measurements: self.owned("ürün_ölçüleri"),
            stock_code,
        })
    }
}

/// Parse a price that may use a comma as decimal separator.
fn parse_decimal(
    stock_code: &str,
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<f64>, FeedError> {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return Ok(None);
    };
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map(Some)
        .map_err(|_| FeedError::InvalidNumber {
            stock_code: stock_code.to_string(),
            field,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pairs: &[(&str, &str)]) -> FeedProduct {
        let mut product = FeedProduct {
            position: 1,
            stock_code: Some("SC-1".into()),
            ..Default::default()
        };
        for (k, v) in pairs {
            product.set_attribute((*k).to_string(), (*v).to_string());
        }
        product
    }

    #[test]
    fn comma_decimals_parse() {
        let fields = entry(&[("price", "5,49"), ("discounted_price", "4,10")])
            .preprocess()
            .unwrap();
        assert_eq!(fields.price, Some(5.49));
        assert_eq!(fields.discounted_price, Some(4.10));
        assert!(fields.is_discounted);
    }

    #[test]
    fn zero_discount_is_not_discounted() {
        let fields = entry(&[("price", "5,49"), ("discounted_price", "0")])
            .preprocess()
            .unwrap();
        assert_eq!(fields.discounted_price, Some(0.0));
        assert!(!fields.is_discounted);
    }

    #[test]
    fn quantity_defaults_to_zero() {
        let fields = entry(&[("price", "1")]).preprocess().unwrap();
        assert_eq!(fields.quantity, 0);
    }

    #[test]
    fn colors_accumulate() {
        let fields = entry(&[("color", "Red"), ("color", "Blue")])
            .preprocess()
            .unwrap();
        assert_eq!(fields.color, vec!["Red", "Blue"]);
    }

    #[test]
    fn description_keys_map_to_fields() {
        let fields = entry(&[
            ("ürün_bilgisi", "Kadın Elbise"),
            ("kumaş_bilgisi", "Viskon"),
            ("model_ölçüleri", "Boy: 1.76"),
            ("ürün_ölçüleri", "Boy: 110 cm"),
        ])
        .preprocess()
        .unwrap();
        assert_eq!(fields.name.as_deref(), Some("Kadın Elbise"));
        assert_eq!(fields.fabric.as_deref(), Some("Viskon"));
        assert_eq!(fields.model_measurements.as_deref(), Some("Boy: 1.76"));
        assert_eq!(fields.product_measurements.as_deref(), Some("Boy: 110 cm"));
    }

    #[test]
    fn sample_size_falls_back_to_series() {
        let fields = entry(&[("series", "2S-1M")]).preprocess().unwrap();
        assert_eq!(fields.sample_size.as_deref(), Some("2S-1M"));

        let fields = entry(&[("series", "2S-1M"), ("sample_size", "S")])
            .preprocess()
            .unwrap();
        assert_eq!(fields.sample_size.as_deref(), Some("S"));
    }

    #[test]
    fn bad_price_is_rejected() {
        let err = entry(&[("price", "abc")]).preprocess().unwrap_err();
        assert!(matches!(err, FeedError::InvalidNumber { field: "price", .. }));
    }

    #[test]
    fn missing_stock_code_is_rejected() {
        let product = FeedProduct {
            position: 7,
            ..Default::default()
        };
        let err = product.preprocess().unwrap_err();
        assert!(matches!(err, FeedError::MissingProductId { position: 7 }));
    }
}
