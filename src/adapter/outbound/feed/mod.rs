//! Supplier XML feed reader.
//!
//! The feed is a single root element whose children are products:
//!
//! ```xml
//! <Products>
//!   <Product ProductId="6H2RKH">
//!     <Images><Image Path="https://..."/></Images>
//!     <ProductDetails><ProductDetail Name="Price" Value="5,49"/></ProductDetails>
//!     <Description><![CDATA[<ul><li><strong>Ürün Bilgisi:</strong> ...</li></ul>]]></Description>
//!   </Product>
//! </Products>
//! ```

mod description;
mod xml;

use std::path::Path;

use tracing::info;

use crate::domain::FeedProduct;
use crate::error::Result;

pub use description::parse_description;
pub use xml::parse_feed;

/// Read and parse a feed file.
///
/// # Errors
///
/// Returns an IO error if the file cannot be read, or a feed error if it is
/// not well-formed XML.
pub fn read_feed(path: &Path) -> Result<Vec<FeedProduct>> {
    let content = std::fs::read_to_string(path)?;
    let products = parse_feed(&content)?;
    info!(path = %path.display(), products = products.len(), "Parsed feed");
    Ok(products)
}
