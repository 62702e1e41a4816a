//! Streaming feed parser built on `quick-xml`.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::warn;

use super::description::parse_description;
use crate::domain::key::convert_key;
use crate::domain::FeedProduct;
use crate::error::Result;

/// Element depths below the root.
const PRODUCT_DEPTH: usize = 2;
const SECTION_DEPTH: usize = 3;
const ITEM_DEPTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Images,
    Details,
    Description,
    Other,
}

impl Section {
    fn from_tag(tag: &[u8]) -> Self {
        match tag {
            b"Images" => Self::Images,
            b"ProductDetails" => Self::Details,
            b"Description" => Self::Description,
            _ => Self::Other,
        }
    }
}

#[derive(Default)]
struct FeedBuilder {
    products: Vec<FeedProduct>,
    current: Option<FeedProduct>,
    section: Option<Section>,
    description: String,
}

impl FeedBuilder {
    fn open(&mut self, element: &BytesStart<'_>, depth: usize) -> Result<()> {
        match depth {
            PRODUCT_DEPTH => {
                self.current = Some(FeedProduct {
                    position: self.products.len() + 1,
                    stock_code: attribute(element, b"ProductId")?,
                    ..Default::default()
                });
            }
            SECTION_DEPTH => {
                self.section = Some(Section::from_tag(element.name().as_ref()));
                self.description.clear();
            }
            ITEM_DEPTH => self.item(element)?,
            _ => {}
        }
        Ok(())
    }

    fn item(&mut self, element: &BytesStart<'_>) -> Result<()> {
        let Some(product) = self.current.as_mut() else {
            return Ok(());
        };
        match self.section {
            Some(Section::Images) => {
                if let Some(path) = attribute(element, b"Path")? {
                    product.images.push(path);
                }
            }
            Some(Section::Details) => {
                let name = attribute(element, b"Name")?;
                let value = attribute(element, b"Value")?;
                match (name, value) {
                    (Some(name), Some(value)) => product.set_attribute(convert_key(&name), value),
                    _ => warn!(
                        position = product.position,
                        "Product detail without Name/Value, ignoring"
                    ),
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn close(&mut self, depth: usize) {
        match depth {
            PRODUCT_DEPTH => {
                if let Some(product) = self.current.take() {
                    self.products.push(product);
                }
            }
            SECTION_DEPTH => {
                if self.section == Some(Section::Description) {
                    if let Some(product) = self.current.as_mut() {
                        for (key, value) in parse_description(&self.description) {
                            product.set_attribute(key, value);
                        }
                    }
                }
                self.section = None;
            }
            _ => {}
        }
    }

    fn in_description(&self, depth: usize) -> bool {
        depth == SECTION_DEPTH && self.section == Some(Section::Description)
    }
}

fn attribute(element: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Parse a complete feed document into raw entries, in document order.
///
/// # Errors
///
/// Returns a feed error if the document is not well-formed XML.
pub fn parse_feed(xml: &str) -> Result<Vec<FeedProduct>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut builder = FeedBuilder::default();
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(element) => {
                depth += 1;
                builder.open(&element, depth)?;
            }
            Event::Empty(element) => {
                builder.open(&element, depth + 1)?;
                builder.close(depth + 1);
            }
            Event::End(_) => {
                builder.close(depth);
                depth = depth.saturating_sub(1);
            }
            Event::Text(text) if builder.in_description(depth) => {
                builder.description.push_str(&text.unescape()?);
            }
            Event::CData(data) if builder.in_description(depth) => {
                builder
                    .description
                    .push_str(&String::from_utf8_lossy(&data));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(builder.products)
}
