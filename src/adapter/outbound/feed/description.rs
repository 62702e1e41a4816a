//! Attribute extraction from the HTML product description.

use scraper::{ElementRef, Html, Selector};

use crate::domain::feed::DESCRIPTION_STOP_KEY;
use crate::domain::key::convert_label;

/// Text of an element with every text node trimmed and joined without a
/// separator.
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Extract `(key, value)` pairs from `<li><strong>Label:</strong> value</li>`
/// items, up to and including the model measurements item.
#[must_use]
pub fn parse_description(html: &str) -> Vec<(String, String)> {
    let (Ok(items), Ok(labels)) = (Selector::parse("li"), Selector::parse("strong")) else {
        return Vec::new();
    };

    let fragment = Html::parse_fragment(html);
    let mut pairs = Vec::new();

    for item in fragment.select(&items) {
        let Some(label) = item.select(&labels).next() else {
            continue;
        };
        let label_text = stripped_text(label);
        let key = convert_label(&label_text);
        let value = stripped_text(item).replace(&label_text, "");
        let stop = key == DESCRIPTION_STOP_KEY;
        pairs.push((key, value));
        if stop {
            break;
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_labelled_items() {
        let pairs = parse_description(
            "<ul><li><strong>Ürün Bilgisi:</strong> Midi elbise</li>\
             <li><strong>Kumaş Bilgisi:</strong> Pamuk</li></ul>",
        );
        assert_eq!(
            pairs,
            vec![
                ("ürün_bilgisi".to_string(), "Midi elbise".to_string()),
                ("kumaş_bilgisi".to_string(), "Pamuk".to_string()),
            ]
        );
    }

    #[test]
    fn ignores_items_without_label() {
        let pairs = parse_description("<ul><li>Plain text</li><li><strong>Seri:</strong> A</li></ul>");
        assert_eq!(pairs, vec![("seri".to_string(), "A".to_string())]);
    }

    #[test]
    fn stops_after_model_measurements() {
        let pairs = parse_description(
            "<ul><li><strong>Model Ölçüleri:</strong> Boy 1.76</li>\
             <li><strong>Ürün Bilgisi:</strong> too late</li></ul>",
        );
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "model_ölçüleri");
    }

    #[test]
    fn digits_are_dropped_from_keys() {
        let pairs = parse_description("<li><strong>Ürün Ölçüleri 2:</strong> 40 cm</li>");
        assert_eq!(pairs[0], ("ürün_ölçüleri".to_string(), "40 cm".to_string()));
    }

    #[test]
    fn empty_description_yields_nothing() {
        assert!(parse_description("").is_empty());
    }
}
