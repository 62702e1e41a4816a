//! Feed key normalisation.

/// Turkish capitals that appear in feed keys next to ASCII ones.
const EXTRA_UPPERCASE: &[char] = &['Ç', 'Ğ', 'İ', 'Ö', 'Ş', 'Ü'];

fn is_key_uppercase(c: char) -> bool {
    c.is_ascii_uppercase() || EXTRA_UPPERCASE.contains(&c)
}

/// Convert a PascalCase feed key to snake_case.
///
/// An underscore goes before every capital except a leading one, then the
/// whole key is lowercased: `DiscountedPrice` becomes `discounted_price` and
/// `ÜrünBilgisi` becomes `ürün_bilgisi`.
#[must_use]
pub fn convert_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i > 0 && is_key_uppercase(c) {
            out.push('_');
        }
        out.push(c);
    }
    out.to_lowercase()
}

/// Normalise a description label such as `Model Ölçüleri 2:`.
///
/// Colons and spaces are dropped before conversion, and digits after it.
#[must_use]
pub fn convert_label(label: &str) -> String {
    let compact: String = label.chars().filter(|c| *c != ':' && *c != ' ').collect();
    convert_key(&compact)
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_pascal_case() {
        assert_eq!(convert_key("DiscountedPrice"), "discounted_price");
        assert_eq!(convert_key("ProductType"), "product_type");
        assert_eq!(convert_key("Price"), "price");
    }

    #[test]
    fn leading_capital_gets_no_underscore() {
        assert_eq!(convert_key("Color"), "color");
        assert_eq!(convert_key("ABC"), "a_b_c");
    }

    #[test]
    fn handles_turkish_capitals() {
        assert_eq!(convert_key("ÜrünBilgisi"), "ürün_bilgisi");
        assert_eq!(convert_key("ModelÖlçüleri"), "model_ölçüleri");
        assert_eq!(convert_key("KumaşBilgisi"), "kumaş_bilgisi");
    }

    #[test]
    fn already_lowercase_is_unchanged() {
        assert_eq!(convert_key("series"), "series");
    }

    #[test]
    fn label_drops_colons_spaces_and_digits() {
        assert_eq!(convert_label("Ürün Bilgisi:"), "ürün_bilgisi");
        assert_eq!(convert_label("Model Ölçüleri 2:"), "model_ölçüleri");
        assert_eq!(convert_label("Kumaş Bilgisi :"), "kumaş_bilgisi");
    }
}
