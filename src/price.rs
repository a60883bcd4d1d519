//! Price string normalization.
//!
//! Retailers format prices with either convention for the thousands and
//! decimal separators ("CA$1,299.99", "EUR 1.299,99", "1,035"). Parsing
//! strips currency text and disambiguates the separators by which occurs
//! last in the string.

use std::sync::LazyLock;

use regex::Regex;

/// Matches every character that is not a digit or separator.
static NON_PRICE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9.,]").unwrap());

/// Parse a raw price string into a monetary value.
///
/// Returns `None` when no parseable number remains after stripping, so
/// callers can distinguish an unparsable price from a genuinely free item.
///
/// # Examples
///
/// ```
/// use pricewatch::price::parse_price;
///
/// assert_eq!(parse_price("CA$1,299.99"), Some(1299.99));
/// assert_eq!(parse_price("1.299,99"), Some(1299.99));
/// assert_eq!(parse_price("1,035"), Some(1035.0));
/// assert_eq!(parse_price("Free"), None);
/// ```
pub fn parse_price(raw: &str) -> Option<f64> {
    let mut cleaned = NON_PRICE.replace_all(raw, "").into_owned();

    if cleaned.contains(',') {
        match cleaned.rfind('.') {
            // Both separators present: the later one is the decimal point
            Some(dot) if dot > cleaned.rfind(',').unwrap_or(0) => {
                // US/CA convention: 1,299.99
                cleaned = cleaned.replace(',', "");
            }
            Some(_) => {
                // EU convention: 1.299,99
                cleaned = cleaned.replace('.', "").replace(',', ".");
            }
            // Only a comma: thousands separator (1,035)
            None => {
                cleaned = cleaned.replace(',', "");
            }
        }
    }

    cleaned.parse::<f64>().ok()
}

/// Normalize a raw price string, degrading to `0.0` on failure.
///
/// This is the wire contract the serving layer consumes: malformed price
/// text is non-fatal and resolves to `0.0`. Note that this conflates
/// "unparsable" with "free"; use [`parse_price`] where the distinction
/// matters.
pub fn normalize_price(raw: &str) -> f64 {
    parse_price(raw).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_convention() {
        assert_eq!(normalize_price("1,299.99"), 1299.99);
        assert_eq!(normalize_price("$12,345,678.90"), 12345678.90);
    }

    #[test]
    fn test_eu_convention() {
        assert_eq!(normalize_price("1.299,99"), 1299.99);
        assert_eq!(normalize_price("EUR 1.234.567,89"), 1234567.89);
    }

    #[test]
    fn test_lone_comma_is_thousands_separator() {
        assert_eq!(normalize_price("1,035"), 1035.0);
        assert_eq!(normalize_price("12,5"), 125.0);
    }

    #[test]
    fn test_currency_text_stripped() {
        assert_eq!(normalize_price("CA$ 499.00"), 499.0);
        assert_eq!(normalize_price("From $89.95 CAD"), 89.95);
    }

    #[test]
    fn test_malformed_degrades_to_zero() {
        assert_eq!(normalize_price("Free"), 0.0);
        assert_eq!(normalize_price(""), 0.0);
        assert_eq!(normalize_price("$"), 0.0);
        assert_eq!(normalize_price("1.2.3.4"), 0.0);
    }

    #[test]
    fn test_parse_price_distinguishes_failure() {
        assert_eq!(parse_price("Free"), None);
        assert_eq!(parse_price("0.00"), Some(0.0));
    }

    #[test]
    fn test_plain_decimal() {
        assert_eq!(normalize_price("899.5"), 899.5);
        assert_eq!(normalize_price("42"), 42.0);
    }
}
