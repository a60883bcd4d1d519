//! Listing data model shared by the scraper boundary and the ranker.

use serde::{Deserialize, Serialize};

use crate::price::{normalize_price, parse_price};

/// A raw listing as produced by a retailer scraper: a product name and the
/// price text exactly as it appeared on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    /// Product name as scraped.
    pub name: String,
    /// Price text as scraped ("CA$1,299.99", "1.299,99", ...).
    pub raw_price: String,
}

impl RawListing {
    /// Create a new raw listing.
    pub fn new<N: Into<String>, P: Into<String>>(name: N, raw_price: P) -> Self {
        Self {
            name: name.into(),
            raw_price: raw_price.into(),
        }
    }
}

/// A listing with its price normalized to a numeric value, ready for
/// scoring. Immutable once scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Product name as scraped.
    pub name: String,
    /// Original price text, kept for display.
    pub raw_price: String,
    /// Normalized price; `0.0` when the raw text could not be parsed.
    pub price: f64,
}

impl Listing {
    /// Build a listing from scraper output, normalizing its price.
    pub fn from_raw(raw: RawListing) -> Self {
        let price = normalize_price(&raw.raw_price);
        Self {
            name: raw.name,
            raw_price: raw.raw_price,
            price,
        }
    }

    /// Create a listing directly from a name and raw price text.
    pub fn new<N: Into<String>, P: Into<String>>(name: N, raw_price: P) -> Self {
        Self::from_raw(RawListing::new(name, raw_price))
    }

    /// The price as an optional value: `None` when the raw text failed to
    /// parse, so a sentinel `0.0` cannot win a minimum-price comparison.
    pub fn parsed_price(&self) -> Option<f64> {
        parse_price(&self.raw_price)
    }
}

/// A listing that cleared the relevance threshold, with its score attached.
///
/// Scores are rounded to two decimal places for presentation; ordering is by
/// score descending with input order preserved among ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredListing {
    /// The underlying listing.
    pub listing: Listing,
    /// Relevance score, rounded to two decimal places.
    pub score: f64,
}

impl ScoredListing {
    /// Attach a score to a listing, rounding to two decimal places.
    pub fn new(listing: Listing, score: f64) -> Self {
        Self {
            listing,
            score: (score * 100.0).round() / 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_normalizes_price() {
        let listing = Listing::from_raw(RawListing::new("Seiko SNK381", "CA$1,299.99"));
        assert_eq!(listing.price, 1299.99);
        assert_eq!(listing.raw_price, "CA$1,299.99");
    }

    #[test]
    fn test_unparsable_price_degrades_to_zero() {
        let listing = Listing::new("Mystery watch", "Call for price");
        assert_eq!(listing.price, 0.0);
        assert_eq!(listing.parsed_price(), None);
    }

    #[test]
    fn test_scored_listing_rounds_to_two_decimals() {
        let listing = Listing::new("Casio GA2100", "$99");
        let scored = ScoredListing::new(listing, 8.567);
        assert_eq!(scored.score, 8.57);

        let listing = Listing::new("Casio GA2100", "$99");
        let scored = ScoredListing::new(listing, 8.5);
        assert_eq!(scored.score, 8.5);
    }

    #[test]
    fn test_listing_serde_round_trip() {
        let listing = Listing::new("Seiko 5 Sports", "$289.00");
        let json = serde_json::to_string(&listing).unwrap();
        let back: Listing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, listing);
    }
}
