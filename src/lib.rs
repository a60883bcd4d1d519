//! # Pricewatch
//!
//! Relevance scoring and price normalization for multi-retailer watch
//! search. Scrapers hand this crate raw `(name, price text)` listings; it
//! decides which of them actually answer the user's query, in what order,
//! and what their prices are as numbers.
//!
//! ## Features
//!
//! - Text normalization and model-code extraction ("GA 2100" and
//!   "GA2100-1A1" meet at `ga2100`)
//! - Query intent classification with per-intent score thresholds
//! - Multi-factor relevance scoring with accessory-listing penalties
//! - Locale-ambiguous price parsing ("1,299.99" and "1.299,99")
//! - Explicit domain-to-scraper registry with a derived allow-list
//!
//! Every scoring component is a pure function over its inputs: no shared
//! state, no I/O, safe to call concurrently without coordination.

pub mod analysis;
pub mod cli;
pub mod error;
pub mod listing;
pub mod price;
pub mod relevance;
pub mod scraper;

pub use error::{PricewatchError, Result};
pub use listing::{Listing, RawListing, ScoredListing};
pub use price::{normalize_price, parse_price};
pub use relevance::{filter_results, rank_listings};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
