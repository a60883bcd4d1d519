//! The scraper capability boundary.
//!
//! Per-retailer page fetching and DOM extraction live outside this crate;
//! what lives here is the capability interface those implementations
//! satisfy, and the registry binding them to retailer domains.

pub mod registry;

use futures::future::BoxFuture;

use crate::error::Result;
use crate::listing::RawListing;

pub use registry::{Retailer, ScraperRegistry, default_retailers, host_domain};

/// Capability interface implemented once per supported retailer.
///
/// Implementations fetch the given search URL and extract raw
/// name/price-text pairs; everything downstream (price normalization,
/// scoring, ranking) is handled by this crate.
pub trait Scraper: Send + Sync {
    /// Scrape the given search-results URL for the given term.
    fn scrape<'a>(&'a self, url: &'a str, term: &'a str) -> BoxFuture<'a, Result<Vec<RawListing>>>;

    /// The name of this scraper (for logging and diagnostics).
    fn name(&self) -> &'static str;
}
