//! Domain-to-scraper registry and the retailer directory.
//!
//! The registry is an explicit mapping constructed at startup; the domain
//! allow-list the serving layer consults is derived from its keys rather
//! than maintained separately.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::debug;
use url::Url;

use crate::error::{PricewatchError, Result};
use crate::listing::Listing;
use crate::scraper::Scraper;

/// Extract the registrable host from a search URL.
///
/// Rejects non-http(s) schemes and strips a leading `www.`, matching the
/// form the registry keys use.
pub fn host_domain(url: &str) -> Result<String> {
    let parsed = Url::parse(url)?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(PricewatchError::registry(format!(
            "invalid URL scheme '{}'",
            parsed.scheme()
        )));
    }

    let host = parsed
        .host_str()
        .ok_or_else(|| PricewatchError::registry("URL has no host"))?;

    Ok(host.strip_prefix("www.").unwrap_or(host).to_string())
}

/// Explicit mapping from retailer domain to scraper implementation.
#[derive(Default)]
pub struct ScraperRegistry {
    scrapers: HashMap<String, Arc<dyn Scraper>>,
}

impl std::fmt::Debug for ScraperRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScraperRegistry")
            .field("domains", &self.scrapers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ScraperRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scraper for a domain ("watchit.ca", no `www.` prefix).
    /// Registering the same domain twice replaces the earlier scraper.
    pub fn register<D: Into<String>>(&mut self, domain: D, scraper: Arc<dyn Scraper>) {
        let domain = domain.into();
        debug!("registering scraper '{}' for domain {domain}", scraper.name());
        self.scrapers.insert(domain, scraper);
    }

    /// Look up the scraper for a domain.
    pub fn get(&self, domain: &str) -> Option<Arc<dyn Scraper>> {
        self.scrapers.get(domain).cloned()
    }

    /// The domain allow-list, derived from the registered mapping.
    pub fn allowed_domains(&self) -> HashSet<String> {
        self.scrapers.keys().cloned().collect()
    }

    /// Check whether a domain has a registered scraper.
    pub fn is_allowed(&self, domain: &str) -> bool {
        self.scrapers.contains_key(domain)
    }

    /// Number of registered scrapers.
    pub fn len(&self) -> usize {
        self.scrapers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.scrapers.is_empty()
    }

    /// Scrape a search URL with the scraper registered for its domain and
    /// normalize the resulting prices.
    ///
    /// Fails when the URL is invalid, its scheme is not http(s), or no
    /// scraper is registered for its domain.
    pub async fn scrape_listings(&self, url: &str, term: &str) -> Result<Vec<Listing>> {
        let domain = host_domain(url)?;
        let scraper = self.get(&domain).ok_or_else(|| {
            PricewatchError::registry(format!("no scraper registered for domain '{domain}'"))
        })?;

        let raw = scraper.scrape(url, term).await?;
        Ok(raw.into_iter().map(Listing::from_raw).collect())
    }
}

/// A retailer known to the search frontend: display metadata plus the
/// search-URL template its scraper consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retailer {
    /// Stable identifier ("watch-it").
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Homepage URL.
    pub homepage: &'static str,
    /// Search URL template with a `{query}` placeholder.
    pub search_template: &'static str,
}

impl Retailer {
    /// Build the search-results URL for a term, percent-encoding it into
    /// the template's `{query}` placeholder.
    pub fn search_url(&self, term: &str) -> String {
        self.search_template
            .replace("{query}", &urlencoding::encode(term))
    }
}

/// The retailer directory of the original deployment.
pub fn default_retailers() -> Vec<Retailer> {
    vec![
        Retailer {
            id: "watch-it",
            name: "Watch It!",
            homepage: "https://www.watchit.ca/",
            search_template: "https://www.watchit.ca/pages/search-results-page?q={query}",
        },
        Retailer {
            id: "watchory",
            name: "Watchory",
            homepage: "https://watchory.ca/",
            search_template: "https://watchory.ca/search?q={query}",
        },
        Retailer {
            id: "big-time-watches",
            name: "Big Time Watches",
            homepage: "https://bigtimewatches.com/",
            search_template: "https://bigtimewatches.com/search?q={query}",
        },
        Retailer {
            id: "city-watches",
            name: "City Watches",
            homepage: "https://www.citywatches.ca/",
            search_template: "https://www.citywatches.ca/search?q={query}",
        },
        Retailer {
            id: "ebay",
            name: "eBay",
            homepage: "https://www.ebay.ca/",
            search_template: "https://www.ebay.ca/sch/i.html?_nkw={query}",
        },
        Retailer {
            id: "bijoux-eclore",
            name: "Bijoux Eclore",
            homepage: "https://www.bijouxeclore.com/",
            search_template:
                "https://www.bijouxeclore.com/search?q={query}&options%5Bprefix%5D=last&type=product",
        },
        Retailer {
            id: "kavar-jewellers",
            name: "Kavar Jewellers",
            homepage: "https://www.kavarjewellers.ca/",
            search_template:
                "https://www.kavarjewellers.ca/collections/search%3Fkeyword%3D{query}",
        },
        Retailer {
            id: "peoples-jewellers",
            name: "Peoples Jewellers",
            homepage: "https://www.peoplesjewellers.com/",
            search_template: "https://www.peoplesjewellers.com/search?text={query}",
        },
        Retailer {
            id: "creation-watches",
            name: "Creation Watches",
            homepage: "https://www.creationwatches.com/",
            search_template: "https://www.creationwatches.com/products/search?keyword={query}",
        },
        Retailer {
            id: "canada-watch-house",
            name: "Canada Watch House",
            homepage: "https://canadawatchhouse.ca/",
            search_template: "https://canadawatchhouse.ca/search?q={query}",
        },
        Retailer {
            id: "assaleh",
            name: "Assaleh",
            homepage: "https://assaleh.ca/",
            search_template: "https://assaleh.ca/search?q={query}",
        },
    ]
}
