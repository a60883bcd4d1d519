//! Result filtering, ranking, and response assembly.

use std::cmp::Ordering;

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::listing::{Listing, ScoredListing};
use crate::relevance::keywords::KeywordConfig;
use crate::relevance::scorer::RelevanceScorer;

/// Listing counts at or above this size are scored on the rayon pool.
const PARALLEL_BATCH_SIZE: usize = 256;

/// Scores listings against a query and keeps the ones above the
/// intent-derived threshold.
#[derive(Clone, Debug, Default)]
pub struct Ranker {
    scorer: RelevanceScorer,
}

impl Ranker {
    /// Create a ranker with the default keyword configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ranker with a custom keyword configuration.
    pub fn with_keywords(keywords: KeywordConfig) -> Self {
        Self {
            scorer: RelevanceScorer::with_keywords(keywords),
        }
    }

    /// The scorer backing this ranker.
    pub fn scorer(&self) -> &RelevanceScorer {
        &self.scorer
    }

    /// Score every listing and keep those at or above the query's
    /// threshold, sorted by score descending.
    ///
    /// The sort is stable: listings with equal scores retain their relative
    /// input order, and callers present results to end users in that order.
    /// The input is never mutated or reordered, and an empty result is a
    /// valid outcome, not an error.
    pub fn filter(&self, query: &str, listings: &[Listing]) -> Vec<ScoredListing> {
        let threshold = self
            .scorer
            .classifier()
            .recommended_threshold(query);
        debug!(
            "filtering {} listings at threshold {threshold}",
            listings.len()
        );

        let scores: Vec<f64> = if listings.len() >= PARALLEL_BATCH_SIZE {
            // Order-preserving parallel map keeps the stability contract
            listings
                .par_iter()
                .map(|listing| self.scorer.score(query, &listing.name))
                .collect()
        } else {
            listings
                .iter()
                .map(|listing| self.scorer.score(query, &listing.name))
                .collect()
        };

        let mut kept: Vec<ScoredListing> = listings
            .iter()
            .zip(scores)
            .filter(|(_, score)| *score >= threshold)
            .map(|(listing, score)| ScoredListing::new(listing.clone(), score))
            .collect();

        // Stable sort; equal scores keep input order
        kept.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        kept
    }
}

/// The outcome of ranking a scraped listing set.
///
/// When nothing clears the threshold the serving layer's documented
/// behavior is to present the full unfiltered set instead of an empty
/// page; [`rank_listings`] captures that fallback here so `filter` itself
/// stays pure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// Listings that cleared the threshold, sorted by score descending.
    Filtered(Vec<ScoredListing>),
    /// Nothing cleared the threshold; the full set is passed through in
    /// input order.
    Unfiltered(Vec<Listing>),
}

impl SearchOutcome {
    /// Number of listings in the outcome.
    pub fn len(&self) -> usize {
        match self {
            SearchOutcome::Filtered(results) => results.len(),
            SearchOutcome::Unfiltered(listings) => listings.len(),
        }
    }

    /// Check if the outcome is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The lowest price across the outcome's listings.
    ///
    /// Listings whose price text failed to parse are ignored, so the `0.0`
    /// sentinel cannot win the comparison.
    pub fn starting_from(&self) -> Option<f64> {
        let prices: Vec<f64> = match self {
            SearchOutcome::Filtered(results) => results
                .iter()
                .filter_map(|r| r.listing.parsed_price())
                .collect(),
            SearchOutcome::Unfiltered(listings) => {
                listings.iter().filter_map(Listing::parsed_price).collect()
            }
        };
        prices.into_iter().min_by(|a, b| a.total_cmp(b))
    }
}

/// Filter and rank listings with the default configuration.
///
/// This is the sole ranking entry point for callers that do not need a
/// customized [`Ranker`].
pub fn filter_results(query: &str, listings: &[Listing]) -> Vec<ScoredListing> {
    Ranker::new().filter(query, listings)
}

/// Rank listings and apply the serving layer's unfiltered fallback.
pub fn rank_listings(query: &str, listings: &[Listing]) -> SearchOutcome {
    let filtered = filter_results(query, listings);
    if filtered.is_empty() {
        info!(
            "no listing cleared the threshold for '{query}'; falling back to all {} listings",
            listings.len()
        );
        SearchOutcome::Unfiltered(listings.to_vec())
    } else {
        SearchOutcome::Filtered(filtered)
    }
}
