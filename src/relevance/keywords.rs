//! Enumerated keyword configuration for the relevance engine.
//!
//! Every list here is matched against normalized tokens, so entries are
//! lowercase single words; multi-word trigger phrases are matched against
//! the normalized listing text on word boundaries.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

/// Generic descriptors excluded from the weak token-overlap contribution.
///
/// Sharing "watch" or a color word says nothing about whether two listings
/// describe the same product.
const DEFAULT_STOPWORDS: &[&str] = &[
    "watch", "watches", "mens", "womens", "men", "women", "unisex", "new", "sale", "black",
    "blue", "red", "green", "white", "grey", "gray", "gold", "silver", "rose", "steel",
    "stainless", "leather", "rubber", "resin", "nylon", "dial", "mm", "automatic",
];

/// Feature keywords that mark a query as feature-driven and earn a boost
/// when shared between query and listing.
const DEFAULT_FEATURES: &[&str] = &[
    "solar", "eco", "drive", "kinetic", "automatic", "mechanical", "quartz", "titanium",
    "diver", "chronograph", "gmt", "perpetual", "tough",
];

/// Tokens that identify a listing as an accessory rather than a watch.
const DEFAULT_ACCESSORIES: &[&str] = &[
    "strap", "band", "bands", "bracelet", "buckle", "clasp", "link", "links", "pin", "pins",
    "winder", "box", "pouch", "case", "tool", "adapter", "protector", "insert", "bezel",
];

/// Tokens describing a watch movement or display; their presence overrides
/// the accessory checks entirely.
const DEFAULT_WATCH_FUNCTIONS: &[&str] = &[
    "analog", "analogue", "digital", "quartz", "automatic", "chronograph", "solar",
    "kinetic", "mechanical",
];

/// Phrases whose presence in a listing marks it as an accessory sold *for*
/// some watch ("strap for GA-2100"). Matched on word boundaries over the
/// normalized text.
const DEFAULT_TRIGGER_PHRASES: &[&str] = &["for", "fits", "compatible with"];

/// Default stopwords as a HashSet.
pub static DEFAULT_STOPWORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| DEFAULT_STOPWORDS.iter().map(|&s| s.to_string()).collect());

/// Default feature keywords as a HashSet.
pub static DEFAULT_FEATURES_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| DEFAULT_FEATURES.iter().map(|&s| s.to_string()).collect());

/// Default accessory keywords as a HashSet.
pub static DEFAULT_ACCESSORIES_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| DEFAULT_ACCESSORIES.iter().map(|&s| s.to_string()).collect());

/// Default watch-function keywords as a HashSet.
pub static DEFAULT_WATCH_FUNCTIONS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_WATCH_FUNCTIONS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Keyword configuration consumed by the intent classifier and scorer.
///
/// All sets are shared via `Arc`, so cloning a config is cheap and a single
/// customized config can back many scorer instances.
#[derive(Clone, Debug)]
pub struct KeywordConfig {
    stopwords: Arc<HashSet<String>>,
    features: Arc<HashSet<String>>,
    accessories: Arc<HashSet<String>>,
    watch_functions: Arc<HashSet<String>>,
    trigger_phrases: Arc<Vec<String>>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            stopwords: Arc::new(DEFAULT_STOPWORDS_SET.clone()),
            features: Arc::new(DEFAULT_FEATURES_SET.clone()),
            accessories: Arc::new(DEFAULT_ACCESSORIES_SET.clone()),
            watch_functions: Arc::new(DEFAULT_WATCH_FUNCTIONS_SET.clone()),
            trigger_phrases: Arc::new(
                DEFAULT_TRIGGER_PHRASES
                    .iter()
                    .map(|&s| s.to_string())
                    .collect(),
            ),
        }
    }
}

impl KeywordConfig {
    /// Create a config with the default keyword lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stopword set.
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = Arc::new(words.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Replace the feature keyword set.
    pub fn with_features<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = Arc::new(words.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Replace the accessory keyword set.
    pub fn with_accessories<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accessories = Arc::new(words.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Replace the watch-function keyword set.
    pub fn with_watch_functions<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.watch_functions = Arc::new(words.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Replace the accessory trigger phrases.
    pub fn with_trigger_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trigger_phrases = Arc::new(phrases.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Check if a token is a stopword.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Check if a token is a feature keyword.
    pub fn is_feature(&self, token: &str) -> bool {
        self.features.contains(token)
    }

    /// Check if a token is an accessory keyword.
    pub fn is_accessory(&self, token: &str) -> bool {
        self.accessories.contains(token)
    }

    /// Check if a token is a watch-function keyword.
    pub fn is_watch_function(&self, token: &str) -> bool {
        self.watch_functions.contains(token)
    }

    /// The accessory trigger phrases.
    pub fn trigger_phrases(&self) -> &[String] {
        &self.trigger_phrases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sets() {
        let config = KeywordConfig::new();
        assert!(config.is_stopword("watch"));
        assert!(config.is_feature("solar"));
        assert!(config.is_accessory("strap"));
        assert!(config.is_watch_function("quartz"));
        assert!(!config.is_stopword("seiko"));
    }

    #[test]
    fn test_automatic_is_both_stopword_and_feature() {
        // "automatic" is too generic to count as weak overlap but still
        // meaningful as a shared feature.
        let config = KeywordConfig::new();
        assert!(config.is_stopword("automatic"));
        assert!(config.is_feature("automatic"));
        assert!(config.is_watch_function("automatic"));
    }

    #[test]
    fn test_builder_replaces_sets() {
        let config = KeywordConfig::new().with_features(vec!["tourbillon"]);
        assert!(config.is_feature("tourbillon"));
        assert!(!config.is_feature("solar"));
        // Other sets untouched
        assert!(config.is_stopword("watch"));
    }

    #[test]
    fn test_trigger_phrases() {
        let config = KeywordConfig::new();
        assert!(
            config
                .trigger_phrases()
                .iter()
                .any(|p| p == "compatible with")
        );
    }
}
