//! Query intent classification and threshold selection.
//!
//! A query's apparent specificity decides how strict the result filter
//! should be: someone searching an exact model code expects tight matches,
//! while a generic "dive watch" search should let more through.

use serde::{Deserialize, Serialize};

use crate::analysis::{extract_model_tokens, normalized_tokens};
use crate::relevance::keywords::KeywordConfig;

/// Classification of a search query's apparent specificity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryIntent {
    /// The query names at least one exact model code ("ga2100").
    ModelExact,
    /// The query names a series or line ("seiko 5"): no model code, but a
    /// purely numeric token.
    SeriesLine,
    /// The query asks for a feature ("casio solar").
    Feature,
    /// Anything else.
    Generic,
}

impl QueryIntent {
    /// The score cutoff recommended for this intent.
    pub fn recommended_threshold(self) -> f64 {
        match self {
            QueryIntent::ModelExact => 4.0,
            QueryIntent::SeriesLine => 2.5,
            QueryIntent::Feature => 1.5,
            QueryIntent::Generic => 2.0,
        }
    }
}

/// Keyword-driven intent classifier.
///
/// Classification is a pure function of the query text and the configured
/// feature keyword set; it is recomputed per request and never cached.
#[derive(Clone, Debug, Default)]
pub struct IntentClassifier {
    keywords: KeywordConfig,
}

impl IntentClassifier {
    /// Create a classifier with the default keyword configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with a custom keyword configuration.
    pub fn with_keywords(keywords: KeywordConfig) -> Self {
        Self { keywords }
    }

    /// True iff the query names a series rather than a model: its model
    /// token set is empty but it carries a purely numeric token, as in
    /// "seiko 5".
    pub fn is_series_query(&self, query: &str) -> bool {
        if !extract_model_tokens(query).is_empty() {
            return false;
        }
        normalized_tokens(query)
            .iter()
            .any(|t| t.chars().all(|c| c.is_ascii_digit()))
    }

    /// True iff any normalized query token is a configured feature keyword.
    pub fn is_feature_query(&self, query: &str) -> bool {
        normalized_tokens(query)
            .iter()
            .any(|t| self.keywords.is_feature(t))
    }

    /// Classify a query. Precedence: model tokens present, then series
    /// pattern, then feature overlap, then generic.
    pub fn classify(&self, query: &str) -> QueryIntent {
        if !extract_model_tokens(query).is_empty() {
            QueryIntent::ModelExact
        } else if self.is_series_query(query) {
            QueryIntent::SeriesLine
        } else if self.is_feature_query(query) {
            QueryIntent::Feature
        } else {
            QueryIntent::Generic
        }
    }

    /// The score cutoff for a query, per its classified intent.
    pub fn recommended_threshold(&self, query: &str) -> f64 {
        self.classify(query).recommended_threshold()
    }
}

/// Classify a query with the default keyword configuration.
pub fn classify_intent(query: &str) -> QueryIntent {
    IntentClassifier::new().classify(query)
}

/// Recommended threshold for a query, with the default configuration.
pub fn recommended_threshold(query: &str) -> f64 {
    IntentClassifier::new().recommended_threshold(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_exact_precedence() {
        assert_eq!(classify_intent("ga2100"), QueryIntent::ModelExact);
        // Model token wins even with a feature keyword present
        assert_eq!(classify_intent("ga2100 solar"), QueryIntent::ModelExact);
    }

    #[test]
    fn test_series_query() {
        let classifier = IntentClassifier::new();
        assert!(classifier.is_series_query("seiko 5"));
        assert_eq!(classify_intent("seiko 5"), QueryIntent::SeriesLine);

        // "ga 2100" merges into a model token, so it is not a series query
        assert!(!classifier.is_series_query("ga 2100"));
    }

    #[test]
    fn test_feature_query() {
        assert_eq!(classify_intent("casio solar"), QueryIntent::Feature);
        assert_eq!(classify_intent("titanium diver"), QueryIntent::Feature);
    }

    #[test]
    fn test_generic_query() {
        assert_eq!(classify_intent("casio g shock"), QueryIntent::Generic);
        assert_eq!(classify_intent(""), QueryIntent::Generic);
        assert_eq!(classify_intent("!!!"), QueryIntent::Generic);
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(recommended_threshold("ga2100"), 4.0);
        assert_eq!(recommended_threshold("seiko 5"), 2.5);
        assert_eq!(recommended_threshold("casio solar"), 1.5);
        assert_eq!(recommended_threshold("casio g shock"), 2.0);
    }
}
