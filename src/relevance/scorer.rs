//! Multi-factor relevance scoring for (query, listing) pairs.
//!
//! The score is a plain sum of independent contributions, so evaluation
//! order never changes the result:
//!
//! | contribution            | weight             |
//! |-------------------------|--------------------|
//! | exact model match       | +8 per shared code |
//! | base-family match       | +6 per pair        |
//! | wrong-family penalty    | -4 once            |
//! | weak token overlap      | +0.5 per token     |
//! | series phrase boost     | +4                 |
//! | feature boost           | +3 per keyword     |
//! | accessory penalty       | 0 / -5 / -15       |

use ahash::AHashSet;

use crate::analysis::{base_model, extract_model_tokens, normalize, tokenize};
use crate::relevance::intent::{IntentClassifier, QueryIntent};
use crate::relevance::keywords::KeywordConfig;

/// Relevance scorer combining token overlap, model and family matches,
/// feature matches, and accessory-listing penalties.
#[derive(Clone, Debug, Default)]
pub struct RelevanceScorer {
    keywords: KeywordConfig,
    classifier: IntentClassifier,
}

impl RelevanceScorer {
    /// Create a scorer with the default keyword configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with a custom keyword configuration. The intent
    /// classifier shares the same configuration.
    pub fn with_keywords(keywords: KeywordConfig) -> Self {
        Self {
            classifier: IntentClassifier::with_keywords(keywords.clone()),
            keywords,
        }
    }

    /// The intent classifier this scorer consults for the series checks.
    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// Score a listing name against a query.
    ///
    /// Pure and stateless; safe to call concurrently from any number of
    /// request contexts.
    pub fn score(&self, query: &str, listing_name: &str) -> f64 {
        let query_norm = normalize(query);
        let listing_norm = normalize(listing_name);

        let query_models = extract_model_tokens(query);
        let listing_models = extract_model_tokens(listing_name);

        let query_tokens: AHashSet<&str> = tokenize(&query_norm).into_iter().collect();
        let listing_tokens: AHashSet<&str> = tokenize(&listing_norm).into_iter().collect();

        let intent = self.classifier.classify(query);

        let mut score = 0.0;

        // 1. Exact model match
        let exact_matches = query_models.intersection(&listing_models).count();
        score += 8.0 * exact_matches as f64;

        // 2. Base-family match, counted over all pairs so a listing
        //    matching two query variants accrues credit twice
        let mut family_pairs = 0usize;
        for qm in &query_models {
            for lm in &listing_models {
                if base_model(qm) == base_model(lm) {
                    family_pairs += 1;
                }
            }
        }
        score += 6.0 * family_pairs as f64;

        // 3. Wrong-family penalty: both sides name models, none related
        if family_pairs == 0
            && !query_models.is_empty()
            && !listing_models.is_empty()
            && intent != QueryIntent::SeriesLine
        {
            score -= 4.0;
        }

        // 4. Weak token overlap, stopwords excluded
        let weak_overlap = query_tokens
            .intersection(&listing_tokens)
            .filter(|t| !self.keywords.is_stopword(t))
            .count();
        score += 0.5 * weak_overlap as f64;

        // 5. Series phrase boost: the whole query appears verbatim
        if intent == QueryIntent::SeriesLine && listing_norm.contains(&query_norm) {
            score += 4.0;
        }

        // 6. Feature boost
        let shared_features = query_tokens
            .intersection(&listing_tokens)
            .filter(|t| self.keywords.is_feature(t))
            .count();
        score += 3.0 * shared_features as f64;

        // 7. Accessory penalty, a function of the listing alone
        score += self.accessory_penalty(&listing_norm, &listing_tokens);

        score
    }

    /// Penalty for accessory listings (straps, bands, buckles) that would
    /// otherwise match on shared model codes.
    ///
    /// A listing naming a watch function (analog, quartz, ...) is treated
    /// as a genuine watch and skips the remaining checks.
    fn accessory_penalty(&self, listing_norm: &str, listing_tokens: &AHashSet<&str>) -> f64 {
        if listing_tokens
            .iter()
            .any(|t| self.keywords.is_watch_function(t))
        {
            return 0.0;
        }

        if self
            .keywords
            .trigger_phrases()
            .iter()
            .any(|phrase| contains_phrase(listing_norm, phrase))
        {
            return -15.0;
        }

        if listing_tokens.iter().any(|t| self.keywords.is_accessory(t)) {
            return -5.0;
        }

        0.0
    }
}

/// Word-boundary containment over normalized text, so "comfort" does not
/// match the phrase "for".
fn contains_phrase(normalized: &str, phrase: &str) -> bool {
    let padded = format!(" {normalized} ");
    padded.contains(&format!(" {phrase} "))
}

/// Score a (query, listing name) pair with the default configuration.
pub fn score(query: &str, listing_name: &str) -> f64 {
    RelevanceScorer::new().score(query, listing_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_model_match() {
        // +8 exact, +6 base-family pair; no shared plain tokens
        let s = score("ga2100", "Casio G-Shock GA2100-1A1 Watch");
        assert!(s >= 14.0, "expected strong model match, got {s}");
    }

    #[test]
    fn test_wrong_family_penalty() {
        // Both sides carry model codes from different families
        let s = score("ga2100", "Casio G-Shock DW5600E-1V");
        assert!(s < 0.0, "unrelated model should be penalized, got {s}");
    }

    #[test]
    fn test_base_family_counts_all_pairs() {
        let scorer = RelevanceScorer::new();
        // Two query variants of one family both pair with the listing code
        let single = scorer.score("ga2100", "GA2100 watch head");
        let double = scorer.score("ga2100 ga2100m", "GA2100 watch head");
        assert!(double > single);
    }

    #[test]
    fn test_series_phrase_boost() {
        let s = score("seiko 5", "Seiko 5 Sports Automatic SNK381");
        // +0.5 seiko, +0.5 "5", +4 series substring; "automatic" keeps the
        // accessory penalty at zero
        assert!((s - 5.0).abs() < 1e-9, "expected 5.0, got {s}");
    }

    #[test]
    fn test_feature_boost() {
        let s = score("casio solar", "Casio G-Shock Solar GW-M5610");
        // +0.5 casio, +0.5 solar, +3 feature "solar"
        assert!(s >= 4.0, "expected feature boost, got {s}");
    }

    #[test]
    fn test_feature_mismatch_scores_low() {
        // No shared tokens at all
        let s = score("casio solar", "Citizen Eco-Drive Diver");
        assert!(s < 1.5, "unrelated feature listing must stay low, got {s}");
    }

    #[test]
    fn test_accessory_trigger_phrase_penalty() {
        let s = score("ga2100", "Rubber Watch Strap Band for GA-2100");
        // +8 exact, +6 family, -15 trigger phrase "for"
        assert!((s - (-1.0)).abs() < 1e-9, "expected -1.0, got {s}");
    }

    #[test]
    fn test_accessory_keyword_penalty_without_trigger() {
        let s = score("ga2100", "GA-2100 rubber strap black");
        // +8 exact, +6 family, -5 accessory keyword
        assert!((s - 9.0).abs() < 1e-9, "expected 9.0, got {s}");
    }

    #[test]
    fn test_watch_function_overrides_accessory_checks() {
        // "digital" marks a genuine watch even though "for" appears
        let s = score("ga2100", "Casio GA2100 digital watch for divers");
        assert!(s > 10.0, "watch function should suppress penalty, got {s}");
    }

    #[test]
    fn test_empty_query_scores_zero_against_plain_listing() {
        assert_eq!(score("", "Seiko SNK381 field"), 0.0);
        assert_eq!(score("!!!", "Seiko field"), 0.0);
    }

    #[test]
    fn test_contains_phrase_word_boundaries() {
        assert!(contains_phrase("strap for ga 2100", "for"));
        assert!(!contains_phrase("comfort strap ga 2100", "for"));
        assert!(contains_phrase("compatible with apple watch", "compatible with"));
    }

    #[test]
    fn test_score_is_deterministic() {
        let scorer = RelevanceScorer::new();
        let a = scorer.score("ga2100", "Casio G-Shock GA2100-1A1");
        let b = scorer.score("ga2100", "Casio G-Shock GA2100-1A1");
        assert_eq!(a, b);
    }
}
