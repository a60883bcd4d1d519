//! Text canonicalization and whitespace tokenization.
//!
//! Product names scraped from retailer pages arrive with arbitrary casing,
//! punctuation, and spacing ("GA-2100!!  Black"). Everything the relevance
//! scorer compares goes through [`normalize`] first, so downstream logic
//! only ever sees lowercase alphanumeric words separated by single spaces.

use std::sync::LazyLock;

use regex::Regex;

/// Matches every character that must be rewritten to a space.
static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9 ]").unwrap());

/// Matches runs of whitespace for collapsing.
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Canonicalize text for comparison.
///
/// Lowercases, replaces every character outside `[a-z0-9 ]` with a space,
/// collapses whitespace runs, and trims. Idempotent:
/// `normalize(normalize(x)) == normalize(x)` for all inputs, including the
/// empty string.
///
/// # Examples
///
/// ```
/// use pricewatch::analysis::normalize;
///
/// assert_eq!(normalize("GA-2100!!  Black"), "ga 2100 black");
/// assert_eq!(normalize("!!!"), "");
/// ```
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_ALNUM.replace_all(&lowered, " ");
    WHITESPACE_RUN
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// Split normalized text into tokens.
///
/// Empty input yields an empty vector, not an error.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// Normalize and tokenize in one step, producing owned tokens.
pub fn normalized_tokens(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("GA-2100!!  Black"), "ga 2100 black");
        assert_eq!(normalize("Seiko 5 Sports (SNK381)"), "seiko 5 sports snk381");
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = ["GA-2100!!  Black", "", "   ", "already normal", "日本語 text"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_normalize_all_punctuation_yields_empty() {
        assert_eq!(normalize("!@#$%^&*()"), "");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        let tokens = tokenize("casio g shock");
        assert_eq!(tokens, vec!["casio", "g", "shock"]);
    }

    #[test]
    fn test_normalized_tokens() {
        assert_eq!(
            normalized_tokens("Casio G-Shock!"),
            vec!["casio", "g", "shock"]
        );
        assert!(normalized_tokens("???").is_empty());
    }
}
