//! Model-code token extraction and family-level reduction.
//!
//! Watch listings identify products by model codes like `GA2100-1A1` or
//! `SNXS77K1`. Queries write the same codes inconsistently ("ga2100",
//! "GA 2100"), so extraction merges a letters-only token with a directly
//! following digits-only token before applying the model-token test.

use ahash::AHashSet;

use crate::analysis::normalize::{normalize, tokenize};

/// Check whether a normalized token looks like a product model code.
///
/// A model token has at least two alphabetic and at least two numeric
/// characters. This deliberately rejects tokens such as `200m` (water
/// resistance) or `wr100` that mix a digit run into an ordinary descriptor.
pub fn is_model_token(token: &str) -> bool {
    let letters = token.chars().filter(char::is_ascii_alphabetic).count();
    let digits = token.chars().filter(char::is_ascii_digit).count();
    letters >= 2 && digits >= 2
}

/// Extract the set of model tokens from arbitrary text.
///
/// The text is normalized and tokenized, then scanned left to right: a
/// purely alphabetic token immediately followed by a purely numeric token is
/// merged into one candidate ("ga" + "2100" becomes "ga2100") and the
/// numeric token is consumed. Candidates failing [`is_model_token`] are
/// discarded. Duplicates collapse; order is irrelevant downstream.
///
/// # Examples
///
/// ```
/// use pricewatch::analysis::extract_model_tokens;
///
/// let models = extract_model_tokens("wr100 200m ga2100");
/// assert_eq!(models.len(), 1);
/// assert!(models.contains("ga2100"));
/// ```
pub fn extract_model_tokens(text: &str) -> AHashSet<String> {
    let normalized = normalize(text);
    let tokens = tokenize(&normalized);

    let mut models = AHashSet::new();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        let candidate = if is_alphabetic(token)
            && i + 1 < tokens.len()
            && is_numeric(tokens[i + 1])
        {
            // "ga" + "2100" -> "ga2100", consuming the numeric token
            let merged = format!("{}{}", token, tokens[i + 1]);
            i += 2;
            merged
        } else {
            i += 1;
            token.to_string()
        };

        if is_model_token(&candidate) {
            models.insert(candidate);
        }
    }

    models
}

/// Reduce a model token to its family key.
///
/// Accumulates the leading alphabetic run, then the first contiguous digit
/// run, and stops at the first non-digit once digits have started. Variant
/// suffixes are ignored, so `ga2100m` and `ga2100` share the family
/// `ga2100`.
pub fn base_model(token: &str) -> String {
    let mut base = String::new();
    let mut in_digits = false;

    for c in token.chars() {
        if c.is_ascii_digit() {
            in_digits = true;
            base.push(c);
        } else if in_digits {
            break;
        } else if c.is_ascii_alphabetic() {
            base.push(c);
        }
    }

    base
}

fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_model_token() {
        assert!(is_model_token("ga2100"));
        assert!(is_model_token("snxs77k1"));

        // One letter or one digit is not enough
        assert!(!is_model_token("200m"));
        assert!(!is_model_token("wr100"));
        assert!(!is_model_token("seiko5"));
        assert!(!is_model_token("watch"));
        assert!(!is_model_token("2100"));
    }

    #[test]
    fn test_extract_rejects_weak_candidates() {
        let models = extract_model_tokens("wr100 200m ga2100");
        assert_eq!(models.len(), 1);
        assert!(models.contains("ga2100"));
    }

    #[test]
    fn test_extract_merges_split_model_codes() {
        let models = extract_model_tokens("Casio GA 2100 Black");
        assert!(models.contains("ga2100"));

        // The consumed numeric token does not produce a second candidate
        assert_eq!(models.len(), 1);
    }

    #[test]
    fn test_extract_handles_punctuated_codes() {
        let models = extract_model_tokens("Casio G-Shock GA2100-1A1 Watch");
        assert!(models.contains("ga2100"));
    }

    #[test]
    fn test_extract_empty_and_punctuation_input() {
        assert!(extract_model_tokens("").is_empty());
        assert!(extract_model_tokens("!!! ???").is_empty());
    }

    #[test]
    fn test_extract_deduplicates() {
        let models = extract_model_tokens("ga2100 GA-2100 ga 2100");
        assert_eq!(models.len(), 1);
    }

    #[test]
    fn test_base_model_ignores_variant_suffix() {
        assert_eq!(base_model("ga2100m"), "ga2100");
        assert_eq!(base_model("ga2100"), "ga2100");
        assert_eq!(base_model("snxs77k1"), "snxs77");
    }

    #[test]
    fn test_base_model_stops_after_digit_run() {
        assert_eq!(base_model("ga2100 1a1"), "ga2100");
        assert_eq!(base_model("abc"), "abc");
        assert_eq!(base_model("1234"), "1234");
    }
}
