//! Text analysis for relevance comparison.
//!
//! This module canonicalizes listing and query text and extracts the
//! word-like and model-code units the relevance scorer compares.

pub mod model;
pub mod normalize;

// Re-export commonly used functions
pub use model::{base_model, extract_model_tokens, is_model_token};
pub use normalize::{normalize, normalized_tokens, tokenize};
