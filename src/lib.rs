//! # Autocorrect
//!
//! Frequency-ranked spelling suggestions and weighted edit distance.
//!
//! ## Features
//!
//! - Word frequency model learned from any text corpus
//! - One- and two-edit variant generation over a configurable alphabet
//! - Probability-ranked "did you mean" suggestions
//! - Weighted Levenshtein distance with a recoverable edit script, usable on
//!   words, DNA strings or any other symbol sequence
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use autocorrect::spelling::{EditCosts, SpellingDictionary, SuggestionEngine, edit_distance};
//!
//! let dictionary = Arc::new(SpellingDictionary::from_corpus("the cat sat on the mat"));
//! let engine = SuggestionEngine::new(dictionary);
//! assert_eq!(engine.suggest("cet")[0].word, "cat");
//!
//! let distance = edit_distance("kitten", "sitting", EditCosts::new(1, 1, 2));
//! assert_eq!(distance.cost, 5);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
