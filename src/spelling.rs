//! Spelling correction and edit-distance utilities.
//!
//! This module learns word frequencies from a corpus, generates edit variants
//! of misspelled words, ranks in-vocabulary variants by probability, and
//! computes weighted edit distances with a concrete edit script.

pub mod alphabet;
pub mod corrector;
pub mod dictionary;
pub mod edits;
pub mod levenshtein;
pub mod suggest;

// Re-export commonly used types
pub use alphabet::*;
pub use corrector::*;
pub use dictionary::*;
pub use edits::*;
pub use levenshtein::*;
pub use suggest::*;
