//! Frequency-ranked spelling suggestions.

use std::sync::Arc;

use ahash::AHashSet;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::{ProbabilityTable, SpellingDictionary, Vocabulary};
use crate::spelling::edits::EditGenerator;

/// A suggested word and its probability in the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub probability: f64,
}

impl Suggestion {
    pub fn new(word: String, probability: f64) -> Self {
        Suggestion { word, probability }
    }
}

/// Which generated variants are eligible as candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidatePolicy {
    /// Words that are both one edit and two edits away from the input.
    ///
    /// This is narrower than it sounds: a word qualifies only when it can also
    /// be reached by a second two-step path. It is the reference ranking
    /// behaviour and stays the default.
    #[default]
    Intersection,
    /// Any word within two edits of the input.
    Union,
}

/// Configuration for suggestion generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
    /// Whether adjacent-letter swaps count as edits.
    pub allow_switches: bool,
    /// How one- and two-edit variants are combined.
    pub candidate_policy: CandidatePolicy,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_suggestions: 5,
            allow_switches: false,
            candidate_policy: CandidatePolicy::Intersection,
        }
    }
}

/// Rank in-vocabulary variants of `word` by probability and keep the best `n`.
///
/// Uses the lowercase alphabet, no transpositions and the intersection policy.
pub fn suggest(
    word: &str,
    vocabulary: &Vocabulary,
    probabilities: &ProbabilityTable,
    n: usize,
) -> Vec<Suggestion> {
    rank_candidates(
        word,
        vocabulary,
        probabilities,
        n,
        &EditGenerator::default(),
        CandidatePolicy::Intersection,
    )
}

/// Core ranking pipeline shared by [`suggest`] and [`SuggestionEngine`].
///
/// Candidates are visited in lexicographic order, so among equally probable
/// words the alphabetically first one wins. An input word that is itself in
/// the vocabulary always enters the pool first.
pub fn rank_candidates(
    word: &str,
    vocabulary: &Vocabulary,
    probabilities: &ProbabilityTable,
    n: usize,
    generator: &EditGenerator,
    policy: CandidatePolicy,
) -> Vec<Suggestion> {
    let mut pool: Vec<String> = Vec::new();
    if vocabulary.contains(word) {
        pool.push(word.to_string());
    }

    let one_edit = generator.one_edit_neighbors(word);
    let two_edit = generator.two_edit_neighbors(word);
    let mut candidates: Vec<&String> = match policy {
        CandidatePolicy::Intersection => one_edit.intersection(&two_edit).collect(),
        CandidatePolicy::Union => one_edit.union(&two_edit).collect(),
    };
    candidates.sort();

    let mut seen: AHashSet<&str> = pool.iter().map(String::as_str).collect();
    let mut known: Vec<String> = Vec::new();
    for candidate in candidates {
        if vocabulary.contains(candidate) && seen.insert(candidate.as_str()) {
            known.push(candidate.clone());
        }
    }
    pool.extend(known);

    let mut suggestions: Vec<Suggestion> = pool
        .into_iter()
        .map(|w| {
            let probability = probabilities.probability(&w);
            Suggestion::new(w, probability)
        })
        .collect();

    // Stable: equal probabilities keep their pool order.
    suggestions.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    suggestions.truncate(n);

    debug!("{} suggestion(s) for {word:?}", suggestions.len());
    suggestions
}

/// Suggestion engine over a shared, read-only dictionary.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    dictionary: Arc<SpellingDictionary>,
    generator: EditGenerator,
    config: SuggestionConfig,
}

impl SuggestionEngine {
    /// Create a new suggestion engine with the default configuration.
    pub fn new(dictionary: Arc<SpellingDictionary>) -> Self {
        Self::with_config(dictionary, SuggestionConfig::default())
    }

    /// Create a new suggestion engine with custom configuration.
    pub fn with_config(dictionary: Arc<SpellingDictionary>, config: SuggestionConfig) -> Self {
        let generator = EditGenerator::default().with_switches(config.allow_switches);
        SuggestionEngine {
            dictionary,
            generator,
            config,
        }
    }

    /// Replace the edit generator, e.g. to use a different alphabet.
    pub fn with_generator(mut self, generator: EditGenerator) -> Self {
        self.generator = generator.with_switches(self.config.allow_switches);
        self
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Get suggestions for a potentially misspelled word.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        rank_candidates(
            word,
            self.dictionary.vocabulary(),
            self.dictionary.probabilities(),
            self.config.max_suggestions,
            &self.generator,
            self.config.candidate_policy,
        )
    }
}
