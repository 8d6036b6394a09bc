//! Main spelling corrector that ties suggestions to edit costs.
//!
//! For a misspelled word the corrector ranks candidate words by probability,
//! then measures the weighted edit distance from the input to every candidate
//! so callers can show which correction needs the least work.

use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::CorrectorConfig;
use crate::error::{AutocorrectError, Result};
use crate::spelling::dictionary::SpellingDictionary;
use crate::spelling::edits::EditGenerator;
use crate::spelling::levenshtein::{EditCosts, EditScript, edit_distance};
use crate::spelling::suggest::{Suggestion, SuggestionEngine};

/// Edit cost from the input word to one suggested word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateCost {
    pub word: String,
    pub cost: u64,
    pub script: EditScript,
}

/// Result of correcting one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// The word as given.
    pub original: String,
    /// Suggestions, most probable first.
    pub suggestions: Vec<Suggestion>,
    /// One entry per suggestion, cheapest first.
    pub costs: Vec<CandidateCost>,
}

impl CorrectionResult {
    /// Check if any corrections were suggested.
    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// The most probable suggestion.
    pub fn best_suggestion(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }

    /// The suggestion needing the fewest edits.
    pub fn cheapest(&self) -> Option<&CandidateCost> {
        self.costs.first()
    }
}

/// Main spelling corrector.
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    engine: SuggestionEngine,
    costs: EditCosts,
    threads: usize,
}

impl SpellingCorrector {
    /// Create a corrector with the default configuration.
    pub fn new(dictionary: Arc<SpellingDictionary>) -> Self {
        let config = CorrectorConfig::default();
        SpellingCorrector {
            engine: SuggestionEngine::with_config(dictionary, config.suggestion_config()),
            costs: config.costs,
            threads: config.threads,
        }
    }

    /// Create a corrector with a custom configuration.
    pub fn with_config(
        dictionary: Arc<SpellingDictionary>,
        config: CorrectorConfig,
    ) -> Result<Self> {
        config.validate()?;

        let generator = EditGenerator::new(config.alphabet.clone());
        let engine = SuggestionEngine::with_config(dictionary, config.suggestion_config())
            .with_generator(generator);

        Ok(SpellingCorrector {
            engine,
            costs: config.costs,
            threads: config.threads,
        })
    }

    pub fn costs(&self) -> EditCosts {
        self.costs
    }

    /// Suggest corrections for `word` and cost each of them.
    pub fn correct(&self, word: &str) -> CorrectionResult {
        let suggestions = self.engine.suggest(word);

        let mut costs: Vec<CandidateCost> = suggestions
            .iter()
            .map(|suggestion| {
                let distance = edit_distance(word, &suggestion.word, self.costs);
                CandidateCost {
                    word: suggestion.word.clone(),
                    cost: distance.cost,
                    script: distance.script,
                }
            })
            .collect();
        costs.sort_by_key(|c| c.cost);

        debug!(
            "Corrected {word:?}: {} suggestion(s), cheapest {:?}",
            suggestions.len(),
            costs.first().map(|c| c.word.as_str())
        );

        CorrectionResult {
            original: word.to_string(),
            suggestions,
            costs,
        }
    }

    /// Correct many words in parallel. Results follow the input order.
    pub fn correct_batch<S: AsRef<str> + Sync>(
        &self,
        words: &[S],
    ) -> Result<Vec<CorrectionResult>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| AutocorrectError::thread_pool(e.to_string()))?;

        info!(
            "Correcting {} word(s) on {} thread(s)",
            words.len(),
            self.threads
        );

        Ok(pool.install(|| {
            words
                .par_iter()
                .map(|word| self.correct(word.as_ref()))
                .collect()
        }))
    }
}
