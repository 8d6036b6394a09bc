//! Corpus model: vocabulary, word frequencies and word probabilities.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;

use crate::error::{AutocorrectError, Result};

lazy_static! {
    /// Maximal runs of word characters (alphanumerics and underscore).
    static ref WORD_PATTERN: Regex = Regex::new(r"\w+").expect("word pattern should be valid");
}

/// Splits case-folded text into words.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    pattern: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a tokenizer using the default `\w+` pattern.
    pub fn new() -> Self {
        WordTokenizer {
            pattern: Arc::new(WORD_PATTERN.clone()),
        }
    }

    /// Create a tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| AutocorrectError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(WordTokenizer {
            pattern: Arc::new(regex),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Lowercase the text and return every match, in order, duplicates included.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let folded = text.to_lowercase();
        self.pattern
            .find_iter(&folded)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// The set of known words.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: AHashSet<String>,
}

impl Vocabulary {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Vocabulary {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Occurrence count per distinct word.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: AHashMap<String, u64>,
}

impl FrequencyTable {
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens the table was built from.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// The `limit` most frequent words, highest count first.
    ///
    /// Equal counts are ordered alphabetically so the output is reproducible.
    pub fn most_common(&self, limit: usize) -> Vec<(String, u64)> {
        let mut word_freq: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();

        word_freq.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        word_freq.truncate(limit);
        word_freq
    }
}

/// Relative likelihood per distinct word.
#[derive(Debug, Clone, Default)]
pub struct ProbabilityTable {
    probabilities: AHashMap<String, f64>,
}

impl ProbabilityTable {
    /// Probability of `word`, or 0.0 when the word is unknown.
    pub fn probability(&self, word: &str) -> f64 {
        self.probabilities.get(word).copied().unwrap_or(0.0)
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.probabilities.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ProbabilityTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        ProbabilityTable {
            probabilities: iter.into_iter().map(|(w, p)| (w.into(), p)).collect(),
        }
    }
}

/// Tokenize `text` into its ordered word list and the set of distinct words.
pub fn build_vocabulary(text: &str) -> (Vec<String>, Vocabulary) {
    let words = WordTokenizer::new().tokenize(text);
    let vocabulary = words.iter().cloned().collect();
    (words, vocabulary)
}

/// Count the occurrences of every word.
pub fn build_frequency_table(words: &[String]) -> FrequencyTable {
    let mut counts: AHashMap<String, u64> = AHashMap::new();
    for word in words {
        *counts.entry(word.clone()).or_insert(0) += 1;
    }
    FrequencyTable { counts }
}

/// Divide each count by the number of distinct words.
///
/// The divisor is the vocabulary size, not the token count, so the values do
/// not sum to one and can exceed one for frequent words in small corpora.
pub fn build_probability_table(frequencies: &FrequencyTable) -> ProbabilityTable {
    let distinct = frequencies.len() as f64;
    let probabilities = frequencies
        .counts
        .iter()
        .map(|(word, count)| (word.clone(), *count as f64 / distinct))
        .collect();
    ProbabilityTable { probabilities }
}

/// Vocabulary, frequencies and probabilities learned from one corpus.
///
/// Built once and then only read, so it can be shared between threads behind
/// an [`Arc`] without any locking.
#[derive(Debug, Clone, Default)]
pub struct SpellingDictionary {
    words: Vec<String>,
    vocabulary: Vocabulary,
    frequencies: FrequencyTable,
    probabilities: ProbabilityTable,
}

impl SpellingDictionary {
    /// Build the dictionary from raw corpus text.
    pub fn from_corpus(text: &str) -> Self {
        let (words, vocabulary) = build_vocabulary(text);
        let frequencies = build_frequency_table(&words);
        let probabilities = build_probability_table(&frequencies);

        debug!(
            "Built dictionary: {} tokens, {} distinct words",
            words.len(),
            vocabulary.len()
        );

        SpellingDictionary {
            words,
            vocabulary,
            frequencies,
            probabilities,
        }
    }

    /// Read a corpus file and build the dictionary from its contents.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let dictionary = Self::from_corpus(&text);

        info!(
            "Loaded corpus {}: {} distinct words",
            path.display(),
            dictionary.vocabulary.len()
        );

        Ok(dictionary)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn probabilities(&self) -> &ProbabilityTable {
        &self.probabilities
    }

    pub fn contains(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    pub fn frequency(&self, word: &str) -> u64 {
        self.frequencies.count(word)
    }

    pub fn probability(&self, word: &str) -> f64 {
        self.probabilities.probability(word)
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of tokens.
    pub fn token_count(&self) -> usize {
        self.words.len()
    }
}
