//! Generation of one- and two-edit variants of a word.
//!
//! All variants are built over an [`Alphabet`]: insertions and substitutions
//! try each of its letters in order. Words are handled by `char`, so any
//! Unicode input is split on character boundaries.

use std::collections::BTreeSet;

use ahash::AHashSet;

use crate::spelling::alphabet::Alphabet;

/// Produces edit variants of words over a fixed alphabet.
#[derive(Debug, Clone, Default)]
pub struct EditGenerator {
    alphabet: Alphabet,
    allow_switches: bool,
}

impl EditGenerator {
    /// Create a generator over `alphabet` with transpositions disabled.
    pub fn new(alphabet: Alphabet) -> Self {
        EditGenerator {
            alphabet,
            allow_switches: false,
        }
    }

    /// Enable or disable adjacent-letter transpositions in the neighbour sets.
    pub fn with_switches(mut self, allow_switches: bool) -> Self {
        self.allow_switches = allow_switches;
        self
    }

    /// Every `(left, right)` partition of `word`, shortest left part first.
    ///
    /// Returns `len + 1` pairs, including the ones with an empty side.
    pub fn splits<'a>(&self, word: &'a str) -> Vec<(&'a str, &'a str)> {
        word.char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(word.len()))
            .map(|offset| word.split_at(offset))
            .collect()
    }

    /// Drop one letter at each position. Repeated letters yield repeated variants.
    pub fn deletions(&self, word: &str) -> Vec<String> {
        self.splits(word)
            .into_iter()
            .filter_map(|(left, right)| {
                let rest = skip_first(right)?;
                Some(format!("{left}{rest}"))
            })
            .collect()
    }

    /// Insert every alphabet letter at every position.
    pub fn insertions(&self, word: &str) -> Vec<String> {
        let mut variants = Vec::with_capacity((word.chars().count() + 1) * self.alphabet.len());
        for (left, right) in self.splits(word) {
            for letter in self.alphabet.letters() {
                variants.push(format!("{left}{letter}{right}"));
            }
        }
        variants
    }

    /// Swap each pair of adjacent letters.
    pub fn transpositions(&self, word: &str) -> Vec<String> {
        self.splits(word)
            .into_iter()
            .filter_map(|(left, right)| {
                let mut chars = right.chars();
                let first = chars.next()?;
                let second = chars.next()?;
                Some(format!("{left}{second}{first}{}", chars.as_str()))
            })
            .collect()
    }

    /// Replace each letter with every alphabet letter.
    ///
    /// The result is de-duplicated and sorted, and never contains `word`
    /// itself: swapping a letter for the same letter is not an edit.
    pub fn substitutions(&self, word: &str) -> Vec<String> {
        let mut variants = BTreeSet::new();
        for (left, right) in self.splits(word) {
            let Some(rest) = skip_first(right) else {
                continue;
            };
            for letter in self.alphabet.letters() {
                variants.insert(format!("{left}{letter}{rest}"));
            }
        }
        variants.remove(word);
        variants.into_iter().collect()
    }

    /// All distinct words one edit away from `word`.
    pub fn one_edit_neighbors(&self, word: &str) -> AHashSet<String> {
        let mut edits = AHashSet::new();
        edits.extend(self.insertions(word));
        edits.extend(self.deletions(word));
        edits.extend(self.substitutions(word));
        if self.allow_switches {
            edits.extend(self.transpositions(word));
        }
        edits
    }

    /// All distinct words reachable through two consecutive edits.
    ///
    /// Nothing is subtracted: the set usually contains `word` itself and many
    /// of its one-edit neighbours.
    pub fn two_edit_neighbors(&self, word: &str) -> AHashSet<String> {
        let mut edits = AHashSet::new();
        for edit in self.one_edit_neighbors(word) {
            edits.extend(self.one_edit_neighbors(&edit));
        }
        edits
    }
}

/// `s` without its first character, or `None` when `s` is empty.
fn skip_first(s: &str) -> Option<&str> {
    let mut chars = s.chars();
    chars.next()?;
    Some(chars.as_str())
}
