//! Letter sets used when generating insertion and substitution variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AutocorrectError, Result};

/// An ordered, duplicate-free set of characters.
///
/// Insertions and substitutions try every letter of the alphabet in order, so
/// the order here is the order in which variants are produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from the given letters, dropping repeats.
    pub fn new<I: IntoIterator<Item = char>>(letters: I) -> Result<Self> {
        let mut unique = Vec::new();
        for letter in letters {
            if !unique.contains(&letter) {
                unique.push(letter);
            }
        }

        if unique.is_empty() {
            return Err(AutocorrectError::invalid_config(
                "alphabet must contain at least one letter",
            ));
        }

        Ok(Alphabet { letters: unique })
    }

    /// The 26 lowercase ASCII letters.
    pub fn lowercase() -> Self {
        Alphabet {
            letters: ('a'..='z').collect(),
        }
    }

    /// Nucleotide codes for comparing DNA sequences.
    pub fn dna() -> Self {
        Alphabet {
            letters: vec!['A', 'C', 'G', 'T'],
        }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase()
    }
}

impl FromStr for Alphabet {
    type Err = AutocorrectError;

    fn from_str(s: &str) -> Result<Self> {
        Alphabet::new(s.chars())
    }
}

impl TryFrom<String> for Alphabet {
    type Error = AutocorrectError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.letters.into_iter().collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_alphabet() {
        let alphabet = Alphabet::lowercase();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.letters()[0], 'a');
        assert_eq!(alphabet.letters()[25], 'z');
        assert!(!alphabet.contains('A'));
    }

    #[test]
    fn test_alphabet_drops_repeats() {
        let alphabet: Alphabet = "abca".parse().unwrap();
        assert_eq!(alphabet.letters(), &['a', 'b', 'c']);
        assert_eq!(alphabet.to_string(), "abc");
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        let result = "".parse::<Alphabet>();
        assert!(matches!(result, Err(AutocorrectError::InvalidConfig(_))));
    }

    #[test]
    fn test_alphabet_serde() {
        let alphabet = Alphabet::dna();
        let json = serde_json::to_string(&alphabet).unwrap();
        assert_eq!(json, "\"ACGT\"");

        let parsed: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, alphabet);

        assert!(serde_json::from_str::<Alphabet>("\"\"").is_err());
    }
}
