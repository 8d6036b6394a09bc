//! Configuration for the spelling corrector.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{AutocorrectError, Result};
use crate::spelling::alphabet::Alphabet;
use crate::spelling::levenshtein::EditCosts;
use crate::spelling::suggest::{CandidatePolicy, SuggestionConfig};

/// Settings shared by suggestion ranking and edit-cost reporting.
///
/// Every field has a default, so a configuration file only needs to name the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Maximum number of suggestions per word.
    pub max_suggestions: usize,

    /// Whether adjacent-letter swaps count as edits.
    pub allow_switches: bool,

    /// How one- and two-edit variants are combined.
    pub candidate_policy: CandidatePolicy,

    /// Letters tried for insertions and substitutions.
    pub alphabet: Alphabet,

    /// Costs used when reporting the edit distance to each suggestion.
    pub costs: EditCosts,

    /// Worker threads for batch correction.
    pub threads: usize,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            max_suggestions: 5,
            allow_switches: false,
            candidate_policy: CandidatePolicy::Intersection,
            alphabet: Alphabet::lowercase(),
            costs: EditCosts::default(),
            threads: num_cpus::get(),
        }
    }
}

impl CorrectorConfig {
    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: CorrectorConfig = serde_json::from_str(&content)?;
        config.validate()?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check the settings that the types alone cannot enforce.
    pub fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(AutocorrectError::invalid_config(
                "threads must be at least 1",
            ));
        }
        if self.alphabet.is_empty() {
            return Err(AutocorrectError::invalid_config(
                "alphabet must contain at least one letter",
            ));
        }
        Ok(())
    }

    /// The subset of settings used by the suggestion engine.
    pub fn suggestion_config(&self) -> SuggestionConfig {
        SuggestionConfig {
            max_suggestions: self.max_suggestions,
            allow_switches: self.allow_switches,
            candidate_policy: self.candidate_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = CorrectorConfig::default();
        assert_eq!(config.max_suggestions, 5);
        assert!(!config.allow_switches);
        assert_eq!(config.candidate_policy, CandidatePolicy::Intersection);
        assert_eq!(config.costs, EditCosts::new(1, 1, 2));
        assert!(config.threads >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"{{"max_suggestions": 3, "candidate_policy": "union", "costs": {{"insert": 2, "delete": 2, "replace": 3}}}}"#
        )
        .unwrap();
        temp_file.flush().unwrap();

        let config = CorrectorConfig::load_from_file(temp_file.path()).unwrap();
        assert_eq!(config.max_suggestions, 3);
        assert_eq!(config.candidate_policy, CandidatePolicy::Union);
        assert_eq!(config.costs, EditCosts::new(2, 2, 3));
        assert_eq!(config.alphabet, Alphabet::lowercase());
    }

    #[test]
    fn test_negative_cost_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"{{"costs": {{"insert": -1, "delete": 1, "replace": 2}}}}"#
        )
        .unwrap();
        temp_file.flush().unwrap();

        let result = CorrectorConfig::load_from_file(temp_file.path());
        assert!(matches!(result, Err(AutocorrectError::Json(_))));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let config = CorrectorConfig {
            threads: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AutocorrectError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_suggestion_config() {
        let config = CorrectorConfig {
            max_suggestions: 7,
            allow_switches: true,
            ..Default::default()
        };
        let suggestion = config.suggestion_config();
        assert_eq!(suggestion.max_suggestions, 7);
        assert!(suggestion.allow_switches);
    }
}
