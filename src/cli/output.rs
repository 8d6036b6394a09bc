//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{AutocorrectArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::corrector::CorrectionResult;
use crate::spelling::levenshtein::EditScript;

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResults {
    pub corrections: Vec<CorrectionResult>,
    pub duration_ms: u64,
}

/// Result structure for the distance command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub source: String,
    pub target: String,
    pub cost: u64,
    pub script: EditScript,
}

/// Corpus statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusStats {
    pub corpus: String,
    pub total_tokens: usize,
    pub distinct_words: usize,
    pub most_common: Vec<WordStats>,
}

/// Frequency statistics for one word.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordStats {
    pub word: String,
    pub count: u64,
    pub probability: f64,
}

/// Any result the CLI can print.
pub trait Render: Serialize {
    /// Human-readable rendering.
    fn render_human(&self, args: &AutocorrectArgs) -> String;
}

/// Output a result in the specified format.
pub fn output_result<T: Render>(result: &T, args: &AutocorrectArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", result.render_human(args));
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &AutocorrectArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl Render for SuggestResults {
    fn render_human(&self, args: &AutocorrectArgs) -> String {
        let mut out = String::new();

        for correction in &self.corrections {
            if !correction.has_suggestions() {
                out.push_str(&format!(
                    "No suggestions found for '{}'.\n",
                    correction.original
                ));
                continue;
            }

            out.push_str(&format!(
                "\nInstead of {}, did you mean:\n",
                correction.original
            ));
            for suggestion in &correction.suggestions {
                out.push_str(&format!(
                    "{}, with a probability of: {}\n",
                    suggestion.word, suggestion.probability
                ));
            }

            out.push_str("\nLeast costly operations in ascending order:\n\n");
            for cost in &correction.costs {
                out.push_str(&format!("{}\nCost: {}\n", cost.word, cost.cost));
                out.push_str(&format!("Steps taken: {}\n\n", cost.script));
            }
        }

        if args.verbosity() > 1 {
            out.push_str(&format!("Completed in {} ms\n", self.duration_ms));
        }
        out
    }
}

impl Render for DistanceResult {
    fn render_human(&self, args: &AutocorrectArgs) -> String {
        let mut out = format!(
            "sequence 1: {}\nsequence 2: {}\nMinimum edit distance between {} and {}: {}\n",
            self.source, self.target, self.source, self.target, self.cost
        );
        if args.verbosity() > 1 {
            out.push_str(&format!("Steps taken: {}\n", self.script));
        }
        out
    }
}

impl Render for CorpusStats {
    fn render_human(&self, _args: &AutocorrectArgs) -> String {
        let mut out = format!(
            "Corpus: {}\nTotal tokens: {}\nDistinct words: {}\n",
            self.corpus, self.total_tokens, self.distinct_words
        );
        if !self.most_common.is_empty() {
            out.push_str("\nMost common words:\n");
            for (rank, stats) in self.most_common.iter().enumerate() {
                out.push_str(&format!(
                    "{:>4}. {:<20} {:>8}  {:.6}\n",
                    rank + 1,
                    stats.word,
                    stats.count,
                    stats.probability
                ));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::levenshtein::{EditCosts, edit_distance};
    use clap::Parser;

    fn args() -> AutocorrectArgs {
        AutocorrectArgs::try_parse_from(["autocorrect", "distance", "a", "b"]).unwrap()
    }

    #[test]
    fn test_distance_human_output() {
        let distance = edit_distance("kitten", "sitting", EditCosts::default());
        let result = DistanceResult {
            source: "kitten".to_string(),
            target: "sitting".to_string(),
            cost: distance.cost,
            script: distance.script,
        };

        let text = result.render_human(&args());
        assert!(text.contains("Minimum edit distance between kitten and sitting: 5"));
        assert!(!text.contains("Steps taken"));
    }

    #[test]
    fn test_suggest_human_output_without_suggestions() {
        let results = SuggestResults {
            corrections: vec![CorrectionResult {
                original: "zzz".to_string(),
                suggestions: Vec::new(),
                costs: Vec::new(),
            }],
            duration_ms: 0,
        };

        let text = results.render_human(&args());
        assert_eq!(text, "No suggestions found for 'zzz'.\n");
    }

    #[test]
    fn test_stats_human_output() {
        let stats = CorpusStats {
            corpus: "corpus.txt".to_string(),
            total_tokens: 9,
            distinct_words: 6,
            most_common: vec![WordStats {
                word: "the".to_string(),
                count: 3,
                probability: 0.5,
            }],
        };

        let text = stats.render_human(&args());
        assert!(text.contains("Distinct words: 6"));
        assert!(text.contains("the"));
        assert!(text.contains("0.500000"));
    }
}
