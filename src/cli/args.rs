//! Command line argument parsing for the autocorrect CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::CorrectorConfig;
use crate::error::Result;
use crate::spelling::alphabet::Alphabet;
use crate::spelling::levenshtein::EditCosts;
use crate::spelling::suggest::CandidatePolicy;

/// Autocorrect - spelling suggestions and minimum edit distance
#[derive(Parser, Debug, Clone)]
#[command(name = "autocorrect")]
#[command(about = "Frequency-ranked spelling suggestions and weighted edit distance")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct AutocorrectArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl AutocorrectArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest corrections for misspelled words
    Suggest(SuggestArgs),

    /// Compute the minimum edit distance between two sequences
    Distance(DistanceArgs),

    /// Show corpus statistics
    Stats(StatsArgs),
}

/// Edit cost overrides. Signed so that negative values reach validation.
#[derive(Args, Debug, Clone, Default)]
pub struct CostArgs {
    /// Cost of inserting one symbol
    #[arg(long, allow_negative_numbers = true)]
    pub insert_cost: Option<i64>,

    /// Cost of deleting one symbol
    #[arg(long, allow_negative_numbers = true)]
    pub delete_cost: Option<i64>,

    /// Cost of replacing one symbol
    #[arg(long, allow_negative_numbers = true)]
    pub replace_cost: Option<i64>,
}

impl CostArgs {
    /// Apply the overrides on top of `base`, rejecting negative costs.
    pub fn resolve(&self, base: EditCosts) -> Result<EditCosts> {
        EditCosts::try_new(
            self.insert_cost.unwrap_or(base.insert as i64),
            self.delete_cost.unwrap_or(base.delete as i64),
            self.replace_cost.unwrap_or(base.replace as i64),
        )
    }
}

/// Arguments for suggesting corrections
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Corpus text file the vocabulary is learned from
    #[arg(short, long, value_name = "CORPUS_FILE", env = "AUTOCORRECT_CORPUS")]
    pub corpus: PathBuf,

    /// Words to correct
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Maximum number of suggestions per word
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Count adjacent-letter swaps as single edits
    #[arg(long)]
    pub allow_switches: bool,

    /// Consider every word within two edits instead of the intersection
    #[arg(long)]
    pub union: bool,

    /// Letters used for insertions and substitutions
    #[arg(long)]
    pub alphabet: Option<String>,

    /// Worker threads when correcting several words
    #[arg(long)]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub costs: CostArgs,
}

impl SuggestArgs {
    /// Merge the configuration file (if any) with command line overrides.
    pub fn corrector_config(&self) -> Result<CorrectorConfig> {
        let mut config = match &self.config {
            Some(path) => CorrectorConfig::load_from_file(path)?,
            None => CorrectorConfig::default(),
        };

        if let Some(limit) = self.limit {
            config.max_suggestions = limit;
        }
        if self.allow_switches {
            config.allow_switches = true;
        }
        if self.union {
            config.candidate_policy = CandidatePolicy::Union;
        }
        if let Some(alphabet) = &self.alphabet {
            config.alphabet = alphabet.parse::<Alphabet>()?;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        config.costs = self.costs.resolve(config.costs)?;

        config.validate()?;
        Ok(config)
    }
}

/// Arguments for computing an edit distance
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// Source sequence
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Target sequence
    #[arg(value_name = "TARGET")]
    pub target: String,

    #[command(flatten)]
    pub costs: CostArgs,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Corpus text file
    #[arg(short, long, value_name = "CORPUS_FILE", env = "AUTOCORRECT_CORPUS")]
    pub corpus: PathBuf,

    /// Number of most frequent words to list
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutocorrectError;

    #[test]
    fn test_suggest_command() {
        let args = AutocorrectArgs::try_parse_from([
            "autocorrect",
            "suggest",
            "--corpus",
            "corpus.txt",
            "cet",
            "dys",
            "-n",
            "3",
            "--union",
        ])
        .unwrap();

        if let Command::Suggest(suggest_args) = args.command {
            assert_eq!(suggest_args.corpus, PathBuf::from("corpus.txt"));
            assert_eq!(suggest_args.words, vec!["cet", "dys"]);
            assert_eq!(suggest_args.limit, Some(3));
            assert!(suggest_args.union);
            assert!(!suggest_args.allow_switches);

            let config = suggest_args.corrector_config().unwrap();
            assert_eq!(config.max_suggestions, 3);
            assert_eq!(config.candidate_policy, CandidatePolicy::Union);
            assert_eq!(config.costs, EditCosts::default());
        } else {
            panic!("Expected Suggest command");
        }
    }

    #[test]
    fn test_distance_command_with_costs() {
        let args = AutocorrectArgs::try_parse_from([
            "autocorrect",
            "distance",
            "ACGT",
            "AGT",
            "--insert-cost",
            "2",
            "--replace-cost",
            "5",
        ])
        .unwrap();

        if let Command::Distance(distance_args) = args.command {
            assert_eq!(distance_args.source, "ACGT");
            assert_eq!(distance_args.target, "AGT");
            let costs = distance_args.costs.resolve(EditCosts::default()).unwrap();
            assert_eq!(costs, EditCosts::new(2, 1, 5));
        } else {
            panic!("Expected Distance command");
        }
    }

    #[test]
    fn test_negative_cost_rejected() {
        let args = AutocorrectArgs::try_parse_from([
            "autocorrect",
            "distance",
            "a",
            "b",
            "--delete-cost",
            "-3",
        ])
        .unwrap();

        if let Command::Distance(distance_args) = args.command {
            let result = distance_args.costs.resolve(EditCosts::default());
            assert!(matches!(result, Err(AutocorrectError::InvalidConfig(_))));
        } else {
            panic!("Expected Distance command");
        }
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        let args = AutocorrectArgs::try_parse_from([
            "autocorrect",
            "suggest",
            "--corpus",
            "corpus.txt",
            "cet",
            "--alphabet",
            "",
        ])
        .unwrap();

        if let Command::Suggest(suggest_args) = args.command {
            assert!(suggest_args.corrector_config().is_err());
        } else {
            panic!("Expected Suggest command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = AutocorrectArgs::try_parse_from(["autocorrect", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args =
            AutocorrectArgs::try_parse_from(["autocorrect", "-vv", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            AutocorrectArgs::try_parse_from(["autocorrect", "--quiet", "distance", "a", "b"])
                .unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = AutocorrectArgs::try_parse_from([
            "autocorrect",
            "--format",
            "json",
            "distance",
            "a",
            "b",
        ])
        .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
