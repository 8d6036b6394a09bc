//! Command implementations for the autocorrect CLI.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::*;

/// Execute a CLI command.
pub fn execute_command(args: AutocorrectArgs) -> Result<()> {
    match &args.command {
        Command::Suggest(suggest_args) => suggest_words(suggest_args, &args),
        Command::Distance(distance_args) => compute_distance(distance_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Suggest corrections for each word and cost every suggestion.
fn suggest_words(args: &SuggestArgs, cli_args: &AutocorrectArgs) -> Result<()> {
    let config = args.corrector_config()?;
    debug!("Corrector configuration: {config:?}");

    let dictionary = Arc::new(SpellingDictionary::load_from_file(&args.corpus)?);
    let corrector = SpellingCorrector::with_config(dictionary, config)?;

    // The corpus is case-folded, so queries are too.
    let words: Vec<String> = args.words.iter().map(|w| w.to_lowercase()).collect();

    let start_time = Instant::now();
    let corrections = if words.len() > 1 {
        corrector.correct_batch(&words)?
    } else {
        words.iter().map(|w| corrector.correct(w)).collect()
    };
    let duration = start_time.elapsed();

    info!(
        "Corrected {} word(s) in {} ms",
        corrections.len(),
        duration.as_millis()
    );

    output_result(
        &SuggestResults {
            corrections,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Compute the edit distance between two sequences.
fn compute_distance(args: &DistanceArgs, cli_args: &AutocorrectArgs) -> Result<()> {
    let costs = args.costs.resolve(EditCosts::default())?;
    let distance = edit_distance(&args.source, &args.target, costs);

    output_result(
        &DistanceResult {
            source: args.source.clone(),
            target: args.target.clone(),
            cost: distance.cost,
            script: distance.script,
        },
        cli_args,
    )
}

/// Show token and vocabulary statistics for a corpus.
fn show_stats(args: &StatsArgs, cli_args: &AutocorrectArgs) -> Result<()> {
    let dictionary = SpellingDictionary::load_from_file(&args.corpus)?;

    let most_common = dictionary
        .frequencies()
        .most_common(args.top)
        .into_iter()
        .map(|(word, count)| {
            let probability = dictionary.probability(&word);
            WordStats {
                word,
                count,
                probability,
            }
        })
        .collect();

    output_result(
        &CorpusStats {
            corpus: args.corpus.display().to_string(),
            total_tokens: dictionary.token_count(),
            distinct_words: dictionary.word_count(),
            most_common,
        },
        cli_args,
    )
}
