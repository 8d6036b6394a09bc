//! End-to-end scenarios for suggestions and edit distances.

use std::io::Write;
use std::sync::Arc;

use autocorrect::config::CorrectorConfig;
use autocorrect::error::Result;
use autocorrect::spelling::*;
use tempfile::NamedTempFile;

const CORPUS: &str = "the cat sat on the mat the cat ran";
const COSTS: EditCosts = EditCosts::new(1, 1, 2);

#[test]
fn test_corpus_model_scenario() {
    let (words, vocabulary) = build_vocabulary(CORPUS);
    let frequencies = build_frequency_table(&words);
    let probabilities = build_probability_table(&frequencies);

    assert_eq!(vocabulary.len(), 6);
    assert_eq!(frequencies.count("the"), 3);
    assert_eq!(frequencies.count("cat"), 2);
    for word in ["sat", "on", "mat", "ran"] {
        assert_eq!(frequencies.count(word), 1);
        assert!((probabilities.probability(word) - 1.0 / 6.0).abs() < 1e-9);
    }
    assert!((probabilities.probability("the") - 0.5).abs() < 1e-9);
    assert!((probabilities.probability("cat") - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_suggest_cet() {
    let (words, vocabulary) = build_vocabulary(CORPUS);
    let probabilities = build_probability_table(&build_frequency_table(&words));

    let suggestions = suggest("cet", &vocabulary, &probabilities, 5);
    let cat = suggestions
        .iter()
        .find(|s| s.word == "cat")
        .expect("cat should be suggested");
    assert!((cat.probability - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_suggestions_bounded_and_known() {
    let dictionary = Arc::new(SpellingDictionary::from_corpus(CORPUS));
    for n in [0, 1, 2, 5] {
        for word in ["cet", "xat", "the", "tha", "mta", "o", ""] {
            let suggestions = suggest(
                word,
                dictionary.vocabulary(),
                dictionary.probabilities(),
                n,
            );
            assert!(suggestions.len() <= n);
            for suggestion in &suggestions {
                assert!(dictionary.contains(&suggestion.word) || suggestion.word == word);
            }
        }
    }
}

#[test]
fn test_edit_distance_scenarios() {
    assert_eq!(edit_distance("ACGTACGTACGT", "ACGTAAGTACGG", COSTS).cost, 4);
    assert_eq!(edit_distance("kitten", "sitting", COSTS).cost, 5);

    let empty_source = edit_distance("", "sitting", COSTS);
    assert_eq!(empty_source.cost, 7);
    assert!(empty_source.script.iter().all(|op| op.label() == "insert"));

    let empty_target = edit_distance("kitten", "", COSTS);
    assert_eq!(empty_target.cost, 6);
    assert!(empty_target.script.iter().all(|op| op.label() == "delete"));
}

#[test]
fn test_identity_and_symmetry() {
    let words = ["", "a", "cat", "banana", "ACGTACGT", "straße"];
    for a in words {
        let same = edit_distance(a, a, COSTS);
        assert_eq!(same.cost, 0);
        assert_eq!(same.script.len(), a.chars().count());
        assert!(same.script.iter().all(EditOperation::is_noop));

        for b in words {
            let forward = edit_distance(a, b, COSTS);
            let backward = edit_distance(b, a, COSTS);
            assert_eq!(forward.cost, backward.cost, "{a:?} <-> {b:?}");
            assert_eq!(forward.script.cost(&COSTS), forward.cost);
            assert_eq!(forward.script.apply_str(a, b).as_deref(), Some(b));
        }
    }
}

#[test]
fn test_mutation_counts() {
    let generator = EditGenerator::default();
    for word in ["", "a", "aa", "moon", "bookkeeper"] {
        let len = word.chars().count();
        assert_eq!(generator.splits(word).len(), len + 1);
        assert_eq!(generator.deletions(word).len(), len);
        assert_eq!(generator.insertions(word).len(), (len + 1) * 26);
        assert!(!generator.substitutions(word).contains(&word.to_string()));
    }
}

#[test]
fn test_corrector_from_files() -> Result<()> {
    let mut corpus = NamedTempFile::new()?;
    writeln!(corpus, "The quick brown fox jumps over the lazy dog.")?;
    writeln!(corpus, "The dog was lazy, the fox was quick.")?;
    corpus.flush()?;

    let mut config_file = NamedTempFile::new()?;
    write!(config_file, r#"{{"max_suggestions": 2, "threads": 2}}"#)?;
    config_file.flush()?;

    let dictionary = Arc::new(SpellingDictionary::load_from_file(corpus.path())?);
    let config = CorrectorConfig::load_from_file(config_file.path())?;
    let corrector = SpellingCorrector::with_config(dictionary, config)?;

    let results = corrector.correct_batch(&["quik", "dgo", "lazzy", "fx"])?;
    assert_eq!(results[0].best_suggestion().map(|s| s.word.as_str()), Some("quick"));
    assert!(results[1].suggestions.is_empty());
    assert_eq!(results[2].best_suggestion().map(|s| s.word.as_str()), Some("lazy"));
    assert_eq!(results[3].best_suggestion().map(|s| s.word.as_str()), Some("fox"));

    for result in &results {
        assert!(result.suggestions.len() <= 2);
        assert_eq!(result.costs.len(), result.suggestions.len());
    }

    Ok(())
}
