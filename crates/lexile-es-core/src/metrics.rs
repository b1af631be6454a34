//! Document-level linguistic metrics.
//!
//! [`extract_metrics`] turns segmented sentences into the aggregate numbers
//! the score is built from: sentence length statistics, mean frequency rank,
//! rare-word share, syllable density, complex-word share and lexical
//! diversity.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::frequency::{DEFAULT_RANK, FrequencyTable};
use crate::segment::{Sentence, Token};
use crate::syllables;

/// Aggregate metrics for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentMetrics {
    /// Number of word tokens.
    pub word_count: usize,
    /// Number of sentences.
    pub sentence_count: usize,
    /// Mean words per sentence.
    pub mean_sentence_length: f64,
    /// Population standard deviation of words per sentence.
    pub sentence_length_std_dev: f64,
    /// Mean frequency rank over all words (rare words count as [`DEFAULT_RANK`]).
    pub mean_frequency_rank: f64,
    /// Percentage (0–100) of words missing from the frequency table.
    pub rare_word_percentage: f64,
    /// Mean syllables per word.
    pub mean_syllables_per_word: f64,
    /// Proportion (0–1) of words with three or more syllables.
    pub complex_word_proportion: f64,
    /// Distinct lemmas divided by total words (0–1).
    pub lexical_diversity: f64,
}

/// Compute [`DocumentMetrics`] from segmented sentences.
///
/// # Errors
///
/// - [`AnalysisError::NoSentences`] if `sentences` is empty.
/// - [`AnalysisError::NoWords`] if no token is a word.
#[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
pub fn extract_metrics(
    sentences: &[Sentence],
    table: &FrequencyTable,
) -> AnalysisResult<DocumentMetrics> {
    if sentences.is_empty() {
        return Err(AnalysisError::NoSentences);
    }

    let words: Vec<&Token> = sentences.iter().flat_map(Sentence::words).collect();
    if words.is_empty() {
        return Err(AnalysisError::NoWords);
    }
    let word_count = words.len();
    let total = word_count as f64;

    let lengths: Vec<usize> = sentences.iter().map(Sentence::word_count).collect();
    let (mean_sentence_length, sentence_length_std_dev) = mean_and_std_dev(&lengths);

    let mut rare_words = 0usize;
    let mut rank_sum = 0u64;
    for word in &words {
        let rank = table.rank(&word.lemma, &word.surface).unwrap_or_else(|| {
            rare_words += 1;
            DEFAULT_RANK
        });
        rank_sum += u64::from(rank);
    }

    let syllable_counts: Vec<usize> = words
        .iter()
        .map(|w| syllables::count_syllables(&w.surface))
        .collect();
    let total_syllables: usize = syllable_counts.iter().sum();
    let complex_words = syllable_counts
        .iter()
        .filter(|&&n| n >= syllables::COMPLEX_WORD_SYLLABLES)
        .count();

    let unique_lemmas: HashSet<String> = words.iter().map(|w| w.lemma.to_lowercase()).collect();

    let metrics = DocumentMetrics {
        word_count,
        sentence_count: sentences.len(),
        mean_sentence_length,
        sentence_length_std_dev,
        mean_frequency_rank: rank_sum as f64 / total,
        rare_word_percentage: rare_words as f64 / total * 100.0,
        mean_syllables_per_word: total_syllables as f64 / total,
        complex_word_proportion: complex_words as f64 / total,
        lexical_diversity: unique_lemmas.len() as f64 / total,
    };

    tracing::debug!(
        words = metrics.word_count,
        sentences = metrics.sentence_count,
        mean_sentence_length = metrics.mean_sentence_length,
        mean_frequency_rank = metrics.mean_frequency_rank,
        rare_pct = metrics.rare_word_percentage,
        "extracted metrics"
    );

    Ok(metrics)
}

/// Mean and population standard deviation. Caller guarantees non-empty input.
fn mean_and_std_dev(values: &[usize]) -> (f64, f64) {
    let count = values.len() as f64;
    let mean = values.iter().sum::<usize>() as f64 / count;
    let variance = values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / count;
    (mean, variance.sqrt())
}
