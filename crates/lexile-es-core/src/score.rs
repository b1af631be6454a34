//! Lexile-style score calculation.
//!
//! The score is a base of [`BASE_SCORE`] plus six additive components, each
//! driven by one metric, clamped to [`MIN_SCORE`]..=[`MAX_SCORE`]:
//!
//! | component | formula |
//! |---|---|
//! | sentence length | piecewise in mean length `L` (see [`sentence_length_component`]) |
//! | frequency | `max(0, (mean_rank - 1.5) * 200)` |
//! | rare words | `rare_pct * 2` if `L > 8`, else `rare_pct * 0.5` |
//! | syllables | `max(0, (syllables_per_word - 1.8) * 150)` |
//! | complex words | `complex_proportion * 100` |
//! | variability | `sentence_length_std_dev * 8` |
//!
//! The coefficients are fixed empirical constants. Every component is
//! monotonically non-decreasing in its metric.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::metrics::DocumentMetrics;

/// Lowest possible score.
pub const MIN_SCORE: f64 = 50.0;

/// Highest possible score.
pub const MAX_SCORE: f64 = 1600.0;

/// Starting point every component is added to.
pub const BASE_SCORE: f64 = 100.0;

/// Mean sentence length above which rare words weigh fully.
const LONG_SENTENCE_THRESHOLD: f64 = 8.0;

/// The six metrics the score is built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreInputs {
    /// Mean words per sentence.
    pub mean_sentence_length: f64,
    /// Population standard deviation of words per sentence.
    pub sentence_length_std_dev: f64,
    /// Mean lexical frequency rank.
    pub mean_frequency_rank: f64,
    /// Mean syllables per word.
    pub mean_syllables_per_word: f64,
    /// Proportion (0–1) of words with three or more syllables.
    pub complex_word_proportion: f64,
    /// Percentage (0–100) of words missing from the frequency table.
    pub rare_word_percentage: f64,
}

impl From<&DocumentMetrics> for ScoreInputs {
    fn from(m: &DocumentMetrics) -> Self {
        Self {
            mean_sentence_length: m.mean_sentence_length,
            sentence_length_std_dev: m.sentence_length_std_dev,
            mean_frequency_rank: m.mean_frequency_rank,
            mean_syllables_per_word: m.mean_syllables_per_word,
            complex_word_proportion: m.complex_word_proportion,
            rare_word_percentage: m.rare_word_percentage,
        }
    }
}

/// Per-component contributions to a score, before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreBreakdown {
    /// Constant base.
    pub base: f64,
    /// Sentence length component.
    pub sentence_length: f64,
    /// Lexical frequency component.
    pub frequency: f64,
    /// Rare word component.
    pub rare_words: f64,
    /// Syllable density component.
    pub syllables: f64,
    /// Complex word component.
    pub complex_words: f64,
    /// Sentence length variability component.
    pub variability: f64,
}

impl ScoreBreakdown {
    /// Unclamped sum of all components.
    pub fn total(&self) -> f64 {
        self.base
            + self.sentence_length
            + self.frequency
            + self.rare_words
            + self.syllables
            + self.complex_words
            + self.variability
    }

    /// Final score: the total clamped to [`MIN_SCORE`]..=[`MAX_SCORE`].
    pub fn score(&self) -> f64 {
        self.total().clamp(MIN_SCORE, MAX_SCORE)
    }
}

/// Sentence length component for mean sentence length `l`.
///
/// Continuous at every breakpoint: 0 at 5, 400 at 10, 900 at 20. Each
/// segment rounds its product before the add; no fused multiply-add.
#[allow(clippy::suboptimal_flops)]
pub fn sentence_length_component(l: f64) -> f64 {
    if l <= 5.0 {
        0.0
    } else if l <= 10.0 {
        (l - 5.0) * 80.0
    } else if l <= 20.0 {
        400.0 + (l - 10.0) * 50.0
    } else {
        900.0 + (l - 20.0) * 30.0
    }
}

/// Compute every component for `inputs`.
pub fn breakdown(inputs: &ScoreInputs) -> ScoreBreakdown {
    let rare_weight = if inputs.mean_sentence_length > LONG_SENTENCE_THRESHOLD {
        2.0
    } else {
        0.5
    };

    ScoreBreakdown {
        base: BASE_SCORE,
        sentence_length: sentence_length_component(inputs.mean_sentence_length),
        frequency: ((inputs.mean_frequency_rank - 1.5) * 200.0).max(0.0),
        rare_words: inputs.rare_word_percentage * rare_weight,
        syllables: ((inputs.mean_syllables_per_word - 1.8) * 150.0).max(0.0),
        complex_words: inputs.complex_word_proportion * 100.0,
        variability: inputs.sentence_length_std_dev * 8.0,
    }
}

/// Calculate the clamped score for `inputs`.
pub fn calculate_score(inputs: &ScoreInputs) -> f64 {
    let parts = breakdown(inputs);
    tracing::debug!(
        sentence_length = parts.sentence_length,
        frequency = parts.frequency,
        rare_words = parts.rare_words,
        syllables = parts.syllables,
        complex_words = parts.complex_words,
        variability = parts.variability,
        total = parts.total(),
        "score breakdown"
    );
    parts.score()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> ScoreInputs {
        ScoreInputs {
            mean_sentence_length: 0.0,
            sentence_length_std_dev: 0.0,
            mean_frequency_rank: 0.0,
            mean_syllables_per_word: 0.0,
            complex_word_proportion: 0.0,
            rare_word_percentage: 0.0,
        }
    }

    #[test]
    fn sentence_length_breakpoints() {
        assert_eq!(sentence_length_component(3.0), 0.0);
        assert_eq!(sentence_length_component(5.0), 0.0);
        assert_eq!(sentence_length_component(7.5), 200.0);
        assert_eq!(sentence_length_component(10.0), 400.0);
        assert_eq!(sentence_length_component(15.0), 650.0);
        assert_eq!(sentence_length_component(20.0), 900.0);
        assert_eq!(sentence_length_component(25.0), 1050.0);
    }

    #[test]
    #[allow(clippy::suboptimal_flops)]
    fn sentence_length_rounds_product_then_adds() {
        for l in [10.0 + 1.0 / 3.0, 12.1, 17.7, 19.99, 20.0 + 2.0 / 3.0, 23.3, 41.9] {
            let product_then_add = if l <= 20.0 {
                let product = (l - 10.0) * 50.0;
                400.0 + product
            } else {
                let product = (l - 20.0) * 30.0;
                900.0 + product
            };
            assert_eq!(
                sentence_length_component(l).to_bits(),
                product_then_add.to_bits(),
                "l = {l}"
            );
        }
    }

    #[test]
    fn zero_metrics_score_base() {
        let parts = breakdown(&inputs());
        assert_eq!(parts.total(), BASE_SCORE);
        assert_eq!(calculate_score(&inputs()), BASE_SCORE);
    }

    #[test]
    fn frequency_component_floors_at_zero() {
        let i = ScoreInputs {
            mean_frequency_rank: 1.0,
            ..inputs()
        };
        assert_eq!(breakdown(&i).frequency, 0.0);

        let i = ScoreInputs {
            mean_frequency_rank: 3.5,
            ..inputs()
        };
        assert_eq!(breakdown(&i).frequency, 400.0);
    }

    #[test]
    fn rare_words_weigh_more_in_long_sentences() {
        let short = ScoreInputs {
            mean_sentence_length: 8.0,
            rare_word_percentage: 10.0,
            ..inputs()
        };
        let long = ScoreInputs {
            mean_sentence_length: 8.5,
            ..short
        };
        assert_eq!(breakdown(&short).rare_words, 5.0);
        assert_eq!(breakdown(&long).rare_words, 20.0);
    }

    #[test]
    fn syllable_complex_and_variability_components() {
        let i = ScoreInputs {
            mean_syllables_per_word: 2.2,
            complex_word_proportion: 0.25,
            sentence_length_std_dev: 1.5,
            ..inputs()
        };
        let parts = breakdown(&i);
        assert!((parts.syllables - 60.0).abs() < 1e-9);
        assert_eq!(parts.complex_words, 25.0);
        assert_eq!(parts.variability, 12.0);

        let low = ScoreInputs {
            mean_syllables_per_word: 1.5,
            ..inputs()
        };
        assert_eq!(breakdown(&low).syllables, 0.0);
    }

    #[test]
    fn score_is_clamped() {
        let huge = ScoreInputs {
            mean_sentence_length: 60.0,
            mean_frequency_rank: 2000.0,
            rare_word_percentage: 100.0,
            ..inputs()
        };
        assert_eq!(calculate_score(&huge), MAX_SCORE);
        assert!(breakdown(&huge).total() > MAX_SCORE);
    }

    #[test]
    fn from_metrics_copies_fields() {
        let m = DocumentMetrics {
            word_count: 10,
            sentence_count: 2,
            mean_sentence_length: 5.0,
            sentence_length_std_dev: 1.0,
            mean_frequency_rank: 2.0,
            rare_word_percentage: 10.0,
            mean_syllables_per_word: 1.9,
            complex_word_proportion: 0.1,
            lexical_diversity: 0.8,
        };
        let i = ScoreInputs::from(&m);
        assert_eq!(i.mean_sentence_length, 5.0);
        assert_eq!(i.sentence_length_std_dev, 1.0);
        assert_eq!(i.mean_frequency_rank, 2.0);
        assert_eq!(i.rare_word_percentage, 10.0);
        assert_eq!(i.mean_syllables_per_word, 1.9);
        assert_eq!(i.complex_word_proportion, 0.1);
    }
}
