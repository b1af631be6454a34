//! Analysis orchestrator.
//!
//! [`Analyzer`] runs the whole pipeline: segmentation, metric extraction,
//! scoring, grade classification and confidence estimation. It owns an
//! immutable [`FrequencyTable`] and a [`Segmenter`], and is `Send + Sync`, so
//! one analyzer can serve concurrent analyses.

use std::fmt;

use crate::confidence::Confidence;
use crate::error::{AnalysisError, AnalysisResult};
use crate::frequency::FrequencyTable;
use crate::grade;
use crate::metrics::{self, DocumentMetrics};
use crate::report::{AnalysisOutcome, LexileReport};
use crate::score::{self, ScoreBreakdown, ScoreInputs};
use crate::segment::{RuleSegmenter, Segmenter};

/// Scores Spanish text.
pub struct Analyzer {
    table: FrequencyTable,
    segmenter: Box<dyn Segmenter>,
}

impl Analyzer {
    /// Analyzer with the built-in Spanish table and rule-based segmenter.
    pub fn new() -> Self {
        Self::with_table(FrequencyTable::spanish())
    }

    /// Analyzer with a custom frequency table.
    pub fn with_table(table: FrequencyTable) -> Self {
        Self {
            table,
            segmenter: Box::new(RuleSegmenter::new()),
        }
    }

    /// Replace the segmenter.
    #[must_use]
    pub fn with_segmenter(mut self, segmenter: impl Segmenter + 'static) -> Self {
        self.segmenter = Box::new(segmenter);
        self
    }

    /// The frequency table in use.
    pub const fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// Analyze `text`. Failures become [`AnalysisOutcome::Error`]; this never
    /// panics on any input.
    pub fn analyze(&self, text: &str) -> AnalysisOutcome {
        let outcome = AnalysisOutcome::from(self.try_analyze(text));
        if let Some(error) = outcome.error() {
            tracing::warn!(error, "analysis failed");
        }
        outcome
    }

    /// Analyze `text`, returning the typed error on failure.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::EmptyText`] if `text` is blank.
    /// - [`AnalysisError::NoSentences`] if segmentation finds no sentences.
    /// - [`AnalysisError::NoWords`] if no sentence contains a word.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn try_analyze(&self, text: &str) -> AnalysisResult<LexileReport> {
        let (metrics, parts) = self.measure(text)?;
        let score = parts.score();
        let band = grade::classify(score);
        let confidence = Confidence::estimate(metrics.word_count, metrics.sentence_count);

        tracing::info!(
            score,
            grade = band.grade,
            confidence = confidence.label(),
            "analysis complete"
        );

        Ok(LexileReport::new(score, band, confidence, &metrics))
    }

    /// Metrics and the unclamped score breakdown for `text`.
    ///
    /// # Errors
    ///
    /// Same as [`try_analyze`](Self::try_analyze).
    pub fn measure(&self, text: &str) -> AnalysisResult<(DocumentMetrics, ScoreBreakdown)> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyText);
        }
        let sentences = self.segmenter.segment(text);
        let metrics = metrics::extract_metrics(&sentences, &self.table)?;
        let parts = score::breakdown(&ScoreInputs::from(&metrics));
        tracing::debug!(total = parts.total(), "score breakdown");
        Ok((metrics, parts))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("table_len", &self.table.len())
            .finish_non_exhaustive()
    }
}
