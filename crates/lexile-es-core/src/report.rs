//! Analysis results, their text rendering, and persistence.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Field
//! names serialize in Spanish so the JSON is the public result shape:
//!
//! ```json
//! { "lexile": 640, "rango": "590L - 690L", "grado": "5º-6º Básico",
//!   "nivel": "Intermedio", "edad": "10-11 años", "confianza": "Baja",
//!   "estadisticas": { "palabras": 42, "oraciones": 3, ... } }
//! ```
//!
//! or `{ "error": "Texto vacío" }` when the text could not be scored.

use std::fmt::Write as _;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::confidence::Confidence;
use crate::error::{AnalysisResult, ReportError};
use crate::grade::GradeBand;
use crate::metrics::DocumentMetrics;

/// Width of the horizontal rules in rendered reports.
pub const RULE_WIDTH: usize = 70;

/// Half-width of the reported score range.
const RANGE_HALF_WIDTH: f64 = 50.0;

/// Text statistics, rounded for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Statistics {
    /// Total words.
    #[serde(rename = "palabras")]
    pub words: usize,
    /// Total sentences.
    #[serde(rename = "oraciones")]
    pub sentences: usize,
    /// Mean words per sentence (1 decimal).
    #[serde(rename = "palabras_por_oracion")]
    pub words_per_sentence: f64,
    /// Mean syllables per word (2 decimals).
    #[serde(rename = "silabas_por_palabra")]
    pub syllables_per_word: f64,
    /// Rare-word percentage (1 decimal).
    #[serde(rename = "palabras_raras_pct")]
    pub rare_words_pct: f64,
    /// Complex-word percentage (1 decimal).
    #[serde(rename = "palabras_complejas_pct")]
    pub complex_words_pct: f64,
    /// Lexical diversity (3 decimals).
    #[serde(rename = "diversidad_lexica")]
    pub lexical_diversity: f64,
}

impl From<&DocumentMetrics> for Statistics {
    fn from(m: &DocumentMetrics) -> Self {
        Self {
            words: m.word_count,
            sentences: m.sentence_count,
            words_per_sentence: round_to(m.mean_sentence_length, 1),
            syllables_per_word: round_to(m.mean_syllables_per_word, 2),
            rare_words_pct: round_to(m.rare_word_percentage, 1),
            complex_words_pct: round_to(m.complex_word_proportion * 100.0, 1),
            lexical_diversity: round_to(m.lexical_diversity, 3),
        }
    }
}

impl Statistics {
    /// `(key, value)` pairs in serialization order, values formatted.
    fn entries(&self) -> [(&'static str, String); 7] {
        [
            ("palabras", self.words.to_string()),
            ("oraciones", self.sentences.to_string()),
            ("palabras_por_oracion", decimal(self.words_per_sentence)),
            ("silabas_por_palabra", decimal(self.syllables_per_word)),
            ("palabras_raras_pct", decimal(self.rare_words_pct)),
            ("palabras_complejas_pct", decimal(self.complex_words_pct)),
            ("diversidad_lexica", decimal(self.lexical_diversity)),
        ]
    }
}

/// A successful analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LexileReport {
    /// Rounded score.
    pub lexile: i64,
    /// `"<lexile-50>L - <lexile+50>L"`, from the unrounded score.
    #[serde(rename = "rango")]
    pub range: String,
    /// School grade.
    #[serde(rename = "grado")]
    pub grade: String,
    /// Descriptive level.
    #[serde(rename = "nivel")]
    pub level: String,
    /// Recommended reader age.
    #[serde(rename = "edad")]
    pub age: String,
    /// Confidence in the score.
    #[serde(rename = "confianza")]
    pub confidence: Confidence,
    /// Rounded text statistics.
    #[serde(rename = "estadisticas")]
    pub statistics: Statistics,
}

impl LexileReport {
    /// Assemble a report from an unrounded score and its inputs.
    pub fn new(
        score: f64,
        band: &GradeBand,
        confidence: Confidence,
        metrics: &DocumentMetrics,
    ) -> Self {
        Self {
            lexile: score.round_ties_even() as i64,
            range: format!(
                "{}L - {}L",
                (score - RANGE_HALF_WIDTH).round_ties_even() as i64,
                (score + RANGE_HALF_WIDTH).round_ties_even() as i64
            ),
            grade: band.grade.to_string(),
            level: band.level.to_string(),
            age: band.age.to_string(),
            confidence,
            statistics: Statistics::from(metrics),
        }
    }
}

/// Result of analyzing one text: a report, or the reason there is none.
///
/// Serialized untagged, so JSON consumers see either the report fields or a
/// single `error` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    /// The text was scored.
    Report(LexileReport),
    /// The text could not be scored.
    Error {
        /// Human-readable reason, in Spanish.
        error: String,
    },
}

impl AnalysisOutcome {
    /// The report, if the analysis succeeded.
    pub const fn report(&self) -> Option<&LexileReport> {
        match self {
            Self::Report(report) => Some(report),
            Self::Error { .. } => None,
        }
    }

    /// The error message, if the analysis failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Report(_) => None,
            Self::Error { error } => Some(error),
        }
    }

    /// Whether the analysis failed.
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl From<AnalysisResult<LexileReport>> for AnalysisOutcome {
    fn from(result: AnalysisResult<LexileReport>) -> Self {
        match result {
            Ok(report) => Self::Report(report),
            Err(e) => Self::Error {
                error: e.to_string(),
            },
        }
    }
}

/// Render an outcome as the multi-section text report, or a single error line.
pub fn render_outcome(outcome: &AnalysisOutcome) -> String {
    match outcome {
        AnalysisOutcome::Report(report) => render_report(report),
        AnalysisOutcome::Error { error } => format!("❌ Error: {error}\n"),
    }
}

/// Render a report for the terminal.
pub fn render_report(report: &LexileReport) -> String {
    let stats = &report.statistics;
    let mut out = render_header(report);
    out.push_str("📈 Estadísticas del texto:\n");
    let _ = writeln!(out, "   • Palabras totales: {}", stats.words);
    let _ = writeln!(out, "   • Oraciones: {}", stats.sentences);
    let _ = writeln!(out, "   • Palabras por oración: {}", decimal(stats.words_per_sentence));
    let _ = writeln!(out, "   • Sílabas por palabra: {}", decimal(stats.syllables_per_word));
    let _ = writeln!(out, "   • Palabras raras: {}%", decimal(stats.rare_words_pct));
    let _ = writeln!(out, "   • Palabras complejas: {}%", decimal(stats.complex_words_pct));
    let _ = writeln!(out, "   • Diversidad léxica: {}", decimal(stats.lexical_diversity));
    out.push('\n');
    out.push_str(&rule('='));
    out
}

/// Render a report in the persisted file format.
///
/// Same header sections as [`render_report`]; statistics are listed by their
/// title-cased keys and there is no closing rule.
pub fn render_saved_report(report: &LexileReport) -> String {
    let mut out = render_header(report);
    out.push_str("📈 Estadísticas del texto:\n");
    for (key, value) in report.statistics.entries() {
        let _ = writeln!(out, "   • {}: {value}", title_case_key(key));
    }
    out
}

/// Write an outcome to `path` in the persisted report format.
///
/// # Errors
///
/// - [`ReportError::FailedAnalysis`] if `outcome` is an error.
/// - [`ReportError::Io`] if the file cannot be written.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn save_report(outcome: &AnalysisOutcome, path: &Path) -> Result<(), ReportError> {
    let report = match outcome {
        AnalysisOutcome::Report(report) => report,
        AnalysisOutcome::Error { error } => {
            return Err(ReportError::FailedAnalysis(error.clone()));
        }
    };

    std::fs::write(path, render_saved_report(report)).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("report saved");
    Ok(())
}

fn render_header(report: &LexileReport) -> String {
    let mut out = rule('=');
    out.push_str("   ANÁLISIS DE NIVEL LEXILE\n");
    out.push_str(&rule('='));
    out.push('\n');
    let _ = writeln!(out, "📊 Nivel Lexile: {}L", report.lexile);
    let _ = writeln!(out, "   Rango: {}", report.range);
    out.push('\n');
    let _ = writeln!(out, "🎓 Nivel Educativo: {}", report.grade);
    let _ = writeln!(out, "   Clasificación: {}", report.level);
    let _ = writeln!(out, "   Edad recomendada: {}", report.age);
    out.push('\n');
    let _ = writeln!(out, "✓ Confianza del análisis: {}", report.confidence);
    out.push('\n');
    out
}

/// A horizontal rule of [`RULE_WIDTH`] characters, newline-terminated.
pub fn rule(ch: char) -> String {
    let mut line: String = std::iter::repeat_n(ch, RULE_WIDTH).collect();
    line.push('\n');
    line
}

/// `palabras_por_oracion` → `Palabras Por Oracion`.
fn title_case_key(key: &str) -> String {
    key.split('_')
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Round `value` to `decimals` places, halves to even.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Shortest decimal that reads back as `value`, always with a fraction
/// digit: `2.0`, `0.875`, `62.5`.
fn decimal(value: f64) -> String {
    format!("{value:?}")
}
