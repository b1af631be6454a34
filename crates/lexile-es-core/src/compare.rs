//! Side-by-side comparison of several texts.

use std::fmt::Write as _;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analyzer::Analyzer;
use crate::report::rule;

/// One scored text in a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComparisonEntry {
    /// Display name (usually the file name).
    #[serde(rename = "nombre")]
    pub name: String,
    /// Rounded score.
    pub lexile: i64,
    /// School grade.
    #[serde(rename = "grado")]
    pub grade: String,
    /// Word count.
    #[serde(rename = "palabras")]
    pub words: usize,
    /// Sentence count.
    #[serde(rename = "oraciones")]
    pub sentences: usize,
}

/// Analyze each `(name, text)` pair and return the scored ones, ascending by
/// lexile.
///
/// Texts that cannot be scored are skipped. Equal scores keep input order.
#[tracing::instrument(skip_all, fields(texts = texts.len()))]
pub fn compare_texts<N, T>(analyzer: &Analyzer, texts: &[(N, T)]) -> Vec<ComparisonEntry>
where
    N: AsRef<str>,
    T: AsRef<str>,
{
    let mut entries: Vec<ComparisonEntry> = texts
        .iter()
        .filter_map(|(name, text)| {
            let outcome = analyzer.analyze(text.as_ref());
            let Some(report) = outcome.report() else {
                tracing::warn!(name = name.as_ref(), "skipping text that could not be scored");
                return None;
            };
            Some(ComparisonEntry {
                name: name.as_ref().to_string(),
                lexile: report.lexile,
                grade: report.grade.clone(),
                words: report.statistics.words,
                sentences: report.statistics.sentences,
            })
        })
        .collect();

    entries.sort_by_key(|entry| entry.lexile);
    entries
}

/// Render entries as a fixed-width table.
pub fn render_comparison(entries: &[ComparisonEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<30} {:>8} {:<25} {:>8}",
        "Nombre", "Lexile", "Grado", "Palabras"
    );
    out.push_str(&rule('-'));
    for entry in entries {
        let _ = writeln!(
            out,
            "{:<30} {:>6}L  {:<25} {:>8}",
            entry.name, entry.lexile, entry.grade, entry.words
        );
    }
    out
}
