//! Error types for lexile-es-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that stop a text from being scored.
///
/// The `Display` strings are the Spanish messages surfaced in the
/// `{ "error": ... }` result shape.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input is empty after trimming whitespace.
    #[error("Texto vacío")]
    EmptyText,

    /// Segmentation produced no sentences.
    #[error("No se detectaron oraciones")]
    NoSentences,

    /// Every token was punctuation or whitespace.
    #[error("No se detectaron palabras")]
    NoWords,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that can occur while loading a document from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The path does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is larger than the configured input limit.
    #[error("input too large: {} is {size} bytes (limit: {limit} bytes)", path.display())]
    TooLarge {
        /// File being read.
        path: PathBuf,
        /// Actual size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: usize,
    },

    /// Both PDF extractors failed outright.
    #[error("failed to read PDF {}: {message}", path.display())]
    Pdf {
        /// File being read.
        path: PathBuf,
        /// Message from the last extractor tried.
        message: String,
    },

    /// The PDF parsed but contains no extractable text (scanned images).
    #[error("{} has no extractable text; scanned PDFs need OCR", .0.display())]
    NoExtractableText(PathBuf),
}

/// Result type alias using [`LoadError`].
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur while persisting a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The analysis failed, so there is no report to write.
    #[error("cannot save a failed analysis: {0}")]
    FailedAnalysis(String),

    /// Writing the report file failed.
    #[error("failed to write report to {}: {source}", path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
