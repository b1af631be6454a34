//! Core library for lexile-es.
//!
//! Estimates the reading level of Spanish text on a Lexile-style scale and
//! maps it onto the Chilean school grade bands.
//!
//! # Modules
//!
//! - [`analyzer`] - The analysis pipeline
//! - [`segment`] - Token and sentence model, and the [`Segmenter`] trait
//! - [`metrics`] - Document metrics extraction
//! - [`score`] - Score calculation
//! - [`grade`] - Grade band classification
//! - [`confidence`] - Confidence estimation
//! - [`report`] - Result types, rendering, and persistence
//! - [`compare`] - Multi-text comparison
//! - [`loader`] - Plain text and PDF loading
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use lexile_es_core::{Analyzer, render_outcome};
//!
//! let analyzer = Analyzer::new();
//! let outcome = analyzer.analyze("El gato come. El perro juega. Son amigos.");
//! println!("{}", render_outcome(&outcome));
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod compare;
pub mod confidence;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod frequency;
pub mod grade;
pub mod loader;
pub mod metrics;
pub mod report;
pub mod score;
pub mod segment;
pub mod syllables;
pub mod text;

pub use analyzer::Analyzer;
pub use compare::{ComparisonEntry, compare_texts, render_comparison};
pub use confidence::Confidence;
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{
    AnalysisError, AnalysisResult, ConfigError, ConfigResult, LoadError, LoadResult, ReportError,
};
pub use frequency::FrequencyTable;
pub use loader::{load_document, load_documents};
pub use report::{AnalysisOutcome, LexileReport, Statistics, render_outcome, save_report};
pub use segment::{RuleSegmenter, Segmenter, Sentence, Token};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
