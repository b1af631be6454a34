//! Dictionaries for Spanish text segmentation.
//!
//! Provides curated word sets used by sentence splitting and lemmatization.

pub mod abbreviations;
pub mod lemmas;
