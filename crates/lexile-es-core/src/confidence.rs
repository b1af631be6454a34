//! Confidence in a score, from document size.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minimum words for [`Confidence::High`].
pub const HIGH_MIN_WORDS: usize = 500;
/// Minimum sentences for [`Confidence::High`].
pub const HIGH_MIN_SENTENCES: usize = 20;
/// Minimum words for [`Confidence::Medium`].
pub const MEDIUM_MIN_WORDS: usize = 200;
/// Minimum sentences for [`Confidence::Medium`].
pub const MEDIUM_MIN_SENTENCES: usize = 10;

/// How much a score can be trusted given the amount of text behind it.
///
/// Serialized and displayed with the Spanish labels `Alta`, `Media`, `Baja`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Confidence {
    /// Too little text for a stable estimate.
    #[serde(rename = "Baja")]
    Low,
    /// Enough text for a rough estimate.
    #[serde(rename = "Media")]
    Medium,
    /// At least 500 words over 20 sentences.
    #[serde(rename = "Alta")]
    High,
}

impl Confidence {
    /// Spanish label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Baja",
            Self::Medium => "Media",
            Self::High => "Alta",
        }
    }

    /// Estimate confidence from word and sentence counts.
    pub const fn estimate(words: usize, sentences: usize) -> Self {
        if words >= HIGH_MIN_WORDS && sentences >= HIGH_MIN_SENTENCES {
            Self::High
        } else if words >= MEDIUM_MIN_WORDS && sentences >= MEDIUM_MIN_SENTENCES {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
