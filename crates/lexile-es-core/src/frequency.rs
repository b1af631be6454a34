//! Lexical frequency ranks for common Spanish words.
//!
//! A [`FrequencyTable`] maps lower-cased word forms to a rank, where 1 is the
//! most frequent word in the language. The table is built once and never
//! mutated; analyzers hold it by value and share it freely across threads.

use std::collections::HashMap;

/// Rank assigned to words missing from the table.
///
/// This is an uncalibrated constant carried over for parity with earlier
/// scores. It has no corpus derivation behind it.
pub const DEFAULT_RANK: u32 = 2000;

/// The most frequent Spanish lemmas, ranked.
const COMMON_SPANISH_WORDS: &[(&str, u32)] = &[
    ("el", 1),
    ("la", 2),
    ("de", 3),
    ("que", 4),
    ("y", 5),
    ("a", 6),
    ("en", 7),
    ("un", 8),
    ("ser", 9),
    ("se", 10),
    ("no", 11),
    ("haber", 12),
    ("por", 13),
    ("con", 14),
    ("su", 15),
    ("para", 16),
    ("como", 17),
    ("estar", 18),
    ("tener", 19),
    ("le", 20),
    ("todo", 21),
    ("pero", 22),
    ("más", 23),
    ("hacer", 24),
    ("o", 25),
    ("poder", 26),
    ("decir", 27),
    ("este", 28),
    ("ir", 29),
    ("otro", 30),
    ("ese", 31),
    ("si", 32),
    ("me", 33),
    ("ya", 34),
    ("ver", 35),
    ("porque", 36),
    ("dar", 37),
    ("cuando", 38),
    ("él", 39),
    ("muy", 40),
    ("sin", 41),
    ("vez", 42),
    ("mucho", 43),
    ("saber", 44),
    ("qué", 45),
    ("sobre", 46),
    ("mi", 47),
    ("alguno", 48),
    ("mismo", 49),
    ("yo", 50),
];

/// Immutable word → rank mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    ranks: HashMap<String, u32>,
}

impl FrequencyTable {
    /// Build a table from `(word, rank)` pairs. Words are lower-cased; later
    /// duplicates replace earlier ones.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let ranks = entries
            .into_iter()
            .map(|(word, rank)| (word.as_ref().to_lowercase(), rank))
            .collect();
        Self { ranks }
    }

    /// The built-in table of the 50 most frequent Spanish words.
    pub fn spanish() -> Self {
        Self::from_entries(COMMON_SPANISH_WORDS.iter().copied())
    }

    /// Return a new table with `extra` entries layered over this one.
    #[must_use]
    pub fn with_entries<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let mut ranks = self.ranks.clone();
        ranks.extend(
            extra
                .into_iter()
                .map(|(word, rank)| (word.as_ref().to_lowercase(), rank)),
        );
        Self { ranks }
    }

    /// Look up a single form. The caller passes it already lower-cased.
    pub fn get(&self, word: &str) -> Option<u32> {
        self.ranks.get(word).copied()
    }

    /// Rank of a token: lemma first, then surface form, lower-cased.
    ///
    /// `None` means the word is rare and should be scored at [`DEFAULT_RANK`].
    pub fn rank(&self, lemma: &str, surface: &str) -> Option<u32> {
        self.get(&lemma.to_lowercase())
            .or_else(|| self.get(&surface.to_lowercase()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::spanish()
    }
}
