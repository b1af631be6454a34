//! Sentence and token model, and the segmentation seam.
//!
//! Scoring consumes [`Sentence`]s made of [`Token`]s and never looks at raw
//! text. Anything that can split Spanish text into sentences and produce a
//! lemma per token can drive it by implementing [`Segmenter`].
//! [`RuleSegmenter`] is the built-in heuristic implementation.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::dictionaries::lemmas;
use crate::text;

/// A single token as produced by a segmenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appears in the text.
    pub surface: String,
    /// Dictionary form.
    pub lemma: String,
    /// Token is punctuation.
    pub is_punctuation: bool,
    /// Token is whitespace.
    pub is_whitespace: bool,
}

impl Token {
    /// A word token.
    pub fn word(surface: impl Into<String>, lemma: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            lemma: lemma.into(),
            is_punctuation: false,
            is_whitespace: false,
        }
    }

    /// A punctuation token. Its lemma is its surface form.
    pub fn punctuation(surface: impl Into<String>) -> Self {
        let surface = surface.into();
        Self {
            lemma: surface.clone(),
            surface,
            is_punctuation: true,
            is_whitespace: false,
        }
    }

    /// A whitespace token.
    pub fn whitespace(surface: impl Into<String>) -> Self {
        let surface = surface.into();
        Self {
            lemma: surface.clone(),
            surface,
            is_punctuation: false,
            is_whitespace: true,
        }
    }

    /// Whether the token counts as a word (neither punctuation nor whitespace).
    pub const fn is_word(&self) -> bool {
        !self.is_punctuation && !self.is_whitespace
    }
}

/// An ordered, non-empty run of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    /// Build a sentence. Returns `None` for an empty token list.
    pub fn new(tokens: Vec<Token>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens })
        }
    }

    /// All tokens, in order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Word tokens, in order.
    pub fn words(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_word())
    }

    /// Number of word tokens.
    pub fn word_count(&self) -> usize {
        self.words().count()
    }
}

/// Splits raw text into sentences of lemmatized tokens.
///
/// Implementations must keep accented characters intact. Sentence boundaries
/// they return are taken as-is.
pub trait Segmenter: Send + Sync {
    /// Segment `text` into sentences.
    fn segment(&self, text: &str) -> Vec<Sentence>;
}

/// Heuristic Spanish segmenter.
///
/// Sentences come from [`text::split_sentences`]; tokens from Unicode word
/// boundaries (UAX #29). Lemmas come from a small dictionary of function
/// words and irregular verbs, falling back to the lower-cased surface form.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSegmenter;

impl RuleSegmenter {
    /// Create a new rule-based segmenter.
    pub const fn new() -> Self {
        Self
    }
}

impl Segmenter for RuleSegmenter {
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    fn segment(&self, text: &str) -> Vec<Sentence> {
        let sentences: Vec<Sentence> = text::split_sentences(text)
            .iter()
            .filter_map(|s| Sentence::new(tokenize(s)))
            .collect();
        tracing::debug!(sentences = sentences.len(), "segmented text");
        sentences
    }
}

/// Tokenize one sentence on Unicode word boundaries.
///
/// Whitespace runs become whitespace tokens, segments without any
/// alphanumeric character become punctuation, everything else is a word.
pub fn tokenize(sentence: &str) -> Vec<Token> {
    sentence
        .split_word_bounds()
        .map(|segment| {
            if segment.chars().all(char::is_whitespace) {
                Token::whitespace(segment)
            } else if !segment.chars().any(char::is_alphanumeric) {
                Token::punctuation(segment)
            } else {
                Token::word(segment, lemmas::lemmatize(segment))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surfaces(sentence: &Sentence) -> Vec<&str> {
        sentence.words().map(|t| t.surface.as_str()).collect()
    }

    #[test]
    fn tokenize_classifies_tokens() {
        let tokens = tokenize("¿Dónde está el niño?");
        let words: Vec<_> = tokens.iter().filter(|t| t.is_word()).collect();
        assert_eq!(words.len(), 4);
        assert_eq!(words[0].surface, "Dónde");
        assert_eq!(words[1].lemma, "estar");
        assert_eq!(words[3].surface, "niño");
        assert!(tokens.first().is_some_and(|t| t.is_punctuation));
        assert!(tokens.last().is_some_and(|t| t.is_punctuation));
        assert!(tokens.iter().any(|t| t.is_whitespace));
    }

    #[test]
    fn numbers_are_words() {
        let tokens = tokenize("propuesta en 1905, revolucionó");
        let words: Vec<_> = tokens
            .iter()
            .filter(|t| t.is_word())
            .map(|t| t.surface.as_str())
            .collect();
        assert_eq!(words, vec!["propuesta", "en", "1905", "revolucionó"]);
    }

    #[test]
    fn segments_sentences_and_lemmas() {
        let sentences = RuleSegmenter::new().segment("El gato come. El perro juega. Son amigos.");
        assert_eq!(sentences.len(), 3);
        assert_eq!(surfaces(&sentences[0]), vec!["El", "gato", "come"]);
        assert_eq!(sentences[2].word_count(), 2);
        let son = sentences[2].words().next().unwrap();
        assert_eq!(son.lemma, "ser");
    }

    #[test]
    fn empty_text_yields_no_sentences() {
        assert!(RuleSegmenter::new().segment("").is_empty());
        assert!(RuleSegmenter::new().segment("  \n ").is_empty());
    }

    #[test]
    fn sentence_rejects_empty_tokens() {
        assert!(Sentence::new(Vec::new()).is_none());
        let sentence =
            Sentence::new(vec![Token::punctuation("¡"), Token::word("Hola", "hola")]).unwrap();
        assert_eq!(sentence.tokens().len(), 2);
        assert_eq!(sentence.word_count(), 1);
    }
}
