//! Text processing utilities.
//!
//! Sentence and paragraph splitting tuned for Spanish prose: inverted opening
//! marks (`¿`, `¡`) and guillemets start sentences, and Spanish abbreviations
//! do not end them.

use regex::Regex;
use std::sync::LazyLock;

use crate::dictionaries::abbreviations::is_abbreviation;

/// Regex for URLs.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:https?://|www\.)\S+").expect("valid regex"));

/// Regex for email addresses.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});

/// Regex for initials (J.K., E.E.U.U., etc.).
static INITIALS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]\.(?:[A-Z]\.)*").expect("valid regex"));

/// Characters that may open a sentence before its first letter.
const fn is_sentence_opener(ch: char) -> bool {
    matches!(ch, '¿' | '¡' | '"' | '\'' | '«' | '“' | '(' | '—' | '-')
}

/// Characters that close a sentence after its terminator.
const fn is_sentence_closer(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '»' | '”' | ')')
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | '…')
}

/// Split text into sentences.
///
/// Paragraph breaks always end a sentence. Within a paragraph, a terminator
/// ends a sentence unless it belongs to an abbreviation, initial, decimal
/// number, URL, or email address, or the next word starts in lowercase.
/// Fragments with no alphanumeric characters are dropped.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    split_paragraphs(text)
        .iter()
        .flat_map(|paragraph| split_paragraph_sentences(paragraph))
        .collect()
}

/// Split text into paragraphs (separated by blank lines).
///
/// CRLF line endings are treated as LF.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split("\n\n")
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

fn split_paragraph_sentences(paragraph: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = paragraph.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        current.push(ch);

        if is_sentence_terminator(ch) {
            // Absorb runs like "?!" or "..." and any closing quotes.
            while let Some(&next) = chars.get(i + 1) {
                if is_sentence_terminator(next) || is_sentence_closer(next) {
                    current.push(next);
                    i += 1;
                } else {
                    break;
                }
            }

            let context = extract_context(&chars, i, ch);
            if is_sentence_boundary(&context, &current) {
                push_sentence(&mut sentences, &current);
                current.clear();
            }
        }

        i += 1;
    }

    push_sentence(&mut sentences, &current);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, current: &str) {
    let sentence = current.trim();
    if sentence.chars().any(char::is_alphanumeric) {
        sentences.push(sentence.to_string());
    }
}

/// Context around a potential sentence boundary.
struct SentenceContext {
    punctuation: char,
    word_before: String,
    char_after: Option<char>,
    letter_after: Option<char>,
    is_end_of_text: bool,
}

fn extract_context(chars: &[char], pos: usize, punctuation: char) -> SentenceContext {
    let word_before = get_word_before(chars, pos);

    let mut after_start = pos + 1;
    while after_start < chars.len() && chars[after_start].is_whitespace() {
        after_start += 1;
    }

    let char_after = chars.get(after_start).copied();
    let letter_after = chars[after_start.min(chars.len())..]
        .iter()
        .copied()
        .find(|c| !is_sentence_opener(*c) && !c.is_whitespace());

    SentenceContext {
        punctuation,
        word_before,
        char_after,
        letter_after,
        is_end_of_text: after_start >= chars.len(),
    }
}

fn get_word_before(chars: &[char], pos: usize) -> String {
    let mut i = pos;

    // Skip back past terminators, closers and whitespace
    while i > 0 {
        i -= 1;
        let ch = chars[i];
        if !ch.is_whitespace() && !is_sentence_terminator(ch) && !is_sentence_closer(ch) {
            break;
        }
    }

    // Collect the word, keeping inner periods (p.ej, EE.UU)
    let mut word_chars = Vec::new();
    loop {
        if chars[i].is_alphanumeric() || chars[i] == '.' {
            word_chars.push(chars[i]);
        } else {
            break;
        }
        if i == 0 {
            break;
        }
        i -= 1;
    }

    word_chars.reverse();
    word_chars.iter().collect()
}

fn is_sentence_boundary(context: &SentenceContext, current_sentence: &str) -> bool {
    if context.is_end_of_text {
        return true;
    }

    // Inverted marks always open a new sentence.
    if context.char_after.is_some_and(|c| matches!(c, '¿' | '¡')) {
        return true;
    }

    // "¡Qué frío! dijo Ana" keeps going; anything else after ! or ? splits.
    if context.punctuation != '.' {
        return !context.letter_after.is_some_and(char::is_lowercase);
    }

    if is_likely_abbreviation(&context.word_before) {
        return false;
    }

    if is_likely_initial(&context.word_before) {
        return false;
    }

    if contains_url_or_email(current_sentence) {
        return false;
    }

    // Digit after period following a digit = decimal number (e.g., "3.14")
    if let Some(next_char) = context.char_after
        && next_char.is_ascii_digit()
        && context
            .word_before
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_digit())
    {
        return false;
    }

    // Uppercase next letter = strong boundary signal
    if let Some(next_letter) = context.letter_after {
        if next_letter.is_uppercase() {
            return true;
        }
        if next_letter.is_lowercase() {
            return false;
        }
    }

    true
}

fn is_likely_abbreviation(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let word_clean = word.trim_end_matches('.');
    if is_abbreviation(word_clean) {
        return true;
    }
    // Single uppercase letter = likely initial
    let mut chars = word_clean.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

fn is_likely_initial(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    INITIALS_PATTERN.is_match(word)
}

fn contains_url_or_email(sentence: &str) -> bool {
    let last_part: String = sentence
        .chars()
        .rev()
        .take(50)
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    let last_token = last_part.split_whitespace().last().unwrap_or_default();
    URL_PATTERN.is_match(last_token) || EMAIL_PATTERN.is_match(last_token)
}
