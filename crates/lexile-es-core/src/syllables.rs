//! Spanish syllable counting.
//!
//! Counts maximal runs of vowel characters. Spanish spelling is regular enough
//! that each vowel group approximates one syllable; diphthongs collapse into a
//! single group and hiatus splits (`día`, `país`) are not detected.

/// Vowel characters, including accented forms and `ü`.
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'á', 'é', 'í', 'ó', 'ú', 'ü'];

/// Minimum syllable count for a word to be considered complex.
pub const COMPLEX_WORD_SYLLABLES: usize = 3;

fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

/// Count syllables in a single word.
///
/// Always returns at least 1, even for strings without vowels.
pub fn count_syllables(word: &str) -> usize {
    let mut syllables = 0;
    let mut previous_was_vowel = false;

    for ch in word.chars().flat_map(char::to_lowercase) {
        let vowel = is_vowel(ch);
        if vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = vowel;
    }

    syllables.max(1)
}

/// Whether a word has three or more syllables.
pub fn is_complex_word(word: &str) -> bool {
    count_syllables(word) >= COMPLEX_WORD_SYLLABLES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_vowel_groups() {
        assert_eq!(count_syllables("gato"), 2);
        assert_eq!(count_syllables("perro"), 2);
        assert_eq!(count_syllables("come"), 2);
        assert_eq!(count_syllables("el"), 1);
        assert_eq!(count_syllables("fotosíntesis"), 5);
    }

    #[test]
    fn diphthongs_are_one_group() {
        // "bueno" -> bue-no, "ciudad" -> ciu-dad, "pingüino" -> pin-güi-no
        assert_eq!(count_syllables("bueno"), 2);
        assert_eq!(count_syllables("ciudad"), 2);
        assert_eq!(count_syllables("pingüino"), 3);
    }

    #[test]
    fn accented_vowels_count() {
        assert_eq!(count_syllables("está"), 2);
        assert_eq!(count_syllables("él"), 1);
        assert_eq!(count_syllables("relatividad"), 5);
    }

    #[test]
    fn uppercase_is_lowered() {
        assert_eq!(count_syllables("ÁRBOL"), 2);
        assert_eq!(count_syllables("Einstein"), 2);
    }

    #[test]
    fn no_vowels_floors_at_one() {
        assert_eq!(count_syllables("y"), 1);
        assert_eq!(count_syllables("1905"), 1);
        assert_eq!(count_syllables("pst"), 1);
        assert_eq!(count_syllables(""), 1);
    }

    #[test]
    fn matches_vowel_run_count() {
        for word in ["aeropuerto", "oía", "xyz", "murciélago", "construcción", "a"] {
            let lowered = word.to_lowercase();
            let runs = lowered
                .split(|c: char| !is_vowel(c))
                .filter(|run| !run.is_empty())
                .count();
            assert_eq!(count_syllables(word), runs.max(1), "failed for {word}");
        }
    }

    #[test]
    fn complex_words() {
        assert!(is_complex_word("característica"));
        assert!(is_complex_word("bacteria"));
        assert!(!is_complex_word("gato"));
        assert!(!is_complex_word("sol"));
    }
}
