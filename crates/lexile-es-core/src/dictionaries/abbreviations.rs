//! Spanish abbreviation dictionary for sentence boundary detection.
//!
//! Entries are lower-cased and stored without their trailing period.
//! Words that are also ordinary Spanish words (`no`, `mar`) are left out so a
//! sentence ending in them still splits.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviations that should not end a sentence when followed by a period.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Forms of address and titles
    set.extend([
        "sr", "sra", "srta", "sres", "sras", "dr", "dra", "dres", "lic", "licda", "ing", "arq",
        "prof", "profa", "ud", "uds", "vd", "vds", "dña", "sto", "sta", "fr", "mons",
        "excmo", "excma", "ilmo", "ilma",
    ]);

    // Military and official ranks
    set.extend(["gral", "cnel", "tte", "cap", "sgto", "pdte", "pte", "sec", "secr"]);

    // Common abbreviations
    set.extend([
        "etc", "ej", "p.ej", "aprox", "cf", "cfr", "vs", "ibíd", "íd", "op. cit", "a.c", "d.c",
        "a.m", "p.m", "n.b", "p.d", "ss", "sig", "sigs",
    ]);

    // References and publishing
    set.extend([
        "pág", "págs", "p", "pp", "núm", "nro", "vol", "vols", "cap", "caps", "art", "arts",
        "fig", "figs", "ed", "eds", "trad", "coord", "col", "cols", "tel",
    ]);

    // Places and organizations
    set.extend([
        "av", "avda", "c", "dpto", "depto", "prov", "reg", "cía", "s.a", "ltda", "admón",
        "ee.uu", "ee. uu", "uu",
    ]);

    // Months and weekdays (only forms that are not words)
    set.extend([
        "ene", "feb", "abr", "jun", "jul", "ago", "sept", "oct", "nov", "dic", "lun", "mié",
        "jue", "vie", "sáb", "dom",
    ]);

    // Quantities
    set.extend(["máx", "mín", "aprox", "tot"]);

    set
});

/// Check if a word (without trailing period) is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    ABBREVIATIONS.contains(word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_abbreviations() {
        assert!(is_abbreviation("Sr"));
        assert!(is_abbreviation("sra"));
        assert!(is_abbreviation("Dr"));
        assert!(is_abbreviation("Ud"));
    }

    #[test]
    fn reference_abbreviations() {
        assert!(is_abbreviation("pág"));
        assert!(is_abbreviation("etc"));
        assert!(is_abbreviation("p.ej"));
    }

    #[test]
    fn ordinary_words_are_not_abbreviations() {
        assert!(!is_abbreviation("no"));
        assert!(!is_abbreviation("mar"));
        assert!(!is_abbreviation("gato"));
        assert!(!is_abbreviation(""));
    }
}
