//! Chilean grade classification.
//!
//! Maps a score onto an ordered table of school grade bands. The first band
//! whose exclusive upper bound is above the score wins; the last band is
//! open-ended, so every score has exactly one band.

/// One row of the grade table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    /// Exclusive upper bound of the band.
    pub upper: f64,
    /// School grade (`grado`).
    pub grade: &'static str,
    /// Descriptive level (`nivel`).
    pub level: &'static str,
    /// Recommended reader age (`edad`).
    pub age: &'static str,
}

/// Grade bands, ascending by upper bound.
pub const GRADE_BANDS: &[GradeBand] = &[
    GradeBand {
        upper: 300.0,
        grade: "1º-2º Básico",
        level: "Inicial",
        age: "6-7 años",
    },
    GradeBand {
        upper: 500.0,
        grade: "3º-4º Básico",
        level: "Elemental",
        age: "8-9 años",
    },
    GradeBand {
        upper: 700.0,
        grade: "5º-6º Básico",
        level: "Intermedio",
        age: "10-11 años",
    },
    GradeBand {
        upper: 900.0,
        grade: "7º-8º Básico",
        level: "Avanzado Básico",
        age: "12-13 años",
    },
    GradeBand {
        upper: 1050.0,
        grade: "1º-2º Medio",
        level: "Media Inicial",
        age: "14-15 años",
    },
    GradeBand {
        upper: 1200.0,
        grade: "3º-4º Medio",
        level: "Media Avanzada",
        age: "16-17 años",
    },
    GradeBand {
        upper: f64::INFINITY,
        grade: "Universidad/Profesional",
        level: "Superior",
        age: "18+ años",
    },
];

/// Classify a score into its grade band.
pub fn classify(score: f64) -> &'static GradeBand {
    GRADE_BANDS
        .iter()
        .find(|band| score < band.upper)
        .unwrap_or(&GRADE_BANDS[GRADE_BANDS.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_ascending() {
        for pair in GRADE_BANDS.windows(2) {
            assert!(pair[0].upper < pair[1].upper);
        }
        assert!(GRADE_BANDS.last().unwrap().upper.is_infinite());
    }

    #[test]
    fn lower_bound_is_inclusive() {
        assert_eq!(classify(299.9).grade, "1º-2º Básico");
        assert_eq!(classify(300.0).grade, "3º-4º Básico");
        assert_eq!(classify(1049.0).grade, "1º-2º Medio");
        assert_eq!(classify(1050.0).grade, "3º-4º Medio");
        assert_eq!(classify(1200.0).grade, "Universidad/Profesional");
    }

    #[test]
    fn extremes() {
        let low = classify(50.0);
        assert_eq!(low.level, "Inicial");
        assert_eq!(low.age, "6-7 años");
        let high = classify(1600.0);
        assert_eq!(high.level, "Superior");
        assert_eq!(high.age, "18+ años");
    }

    #[test]
    fn nan_falls_into_last_band() {
        assert_eq!(classify(f64::NAN).grade, "Universidad/Profesional");
    }

    #[test]
    fn every_score_has_exactly_one_band() {
        let mut score = 50.0;
        while score <= 1600.0 {
            let matching = GRADE_BANDS
                .iter()
                .enumerate()
                .filter(|(i, band)| {
                    let lower = if *i == 0 { f64::NEG_INFINITY } else { GRADE_BANDS[i - 1].upper };
                    score >= lower && score < band.upper
                })
                .count();
            assert_eq!(matching, 1, "score {score}");
            score += 0.5;
        }
    }
}
