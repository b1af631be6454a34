//! Spanish lemma dictionary for the rule-based segmenter.
//!
//! Maps inflected forms of high-frequency function words and irregular verbs
//! to their dictionary form. Forms not listed here lemmatize to themselves.
//! Ambiguous forms (`fue`, `fui` for both *ser* and *ir*) resolve to the more
//! frequent reading.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Inflected form → lemma.
pub static LEMMAS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    let mut add = |lemma: &'static str, forms: &[&'static str]| {
        map.extend(forms.iter().map(|&form| (form, lemma)));
    };

    // Articles and determiners
    add("el", &["la", "los", "las"]);
    add("un", &["una", "unos", "unas"]);
    add("su", &["sus"]);
    add("mi", &["mis"]);
    add("este", &["esta", "estos", "estas"]);
    add("ese", &["esa", "esos", "esas"]);
    add("todo", &["toda", "todos", "todas"]);
    add("otro", &["otra", "otros", "otras"]);
    add("mucho", &["mucha", "muchos", "muchas"]);
    add("alguno", &["algún", "alguna", "algunos", "algunas"]);
    add("mismo", &["misma", "mismos", "mismas"]);

    // Personal pronouns
    add("él", &["ella", "ellos", "ellas"]);

    // Irregular verbs
    add(
        "ser",
        &[
            "soy", "eres", "es", "somos", "sois", "son", "era", "eras", "éramos", "eran", "fue",
            "fui", "fuiste", "fuimos", "fueron", "será", "serán", "sería", "serían", "sea",
            "sean", "sido", "siendo",
        ],
    );
    add(
        "estar",
        &[
            "estoy", "estás", "está", "estamos", "están", "estaba", "estaban", "estuvo",
            "estuvieron", "estará", "estarán", "esté", "estén", "estando",
        ],
    );
    add(
        "haber",
        &[
            "he", "has", "ha", "hemos", "han", "hay", "había", "habían", "hubo", "habrá",
            "habría", "haya", "hayan", "habido",
        ],
    );
    add(
        "tener",
        &[
            "tengo", "tienes", "tiene", "tenemos", "tienen", "tenía", "tenían", "tuvo",
            "tuvieron", "tendrá", "tendría", "tenga", "tengan", "tenido",
        ],
    );
    add(
        "hacer",
        &[
            "hago", "haces", "hace", "hacemos", "hacen", "hacía", "hacían", "hizo", "hicieron",
            "hará", "haría", "haga", "hagan", "hecho", "haciendo",
        ],
    );
    add(
        "poder",
        &[
            "puedo", "puedes", "puede", "podemos", "pueden", "podía", "podían", "pudo",
            "pudieron", "podrá", "podría", "podrían", "pueda", "puedan",
        ],
    );
    add(
        "decir",
        &[
            "digo", "dices", "dice", "decimos", "dicen", "decía", "dijo", "dijeron", "dirá",
            "diría", "diga", "digan", "dicho", "diciendo",
        ],
    );
    add(
        "ir",
        &[
            "voy", "vas", "va", "vamos", "van", "iba", "iban", "irá", "irán", "vaya", "vayan",
            "yendo",
        ],
    );
    add(
        "ver",
        &["veo", "ves", "ve", "vemos", "ven", "veía", "vio", "vieron", "verá", "visto"],
    );
    add(
        "dar",
        &["doy", "das", "da", "damos", "dan", "daba", "dio", "dieron", "dará", "dado"],
    );
    add(
        "saber",
        &[
            "sé", "sabes", "sabe", "sabemos", "saben", "sabía", "supo", "sabrá", "sepa",
            "sabido",
        ],
    );

    map
});

/// Look up the lemma of a lower-cased form.
pub fn lookup_lemma(form: &str) -> Option<&'static str> {
    LEMMAS.get(form).copied()
}

/// Lemmatize a word: dictionary lookup, otherwise the lower-cased word itself.
pub fn lemmatize(word: &str) -> String {
    let lowered = word.to_lowercase();
    lookup_lemma(&lowered).map_or(lowered, str::to_string)
}
