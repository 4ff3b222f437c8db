use crate::engine::{RuleTable, parse_rules};
use crate::stages::{
    Harmony, apply_gradation, apply_inflection, apply_postprocessing, apply_vowel_harmony, canonicalize_plural_only,
    determine_harmony, finish_surface, gradate, inflect, join_clitics,
};
use crate::{GRADATION_RULES, INFLECTION_RULES};

fn gradation_table() -> RuleTable {
    parse_rules(GRADATION_RULES).expect("shipped gradation table parses")
}

fn inflection_table() -> RuleTable {
    parse_rules(INFLECTION_RULES).expect("shipped inflection table parses")
}

// --- Gradation ---------------------------------------------------------------

#[test]
fn gradation_singular_genitive() {
    // Array of (tagged input, expected)
    let cases: Vec<(&str, &str)> = vec![
        ("<N1A>baarimikko+Sg+Gen", "<N1A>baarimiko+Sg+Gen"),
        ("<N48A>hake+Sg+Gen", "<N48A>hakke+Sg+Gen"),
        ("<N5B>kaappi+Sg+Gen", "<N5B>kaapi+Sg+Gen"),
        ("<N41B>opas+Sg+Gen", "<N41B>oppas+Sg+Gen"),
        ("<N1C>tyttö+Sg+Gen", "<N1C>tytö+Sg+Gen"),
        ("<N48C>kate+Sg+Gen", "<N48C>katte+Sg+Gen"),
        ("<N9D>vika+Sg+Gen", "<N9D>via+Sg+Gen"),
        ("<N32D>ien+Sg+Gen", "<N32D>iken+Sg+Gen"),
        ("<N1E>sopu+Sg+Gen", "<N1E>sovu+Sg+Gen"),
        ("<N48E>taive+Sg+Gen", "<N48E>taipe+Sg+Gen"),
        ("<N1F>satu+Sg+Gen", "<N1F>sadu+Sg+Gen"),
        ("<N41F>keidas+Sg+Gen", "<N41F>keitas+Sg+Gen"),
        ("<N1J>hento+Sg+Gen", "<N1J>henno+Sg+Gen"),
        ("<N48J>vanne+Sg+Gen", "<N48J>vante+Sg+Gen"),
    ];

    let table = gradation_table();
    for (input, expected) in cases {
        assert_eq!(gradate(&table, input), expected, "gradating {input}");
    }
}

#[test]
fn gradation_plural_nominative() {
    let cases: Vec<(&str, &str)> = vec![
        ("<N1A>baarimikko+Pl+Nom", "<N1A>baarimiko+Pl+Nom"),
        ("<N48A>hake+Pl+Nom", "<N48A>hakke+Pl+Nom"),
        ("<N5B>kaappi+Pl+Nom", "<N5B>kaapi+Pl+Nom"),
        ("<N41B>opas+Pl+Nom", "<N41B>oppas+Pl+Nom"),
        ("<N1C>tyttö+Pl+Nom", "<N1C>tytö+Pl+Nom"),
        ("<N48C>kate+Pl+Nom", "<N48C>katte+Pl+Nom"),
        ("<N9D>vika+Pl+Nom", "<N9D>via+Pl+Nom"),
        ("<N32D>ien+Pl+Nom", "<N32D>iken+Pl+Nom"),
        ("<N1E>sopu+Pl+Nom", "<N1E>sovu+Pl+Nom"),
        ("<N48E>taive+Pl+Nom", "<N48E>taipe+Pl+Nom"),
        ("<N1F>satu+Pl+Nom", "<N1F>sadu+Pl+Nom"),
        ("<N41F>keidas+Pl+Nom", "<N41F>keitas+Pl+Nom"),
        ("<N1J>hento+Pl+Nom", "<N1J>henno+Pl+Nom"),
        ("<N48J>vanne+Pl+Nom", "<N48J>vante+Pl+Nom"),
    ];

    let table = gradation_table();
    for (input, expected) in cases {
        assert_eq!(gradate(&table, input), expected, "gradating {input}");
    }
}

#[test]
fn gradation_leaves_strong_grade_cases_alone() {
    let table = gradation_table();
    for input in ["<N1A>baarimikko+Sg+Nom", "<N1A>baarimikko+Sg+Par", "<N1A>baarimikko+Pl+Gen", "<N9>kala+Sg+Gen"] {
        assert_eq!(gradate(&table, input), input);
    }
}

#[test]
fn gradation_is_idempotent_once_weakened() {
    let table = gradation_table();
    let once = gradate(&table, "<N1F>satu+Sg+Gen");
    assert_eq!(once, "<N1F>sadu+Sg+Gen");
    assert_eq!(gradate(&table, &once), once);
}

#[test]
fn gradation_only_touches_the_stem() {
    let table = gradation_table();
    let cases = vec![
        ("<N48A>hake+Sg+Gen+kin+kO", "<N48A>hakke+Sg+Gen+kin+kO"),
        ("<N48A>hake+Pl+Ine+kin", "<N48A>hakke+Pl+Ine+kin"),
        ("<N1A>kukka+Sg+Ine+kin+kO", "<N1A>kuka+Sg+Ine+kin+kO"),
    ];
    for (input, expected) in cases {
        assert_eq!(gradate(&table, input), expected, "gradating {input}");
    }
}

#[test]
fn paradigm_14_weakens_every_plural_case() {
    let table = gradation_table();
    assert_eq!(gradate(&table, "<N14A>solakka+Pl+Gen"), "<N14A>solaka+Pl+Gen");
    assert_eq!(gradate(&table, "<N14A>solakka+Pl+Par"), "<N14A>solaka+Pl+Par");
    assert_eq!(gradate(&table, "<N14A>solakka+Sg+Par"), "<N14A>solakka+Sg+Par");
}

#[test]
fn plural_only_lemmas_are_canonicalized() {
    assert_eq!(canonicalize_plural_only("<N1>aivot+Sg+Abl"), "<N1>aivo+Pl+Abl");
    assert_eq!(canonicalize_plural_only("<N1>kala+Sg+Abl"), "<N1>kala+Sg+Abl");
    // Multi-word lemmas are skipped.
    assert_eq!(canonicalize_plural_only("<N1>iso_aivot+Sg+Abl"), "<N1>iso_aivot+Sg+Abl");

    let table = gradation_table();
    let rewrite = apply_gradation(&table, "<N1>aivot+Sg+Abl");
    assert_eq!(rewrite.output, "<N1>aivo+Pl+Abl");
    assert_eq!(rewrite.rule, None);
}

#[test]
fn unknown_tags_pass_through_gradation() {
    let table = gradation_table();
    for input in ["<N6>agar-agar+Pl+Abl", "<N5>ekstranet+Pl+Tra", "plain word"] {
        assert_eq!(gradate(&table, input), input);
    }
}

// --- Inflection --------------------------------------------------------------

#[test]
fn inflection_paradigm_grids() {
    // Array of (tagged input, expected raw table output)
    let cases: Vec<(&str, &str)> = vec![
        ("<N1A>baarimikko+Sg+Nom", "<N1A>baarimikko_"),
        ("<N1A>baarimikko+Sg+Gen", "<N1A>baarimikkon"),
        ("<N1A>baarimikko+Sg+Par", "<N1A>baarimikkoA"),
        ("<N1A>baarimikko+Sg+Ill", "<N1A>baarimikkoon"),
        ("<N1A>baarimikko+Sg+Ine", "<N1A>baarimikkossA"),
        ("<N1A>baarimikko+Sg+Ela", "<N1A>baarimikkostA"),
        ("<N1A>baarimikko+Sg+Ade", "<N1A>baarimikkollA"),
        ("<N1A>baarimikko+Sg+Abl", "<N1A>baarimikkoltA"),
        ("<N1A>baarimikko+Sg+All", "<N1A>baarimikkolle"),
        ("<N1A>baarimikko+Sg+Ess", "<N1A>baarimikkonA"),
        ("<N1A>baarimikko+Sg+Tra", "<N1A>baarimikkoksi"),
        ("<N1A>baarimikko+Pl+Nom", "<N1A>baarimikkot"),
        ("<N1A>baarimikko+Pl+Gen", "<N1A>baarimikkojen"),
        ("<N1A>baarimikko+Pl+Par", "<N1A>baarimikkojA"),
        ("<N1A>baarimikko+Pl+Ill", "<N1A>baarimikkoihin"),
        ("<N1A>baarimikko+Pl+Ine", "<N1A>baarimikkoissA"),
        ("<N1A>baarimikko+Pl+Ela", "<N1A>baarimikkoistA"),
        ("<N1A>baarimikko+Pl+Ade", "<N1A>baarimikkoillA"),
        ("<N1A>baarimikko+Pl+Abl", "<N1A>baarimikkoiltA"),
        ("<N1A>baarimikko+Pl+All", "<N1A>baarimikkoille"),
        ("<N1A>baarimikko+Pl+Ess", "<N1A>baarimikkoinA"),
        ("<N1A>baarimikko+Pl+Tra", "<N1A>baarimikkoiksi"),
        ("<N2>aakkosto+Sg+Nom", "<N2>aakkosto_"),
        ("<N2>aakkosto+Sg+Gen", "<N2>aakkoston"),
        ("<N2>aakkosto+Sg+Par", "<N2>aakkostoA"),
        ("<N2>aakkosto+Sg+Ill", "<N2>aakkostoon"),
        ("<N2>aakkosto+Sg+Ine", "<N2>aakkostossA"),
        ("<N2>aakkosto+Sg+Ela", "<N2>aakkostostA"),
        ("<N2>aakkosto+Sg+Ade", "<N2>aakkostollA"),
        ("<N2>aakkosto+Sg+Abl", "<N2>aakkostoltA"),
        ("<N2>aakkosto+Sg+All", "<N2>aakkostolle"),
        ("<N2>aakkosto+Sg+Ess", "<N2>aakkostonA"),
        ("<N2>aakkosto+Sg+Tra", "<N2>aakkostoksi"),
        ("<N2>aakkosto+Pl+Nom", "<N2>aakkostot"),
        ("<N2>aakkosto+Pl+Gen", "<N2>aakkostojen"),
        ("<N2>aakkosto+Pl+Par", "<N2>aakkostojA"),
        ("<N2>aakkosto+Pl+Ill", "<N2>aakkostoihin"),
        ("<N2>aakkosto+Pl+Ine", "<N2>aakkostoissA"),
        ("<N2>aakkosto+Pl+Ela", "<N2>aakkostoistA"),
        ("<N2>aakkosto+Pl+Ade", "<N2>aakkostoillA"),
        ("<N2>aakkosto+Pl+Abl", "<N2>aakkostoiltA"),
        ("<N2>aakkosto+Pl+All", "<N2>aakkostoille"),
        ("<N2>aakkosto+Pl+Ess", "<N2>aakkostoinA"),
        ("<N2>aakkosto+Pl+Tra", "<N2>aakkostoiksi"),
        ("<N11>omena+Sg+Nom", "<N11>omena_"),
        ("<N11>omena+Sg+Gen", "<N11>omenan"),
        ("<N11>omena+Sg+Par", "<N11>omenaA"),
        ("<N11>omena+Sg+Ill", "<N11>omenaAn"),
        ("<N11>omena+Sg+Ine", "<N11>omenassA"),
        ("<N11>omena+Sg+Ela", "<N11>omenastA"),
        ("<N11>omena+Sg+Ade", "<N11>omenallA"),
        ("<N11>omena+Sg+Abl", "<N11>omenaltA"),
        ("<N11>omena+Sg+All", "<N11>omenalle"),
        ("<N11>omena+Sg+Ess", "<N11>omenanA"),
        ("<N11>omena+Sg+Tra", "<N11>omenaksi"),
        ("<N11>omena+Pl+Nom", "<N11>omenat"),
        ("<N11>omena+Pl+Gen", "<N11>omenoiden"),
        ("<N11>omena+Pl+Par", "<N11>omenoitA"),
        ("<N11>omena+Pl+Ill", "<N11>omenoihin"),
        ("<N11>omena+Pl+Ine", "<N11>omenoissA"),
        ("<N11>omena+Pl+Ela", "<N11>omenoistA"),
        ("<N11>omena+Pl+Ade", "<N11>omenoillA"),
        ("<N11>omena+Pl+Abl", "<N11>omenoiltA"),
        ("<N11>omena+Pl+All", "<N11>omenoille"),
        ("<N11>omena+Pl+Ess", "<N11>omenoinA"),
        ("<N11>omena+Pl+Tra", "<N11>omenoiksi"),
    ];

    let table = inflection_table();
    for (input, expected) in cases {
        assert_eq!(inflect(&table, input), expected, "inflecting {input}");
    }
}

#[test]
fn inflection_spot_checks() {
    // Array of (tagged input, expected surface form before harmony)
    let cases: Vec<(&str, &str)> = vec![
        ("<N3>valtio+Sg+Par", "valtiotA"),
        ("<N3>valtio+Pl+Gen", "valtioiden"),
        ("<N5>risti+Sg+Ill", "ristiin"),
        ("<N5>ekstranet+Pl+Tra", "ekstraneteiksi"),
        ("<N6>agar-agar+Pl+Abl", "agar-agareiltA"),
        ("<N7>ovi+Sg+Gen", "oven"),
        ("<N7>ovi+Pl+Nom", "ovet"),
        ("<N7>salmi+Sg+Ill", "salmeen"),
        ("<N7>salmi+Pl+Tra", "salmiksi"),
        ("<N8>genre+Sg+Ill", "genreen"),
        ("<N8>genre+Pl+Ill", "genreihin"),
        ("<N9>kala+Pl+Ill", "kaloihin"),
        ("<N9J>kähmintä+Pl+Par", "kähmintöjA"),
        ("<N10>koira+Pl+Ill", "koiriin"),
        ("<N12>kulkija+Pl+Par", "kulkijoitA"),
        ("<N15>korkea+Pl+Ill", "korkeisiin"),
    ];

    let table = inflection_table();
    for (input, expected) in cases {
        assert_eq!(apply_inflection(&table, input).output, expected, "inflecting {input}");
    }
}

#[test]
fn surface_cleanup() {
    assert_eq!(finish_surface("<N1A>baarimikko_"), "baarimikko");
    assert_eq!(finish_surface("<N9>kala_+hAn+kin"), "kalahAnkin");
    assert_eq!(finish_surface("<N9>kaloissA+kO"), "kaloissAkO");
    assert_eq!(finish_surface("<N9>vanha_kala_"), "vanha kala");
    assert_eq!(finish_surface("ad_hoc"), "ad hoc");
}

#[test]
fn clitics_only_join_at_the_end() {
    assert_eq!(join_clitics("kala+Sg+Nom"), "kala+Sg+Nom");
    assert_eq!(join_clitics("kalassA+pAs"), "kalassApAs");
    assert_eq!(join_clitics("kala_+kAAn"), "kalakAAn");
}

// --- Post-processing and harmony --------------------------------------------

#[test]
fn postprocessing_fixes_aia() {
    assert_eq!(apply_postprocessing("papaia"), "papaja");
    assert_eq!(apply_postprocessing("papaian"), "papajan");
    assert_eq!(apply_postprocessing("kastaia"), "kastaia");
    assert_eq!(apply_postprocessing("kala"), "kala");
    // Only inside a word.
    assert_eq!(apply_postprocessing("agar aia"), "agar aia");
    assert_eq!(apply_postprocessing("aia-papaia"), "aia-papaja");
}

#[test]
fn harmony_follows_last_harmony_vowel() {
    let cases: Vec<(&str, &str)> = vec![
        ("kalassA", "kalassa"),
        ("pöydällA", "pöydällä"),
        ("kähmintöjA", "kähmintöjä"),
        ("tytöllA", "tytöllä"),
        ("kalakO", "kalako"),
        ("hyväkAAn", "hyväkään"),
        ("korkeAn", "korkean"),
    ];

    for (input, expected) in cases {
        assert_eq!(apply_vowel_harmony(input, Harmony::Back), expected, "harmonizing {input}");
    }
}

#[test]
fn neutral_words_use_the_configured_default() {
    assert_eq!(determine_harmony("tie"), None);
    assert_eq!(apply_vowel_harmony("tiellA", Harmony::Back), "tiella");
    assert_eq!(apply_vowel_harmony("tiellA", Harmony::Front), "tiellä");
    assert_eq!(apply_vowel_harmony("vene", Harmony::Front), "vene");
}

#[test]
fn harmony_determination() {
    assert_eq!(determine_harmony("pöytä"), Some(Harmony::Front));
    assert_eq!(determine_harmony("kala"), Some(Harmony::Back));
    assert_eq!(determine_harmony("kesä"), Some(Harmony::Front));
    // Last harmony vowel wins in compounds.
    assert_eq!(determine_harmony("päätekohta"), Some(Harmony::Back));
}

// --- Whole pipeline ----------------------------------------------------------

#[test]
fn baarimikko_genitive_end_to_end() {
    let gradation = gradation_table();
    let inflection = inflection_table();

    let gradated = apply_gradation(&gradation, "<N1A>baarimikko+Sg+Gen");
    assert_eq!(gradated.output, "<N1A>baarimiko+Sg+Gen");
    let inflected = apply_inflection(&inflection, &gradated.output);
    assert_eq!(inflected.output, "baarimikon");
    let surface = apply_vowel_harmony(&apply_postprocessing(&inflected.output), Harmony::Back);
    assert_eq!(surface, "baarimikon");
}

#[test]
fn pipeline_spot_checks() {
    let gradation = gradation_table();
    let inflection = inflection_table();
    let run = |tagged: &str| {
        let gradated = apply_gradation(&gradation, tagged).output;
        let inflected = apply_inflection(&inflection, &gradated).output;
        apply_vowel_harmony(&apply_postprocessing(&inflected), Harmony::Back)
    };

    let cases: Vec<(&str, &str)> = vec![
        ("<N10F>pöytä+Sg+Gen", "pöydän"),
        ("<N1>aivot+Sg+Abl", "aivoilta"),
        ("<N1>aivot+Sg+Nom", "aivot"),
        ("<N10>papaia+Sg+Gen", "papajan"),
        ("<N14A>solakka+Pl+Gen", "solakoiden"),
        ("<N13>katiska+Pl+Ine", "katiskoissa"),
        ("<N9>kala+Sg+Nom+hAn+kin", "kalahankin"),
        ("<N1>tie+Sg+Ill", "tieen"),
    ];

    for (input, expected) in cases {
        assert_eq!(run(input), expected, "deriving {input}");
    }
}
