#[macro_use]
mod macros;
mod api;
mod engine;
mod errors;
mod lexicon;
mod random;
mod stages;

pub use api::{
    Derivation, Generator, Options, StageMask, Tables, compose_tagged_word, join_passphrase, passphrase, surfaces,
    GRADATION_RULES, INFLECTION_RULES,
};
pub use engine::{Rewrite, Rule, RuleId, RuleTable, RunMetrics, StageMetrics, apply, apply_traced, load_rules, parse_rules};
pub use errors::{FinformError, Result};
pub use lexicon::{Lemma, Lexicon, NON_INFLECTING_CODE, ParadigmCode, SAMPLE_WORD_LIST};
pub use random::{OsRandom, RandomSource, ScriptedRandom, choose};
pub use stages::{
    Harmony, apply_gradation, apply_inflection, apply_postprocessing, apply_vowel_harmony, canonicalize_plural_only,
    determine_harmony, finish_surface, gradate, inflect, join_clitics, remove_lexical_tag, restore_spaces,
};

/// Stands in for a space inside a tagged word, and for the empty nominative
/// ending.
pub const WORD_SPACE: &str = "_";

/// Word class letter used in lexical tags (`<N4A>`).
pub const NOMINAL_CLASS: char = 'N';

// --- Word-form markers -------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammaticalNumber {
    Singular,
    Plural,
}

impl GrammaticalNumber {
    pub const ALL: [GrammaticalNumber; 2] = [GrammaticalNumber::Singular, GrammaticalNumber::Plural];

    pub fn marker(self) -> &'static str {
        match self {
            GrammaticalNumber::Singular => "+Sg",
            GrammaticalNumber::Plural => "+Pl",
        }
    }
}

/// Cases the generator produces. Accusative, comitative and instructive are
/// never generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Nominative,
    Genitive,
    Partitive,
    Inessive,
    Elative,
    Illative,
    Adessive,
    Ablative,
    Allative,
    Essive,
    Translative,
}

impl Case {
    pub const ALL: [Case; 11] = [
        Case::Nominative,
        Case::Genitive,
        Case::Partitive,
        Case::Inessive,
        Case::Elative,
        Case::Illative,
        Case::Adessive,
        Case::Ablative,
        Case::Allative,
        Case::Essive,
        Case::Translative,
    ];

    pub fn marker(self) -> &'static str {
        match self {
            Case::Nominative => "+Nom",
            Case::Genitive => "+Gen",
            Case::Partitive => "+Par",
            Case::Inessive => "+Ine",
            Case::Elative => "+Ela",
            Case::Illative => "+Ill",
            Case::Adessive => "+Ade",
            Case::Ablative => "+Abl",
            Case::Allative => "+All",
            Case::Essive => "+Ess",
            Case::Translative => "+Tra",
        }
    }
}

/// Enclitic particles. `A` and `O` are vowel-harmony placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clitic {
    Ko,
    Pa,
    Pas,
    Kaan,
    Han,
    Kin,
}

impl Clitic {
    /// Clitics that may come first. `pAs` only ever follows `hAn`.
    pub const FIRST: [Clitic; 5] = [Clitic::Ko, Clitic::Pa, Clitic::Kaan, Clitic::Han, Clitic::Kin];

    pub fn text(self) -> &'static str {
        match self {
            Clitic::Ko => "kO",
            Clitic::Pa => "pA",
            Clitic::Pas => "pAs",
            Clitic::Kaan => "kAAn",
            Clitic::Han => "hAn",
            Clitic::Kin => "kin",
        }
    }

    /// Clitics allowed directly after this one.
    pub fn followers(self) -> &'static [Clitic] {
        match self {
            Clitic::Han => &[Clitic::Kin, Clitic::Pas],
            Clitic::Kin => &[Clitic::Ko],
            _ => &[],
        }
    }
}
