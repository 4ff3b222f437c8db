//! Case inflection and surface cleanup.
//!
//! The inflection table turns `<N9>kala+Pl+Ine` into `<N9>kaloissA`. After
//! that the word still carries its lexical tag, maybe a clitic tail and `_`
//! placeholders; [`finish_surface`] removes all three.

use crate::WORD_SPACE;
use crate::engine::{Rewrite, RuleTable, apply, apply_traced};
use regex::Captures;
use std::borrow::Cow;

/// Raw table application. The lexical tag is kept.
pub fn inflect(table: &RuleTable, word: &str) -> String {
    apply(table, word)
}

/// The full inflection stage: table, then surface cleanup.
pub fn apply_inflection(table: &RuleTable, word: &str) -> Rewrite {
    let Rewrite { output, rule } = apply_traced(table, word);
    Rewrite { output: finish_surface(&output), rule }
}

/// Join clitics, strip the lexical tag, turn placeholders back into spaces.
pub fn finish_surface(word: &str) -> String {
    let joined = join_clitics(word);
    let untagged = remove_lexical_tag(&joined);
    restore_spaces(&untagged)
}

/// `kala_+kin` becomes `kalakin`, `kalaA+hAn+pAs` becomes `kalaAhAnpAs`.
pub fn join_clitics(word: &str) -> Cow<'_, str> {
    regex!(r"_?((?:\+(?:kO|pAs|pA|kAAn|hAn|kin))+)$")
        .replace(word, |caps: &Captures<'_>| caps[1].replace('+', ""))
}

pub fn remove_lexical_tag(word: &str) -> Cow<'_, str> {
    regex!(r"<[A-Z]\d+[A-M]?>").replace_all(word, "")
}

pub fn restore_spaces(word: &str) -> String {
    word.replace(WORD_SPACE, " ").trim().to_string()
}
