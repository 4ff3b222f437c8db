//! Consonant gradation.

use crate::WORD_SPACE;
use crate::engine::{Rewrite, RuleTable, apply, apply_traced};
use std::borrow::Cow;

/// Rewrite `t+Sg` to `+Pl` for plural-only lemmas such as `aivot`.
///
/// Multi-word lemmas are left alone.
pub fn canonicalize_plural_only(word: &str) -> Cow<'_, str> {
    if word.contains(WORD_SPACE) {
        return Cow::Borrowed(word);
    }
    regex!(r"t\+Sg").replace(word, "+Pl")
}

/// Raw table application, without the plural-only pre-pass.
pub fn gradate(table: &RuleTable, word: &str) -> String {
    apply(table, word)
}

/// The full gradation stage.
pub fn apply_gradation(table: &RuleTable, word: &str) -> Rewrite {
    let word = canonicalize_plural_only(word);
    apply_traced(table, &word)
}
