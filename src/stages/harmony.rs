//! Vowel harmony.
//!
//! Suffixes in the tables are written with the placeholders `A` and `O`. The
//! last harmony vowel of the word decides how they are spelled: `ä`/`ö` make
//! it front, `a`/`o`/`u` make it back. Words with only neutral vowels (`e`,
//! `i`, `y`) fall back to a configured default.

/// Harmony class of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Harmony {
    #[default]
    Back,
    Front,
}

impl Harmony {
    fn vowels(self) -> (char, char) {
        match self {
            Harmony::Back => ('a', 'o'),
            Harmony::Front => ('ä', 'ö'),
        }
    }
}

/// Scan backward for the last harmony vowel. `None` if there is none.
pub fn determine_harmony(word: &str) -> Option<Harmony> {
    word.chars().rev().find_map(|c| match c {
        'ä' | 'ö' => Some(Harmony::Front),
        'a' | 'o' | 'u' => Some(Harmony::Back),
        _ => None,
    })
}

/// Resolve `A` and `O` placeholders.
pub fn apply_vowel_harmony(word: &str, neutral: Harmony) -> String {
    let (a, o) = determine_harmony(word).unwrap_or(neutral).vowels();
    word.chars()
        .map(|c| match c {
            'A' => a,
            'O' => o,
            other => other,
        })
        .collect()
}
