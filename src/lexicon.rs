//! Lemmas and the Kotus word list.
//!
//! The word list is tab separated with a header row. Only three columns are
//! read: `Hakusana` (the lemma), `Sanaluokka` (comma separated word classes)
//! and `Taivutustiedot` (comma separated paradigm codes such as `10*F`).
//!
//! ## Invariants
//!
//! - A [`Lemma`] is either non-inflecting or has at least one paradigm code.
//! - Paradigm code `99` and an empty inflection field both mean
//!   non-inflecting.

use crate::errors::{FinformError, Result};
use crate::NOMINAL_CLASS;
use std::fmt;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

/// Paradigm number Kotus uses for words that do not inflect.
pub const NON_INFLECTING_CODE: u16 = 99;

/// Small word list embedded for running without a data file.
pub const SAMPLE_WORD_LIST: &str = include_str!("../data/sample-lexicon.tsv");

const LEMMA_COLUMN: &str = "Hakusana";
const WORD_CLASS_COLUMN: &str = "Sanaluokka";
const INFLECTION_COLUMN: &str = "Taivutustiedot";

// --- Paradigm codes ----------------------------------------------------------

/// An inflection paradigm with an optional gradation class, e.g. `10*F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParadigmCode {
    pub number: u16,
    pub gradation: Option<char>,
}

impl ParadigmCode {
    pub fn new(number: u16, gradation: Option<char>) -> Self {
        ParadigmCode { number, gradation }
    }

    /// Parse `N` or `N*L`. Parentheses are ignored; anything not starting
    /// with a digit is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned: String = raw.chars().filter(|c| !matches!(c, '(' | ')')).collect();
        let cleaned = cleaned.trim();
        if !cleaned.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }

        let (digits, letter) = match cleaned.split_once('*') {
            Some((digits, letter)) => (digits, Some(letter.trim())),
            None => (cleaned, None),
        };
        let number = digits.trim().parse().ok()?;
        let gradation = match letter {
            None => None,
            Some(letter) => {
                let mut chars = letter.chars();
                match (chars.next(), chars.next()) {
                    (Some(c @ 'A'..='M'), None) => Some(c),
                    _ => return None,
                }
            }
        };
        Some(ParadigmCode { number, gradation })
    }

    pub fn is_non_inflecting(&self) -> bool {
        self.number == NON_INFLECTING_CODE
    }

    /// Lexical tag used in tagged words, e.g. `<N10F>`.
    pub fn tag(&self) -> String {
        match self.gradation {
            Some(letter) => format!("<{NOMINAL_CLASS}{}{letter}>", self.number),
            None => format!("<{NOMINAL_CLASS}{}>", self.number),
        }
    }
}

impl fmt::Display for ParadigmCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.gradation {
            Some(letter) => write!(f, "{}*{letter}", self.number),
            None => write!(f, "{}", self.number),
        }
    }
}

// --- Lemmas ------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lemma {
    base: String,
    word_classes: Vec<String>,
    paradigms: Vec<ParadigmCode>,
}

impl Lemma {
    /// An inflecting lemma. Fails without at least one paradigm code.
    pub fn new(base: impl Into<String>, paradigms: Vec<ParadigmCode>) -> Result<Self> {
        let base = base.into();
        let paradigms: Vec<_> = paradigms.into_iter().filter(|code| !code.is_non_inflecting()).collect();
        if paradigms.is_empty() {
            return Err(FinformError::EmptyParadigmSet { lemma: base });
        }
        Ok(Lemma { base, word_classes: Vec::new(), paradigms })
    }

    pub fn non_inflecting(base: impl Into<String>) -> Self {
        Lemma { base: base.into(), word_classes: Vec::new(), paradigms: Vec::new() }
    }

    pub fn with_word_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.word_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Build a lemma from the three raw Kotus fields.
    pub fn from_kotus_fields(base: &str, word_classes: &str, inflection: &str) -> Result<Self> {
        let classes = split_list(word_classes);
        let raw_codes = split_list(inflection);
        if raw_codes.is_empty() {
            return Ok(Lemma::non_inflecting(base).with_word_classes(classes));
        }

        let codes: Vec<_> = raw_codes.iter().filter_map(|raw| ParadigmCode::parse(raw)).collect();
        if !codes.is_empty() && codes.iter().all(ParadigmCode::is_non_inflecting) {
            return Ok(Lemma::non_inflecting(base).with_word_classes(classes));
        }
        Ok(Lemma::new(base, codes)?.with_word_classes(classes))
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn word_classes(&self) -> &[String] {
        &self.word_classes
    }

    pub fn paradigms(&self) -> &[ParadigmCode] {
        &self.paradigms
    }

    pub fn is_non_inflecting(&self) -> bool {
        self.paradigms.is_empty()
    }

    /// Paradigm codes whose number falls inside `range`.
    pub fn paradigms_in(&self, range: &RangeInclusive<u16>) -> Vec<ParadigmCode> {
        self.paradigms.iter().copied().filter(|code| range.contains(&code.number)).collect()
    }

    /// Bound forms such as `aero-`.
    pub fn is_prefix(&self) -> bool {
        self.base.len() > 1 && self.base.ends_with('-')
    }

    /// Bound forms such as `-lainen`.
    pub fn is_suffix(&self) -> bool {
        self.base.len() > 1 && self.base.starts_with('-')
    }
}

fn split_list(field: &str) -> Vec<&str> {
    field.split(',').map(str::trim).filter(|item| !item.is_empty()).collect()
}

// --- Word lists --------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    lemmas: Vec<Lemma>,
    skipped: usize,
}

impl Lexicon {
    pub fn new(lemmas: Vec<Lemma>) -> Self {
        Lexicon { lemmas, skipped: 0 }
    }

    /// Parse a Kotus TSV export. Rows without a usable paradigm code are
    /// skipped and counted.
    pub fn from_tsv_str(source: &str) -> Result<Self> {
        let mut lines = source.lines().enumerate();
        let Some((_, header)) = lines.next() else {
            return Err(FinformError::MalformedWordList { line: 1, message: "missing header row".to_string() });
        };
        let columns = Columns::from_header(header)?;

        let mut lemmas = Vec::new();
        let mut skipped = 0;
        for (idx, row) in lines {
            if row.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = row.split('\t').collect();
            let field = |column: usize| fields.get(column).map_or("", |value| value.trim());

            let base = field(columns.lemma);
            if base.is_empty() {
                skipped += 1;
                continue;
            }
            match Lemma::from_kotus_fields(base, field(columns.word_class), field(columns.inflection)) {
                Ok(lemma) => lemmas.push(lemma),
                Err(FinformError::EmptyParadigmSet { lemma }) => {
                    tracing::debug!(line = idx + 1, lemma = %lemma, "skipping lemma without usable paradigm code");
                    skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        tracing::debug!(lemmas = lemmas.len(), skipped, "word list loaded");
        Ok(Lexicon { lemmas, skipped })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| FinformError::io(path, err))?;
        Lexicon::from_tsv_str(&source)
    }

    /// The embedded sample word list.
    pub fn sample() -> Result<Self> {
        Lexicon::from_tsv_str(SAMPLE_WORD_LIST)
    }

    pub fn lemmas(&self) -> &[Lemma] {
        &self.lemmas
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }

    /// Rows dropped while reading the word list.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Inflecting, free-standing lemmas with a paradigm inside `range`.
    pub fn inflecting_in(&self, range: RangeInclusive<u16>) -> Lexicon {
        self.filter(|lemma| {
            !lemma.is_non_inflecting() && !lemma.is_prefix() && !lemma.is_suffix() && !lemma.paradigms_in(&range).is_empty()
        })
    }

    pub fn non_inflecting(&self) -> Lexicon {
        self.filter(|lemma| lemma.is_non_inflecting() && !lemma.is_prefix() && !lemma.is_suffix())
    }

    pub fn prefix_words(&self) -> Lexicon {
        self.filter(Lemma::is_prefix)
    }

    pub fn suffix_words(&self) -> Lexicon {
        self.filter(Lemma::is_suffix)
    }

    /// Lemmas carrying at least one of `classes`.
    pub fn with_word_class(&self, classes: &[&str]) -> Lexicon {
        self.filter(|lemma| lemma.word_classes.iter().any(|class| classes.contains(&class.as_str())))
    }

    fn filter(&self, keep: impl Fn(&Lemma) -> bool) -> Lexicon {
        Lexicon { lemmas: self.lemmas.iter().filter(|lemma| keep(*lemma)).cloned().collect(), skipped: 0 }
    }
}

struct Columns {
    lemma: usize,
    word_class: usize,
    inflection: usize,
}

impl Columns {
    fn from_header(header: &str) -> Result<Self> {
        let names: Vec<&str> = header.split('\t').map(str::trim).collect();
        let find = |name: &str| {
            names.iter().position(|column| *column == name).ok_or_else(|| FinformError::MalformedWordList {
                line: 1,
                message: format!("missing column {name:?}"),
            })
        };
        Ok(Columns { lemma: find(LEMMA_COLUMN)?, word_class: find(WORD_CLASS_COLUMN)?, inflection: find(INFLECTION_COLUMN)? })
    }
}
