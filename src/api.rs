use crate::engine::{Rewrite, RuleId, RuleTable, RunMetrics, StageMetrics, load_rules, parse_rules};
use crate::errors::{FinformError, Result};
use crate::lexicon::{Lemma, ParadigmCode};
use crate::random::{OsRandom, RandomSource, choose};
use crate::stages::{
    Harmony, apply_gradation, apply_inflection, apply_postprocessing, apply_vowel_harmony, finish_surface,
};
use crate::{Case, Clitic, GrammaticalNumber, WORD_SPACE};
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Instant;

/// Shipped consonant gradation table (Kotus classes A to M).
pub const GRADATION_RULES: &str = include_str!("../data/gradation-patterns.txt");
/// Shipped case inflection table (paradigms 1 to 15).
pub const INFLECTION_RULES: &str = include_str!("../data/inflection-patterns.txt");

bitflags::bitflags! {
    /// Stages of the word-form pipeline.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StageMask: u8 {
        const GRADATION = 1 << 0;
        const INFLECTION = 1 << 1;
        const POSTPROCESS = 1 << 2;
        const HARMONY = 1 << 3;
    }
}

/// Generation options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Only paradigm numbers in this range are used for inflecting lemmas.
    pub paradigm_range: RangeInclusive<u16>,
    /// Chance in percent that a word gets a clitic.
    pub clitic_probability: u8,
    /// Chance in percent that `hAn` or `kin` gets a second clitic.
    pub second_clitic_probability: u8,
    /// Harmony for words without a harmony vowel.
    pub neutral_harmony: Harmony,
    /// Stages that still run for non-inflecting lemmas.
    pub non_inflecting: StageMask,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            paradigm_range: 1..=15,
            clitic_probability: 10,
            second_clitic_probability: 10,
            neutral_harmony: Harmony::Back,
            non_inflecting: StageMask::POSTPROCESS | StageMask::HARMONY,
        }
    }
}

impl Options {
    pub fn validate(&self) -> Result<()> {
        if self.paradigm_range.is_empty() {
            return Err(FinformError::invalid_option(format!(
                "paradigm range {}-{} is empty",
                self.paradigm_range.start(),
                self.paradigm_range.end()
            )));
        }
        for (name, value) in
            [("clitic probability", self.clitic_probability), ("second clitic probability", self.second_clitic_probability)]
        {
            if value > 100 {
                return Err(FinformError::invalid_option(format!("{name} {value} is above 100")));
            }
        }
        Ok(())
    }
}

/// The two rule tables a [`Generator`] runs.
#[derive(Debug, Clone)]
pub struct Tables {
    pub gradation: RuleTable,
    pub inflection: RuleTable,
}

impl Tables {
    pub fn new(gradation: RuleTable, inflection: RuleTable) -> Self {
        Tables { gradation, inflection }
    }

    /// Parse the shipped tables.
    pub fn embedded() -> Result<Self> {
        Ok(Tables { gradation: parse_rules(GRADATION_RULES)?, inflection: parse_rules(INFLECTION_RULES)? })
    }

    /// Load tables from files, falling back to the shipped table for any
    /// path not given.
    pub fn load(gradation: Option<&Path>, inflection: Option<&Path>) -> Result<Self> {
        let gradation = match gradation {
            Some(path) => load_rules(path)?,
            None => parse_rules(GRADATION_RULES)?,
        };
        let inflection = match inflection {
            Some(path) => load_rules(path)?,
            None => parse_rules(INFLECTION_RULES)?,
        };
        Ok(Tables { gradation, inflection })
    }
}

/// Every intermediate form of one word, plus timings.
#[derive(Debug, Clone)]
pub struct Derivation {
    /// Tagged input, e.g. `<N1A>baarimikko+Sg+Gen`.
    pub lexical: String,
    pub gradated: String,
    /// Inflected and cleaned up: no tag, clitics joined, spaces restored.
    pub inflected: String,
    pub postprocessed: String,
    pub surface: String,
    pub metrics: RunMetrics,
}

impl Derivation {
    pub fn gradation_rule(&self) -> Option<RuleId> {
        self.metrics.gradation.rule
    }

    pub fn inflection_rule(&self) -> Option<RuleId> {
        self.metrics.inflection.rule
    }

    /// `false` when a number or case marker survived, i.e. the tables had no
    /// rule for this combination.
    pub fn is_complete(&self) -> bool {
        !self.surface.contains('+')
    }
}

/// Produces inflected word forms from lemmas.
///
/// Holds the rule tables and options; shared freely across threads.
#[derive(Debug, Clone)]
pub struct Generator {
    tables: Tables,
    options: Options,
}

impl Generator {
    pub fn new(tables: Tables, options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Generator { tables, options })
    }

    /// Shipped tables with default options.
    pub fn with_defaults() -> Result<Self> {
        Generator::new(Tables::embedded()?, Options::default())
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Build a random tagged word for `lemma`.
    ///
    /// Non-inflecting lemmas come back as their base with `_` for spaces.
    /// `None` if no paradigm of the lemma is inside the configured range.
    pub fn tag_word<R: RandomSource + ?Sized>(&self, lemma: &Lemma, rng: &mut R) -> Option<String> {
        if lemma.is_non_inflecting() {
            return Some(lemma.base().replace(' ', WORD_SPACE));
        }

        let codes = lemma.paradigms_in(&self.options.paradigm_range);
        let code = *choose(rng, &codes)?;
        let number = *choose(rng, &GrammaticalNumber::ALL)?;
        let case = *choose(rng, &Case::ALL)?;
        let clitics = self.draw_clitics(rng);
        Some(compose_tagged_word(lemma.base(), code, number, case, &clitics))
    }

    fn draw_clitics<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<Clitic> {
        let mut clitics = Vec::new();
        if !rng.percent(self.options.clitic_probability) {
            return clitics;
        }
        let Some(&first) = choose(rng, &Clitic::FIRST) else {
            return clitics;
        };
        clitics.push(first);

        let followers = first.followers();
        if !followers.is_empty() && rng.percent(self.options.second_clitic_probability) {
            if let Some(&second) = choose(rng, followers) {
                clitics.push(second);
            }
        }
        clitics
    }

    /// Run a tagged word through all four stages.
    pub fn run(&self, tagged: &str) -> Derivation {
        self.run_stages(tagged, StageMask::all())
    }

    /// Tag `lemma` and derive its surface form.
    pub fn derive<R: RandomSource + ?Sized>(&self, lemma: &Lemma, rng: &mut R) -> Option<Derivation> {
        let tagged = self.tag_word(lemma, rng)?;
        let stages = if lemma.is_non_inflecting() { self.options.non_inflecting } else { StageMask::all() };
        Some(self.run_stages(&tagged, stages))
    }

    /// Surface form for `lemma`. Incomplete derivations are dropped.
    pub fn generate_form<R: RandomSource + ?Sized>(&self, lemma: &Lemma, rng: &mut R) -> Option<String> {
        self.derive(lemma, rng).and_then(complete_surface)
    }

    /// `count` derivations from lemmas drawn with replacement.
    pub fn derive_batch<R: RandomSource + ?Sized>(&self, lemmas: &[Lemma], count: usize, rng: &mut R) -> Vec<Derivation> {
        let eligible = self.eligible(lemmas);
        if eligible.is_empty() {
            tracing::warn!(lemmas = lemmas.len(), "no lemma has a paradigm in the configured range");
            return Vec::new();
        }
        (0..count)
            .filter_map(|_| {
                let lemma = choose(rng, &eligible)?;
                self.derive(lemma, rng)
            })
            .collect()
    }

    pub fn generate_forms<R: RandomSource + ?Sized>(&self, lemmas: &[Lemma], count: usize, rng: &mut R) -> Vec<String> {
        self.derive_batch(lemmas, count, rng).into_iter().filter_map(complete_surface).collect()
    }

    /// Like [`Generator::generate_forms`], spread over the rayon pool. Each
    /// worker draws from its own [`OsRandom`]; output order is unspecified.
    pub fn generate_forms_parallel(&self, lemmas: &[Lemma], count: usize) -> Vec<String> {
        let eligible = self.eligible(lemmas);
        if eligible.is_empty() {
            tracing::warn!(lemmas = lemmas.len(), "no lemma has a paradigm in the configured range");
            return Vec::new();
        }
        (0..count)
            .into_par_iter()
            .map_init(
                || OsRandom,
                |rng, _| {
                    let lemma = choose(rng, &eligible)?;
                    self.generate_form(lemma, rng)
                },
            )
            .flatten()
            .collect()
    }

    fn eligible<'a>(&self, lemmas: &'a [Lemma]) -> Vec<&'a Lemma> {
        lemmas
            .iter()
            .filter(|lemma| lemma.is_non_inflecting() || !lemma.paradigms_in(&self.options.paradigm_range).is_empty())
            .collect()
    }

    fn run_stages(&self, tagged: &str, stages: StageMask) -> Derivation {
        let started = Instant::now();

        let (gradated, gradation) =
            run_stage(stages.contains(StageMask::GRADATION), tagged, |word| apply_gradation(&self.tables.gradation, word));
        let (mut inflected, inflection) = run_stage(stages.contains(StageMask::INFLECTION), &gradated, |word| {
            apply_inflection(&self.tables.inflection, word)
        });
        if !inflection.ran {
            inflected = finish_surface(&inflected);
        }
        let (postprocessed, postprocess) = run_stage(stages.contains(StageMask::POSTPROCESS), &inflected, |word| {
            Rewrite { output: apply_postprocessing(word), rule: None }
        });
        let (surface, harmony) = run_stage(stages.contains(StageMask::HARMONY), &postprocessed, |word| Rewrite {
            output: apply_vowel_harmony(word, self.options.neutral_harmony),
            rule: None,
        });

        let metrics = RunMetrics { total: started.elapsed(), gradation, inflection, postprocess, harmony };
        Derivation { lexical: tagged.to_string(), gradated, inflected, postprocessed, surface, metrics }
    }
}

/// Surface forms of the complete derivations, in order. Incomplete ones are
/// dropped, as in [`Generator::generate_forms`].
pub fn surfaces(derivations: &[Derivation]) -> Vec<String> {
    derivations.iter().filter(|derivation| keep_form(derivation)).map(|derivation| derivation.surface.clone()).collect()
}

fn complete_surface(derivation: Derivation) -> Option<String> {
    keep_form(&derivation).then_some(derivation.surface)
}

fn keep_form(derivation: &Derivation) -> bool {
    if !derivation.is_complete() {
        tracing::debug!(lexical = %derivation.lexical, surface = %derivation.surface, "dropping incomplete form");
        return false;
    }
    true
}

fn run_stage(enabled: bool, word: &str, stage: impl FnOnce(&str) -> Rewrite) -> (String, StageMetrics) {
    if !enabled {
        return (word.to_string(), StageMetrics::default());
    }
    let started = Instant::now();
    let Rewrite { output, rule } = stage(word);
    (output, StageMetrics::new(started.elapsed(), rule))
}

/// `<N10F>pöytä+Sg+Gen+kin`-style tagged word.
pub fn compose_tagged_word(
    base: &str,
    code: ParadigmCode,
    number: GrammaticalNumber,
    case: Case,
    clitics: &[Clitic],
) -> String {
    let mut word = code.tag();
    word.push_str(&base.replace(' ', WORD_SPACE));
    word.push_str(number.marker());
    word.push_str(case.marker());
    for clitic in clitics {
        word.push('+');
        word.push_str(clitic.text());
    }
    word
}

/// Pick `words` forms at random and join them.
pub fn passphrase<S, R>(forms: &[S], words: usize, rng: &mut R) -> String
where
    S: AsRef<str>,
    R: RandomSource + ?Sized,
{
    let picked: Vec<&str> = (0..words).filter_map(|_| choose(rng, forms).map(|form| form.as_ref())).collect();
    join_passphrase(&picked)
}

/// Drop spaces inside each word, then join the words with single spaces.
pub fn join_passphrase<S: AsRef<str>>(words: &[S]) -> String {
    words.iter().map(|word| word.as_ref().replace(' ', "")).collect::<Vec<_>>().join(" ")
}
