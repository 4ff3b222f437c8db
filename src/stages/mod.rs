//! The word-form stages, in the order the generator runs them:
//! gradation, inflection, post-processing, vowel harmony.
//!
//! Every stage is a pure function from string to string. The two
//! table-driven stages also report which rule fired.

mod gradation;
mod harmony;
mod inflection;
mod postprocess;

#[cfg(test)]
mod tests;

pub use gradation::{apply_gradation, canonicalize_plural_only, gradate};
pub use harmony::{Harmony, apply_vowel_harmony, determine_harmony};
pub use inflection::{apply_inflection, finish_surface, inflect, join_clitics, remove_lexical_tag, restore_spaces};
pub use postprocess::apply_postprocessing;
