//! Randomness behind every choice the generator makes.
//!
//! Passphrases are only as strong as the draws behind them, so production
//! code uses [`OsRandom`], backed by the operating system CSPRNG. Tests swap
//! in [`ScriptedRandom`] to pin each choice.

use rand::Rng;
use rand::rngs::OsRng;

pub trait RandomSource {
    /// Uniform index in `0..upper`. Callers never pass zero.
    fn below(&mut self, upper: usize) -> usize;

    /// `true` with the given probability in percent. 0 and 100 do not draw.
    fn percent(&mut self, probability: u8) -> bool {
        match probability {
            0 => false,
            100..=u8::MAX => true,
            p => self.below(100) < usize::from(p),
        }
    }
}

/// Pick one element uniformly. `None` for an empty slice.
pub fn choose<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.below(items.len()))
}

/// Operating-system randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn below(&mut self, upper: usize) -> usize {
        OsRng.gen_range(0..upper)
    }
}

/// Replays a fixed list of values, wrapping around at the end. Each value is
/// reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<usize>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        ScriptedRandom { values: values.into(), next: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, upper: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value % upper
    }
}
