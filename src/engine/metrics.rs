//! Derivation metrics.
//!
//! Collected by `Generator::run` for every word. They are cheap (one
//! `Instant::now` per stage) and surface in the CLI `--trace` report.
//!
//! ## Design notes
//!
//! - `StageMetrics::rule` is only ever set for the two table-driven stages.
//! - A stage that was skipped (see `StageMask`) keeps its default metrics.

use super::rule_table::RuleId;
use std::ops::AddAssign;
use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for one derivation.
    pub total: Duration,
    pub gradation: StageMetrics,
    pub inflection: StageMetrics,
    pub postprocess: StageMetrics,
    pub harmony: StageMetrics,
}

/// Timing and outcome of a single stage.
#[derive(Debug, Default, Clone, Copy)]
pub struct StageMetrics {
    /// Elapsed time for the stage.
    pub duration: Duration,
    /// Rule that fired, for table-driven stages.
    pub rule: Option<RuleId>,
    /// Whether the stage ran at all.
    pub ran: bool,
}

impl StageMetrics {
    pub fn new(duration: Duration, rule: Option<RuleId>) -> Self {
        StageMetrics { duration, rule, ran: true }
    }
}

impl RunMetrics {
    /// Stages in pipeline order, with their display names.
    pub fn stages(&self) -> [(&'static str, &StageMetrics); 4] {
        [
            ("gradation", &self.gradation),
            ("inflection", &self.inflection),
            ("postprocess", &self.postprocess),
            ("harmony", &self.harmony),
        ]
    }
}

// Summing metrics over a batch keeps durations; rule ids are per word only.
impl AddAssign<&RunMetrics> for RunMetrics {
    fn add_assign(&mut self, other: &RunMetrics) {
        self.total += other.total;
        self.gradation.duration += other.gradation.duration;
        self.inflection.duration += other.inflection.duration;
        self.postprocess.duration += other.postprocess.duration;
        self.harmony.duration += other.harmony.duration;
    }
}
