//! Rule tables and the first-match rewrite engine.
//!
//! Both linguistic tables (consonant gradation and case inflection) are plain
//! text files of rewrite rules. This module loads them, compiles their
//! patterns and applies them to tagged words. It knows nothing about Finnish:
//! the stages in `crate::stages` decide which table runs when.
//!
//! ## How the parts work together
//!
//! ```text
//! table source (text) ── parse_rules ──> Vec<Rule>          (loader.rs)
//!                                           │
//!                                           v
//!                               RuleTable::new              (rule_table.rs)
//!                                 - compile match/search regexes
//!                                 - keep file order as priority
//!                                           │
//! tagged word ───────────────> apply / apply_traced         (rewriter.rs)
//!                                 - first rule whose match pattern hits
//!                                 - replace every occurrence of search
//!                                 - no hit: word passes through
//!                                           │
//!                                           v
//!                                  Rewrite { output, rule }
//! ```
//!
//! ## Responsibilities by module
//!
//! - `loader.rs`: line format, comments, error reporting with line numbers.
//! - `rule_table.rs`: `Rule` records and the compiled, read-only `RuleTable`.
//! - `rewriter.rs`: the single-rule, first-match application step.
//! - `metrics.rs`: per-stage timing and rule ids for one derivation.
//!
//! ## Debugging
//!
//! Rule firing is logged through `tracing` at `trace` level. Run the CLI with
//! `FINFORM_LOG=finform=trace` to see which line of which table fired.

#[path = "engine/loader.rs"]
mod loader;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/rewriter.rs"]
mod rewriter;
#[path = "engine/rule_table.rs"]
mod rule_table;

pub use loader::{load_rules, parse_rules};
pub use metrics::{RunMetrics, StageMetrics};
pub use rewriter::{Rewrite, apply, apply_traced};
pub use rule_table::{Rule, RuleId, RuleTable};
