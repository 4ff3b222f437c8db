//! Rule records and compiled rule tables.
//!
//! A [`Rule`] is plain data: the three fields exactly as they appear in the
//! table source plus the source line for diagnostics. [`RuleTable::new`]
//! compiles both patterns of every rule up front, so a table either exists
//! fully compiled or not at all.
//!
//! ## Invariants
//!
//! - A [`RuleId`] indexes both `rules` and `compiled`; the two vectors always
//!   have the same length.
//! - Table order is priority order. Nothing reorders rules after loading.

use crate::errors::{FinformError, Result};
use regex::Regex;

/// Index of a rule within its table.
pub type RuleId = usize;

/// One rewrite rule as written in a table file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Decides whether the rule applies to a word.
    pub match_pattern: String,
    /// The part of the word that gets rewritten.
    pub search_pattern: String,
    /// Replacement text; `$1` / `${1}` refer to search-pattern groups.
    pub replacement: String,
    /// 1-based line in the table source.
    pub line: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct CompiledRule {
    pub matcher: Regex,
    pub search: Regex,
}

/// An ordered, compiled rule table. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
    compiled: Vec<CompiledRule>,
}

impl RuleTable {
    /// Compile `rules` in order. Fails on the first pattern that does not
    /// compile.
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        let compiled = rules.iter().map(compile_rule).collect::<Result<Vec<_>>>()?;
        Ok(RuleTable { rules, compiled })
    }

    pub fn empty() -> Self {
        RuleTable::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, id: RuleId) -> Option<&Rule> {
        self.rules.get(id)
    }

    pub(crate) fn compiled(&self) -> &[CompiledRule] {
        &self.compiled
    }
}

fn compile_rule(rule: &Rule) -> Result<CompiledRule> {
    let matcher = compile_pattern(rule.line, &rule.match_pattern)?;
    let search = compile_pattern(rule.line, &rule.search_pattern)?;
    Ok(CompiledRule { matcher, search })
}

fn compile_pattern(line: usize, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| FinformError::InvalidPattern { line, pattern: pattern.to_string(), source })
}
