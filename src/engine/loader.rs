//! Rule table text format.
//!
//! One rule per line: match pattern, search pattern, replacement. The first
//! two fields end at whitespace; the replacement is the trimmed rest of the
//! line. Lines starting with `#` and blank lines are skipped.

use super::rule_table::{Rule, RuleTable};
use crate::errors::{FinformError, Result};
use std::fs;
use std::path::Path;

/// Parse a whole table. No partial table is returned on error.
pub fn parse_rules(source: &str) -> Result<RuleTable> {
    let mut rules = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        if is_skipped(raw) {
            continue;
        }
        rules.push(parse_rule_line(idx + 1, raw)?);
    }

    let table = RuleTable::new(rules)?;
    tracing::debug!(rules = table.len(), "rule table loaded");
    Ok(table)
}

/// Read a UTF-8 table file and parse it.
pub fn load_rules(path: impl AsRef<Path>) -> Result<RuleTable> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|err| FinformError::io(path, err))?;
    let table = parse_rules(&source)?;
    tracing::debug!(path = %path.display(), rules = table.len(), "rule file loaded");
    Ok(table)
}

fn is_skipped(raw: &str) -> bool {
    raw.starts_with('#') || raw.trim().is_empty()
}

fn parse_rule_line(line: usize, raw: &str) -> Result<Rule> {
    let (match_pattern, rest) = next_field(raw).ok_or_else(|| malformed(line, raw))?;
    let (search_pattern, rest) = next_field(rest).ok_or_else(|| malformed(line, raw))?;
    let replacement = rest.trim();
    if replacement.is_empty() {
        return Err(malformed(line, raw));
    }

    Ok(Rule {
        match_pattern: match_pattern.to_string(),
        search_pattern: search_pattern.to_string(),
        replacement: replacement.to_string(),
        line,
    })
}

fn next_field(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    Some((&s[..end], &s[end..]))
}

fn malformed(line: usize, raw: &str) -> FinformError {
    FinformError::MalformedRule { line, content: raw.to_string() }
}
