use super::rule_table::{RuleId, RuleTable};

/// Output of one table application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub output: String,
    /// The rule that fired, if any.
    pub rule: Option<RuleId>,
}

impl Rewrite {
    pub fn unchanged(word: &str) -> Self {
        Rewrite { output: word.to_string(), rule: None }
    }
}

/// Apply the first matching rule of `table` to `word`.
pub fn apply(table: &RuleTable, word: &str) -> String {
    apply_traced(table, word).output
}

/// Like [`apply`], but also reports which rule fired.
///
/// Only the first rule whose match pattern hits is used, even when its search
/// pattern then finds nothing. Every occurrence of that rule's search pattern
/// is replaced.
pub fn apply_traced(table: &RuleTable, word: &str) -> Rewrite {
    let Some(id) = table.compiled().iter().position(|rule| rule.matcher.is_match(word)) else {
        tracing::trace!(word, "no rule matched");
        return Rewrite::unchanged(word);
    };

    let compiled = &table.compiled()[id];
    let rule = &table.rules()[id];
    let output = compiled.search.replace_all(word, rule.replacement.as_str()).into_owned();
    tracing::trace!(line = rule.line, word, output = %output, "rule fired");
    Rewrite { output, rule: Some(id) }
}
