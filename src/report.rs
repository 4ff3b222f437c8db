use finform::{Derivation, RuleId, RuleTable, RunMetrics, Tables};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

const HEADERS: [&str; 4] = ["LEXICAL", "GRADATED", "INFLECTED", "FINAL"];

/// Print every derivation as a table row, then a timing summary.
pub fn print_trace(derivations: &[Derivation], tables: &Tables, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Derived {} word forms", derivations.len()), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Derivations ━━━", ansi::GRAY));
    if derivations.is_empty() {
        println!("{}", palette.dim("  No word forms produced"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • No lemma in the word list has a paradigm inside --paradigms");
        println!("  • The word list is empty or has no inflecting nouns");
        println!("\n{}", palette.dim("  Tip: Set FINFORM_LOG=debug to see skipped word list rows"));
        return;
    }

    let rows: Vec<[&str; 4]> = derivations
        .iter()
        .map(|d| [d.lexical.as_str(), d.gradated.as_str(), d.inflected.as_str(), d.surface.as_str()])
        .collect();
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    println!("  {}  {}", palette.bold(pad_row(&HEADERS, &widths)), palette.bold("RULES"));
    for (row, derivation) in rows.iter().zip(derivations) {
        println!(
            "  {}  {}",
            palette.paint(pad_row(row, &widths), ansi::GREEN),
            palette.dim(rule_note(derivation, tables))
        );
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    print_timing(derivations, &palette);
    println!();
}

/// Print generated passphrases with their length in characters.
pub fn print_phrases(phrases: &[String], color: bool) {
    let palette = ansi::Palette::new(color);
    println!("{}", palette.paint("━━━ Passphrases ━━━", ansi::GRAY));
    for (idx, phrase) in phrases.iter().enumerate() {
        println!(
            "  {} {}  {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(palette.paint(phrase, ansi::GREEN)),
            palette.dim(format!("{} chars", phrase.chars().count())),
        );
    }
}

fn pad_row(cells: &[&str; 4], widths: &[usize; 4]) -> String {
    cells.iter().zip(widths).map(|(cell, &width)| format!("{cell:<width$}")).collect::<Vec<_>>().join("  ")
}

fn rule_note(derivation: &Derivation, tables: &Tables) -> String {
    let line = |table: &RuleTable, id: Option<RuleId>| match id.and_then(|id| table.get(id)) {
        Some(rule) => rule.line.to_string(),
        None => "-".to_string(),
    };
    format!(
        "g:{} i:{}",
        line(&tables.gradation, derivation.gradation_rule()),
        line(&tables.inflection, derivation.inflection_rule())
    )
}

fn print_timing(derivations: &[Derivation], palette: &ansi::Palette) {
    let mut total = RunMetrics::default();
    for derivation in derivations {
        total += &derivation.metrics;
    }
    let passthrough = derivations.iter().filter(|d| d.metrics.inflection.ran && d.inflection_rule().is_none()).count();

    println!(
        "  Total: {}  │  {}",
        palette.paint(format!("{:?}", total.total), ansi::GREEN),
        total
            .stages()
            .iter()
            .map(|(name, stage)| format!("{}: {}", name, palette.dim(format!("{:?}", stage.duration))))
            .collect::<Vec<_>>()
            .join("  │  ")
    );
    if passthrough > 0 {
        println!(
            "  {} {}",
            palette.paint(passthrough.to_string(), ansi::YELLOW),
            palette.paint("words matched no inflection rule", ansi::BLUE)
        );
    }
}
