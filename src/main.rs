mod report;

use finform::{FinformError, Generator, Harmony, Lexicon, Options, OsRandom, Tables, passphrase, surfaces};
use std::io::{self, IsTerminal};
use std::ops::RangeInclusive;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_COUNT: usize = 50;
const DEFAULT_PHRASES: usize = 4;
const DEFAULT_PHRASE_LENGTH: usize = 4;
const LOG_ENV: &str = "FINFORM_LOG";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    init_tracing();

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn run(config: &CliConfig) -> finform::Result<()> {
    let tables = Tables::load(config.gradation_rules.as_deref(), config.inflection_rules.as_deref())?;
    let generator = Generator::new(tables, config.options.clone())?;
    let lexicon = match &config.words {
        Some(path) => Lexicon::load(path)?,
        None => Lexicon::sample()?,
    };
    let pool = lexicon.inflecting_in(config.options.paradigm_range.clone());
    tracing::info!(lemmas = lexicon.len(), eligible = pool.len(), skipped = lexicon.skipped(), "word list ready");

    let mut rng = OsRandom;
    let forms: Vec<String> = if config.trace {
        let derivations = generator.derive_batch(pool.lemmas(), config.count, &mut rng);
        report::print_trace(&derivations, generator.tables(), config.color);
        surfaces(&derivations)
    } else if config.parallel {
        generator.generate_forms_parallel(pool.lemmas(), config.count)
    } else {
        generator.generate_forms(pool.lemmas(), config.count, &mut rng)
    };

    if forms.is_empty() {
        return Err(FinformError::invalid_option("no word forms could be generated from the word list"));
    }

    let phrases: Vec<String> =
        (0..config.phrases).map(|_| passphrase(&forms, config.phrase_length, &mut rng)).collect();
    report::print_phrases(&phrases, config.color);
    Ok(())
}

struct CliConfig {
    words: Option<PathBuf>,
    count: usize,
    phrases: usize,
    phrase_length: usize,
    options: Options,
    gradation_rules: Option<PathBuf>,
    inflection_rules: Option<PathBuf>,
    trace: bool,
    parallel: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    parse_args_from(std::env::args().skip(1))
}

fn parse_args_from(args: impl IntoIterator<Item = String>) -> Result<CliConfig, String> {
    let mut config = CliConfig {
        words: None,
        count: DEFAULT_COUNT,
        phrases: DEFAULT_PHRASES,
        phrase_length: DEFAULT_PHRASE_LENGTH,
        options: Options::default(),
        gradation_rules: None,
        inflection_rules: None,
        trace: false,
        parallel: false,
        color: io::stdout().is_terminal(),
    };
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg, None),
        };
        let mut value = || match inline.clone() {
            Some(value) => Ok(value),
            None => args.next().ok_or_else(|| format!("error: {flag} expects a value")),
        };

        match flag.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("finform {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => config.color = true,
            "--no-color" => config.color = false,
            "--trace" => config.trace = true,
            "--parallel" => config.parallel = true,
            "--words" => config.words = Some(PathBuf::from(value()?)),
            "--gradation-rules" => config.gradation_rules = Some(PathBuf::from(value()?)),
            "--inflection-rules" => config.inflection_rules = Some(PathBuf::from(value()?)),
            "-n" | "--count" => config.count = parse_count(&flag, &value()?)?,
            "--phrases" => config.phrases = parse_count(&flag, &value()?)?,
            "--phrase-length" => config.phrase_length = parse_count(&flag, &value()?)?,
            "--paradigms" => config.options.paradigm_range = parse_range(&value()?)?,
            "--clitics" => config.options.clitic_probability = parse_percent(&flag, &value()?)?,
            "--second-clitic" => config.options.second_clitic_probability = parse_percent(&flag, &value()?)?,
            "--neutral-harmony" => config.options.neutral_harmony = parse_harmony(&value()?)?,
            _ if flag.starts_with('-') => {
                return Err(format!("error: unknown option '{flag}'"));
            }
            _ => {
                return Err(format!("error: unexpected argument '{flag}'\n\n{}", help_text()));
            }
        }
    }

    config.options.validate().map_err(|err| format!("error: {err}"))?;
    Ok(config)
}

fn parse_count(flag: &str, value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) | Err(_) => Err(format!("error: invalid {flag} '{value}' (expected a positive integer)")),
        Ok(count) => Ok(count),
    }
}

fn parse_percent(flag: &str, value: &str) -> Result<u8, String> {
    match value.parse::<u8>() {
        Ok(percent) if percent <= 100 => Ok(percent),
        _ => Err(format!("error: invalid {flag} '{value}' (expected 0-100)")),
    }
}

fn parse_range(value: &str) -> Result<RangeInclusive<u16>, String> {
    let invalid = || format!("error: invalid --paradigms '{value}' (expected LO-HI, e.g. 1-15)");
    let (lo, hi) = match value.split_once('-') {
        Some((lo, hi)) => (lo, hi),
        None => (value, value),
    };
    let lo: u16 = lo.trim().parse().map_err(|_| invalid())?;
    let hi: u16 = hi.trim().parse().map_err(|_| invalid())?;
    if lo > hi {
        return Err(invalid());
    }
    Ok(lo..=hi)
}

fn parse_harmony(value: &str) -> Result<Harmony, String> {
    match value {
        "back" => Ok(Harmony::Back),
        "front" => Ok(Harmony::Front),
        _ => Err(format!("error: invalid --neutral-harmony '{value}' (expected back or front)")),
    }
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "finform {version}

Finnish noun word-form and passphrase generator.

Usage:
  finform [OPTIONS]

Options:
  --words <file>             Kotus word list (TSV). Default: built-in sample.
  -n, --count <n>            Word forms to generate. Default: {count}
  --phrases <n>              Passphrases to print. Default: {phrases}
  --phrase-length <n>        Words per passphrase. Default: {phrase_length}
  --paradigms <lo-hi>        Inflection paradigms to use. Default: 1-15
  --clitics <percent>        Chance of a clitic particle. Default: 10
  --second-clitic <percent>  Chance of a second clitic after hAn or kin. Default: 10
  --neutral-harmony <h>      Harmony for words with only e, i, y: back or front.
                             Default: back
  --gradation-rules <file>   Replace the built-in consonant gradation table.
  --inflection-rules <file>  Replace the built-in case inflection table.
  --trace                    Print every derivation step and stage timings.
  --parallel                 Generate word forms on all cores.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}                Log filter, e.g. debug or finform=trace. Default: warn

Exit codes:
  0  Success.
  1  Rule table or word list could not be loaded.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        count = DEFAULT_COUNT,
        phrases = DEFAULT_PHRASES,
        phrase_length = DEFAULT_PHRASE_LENGTH,
        log_env = LOG_ENV,
    )
}
