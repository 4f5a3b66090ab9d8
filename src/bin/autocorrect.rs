// autocorrect: suggest dictionary words for possibly misspelled input.
//
// Words come from the command line or, when none are given, from stdin
// (one per line). Each word prints one of three outcomes:
//   word (valid)
//   word: (no suggestions)
//   word:
//     suggestion
//     ...
//
// Usage:
//   autocorrect -d WORDS.txt [OPTIONS] [WORD...]
//   autocorrect -d WORDS.txt --benchmark

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use autocorrectrs::config::{
    parse_max_edit_distance, parse_response_limit, DEFAULT_MAX_EDIT_DISTANCE,
    DEFAULT_RESPONSE_LIMIT,
};
use autocorrectrs::{dictionary, Config, Error, Outcome, Suggestion, SuggestionEngine};
use clap::Parser;
use log::{debug, info};
use serde::Serialize;

const EXIT_FAILURE: i32 = 1;
const EXIT_USAGE: i32 = 2;

/// Suggest dictionary words ranked by edit distance, then alphabetically.
#[derive(Parser, Debug)]
#[command(name = "autocorrect")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Word list: a leading count line followed by words, or one word per line
    #[arg(short, long, env = "AUTOCORRECT_DICT")]
    dictionary: PathBuf,

    /// Largest edit distance a suggestion may have
    #[arg(
        short = 'e',
        long,
        default_value_t = DEFAULT_MAX_EDIT_DISTANCE,
        value_parser = parse_max_edit_distance,
        allow_negative_numbers = true
    )]
    max_edit_distance: usize,

    /// Maximum number of suggestions per word
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_RESPONSE_LIMIT,
        value_parser = parse_response_limit,
        allow_negative_numbers = true
    )]
    response_limit: usize,

    /// Suggest words even when the input is already in the dictionary
    #[arg(long)]
    suggest_valid: bool,

    /// Print the edit distance next to each suggestion
    #[arg(long)]
    distances: bool,

    /// Print one JSON object per word
    #[arg(long)]
    json: bool,

    /// Time a lookup of every dictionary word and exit
    #[arg(long)]
    benchmark: bool,

    /// Words to check; read from stdin when omitted
    words: Vec<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    word: &'a str,
    #[serde(flatten)]
    outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    ranked: Option<Vec<Suggestion>>,
}

fn main() {
    init_logging();
    let args = Args::parse();

    let config = match Config::new(
        args.max_edit_distance,
        args.response_limit,
        !args.suggest_valid,
    ) {
        Ok(config) => config,
        Err(e) => fatal(EXIT_USAGE, &Error::from(e)),
    };

    let words = match dictionary::load_path(&args.dictionary) {
        Ok(words) => words,
        Err(e) => fatal(EXIT_FAILURE, &Error::from(e)),
    };
    let engine = SuggestionEngine::new(words, config);
    info!(
        "dictionary {} holds {} words",
        args.dictionary.display(),
        engine.len()
    );

    if args.benchmark {
        benchmark(&engine);
        return;
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = if args.words.is_empty() {
        check_stdin(&engine, &args, &mut out)
    } else {
        args.words
            .iter()
            .try_for_each(|word| report(&engine, word, &args, &mut out))
    };
    let flushed = out.flush().map_err(Error::from);
    if let Err(e) = result.and(flushed) {
        fatal(exit_code(&e), &e);
    }
}

/// One word per line. Each answer is flushed before the next line is read so
/// an interactive caller sees it immediately.
fn check_stdin<W: Write>(
    engine: &SuggestionEngine,
    args: &Args,
    out: &mut W,
) -> autocorrectrs::Result<()> {
    for line in io::stdin().lock().lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        report(engine, word, args, out)?;
        out.flush()?;
    }
    Ok(())
}

fn report<W: Write>(
    engine: &SuggestionEngine,
    word: &str,
    args: &Args,
    out: &mut W,
) -> autocorrectrs::Result<()> {
    let word = word.trim();
    if word.is_empty() {
        return Err(Error::Input("word is empty".to_string()));
    }

    let config = engine.config();
    let ranked = lookup_ranked(engine, word, &config);
    let distances = if args.distances { ranked.clone() } else { None };
    let outcome = Outcome::from_ranked(ranked);
    debug!("{word}: {outcome:?}");

    if args.json {
        let report = Report {
            word,
            outcome,
            ranked: distances,
        };
        serde_json::to_writer(&mut *out, &report).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        render(out, word, &outcome, distances.as_deref())?;
    }
    Ok(())
}

fn render<W: Write>(
    out: &mut W,
    word: &str,
    outcome: &Outcome,
    ranked: Option<&[Suggestion]>,
) -> io::Result<()> {
    match outcome {
        Outcome::ValidWord => writeln!(out, "{word} (valid)"),
        Outcome::Suggestions(words) if words.is_empty() => {
            writeln!(out, "{word}: (no suggestions)")
        }
        Outcome::Suggestions(words) => {
            writeln!(out, "{word}:")?;
            match ranked {
                Some(ranked) => {
                    for s in ranked {
                        writeln!(out, "  {} ({})", s.word, s.distance)?;
                    }
                }
                None => {
                    for s in words {
                        writeln!(out, "  {s}")?;
                    }
                }
            }
            Ok(())
        }
    }
}

/// Look up every dictionary word with a fixed heavy configuration.
fn benchmark(engine: &SuggestionEngine) {
    let config = match Config::new(3, 10, false) {
        Ok(config) => config,
        Err(e) => fatal(EXIT_FAILURE, &Error::from(e)),
    };

    let total = engine.len();
    let start = Instant::now();
    for (done, word) in engine.words().enumerate() {
        let _ = lookup_ranked(engine, word, &config);
        if (done + 1) % 1000 == 0 {
            info!("benchmark progress: {}/{}", done + 1, total);
        }
    }
    let elapsed = start.elapsed();

    let per_word_ms = if total == 0 {
        0.0
    } else {
        elapsed.as_secs_f64() * 1000.0 / total as f64
    };
    println!("Benchmark complete: {total} words");
    println!("Time taken: {:.2} seconds", elapsed.as_secs_f64());
    println!("Time per word: {per_word_ms:.2}ms");
}

#[cfg(feature = "parallel")]
fn lookup_ranked(
    engine: &SuggestionEngine,
    word: &str,
    config: &Config,
) -> Option<Vec<Suggestion>> {
    engine.par_lookup_ranked_with(word, config)
}

#[cfg(not(feature = "parallel"))]
fn lookup_ranked(
    engine: &SuggestionEngine,
    word: &str,
    config: &Config,
) -> Option<Vec<Suggestion>> {
    engine.lookup_ranked_with(word, config)
}

fn init_logging() {
    let env = env_logger::Env::default().filter_or("AUTOCORRECT_LOG", "warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}

/// Bad input or settings are usage errors; anything else is a failure.
fn exit_code(err: &Error) -> i32 {
    match err {
        Error::Input(_) | Error::Config(_) => EXIT_USAGE,
        Error::Dictionary(_) | Error::Io(_) => EXIT_FAILURE,
    }
}

fn fatal(code: i32, err: &Error) -> ! {
    eprintln!("error: {err}");
    process::exit(code);
}
