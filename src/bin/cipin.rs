//! Thin command-line entry point: fetch one page, print the ranked table.
//!
//! All the knobs are pass-through configuration for the library — URL,
//! extraction mode, stopword file, top-N, minimum count. Fetch errors go to
//! stderr with a non-zero exit; an empty page is reported as such, never as
//! an error.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cipin::{word_frequencies, ExtractMode, Fetcher, StopwordSet};

#[derive(Parser, Debug)]
#[command(name = "cipin", about = "Word-frequency analysis for a web page")]
struct Args {
    /// Page URL to analyze.
    url: String,

    /// Extraction mode: "paragraphs" or "anchor-titles".
    #[arg(long, default_value_t = ExtractMode::Paragraphs)]
    mode: ExtractMode,

    /// Stopword file (one word per line). Defaults to the builtin list.
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// How many ranked entries to print.
    #[arg(long, default_value_t = 20)]
    top: usize,

    /// Also print the entries with at least this count.
    #[arg(long, default_value_t = 1)]
    min_count: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Unreadable stopword file is a startup error, not a per-request one.
    let loaded;
    let stopwords = match &args.stopwords {
        Some(path) => match StopwordSet::load(path) {
            Ok(set) => {
                loaded = set;
                &loaded
            }
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => StopwordSet::builtin(),
    };

    let fetcher = match Fetcher::new() {
        Ok(f) => f,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let text = match fetcher.fetch(&args.url, args.mode) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if text.is_empty() {
        println!("no matching content on page ({} mode)", args.mode);
        return ExitCode::SUCCESS;
    }

    let table = word_frequencies(&text, stopwords);
    println!(
        "{} distinct words from {} extracted chars\n",
        table.len(),
        text.chars().count()
    );

    println!("top {}:", args.top.min(table.len()));
    for (rank, (word, count)) in table.top_n(args.top).iter().enumerate() {
        println!("{:>4}  {:>6}  {}", rank + 1, count, word);
    }

    if args.min_count > 1 {
        let filtered: Vec<_> = table.filter_by_min_count(args.min_count).collect();
        println!("\n{} words with count >= {}:", filtered.len(), args.min_count);
        for (word, count) in filtered {
            println!("      {count:>6}  {word}");
        }
    }

    ExitCode::SUCCESS
}
