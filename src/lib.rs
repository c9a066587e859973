//! Word-frequency analysis for web pages.
//!
//! `cipin` fetches a single page, pulls out its visible text (paragraph
//! bodies or anchor `title` attributes), segments it into words with a
//! Chinese-aware tokenizer, drops stopwords and single-character tokens,
//! and returns a ranked [`FrequencyTable`] — descending count, ties broken
//! by first occurrence, deterministic across runs. How the table is charted
//! or displayed is left entirely to the caller.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use cipin::{analyze, ExtractMode, StopwordSet};
//!
//! let table = analyze(
//!     "https://example.com/article",
//!     ExtractMode::Paragraphs,
//!     StopwordSet::builtin(),
//! ).unwrap();
//! for (word, count) in table.top_n(20).iter().map(|(w, c)| (w.as_str(), *c)) {
//!     println!("{count:>6}  {word}");
//! }
//! ```
//!
//! The stages are also exposed individually — [`Fetcher::fetch`],
//! [`segment`], [`aggregate`] — for callers that already have text in hand
//! or want to reuse one HTTP client across requests.

mod encoding;
mod error;
mod fetch;
mod freq;
mod segment;
pub mod stopwords;

pub use error::{ConfigError, FetchError};
pub use fetch::{extract, ExtractMode, FetchConfig, Fetcher};
pub use freq::{aggregate, FrequencyTable};
pub use segment::segment;
pub use stopwords::StopwordSet;

/// Convenience: segment `text` and aggregate the surviving tokens.
pub fn word_frequencies(text: &str, stopwords: &StopwordSet) -> FrequencyTable {
    aggregate(segment(text, stopwords))
}

/// Convenience: fetch one page with a default [`Fetcher`] and count its words.
///
/// Equivalent to `Fetcher::new()`, [`Fetcher::fetch`], then
/// [`word_frequencies`]. Callers serving many requests should build one
/// `Fetcher` and reuse it instead.
pub fn analyze(
    url: &str,
    mode: ExtractMode,
    stopwords: &StopwordSet,
) -> Result<FrequencyTable, FetchError> {
    let fetcher = Fetcher::new()?;
    let text = fetcher.fetch(url, mode)?;
    Ok(word_frequencies(&text, stopwords))
}
