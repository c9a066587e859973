//! Word segmentation and token filtering.
//!
//! Chinese has no inter-word whitespace, so tokens come from jieba's
//! dictionary + HMM segmentation rather than whitespace splitting. Latin
//! runs and digits pass through jieba unchanged, so mixed-script text
//! works with the same code path.

use std::sync::LazyLock;

use jieba_rs::Jieba;

use crate::stopwords::StopwordSet;

/// Process-wide segmenter. Building the dictionary is expensive; the
/// instance is immutable afterwards and safe to share.
static JIEBA: LazyLock<Jieba> = LazyLock::new(Jieba::new);

/// Segment `text` into filtered word tokens, in document order.
///
/// The returned iterator is lazy and borrows from `text`. Tokens are not
/// deduplicated — counting is the aggregator's job. Three things are
/// dropped and never yielded:
///
/// - punctuation/whitespace runs (no alphanumeric character),
/// - tokens shorter than two characters,
/// - exact, case-sensitive matches against `stopwords`.
///
/// Empty input yields an empty iterator.
pub fn segment<'a>(
    text: &'a str,
    stopwords: &'a StopwordSet,
) -> impl Iterator<Item = &'a str> + 'a {
    JIEBA
        .cut(text, true)
        .into_iter()
        .filter(move |word| is_word(word) && !stopwords.contains(word))
}

/// A countable token: at least one alphanumeric char and at least two chars
/// total. Length is in characters, not bytes — `"北京"` is 2, not 6.
fn is_word(word: &str) -> bool {
    word.chars().any(char::is_alphanumeric) && word.chars().count() >= 2
}
