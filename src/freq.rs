//! Frequency aggregation and the ranked table contract.
//!
//! The table is the single data boundary between the pipeline and whatever
//! renders it: an ordered word → count mapping, descending by count, with
//! ties broken by first-seen order so rankings are reproducible run to run.

use std::collections::HashMap;

/// Count token occurrences and rank them.
///
/// Counting happens in encounter order; the final stable sort by descending
/// count therefore leaves equal-count words in first-seen order. Pure: the
/// result depends only on the token stream.
pub fn aggregate<'a, I>(tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<(String, usize)> = Vec::new();
    for token in tokens {
        match index.get(token) {
            Some(&i) => entries[i].1 += 1,
            None => {
                index.insert(token, entries.len());
                entries.push((token.to_string(), 1));
            }
        }
    }
    // Stable sort: equal counts keep insertion (first-seen) order.
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    FrequencyTable { entries }
}

/// Ranked word-frequency table: descending count, first-seen tie-break.
///
/// Created per request and discarded after use; never shared or mutated
/// across requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Iterate entries in ranked order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// The first `n` ranked entries; all of them when `n` exceeds the table.
    /// `n == 0` is an empty slice, not an error.
    pub fn top_n(&self, n: usize) -> &[(String, usize)] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Entries with `count >= min_count`, ranked order preserved.
    ///
    /// A pure, repeatable query — the table itself is untouched, so callers
    /// can re-filter at different thresholds over the same table.
    pub fn filter_by_min_count(
        &self,
        min_count: usize,
    ) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.iter().filter(move |&(_, count)| count >= min_count)
    }

    /// Count for a specific word, if present.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, count)| *count)
    }

    /// Count of the top-ranked entry. `None` for an empty table. Bounds a
    /// minimum-frequency selector in a presentation layer.
    pub fn max_count(&self) -> Option<usize> {
        self.entries.first().map(|(_, count)| *count)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
