//! Stopword sets: words excluded from frequency counting.
//!
//! A set is loaded once — from a configured file or the embedded builtin
//! list — and stays immutable for the process lifetime, so it can be shared
//! across concurrent requests without locking.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::ConfigError;

/// General-purpose Chinese + English stoplist used when no file is configured.
const BUILTIN: &str = include_str!("chinese.txt");

/// Builtin set, parsed once on first use.
static BUILTIN_SET: LazyLock<StopwordSet> = LazyLock::new(|| StopwordSet::parse(BUILTIN));

/// An immutable set of words excluded from frequency counting.
///
/// Matching is exact and case-sensitive: `"The"` and `"the"` are distinct
/// entries. Entries are trimmed of surrounding whitespace at parse time.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Load a stopword file: UTF-8, one word per line.
    ///
    /// A missing or unreadable file is a [`ConfigError`] — fatal at startup,
    /// not something to paper over per request.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| {
            ConfigError::StopwordFile {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let set = Self::parse(&contents);
        tracing::info!(path = %path.display(), words = set.len(), "loaded stopword file");
        Ok(set)
    }

    /// Parse stoplist contents: one word per line, trimmed, blank lines skipped.
    pub fn parse(contents: &str) -> Self {
        let words = contents
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self { words }
    }

    /// The embedded general-purpose Chinese + English stoplist.
    pub fn builtin() -> &'static Self {
        &BUILTIN_SET
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_skips_blanks() {
        let set = StopwordSet::parse("的\n  了  \n\n\nthe\n");
        assert_eq!(set.len(), 3);
        assert!(set.contains("的"));
        assert!(set.contains("了"));
        assert!(set.contains("the"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let set = StopwordSet::parse("the\n");
        assert!(set.contains("the"));
        assert!(!set.contains("The"));
        assert!(!set.contains("THE"));
    }

    #[test]
    fn test_trailing_whitespace_stripped_per_entry() {
        // Windows line endings and stray spaces must not leak into entries.
        let set = StopwordSet::parse("word\r\nanother \r\n");
        assert!(set.contains("word"));
        assert!(set.contains("another"));
    }

    #[test]
    fn test_builtin_nonempty() {
        let set = StopwordSet::builtin();
        assert!(!set.is_empty());
        assert!(set.contains("的"));
        assert!(set.contains("the"));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = StopwordSet::load("/nonexistent/stopwords.txt").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("stopword file"), "message: {msg}");
        assert!(msg.contains("/nonexistent/stopwords.txt"));
    }

    #[test]
    fn test_from_iterator() {
        let set: StopwordSet = ["我".to_string(), "的".to_string()].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains("我"));
    }
}
