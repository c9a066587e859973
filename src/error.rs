use std::path::PathBuf;

use thiserror::Error;

/// A failed page fetch: network trouble, timeout, or a non-success status.
///
/// Every transport-level cause collapses into this one type so callers see a
/// human-readable message instead of raw client internals. An empty page is
/// *not* an error — `fetch` returns `Ok(String::new())` for pages with no
/// matching elements.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed (DNS, connect, TLS, timeout,
    /// malformed URL). Timeouts are bounded by the client's configured
    /// request timeout.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned HTTP {0}")]
    Status(u16),
}

/// A startup configuration problem. Fatal: the process must not start
/// serving requests with a missing or unreadable stopword file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read stopword file {path}: {source}")]
    StopwordFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
