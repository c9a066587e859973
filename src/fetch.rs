//! Page fetching and text extraction.
//!
//! One blocking HTTP client per [`Fetcher`], with a browser-like User-Agent
//! (some servers reject unidentified clients) and a bounded request timeout.
//! The response body is decoded by content sniffing — the Content-Type
//! charset is ignored — then text is pulled out of the configured element
//! kind. An empty extraction result is valid content, never an error.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

use scraper::{Html, Selector};

use crate::encoding;
use crate::error::FetchError;

static PARAGRAPHS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());
static TITLED_ANCHORS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[title]").unwrap());

/// Which HTML content contributes to the analyzed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    /// Text content of every `<p>` element, joined by a single space.
    Paragraphs,
    /// Non-empty `title` attribute of every `<a>` element, joined by newline.
    AnchorTitles,
}

impl ExtractMode {
    fn separator(self) -> &'static str {
        match self {
            ExtractMode::Paragraphs => " ",
            ExtractMode::AnchorTitles => "\n",
        }
    }
}

impl FromStr for ExtractMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paragraphs" => Ok(ExtractMode::Paragraphs),
            "anchor-titles" => Ok(ExtractMode::AnchorTitles),
            other => Err(format!(
                "unknown extraction mode {other:?} (expected \"paragraphs\" or \"anchor-titles\")"
            )),
        }
    }
}

impl fmt::Display for ExtractMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExtractMode::Paragraphs => "paragraphs",
            ExtractMode::AnchorTitles => "anchor-titles",
        })
    }
}

/// Fetcher configuration.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct FetchConfig {
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Hard bound on the whole request; expiry surfaces as [`FetchError`].
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl FetchConfig {
    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Fetches pages and extracts their qualifying text.
#[derive(Debug)]
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    /// A fetcher with default configuration.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(&FetchConfig::default())
    }

    /// A fetcher with explicit configuration.
    pub fn with_config(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` and return the text extracted per `mode`.
    ///
    /// Network failure, timeout, a malformed URL, and non-2xx statuses all
    /// return a [`FetchError`]; a page with no matching elements returns
    /// `Ok(String::new())`. The two must never be conflated.
    pub fn fetch(&self, url: &str, mode: ExtractMode) -> Result<String, FetchError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = response.bytes()?;
        let html = encoding::decode(&body);
        let text = extract(&html, mode);
        tracing::debug!(url, %mode, chars = text.chars().count(), "fetched and extracted");
        Ok(text)
    }
}

/// Extract qualifying text from already-decoded HTML.
///
/// Split out from [`Fetcher::fetch`] so extraction is testable without a
/// network, and so both modes share one code path: collect fragments per
/// mode, join with the mode's separator.
pub fn extract(html: &str, mode: ExtractMode) -> String {
    let doc = Html::parse_document(html);
    let fragments: Vec<String> = match mode {
        ExtractMode::Paragraphs => doc
            .select(&PARAGRAPHS)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect(),
        ExtractMode::AnchorTitles => doc
            .select(&TITLED_ANCHORS)
            .filter_map(|el| el.value().attr("title"))
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty())
            .collect(),
    };
    fragments.join(mode.separator())
}
