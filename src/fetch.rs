//! Page retrieval: the module-page table, HTTP download, local files.

use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::encoding;
use crate::error::{Error, Result};
use crate::patterns::MODULE_RANGE;

/// Module ranges and the exam-answer pages covering them.
pub const MODULE_PAGES: &[(&str, &str)] = &[
    (
        "1-3",
        "https://itexamanswers.net/ccna-1-v7-modules-1-3-basic-network-connectivity-and-communications-exam-answers.html",
    ),
    (
        "4-7",
        "https://itexamanswers.net/ccna-1-v7-modules-4-7-ethernet-concepts-exam-answers.html",
    ),
    (
        "8-10",
        "https://itexamanswers.net/ccna-1-v7-modules-8-10-communicating-between-networks-exam-answers.html",
    ),
    (
        "11-13",
        "https://itexamanswers.net/ccna-1-v7-modules-11-13-ip-addressing-exam-answers-full.html",
    ),
    (
        "14-15",
        "https://itexamanswers.net/ccna-1-v7-modules-14-15-network-application-communications-exam-answers.html",
    ),
    (
        "16-17",
        "https://itexamanswers.net/ccna-1-v7-modules-16-17-building-and-securing-a-small-network-exam-answers.html",
    ),
];

/// User-Agent string identifying this scraper.
const USER_AGENT: &str = concat!("examscrape/", env!("CARGO_PKG_VERSION"));

/// Per-request timeout; a hung download abandons that page, not the run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Look up the page URL for a module range.
#[must_use]
pub fn page_url(range: &str) -> Option<&'static str> {
    MODULE_PAGES
        .iter()
        .find(|(r, _)| *r == range)
        .map(|(_, url)| *url)
}

/// Recover the `N-M` module range from a source filename, falling back to
/// `unknown` when the name does not carry one.
#[must_use]
pub fn module_range_from_path(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| MODULE_RANGE.captures(name))
        .and_then(|caps| caps.get(1))
        .map_or_else(|| "unknown".to_string(), |m| m.as_str().to_string())
}

/// Blocking HTTP fetcher for exam-answer pages.
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    /// Build a fetcher with the crate's User-Agent and request timeout.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Download a page and transcode the body to UTF-8.
    pub fn page(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url).map_err(|source| Error::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        tracing::info!(%url, "downloading page");
        let bytes = self
            .client
            .get(parsed)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::bytes)
            .map_err(|source| Error::Fetch {
                url: url.to_string(),
                source,
            })?;
        Ok(encoding::to_utf8(&bytes))
    }
}

/// Read a local HTML file, transcoding to UTF-8 from its declared charset.
pub fn read_html(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(encoding::to_utf8(&bytes))
}
