//! Error types for examscrape.
//!
//! Extraction itself never fails; errors cover the run boundary only
//! (file I/O, network retrieval, serialization, translation).

use std::path::PathBuf;

/// Error type for scrape, render and translate operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An output file or directory could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// A page URL did not parse.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    /// A page download failed or returned an error status.
    #[error("download failed for {url}: {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },

    /// A translation request failed or returned an unusable reply.
    #[error("translation failed: {0}")]
    Translate(String),

    /// JSON serialization or deserialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for examscrape operations.
pub type Result<T> = std::result::Result<T, Error>;
