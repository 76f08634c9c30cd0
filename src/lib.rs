//! # examscrape
//!
//! Scraper and static quiz builder for networking-certification exam-answer
//! pages.
//!
//! The source site publishes question/answer pages as loosely-structured
//! HTML, sometimes with the markup entity-escaped from a copy-paste through
//! its CMS. This crate extracts question records from that dialect with
//! tolerant, dual-encoding pattern matching, serializes them to JSON, and
//! re-renders them into standalone static quiz pages.
//!
//! ## Quick start
//!
//! ```rust
//! let html = "<p><strong>1. Which protocol guarantees delivery?</strong></p>\
//!             <ul><li style=\"color:#ff0000\">TCP</li><li>UDP</li></ul>";
//!
//! let report = examscrape::extract_questions(html);
//! assert_eq!(report.questions.len(), 1);
//! assert_eq!(report.questions[0].correct_answers, ["TCP"]);
//! ```
//!
//! Extraction is best-effort by design: there is no DOM, no schema
//! validation, and a question with a missing list or explanation is still
//! emitted with those fields empty. Run-boundary failures (file I/O,
//! network) surface as [`Error`].

mod error;
mod question;

/// Question extraction from exam-answer HTML.
pub mod extract;

/// Dual-encoding tag matching and compiled patterns.
pub mod patterns;

/// Tag stripping, entity decoding, whitespace normalization.
pub mod text;

/// Charset detection and transcoding for downloaded pages.
pub mod encoding;

/// Module-page table and page retrieval.
pub mod fetch;

/// Static quiz page rendering and JSON output.
pub mod render;

/// Memoized string-leaf translation of question JSON.
pub mod translate;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::ExtractReport;
pub use question::Question;

/// Extract all question records from an HTML document.
///
/// Accepts literal markup, entity-escaped markup, or a mix of both. Returns
/// the records in document order plus any non-fatal warnings; a page with
/// no recognizable question headings yields an empty report, not an error.
#[must_use]
pub fn extract_questions(html: &str) -> ExtractReport {
    extract::extract_questions(html)
}

/// Extract question records from raw HTML bytes.
///
/// Detects the declared charset and transcodes to UTF-8 before extraction.
///
/// ```rust
/// let html = b"<meta charset=\"utf-8\"><p><strong>1. Q?</strong></p>";
/// let report = examscrape::extract_questions_bytes(html);
/// assert_eq!(report.questions[0].question, "Q?");
/// ```
#[must_use]
pub fn extract_questions_bytes(html: &[u8]) -> ExtractReport {
    extract::extract_questions(&encoding::to_utf8(html))
}
