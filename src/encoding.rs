//! Charset detection and transcoding for downloaded pages.
//!
//! Pages are declared via `<meta charset="...">` or the older
//! `http-equiv="Content-Type"` form; absent a declaration we assume UTF-8.
//! Transcoding is lossy so a stray byte never aborts a scrape.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Matches the charset value in either meta-tag form. The attribute order
/// varies in the wild, so the pattern only anchors on `charset=` inside a
/// meta tag.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([a-zA-Z0-9_\-]+)"#).expect("META_CHARSET regex")
});

/// Detect the declared encoding of an HTML byte stream.
///
/// Only the first 1024 bytes are examined; declarations are required to
/// appear early and scanning a whole page would be wasted work.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(1024)]);
    META_CHARSET
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string, replacing invalid sequences
/// with the Unicode replacement character.
#[must_use]
pub fn to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (text, _, _) = encoding.decode(html);
    text.into_owned()
}
