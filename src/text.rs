//! Text cleanup for extracted markup fragments.
//!
//! The cleanup pipeline mirrors how the source pages are dirty: tags first
//! (literal, then entity-escaped), entity references next, whitespace last.
//! Stripping must run before decoding, otherwise `&lt;p&gt;` would decode
//! into a literal tag and survive into the output text.

use crate::patterns::{TAG_ENCODED, TAG_LITERAL, WHITESPACE_RUNS};

/// Remove both literal and entity-escaped HTML tags.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    let text = TAG_LITERAL.replace_all(text, "");
    TAG_ENCODED.replace_all(&text, "").trim().to_string()
}

/// Decode HTML entity references, named and numeric.
///
/// Unknown references are left untouched rather than dropped.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match entity_at(rest) {
            Some((decoded, len)) => {
                out.push_str(&decoded);
                rest = &rest[len..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decode the entity reference at the start of `s` (which begins with `&`).
/// Returns the replacement text and the byte length consumed.
fn entity_at(s: &str) -> Option<(String, usize)> {
    // Entity references are short; an unmatched `&` should not scan far.
    // Byte scan keeps the slice below on char boundaries (`&` and `;` are ASCII).
    let semi = s.as_bytes().iter().take(12).position(|&b| b == b';')?;
    let body = &s[1..semi];
    let named = match body {
        "amp" => Some("&"),
        "lt" => Some("<"),
        "gt" => Some(">"),
        "quot" => Some("\""),
        "apos" => Some("'"),
        "nbsp" => Some(" "),
        "ndash" => Some("\u{2013}"),
        "mdash" => Some("\u{2014}"),
        "hellip" => Some("\u{2026}"),
        "lsquo" => Some("\u{2018}"),
        "rsquo" => Some("\u{2019}"),
        "ldquo" => Some("\u{201c}"),
        "rdquo" => Some("\u{201d}"),
        _ => None,
    };
    if let Some(named) = named {
        return Some((named.to_string(), semi + 1));
    }
    let code = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok()?
    } else if let Some(dec) = body.strip_prefix('#') {
        dec.parse::<u32>().ok()?
    } else {
        return None;
    };
    char::from_u32(code).map(|c| (c.to_string(), semi + 1))
}

/// Collapse whitespace runs to single spaces, normalize en-dashes to
/// hyphens, and trim.
#[must_use]
pub fn normalize_ws(text: &str) -> String {
    let text = text.replace('\u{2013}', "-");
    WHITESPACE_RUNS.replace_all(&text, " ").trim().to_string()
}

/// Full cleanup: strip tags, decode entities, normalize whitespace.
/// Idempotent on its own output.
#[must_use]
pub fn clean(text: &str) -> String {
    normalize_ws(&decode_entities(&strip_tags(text)))
}
