//! Dual-encoding tag matching and compiled extraction patterns.
//!
//! The source site serves pages where markup appears either literally
//! (`<p>`) or HTML-entity-escaped (`&lt;p&gt;`), sometimes mixed within one
//! document. Every structural pattern here is built from [`tag`], which
//! produces a fragment accepting both encodings, so the tolerance lives in
//! one place instead of being repeated at every extraction site.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// One character inside an entity-escaped tag: anything that is not the
/// start of an entity reference, or a reference other than `&gt;` (which
/// terminates the escaped tag). Keeps `class=&quot;...&quot;` attributes
/// inside the tag without running past its end.
const ENC_CHAR: &str = r"(?:[^&]|&(?:quot|amp|apos|nbsp|#[0-9]+|#x[0-9a-fA-F]+);)";

/// Build a regex fragment matching the opening or closing tag of `name` in
/// either literal or entity-escaped form.
///
/// Opening tags tolerate arbitrary attributes; closing tags tolerate
/// trailing whitespace. Case-insensitivity comes from the `(?i)` flag on the
/// compiled pattern, not from the fragment itself.
#[must_use]
pub fn tag(name: &str, closing: bool) -> String {
    if closing {
        format!(r"(?:</{name}\s*>|&lt;/{name}\s*&gt;)")
    } else {
        format!(r"(?:<{name}(?:\s+[^>]*?)?>|&lt;{name}(?:\s+{ENC_CHAR}*?)?&gt;)")
    }
}

/// Question heading: a paragraph wrapping an emphasis span that starts with
/// a numeral and a period. Group 1 is the numeral, group 2 the raw question
/// markup.
pub static QUESTION_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?is){p}\s*{em}\s*(\d+)\.\s*(.*?)\s*{em_end}\s*{p_end}",
        p = tag("p", false),
        em = tag("strong", false),
        em_end = tag("strong", true),
        p_end = tag("p", true),
    ))
    .expect("QUESTION_HEADING regex")
});

/// First unordered list in a segment; `body` holds the raw item markup.
pub static LIST_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?is){ul}(?P<body>.*?){ul_end}",
        ul = tag("ul", false),
        ul_end = tag("ul", true),
    ))
    .expect("LIST_BLOCK regex")
});

/// A single list item inside a list body.
pub static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?is){li}(?P<body>.*?){li_end}",
        li = tag("li", false),
        li_end = tag("li", true),
    ))
    .expect("LIST_ITEM regex")
});

/// A paragraph block, used when scanning for labeled explanation text.
pub static PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?is){p}(?P<body>.*?){p_end}",
        p = tag("p", false),
        p_end = tag("p", true),
    ))
    .expect("PARAGRAPH regex")
});

/// A division whose class attribute contains `message_box`, the container
/// the source site uses for answer explanations.
pub static MESSAGE_BOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?is)(?:<div[^>]*message_box[^>]*>|&lt;div{c}*?message_box{c}*?&gt;)(?P<body>.*?)(?:</div\s*>|&lt;/div\s*&gt;)",
        c = ENC_CHAR,
    ))
    .expect("MESSAGE_BOX regex")
});

/// Red correctness marker: a bare `ff0000` hex value or a `color:` style
/// declaration carrying it, with or without the leading `#`.
pub static RED_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)ff0000|color\s*:\s*#?ff0000").expect("RED_MARKER regex")
});

/// Class-attribute correctness marker: a class value containing
/// `correct_answer`, in literal or entity-escaped quoting.
pub static CORRECT_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)class\s*=\s*(?:"|&quot;)[^"&]*correct_answer"#)
        .expect("CORRECT_CLASS regex")
});

/// An emphasis span in either encoding. On its own this is NOT a
/// correctness signal; it only refines the red-marker rule.
pub static EMPHASIS_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(?:<|&lt;)strong(?:\s+[^>]*?)?(?:>|&gt;).*?(?:<|&lt;)/strong\s*(?:>|&gt;)")
        .expect("EMPHASIS_SPAN regex")
});

/// Explanation label with everything after it; applied to cleaned text.
pub static EXPLANATION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\bexplanation\s*:?\s*(?P<rest>.*)").expect("EXPLANATION_LABEL regex")
});

/// A literal HTML tag, for stripping.
pub static TAG_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("TAG_LITERAL regex"));

/// An entity-escaped HTML tag, for stripping.
pub static TAG_ENCODED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?is)&lt;{ENC_CHAR}+?&gt;")).expect("TAG_ENCODED regex")
});

/// Runs of whitespace, for normalization.
pub static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUNS regex"));

/// Module range in a source filename, e.g. `modules-11-13`.
pub static MODULE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"modules-(\d+-\d+)").expect("MODULE_RANGE regex"));

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn tag_matches_literal_and_encoded_openings() {
        let re = Regex::new(&format!("(?i){}", tag("ul", false))).unwrap();
        assert!(re.is_match("<ul>"));
        assert!(re.is_match("<UL class=\"options\">"));
        assert!(re.is_match("&lt;ul&gt;"));
        assert!(re.is_match("&lt;ul class=&quot;options&quot;&gt;"));
    }

    #[test]
    fn tag_does_not_match_longer_element_names() {
        let re = Regex::new(&tag("li", false)).unwrap();
        assert!(!re.is_match("<link rel=\"stylesheet\">"));
    }

    #[test]
    fn tag_matches_closing_forms() {
        let re = Regex::new(&tag("strong", true)).unwrap();
        assert!(re.is_match("</strong>"));
        assert!(re.is_match("&lt;/strong&gt;"));
    }

    #[test]
    fn question_heading_matches_both_encodings() {
        assert!(QUESTION_HEADING.is_match("<p><strong>1. What is an IP address?</strong></p>"));
        assert!(QUESTION_HEADING.is_match(
            "&lt;p&gt;&lt;strong&gt;1. What is an IP address?&lt;/strong&gt;&lt;/p&gt;"
        ));
        assert!(!QUESTION_HEADING.is_match("<p><strong>No numeral here</strong></p>"));
    }

    #[test]
    fn red_marker_matches_style_and_bare_hex() {
        assert!(RED_MARKER.is_match("style=\"color:#ff0000\""));
        assert!(RED_MARKER.is_match("style=\"color: ff0000\""));
        assert!(RED_MARKER.is_match("<span style=\"color:#FF0000\">x</span>"));
        assert!(!RED_MARKER.is_match("style=\"color:#00ff00\""));
    }

    #[test]
    fn correct_class_matches_literal_and_encoded_quotes() {
        assert!(CORRECT_CLASS.is_match("<li class=\"correct_answer\">"));
        assert!(CORRECT_CLASS.is_match("<li class=\"option correct_answer\">"));
        assert!(CORRECT_CLASS.is_match("&lt;li class=&quot;correct_answer&quot;&gt;"));
        assert!(!CORRECT_CLASS.is_match("<li class=\"option\">"));
    }

    #[test]
    fn message_box_captures_inner_content() {
        let html = r#"<div class="message_box tip"><p>Explanation: text</p></div>"#;
        let caps = MESSAGE_BOX.captures(html).unwrap();
        assert_eq!(caps.name("body").unwrap().as_str(), "<p>Explanation: text</p>");
    }

    #[test]
    fn module_range_found_in_filename() {
        let caps = MODULE_RANGE
            .captures("ccna-1-v7-modules-11-13-ip-addressing-exam-answers-full.html")
            .unwrap();
        assert_eq!(&caps[1], "11-13");
    }
}
