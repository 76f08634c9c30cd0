//! Question extraction from semi-structured exam-answer pages.
//!
//! The page dialect is a repeating unit of: a heading paragraph wrapping a
//! numbered emphasis span, an unordered list of options, and optionally an
//! explanation block. Extraction slices the document into independent
//! segments between headings and runs per-segment pattern searches, so a
//! malformed list in one question cannot corrupt its neighbors. There is no
//! tree model; everything is best-effort matching over text.

use crate::patterns::{
    CORRECT_CLASS, EMPHASIS_SPAN, EXPLANATION_LABEL, LIST_BLOCK, LIST_ITEM, MESSAGE_BOX,
    PARAGRAPH, QUESTION_HEADING, RED_MARKER,
};
use crate::question::Question;
use crate::text::clean;

/// Extraction output: the records plus non-fatal diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    /// Extracted questions in document order.
    pub questions: Vec<Question>,

    /// Non-fatal issues, e.g. a page where no heading matched at all.
    pub warnings: Vec<String>,
}

/// Extract all question records from an HTML document.
///
/// Accepts literal markup, entity-escaped markup, or a mix. A document with
/// no recognizable headings yields an empty report with a warning, never an
/// error.
#[must_use]
pub fn extract_questions(html: &str) -> ExtractReport {
    let mut report = ExtractReport::default();
    let headings: Vec<regex::Captures<'_>> = QUESTION_HEADING.captures_iter(html).collect();

    if headings.is_empty() {
        if !html.trim().is_empty() {
            tracing::warn!("no question headings matched");
            report.warnings.push(
                "no question headings matched; the page may not use the expected \
                 numbered <p><strong> structure"
                    .to_string(),
            );
        }
        return report;
    }

    for (i, caps) in headings.iter().enumerate() {
        let Some(whole) = caps.get(0) else { continue };
        let segment_end = headings
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(html.len(), |m| m.start());
        let segment = &html[whole.end()..segment_end];

        let question = clean(caps.get(2).map_or("", |m| m.as_str()));
        let (options, correct_answers) = extract_options(segment);
        let explanation = extract_explanation(segment);

        report.questions.push(Question {
            question,
            options,
            correct_answers,
            explanation,
        });
    }

    report
}

/// Pull the options out of the first list block in a segment, classifying
/// each as correct or not from its raw markup.
fn extract_options(segment: &str) -> (Vec<String>, Vec<String>) {
    let Some(list) = LIST_BLOCK.captures(segment) else {
        return (Vec::new(), Vec::new());
    };
    let body = list.name("body").map_or("", |m| m.as_str());

    let mut options = Vec::new();
    let mut correct = Vec::new();
    for item in LIST_ITEM.captures_iter(body) {
        // Markers live either in the item's own attributes or in inner
        // spans, so classification sees the whole raw match.
        let raw = item.get(0).map_or("", |m| m.as_str());
        let text = clean(item.name("body").map_or("", |m| m.as_str()));
        if is_marked_correct(raw) {
            correct.push(text.clone());
        }
        options.push(text);
    }
    (options, correct)
}

/// Correctness policy, applied to the raw (pre-cleaning) item markup:
/// a red-color marker, a `correct_answer` class, or an emphasis span that
/// itself carries the red marker. Emphasis alone must never count; the
/// source pages bold plenty of incorrect text.
fn is_marked_correct(raw_item: &str) -> bool {
    if RED_MARKER.is_match(raw_item) || CORRECT_CLASS.is_match(raw_item) {
        return true;
    }
    EMPHASIS_SPAN.is_match(raw_item) && RED_MARKER.is_match(raw_item)
}

/// Locate the explanation for a question, if any.
///
/// Tries the `message_box` container first, then falls back to the first
/// paragraph whose cleaned text carries the `Explanation` label. The label
/// itself is stripped from the returned text.
fn extract_explanation(segment: &str) -> Option<String> {
    if let Some(boxed) = MESSAGE_BOX.captures(segment) {
        let body = clean(boxed.name("body").map_or("", |m| m.as_str()));
        let stripped = match EXPLANATION_LABEL.captures(&body) {
            Some(label) => label.name("rest").map_or("", |m| m.as_str()).trim().to_string(),
            None => body,
        };
        return Some(stripped).filter(|s| !s.is_empty());
    }

    for para in PARAGRAPH.captures_iter(segment) {
        let body = clean(para.name("body").map_or("", |m| m.as_str()));
        if let Some(label) = EXPLANATION_LABEL.captures(&body) {
            let rest = label.name("rest").map_or("", |m| m.as_str()).trim().to_string();
            return Some(rest).filter(|s| !s.is_empty());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_boundaries_do_not_leak_between_questions() {
        let html = "\
            <p><strong>1. First?</strong></p>\
            <ul><li>a</li><li style=\"color:#ff0000\">b</li></ul>\
            <p><strong>2. Second?</strong></p>\
            <ul><li>c</li></ul>";
        let report = extract_questions(html);
        assert_eq!(report.questions.len(), 2);
        assert_eq!(report.questions[0].options, ["a", "b"]);
        assert_eq!(report.questions[0].correct_answers, ["b"]);
        assert_eq!(report.questions[1].options, ["c"]);
        assert!(report.questions[1].correct_answers.is_empty());
    }

    #[test]
    fn emphasis_without_red_marker_is_not_correct() {
        assert!(!is_marked_correct("<strong>bolded option</strong>"));
        assert!(is_marked_correct(
            "<strong><span style=\"color:#ff0000\">red option</span></strong>"
        ));
    }

    #[test]
    fn question_without_list_still_appears() {
        let html = "<p><strong>3. Orphan question?</strong></p><p>Just prose.</p>";
        let report = extract_questions(html);
        assert_eq!(report.questions.len(), 1);
        assert!(report.questions[0].options.is_empty());
        assert!(report.questions[0].correct_answers.is_empty());
    }
}
