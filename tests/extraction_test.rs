use examscrape::extract_questions;
use pretty_assertions::assert_eq;

const PAGE: &str = r#"
<p><strong>1. Which layer moves segments between hosts?</strong></p>
<ul>
<li style="color:#ff0000">transport</li>
<li>network</li>
<li>data link</li>
</ul>
<p><strong>2. Which protocols are connection-oriented? (Choose two.)</strong></p>
<ul>
<li><span style="color: #ff0000">TCP</span></li>
<li>UDP</li>
<li class="correct_answer">SCTP</li>
</ul>
<p><strong>3. A question without any option list?</strong></p>
<p>Some trailing prose.</p>
"#;

#[test]
fn record_count_equals_heading_count() {
    let report = extract_questions(PAGE);
    assert_eq!(report.questions.len(), 3);
    assert!(report.warnings.is_empty());
}

#[test]
fn questions_appear_in_document_order() {
    let report = extract_questions(PAGE);
    assert_eq!(
        report.questions[0].question,
        "Which layer moves segments between hosts?"
    );
    assert_eq!(
        report.questions[2].question,
        "A question without any option list?"
    );
}

#[test]
fn correct_answers_are_a_subset_of_options() {
    let report = extract_questions(PAGE);
    for question in &report.questions {
        for answer in &question.correct_answers {
            assert!(
                question.options.contains(answer),
                "{answer:?} missing from options of {:?}",
                question.question
            );
        }
    }
}

#[test]
fn distinct_markers_both_count_and_preserve_document_order() {
    let report = extract_questions(PAGE);
    let q = &report.questions[1];
    assert_eq!(q.options, ["TCP", "UDP", "SCTP"]);
    assert_eq!(q.correct_answers, ["TCP", "SCTP"]);
}

#[test]
fn question_without_list_has_empty_options() {
    let report = extract_questions(PAGE);
    let q = &report.questions[2];
    assert!(q.options.is_empty());
    assert!(q.correct_answers.is_empty());
}

#[test]
fn red_marker_is_case_insensitive_and_hash_optional() {
    for style in ["color:#ff0000", "COLOR:#FF0000", "color: ff0000"] {
        let html = format!(
            "<p><strong>1. Q?</strong></p><ul><li style=\"{style}\">yes</li><li>no</li></ul>"
        );
        let report = extract_questions(&html);
        assert_eq!(report.questions[0].correct_answers, ["yes"], "style {style}");
    }
}

#[test]
fn bold_without_red_marker_is_not_correct() {
    let html = "<p><strong>1. Q?</strong></p>\
                <ul><li><strong>emphasized but wrong</strong></li><li>plain</li></ul>";
    let report = extract_questions(html);
    assert!(report.questions[0].correct_answers.is_empty());
}

#[test]
fn correct_answer_class_counts_without_red_marker() {
    let html = "<p><strong>1. Q?</strong></p>\
                <ul><li class=\"correct_answer\">right</li><li>wrong</li></ul>";
    let report = extract_questions(html);
    assert_eq!(report.questions[0].correct_answers, ["right"]);
}

#[test]
fn double_encoded_page_extracts_like_the_literal_one() {
    let literal = "<p><strong>1. What does DNS resolve?</strong></p>\
                   <ul><li style=\"color:#ff0000\">names to addresses</li><li>routes</li></ul>";
    let encoded = "&lt;p&gt;&lt;strong&gt;1. What does DNS resolve?&lt;/strong&gt;&lt;/p&gt;\
                   &lt;ul&gt;&lt;li style=&quot;color:#ff0000&quot;&gt;names to addresses&lt;/li&gt;\
                   &lt;li&gt;routes&lt;/li&gt;&lt;/ul&gt;";
    let from_literal = extract_questions(literal);
    let from_encoded = extract_questions(encoded);
    assert_eq!(from_literal.questions, from_encoded.questions);
    assert_eq!(
        from_encoded.questions[0].question,
        "What does DNS resolve?"
    );
    assert_eq!(
        from_encoded.questions[0].correct_answers,
        ["names to addresses"]
    );
}

#[test]
fn zero_headings_yield_empty_report_with_warning() {
    let report = extract_questions("<html><body><p>nothing numbered here</p></body></html>");
    assert!(report.questions.is_empty());
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn empty_input_yields_empty_report_without_warning() {
    let report = extract_questions("");
    assert!(report.questions.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn option_text_is_unescaped_and_normalized() {
    let html = "<p><strong>1. Q?</strong></p>\
                <ul><li>64 hosts &amp; 2 subnets \u{2013} per\n\n LAN</li></ul>";
    let report = extract_questions(html);
    assert_eq!(report.questions[0].options, ["64 hosts & 2 subnets - per LAN"]);
}

#[test]
fn heading_numerals_need_not_be_continuous() {
    let html = "<p><strong>7. Seventh?</strong></p><ul><li>a</li></ul>\
                <p><strong>3. Third?</strong></p><ul><li>b</li></ul>";
    let report = extract_questions(html);
    assert_eq!(report.questions.len(), 2);
    assert_eq!(report.questions[0].question, "Seventh?");
    assert_eq!(report.questions[1].question, "Third?");
}
