//! The question record and option shuffling.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// One extracted exam question.
///
/// Field order matches the output JSON. `correct_answers` holds option
/// *text values*, not indices, and is always a subset of `options`;
/// `explanation` is omitted from serialized output when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question stem, tag-stripped and whitespace-normalized.
    pub question: String,

    /// Answer options in document order; may be empty.
    pub options: Vec<String>,

    /// Options marked correct in the source, in `options` order.
    pub correct_answers: Vec<String>,

    /// Justification text, when the source page carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    /// Return a copy with `options` permuted uniformly at random.
    ///
    /// Each option is paired with its correctness flag before shuffling, so
    /// `correct_answers` stays consistent by value and follows the new
    /// order. A question without options is returned unchanged.
    #[must_use]
    pub fn with_shuffled_options<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Question {
        if self.options.is_empty() {
            return self.clone();
        }
        let mut paired: Vec<(String, bool)> = self
            .options
            .iter()
            .map(|opt| (opt.clone(), self.correct_answers.contains(opt)))
            .collect();
        paired.shuffle(rng);
        Question {
            question: self.question.clone(),
            options: paired.iter().map(|(opt, _)| opt.clone()).collect(),
            correct_answers: paired
                .iter()
                .filter(|(_, correct)| *correct)
                .map(|(opt, _)| opt.clone())
                .collect(),
            explanation: self.explanation.clone(),
        }
    }

    /// Shuffle with the thread-local RNG. Not reproducible across runs.
    #[must_use]
    pub fn shuffled(&self) -> Question {
        self.with_shuffled_options(&mut rand::thread_rng())
    }
}
