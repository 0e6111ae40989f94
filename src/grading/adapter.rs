//! The grading adapter: a total mapping from `(confidence, is_equivalent)` to a
//! grading decision. Three reachable states:
//!
//! - High + equivalent      -> correct, proceed
//! - High + not equivalent  -> incorrect, proceed
//! - Uncertain (either)     -> incorrect-for-now, needs review, BLOCKED
//!
//! The last row is the critical safety invariant of the whole engine: Uncertain
//! always yields `can_proceed = false`, regardless of what the underlying check
//! nominally computed for `is_equivalent`.

use crate::equivalence::resolver::{Confidence, EquivalenceResult, check_math_equivalence};

#[derive(Debug, Clone, PartialEq)]
pub struct GradingResult {
    pub is_correct: bool,
    pub confidence: Confidence,
    pub needs_review: bool,
    pub can_proceed: bool,
    pub reason: String,
}

impl GradingResult {
    pub fn from_equivalence(verdict: EquivalenceResult) -> Self {
        match (verdict.confidence, verdict.is_equivalent) {
            (Confidence::High, true) => GradingResult {
                is_correct: true,
                confidence: Confidence::High,
                needs_review: false,
                can_proceed: true,
                reason: verdict.reason,
            },
            (Confidence::High, false) => GradingResult {
                is_correct: false,
                confidence: Confidence::High,
                needs_review: false,
                can_proceed: true,
                reason: verdict.reason,
            },
            (Confidence::Uncertain, _) => GradingResult {
                is_correct: false,
                confidence: Confidence::Uncertain,
                needs_review: true,
                can_proceed: false,
                reason: verdict.reason,
            },
        }
    }
}

/// Grades a single answer against the stored correct answer.
pub fn grade_answer(user_answer: &str, correct_answer: &str) -> GradingResult {
    GradingResult::from_equivalence(check_math_equivalence(user_answer, correct_answer))
}
