#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// wraps a raw equivalence verdict into a safety-checked grading decision.
/// The one invariant everything downstream relies on: Uncertain always blocks
/// forward progress, no caller may override `can_proceed`.
///# Example
/// ```
/// use RustedMathCheck::grading::adapter::grade_answer;
/// let graded = grade_answer("1/2", "0.5");
/// assert!(graded.is_correct);
/// assert!(graded.can_proceed);
/// let blocked = grade_answer("anything", "");
/// assert!(!blocked.can_proceed);
/// assert!(blocked.needs_review);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod adapter;
/// grades a list of exam parts independently, sums point totals, groups them by
/// an external key for reporting, and gates submission on any Uncertain part
pub mod batch;
