//! # Equivalence Resolver Module
//!
//! The strict, ordered decision chain over all equivalence strategies. Each step
//! either returns a High-confidence verdict (terminating) or falls through to the
//! next; when every strategy is exhausted the engine refuses to guess and returns
//! Uncertain. Cheapest and most certain checks run first (string and extracted
//! value equality), then the representation-specific parsers from most to least
//! structurally constrained, with numeric sampling as the general but
//! comparatively expensive fallback.
//!
//! Confidence is never inferred implicitly: every strategy states High or
//! Uncertain explicitly, and there is no third tier.

use crate::equivalence::interval::parse_interval;
use crate::equivalence::normalizer::{extract_assigned_value, normalize_math_expression};
use crate::equivalence::numeric::{are_numeric_equal, parse_numeric};
use crate::equivalence::sampling::check_by_sampling;
use crate::equivalence::solution_set::{looks_like_solution_set, parse_solution_set};
use crate::equivalence::terms::{are_term_maps_equal, parse_algebraic_terms};
use log::debug;
use strum_macros::{Display, EnumIter};

/// High means the engine is certain enough to decide without review; Uncertain
/// blocks automatic progression downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Confidence {
    High,
    Uncertain,
}

/// which strategy produced the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Method {
    EmptyInput,
    ExactMatch,
    ValueMatch,
    Numeric,
    SolutionSet,
    Interval,
    AlgebraicTerms,
    Sampling,
    Exhausted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EquivalenceResult {
    pub is_equivalent: bool,
    pub confidence: Confidence,
    pub method: Method,
    pub reason: String,
}

impl EquivalenceResult {
    fn high(is_equivalent: bool, method: Method, reason: String) -> Self {
        EquivalenceResult {
            is_equivalent,
            confidence: Confidence::High,
            method,
            reason,
        }
    }
}

/// Decides whether two free-text answers are mathematically equivalent. Pure
/// function of its inputs: no state, no I/O, safe to call concurrently.
pub fn check_math_equivalence(user_answer: &str, correct_answer: &str) -> EquivalenceResult {
    // empty-input guards: an empty answer is conclusively wrong, a missing
    // reference answer is conclusively ungradable
    if user_answer.trim().is_empty() {
        return EquivalenceResult::high(
            false,
            Method::EmptyInput,
            "empty answer".to_string(),
        );
    }
    if correct_answer.trim().is_empty() {
        return EquivalenceResult {
            is_equivalent: false,
            confidence: Confidence::Uncertain,
            method: Method::EmptyInput,
            reason: "no reference answer to compare against".to_string(),
        };
    }

    let user_normalized = normalize_math_expression(user_answer);
    let correct_normalized = normalize_math_expression(correct_answer);
    if !user_normalized.is_empty() && user_normalized == correct_normalized {
        debug!("exact match after normalization: {}", user_normalized);
        return EquivalenceResult::high(
            true,
            Method::ExactMatch,
            "answers are identical after normalization".to_string(),
        );
    }

    // unwrap "x = 2" style answers to their right-hand side and retry
    let user_value = normalize_math_expression(&extract_assigned_value(&user_normalized));
    let correct_value = normalize_math_expression(&extract_assigned_value(&correct_normalized));
    if !user_value.is_empty() && user_value == correct_value {
        debug!("extracted values match: {}", user_value);
        return EquivalenceResult::high(
            true,
            Method::ValueMatch,
            "assigned values are identical after normalization".to_string(),
        );
    }

    // numeric comparison terminates either way: a numeric answer that does not
    // match numerically is conclusively wrong
    if let (Some(user_number), Some(correct_number)) =
        (parse_numeric(&user_value), parse_numeric(&correct_value))
    {
        return if are_numeric_equal(user_number, correct_number) {
            EquivalenceResult::high(
                true,
                Method::Numeric,
                format!(
                    "numeric values {} and {} agree within tolerance",
                    user_number, correct_number
                ),
            )
        } else {
            EquivalenceResult::high(
                false,
                Method::Numeric,
                format!(
                    "numeric values differ: {} vs {}",
                    user_number, correct_number
                ),
            )
        };
    }

    // bracket intervals contain a comma, so a true interval pair must be decided
    // before the multi-solution heuristic misreads it as a two-element set
    let user_interval = parse_interval(&user_normalized);
    let correct_interval = parse_interval(&correct_normalized);
    let both_are_intervals = user_interval.is_some() && correct_interval.is_some();

    if !both_are_intervals
        && (looks_like_solution_set(user_answer) || looks_like_solution_set(correct_answer))
    {
        let user_set = parse_solution_set(user_answer);
        let correct_set = parse_solution_set(correct_answer);
        if !user_set.is_empty() && user_set == correct_set {
            return EquivalenceResult::high(
                true,
                Method::SolutionSet,
                format!("solution sets match ({} values)", user_set.len()),
            );
        }
        // a same-cardinality mismatch is conclusive; a size difference might be
        // a formatting artifact, so it falls through
        if !user_set.is_empty() && user_set.len() == correct_set.len() {
            return EquivalenceResult::high(
                false,
                Method::SolutionSet,
                "solution sets of equal size differ".to_string(),
            );
        }
        debug!(
            "solution set sizes differ ({} vs {}), falling through",
            user_set.len(),
            correct_set.len()
        );
    }

    if let (Some(user_iv), Some(correct_iv)) = (user_interval, correct_interval) {
        return if user_iv.equivalent(&correct_iv) {
            EquivalenceResult::high(
                true,
                Method::Interval,
                "intervals describe the same set".to_string(),
            )
        } else {
            EquivalenceResult::high(
                false,
                Method::Interval,
                "intervals differ".to_string(),
            )
        };
    }

    // the term parser is lossy, so term-level equivalence can confirm but its
    // absence proves nothing - no terminating "false" here
    let user_terms = parse_algebraic_terms(&user_value);
    let correct_terms = parse_algebraic_terms(&correct_value);
    if !user_terms.is_empty()
        && !correct_terms.is_empty()
        && are_term_maps_equal(&user_terms, &correct_terms)
    {
        return EquivalenceResult::high(
            true,
            Method::AlgebraicTerms,
            "polynomial terms match".to_string(),
        );
    }

    let sampled = check_by_sampling(&user_value, &correct_value);
    if sampled.confidence == Confidence::High {
        return sampled;
    }

    EquivalenceResult {
        is_equivalent: false,
        confidence: Confidence::Uncertain,
        method: Method::Exhausted,
        reason: "could not determine equivalence with high confidence".to_string(),
    }
}
