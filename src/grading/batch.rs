//! Batch grading for multi-part exams. Every part is graded independently (a
//! single Uncertain part never halts the loop), points are summed, and per-group
//! totals are produced for downstream reporting. The aggregate `has_uncertain`
//! flag gates whether the overall result may be persisted or displayed as final.

use crate::equivalence::resolver::Confidence;
use crate::grading::adapter::{GradingResult, grade_answer};
use itertools::Itertools;
use log::{debug, info};
use std::collections::BTreeMap;

/// one gradable exam part; `group` is an external grouping key such as a subtopic
#[derive(Debug, Clone, PartialEq)]
pub struct ExamPart {
    pub user_answer: String,
    pub correct_answer: String,
    pub points: f64,
    pub group: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartResult {
    pub grading: GradingResult,
    pub earned_points: f64,
    pub max_points: f64,
    pub group: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExamGrading {
    pub results: Vec<PartResult>,
    pub has_uncertain: bool,
    pub can_submit: bool,
    pub total_earned: f64,
    pub total_possible: f64,
    /// group key -> (earned, possible); parts without a group land under ""
    pub group_totals: BTreeMap<String, (f64, f64)>,
}

/// Grades all parts and aggregates point totals. Points are earned only on a
/// High-confidence correct verdict; an Uncertain part earns 0 and raises the
/// aggregate `has_uncertain` flag.
pub fn grade_exam_parts(parts: &[ExamPart]) -> ExamGrading {
    let mut results = Vec::with_capacity(parts.len());
    for (index, part) in parts.iter().enumerate() {
        let grading = grade_answer(&part.user_answer, &part.correct_answer);
        let earned = if grading.is_correct { part.points } else { 0.0 };
        debug!(
            "part {}: {} of {} points ({})",
            index, earned, part.points, grading.confidence
        );
        results.push(PartResult {
            grading,
            earned_points: earned,
            max_points: part.points,
            group: part.group.clone(),
        });
    }

    let has_uncertain = results
        .iter()
        .any(|r| r.grading.confidence == Confidence::Uncertain);
    let total_earned: f64 = results.iter().map(|r| r.earned_points).sum();
    let total_possible: f64 = results.iter().map(|r| r.max_points).sum();

    let group_totals: BTreeMap<String, (f64, f64)> = results
        .iter()
        .map(|r| {
            (
                r.group.clone().unwrap_or_default(),
                (r.earned_points, r.max_points),
            )
        })
        .into_group_map()
        .into_iter()
        .map(|(group, pairs)| {
            let earned: f64 = pairs.iter().map(|p| p.0).sum();
            let possible: f64 = pairs.iter().map(|p| p.1).sum();
            (group, (earned, possible))
        })
        .collect();

    info!(
        "graded {} parts: {}/{} points, uncertain: {}",
        results.len(),
        total_earned,
        total_possible,
        has_uncertain
    );
    ExamGrading {
        results,
        has_uncertain,
        can_submit: !has_uncertain,
        total_earned,
        total_possible,
        group_totals,
    }
}
