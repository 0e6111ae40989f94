#![allow(non_snake_case)]
use RustedMathCheck::equivalence::resolver::check_math_equivalence;
use RustedMathCheck::grading::adapter::grade_answer;
use RustedMathCheck::grading::batch::{ExamPart, grade_exam_parts};
use log::info;
use simplelog::*;

fn main() {
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    if logger_instance.is_err() {
        println!("logger already initialized");
    }

    let example = 2;
    match example {
        0 => {
            // raw equivalence verdicts across the supported representations
            let pairs = [
                ("1/2", "0.5"),
                ("2x+3", "3+2x"),
                ("x=2 or x=-3", "x=-3, x=2"),
                ("(1, 2]", "1 < x <= 2"),
                ("(x+1)**2", "x**2+2*x+1"),
                ("4", "5"),
                ("x", "y"),
            ];
            for (user, correct) in pairs {
                let verdict = check_math_equivalence(user, correct);
                println!(
                    "{:>16} vs {:<16} => equivalent: {:<5} confidence: {:<9} method: {}",
                    user, correct, verdict.is_equivalent, verdict.confidence, verdict.method
                );
            }
        }
        1 => {
            // single-answer grading, including the blocked Uncertain state
            for (user, correct) in [("\\frac{1}{2}", "0.5"), ("2.9999", "3"), ("x", "y")] {
                let graded = grade_answer(user, correct);
                println!(
                    "{} vs {} => correct: {}, can_proceed: {}, needs_review: {} ({})",
                    user, correct, graded.is_correct, graded.can_proceed, graded.needs_review,
                    graded.reason
                );
            }
        }
        2 => {
            // multi-part exam with grouped scoring
            let parts = vec![
                ExamPart {
                    user_answer: "x = 2".to_string(),
                    correct_answer: "x=2".to_string(),
                    points: 5.0,
                    group: Some("linear equations".to_string()),
                },
                ExamPart {
                    user_answer: "3.00001".to_string(),
                    correct_answer: "3".to_string(),
                    points: 5.0,
                    group: Some("arithmetic".to_string()),
                },
                ExamPart {
                    user_answer: "x=1 or x=2".to_string(),
                    correct_answer: "{1, 2}".to_string(),
                    points: 4.0,
                    group: Some("quadratic equations".to_string()),
                },
            ];
            let exam = grade_exam_parts(&parts);
            println!(
                "total: {}/{}  can_submit: {}",
                exam.total_earned, exam.total_possible, exam.can_submit
            );
            for (group, (earned, possible)) in &exam.group_totals {
                println!("  {:<20} {}/{}", group, earned, possible);
            }
        }
        _ => println!("no such example"),
    }
    info!("done");
}
