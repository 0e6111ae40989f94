//! Intervals from bracket notation "(a,b]" or from a single-variable inequality
//! "x >= 3", "1 < x <= 2". Multi-variable inequalities are out of scope and yield
//! None. An unbounded side is stored as None; its inclusivity flag is not
//! meaningful and is ignored by the equivalence check.

use crate::equivalence::numeric::{are_numeric_equal, parse_numeric};
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub lower_inclusive: bool,
    pub upper_inclusive: bool,
}

impl Interval {
    /// All four fields must match; on an unbounded side only the unboundedness
    /// itself is compared.
    pub fn equivalent(&self, other: &Interval) -> bool {
        let lower_matches = match (self.lower, other.lower) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                are_numeric_equal(a, b) && self.lower_inclusive == other.lower_inclusive
            }
            _ => false,
        };
        let upper_matches = match (self.upper, other.upper) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                are_numeric_equal(a, b) && self.upper_inclusive == other.upper_inclusive
            }
            _ => false,
        };
        lower_matches && upper_matches
    }
}

/// Parses a NORMALIZED string (lowercase, whitespace-free) as an interval, or
/// None when neither the bracket form nor a supported inequality matches.
pub fn parse_interval(expr: &str) -> Option<Interval> {
    let bracket = Regex::new(r"^([\[\(])([^,]+),([^,]+)([\]\)])$").unwrap();
    if let Some(caps) = bracket.captures(expr) {
        let lower = parse_endpoint(&caps[2])?;
        let upper = parse_endpoint(&caps[3])?;
        return Some(Interval {
            lower,
            upper,
            lower_inclusive: lower.is_some() && &caps[1] == "[",
            upper_inclusive: upper.is_some() && &caps[4] == "]",
        });
    }
    // chained inequality a < x < b
    let chained = Regex::new(r"^(.+?)(<=|<)([a-z])(<=|<)(.+)$").unwrap();
    if let Some(caps) = chained.captures(expr) {
        let lower = parse_numeric(&caps[1])?;
        let upper = parse_numeric(&caps[5])?;
        return Some(Interval {
            lower: Some(lower),
            upper: Some(upper),
            lower_inclusive: &caps[2] == "<=",
            upper_inclusive: &caps[4] == "<=",
        });
    }
    // reversed chain b > x > a
    let chained_reversed = Regex::new(r"^(.+?)(>=|>)([a-z])(>=|>)(.+)$").unwrap();
    if let Some(caps) = chained_reversed.captures(expr) {
        let upper = parse_numeric(&caps[1])?;
        let lower = parse_numeric(&caps[5])?;
        return Some(Interval {
            lower: Some(lower),
            upper: Some(upper),
            lower_inclusive: &caps[4] == ">=",
            upper_inclusive: &caps[2] == ">=",
        });
    }
    let variable_first = Regex::new(r"^([a-z])(<=|>=|<|>)(.+)$").unwrap();
    if let Some(caps) = variable_first.captures(expr) {
        let bound = parse_numeric(&caps[3])?;
        return Some(half_line(&caps[2], bound));
    }
    let constant_first = Regex::new(r"^(.+?)(<=|>=|<|>)([a-z])$").unwrap();
    if let Some(caps) = constant_first.captures(expr) {
        let bound = parse_numeric(&caps[1])?;
        // 5 > x reads as x < 5
        let mirrored = match &caps[2] {
            "<" => ">",
            "<=" => ">=",
            ">" => "<",
            _ => "<=",
        };
        return Some(half_line(mirrored, bound));
    }
    None
}

fn half_line(operator: &str, bound: f64) -> Interval {
    match operator {
        "<" => Interval {
            lower: None,
            upper: Some(bound),
            lower_inclusive: false,
            upper_inclusive: false,
        },
        "<=" => Interval {
            lower: None,
            upper: Some(bound),
            lower_inclusive: false,
            upper_inclusive: true,
        },
        ">" => Interval {
            lower: Some(bound),
            upper: None,
            lower_inclusive: false,
            upper_inclusive: false,
        },
        _ => Interval {
            lower: Some(bound),
            upper: None,
            lower_inclusive: true,
            upper_inclusive: false,
        },
    }
}

/// None inside Some means "this side is unbounded"
fn parse_endpoint(text: &str) -> Option<Option<f64>> {
    let token = text.trim_start_matches('+');
    if token == "inf" || token == "-inf" || token == "oo" || token == "-oo" {
        return Some(None);
    }
    parse_numeric(token).map(Some)
}
