//! Scalar extraction from a normalized token. The ordered attempts are: direct
//! float literal, simple fraction `a/b`, mixed number `w(a/b)`, square root
//! `sqrt(n)`, scaled square root `c*sqrt(n)`. Each shape that does not apply
//! falls through to the next; when nothing matches the answer is None, which the
//! resolver reads as "the numeric strategy does not apply here".
//!
//! The tolerance is a fixed engine constant. It must stay identical across every
//! call site, otherwise the same answer could grade differently in an exercise
//! and in an exam.

use regex::Regex;

/// absolute tolerance for numeric equality, strict `<`
pub const NUMERIC_TOLERANCE: f64 = 1e-4;

/// Tolerance-based equality between two extracted values. Non-finite values are
/// never equal to anything.
pub fn are_numeric_equal(a: f64, b: f64) -> bool {
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    (a - b).abs() < NUMERIC_TOLERANCE
}

/// Canonical string form of an extracted value, used as a solution-set element so
/// that "1/2" and "0.5" collide on the same key.
pub fn format_numeric(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Extracts a scalar from a normalized token, or None when no supported shape
/// matches. Negative radicands are rejected: the engine works over the reals.
pub fn parse_numeric(expr: &str) -> Option<f64> {
    let token = expr.trim();
    if token.is_empty() {
        return None;
    }
    if let Ok(value) = token.parse::<f64>() {
        return if value.is_finite() { Some(value) } else { None };
    }
    // plain a/b and the (a)/(b) form the normalizer produces for \frac{a}{b}
    let fraction =
        Regex::new(r"^\(?(-?\d+(?:\.\d+)?)\)?/\(?(-?\d+(?:\.\d+)?)\)?$").unwrap();
    if let Some(caps) = fraction.captures(token) {
        let numerator: f64 = caps[1].parse().ok()?;
        let denominator: f64 = caps[2].parse().ok()?;
        return if denominator != 0.0 {
            Some(numerator / denominator)
        } else {
            None
        };
    }
    // normalized mixed number: whole part glued to a parenthesized fraction
    let mixed = Regex::new(r"^(-?\d+)\((\d+)/(\d+)\)$").unwrap();
    if let Some(caps) = mixed.captures(token) {
        return mixed_number_value(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        );
    }
    // raw mixed number with the whole part separated by spaces
    let mixed_spaced = Regex::new(r"^(-?\d+)\s+(\d+)/(\d+)$").unwrap();
    if let Some(caps) = mixed_spaced.captures(token) {
        return mixed_number_value(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        );
    }
    let root = Regex::new(r"^sqrt\((-?\d+(?:\.\d+)?)\)$").unwrap();
    if let Some(caps) = root.captures(token) {
        let radicand: f64 = caps[1].parse().ok()?;
        return if radicand >= 0.0 {
            Some(radicand.sqrt())
        } else {
            None
        };
    }
    let scaled_root = Regex::new(r"^(-?\d+(?:\.\d+)?|-)\*?sqrt\((-?\d+(?:\.\d+)?)\)$").unwrap();
    if let Some(caps) = scaled_root.captures(token) {
        let coefficient: f64 = if &caps[1] == "-" {
            -1.0
        } else {
            caps[1].parse().ok()?
        };
        let radicand: f64 = caps[2].parse().ok()?;
        return if radicand >= 0.0 {
            Some(coefficient * radicand.sqrt())
        } else {
            None
        };
    }
    None
}

fn mixed_number_value(whole: f64, numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    let fractional = numerator / denominator;
    Some(if whole < 0.0 {
        whole - fractional
    } else {
        whole + fractional
    })
}
