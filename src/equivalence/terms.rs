//! Polynomial canonical form: the normalized string is split at sign boundaries
//! outside brackets and each piece is matched against `coefficient letters
//! (**power)?`. The result maps a canonical monomial key (sorted letters plus an
//! optional power suffix, "" for the constant term) to an accumulated coefficient,
//! so 2x+3, 3+2x and x+x+3 all produce the same map.
//!
//! Terms with unsupported shapes (function calls, bracketed subexpressions) are
//! skipped silently. The map can therefore under-count; the resolver never treats
//! a term-map mismatch as proof of inequality.

use crate::equivalence::numeric::are_numeric_equal;
use regex::Regex;
use std::collections::BTreeMap;

pub fn parse_algebraic_terms(expr: &str) -> BTreeMap<String, f64> {
    let term_shape =
        Regex::new(r"^([+-]?)(\d+(?:\.\d+)?)?\*?([a-z]*)(?:\*\*(\d+(?:\.\d+)?))?$").unwrap();
    let mut terms: BTreeMap<String, f64> = BTreeMap::new();
    for piece in split_at_sign_boundaries(expr) {
        let Some(caps) = term_shape.captures(&piece) else {
            continue;
        };
        let sign = if caps.get(1).map_or("", |m| m.as_str()) == "-" {
            -1.0
        } else {
            1.0
        };
        let coefficient: f64 = match caps.get(2) {
            Some(m) => match m.as_str().parse() {
                Ok(value) => value,
                Err(_) => continue,
            },
            None => 1.0,
        };
        let letters = caps.get(3).map_or("", |m| m.as_str());
        let power = caps.get(4).map(|m| m.as_str());
        if letters.is_empty() && caps.get(2).is_none() && power.is_none() {
            // a bare sign or an empty piece carries no term
            continue;
        }
        let (key, value) = monomial_key(sign, coefficient, letters, power);
        *terms.entry(key).or_insert(0.0) += value;
    }
    terms
}

pub fn are_term_maps_equal(a: &BTreeMap<String, f64>, b: &BTreeMap<String, f64>) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .all(|(key, coefficient)| match b.get(key) {
            Some(other) => are_numeric_equal(*coefficient, *other),
            None => false,
        })
}

fn monomial_key(sign: f64, coefficient: f64, letters: &str, power: Option<&str>) -> (String, f64) {
    let mut sorted: Vec<char> = letters.chars().collect();
    sorted.sort_unstable();
    let base: String = sorted.into_iter().collect();
    match power {
        Some(p) if base.is_empty() => {
            // constant raised to a constant power, e.g. 2**3: fold into the constant
            // term. The leading sign binds looser than the power (-2**2 is -(2**2)),
            // so it is applied after the fold, never exponentiated with the base.
            let exponent: f64 = p.parse().unwrap_or(1.0);
            (String::new(), sign * coefficient.powf(exponent))
        }
        Some("0") => (String::new(), sign * coefficient),
        Some("1") | None => (base, sign * coefficient),
        Some(p) => (format!("{}**{}", base, p), sign * coefficient),
    }
}

/// Splits at top-level `+`/`-`, keeping the sign with the term that follows it.
/// A sign right after another operator or an opening bracket is unary and does
/// not split.
fn split_at_sign_boundaries(expr: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut depth = 0i32;
    let mut previous: Option<char> = None;
    for c in expr.chars() {
        match c {
            '(' | '[' | '{' => {
                depth += 1;
                current.push(c);
            }
            ')' | ']' | '}' => {
                depth -= 1;
                current.push(c);
            }
            '+' | '-'
                if depth == 0
                    && !current.is_empty()
                    && !matches!(previous, Some('+') | Some('-') | Some('*') | Some('/')) =>
            {
                pieces.push(current.clone());
                current.clear();
                current.push(c);
            }
            _ => current.push(c),
        }
        previous = Some(c);
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
