//! Multi-valued answers ("x=2 or x=-3", "{1, 2, 3}", "2; -2") parsed into a true
//! set of canonical value strings. Order and multiplicity are irrelevant by policy:
//! {2,2,3} and {2,3} are the same solution set. Elements that extract a numeric
//! value are stored in canonical numeric form so "1/2" and "0.5" land on the same
//! key.

use crate::equivalence::normalizer::{extract_assigned_value, normalize_math_expression};
use crate::equivalence::numeric::{format_numeric, parse_numeric};
use regex::Regex;
use std::collections::BTreeSet;

/// The multi-solution heuristic over the RAW input: word separators "or"/"and",
/// commas, semicolons, or set braces.
pub fn looks_like_solution_set(raw: &str) -> bool {
    if raw.contains(',') || raw.contains(';') || raw.contains('{') {
        return true;
    }
    let word_separator = Regex::new(r"(?i)\b(or|and)\b").unwrap();
    word_separator.is_match(raw)
}

/// Always succeeds: an atomic answer yields a singleton set, unusable pieces are
/// dropped. `variable = value` elements are unwrapped to their right-hand side.
pub fn parse_solution_set(raw: &str) -> BTreeSet<String> {
    let lowered = raw.trim().to_lowercase().replace(['{', '}'], "");
    let word_separator = Regex::new(r"\b(?:or|and)\b").unwrap();
    let separated = word_separator.replace_all(&lowered, ";");
    let mut values = BTreeSet::new();
    for piece in separated.split([',', ';']) {
        let normalized = normalize_math_expression(piece);
        if normalized.is_empty() {
            continue;
        }
        let value = extract_assigned_value(&normalized);
        let canonical = match parse_numeric(&value) {
            Some(number) => format_numeric(number),
            None => value,
        };
        values.insert(canonical);
    }
    values
}
