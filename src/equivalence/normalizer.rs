//! # Normalizer Module
//!
//! Canonicalizes raw student input into an ASCII operator form that the rest of the
//! engine can compare and dissect. The input may be plain text ("1/2"), LaTeX
//! fragments ("\\frac{1}{2}", "$x^2$"), or unicode math ("½" is out of vocabulary,
//! but "×", "√", "²" are mapped). The output is lowercase, whitespace-free, with
//! `^` spelled `**` and commas used as decimal separators turned into dots.
//!
//! Two hard guarantees:
//! - normalization never fails: empty or unusable input yields `""`
//! - normalization is idempotent: `normalize(normalize(s)) == normalize(s)`
//!
//! Unmapped LaTeX commands (`\word`) are dropped, not preserved. They are assumed
//! decorative; the bounded vocabulary below is the whole LaTeX surface this engine
//! supports.

use regex::Regex;

// multi-character LaTeX commands with a direct ASCII translation; longer spellings
// must come before their prefixes (\leq before \le)
const LATEX_COMMANDS: [(&str, &str); 11] = [
    ("\\cdot", "*"),
    ("\\times", "*"),
    ("\\div", "/"),
    ("\\pm", "+-"),
    ("\\infty", "inf"),
    ("\\leq", "<="),
    ("\\le", "<="),
    ("\\geq", ">="),
    ("\\ge", ">="),
    ("\\neq", "!="),
    ("\\ne", "!="),
];

/// Canonicalizes a raw answer string. See the module docs for the contract.
pub fn normalize_math_expression(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let mut s = trimmed.to_lowercase();
    // LaTeX math delimiters and sizing commands carry no content
    s = s.replace("$$", "");
    s = s.replace('$', "");
    s = s.replace("\\left", "");
    s = s.replace("\\right", "");
    s = rewrite_latex_fractions(&s);
    s = rewrite_latex_roots(&s);
    for (command, replacement) in LATEX_COMMANDS {
        s = s.replace(command, replacement);
    }
    // any command left at this point is outside the supported vocabulary
    s = Regex::new(r"\\[a-z]+")
        .unwrap()
        .replace_all(&s, "")
        .into_owned();
    s = map_unicode_glyphs(&s);
    s = rewrite_mixed_numbers(&s);
    s.retain(|c| !c.is_whitespace());
    s = s.replace('^', "**");
    s = parenthesize_bare_radicands(&s);
    s = rewrite_decimal_comma(&s);
    s
}

/// Unwraps `variable = value` into its right-hand side. Expects normalized input
/// (no whitespace). Inputs without that shape are returned unchanged; relational
/// operators (`<=`, `>=`, `!=`, `==`) do not count as assignments.
pub fn extract_assigned_value(normalized: &str) -> String {
    let assignment = Regex::new(r"^([a-z][a-z0-9]*)=([^=].*)$").unwrap();
    match assignment.captures(normalized) {
        Some(caps) => caps[2].to_string(),
        None => normalized.to_string(),
    }
}

/// `\frac{a}{b}` -> `(a)/(b)`, innermost-last via repeated scanning. A malformed
/// `\frac` (missing or unbalanced braces) loses the command token and keeps the rest.
fn rewrite_latex_fractions(input: &str) -> String {
    let mut s = input.to_string();
    while let Some(start) = s.find("\\frac") {
        let after_command = start + "\\frac".len();
        let parsed = (|| {
            if !s[after_command..].starts_with('{') {
                return None;
            }
            let numerator_close = matching_brace(&s, after_command)?;
            let denominator_open = numerator_close + 1;
            if !s[denominator_open..].starts_with('{') {
                return None;
            }
            let denominator_close = matching_brace(&s, denominator_open)?;
            Some((after_command, numerator_close, denominator_open, denominator_close))
        })();
        match parsed {
            Some((num_open, num_close, den_open, den_close)) => {
                let numerator = s[num_open + 1..num_close].to_string();
                let denominator = s[den_open + 1..den_close].to_string();
                let replacement = format!("({})/({})", numerator, denominator);
                s.replace_range(start..den_close + 1, &replacement);
            }
            None => {
                s.replace_range(start..after_command, "");
            }
        }
    }
    s
}

/// `\sqrt{x}` -> `sqrt(x)`, plus the braceless shorthand `\sqrt2` -> `sqrt(2)`
fn rewrite_latex_roots(input: &str) -> String {
    let mut s = input.to_string();
    while let Some(start) = s.find("\\sqrt{") {
        let open = start + "\\sqrt".len();
        match matching_brace(&s, open) {
            Some(close) => {
                let radicand = s[open + 1..close].to_string();
                s.replace_range(start..close + 1, &format!("sqrt({})", radicand));
            }
            None => {
                s.replace_range(start..open, "");
            }
        }
    }
    Regex::new(r"\\sqrt\s*(\d+(?:\.\d+)?)")
        .unwrap()
        .replace_all(&s, "sqrt(${1})")
        .into_owned()
}

/// byte index of the `}` matching the `{` at `open`, or None if unbalanced
fn matching_brace(s: &str, open: usize) -> Option<usize> {
    let mut depth = 0i32;
    for (offset, c) in s[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

fn map_unicode_glyphs(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '·' | '×' | '⋅' => out.push('*'),
            '÷' => out.push('/'),
            '−' | '–' => out.push('-'),
            '√' => out.push_str("sqrt"),
            'π' => out.push_str("pi"),
            '≤' => out.push_str("<="),
            '≥' => out.push_str(">="),
            '≠' => out.push_str("!="),
            '±' => out.push_str("+-"),
            '∞' => out.push_str("inf"),
            '²' => out.push_str("**2"),
            '³' => out.push_str("**3"),
            _ => out.push(c),
        }
    }
    out
}

/// `1 1/2` -> `1(1/2)` before whitespace removal glues it into the fraction `11/2`
fn rewrite_mixed_numbers(input: &str) -> String {
    Regex::new(r"(-?\d+)\s+(\d+)\s*/\s*(\d+)")
        .unwrap()
        .replace_all(input, "${1}(${2}/${3})")
        .into_owned()
}

/// `sqrt2`/`2sqrt3` (left behind by the `√` glyph mapping) get their radicand
/// parenthesized so the numeric parser sees a single shape
fn parenthesize_bare_radicands(input: &str) -> String {
    Regex::new(r"sqrt(\d+(?:\.\d+)?)")
        .unwrap()
        .replace_all(input, "sqrt(${1})")
        .into_owned()
}

/// A lone comma between two digits is a decimal separator ("2,5" -> "2.5") unless
/// the string shows any sign of being a list, a set, or an interval. Ambiguity is
/// resolved toward keeping the comma: the solution-set path downstream falls
/// through rather than terminating when cardinalities differ.
fn rewrite_decimal_comma(input: &str) -> String {
    if input.matches(',').count() != 1 {
        return input.to_string();
    }
    if input
        .chars()
        .any(|c| matches!(c, '(' | ')' | '[' | ']' | '{' | '}' | ';'))
    {
        return input.to_string();
    }
    if input.contains("or") || input.contains("and") {
        return input.to_string();
    }
    Regex::new(r"(\d),(\d)")
        .unwrap()
        .replace(input, "${1}.${2}")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_math_expression(""), "");
        assert_eq!(normalize_math_expression("   "), "");
    }

    #[test]
    fn test_latex_fraction() {
        assert_eq!(normalize_math_expression("\\frac{1}{2}"), "(1)/(2)");
        assert_eq!(
            normalize_math_expression("\\frac{x+1}{x-1}"),
            "(x+1)/(x-1)"
        );
    }

    #[test]
    fn test_nested_fraction() {
        assert_eq!(
            normalize_math_expression("\\frac{\\frac{1}{2}}{3}"),
            "((1)/(2))/(3)"
        );
    }

    #[test]
    fn test_latex_sqrt() {
        assert_eq!(normalize_math_expression("\\sqrt{2}"), "sqrt(2)");
        assert_eq!(normalize_math_expression("\\sqrt2"), "sqrt(2)");
        assert_eq!(normalize_math_expression("3\\sqrt{2}"), "3sqrt(2)");
    }

    #[test]
    fn test_operators_and_delimiters() {
        assert_eq!(normalize_math_expression("$x^2$"), "x**2");
        assert_eq!(normalize_math_expression("2 \\cdot 3"), "2*3");
        assert_eq!(normalize_math_expression("6 \\div 2"), "6/2");
        assert_eq!(normalize_math_expression("x \\le 5"), "x<=5");
        assert_eq!(normalize_math_expression("\\pm 2"), "+-2");
    }

    #[test]
    fn test_unmapped_command_dropped() {
        assert_eq!(normalize_math_expression("\\mathbf{x} + 1"), "{x}+1");
        assert_eq!(normalize_math_expression("\\quad 5"), "5");
    }

    #[test]
    fn test_unicode_glyphs() {
        assert_eq!(normalize_math_expression("2 × 3"), "2*3");
        assert_eq!(normalize_math_expression("√9"), "sqrt(9)");
        assert_eq!(normalize_math_expression("x²"), "x**2");
        assert_eq!(normalize_math_expression("x ≥ 3"), "x>=3");
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(normalize_math_expression("2,5"), "2.5");
        // comma kept when the string looks like a list or an interval
        assert_eq!(normalize_math_expression("{2, 5}"), "{2,5}");
        assert_eq!(normalize_math_expression("(1, 2]"), "(1,2]");
    }

    #[test]
    fn test_mixed_number_survives_whitespace_removal() {
        assert_eq!(normalize_math_expression("1 1/2"), "1(1/2)");
        assert_eq!(normalize_math_expression("-2 3/4"), "-2(3/4)");
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            "\\frac{1}{2}",
            "$x^2 + 3x$",
            "2,5",
            "x = 2 or x = -3",
            "(1, 2]",
            "3\\sqrt{2}",
            "√9 × 2",
            "{2, 3}",
        ];
        for raw in samples {
            let once = normalize_math_expression(raw);
            assert_eq!(
                normalize_math_expression(&once),
                once,
                "not idempotent for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_extract_assigned_value() {
        assert_eq!(extract_assigned_value("x=2"), "2");
        assert_eq!(extract_assigned_value("y=-3/4"), "-3/4");
        assert_eq!(extract_assigned_value("x<=5"), "x<=5");
        assert_eq!(extract_assigned_value("2+2"), "2+2");
    }
}
