//! # Sampling Evaluator Module
//!
//! Numeric evaluation of an expression in one free variable `x` at fixed sample
//! points, used as the last resort when every structural strategy was
//! inconclusive. Safety is the design driver here: the input is validated against
//! a character allow-list before anything is parsed, and evaluation runs over an
//! explicit AST with the restricted grammar `+ - * / ** ( ) number x` - there is
//! no dynamic code execution anywhere.
//!
//! The verdict logic is asymmetric on purpose:
//! - one sample point where both sides evaluate to different values is a
//!   counterexample, conclusive with High confidence;
//! - agreement is only High confidence when at least [`MIN_MATCHING_SAMPLES`]
//!   points evaluated successfully on both sides; fewer yield Uncertain, never
//!   a guess.
//
//                  search recursion diagram
//                "2*x+x**2-1"                      |
//                |       left  | right             |
//                |_________________________________|
//                |     rightmost +- outside ()     |
//                |_________________________________|
//                |    2*x+x**2 |  1   (op '-')     |
//                |        |    |                   |
//                |       \|/   |                   |
//                |     rightmost +- : "2*x"|"x**2" |
//                |  then * / , then ** , then atom |
//                  etc...

use crate::equivalence::numeric::are_numeric_equal;
use crate::equivalence::resolver::{Confidence, EquivalenceResult, Method};
use log::debug;

/// fixed ordered sample points, chosen to avoid common singularities
pub const SAMPLE_POINTS: [f64; 8] = [0.5, 1.0, 1.5, 2.0, 2.5, -0.5, -1.0, -1.5];

/// minimum number of successfully evaluated, matching points for a High verdict
pub const MIN_MATCHING_SAMPLES: usize = 3;

/// Arithmetic expression in one free variable over the restricted grammar.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Const(f64),
    Var,
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Const(value) => *value,
            Expr::Var => x,
            Expr::Add(lhs, rhs) => lhs.eval(x) + rhs.eval(x),
            Expr::Sub(lhs, rhs) => lhs.eval(x) - rhs.eval(x),
            Expr::Mul(lhs, rhs) => lhs.eval(x) * rhs.eval(x),
            Expr::Div(lhs, rhs) => lhs.eval(x) / rhs.eval(x),
            Expr::Pow(base, exponent) => base.eval(x).powf(exponent.eval(x)),
        }
    }
}

/// Recursive descent over the restricted grammar: rightmost `+`/`-` outside
/// brackets first, then rightmost `*`/`/`, then `**` (right-associative), then
/// atoms and bracketed groups.
pub fn parse_arith(input: &str) -> Result<Expr, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty arithmetic expression".to_string());
    }
    if let Some((pos, op)) = find_rightmost_additive_operator(input) {
        let lhs = parse_arith(&input[..pos])?;
        let rhs = parse_arith(&input[pos + 1..])?;
        return Ok(match op {
            '+' => Expr::Add(Box::new(lhs), Box::new(rhs)),
            _ => Expr::Sub(Box::new(lhs), Box::new(rhs)),
        });
    }
    if let Some(rest) = input.strip_prefix('-') {
        if let Ok(value) = input.parse::<f64>() {
            return Ok(Expr::Const(value));
        }
        return Ok(Expr::Sub(
            Box::new(Expr::Const(0.0)),
            Box::new(parse_arith(rest)?),
        ));
    }
    if let Some((pos, op)) = find_rightmost_multiplicative_operator(input) {
        let lhs = parse_arith(&input[..pos])?;
        let rhs = parse_arith(&input[pos + 1..])?;
        return Ok(match op {
            '*' => Expr::Mul(Box::new(lhs), Box::new(rhs)),
            _ => Expr::Div(Box::new(lhs), Box::new(rhs)),
        });
    }
    if let Some(pos) = find_power_operator(input) {
        let base = parse_arith(&input[..pos])?;
        let exponent = parse_arith(&input[pos + 2..])?;
        return Ok(Expr::Pow(Box::new(base), Box::new(exponent)));
    }
    if let Ok(value) = input.parse::<f64>() {
        return Ok(Expr::Const(value));
    }
    if input == "x" {
        return Ok(Expr::Var);
    }
    if is_fully_bracketed(input) {
        return parse_arith(&input[1..input.len() - 1]);
    }
    Err(format!("invalid arithmetic expression: {}", input))
}

/// Substitution-free evaluation at a point. The allow-list check runs BEFORE any
/// parsing; a single character outside `0-9 + - * / ( ) . x` rejects the whole
/// expression. Division by zero and domain errors surface as non-finite values
/// and are rejected as well.
pub fn evaluate_at_point(expr: &str, x: f64) -> Option<f64> {
    let trimmed = expr.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed.chars().all(is_allowed_char) {
        return None;
    }
    let explicit = insert_implicit_multiplication(trimmed);
    let ast = parse_arith(&explicit).ok()?;
    let value = ast.eval(x);
    if value.is_finite() { Some(value) } else { None }
}

/// Samples both expressions at the fixed points and turns the outcome into an
/// equivalence verdict.
pub fn check_by_sampling(expr1: &str, expr2: &str) -> EquivalenceResult {
    let mut matching_points = 0usize;
    for &x in SAMPLE_POINTS.iter() {
        match (evaluate_at_point(expr1, x), evaluate_at_point(expr2, x)) {
            (Some(a), Some(b)) => {
                if !are_numeric_equal(a, b) {
                    return EquivalenceResult {
                        is_equivalent: false,
                        confidence: Confidence::High,
                        method: Method::Sampling,
                        reason: format!(
                            "expressions evaluate differently at x = {}: {} vs {}",
                            x, a, b
                        ),
                    };
                }
                matching_points += 1;
            }
            _ => {}
        }
    }
    debug!(
        "sampling: {} of {} points evaluated and matched",
        matching_points,
        SAMPLE_POINTS.len()
    );
    if matching_points >= MIN_MATCHING_SAMPLES {
        EquivalenceResult {
            is_equivalent: true,
            confidence: Confidence::High,
            method: Method::Sampling,
            reason: format!("expressions agree at {} sample points", matching_points),
        }
    } else {
        EquivalenceResult {
            is_equivalent: false,
            confidence: Confidence::Uncertain,
            method: Method::Sampling,
            reason: format!(
                "only {} sample points could be evaluated on both sides",
                matching_points
            ),
        }
    }
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.' | 'x')
}

/// "2x" -> "2*x", ")(" -> ")*(", "x(" -> "x*(" and so on; normalized input spells
/// multiplication implicitly between a coefficient and the variable
fn insert_implicit_multiplication(expr: &str) -> String {
    let chars: Vec<char> = expr.chars().collect();
    let mut out = String::with_capacity(expr.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 {
            let prev = chars[i - 1];
            let after_value = prev.is_ascii_digit() || prev == ')' || prev == 'x';
            let before_value = c == 'x' || c == '(' || (prev == 'x' && c.is_ascii_digit());
            if after_value && before_value && !(prev == 'x' && c == 'x') {
                out.push('*');
            }
        }
        out.push(c);
    }
    out
}

fn find_rightmost_additive_operator(input: &str) -> Option<(usize, char)> {
    let mut depth = 0i32;
    let mut found = None;
    let mut previous: Option<char> = None;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            '+' | '-' if depth == 0 && i > 0 => {
                // a sign following an operator or an opening bracket is unary
                if !matches!(
                    previous,
                    Some('+') | Some('-') | Some('*') | Some('/') | Some('(')
                ) {
                    found = Some((i, c));
                }
            }
            _ => {}
        }
        previous = Some(c);
    }
    found
}

fn find_rightmost_multiplicative_operator(input: &str) -> Option<(usize, char)> {
    let bytes = input.as_bytes();
    let mut depth = 0i32;
    let mut found = None;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => depth -= 1,
            b'*' if depth == 0 => {
                if i + 1 < bytes.len() && bytes[i + 1] == b'*' {
                    // power operator, not multiplication
                    i += 2;
                    continue;
                }
                found = Some((i, '*'));
            }
            b'/' if depth == 0 => found = Some((i, '/')),
            _ => {}
        }
        i += 1;
    }
    found
}

/// leftmost `**` outside brackets makes the power right-associative
fn find_power_operator(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut depth = 0i32;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => depth -= 1,
            b'*' if depth == 0 && i + 1 < bytes.len() && bytes[i + 1] == b'*' => {
                return Some(i);
            }
            _ => {}
        }
        i += 1;
    }
    None
}

fn is_fully_bracketed(input: &str) -> bool {
    if !(input.starts_with('(') && input.ends_with(')') && input.len() >= 2) {
        return false;
    }
    let mut depth = 0i32;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 && i + 1 != input.len() {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}
