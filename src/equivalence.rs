#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns raw student input (free text, LaTeX fragments, unicode math glyphs)
/// into a canonical ASCII operator form; normalization is idempotent and never fails
///# Example
/// ```
/// use RustedMathCheck::equivalence::normalizer::normalize_math_expression;
/// let normalized = normalize_math_expression("\\frac{1}{2} \\cdot x^2");
/// assert_eq!(normalized, "(1)/(2)*x**2");
/// assert_eq!(normalize_math_expression(&normalized), normalized);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod normalizer;
///____________________________________________________________________________________________________________________________
/// extraction of a scalar value from a normalized token: direct literal, simple fraction,
/// mixed number, square root, scaled square root. Returns None when no pattern applies -
/// callers treat that as "this strategy does not apply", never as a failure.
///# Example
/// ```
/// use RustedMathCheck::equivalence::numeric::{parse_numeric, are_numeric_equal};
/// assert_eq!(parse_numeric("1/2"), Some(0.5));
/// assert!(are_numeric_equal(parse_numeric("sqrt(4)").unwrap(), 2.0));
/// assert_eq!(parse_numeric("sqrt(-1)"), None);
/// ```
/// ____________________________________________________________________________________________________________________________
pub mod numeric;
/// multi-valued answers: "x=2 or x=-3", "{1, 2, 3}". Compared as true sets -
/// order and multiplicity are irrelevant.
pub mod solution_set;
/// bracket intervals "(a,b]" and single-variable inequalities "x >= 3"
pub mod interval;
/// polynomial-in-one-or-more-letters canonical form: monomial key -> coefficient.
/// Gives order-independent, commutative comparison: 2x+3 == 3+2x == x+x+3.
pub mod terms;
///______________________________________________________________________________________________________________________________________________
/// safe numeric evaluation at fixed sample points, used only when structural methods
/// are inconclusive. AST-based with a strict character allow-list - never dynamic
/// code execution.
/// _____________________________________________________________________________________________________________________________________________
pub mod sampling;
/// the ordered chain of equivalence strategies and the High/Uncertain confidence contract
///# Example
/// ```
/// use RustedMathCheck::equivalence::resolver::{check_math_equivalence, Confidence};
/// let verdict = check_math_equivalence("1/2", "0.5");
/// assert!(verdict.is_equivalent);
/// assert_eq!(verdict.confidence, Confidence::High);
/// ```
pub mod resolver;
///
mod equivalence_tests;
