//___________________________________TESTS____________________________________
// resolver-level suite: every strategy of the decision chain, the confidence
// contract, and the engine-wide properties (idempotence, reflexivity, symmetry)

#[cfg(test)]
mod tests {
    use crate::equivalence::interval::parse_interval;
    use crate::equivalence::normalizer::normalize_math_expression;
    use crate::equivalence::resolver::{Confidence, Method, check_math_equivalence};
    use crate::equivalence::solution_set::{looks_like_solution_set, parse_solution_set};

    #[test]
    fn test_empty_user_answer_is_conclusively_wrong() {
        let verdict = check_math_equivalence("", "5");
        assert!(!verdict.is_equivalent);
        assert_eq!(verdict.confidence, Confidence::High);
        assert_eq!(verdict.method, Method::EmptyInput);
    }

    #[test]
    fn test_empty_correct_answer_is_ungradable() {
        let verdict = check_math_equivalence("5", "");
        assert!(!verdict.is_equivalent);
        assert_eq!(verdict.confidence, Confidence::Uncertain);
    }

    #[test]
    fn test_exact_match_after_normalization() {
        let verdict = check_math_equivalence("x = 2", "x=2");
        assert!(verdict.is_equivalent);
        assert_eq!(verdict.confidence, Confidence::High);
        assert_eq!(verdict.method, Method::ExactMatch);
    }

    #[test]
    fn test_value_extraction() {
        let verdict = check_math_equivalence("x = 0.5", "y = 1/2");
        assert!(verdict.is_equivalent);
        assert_eq!(verdict.confidence, Confidence::High);
    }

    #[test]
    fn test_fraction_decimal_equivalence() {
        assert!(check_math_equivalence("1/2", "0.5").is_equivalent);
        assert!(check_math_equivalence("\\frac{1}{2}", "0.5").is_equivalent);
        assert!(check_math_equivalence("-3/4", "-0.75").is_equivalent);
    }

    #[test]
    fn test_conclusive_numeric_mismatch() {
        let verdict = check_math_equivalence("4", "5");
        assert!(!verdict.is_equivalent);
        assert_eq!(verdict.confidence, Confidence::High);
        assert_eq!(verdict.method, Method::Numeric);
    }

    #[test]
    fn test_numeric_tolerance_in_chain() {
        assert!(check_math_equivalence("3.00001", "3").is_equivalent);
        let verdict = check_math_equivalence("2.9999", "3");
        assert!(!verdict.is_equivalent);
        assert_eq!(verdict.confidence, Confidence::High);
    }

    #[test]
    fn test_radical_answers() {
        assert!(check_math_equivalence("sqrt(2)", "1.41421").is_equivalent);
        assert!(check_math_equivalence("2\\sqrt{2}", "2.82843").is_equivalent);
        assert!(!check_math_equivalence("sqrt(2)", "1.5").is_equivalent);
    }

    #[test]
    fn test_solution_set_order_independence() {
        let verdict = check_math_equivalence("x=2 or x=-3", "x=-3, x=2");
        assert!(verdict.is_equivalent);
        assert_eq!(verdict.confidence, Confidence::High);
        assert_eq!(verdict.method, Method::SolutionSet);
    }

    #[test]
    fn test_solution_set_multiplicity_ignored() {
        assert!(check_math_equivalence("{2, 2, 3}", "{2, 3}").is_equivalent);
    }

    #[test]
    fn test_solution_set_mixed_representations() {
        assert!(check_math_equivalence("x=1/2 or x=2", "{0.5, 2}").is_equivalent);
    }

    #[test]
    fn test_solution_set_same_size_mismatch_terminates() {
        let verdict = check_math_equivalence("x=1 or x=2", "x=1 or x=3");
        assert!(!verdict.is_equivalent);
        assert_eq!(verdict.confidence, Confidence::High);
        assert_eq!(verdict.method, Method::SolutionSet);
    }

    #[test]
    fn test_solution_set_size_difference_falls_through() {
        // a missing value might be a formatting artifact; no conclusive verdict
        let verdict = check_math_equivalence("1, 2", "1, 2, 3");
        assert_eq!(verdict.confidence, Confidence::Uncertain);
    }

    #[test]
    fn test_interval_bracket_vs_inequality() {
        let verdict = check_math_equivalence("(1, 2]", "1 < x <= 2");
        assert!(verdict.is_equivalent);
        assert_eq!(verdict.method, Method::Interval);
    }

    #[test]
    fn test_interval_inclusivity_matters() {
        let verdict = check_math_equivalence("x < 5", "x <= 5");
        assert!(!verdict.is_equivalent);
        assert_eq!(verdict.confidence, Confidence::High);
        assert!(!check_math_equivalence("(1, 2]", "(1, 2)").is_equivalent);
    }

    #[test]
    fn test_interval_unbounded_side() {
        assert!(check_math_equivalence("[0, inf)", "x >= 0").is_equivalent);
        assert!(check_math_equivalence("x ≥ 3", "x >= 3").is_equivalent);
    }

    #[test]
    fn test_multi_variable_inequality_is_not_an_interval() {
        assert_eq!(parse_interval("x+y<5"), None);
    }

    #[test]
    fn test_commutative_algebra() {
        let verdict = check_math_equivalence("2x+3", "3+2x");
        assert!(verdict.is_equivalent);
        assert_eq!(verdict.method, Method::AlgebraicTerms);
        assert!(check_math_equivalence("x+x+3", "2x+3").is_equivalent);
    }

    #[test]
    fn test_term_mismatch_does_not_terminate() {
        // 2x+3 vs 2x+4 falls past the term step and sampling finds the counterexample
        let verdict = check_math_equivalence("2x+3", "2x+4");
        assert!(!verdict.is_equivalent);
        assert_eq!(verdict.confidence, Confidence::High);
        assert_eq!(verdict.method, Method::Sampling);
    }

    #[test]
    fn test_signed_constant_power_is_not_misfolded() {
        // x-2**2 is x-4; a sign-exponentiation slip would fold it to x+4 and
        // hand out a High-confidence "equivalent" for a wrong answer
        let verdict = check_math_equivalence("x-2**2", "x+4");
        assert!(!verdict.is_equivalent);
        assert!(check_math_equivalence("x-2**2", "x-4").is_equivalent);
    }

    #[test]
    fn test_sampling_expansion() {
        let verdict = check_math_equivalence("(x+1)**2", "x**2+2*x+1");
        assert!(verdict.is_equivalent);
        assert_eq!(verdict.confidence, Confidence::High);
        assert_eq!(verdict.method, Method::Sampling);
    }

    #[test]
    fn test_exhaustion_refuses_to_guess() {
        let verdict = check_math_equivalence("x", "y");
        assert!(!verdict.is_equivalent);
        assert_eq!(verdict.confidence, Confidence::Uncertain);
        assert_eq!(verdict.method, Method::Exhausted);
        assert_eq!(
            verdict.reason,
            "could not determine equivalence with high confidence"
        );
    }

    #[test]
    fn test_reflexivity() {
        let samples = [
            "5",
            "1/2",
            "x=2",
            "2x+3",
            "x < 5",
            "(1, 2]",
            "x=2 or x=-3",
            "\\frac{1}{2}",
            "sqrt(2)",
        ];
        for answer in samples {
            let verdict = check_math_equivalence(answer, answer);
            assert!(verdict.is_equivalent, "not reflexive for {:?}", answer);
            assert_eq!(verdict.confidence, Confidence::High);
        }
    }

    #[test]
    fn test_symmetry_on_structural_paths() {
        let pairs = [
            ("1/2", "0.5"),
            ("4", "5"),
            ("x < 5", "x <= 5"),
            ("(1, 2]", "1 < x <= 2"),
            ("x=1 or x=2", "{1, 2}"),
        ];
        for (a, b) in pairs {
            let forward = check_math_equivalence(a, b);
            let backward = check_math_equivalence(b, a);
            assert_eq!(forward.confidence, Confidence::High);
            assert_eq!(backward.confidence, Confidence::High);
            assert_eq!(
                forward.is_equivalent, backward.is_equivalent,
                "asymmetric verdict for {:?} / {:?}",
                a, b
            );
        }
    }

    #[test]
    fn test_normalization_idempotent_through_resolver_inputs() {
        for raw in ["\\frac{2}{4}", "x ≥ 3", "$2 \\cdot 3$", "1 1/2"] {
            let once = normalize_math_expression(raw);
            assert_eq!(normalize_math_expression(&once), once);
        }
    }

    #[test]
    fn test_confidence_has_exactly_two_tiers() {
        use strum::IntoEnumIterator;
        // High and Uncertain, nothing in between for a "probably" verdict
        assert_eq!(Confidence::iter().count(), 2);
        assert!(Confidence::iter().any(|c| c == Confidence::High));
        assert!(Confidence::iter().any(|c| c == Confidence::Uncertain));
    }

    #[test]
    fn test_method_display_names_are_unique() {
        use std::collections::BTreeSet;
        use strum::IntoEnumIterator;
        // reasons and log lines identify the strategy by its display name
        let names: Vec<String> = Method::iter().map(|m| m.to_string()).collect();
        let unique: BTreeSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_set_heuristic() {
        assert!(looks_like_solution_set("x=2 or x=-3"));
        assert!(looks_like_solution_set("{1}"));
        assert!(looks_like_solution_set("1; 2"));
        assert!(!looks_like_solution_set("2x+3"));
        // "or" must be a word, not a substring
        assert!(!looks_like_solution_set("coordinate"));
    }

    #[test]
    fn test_set_parsing_unwraps_assignments() {
        let set = parse_solution_set("x=2 or x=-3");
        assert_eq!(set.len(), 2);
        assert!(set.contains("2"));
        assert!(set.contains("-3"));
    }
}
