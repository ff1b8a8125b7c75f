//! Property-based tests for precept-guard.

use precept_guard::prelude::*;
use proptest::prelude::*;

// ============================================================================
// PASS-THROUGH: a passing check returns the guard untouched
// ============================================================================

proptest! {
    #[test]
    fn passing_chain_preserves_value_and_name(n in any::<i64>(), name in "[a-z_]{1,12}") {
        let guard = requires(n, name.clone())
            .is_not_null()
            .and_then(|g| g.is_greater_than_or_equal_to(i64::MIN))
            .and_then(|g| g.is_less_than_or_equal_to(i64::MAX));
        let guard = guard.expect("every i64 is within [MIN, MAX]");
        prop_assert_eq!(guard.name(), name.as_str());
        prop_assert_eq!(*guard.value(), n);
    }

    #[test]
    fn present_value_is_never_null(v in proptest::option::of(any::<u32>())) {
        prop_assert_eq!(requires(v, "v").is_not_null().is_ok(), v.is_some());
    }
}

// ============================================================================
// ORDERING LAWS
// ============================================================================

proptest! {
    #[test]
    fn ordering_checks_match_operators(n in any::<i32>(), bound in any::<i32>()) {
        prop_assert_eq!(requires(n, "n").is_greater_than(bound).is_ok(), n > bound);
        prop_assert_eq!(requires(n, "n").is_greater_than_or_equal_to(bound).is_ok(), n >= bound);
        prop_assert_eq!(requires(n, "n").is_less_than(bound).is_ok(), n < bound);
        prop_assert_eq!(requires(n, "n").is_less_than_or_equal_to(bound).is_ok(), n <= bound);
    }

    #[test]
    fn null_or_variants_agree_on_present_values(n in any::<i32>(), bound in any::<i32>()) {
        prop_assert_eq!(
            requires(Some(n), "n").is_null_or_greater_than(bound).is_ok(),
            requires(n, "n").is_greater_than(bound).is_ok()
        );
        prop_assert_eq!(
            requires(Some(n), "n").is_null_or_less_than_or_equal_to(bound).is_ok(),
            requires(n, "n").is_less_than_or_equal_to(bound).is_ok()
        );
    }

    #[test]
    fn absent_passes_every_null_or_variant(bound in any::<i32>()) {
        prop_assert!(requires(None::<i32>, "n").is_null_or_greater_than(bound).is_ok());
        prop_assert!(requires(None::<i32>, "n").is_null_or_less_than(bound).is_ok());
        prop_assert!(requires(None::<i32>, "n").is_greater_than(bound).is_err());
        prop_assert!(requires(None::<i32>, "n").is_less_than(bound).is_err());
    }

    #[test]
    fn range_message_format(n in 0_i32..1000, bound in 0_i32..1000) {
        prop_assume!(n >= bound);
        let err = requires(n, "count").is_less_than(bound).unwrap_err();
        prop_assert_eq!(err.to_string(), format!("count ({n}) should be less than {bound}."));
        prop_assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }
}

// ============================================================================
// STRING LAWS
// ============================================================================

proptest! {
    #[test]
    fn linguistic_matches_ordinal_on_plain_ascii(hay in "[a-z ]{0,12}", needle in "[a-z ]{0,3}") {
        let guard = || requires(hay.as_str(), "s");
        prop_assert_eq!(
            guard().starts_with(&needle).is_ok(),
            guard().starts_with_using(&needle, StringComparison::Ordinal).is_ok()
        );
        prop_assert_eq!(
            guard().ends_with(&needle).is_ok(),
            guard().ends_with_using(&needle, StringComparison::Ordinal).is_ok()
        );
        prop_assert_eq!(
            guard().contains(&needle).is_ok(),
            guard().contains_using(&needle, StringComparison::Ordinal).is_ok()
        );
    }

    #[test]
    fn ignore_case_accepts_any_casing(s in "[a-zA-Z]{1,12}") {
        let upper = s.to_ascii_uppercase();
        prop_assert!(requires(s.as_str(), "s")
            .starts_with_using(&upper, StringComparison::OrdinalIgnoreCase)
            .is_ok());
        prop_assert!(requires(s.as_str(), "s")
            .contains_using(&upper, StringComparison::LinguisticIgnoreCase)
            .is_ok());
    }

    #[test]
    fn exact_match_survives_ignore_case(
        hay in "[a-zA-Z\u{391}-\u{3a1}\u{3a3}-\u{3a9}\u{3b1}-\u{3c9}\u{1c4}-\u{1c6} ]{0,10}",
        skip in 0_usize..10,
        len in 0_usize..4
    ) {
        let chars: Vec<char> = hay.chars().collect();
        let start = skip.min(chars.len());
        let end = (start + len).min(chars.len());
        let middle: String = chars[start..end].iter().collect();
        let prefix: String = chars[..end - start].iter().collect();
        let suffix: String = chars[chars.len() - (end - start)..].iter().collect();

        for mode in [StringComparison::OrdinalIgnoreCase, StringComparison::LinguisticIgnoreCase] {
            prop_assert!(requires(hay.as_str(), "s").starts_with_using(&prefix, mode).is_ok());
            prop_assert!(requires(hay.as_str(), "s").ends_with_using(&suffix, mode).is_ok());
            prop_assert!(requires(hay.as_str(), "s").contains_using(&middle, mode).is_ok());
        }
    }

    #[test]
    fn white_space_check_matches_trim(s in "[ \\ta-z]{0,8}") {
        let blank = !s.is_empty() && s.trim().is_empty();
        prop_assert_eq!(requires(s.as_str(), "s").is_not_white_space().is_err(), blank);
    }
}
