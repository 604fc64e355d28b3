//! Property-based tests for the conversion functions.
//!
//! Checks the whitespace, sign, range and fallback properties over random
//! inputs rather than hand-picked cases.

use proptest::prelude::*;

use crate::{convert, convert_decimal, convert_unsigned, to_words, NumberError, MAX_VALUE};

const MAX: i64 = MAX_VALUE as i64;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// In-range values, biased toward group boundaries where the irregular
/// forms and zero-group elision live.
fn arb_in_range() -> impl Strategy<Value = i64> {
    prop_oneof![
        4 => 0..=MAX,
        2 => 0i64..=2_000,
        2 => (0u32..5, 0i64..=999).prop_map(|(scale, g)| g * 1000i64.pow(scale)),
        1 => (0u32..5, -1i64..=1).prop_map(|(scale, d)| (1000i64.pow(scale) + d).max(0)),
    ]
}

fn arb_out_of_range() -> impl Strategy<Value = i64> {
    prop_oneof![MAX + 1..=i64::MAX, i64::MIN..=-MAX - 1]
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn words_are_single_spaced(n in arb_in_range()) {
        let words = convert(n).unwrap();
        prop_assert!(!words.is_empty());
        prop_assert_eq!(words.trim(), words.as_str());
        prop_assert!(!words.contains("  "), "double space in {:?}", words);
    }

    #[test]
    fn negation_prefixes_negatif(n in arb_in_range().prop_filter("non-zero", |n| *n > 0)) {
        prop_assert_eq!(convert(-n).unwrap(), format!("negatif {}", convert(n).unwrap()));
    }

    #[test]
    fn never_spells_satu_ratus_or_satu_ribu(n in arb_in_range()) {
        let words = convert(n).unwrap();
        prop_assert!(!words.starts_with("satu ratus"), "{}", words);
        prop_assert!(!words.starts_with("satu ribu"), "{}", words);
        prop_assert!(!words.contains(" satu ratus"), "{}", words);
    }

    #[test]
    fn distinct_numbers_have_distinct_words(a in arb_in_range(), b in arb_in_range()) {
        prop_assume!(a != b);
        prop_assert_ne!(convert(a).unwrap(), convert(b).unwrap());
    }

    #[test]
    fn out_of_range_is_rejected(n in arb_out_of_range()) {
        prop_assert_eq!(convert(n), Err(NumberError::OutOfRange { max: MAX_VALUE }));
    }

    #[test]
    fn unsigned_agrees_with_signed(n in 0..=MAX) {
        prop_assert_eq!(convert_unsigned(n as u64), convert(n));
    }

    #[test]
    fn joined_tokens_equal_convert(n in -MAX..=MAX) {
        prop_assert_eq!(to_words(n).unwrap().join(" "), convert(n).unwrap());
    }

    #[test]
    fn decimal_without_precision_truncates(
        x in -1e12f64..1e12f64,
        precision in -5i32..=0,
    ) {
        prop_assert_eq!(convert_decimal(x, precision), convert(x.trunc() as i64));
    }

    #[test]
    fn decimal_never_ends_with_nol_digit(x in 0.0f64..1e6, precision in 1i32..=6) {
        let words = convert_decimal(x, precision).unwrap();
        if let Some((_, fraction)) = words.split_once(" koma ") {
            prop_assert!(!fraction.ends_with("nol"), "{}", words);
            prop_assert!(fraction.split(' ').count() <= precision as usize);
        }
    }
}
