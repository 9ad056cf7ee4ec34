#![allow(missing_docs)]

use icm_lookup::levenshtein;
use proptest::prelude::*;

proptest! {
    #[test]
    fn distance_is_symmetric(a in "[A-Z0-9]{0,12}", b in "[A-Z0-9]{0,12}") {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn distance_to_self_is_zero(a in "[A-Z0-9]{0,12}") {
        prop_assert_eq!(levenshtein(&a, &a), 0);
    }

    #[test]
    fn distance_from_empty_is_length(a in "[A-Z0-9]{0,12}") {
        prop_assert_eq!(levenshtein("", &a), a.len());
    }

    #[test]
    fn distance_is_bounded(a in "[A-Z0-9]{0,12}", b in "[A-Z0-9]{0,12}") {
        let distance = levenshtein(&a, &b);
        prop_assert!(distance <= a.len().max(b.len()));
        prop_assert!(distance >= a.len().abs_diff(b.len()));
    }

    #[test]
    fn single_substitution_costs_one(a in "[A-Z0-9]{1,12}", index in 0usize..12) {
        let index = index % a.len();
        let mut bytes = a.clone().into_bytes();
        let replacement = if bytes[index] == b'X' { b'Y' } else { b'X' };
        bytes[index] = replacement;
        let mutated = String::from_utf8(bytes).unwrap();
        prop_assert_eq!(levenshtein(&a, &mutated), 1);
    }
}
