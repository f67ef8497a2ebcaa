//! Property-based cross-validation of the search engines.
//!
//! The naive engine is the obviously-correct oracle; KMP must agree with it
//! on match presence and first-match offset for every input.

use libstralg::search::{find_substring, kmp_search, naive_search, SearchAlgorithm};
use proptest::prelude::*;

fn arb_needle() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab]{0,8}").unwrap()
}

fn arb_haystack() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab]{0,40}").unwrap()
}

fn arb_unicode_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..16).prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn kmp_agrees_with_naive(needle in arb_needle(), haystack in arb_haystack()) {
        prop_assert_eq!(
            kmp_search(&needle, &haystack),
            naive_search(&needle, &haystack),
            "KMP and naive disagree for '{}' in '{}'",
            &needle, &haystack
        );
    }

    #[test]
    fn kmp_agrees_with_naive_unicode(
        needle in arb_unicode_string(),
        haystack in arb_unicode_string()
    ) {
        prop_assert_eq!(kmp_search(&needle, &haystack), naive_search(&needle, &haystack));
    }

    #[test]
    fn reported_offset_is_an_exact_match(needle in arb_needle(), haystack in arb_haystack()) {
        if let Some(offset) = kmp_search(&needle, &haystack) {
            let haystack_chars: Vec<char> = haystack.chars().collect();
            let needle_chars: Vec<char> = needle.chars().collect();
            let m = needle_chars.len();

            prop_assert!(offset + m <= haystack_chars.len());
            prop_assert_eq!(&haystack_chars[offset..offset + m], &needle_chars[..]);

            // No earlier offset yields an equal-length match.
            for earlier in 0..offset {
                prop_assert_ne!(&haystack_chars[earlier..earlier + m], &needle_chars[..]);
            }
        }
    }

    #[test]
    fn needle_embedded_in_haystack_is_found(
        prefix in arb_haystack(),
        needle in prop::string::string_regex("[ab]{1,8}").unwrap(),
        suffix in arb_haystack()
    ) {
        let haystack = format!("{}{}{}", prefix, needle, suffix);
        let expected_by = prefix.chars().count();

        for algorithm in [SearchAlgorithm::Naive, SearchAlgorithm::KnuthMorrisPratt] {
            let offset = find_substring(algorithm, &needle, &haystack);
            prop_assert!(offset.is_some(), "{} missed an embedded pattern", algorithm);
            prop_assert!(
                offset.unwrap() <= expected_by,
                "{} reported offset {} past the known occurrence at {}",
                algorithm, offset.unwrap(), expected_by
            );
        }
    }

    #[test]
    fn needle_prefix_of_haystack_matches_at_zero(haystack in arb_haystack()) {
        let needle: String = haystack.chars().take(4).collect();
        prop_assert_eq!(kmp_search(&needle, &haystack), Some(0));
    }
}
