use proptest::prelude::*;
use string_analysis::analysis::{analyze, content_hash, word_count};

proptest! {
    #[test]
    fn hash_is_deterministic(s in ".{0,200}") {
        let first = content_hash(&s);
        prop_assert_eq!(first.len(), 64);
        prop_assert_eq!(first, content_hash(&s));
    }

    #[test]
    fn frequencies_sum_to_length(s in ".{0,200}") {
        let props = analyze(&s);
        let total: usize = props.character_frequency_map.values().sum();
        prop_assert_eq!(total, props.length);
        prop_assert!(props.character_frequency_map.values().all(|&n| n > 0));
    }

    #[test]
    fn unique_characters_is_map_size(s in ".{0,200}") {
        let props = analyze(&s);
        prop_assert_eq!(props.unique_characters, props.character_frequency_map.len());
        prop_assert!(props.unique_characters <= props.length);
    }

    #[test]
    fn palindrome_matches_reversal(s in "[a-c ]{0,12}") {
        let reversed: String = s.chars().rev().collect();
        prop_assert_eq!(analyze(&s).is_palindrome, s == reversed);
    }

    #[test]
    fn mirrored_strings_are_palindromes(half in ".{0,50}") {
        let reversed: String = half.chars().rev().collect();
        let mirrored = format!("{}{}", half, reversed);
        prop_assert!(analyze(&mirrored).is_palindrome);
    }

    #[test]
    fn word_count_ignores_extra_whitespace(words in prop::collection::vec("[a-z]{1,8}", 0..10)) {
        let spaced = format!("  {}\t", words.join("   \n "));
        prop_assert_eq!(word_count(&spaced), words.len());
    }
}
