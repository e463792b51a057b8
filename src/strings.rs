// 🔤 String Queries - Word-list sorting and filtering exercises
//
// Fully independent of the member modules: stateless functions over word
// slices, with explicit comparator and predicate closures. Sorts are
// stable; inputs are never mutated.

use std::collections::BTreeMap;

// ============================================================================
// SORTS
// ============================================================================

/// Sort words by length, ascending. Equal lengths keep input order.
pub fn sorted_by_length<'a>(words: &[&'a str]) -> Vec<&'a str> {
    let mut sorted = words.to_vec();
    sorted.sort_by(|a, b| a.len().cmp(&b.len()));
    sorted
}

/// Sort words in natural lexicographic order
pub fn sorted_natural<'a>(words: &[&'a str]) -> Vec<&'a str> {
    let mut sorted = words.to_vec();
    sorted.sort();
    sorted
}

// ============================================================================
// FILTERS
// ============================================================================

/// Keep only words of even length, in input order
pub fn even_length_words<'a>(words: &[&'a str]) -> Vec<&'a str> {
    words.iter().filter(|w| w.len() % 2 == 0).copied().collect()
}

/// Keep only entries that are present AND of even length. The two
/// conditions are separate predicates combined in the filter, so either
/// can be swapped out on its own.
pub fn present_even_length_words<'a>(entries: &[Option<&'a str>]) -> Vec<&'a str> {
    let present = |entry: Option<&str>| entry.is_some();
    let even_length = |entry: Option<&str>| entry.map_or(false, |w| w.len() % 2 == 0);

    entries
        .iter()
        .copied()
        .filter(|&entry| present(entry) && even_length(entry))
        .flatten()
        .collect()
}

// ============================================================================
// MAPPINGS
// ============================================================================

/// Map each word to its length
pub fn word_lengths(words: &[&str]) -> BTreeMap<String, usize> {
    words.iter().map(|w| (w.to_string(), w.len())).collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<&'static str> {
        vec!["this", "is", "a", "list", "of", "strings"]
    }

    #[test]
    fn test_sorted_by_length_is_stable() {
        let sorted = sorted_by_length(&words());

        // "is" before "of" and "this" before "list": ties keep input order
        assert_eq!(sorted, vec!["a", "is", "of", "this", "list", "strings"]);
    }

    #[test]
    fn test_sorted_natural() {
        let sorted = sorted_natural(&words());
        assert_eq!(sorted, vec!["a", "is", "list", "of", "strings", "this"]);
    }

    #[test]
    fn test_sorting_does_not_touch_input() {
        let original = words();
        sorted_by_length(&original);
        sorted_natural(&original);
        assert_eq!(original, words());
    }

    #[test]
    fn test_even_length_words() {
        let evens = even_length_words(&words());
        assert_eq!(evens, vec!["this", "is", "list", "of"]);
    }

    #[test]
    fn test_present_even_length_words() {
        let entries = vec![
            Some("this"),
            Some("is"),
            None,
            Some("a"),
            None,
            Some("list"),
            Some("of"),
            None,
            Some("strings"),
        ];

        let filtered = present_even_length_words(&entries);
        assert_eq!(filtered, vec!["this", "is", "list", "of"]);
    }

    #[test]
    fn test_word_lengths() {
        let lengths = word_lengths(&words());

        assert_eq!(lengths.len(), 6);
        assert_eq!(lengths["a"], 1);
        assert_eq!(lengths["of"], 2);
        assert_eq!(lengths["strings"], 7);
    }
}
