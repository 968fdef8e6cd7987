//! Typeahead suggestions
//!
//! Pure function of the partial input and the dictionary; the expected
//! interaction is repeated calls with a changing partial, each call
//! independent.

use crate::Dictionary;
use std::sync::Arc;

/// Candidates returned per call unless the caller asks for another limit.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Inputs of fewer characters yield no suggestions. A UX threshold, not an
/// algorithmic constraint.
pub const MIN_PARTIAL_CHARS: usize = 2;

/// Autocomplete candidate source over an injected dictionary.
pub struct Suggester {
    dictionary: Arc<Dictionary>,
}

impl Suggester {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Suggester { dictionary }
    }

    /// Dictionary keys containing `partial` (case-insensitive), in table
    /// order, truncated to `limit`.
    pub fn suggest(&self, partial: &str, limit: usize) -> Vec<String> {
        if partial.chars().count() < MIN_PARTIAL_CHARS {
            return Vec::new();
        }

        let probe = partial.to_lowercase();
        self.dictionary
            .keys()
            .filter(|key| key.contains(&probe))
            .take(limit)
            .map(str::to_string)
            .collect()
    }

    /// `suggest` with the default limit.
    pub fn suggest_default(&self, partial: &str) -> Vec<String> {
        self.suggest(partial, DEFAULT_SUGGESTION_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggester() -> Suggester {
        Suggester::new(Arc::new(Dictionary::seed()))
    }

    #[test]
    fn test_partial_matches_key() {
        let suggestions = suggester().suggest("wat", 5);
        assert!(suggestions.contains(&"water".to_string()));
    }

    #[test]
    fn test_single_char_yields_nothing() {
        assert!(suggester().suggest("w", 5).is_empty());
        assert!(suggester().suggest("", 5).is_empty());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let suggestions = suggester().suggest("WaT", 5);
        assert_eq!(suggestions, vec!["water".to_string()]);
    }

    #[test]
    fn test_results_follow_table_order() {
        let suggestions = suggester().suggest("oo", 5);
        // "good morning", "goodbye" and "food" all contain "oo", in seed order
        assert_eq!(
            suggestions,
            vec![
                "good morning".to_string(),
                "goodbye".to_string(),
                "food".to_string()
            ]
        );
    }

    #[test]
    fn test_limit_truncates() {
        let suggestions = suggester().suggest("o", 5);
        assert!(suggestions.is_empty(), "below threshold");

        let suggestions = suggester().suggest("yo", 5);
        assert!(suggestions.len() <= 5);

        let suggestions = suggester().suggest("oo", 2);
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let suggester = suggester();
        let first = suggester.suggest("wat", 5);
        let _ = suggester.suggest("goo", 5);
        assert_eq!(first, suggester.suggest("wat", 5));
    }
}
