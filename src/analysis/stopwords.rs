// Fixed English stopword lists.
//
// There are two lists on purpose. Summaries filter with BASE_STOPWORDS over
// 3+ letter tokens; chart data filters with EXTENDED_STOPWORDS over 4+
// letter tokens, which adds possessive and object pronouns. Keep them
// separate: merging them changes which words rank as keywords.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common function words ignored when building summary frequencies.
pub const BASE_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "shall", "can", "this",
    "that", "these", "those", "it", "its", "by", "from", "as", "into", "through", "during",
    "before", "after", "above", "below", "between", "each", "so", "such", "than", "too",
    "very", "just", "also", "about", "up", "out", "if", "then", "there", "when", "where",
    "which", "who", "whom", "how", "all", "both", "few", "more", "most", "other", "some",
    "any", "only", "same", "own", "not", "no", "nor", "he", "she", "they", "we", "you", "i",
];

/// Pronouns added on top of [`BASE_STOPWORDS`] for keyword charts.
pub const PRONOUN_STOPWORDS: &[&str] = &[
    "its", "our", "their", "your", "his", "her", "my", "am", "us", "me", "him",
];

static BASE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BASE_STOPWORDS.iter().copied().collect());

static EXTENDED_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    BASE_STOPWORDS
        .iter()
        .chain(PRONOUN_STOPWORDS)
        .copied()
        .collect()
});

/// The base list as a lookup set. Entries are lowercase.
pub fn base() -> &'static HashSet<&'static str> {
    &BASE_SET
}

/// The base list plus pronouns, used by the chart keyword table.
pub fn extended() -> &'static HashSet<&'static str> {
    &EXTENDED_SET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_is_superset_of_base() {
        assert!(base().is_subset(extended()));
        assert!(extended().contains("their"));
        assert!(!base().contains("their"));
    }

    #[test]
    fn test_lists_are_lowercase() {
        for word in BASE_STOPWORDS.iter().chain(PRONOUN_STOPWORDS) {
            assert_eq!(*word, word.to_lowercase());
        }
    }
}
