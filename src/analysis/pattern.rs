// Whole-word, case-insensitive matching.
//
// The word (or raw pattern) is wrapped as `(?i)\b(?:...)\b`. Both `(?i)` and
// `\b` are Unicode-aware in `regex`, so "école" matches "École" and the "é"
// in "café" is a word character, not a boundary. Matches are the leftmost,
// non-overlapping ones, with alternatives tried in order at each start.

use std::ops::Range;

use anyhow::{Context, Result};
use regex::Regex;

/// A compiled whole-word pattern.
#[derive(Debug, Clone)]
pub struct WordPattern {
    // None for an empty literal (or one too large to compile); matches nothing
    regex: Option<Regex>,
}

impl WordPattern {
    /// Match `word` literally; regex metacharacters in it have no effect.
    pub fn literal(word: &str) -> Self {
        if word.is_empty() {
            return Self { regex: None };
        }
        let regex = Regex::new(&bounded(&regex::escape(word))).ok();
        Self { regex }
    }

    /// Treat `pattern` as a regular expression. The whole pattern is grouped
    /// before the word boundaries apply, so `a|b` means "the word a or the word b".
    pub fn raw(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&bounded(pattern))
            .with_context(|| format!("Invalid search pattern: {pattern}"))?;
        Ok(Self { regex: Some(regex) })
    }

    /// Byte ranges of every whole-word match in `text`, left to right.
    pub fn find_ranges(&self, text: &str) -> Vec<Range<usize>> {
        match &self.regex {
            Some(regex) => regex.find_iter(text).map(|m| m.range()).collect(),
            None => Vec::new(),
        }
    }

    /// Whether `text` contains at least one whole-word match.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|regex| regex.is_match(text))
    }

    /// Number of non-overlapping whole-word matches in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.regex
            .as_ref()
            .map_or(0, |regex| regex.find_iter(text).count())
    }
}

fn bounded(pattern: &str) -> String {
    format!(r"(?i)\b(?:{pattern})\b")
}

/// Word characters: letters, digits and underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_is_case_insensitive_whole_word() {
        let p = WordPattern::literal("rust");
        assert_eq!(p.count("Rust, RUST and rust. Rusty trusts rust_lang."), 3);
    }

    #[test]
    fn test_literal_escapes_metacharacters() {
        let p = WordPattern::literal("c.d");
        assert_eq!(p.count("c.d is not cxd"), 1);
        assert!(!p.is_match("cxd only"));
    }

    #[test]
    fn test_unicode_letters_are_not_boundaries() {
        let p = WordPattern::literal("caf");
        assert_eq!(p.count("café caf"), 1);

        let p = WordPattern::literal("café");
        assert_eq!(p.count("un café noir"), 1);
    }

    #[test]
    fn test_case_folding_is_unicode() {
        let p = WordPattern::literal("école");
        assert_eq!(p.count("École normale, ÉCOLE, école."), 3);
        assert!(WordPattern::literal("ÜBER").is_match("über alles"));
    }

    #[test]
    fn test_later_match_after_failed_start() {
        // The first "a-a" starts inside "xa", the second one is a real word match
        let p = WordPattern::literal("a-a");
        assert_eq!(p.find_ranges("xa-a-a"), vec![3..6]);
    }

    #[test]
    fn test_raw_pattern_groups_alternation() {
        let p = WordPattern::raw("cat|dog").unwrap();
        assert_eq!(p.count("cat dog catalog hotdog"), 2);
    }

    #[test]
    fn test_raw_alternation_with_shared_prefix() {
        // "go" fails its trailing boundary inside "gopher"; "gopher" must still be tried
        let p = WordPattern::raw("go|gopher").unwrap();
        assert_eq!(p.find_ranges("the gopher ran"), vec![4..10]);
        assert_eq!(p.count("go gopher going"), 2);
    }

    #[test]
    fn test_raw_pattern_rejects_invalid_regex() {
        assert!(WordPattern::raw("(unclosed").is_err());
    }

    #[test]
    fn test_phrase_match() {
        let p = WordPattern::raw("refers to|stands for").unwrap();
        assert!(p.is_match("API stands for application programming interface"));
        assert!(!p.is_match("standstill"));
    }

    #[test]
    fn test_empty_literal_matches_nothing() {
        let p = WordPattern::literal("");
        assert_eq!(p.count("some text"), 0);
        assert!(!p.is_match("some text"));
    }
}
