// Word frequency model.
//
// A token is a whole word made only of ASCII letters, lowercased, at least
// `min_len` letters long. Words glued to digits or underscores ("abc123",
// "snake_case") are not tokens at all. Counting skips stopwords; the
// normalized table divides every count by the largest one so the top word
// always scores 1.0.

use std::collections::HashMap;
use std::collections::HashSet;

use super::pattern::is_word_char;
use super::stopwords;

/// Token length and stopword list for one kind of analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPolicy {
    /// 3+ letter tokens, base stopwords. Used for summaries.
    Summary,
    /// 4+ letter tokens, base stopwords plus pronouns. Used for chart data.
    Visual,
}

impl TokenPolicy {
    pub fn min_len(self) -> usize {
        match self {
            TokenPolicy::Summary => 3,
            TokenPolicy::Visual => 4,
        }
    }

    pub fn stopwords(self) -> &'static HashSet<&'static str> {
        match self {
            TokenPolicy::Summary => stopwords::base(),
            TokenPolicy::Visual => stopwords::extended(),
        }
    }

    pub fn is_stopword(self, token: &str) -> bool {
        self.stopwords().contains(token)
    }

    /// All tokens in `text`, left to right, stopwords included.
    pub fn tokenize(self, text: &str) -> Vec<String> {
        let min_len = self.min_len();
        text.split(|c: char| !is_word_char(c))
            .filter(|word| word.len() >= min_len && word.bytes().all(|b| b.is_ascii_alphabetic()))
            .map(|word| word.to_ascii_lowercase())
            .collect()
    }
}

/// Raw occurrence counts of non-stopword tokens.
///
/// Entries keep first-appearance order, which is also the tie-break order
/// whenever counts are ranked.
#[derive(Debug, Clone, Default)]
pub struct TokenCounts {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
    total_tokens: usize,
}

impl TokenCounts {
    /// Tally the tokens of `text` under `policy`.
    pub fn tally(text: &str, policy: TokenPolicy) -> Self {
        let mut counts = Self::default();

        for token in policy.tokenize(text) {
            counts.total_tokens += 1;
            if policy.is_stopword(&token) {
                continue;
            }
            match counts.index.get(&token) {
                Some(&i) => counts.entries[i].1 += 1,
                None => {
                    counts.index.insert(token.clone(), counts.entries.len());
                    counts.entries.push((token, 1));
                }
            }
        }

        counts
    }

    /// Count for one token (0 when absent or a stopword).
    pub fn get(&self, token: &str) -> usize {
        self.index.get(token).map_or(0, |&i| self.entries[i].1)
    }

    /// The `n` most frequent tokens, highest count first.
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .entries
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
            .collect();
        // Stable sort: equal counts stay in first-appearance order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Number of tokens seen, stopwords included.
    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    /// Number of distinct non-stopword tokens.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Token counts normalized by the maximum count, so every score is in (0, 1].
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Build a normalized table over `text` under `policy`.
    pub fn build(text: &str, policy: TokenPolicy) -> Self {
        Self::from_counts(&TokenCounts::tally(text, policy))
    }

    pub fn from_counts(counts: &TokenCounts) -> Self {
        let max = counts.entries.iter().map(|(_, c)| *c).max().unwrap_or(0);
        if max == 0 {
            return Self::default();
        }

        let entries: Vec<(String, f64)> = counts
            .entries
            .iter()
            .map(|(token, count)| (token.clone(), *count as f64 / max as f64))
            .collect();
        let index = counts.index.clone();

        Self { entries, index }
    }

    /// Normalized score for `token`; 0.0 for unknown tokens and stopwords.
    pub fn score(&self, token: &str) -> f64 {
        self.index.get(token).map_or(0.0, |&i| self.entries[i].1)
    }

    /// Every token with its score, highest first. Ties keep first-appearance order.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .entries
            .iter()
            .map(|(token, score)| (token.as_str(), *score))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
