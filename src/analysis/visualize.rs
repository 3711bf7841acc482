// Chart data for a document: top keywords, where a search word occurs, and
// how long the sentences are.
//
// Keywords here use the 4+ letter token policy with the extended stopword
// list, not the summary policy. Positions are character offsets of each
// match as a percentage of the document length, rounded to one decimal.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use super::frequency::{TokenCounts, TokenPolicy};
use super::pattern::WordPattern;
use super::segment::segment;

/// Number of keywords reported in the chart table.
pub const TOP_WORDS: usize = 12;

/// How a search word is turned into a pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Match the word literally (default)
    #[default]
    Literal,
    /// Treat the word as a regular expression; invalid patterns are an error
    Pattern,
}

/// One row of the keyword table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Sentence count per word-count range. Serializes as an ordered map keyed
/// by the range label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentenceLengths {
    #[serde(rename = "1-10")]
    pub up_to_10: usize,
    #[serde(rename = "11-20")]
    pub up_to_20: usize,
    #[serde(rename = "21-30")]
    pub up_to_30: usize,
    #[serde(rename = "31-50")]
    pub up_to_50: usize,
    #[serde(rename = "50+")]
    pub over_50: usize,
}

impl SentenceLengths {
    /// Count a sentence of `words` whitespace-separated words.
    pub fn record(&mut self, words: usize) {
        match words {
            0..=10 => self.up_to_10 += 1,
            11..=20 => self.up_to_20 += 1,
            21..=30 => self.up_to_30 += 1,
            31..=50 => self.up_to_50 += 1,
            _ => self.over_50 += 1,
        }
    }

    /// Bucket labels with their counts, shortest range first.
    pub fn buckets(&self) -> [(&'static str, usize); 5] {
        [
            ("1-10", self.up_to_10),
            ("11-20", self.up_to_20),
            ("21-30", self.up_to_30),
            ("31-50", self.up_to_50),
            ("50+", self.over_50),
        ]
    }

    pub fn total(&self) -> usize {
        self.buckets().iter().map(|(_, n)| n).sum()
    }
}

/// Everything the document charts need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visualization {
    pub top_words: Vec<WordCount>,
    /// Percent offsets (0–100, one decimal) of each search word match
    pub word_positions: Vec<f64>,
    pub sentence_lengths: SentenceLengths,
    /// 4+ letter tokens in the document, stopwords included
    pub total_words: usize,
    pub total_sentences: usize,
    /// The search word as given (trimmed), empty when none was supplied
    pub search_word: String,
    pub search_count: usize,
}

/// Compute chart data for `text`, optionally locating `search_word`.
///
/// Fails only when `mode` is [`MatchMode::Pattern`] and the word is not a
/// valid regular expression.
pub fn visualize(text: &str, search_word: Option<&str>, mode: MatchMode) -> Result<Visualization> {
    let counts = TokenCounts::tally(text, TokenPolicy::Visual);
    let top_words: Vec<WordCount> = counts
        .top(TOP_WORDS)
        .into_iter()
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect();

    let search_word = search_word.map(str::trim).unwrap_or_default();
    let word_positions = if search_word.is_empty() {
        Vec::new()
    } else {
        let pattern = match mode {
            MatchMode::Literal => WordPattern::literal(search_word),
            MatchMode::Pattern => WordPattern::raw(search_word)?,
        };
        match_positions(text, &pattern)
    };

    let sentences = segment(text);
    let mut sentence_lengths = SentenceLengths::default();
    for sentence in &sentences {
        sentence_lengths.record(sentence.split_whitespace().count());
    }

    debug!(
        tokens = counts.total_tokens(),
        sentences = sentences.len(),
        matches = word_positions.len(),
        "Computed chart data"
    );

    Ok(Visualization {
        top_words,
        search_count: word_positions.len(),
        word_positions,
        sentence_lengths,
        total_words: counts.total_tokens(),
        total_sentences: sentences.len(),
        search_word: search_word.to_string(),
    })
}

/// Percent offset of each match start, measured in characters.
fn match_positions(text: &str, pattern: &WordPattern) -> Vec<f64> {
    let total_chars = text.chars().count();
    if total_chars == 0 {
        return Vec::new();
    }

    let mut positions = Vec::new();
    // Matches come in order, so char offsets can be counted incrementally
    let mut byte_cursor = 0;
    let mut char_cursor = 0;
    for range in pattern.find_ranges(text) {
        char_cursor += text[byte_cursor..range.start].chars().count();
        byte_cursor = range.start;
        positions.push(round_one_decimal(char_cursor as f64 / total_chars as f64 * 100.0));
    }
    positions
}

/// Round to one decimal, exact halves to the even digit (6.25 -> 6.2, 18.75 -> 18.8).
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_are_percent_of_characters() {
        // 10 characters, matches at 0 and 5
        let viz = visualize("rust rust.", Some("rust"), MatchMode::Literal).unwrap();
        assert_eq!(viz.word_positions, vec![0.0, 50.0]);
        assert_eq!(viz.search_count, 2);
        assert_eq!(viz.search_word, "rust");
    }

    #[test]
    fn test_positions_count_characters_not_bytes() {
        // "éééé " is 5 chars but 9 bytes
        let viz = visualize("éééé word", Some("word"), MatchMode::Literal).unwrap();
        assert_eq!(viz.word_positions, vec![55.6]);
    }

    #[test]
    fn test_exact_halves_round_to_even() {
        assert_eq!(round_one_decimal(6.25), 6.2);
        assert_eq!(round_one_decimal(18.75), 18.8);
        assert_eq!(round_one_decimal(100.0 / 3.0), 33.3);

        // 16 characters, match at offset 1: exactly 6.25%
        let viz = visualize(" go xxxxxxxxxxxx", Some("go"), MatchMode::Literal).unwrap();
        assert_eq!(viz.word_positions, vec![6.2]);
    }

    #[test]
    fn test_literal_mode_escapes() {
        let viz = visualize("a.c abc", Some("a.c"), MatchMode::Literal).unwrap();
        assert_eq!(viz.search_count, 1);
    }

    #[test]
    fn test_pattern_mode() {
        let viz = visualize("cat dog bird", Some("cat|bird"), MatchMode::Pattern).unwrap();
        assert_eq!(viz.search_count, 2);
        assert!(visualize("cat", Some("(cat"), MatchMode::Pattern).is_err());
    }

    #[test]
    fn test_pattern_alternatives_sharing_a_prefix() {
        let viz = visualize("the gopher ran", Some("go|gopher"), MatchMode::Pattern).unwrap();
        assert_eq!(viz.search_count, 1);
        assert_eq!(viz.word_positions, vec![28.6]);
    }

    #[test]
    fn test_blank_search_word_is_ignored() {
        let viz = visualize("some words here", Some("   "), MatchMode::Pattern).unwrap();
        assert!(viz.word_positions.is_empty());
        assert_eq!(viz.search_word, "");
    }

    #[test]
    fn test_sentence_length_buckets() {
        let mut lengths = SentenceLengths::default();
        for words in [1, 10, 11, 20, 21, 30, 31, 50, 51, 200] {
            lengths.record(words);
        }
        assert_eq!(
            lengths.buckets(),
            [("1-10", 2), ("11-20", 2), ("21-30", 2), ("31-50", 2), ("50+", 2)]
        );
        assert_eq!(lengths.total(), 10);
    }

    #[test]
    fn test_sentence_lengths_serialize_in_order() {
        let json = serde_json::to_string(&SentenceLengths::default()).unwrap();
        assert_eq!(json, r#"{"1-10":0,"11-20":0,"21-30":0,"31-50":0,"50+":0}"#);
    }

    #[test]
    fn test_top_words_use_extended_stopwords() {
        let text = "Their theory about their model. The model predicts weather. Model output.";
        let viz = visualize(text, None, MatchMode::Literal).unwrap();
        assert_eq!(viz.top_words[0], WordCount { word: "model".to_string(), count: 3 });
        assert!(viz.top_words.iter().all(|w| w.word != "their" && w.word != "about"));
        // their, theory, about, their, model, model, predicts, weather, model, output
        assert_eq!(viz.total_words, 10);
        assert_eq!(viz.total_sentences, 3);
    }

    #[test]
    fn test_empty_text() {
        let viz = visualize("", Some("x"), MatchMode::Literal).unwrap();
        assert!(viz.top_words.is_empty());
        assert!(viz.word_positions.is_empty());
        assert_eq!(viz.total_words, 0);
        assert_eq!(viz.total_sentences, 0);
    }
}
