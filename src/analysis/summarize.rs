// Frequency-weighted extractive summarization.
//
// Each sentence scores the sum of the normalized document frequencies of
// its tokens (every occurrence counts, stopwords contribute zero). Very
// short sentences are usually headings or list fragments and very long ones
// are usually extraction run-ons, so both get their score damped. The top
// scoring sentences are returned in the order they appear in the document.

use serde::Serialize;
use tracing::debug;

use super::frequency::{FrequencyTable, TokenPolicy};
use super::segment::segment;
use super::traits::Summarizer;

/// Sentences with fewer tokens than this get their score halved.
pub const SHORT_SENTENCE_TOKENS: usize = 5;
/// Sentences with more tokens than this get their score scaled by 0.7.
pub const LONG_SENTENCE_TOKENS: usize = 40;

const SHORT_SENTENCE_FACTOR: f64 = 0.5;
const LONG_SENTENCE_FACTOR: f64 = 0.7;

/// Key topics must be longer than this many letters.
const MIN_TOPIC_CHARS: usize = 4;

/// An extractive summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Selected sentences, in document order
    pub summary: Vec<String>,
    /// Most frequent content words, most frequent first
    pub key_topics: Vec<String>,
}

/// Frequency-based summarizer, the default.
pub struct FrequencySummarizer {
    /// How many sentences to keep
    pub num_sentences: usize,
    /// How many key topics to report
    pub max_topics: usize,
}

impl Default for FrequencySummarizer {
    fn default() -> Self {
        Self {
            num_sentences: 8,
            max_topics: 12,
        }
    }
}

impl FrequencySummarizer {
    pub fn with_sentences(num_sentences: usize) -> Self {
        Self {
            num_sentences,
            ..Self::default()
        }
    }
}

impl Summarizer for FrequencySummarizer {
    fn summarize(&self, text: &str) -> Summary {
        let sentences = segment(text);
        if sentences.is_empty() {
            return Summary::default();
        }

        let policy = TokenPolicy::Summary;
        let table = FrequencyTable::build(text, policy);

        let mut scored: Vec<(usize, f64)> = sentences
            .iter()
            .enumerate()
            .map(|(i, sentence)| (i, score_sentence(sentence, &table, policy)))
            .collect();

        // Stable sort keeps document order among equal scores
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut selected: Vec<usize> = scored
            .into_iter()
            .take(self.num_sentences)
            .map(|(i, _)| i)
            .collect();
        selected.sort_unstable();

        let summary: Vec<String> = selected.into_iter().map(|i| sentences[i].clone()).collect();

        let key_topics: Vec<String> = table
            .ranked()
            .into_iter()
            .filter(|(token, _)| token.len() > MIN_TOPIC_CHARS)
            .take(self.max_topics)
            .map(|(token, _)| token.to_string())
            .collect();

        debug!(
            sentences = sentences.len(),
            selected = summary.len(),
            vocabulary = table.len(),
            "Built extractive summary"
        );

        Summary {
            summary,
            key_topics,
        }
    }
}

/// Summarize `text` down to at most `num_sentences` sentences.
pub fn summarize(text: &str, num_sentences: usize) -> Summary {
    FrequencySummarizer::with_sentences(num_sentences).summarize(text)
}

/// Sum of token frequencies in `sentence`, damped for very short or very
/// long sentences. Stopwords still count toward the length.
pub fn score_sentence(sentence: &str, table: &FrequencyTable, policy: TokenPolicy) -> f64 {
    let tokens = policy.tokenize(sentence);
    let score: f64 = tokens.iter().map(|token| table.score(token)).sum();

    if tokens.len() < SHORT_SENTENCE_TOKENS {
        score * SHORT_SENTENCE_FACTOR
    } else if tokens.len() > LONG_SENTENCE_TOKENS {
        score * LONG_SENTENCE_FACTOR
    } else {
        score
    }
}
