// Keyword in context.
//
// Finds every sentence that mentions a word, then picks the one most likely
// to explain it: the first sentence with a definitional cue ("X is ...",
// "X stands for ...") wins, otherwise the first mention. A few more
// mentions are returned as supporting context.

use std::sync::LazyLock;

use serde::Serialize;

use super::pattern::WordPattern;
use super::segment::segment;

/// Maximum number of supporting sentences returned alongside the primary one.
pub const MAX_SUPPORTING: usize = 4;

/// Cue words and phrases that mark a sentence as definition-like.
pub const DEFINITION_CUES: &[&str] = &[
    "is",
    "are",
    "means",
    "refers to",
    "defined as",
    "describes",
    "denotes",
    "stands for",
    "represents",
];

static DEFINITION_PATTERN: LazyLock<WordPattern> = LazyLock::new(|| {
    let alternation = DEFINITION_CUES
        .iter()
        .map(|cue| regex::escape(cue))
        .collect::<Vec<_>>()
        .join("|");
    WordPattern::raw(&alternation).expect("valid definition cue pattern")
});

/// A word that occurs in the document, with the sentences around it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// The query as given (trimmed), original casing preserved
    pub word: String,
    /// Whole-word, case-insensitive occurrences across the full text
    pub frequency: usize,
    /// Best explaining sentence. `None` when every occurrence sits in a
    /// fragment too short to count as a sentence.
    pub primary_context: Option<String>,
    /// Up to four other sentences that mention the word, in document order
    pub supporting_contexts: Vec<String>,
    /// How many sentences mention the word at all
    pub total_sentences_found: usize,
}

/// Outcome of a keyword-in-context lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(SearchResult),
    NotFound { word: String },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn word(&self) -> &str {
        match self {
            SearchOutcome::Found(result) => &result.word,
            SearchOutcome::NotFound { word } => word,
        }
    }

    pub fn frequency(&self) -> usize {
        match self {
            SearchOutcome::Found(result) => result.frequency,
            SearchOutcome::NotFound { .. } => 0,
        }
    }
}

/// Look up `word` in `text`.
///
/// Matching is whole-word and case-insensitive, and the word is taken
/// literally. A word that never occurs yields `SearchOutcome::NotFound`.
pub fn find_context(text: &str, word: &str) -> SearchOutcome {
    let word = word.trim();
    let pattern = WordPattern::literal(word);

    let frequency = pattern.count(text);
    if frequency == 0 {
        return SearchOutcome::NotFound {
            word: word.to_string(),
        };
    }

    let matched: Vec<String> = segment(text)
        .into_iter()
        .filter(|sentence| pattern.is_match(sentence))
        .collect();

    let primary = matched
        .iter()
        .find(|sentence| is_definition_like(sentence))
        .or_else(|| matched.first())
        .cloned();

    let supporting: Vec<String> = matched
        .iter()
        .filter(|sentence| primary.as_ref() != Some(*sentence))
        .take(MAX_SUPPORTING)
        .cloned()
        .collect();

    SearchOutcome::Found(SearchResult {
        word: word.to_string(),
        frequency,
        primary_context: primary,
        supporting_contexts: supporting,
        total_sentences_found: matched.len(),
    })
}

/// Whether `sentence` contains one of the [`DEFINITION_CUES`] as a whole word or phrase.
pub fn is_definition_like(sentence: &str) -> bool {
    DEFINITION_PATTERN.is_match(sentence)
}
