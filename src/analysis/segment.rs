// Sentence segmentation.
//
// A document is cut after every `.`, `!` or `?` that is followed by
// whitespace (any Unicode whitespace, no-break spaces included), then each
// fragment is cut again on newlines so headings and list items in
// structured documents become their own "sentences".
// Anything five characters or shorter after trimming is noise and dropped.

use std::sync::LazyLock;

use regex::Regex;

/// Sentences must be strictly longer than this many characters.
pub const MIN_SENTENCE_CHARS: usize = 5;

/// Terminal punctuation followed by the whitespace run that separates it
/// from the next sentence. The split happens right after the punctuation.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("valid sentence break pattern"));

/// Split raw document text into trimmed sentences, in document order.
///
/// Never fails: empty or whitespace-only input yields an empty vector.
pub fn segment(text: &str) -> Vec<String> {
    split_after_terminators(text)
        .into_iter()
        .flat_map(|fragment| fragment.split('\n'))
        .map(str::trim)
        .filter(|piece| piece.chars().count() > MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}

/// Cut `text` after each terminator, consuming the whitespace that follows.
/// The terminator stays attached to the fragment it ends.
fn split_after_terminators(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        // Terminators are single-byte ASCII, so +1 is a char boundary
        fragments.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    fragments.push(&text[start..]);

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_terminal_punctuation() {
        let sentences = segment("First sentence here. Second one follows! Is this the third?");
        assert_eq!(
            sentences,
            vec![
                "First sentence here.",
                "Second one follows!",
                "Is this the third?"
            ]
        );
    }

    #[test]
    fn test_splits_on_unicode_whitespace() {
        // PDF and DOCX extraction often leaves no-break or em spaces between sentences
        assert_eq!(
            segment("First sentence here.\u{2003}Second sentence here."),
            vec!["First sentence here.", "Second sentence here."]
        );
        assert_eq!(
            segment("Nicht so schnell!\u{a0}Warum denn nicht?\u{a0}\u{a0}Darum eben."),
            vec!["Nicht so schnell!", "Warum denn nicht?", "Darum eben."]
        );
    }

    #[test]
    fn test_splits_on_newlines_without_punctuation() {
        let sentences = segment("Chapter One\nThe story begins in a small town");
        assert_eq!(sentences, vec!["Chapter One", "The story begins in a small town"]);
    }

    #[test]
    fn test_drops_short_pieces() {
        // "Hi." and "Yes!" are too short, "Okay" on its own line as well
        let sentences = segment("Hi. Yes! This one is long enough.\nOkay\n12345\n123456");
        assert_eq!(sentences, vec!["This one is long enough.", "123456"]);
    }

    #[test]
    fn test_punctuation_without_whitespace_does_not_split() {
        let sentences = segment("Version 1.2.3 shipped today. See example.com for notes.");
        assert_eq!(
            sentences,
            vec!["Version 1.2.3 shipped today.", "See example.com for notes."]
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\n\t  ").is_empty());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Five multi-byte characters is still too short
        assert!(segment("ééééé").is_empty());
        assert_eq!(segment("éééééé"), vec!["éééééé"]);
    }
}
