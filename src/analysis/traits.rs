// Summarizer trait — swap-ready abstraction.
//
// The default implementation scores sentences by word frequency. Anything
// else that picks sentences from a document (a position-weighted scorer, a
// graph ranker) can slot in behind this trait without touching the service
// or web layers.

use super::summarize::Summary;

/// Trait for producing an extractive summary of a document.
pub trait Summarizer: Send + Sync {
    /// Select sentences and key topics from `text`. Must not fail: text
    /// with no usable sentences produces an empty summary.
    fn summarize(&self, text: &str) -> Summary;
}
