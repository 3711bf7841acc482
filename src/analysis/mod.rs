// Text analytics engine — segmentation, word frequencies, keyword in context,
// extractive summaries and chart data.
//
// Every operation here is a pure function of the document text. Nothing is
// cached between calls; storage and file formats live in `ingest` and `store`.

pub mod context;
pub mod frequency;
pub mod pattern;
pub mod segment;
pub mod stopwords;
pub mod summarize;
pub mod traits;
pub mod visualize;

pub use context::{find_context, SearchOutcome, SearchResult};
pub use segment::segment;
pub use summarize::{summarize, FrequencySummarizer, Summary};
pub use visualize::{visualize, MatchMode, Visualization};
