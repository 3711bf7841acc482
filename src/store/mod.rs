// Text store — keeps the extracted text of each uploaded document so later
// search, summary and chart requests can re-read it.
//
// The engine never touches storage. Callers go through the `TextStore`
// trait; `FsTextStore` writes `<key>.extracted.txt` files next to the
// uploads, `MemoryTextStore` keeps everything in a map.

pub mod fs;
pub mod memory;
pub mod traits;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use fs::FsTextStore;
pub use memory::MemoryTextStore;
pub use traits::TextStore;

/// A cached document as reported by `TextStore::list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredDocument {
    /// Sanitized filename the text is stored under
    pub key: String,
    /// Size of the extracted text in bytes
    pub text_bytes: u64,
    /// When the text was last written
    pub updated_at: DateTime<Utc>,
}
