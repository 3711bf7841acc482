// Storage trait — backend-agnostic async interface for cached document text.
//
// Implementors: FsTextStore (one file per document), MemoryTextStore
// (HashMap behind a tokio RwLock). Keys are sanitized filenames; callers
// run them through `ingest::secure_filename` before they get here.

use anyhow::Result;
use async_trait::async_trait;

use super::StoredDocument;

#[async_trait]
pub trait TextStore: Send + Sync {
    /// Keep the original uploaded bytes. Backends without a use for them
    /// may discard them.
    async fn save_upload(&self, key: &str, bytes: &[u8]) -> Result<()>;

    /// Store (or replace) the extracted text for `key`.
    async fn save_text(&self, key: &str, text: &str) -> Result<()>;

    /// Load the extracted text for `key`, or `None` if nothing is stored.
    async fn load_text(&self, key: &str) -> Result<Option<String>>;

    /// All stored documents, sorted by key.
    async fn list(&self) -> Result<Vec<StoredDocument>>;
}
