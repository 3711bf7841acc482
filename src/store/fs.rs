// Filesystem-backed text store.
//
// Layout under the root directory:
//   <key>                 the uploaded file, as received
//   <key>.extracted.txt   its extracted text
//
// The directory is created on first write.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use super::{StoredDocument, TextStore};
use crate::ingest::secure_filename;

/// Suffix appended to a key to name its extracted text file.
pub const TEXT_SUFFIX: &str = ".extracted.txt";

pub struct FsTextStore {
    root: PathBuf,
}

impl FsTextStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn upload_path(&self, key: &str) -> Result<PathBuf> {
        check_key(key)?;
        Ok(self.root.join(key))
    }

    fn text_path(&self, key: &str) -> Result<PathBuf> {
        check_key(key)?;
        Ok(self.root.join(format!("{key}{TEXT_SUFFIX}")))
    }

    async fn ensure_root(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("Failed to create upload directory {}", self.root.display()))
    }
}

/// Keys become file names, so they must already be sanitized.
fn check_key(key: &str) -> Result<()> {
    if key.is_empty() || secure_filename(key) != key {
        anyhow::bail!("Invalid document key: {key:?}");
    }
    Ok(())
}

#[async_trait]
impl TextStore for FsTextStore {
    async fn save_upload(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.upload_path(key)?;
        self.ensure_root().await?;
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("Failed to save upload to {}", path.display()))?;
        debug!(key, bytes = bytes.len(), "Saved upload");
        Ok(())
    }

    async fn save_text(&self, key: &str, text: &str) -> Result<()> {
        let path = self.text_path(key)?;
        self.ensure_root().await?;
        tokio::fs::write(&path, text)
            .await
            .with_context(|| format!("Failed to write extracted text to {}", path.display()))?;
        debug!(key, chars = text.len(), "Saved extracted text");
        Ok(())
    }

    async fn load_text(&self, key: &str) -> Result<Option<String>> {
        let path = self.text_path(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read extracted text {}", path.display()))
            }
        }
    }

    async fn list(&self) -> Result<Vec<StoredDocument>> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to list upload directory {}", self.root.display())
                })
            }
        };

        let mut documents = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            let Some(key) = file_name
                .to_str()
                .and_then(|name| name.strip_suffix(TEXT_SUFFIX))
            else {
                continue;
            };

            let metadata = entry.metadata().await?;
            let updated_at = metadata
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now());

            documents.push(StoredDocument {
                key: key.to_string(),
                text_bytes: metadata.len(),
                updated_at,
            });
        }

        documents.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsTextStore::new(dir.path().join("uploads"));

        assert_eq!(store.load_text("report.pdf").await.unwrap(), None);

        store.save_text("report.pdf", "Extracted body.").await.unwrap();
        assert_eq!(
            store.load_text("report.pdf").await.unwrap().as_deref(),
            Some("Extracted body.")
        );
        assert!(dir.path().join("uploads/report.pdf.extracted.txt").exists());
    }

    #[tokio::test]
    async fn test_list_only_reports_text_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsTextStore::new(dir.path());

        store.save_upload("b.txt", b"raw").await.unwrap();
        store.save_text("b.txt", "raw").await.unwrap();
        store.save_text("a.docx", "hello world").await.unwrap();

        let docs = store.list().await.unwrap();
        let keys: Vec<&str> = docs.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["a.docx", "b.txt"]);
        assert_eq!(docs[0].text_bytes, 11);
    }

    #[tokio::test]
    async fn test_list_missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsTextStore::new(dir.path().join("never-created"));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_unsanitized_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsTextStore::new(dir.path());
        assert!(store.save_text("../escape.txt", "x").await.is_err());
        assert!(store.load_text("").await.is_err());
    }
}
