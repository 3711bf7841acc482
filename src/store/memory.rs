// In-memory text store, for tests and throwaway servers.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::{StoredDocument, TextStore};

#[derive(Default)]
pub struct MemoryTextStore {
    texts: RwLock<HashMap<String, (String, DateTime<Utc>)>>,
}

impl MemoryTextStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TextStore for MemoryTextStore {
    async fn save_upload(&self, _key: &str, _bytes: &[u8]) -> Result<()> {
        Ok(())
    }

    async fn save_text(&self, key: &str, text: &str) -> Result<()> {
        self.texts
            .write()
            .await
            .insert(key.to_string(), (text.to_string(), Utc::now()));
        Ok(())
    }

    async fn load_text(&self, key: &str) -> Result<Option<String>> {
        Ok(self.texts.read().await.get(key).map(|(text, _)| text.clone()))
    }

    async fn list(&self) -> Result<Vec<StoredDocument>> {
        let texts = self.texts.read().await;
        let mut documents: Vec<StoredDocument> = texts
            .iter()
            .map(|(key, (text, updated_at))| StoredDocument {
                key: key.clone(),
                text_bytes: text.len() as u64,
                updated_at: *updated_at,
            })
            .collect();
        documents.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(documents)
    }
}
