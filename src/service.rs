// Document service — the glue between uploads, the text store and the
// analytics engine.
//
// The CLI and the web handlers both go through here, so input validation
// and the user-facing error messages live in one place. Each analytics call
// loads its own copy of the document text and hands it to a pure engine
// function; nothing is shared between requests except the store.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::analysis::traits::Summarizer;
use crate::analysis::{find_context, segment, visualize, FrequencySummarizer, MatchMode};
use crate::analysis::{SearchOutcome, Visualization};
use crate::ingest::{self, DocumentFormat, DocumentStats};
use crate::store::{StoredDocument, TextStore};

pub const NO_FILE_SELECTED: &str = "No file selected";
pub const EMPTY_WORD: &str = "Please enter a word to search.";
pub const NO_DOCUMENT: &str = "No document loaded.";
pub const EMPTY_DOCUMENT: &str = "File appears to be empty or unreadable.";

/// Errors surfaced to CLI users and HTTP clients.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller sent something unusable (blank word, bad filename, ...)
    #[error("{0}")]
    InvalidInput(String),

    /// No extracted text is stored under the requested key
    #[error("Document session expired. Please re-upload the file.")]
    DocumentMissing,

    /// The uploaded file could not be parsed
    #[error("Failed to parse file: {0}")]
    Extraction(String),

    /// Chart data could not be computed
    #[error("Chart generation failed: {0}")]
    Visualization(String),

    /// Storage or other unexpected failure
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    fn invalid(message: &str) -> Self {
        ServiceError::InvalidInput(message.to_string())
    }
}

/// What the caller learns about a freshly ingested document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadReport {
    /// Sanitized filename
    pub filename: String,
    pub word_count: usize,
    pub sentence_count: usize,
    /// Key to pass back for search, summary and chart requests
    pub text_key: String,
}

/// A summary plus document-level counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub summary: Vec<String>,
    pub key_topics: Vec<String>,
    pub total_sentences: usize,
    pub word_count: usize,
    /// "<selected>/<total> sentences"
    pub compression: String,
}

/// Entry point for everything that touches stored documents.
#[derive(Clone)]
pub struct DocumentService {
    store: Arc<dyn TextStore>,
    summarizer: Arc<dyn Summarizer>,
}

impl DocumentService {
    /// Service using the default frequency summarizer keeping `summary_sentences` sentences.
    pub fn new(store: Arc<dyn TextStore>, summary_sentences: usize) -> Self {
        Self::with_summarizer(
            store,
            Arc::new(FrequencySummarizer::with_sentences(summary_sentences)),
        )
    }

    pub fn with_summarizer(store: Arc<dyn TextStore>, summarizer: Arc<dyn Summarizer>) -> Self {
        Self { store, summarizer }
    }

    /// Validate, store and extract an uploaded document.
    pub async fn ingest(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadReport, ServiceError> {
        if filename.trim().is_empty() {
            return Err(ServiceError::invalid(NO_FILE_SELECTED));
        }
        let format = DocumentFormat::from_filename(filename)
            .ok_or_else(|| ServiceError::invalid(ingest::UNSUPPORTED_FORMAT))?;

        let key = ingest::secure_filename(filename);
        // A sanitized name that lost its extension can't be re-read later
        if DocumentFormat::from_filename(&key) != Some(format) {
            return Err(ServiceError::invalid("Invalid filename."));
        }

        self.store.save_upload(&key, &bytes).await?;

        // PDF parsing is CPU-bound; keep it off the async workers
        let text = tokio::task::spawn_blocking(move || ingest::extract_text(&bytes, format))
            .await
            .map_err(|e| ServiceError::Extraction(e.to_string()))?
            .map_err(|e| ServiceError::Extraction(format!("{e:#}")))?;

        if text.trim().is_empty() {
            return Err(ServiceError::invalid(EMPTY_DOCUMENT));
        }

        self.store.save_text(&key, &text).await?;
        let stats = DocumentStats::of(&text);

        info!(
            key = %key,
            words = stats.word_count,
            sentences = stats.sentence_count,
            "Ingested document"
        );

        Ok(UploadReport {
            filename: key.clone(),
            word_count: stats.word_count,
            sentence_count: stats.sentence_count,
            text_key: key,
        })
    }

    /// Keyword in context over a stored document.
    pub async fn search(&self, filename: &str, word: &str) -> Result<SearchOutcome, ServiceError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(ServiceError::invalid(EMPTY_WORD));
        }
        let text = self.load(filename).await?;

        let outcome = find_context(&text, word);
        debug!(word, found = outcome.is_found(), frequency = outcome.frequency(), "Search");
        Ok(outcome)
    }

    /// Extractive summary of a stored document.
    pub async fn summarize(&self, filename: &str) -> Result<SummaryReport, ServiceError> {
        let text = self.load(filename).await?;

        let summary = self.summarizer.summarize(&text);
        let total_sentences = segment(&text).len();

        Ok(SummaryReport {
            compression: format!("{}/{} sentences", summary.summary.len(), total_sentences),
            summary: summary.summary,
            key_topics: summary.key_topics,
            total_sentences,
            word_count: ingest::word_count(&text),
        })
    }

    /// Chart data for a stored document.
    pub async fn visualize(
        &self,
        filename: &str,
        word: Option<&str>,
        mode: MatchMode,
    ) -> Result<Visualization, ServiceError> {
        let text = self.load(filename).await?;
        visualize(&text, word, mode).map_err(|e| ServiceError::Visualization(format!("{e:#}")))
    }

    /// Every document currently in the store.
    pub async fn documents(&self) -> Result<Vec<StoredDocument>, ServiceError> {
        Ok(self.store.list().await?)
    }

    /// Load the text stored under a client-supplied filename.
    async fn load(&self, filename: &str) -> Result<String, ServiceError> {
        let filename = filename.trim();
        if filename.is_empty() {
            return Err(ServiceError::invalid(NO_DOCUMENT));
        }

        let key = ingest::secure_filename(filename);
        if key.is_empty() {
            return Err(ServiceError::DocumentMissing);
        }

        self.store
            .load_text(&key)
            .await?
            .ok_or(ServiceError::DocumentMissing)
    }
}
