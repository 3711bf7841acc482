// Document ingestion — filename checks and text extraction.
//
// Uploads arrive as (filename, bytes). The filename decides the format and,
// once sanitized, becomes the key the extracted text is stored under.

pub mod docx;

use anyhow::{anyhow, Result};
use serde::Serialize;
use tracing::info;

use crate::analysis::segment;

/// Message shown for any file whose extension we don't handle.
pub const UNSUPPORTED_FORMAT: &str = "Unsupported file type. Use PDF, DOCX, or TXT.";

/// Document formats we can extract text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Txt,
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Pick the format from a filename's last extension, case-insensitively.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Some(DocumentFormat::Txt),
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Txt => "txt",
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }
}

/// Word and sentence counts reported after an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub word_count: usize,
    pub sentence_count: usize,
}

impl DocumentStats {
    pub fn of(text: &str) -> Self {
        Self {
            word_count: word_count(text),
            sentence_count: segment(text).len(),
        }
    }
}

/// Whitespace-separated word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Reduce an uploaded filename to something safe to use as a path component.
///
/// Directory parts are dropped, whitespace runs become `_`, and everything
/// except ASCII letters, digits, `_`, `.` and `-` is removed. Leading and
/// trailing dots and underscores are stripped. The result may be empty,
/// which callers must reject.
pub fn secure_filename(filename: &str) -> String {
    let flattened = filename.replace(['/', '\\'], " ");
    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// Extract the raw text of a document.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String> {
    let text = match format {
        // Invalid UTF-8 is replaced rather than rejected
        DocumentFormat::Txt => String::from_utf8_lossy(bytes).into_owned(),
        DocumentFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| anyhow!("PDF extraction failed: {e}"))?,
        DocumentFormat::Docx => docx::extract_text(bytes)?,
    };

    info!(
        format = format.extension(),
        bytes = bytes.len(),
        chars = text.chars().count(),
        "Extracted document text"
    );

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_filename() {
        assert_eq!(DocumentFormat::from_filename("a.txt"), Some(DocumentFormat::Txt));
        assert_eq!(DocumentFormat::from_filename("Report.PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_filename("x.tar.docx"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_filename("notes.md"), None);
        assert_eq!(DocumentFormat::from_filename("txt"), None);
    }

    #[test]
    fn test_secure_filename() {
        assert_eq!(secure_filename("My Report.pdf"), "My_Report.pdf");
        assert_eq!(secure_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(secure_filename("C:\\docs\\notes.txt"), "C_docs_notes.txt");
        assert_eq!(secure_filename("  .hidden.txt"), "hidden.txt");
        assert_eq!(secure_filename("résumé.docx"), "rsum.docx");
        assert_eq!(secure_filename("../"), "");
    }

    #[test]
    fn test_txt_extraction_is_lossy() {
        let text = extract_text(b"hello \xff world", DocumentFormat::Txt).unwrap();
        assert!(text.starts_with("hello "));
        assert!(text.ends_with(" world"));
    }

    #[test]
    fn test_invalid_pdf_is_an_error() {
        assert!(extract_text(b"not a pdf", DocumentFormat::Pdf).is_err());
    }

    #[test]
    fn test_stats() {
        let stats = DocumentStats::of("One two three four. Five six seven eight.\nTiny");
        assert_eq!(stats.word_count, 9);
        assert_eq!(stats.sentence_count, 2);
    }
}
