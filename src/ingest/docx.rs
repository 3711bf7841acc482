// DOCX text extraction.
//
// A .docx file is a zip archive; the body lives in word/document.xml as
// WordprocessingML. Text is carried in <w:t> runs inside <w:p> paragraphs.
// We emit run text as-is, a newline at the end of every paragraph, and
// tabs/line breaks where the document has them. Formatting is discarded.

use std::io::{Cursor, Read};

use anyhow::{bail, Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extract plain text from the bytes of a .docx file.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).context("File is not a valid DOCX archive")?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .with_context(|| format!("DOCX archive has no {DOCUMENT_PART}"))?
        .read_to_string(&mut xml)
        .with_context(|| format!("Failed to read {DOCUMENT_PART}"))?;

    document_xml_to_text(&xml)
}

/// Flatten WordprocessingML body XML into paragraphs of plain text.
pub fn document_xml_to_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if e.name().as_ref() == b"w:t" {
                    in_run_text = true;
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" | b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if in_run_text {
                    let unescaped = e.unescape().context("Invalid escape in DOCX text")?;
                    text.push_str(&unescaped);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => bail!("DOCX XML parse error: {e}"),
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Rust is a systems </w:t></w:r><w:r><w:t>language.</w:t></w:r></w:p>
    <w:p><w:r><w:t>Fish &amp; chips</w:t><w:tab/><w:t>cost</w:t></w:r></w:p>
    <w:p/>
  </w:body>
</w:document>"#;

    #[test]
    fn test_paragraphs_and_runs() {
        let text = document_xml_to_text(BODY).unwrap();
        assert_eq!(text, "Rust is a systems language.\nFish & chips\tcost\n\n");
    }

    #[test]
    fn test_extract_from_archive() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_PART, zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(BODY.as_bytes()).unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let text = extract_text(&bytes).unwrap();
        assert!(text.starts_with("Rust is a systems language.\n"));
    }

    #[test]
    fn test_not_a_zip() {
        assert!(extract_text(b"plain text pretending to be docx").is_err());
    }

    #[test]
    fn test_archive_without_document_part() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract_text(&bytes).unwrap_err();
        assert!(err.to_string().contains("word/document.xml"));
    }
}
