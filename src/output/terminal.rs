// Colored terminal output for search results, summaries and chart data.
//
// This module handles all terminal-specific formatting. The CLI in main.rs
// calls the service and hands the results here.

use colored::Colorize;

use crate::analysis::{SearchOutcome, Visualization};
use crate::service::{SummaryReport, UploadReport};
use crate::store::StoredDocument;

/// Width of the keyword and histogram bars.
const BAR_WIDTH: usize = 20;

/// Display the result of ingesting a document.
pub fn display_upload(report: &UploadReport) {
    println!(
        "\n{}",
        format!("=== Extracted {} ===", report.filename).bold()
    );
    println!("  Words: {}", report.word_count);
    println!("  Sentences: {}", report.sentence_count);
    println!(
        "\n{}",
        format!("Use `docscope search {} <word>` to look something up.", report.text_key).dimmed()
    );
}

/// Display a keyword-in-context result.
pub fn display_search(outcome: &SearchOutcome) {
    let result = match outcome {
        SearchOutcome::Found(result) => result,
        SearchOutcome::NotFound { word } => {
            println!(
                "The word \"{}\" was not found in the document.",
                word.yellow()
            );
            return;
        }
    };

    println!(
        "\n{}",
        format!(
            "=== \"{}\" — {} occurrences in {} sentences ===",
            result.word, result.frequency, result.total_sentences_found
        )
        .bold()
    );
    println!();

    match &result.primary_context {
        Some(primary) => println!("  {}", primary.bright_green()),
        None => println!("  {}", "(only found in fragments too short to quote)".dimmed()),
    }

    if !result.supporting_contexts.is_empty() {
        println!("\n  Also mentioned:");
        for (i, sentence) in result.supporting_contexts.iter().enumerate() {
            let preview = super::truncate_chars(sentence, 140);
            println!("    {}. {}", i + 1, preview.dimmed());
        }
    }
    println!();
}

/// Display an extractive summary.
pub fn display_summary(report: &SummaryReport) {
    if report.summary.is_empty() {
        println!("Nothing to summarize: no sentences found in the document.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Summary ({}) ===", report.compression).bold()
    );
    println!();

    for sentence in &report.summary {
        println!("  • {sentence}");
    }

    if !report.key_topics.is_empty() {
        println!("\n  Key topics: {}", report.key_topics.join(", ").cyan());
    }
    println!(
        "  {} words, {} sentences",
        report.word_count, report.total_sentences
    );
    println!();
}

/// Display keyword counts, search word positions and the sentence length histogram.
pub fn display_visualization(viz: &Visualization) {
    println!(
        "\n{}",
        format!(
            "=== Document Statistics ({} words, {} sentences) ===",
            viz.total_words, viz.total_sentences
        )
        .bold()
    );

    if !viz.top_words.is_empty() {
        println!("\n  Top keywords:");
        let max = viz.top_words[0].count.max(1) as f64;
        for entry in &viz.top_words {
            let bar = super::bar(entry.count as f64 / max, BAR_WIDTH);
            println!(
                "    {:<20} {} {}",
                entry.word,
                bar.bright_blue(),
                entry.count
            );
        }
    }

    if !viz.search_word.is_empty() {
        println!(
            "\n  \"{}\" appears {} times",
            viz.search_word.bold(),
            viz.search_count
        );
        if !viz.word_positions.is_empty() {
            let positions: Vec<String> = viz
                .word_positions
                .iter()
                .map(|p| format!("{p:.1}%"))
                .collect();
            println!("    at {}", positions.join(", ").dimmed());
        }
    }

    let total = viz.sentence_lengths.total().max(1) as f64;
    println!("\n  Sentence lengths (words):");
    for (label, count) in viz.sentence_lengths.buckets() {
        let bar = super::bar(count as f64 / total, BAR_WIDTH);
        println!("    {:>6} {} {}", label, bar.bright_yellow(), count);
    }
    println!();
}

/// Display the cached documents.
pub fn display_documents(documents: &[StoredDocument]) {
    if documents.is_empty() {
        println!("No documents extracted yet. Run `docscope extract <file>` first.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Documents ({}) ===", documents.len()).bold()
    );
    for doc in documents {
        println!(
            "  {:<40} {:>10}  {}",
            doc.key,
            format_bytes(doc.text_bytes),
            doc.updated_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
    }
    println!();
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(12), "12 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
