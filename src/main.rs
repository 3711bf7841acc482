use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use docscope::analysis::MatchMode;
use docscope::config::Config;
use docscope::output::terminal;
use docscope::service::DocumentService;
use docscope::store::FsTextStore;

/// docscope: look things up in, summarize, and chart your documents.
///
/// Extract the text of a PDF, DOCX or TXT file once, then search it for
/// words in context, pull out its key sentences, or get word statistics.
#[derive(Parser)]
#[command(name = "docscope", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract and cache the text of a document (.txt, .pdf or .docx)
    Extract {
        /// Path to the document
        path: PathBuf,
    },

    /// Find a word in a cached document and show the sentences around it
    Search {
        /// Document key (the sanitized filename printed by `extract`)
        document: String,

        /// The word to look up
        word: String,
    },

    /// Summarize a cached document
    Summarize {
        /// Document key
        document: String,

        /// Number of sentences to keep (default: DOCSCOPE_SUMMARY_SENTENCES or 8)
        #[arg(long, short = 'n')]
        sentences: Option<usize>,
    },

    /// Show keyword counts, sentence lengths and where a word occurs
    Visualize {
        /// Document key
        document: String,

        /// Word whose positions to report
        #[arg(long)]
        word: Option<String>,

        /// Treat --word as a regular expression
        #[arg(long, requires = "word")]
        pattern: bool,
    },

    /// List cached documents
    Documents,

    /// Run the HTTP API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: PORT or 5000)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: DOCSCOPE_BIND or 0.0.0.0)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docscope=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Extract { path } => {
            let service = open_service(&config, config.summary_sentences);

            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .with_context(|| format!("Not a file path: {}", path.display()))?
                .to_string();
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;

            let spinner = extraction_spinner(&filename);
            let result = service.ingest(&filename, bytes).await;
            spinner.finish_and_clear();

            terminal::display_upload(&result?);
        }

        Commands::Search { document, word } => {
            let service = open_service(&config, config.summary_sentences);
            let outcome = service.search(&document, &word).await?;
            terminal::display_search(&outcome);
        }

        Commands::Summarize {
            document,
            sentences,
        } => {
            let sentences = sentences.unwrap_or(config.summary_sentences);
            if sentences == 0 {
                anyhow::bail!("Summary length must be at least 1 sentence.");
            }

            let service = open_service(&config, sentences);
            let report = service.summarize(&document).await?;
            terminal::display_summary(&report);
        }

        Commands::Visualize {
            document,
            word,
            pattern,
        } => {
            let service = open_service(&config, config.summary_sentences);
            let mode = if pattern {
                MatchMode::Pattern
            } else {
                MatchMode::Literal
            };
            let viz = service.visualize(&document, word.as_deref(), mode).await?;
            terminal::display_visualization(&viz);
        }

        Commands::Documents => {
            let service = open_service(&config, config.summary_sentences);
            let documents = service.documents().await?;
            terminal::display_documents(&documents);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            config.require_summary_sentences()?;

            let mut config = config;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }

            info!(
                upload_dir = %config.upload_dir.display(),
                max_upload_bytes = config.max_upload_bytes,
                "Starting docscope server"
            );
            let service = open_service(&config, config.summary_sentences);
            println!(
                "{}",
                format!("Serving on http://{}:{}", config.bind, config.port).bold()
            );
            docscope::web::run_server(config, service).await?;
        }
    }

    Ok(())
}

/// Build the document service over the configured upload directory.
fn open_service(config: &Config, summary_sentences: usize) -> DocumentService {
    let store = Arc::new(FsTextStore::new(&config.upload_dir));
    DocumentService::new(store, summary_sentences)
}

/// Spinner shown while a document is parsed; large PDFs can take a while.
fn extraction_spinner(filename: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Extracting text from {filename}..."));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
