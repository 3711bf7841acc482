use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default upload limit: 50 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// value has a default, so an empty environment is a valid configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where uploaded files and their extracted text live
    pub upload_dir: PathBuf,
    /// Largest accepted upload, in bytes
    pub max_upload_bytes: usize,
    /// Sentences kept by the summarizer
    pub summary_sentences: usize,
    /// HTTP port (PORT, default 5000)
    pub port: u16,
    /// HTTP bind address (DOCSCOPE_BIND, default 0.0.0.0)
    pub bind: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("./uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            summary_sentences: 8,
            port: 5000,
            bind: "0.0.0.0".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to defaults; set-but-unparseable numbers
    /// are an error rather than being silently ignored.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            upload_dir: env::var("DOCSCOPE_UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            max_upload_bytes: parse_var("DOCSCOPE_MAX_UPLOAD_BYTES")?
                .unwrap_or(defaults.max_upload_bytes),
            summary_sentences: parse_var("DOCSCOPE_SUMMARY_SENTENCES")?
                .unwrap_or(defaults.summary_sentences),
            port: parse_var("PORT")?.unwrap_or(defaults.port),
            bind: env::var("DOCSCOPE_BIND").unwrap_or(defaults.bind),
        })
    }

    /// Check that the summary length is usable.
    /// Call this before serving summaries.
    pub fn require_summary_sentences(&self) -> Result<()> {
        if self.summary_sentences == 0 {
            anyhow::bail!(
                "DOCSCOPE_SUMMARY_SENTENCES must be at least 1.\n\
                 Fix it in your .env file or unset it to use the default of 8."
            );
        }
        Ok(())
    }
}

/// Parse an optional numeric environment variable.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => {
            let value = raw
                .trim()
                .parse::<T>()
                .with_context(|| format!("{name} must be a number, got {raw:?}"))?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.upload_dir, PathBuf::from("./uploads"));
        assert_eq!(config.max_upload_bytes, 50 * 1024 * 1024);
        assert_eq!(config.summary_sentences, 8);
        assert_eq!(config.port, 5000);
        assert!(config.require_summary_sentences().is_ok());
    }

    #[test]
    fn test_zero_summary_sentences_rejected() {
        let config = Config {
            summary_sentences: 0,
            ..Config::default()
        };
        assert!(config.require_summary_sentences().is_err());
    }
}
