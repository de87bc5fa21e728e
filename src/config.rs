//! Runtime configuration utilities for pdf-summarizer.

use std::{env, path::PathBuf, str::FromStr};

use serde::Deserialize;

use crate::nlp::{DEFAULT_MAX_KEYWORDS, DEFAULT_NUM_SENTENCES};

const DEFAULT_STORE: &str = "summaries.json";

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// JSON file holding persisted summary records.
    pub store_path: PathBuf,
    /// Sentences per summary when none is given on the command line.
    pub default_sentences: usize,
    /// Maximum keywords kept per document.
    pub max_keywords: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE),
            default_sentences: DEFAULT_NUM_SENTENCES,
            max_keywords: DEFAULT_MAX_KEYWORDS,
        }
    }
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        let store_path = env::var("SUMMARY_STORE")
            .map(PathBuf::from)
            .unwrap_or(defaults.store_path);
        let default_sentences = env_parse("SUMMARY_SENTENCES").unwrap_or(defaults.default_sentences);
        let max_keywords = env_parse("SUMMARY_KEYWORDS").unwrap_or(defaults.max_keywords);

        Ok(Self {
            store_path,
            default_sentences,
            max_keywords,
        })
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
