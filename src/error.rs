//! Error types surfaced by the summarization pipeline and its collaborators.

use std::{path::PathBuf, string::FromUtf8Error};

use thiserror::Error;

/// Problems with the request itself. Raised before any summarization work.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("document text is empty")]
    EmptyText,
    #[error("unsupported language `{0}`; use `en` for English or `es` for Spanish")]
    UnsupportedLanguage(String),
    #[error("document {} does not exist", path.display())]
    MissingDocument { path: PathBuf },
    #[error("failed to read {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to extract text from PDF {}: {message}", path.display())]
    Pdf { path: PathBuf, message: String },
    #[error("{} is not valid UTF-8 text", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}

/// Failures writing the summary record store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to serialize summary records")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write summary store {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
