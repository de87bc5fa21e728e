//! Extractive summarization and keyword extraction.
//!
//! [`summarize`] runs the whole pipeline: sentences are segmented, scored
//! with the requested [`ScoringMethod`], the best `num_sentences` are kept in
//! document order, and keywords are pulled from the full text. Everything
//! here is synchronous and free of shared state.

pub mod keywords;
pub mod language;
pub mod lexrank;
pub mod scoring;
pub mod segmenter;
pub mod selector;
pub mod stopwords;
pub mod tokenizer;
pub mod weighting;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::InputError;

pub use keywords::{extract_keywords, DEFAULT_MAX_KEYWORDS};
pub use language::Language;
pub use lexrank::LexRankConfig;
pub use segmenter::{segment, Sentence};

/// Default number of sentences in a summary.
pub const DEFAULT_NUM_SENTENCES: usize = 5;

/// How sentences are scored before the top ones are selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ScoringMethod {
    /// Sum of the document frequencies of the sentence's content terms.
    #[default]
    #[value(name = "tfidf")]
    TfIdf,
    /// Centrality in the sentence similarity graph.
    #[value(name = "lexrank")]
    LexRank,
}

/// Parameters of one summarization request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRequest {
    pub language: Language,
    pub num_sentences: usize,
    pub max_keywords: usize,
    pub method: ScoringMethod,
    pub lexrank: LexRankConfig,
}

impl Default for SummaryRequest {
    fn default() -> Self {
        Self {
            language: Language::default(),
            num_sentences: DEFAULT_NUM_SENTENCES,
            max_keywords: DEFAULT_MAX_KEYWORDS,
            method: ScoringMethod::default(),
            lexrank: LexRankConfig::default(),
        }
    }
}

impl SummaryRequest {
    pub fn new(language: Language, num_sentences: usize) -> Self {
        Self {
            language,
            num_sentences,
            ..Self::default()
        }
    }

    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords;
        self
    }

    pub fn with_method(mut self, method: ScoringMethod) -> Self {
        self.method = method;
        self
    }
}

/// Output of [`summarize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub keywords: Vec<String>,
    pub language: Language,
}

/// Summarize `text` and extract its keywords.
///
/// Fails only when `text` is empty or whitespace. A document without any
/// sentence terminator produces an empty summary, not an error.
pub fn summarize(text: &str, request: &SummaryRequest) -> Result<SummaryResult, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::EmptyText);
    }

    let scored = match request.method {
        ScoringMethod::TfIdf => {
            let weights = weighting::TermWeights::from_document(text, request.language);
            debug!(vocabulary = weights.vocabulary_size(), "weighted terms");
            scoring::score_sentences(segment(text), &weights, request.language.tokenizer())
        }
        ScoringMethod::LexRank => {
            lexrank::score_sentences(segment(text), request.language, &request.lexrank)
        }
    };
    if scored.is_empty() {
        warn!("no sentence terminators found; summary will be empty");
    }
    debug!(sentences = scored.len(), method = ?request.method, "scored sentences");

    let selected = selector::select_top(scored, request.num_sentences);
    let summary = selector::join_sentences(&selected);
    let keywords = extract_keywords(text, request.language, request.max_keywords);

    Ok(SummaryResult {
        summary,
        keywords,
        language: request.language,
    })
}
