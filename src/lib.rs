//! Extractive summaries and keyword lists for English and Spanish documents.
//!
//! The [`nlp`] module holds the summarization engine; [`data`] reads documents
//! and persists results; [`cli`] wires both to the command line.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod nlp;

pub use error::{InputError, PersistenceError};
pub use nlp::{summarize, Language, ScoringMethod, SummaryRequest, SummaryResult};
