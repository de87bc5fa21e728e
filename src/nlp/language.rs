//! Supported summary languages.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::nlp::{stopwords::StopwordFilter, tokenizer::Tokenizer};

/// Language of the document being summarized.
///
/// Each variant owns the rules the pipeline needs for it: a word tokenizer and
/// a stop-word set. There is no fallback variant; unknown codes are rejected
/// by [`Language::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    /// Two-letter code used on the command line and in the record store.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
        }
    }

    /// Human readable name, used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
        }
    }

    pub fn tokenizer(self) -> Tokenizer {
        Tokenizer::for_language(self)
    }

    pub fn stopwords(self) -> &'static StopwordFilter {
        StopwordFilter::for_language(self)
    }
}

impl FromStr for Language {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "en" => Ok(Self::English),
            "es" => Ok(Self::Spanish),
            other => Err(InputError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
