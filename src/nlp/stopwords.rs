//! Stop-word sets backed by the `stop-words` crate.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::nlp::language::Language;

static ENGLISH: Lazy<StopwordFilter> = Lazy::new(|| StopwordFilter::load(LANGUAGE::English));
static SPANISH: Lazy<StopwordFilter> = Lazy::new(|| StopwordFilter::load(LANGUAGE::Spanish));

/// A set of lower-case stop words for one language.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Shared filter for `language`, built on first use.
    pub fn for_language(language: Language) -> &'static Self {
        match language {
            Language::English => &*ENGLISH,
            Language::Spanish => &*SPANISH,
        }
    }

    fn load(language: LANGUAGE) -> Self {
        let stopwords = get(language).iter().map(|s| s.to_lowercase()).collect();
        Self { stopwords }
    }

    /// `word` is expected to be case-folded already.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}
