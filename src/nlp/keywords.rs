//! Keyword extraction by stop-word filtering.

use indexmap::IndexSet;

use crate::nlp::language::Language;

/// Default number of keywords returned.
pub const DEFAULT_MAX_KEYWORDS: usize = 10;

/// First `max` distinct non-stop-word tokens of `text`, in order of first
/// occurrence. Digit-only tokens are skipped.
pub fn extract_keywords(text: &str, language: Language, max: usize) -> Vec<String> {
    let stopwords = language.stopwords();
    let mut keywords = IndexSet::new();
    for token in language.tokenizer().tokens(text) {
        if keywords.len() == max {
            break;
        }
        if is_numeric(&token) || stopwords.is_stopword(&token) {
            continue;
        }
        keywords.insert(token);
    }
    keywords.into_iter().collect()
}

fn is_numeric(token: &str) -> bool {
    token.chars().all(char::is_numeric)
}
