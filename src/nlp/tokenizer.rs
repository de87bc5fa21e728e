//! Word tokenization shared by term weighting, sentence scoring and keywords.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::nlp::language::Language;

// Internal apostrophes stay inside the token so contractions match the
// English stop-word list ("don't", "it's").
static ENGLISH_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{M}\p{N}]+(?:['’][\p{L}\p{M}\p{N}]+)*").expect("valid regex")
});

static SPANISH_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{M}\p{N}]+").expect("valid regex"));

/// Lower-casing word tokenizer. Punctuation never forms a token.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    pattern: &'static Regex,
}

impl Tokenizer {
    pub fn for_language(language: Language) -> Self {
        let pattern = match language {
            Language::English => &*ENGLISH_WORD,
            Language::Spanish => &*SPANISH_WORD,
        };
        Self { pattern }
    }

    /// Case-folded tokens of `text`, in order of appearance.
    pub fn tokens(self, text: &str) -> impl Iterator<Item = String> + '_ {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
    }
}
