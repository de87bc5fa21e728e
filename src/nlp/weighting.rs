//! Term weighting over a single-document corpus.
//!
//! Weights follow the usual tf-idf shape, `tf(term) * idf(term)` with
//! `idf = 1 + ln(N / (1 + df))`. The corpus is always the one document being
//! summarized, so `N = df = 1` for every term that occurs and the idf factor
//! is the same constant for all of them: weights rank terms purely by how
//! often they occur in the document. Stop words are not counted and weigh 0.

use rustc_hash::FxHashMap;

use crate::nlp::language::Language;

const CORPUS_SIZE: usize = 1;

/// Per-term weights for one document.
#[derive(Debug, Clone)]
pub struct TermWeights {
    counts: FxHashMap<String, usize>,
    idf: f64,
}

impl TermWeights {
    /// Count the content terms of `document` as the only member of its corpus.
    pub fn from_document(document: &str, language: Language) -> Self {
        let stopwords = language.stopwords();
        let mut counts = FxHashMap::default();
        for term in language.tokenizer().tokens(document) {
            if stopwords.is_stopword(&term) {
                continue;
            }
            *counts.entry(term).or_insert(0) += 1;
        }
        Self {
            counts,
            idf: inverse_document_frequency(CORPUS_SIZE, 1),
        }
    }

    /// Occurrences of an already case-folded term.
    pub fn term_frequency(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Weight of an already case-folded term; zero for unseen terms.
    pub fn weight(&self, term: &str) -> f64 {
        self.term_frequency(term) as f64 * self.idf
    }

    /// Number of distinct content terms in the document.
    pub fn vocabulary_size(&self) -> usize {
        self.counts.len()
    }
}

fn inverse_document_frequency(documents: usize, documents_with_term: usize) -> f64 {
    1.0 + (documents as f64 / (1 + documents_with_term) as f64).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(text: &str) -> TermWeights {
        TermWeights::from_document(text, Language::English)
    }

    #[test]
    fn idf_is_constant_and_positive() {
        let idf = inverse_document_frequency(1, 1);
        assert!((idf - (1.0 - 2f64.ln())).abs() < 1e-12);
        assert!(idf > 0.0);
    }

    #[test]
    fn weight_is_proportional_to_frequency() {
        let w = weights("Cats purr. Cats sleep a lot. CATS!");
        assert_eq!(w.term_frequency("cats"), 3);
        assert_eq!(w.term_frequency("sleep"), 1);
        assert!((w.weight("cats") - 3.0 * w.weight("sleep")).abs() < 1e-12);
    }

    #[test]
    fn stopwords_are_not_counted() {
        let w = weights("The cat and the hat. It is what it is.");
        for stopword in ["the", "and", "it", "is", "what"] {
            assert_eq!(w.term_frequency(stopword), 0, "{stopword}");
            assert_eq!(w.weight(stopword), 0.0);
        }
        assert_eq!(w.term_frequency("cat"), 1);
    }

    #[test]
    fn spanish_stopwords_are_not_counted() {
        let w = TermWeights::from_document("El gato y la casa de el gato.", Language::Spanish);
        assert_eq!(w.term_frequency("el"), 0);
        assert_eq!(w.term_frequency("y"), 0);
        assert_eq!(w.term_frequency("gato"), 2);
    }

    #[test]
    fn unseen_terms_weigh_nothing() {
        let w = weights("Dogs bark.");
        assert_eq!(w.weight("cats"), 0.0);
        assert_eq!(w.vocabulary_size(), 2);
    }

    #[test]
    fn punctuation_is_not_a_term() {
        let w = weights("... !!! ???");
        assert_eq!(w.vocabulary_size(), 0);
    }
}
