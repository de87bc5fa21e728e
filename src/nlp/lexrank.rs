//! LexRank sentence centrality.
//!
//! Sentences are nodes of a graph. Two sentences are linked when the
//! idf-modified cosine similarity of their term vectors exceeds
//! [`LexRankConfig::threshold`]; each row of the adjacency matrix is divided
//! by its degree. A sentence's score is its entry in the stationary vector of
//! that matrix, found by power iteration from the uniform vector.
//!
//! Term vectors hold content terms only (stop words are dropped). Term
//! frequencies are scaled by the sentence's most frequent term, and the idf
//! of a term is `ln(N / (1 + n))` where `N` is the sentence count and `n` the
//! number of sentences containing the term.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::nlp::{language::Language, scoring::ScoredSentence, segmenter::Sentence};

const MAX_ITERATIONS: usize = 1000;

type TermVector = FxHashMap<String, f64>;

/// Parameters of the LexRank graph and its power iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexRankConfig {
    /// Similarity above which two sentences are linked.
    pub threshold: f64,
    /// Iteration stops once successive vectors are within this L2 distance.
    pub epsilon: f64,
}

impl Default for LexRankConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            epsilon: 0.1,
        }
    }
}

impl LexRankConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}

/// Score every sentence by its LexRank centrality, keeping the input order.
pub fn score_sentences<'a, I>(
    sentences: I,
    language: Language,
    config: &LexRankConfig,
) -> Vec<ScoredSentence<'a>>
where
    I: IntoIterator<Item = Sentence<'a>>,
{
    let sentences: Vec<Sentence<'a>> = sentences.into_iter().collect();
    if sentences.is_empty() {
        return Vec::new();
    }

    let vectors: Vec<TermVector> = sentences
        .iter()
        .map(|sentence| term_vector(sentence.text, language))
        .collect();
    let idf = inverse_sentence_frequency(&vectors);
    let matrix = transition_matrix(&vectors, &idf, config.threshold);
    let ranks = power_iteration(&matrix, config.epsilon);

    sentences
        .into_iter()
        .zip(ranks)
        .map(|(sentence, score)| ScoredSentence { sentence, score })
        .collect()
}

fn term_vector(text: &str, language: Language) -> TermVector {
    let stopwords = language.stopwords();
    let mut counts = TermVector::default();
    for term in language.tokenizer().tokens(text) {
        if stopwords.is_stopword(&term) {
            continue;
        }
        *counts.entry(term).or_insert(0.0) += 1.0;
    }
    let max = counts.values().copied().fold(0.0, f64::max);
    if max > 0.0 {
        for tf in counts.values_mut() {
            *tf /= max;
        }
    }
    counts
}

fn inverse_sentence_frequency(vectors: &[TermVector]) -> FxHashMap<&str, f64> {
    let mut containing: FxHashMap<&str, usize> = FxHashMap::default();
    for vector in vectors {
        for term in vector.keys() {
            *containing.entry(term.as_str()).or_insert(0) += 1;
        }
    }
    let sentences = vectors.len() as f64;
    containing
        .into_iter()
        .map(|(term, n)| (term, (sentences / (1 + n) as f64).ln()))
        .collect()
}

fn modified_cosine(a: &TermVector, b: &TermVector, idf: &FxHashMap<&str, f64>) -> f64 {
    let idf_of = |term: &str| idf.get(term).copied().unwrap_or(0.0);
    let numerator: f64 = a
        .iter()
        .filter_map(|(term, tf_a)| b.get(term).map(|tf_b| tf_a * tf_b * idf_of(term).powi(2)))
        .sum();
    let norm = |vector: &TermVector| {
        vector
            .iter()
            .map(|(term, tf)| (tf * idf_of(term)).powi(2))
            .sum::<f64>()
            .sqrt()
    };
    let denominator = norm(a) * norm(b);
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

fn transition_matrix(
    vectors: &[TermVector],
    idf: &FxHashMap<&str, f64>,
    threshold: f64,
) -> Vec<Vec<f64>> {
    vectors
        .iter()
        .map(|a| {
            let mut row: Vec<f64> = vectors
                .iter()
                .map(|b| {
                    if modified_cosine(a, b, idf) > threshold {
                        1.0
                    } else {
                        0.0
                    }
                })
                .collect();
            let degree = row.iter().filter(|&&edge| edge > 0.0).count().max(1) as f64;
            for edge in &mut row {
                *edge /= degree;
            }
            row
        })
        .collect()
}

fn power_iteration(matrix: &[Vec<f64>], epsilon: f64) -> Vec<f64> {
    let n = matrix.len();
    let mut ranks = vec![1.0 / n as f64; n];
    let mut next = vec![0.0; n];

    for iteration in 1..=MAX_ITERATIONS {
        next.fill(0.0);
        for (row, &rank) in matrix.iter().zip(&ranks) {
            for (target, &edge) in next.iter_mut().zip(row) {
                *target += edge * rank;
            }
        }
        let delta = ranks
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).powi(2))
            .sum::<f64>()
            .sqrt();
        std::mem::swap(&mut ranks, &mut next);
        if delta <= epsilon {
            debug!(iteration, delta, "lexrank converged");
            return ranks;
        }
    }

    warn!(iterations = MAX_ITERATIONS, "lexrank did not converge");
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::segmenter::segment;

    // The first sentence shares one term with each of the next three; the
    // last shares nothing with anyone.
    const STAR: &str = "zorp blick quax. zorp frell. blick gronk. quax plim. vesk drub.";

    fn centrality(text: &str, config: &LexRankConfig) -> Vec<f64> {
        score_sentences(segment(text), Language::English, config)
            .into_iter()
            .map(|scored| scored.score)
            .collect()
    }

    #[test]
    fn hub_sentence_is_most_central() {
        let scores = centrality(STAR, &LexRankConfig::default());
        assert_eq!(scores.len(), 5);

        let expected = [0.3125, 0.1625, 0.1625, 0.1625, 0.2];
        for (got, want) in scores.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{scores:?}");
        }
        assert!((scores.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn tight_epsilon_reaches_the_stationary_vector() {
        let config = LexRankConfig::default().with_epsilon(1e-10);
        let scores = centrality(STAR, &config);
        let expected = [0.32, 0.16, 0.16, 0.16, 0.2];
        for (got, want) in scores.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6, "{scores:?}");
        }
    }

    #[test]
    fn high_threshold_leaves_only_self_links() {
        let config = LexRankConfig::default().with_threshold(0.9);
        for score in centrality(STAR, &config) {
            assert!((score - 0.2).abs() < 1e-12);
        }
    }

    #[test]
    fn similarity_ignores_stopwords() {
        let vector = term_vector("The cats and the dogs.", Language::English);
        assert_eq!(vector.len(), 2);
        assert_eq!(vector.get("cats"), Some(&1.0));
        assert!(vector.get("the").is_none());
    }

    #[test]
    fn term_frequencies_are_scaled_by_the_most_frequent_term() {
        let vector = term_vector("zorp zorp blick.", Language::English);
        assert_eq!(vector.get("zorp"), Some(&1.0));
        assert_eq!(vector.get("blick"), Some(&0.5));
    }

    #[test]
    fn unrelated_sentences_have_zero_similarity() {
        let vectors = vec![
            term_vector("zorp blick.", Language::English),
            term_vector("vesk drub.", Language::English),
            term_vector("zorp quax.", Language::English),
            term_vector("frell gronk.", Language::English),
        ];
        let idf = inverse_sentence_frequency(&vectors);
        assert_eq!(modified_cosine(&vectors[0], &vectors[1], &idf), 0.0);
        assert!(modified_cosine(&vectors[0], &vectors[2], &idf) > 0.0);
        assert!((modified_cosine(&vectors[0], &vectors[0], &idf) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn no_sentences_yield_no_scores() {
        let scored = score_sentences(
            segment("no terminator"),
            Language::English,
            &LexRankConfig::default(),
        );
        assert!(scored.is_empty());
    }

    #[test]
    fn single_sentence_takes_all_the_rank() {
        assert_eq!(centrality("zorp blick.", &LexRankConfig::default()), vec![1.0]);
    }
}
