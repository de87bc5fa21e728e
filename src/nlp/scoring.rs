//! Sentence scoring against document term weights.

use crate::nlp::{segmenter::Sentence, tokenizer::Tokenizer, weighting::TermWeights};

/// A sentence together with the sum of its term weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSentence<'a> {
    pub sentence: Sentence<'a>,
    pub score: f64,
}

/// Score every sentence, keeping one entry per input sentence and the input order.
pub fn score_sentences<'a, I>(
    sentences: I,
    weights: &TermWeights,
    tokenizer: Tokenizer,
) -> Vec<ScoredSentence<'a>>
where
    I: IntoIterator<Item = Sentence<'a>>,
{
    sentences
        .into_iter()
        .map(|sentence| ScoredSentence {
            score: score(sentence.text, weights, tokenizer),
            sentence,
        })
        .collect()
}

/// Sum of the weights of the tokens in `text`.
pub fn score(text: &str, weights: &TermWeights, tokenizer: Tokenizer) -> f64 {
    tokenizer
        .tokens(text)
        .map(|token| weights.weight(&token))
        .sum()
}
