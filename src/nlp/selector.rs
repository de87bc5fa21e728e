//! Top-K sentence selection.

use crate::nlp::scoring::ScoredSentence;

/// Keep the `k` best-scoring sentences and return them in document order.
///
/// Equal scores keep the order the sentences were scored in. The second pass
/// orders by the index recorded at segmentation, so repeated sentence text
/// keeps each occurrence at its own position.
pub fn select_top(mut scored: Vec<ScoredSentence<'_>>, k: usize) -> Vec<ScoredSentence<'_>> {
    // `sort_by` is stable.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(k);
    scored.sort_by_key(|s| s.sentence.index);
    scored
}

/// Join selected sentences with single spaces.
pub fn join_sentences(selected: &[ScoredSentence<'_>]) -> String {
    selected
        .iter()
        .map(|s| s.sentence.text.trim())
        .collect::<Vec<_>>()
        .join(" ")
}
