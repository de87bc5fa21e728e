//! Punctuation-based sentence segmentation.
//!
//! A sentence is a maximal run of characters other than `.`, `!` and `?`
//! followed by one or more of those terminators. Text after the last
//! terminator is not a sentence and is skipped. Captured whitespace is kept
//! as-is.

use std::iter::FusedIterator;

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("valid regex"));

/// A sentence borrowed from the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Position in the document, counting from zero.
    pub index: usize,
    pub text: &'a str,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last terminator.
    pub end: usize,
}

/// Lazily segment `text` into sentences.
pub fn segment(text: &str) -> Sentences<'_> {
    Sentences {
        text,
        offset: 0,
        index: 0,
    }
}

/// Iterator over the sentences of a document. Cloning it yields an
/// independent cursor over the remaining sentences.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    text: &'a str,
    offset: usize,
    index: usize,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = Sentence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = SENTENCE.find_at(self.text, self.offset)?;
        self.offset = found.end();
        let sentence = Sentence {
            index: self.index,
            text: found.as_str(),
            start: found.start(),
            end: found.end(),
        };
        self.index += 1;
        Some(sentence)
    }
}

impl FusedIterator for Sentences<'_> {}
