//! Sentence segmentation.

use crate::summary::Sentence;
use lazy_static::lazy_static;
use regex::Regex;

/// Fragments this short or shorter are treated as stray initials or
/// abbreviations, not sentences. Genuinely short sentences are lost too.
const MIN_SENTENCE_CHARS: usize = 10;

lazy_static! {
    static ref BOUNDARY: Regex = Regex::new(r"[.!?]\s+").unwrap();
}

/// Split normalized text into sentences.
///
/// A boundary is a `.`, `!` or `?` followed by whitespace; the mark stays on
/// the sentence it ends. Indices are assigned over the surviving fragments.
pub fn segment(text: &str) -> Vec<Sentence> {
    let mut fragments = Vec::new();
    let mut start = 0;
    for boundary in BOUNDARY.find_iter(text) {
        // Sentence marks are single-byte, so the fragment ends one past the match start.
        fragments.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    fragments.push(&text[start..]);

    fragments
        .into_iter()
        .map(str::trim)
        .filter(|fragment| fragment.chars().count() > MIN_SENTENCE_CHARS)
        .enumerate()
        .map(|(index, fragment)| Sentence::new(fragment, index))
        .collect()
}
