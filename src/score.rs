//! Heuristic sentence importance.
//!
//! Each signal contributes a fixed, non-negative weight; the score is their
//! sum. The weights are tuning constants kept stable so rankings stay
//! reproducible across releases.

use crate::summary::{ScoredSentence, Sentence};
use lazy_static::lazy_static;
use regex::Regex;

const IDEAL_WORDS: (usize, usize) = (8, 25);
const ACCEPTABLE_WORDS: (usize, usize) = (5, 30);
const IDEAL_LENGTH_WEIGHT: f64 = 2.0;
const ACCEPTABLE_LENGTH_WEIGHT: f64 = 1.0;
const KEYWORD_WEIGHT: f64 = 1.0;
const QUESTION_WEIGHT: f64 = 1.0;
const EXCLAMATION_WEIGHT: f64 = 0.5;
const NUMERIC_WEIGHT: f64 = 0.5;
const PROPER_NOUN_WEIGHT: f64 = 0.3;

/// Words whose presence marks a sentence as carrying the main point.
pub const IMPORTANCE_LEXICON: &[&str] = &[
    "important",
    "key",
    "main",
    "primary",
    "essential",
    "critical",
    "significant",
];

lazy_static! {
    static ref CAPITALIZED_WORD: Regex = Regex::new(r"[A-Z][a-z]+").unwrap();
}

/// Score every sentence, keeping input order.
pub fn score(sentences: &[Sentence]) -> Vec<ScoredSentence> {
    sentences
        .iter()
        .map(|sentence| ScoredSentence {
            score: sentence_score(&sentence.text),
            sentence: sentence.clone(),
        })
        .collect()
}

/// Importance of a single sentence.
pub fn sentence_score(text: &str) -> f64 {
    let mut score = 0.0;

    let words = text.split_whitespace().count();
    if (IDEAL_WORDS.0..=IDEAL_WORDS.1).contains(&words) {
        score += IDEAL_LENGTH_WEIGHT;
    } else if (ACCEPTABLE_WORDS.0..=ACCEPTABLE_WORDS.1).contains(&words) {
        score += ACCEPTABLE_LENGTH_WEIGHT;
    }

    // Substring match, once per lexicon entry regardless of repeats.
    let lower = text.to_lowercase();
    for keyword in IMPORTANCE_LEXICON {
        if lower.contains(keyword) {
            score += KEYWORD_WEIGHT;
        }
    }

    if text.contains('?') {
        score += QUESTION_WEIGHT;
    }
    if text.contains('!') {
        score += EXCLAMATION_WEIGHT;
    }
    if text.chars().any(|c| c.is_ascii_digit()) {
        score += NUMERIC_WEIGHT;
    }
    if CAPITALIZED_WORD.is_match(text) {
        score += PROPER_NOUN_WEIGHT;
    }

    score
}
