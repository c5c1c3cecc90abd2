//! Choosing which sentences make it into the summary.

use crate::summary::{LengthPreference, ScoredSentence, Sentence};

/// Characters of normalized text shown when no sentence survives segmentation.
pub const EXCERPT_CHARS: usize = 200;

/// Marker appended when more content existed than was shown.
pub const ELLIPSIS: &str = "...";

/// Pick the highest-scoring sentences and return them in reading order.
///
/// `source` is the normalized text the sentences came from; it is only read
/// when `scored` is empty.
pub fn select(scored: &[ScoredSentence], length: LengthPreference, source: &str) -> String {
    if scored.is_empty() {
        return excerpt(source);
    }
    let wanted = length.sentence_count();

    let mut ranked: Vec<&ScoredSentence> = scored.iter().collect();
    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.original_index().cmp(&b.original_index()))
    });
    ranked.truncate(wanted);
    ranked.sort_by_key(|s| s.original_index());

    let texts: Vec<&str> = ranked.iter().map(|s| s.text()).collect();
    compose(&texts, scored.len() > wanted)
}

/// Take the last sentences of the text, unscored, as a conclusion.
pub fn select_tail(sentences: &[Sentence], length: LengthPreference, source: &str) -> String {
    if sentences.is_empty() {
        return excerpt(source);
    }
    let wanted = length.sentence_count();
    let skip = sentences.len().saturating_sub(wanted);

    let texts: Vec<&str> = sentences[skip..].iter().map(|s| s.text.as_str()).collect();
    compose(&texts, skip > 0)
}

/// The first [`EXCERPT_CHARS`] characters of `source`, marked when cut and
/// otherwise closed with a terminal mark.
pub fn excerpt(source: &str) -> String {
    match source.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}{}", &source[..cut], ELLIPSIS),
        None => ensure_terminal(source),
    }
}

/// Append `.` unless the text already ends a sentence.
pub fn ensure_terminal(text: &str) -> String {
    let mut text = text.trim_end().to_string();
    if !text.ends_with(['.', '!', '?']) {
        text.push('.');
    }
    text
}

fn compose(texts: &[&str], truncated: bool) -> String {
    let mut summary = ensure_terminal(&texts.join(". "));
    if truncated {
        summary.push_str(ELLIPSIS);
    }
    summary
}
