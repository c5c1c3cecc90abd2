//! Text cleanup applied before segmentation.
//!
//! Strips markup, annotations, boilerplate and contact noise, then tidies
//! punctuation so the segmenter sees one space after every sentence mark.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MARKUP: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref BRACKETED: Regex = Regex::new(r"\[.*?\]").unwrap();
    static ref PARENTHESISED: Regex = Regex::new(r"\([^)]*\)").unwrap();
    static ref BOILERPLATE: Regex =
        Regex::new(r"(?i)click here|read more|continue reading|learn more").unwrap();
    static ref EMAIL: Regex =
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap();
    static ref URL: Regex = Regex::new(r"https?://\S+").unwrap();
    static ref REPEATED_TERMINAL: Regex = Regex::new(r"[.!?]{2,}").unwrap();
    static ref REPEATED_SEPARATOR: Regex = Regex::new(r"[,;]{2,}").unwrap();
    static ref SPACE_AROUND_MARK: Regex = Regex::new(r"\s*([.!?,;:])\s*").unwrap();
    static ref SPACE_BEFORE_MARK: Regex = Regex::new(r"\s+([.!?,;:])").unwrap();
}

/// Clean raw page or document text.
///
/// Total: never fails, and empty input yields an empty string. The result is
/// a fixed point, so `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    let mut current = raw.to_string();
    // Removals can expose new matches, so repeat until nothing changes. Past
    // the first pass every change shortens the text.
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_once(text: &str) -> String {
    let text = MARKUP.replace_all(text, " ");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = strip_noise(&text);
    let text = tidy_punctuation(&text);
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Annotations, boilerplate, addresses and control characters, in that order.
fn strip_noise(text: &str) -> String {
    let text = BRACKETED.replace_all(text, "");
    let text = PARENTHESISED.replace_all(&text, "");
    let text = BOILERPLATE.replace_all(&text, "");
    let text = EMAIL.replace_all(&text, "");
    let text = URL.replace_all(&text, "");
    text.chars().filter(|c| !c.is_control()).collect()
}

fn tidy_punctuation(text: &str) -> String {
    let text = REPEATED_TERMINAL.replace_all(text, ".");
    let text = REPEATED_SEPARATOR.replace_all(&text, ",");
    let text = SPACE_AROUND_MARK.replace_all(&text, "$1 ");
    SPACE_BEFORE_MARK.replace_all(&text, "$1").into_owned()
}

/// Number of whitespace-separated words left after normalization.
pub fn word_count(text: &str) -> usize {
    normalize(text).split_whitespace().count()
}

/// Shorten `text` to at most `max_chars` characters plus `suffix`.
///
/// Cuts at the last space when that space lies beyond 80% of the limit,
/// otherwise cuts mid-word. Text that already fits is returned unchanged.
pub fn truncate_text(text: &str, max_chars: usize, suffix: &str) -> String {
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };
    let head = &text[..cut];
    match head.rfind(' ') {
        Some(space) if head[..space].chars().count() * 5 > max_chars * 4 => {
            format!("{}{}", &head[..space], suffix)
        }
        _ => format!("{}{}", head, suffix),
    }
}
