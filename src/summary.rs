//! Value types shared by every stage of the summarisation pipeline.
//!
//! The enums parse permissively: an unknown name never fails, it degrades to
//! the default variant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse control over how much of the source ends up in the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LengthPreference {
    Short,
    #[default]
    Medium,
    Long,
}

impl LengthPreference {
    /// Resolve a user-supplied name; anything unrecognised means `Medium`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "short" => Self::Short,
            "long" => Self::Long,
            _ => Self::Medium,
        }
    }

    /// Number of sentences a summary of this length should contain.
    pub fn sentence_count(self) -> usize {
        match self {
            Self::Short => 1,
            Self::Medium => 3,
            Self::Long => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

/// Which orchestration path produces the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Strategy {
    #[default]
    Extractive,
    Abstractive,
    Hybrid,
}

impl Strategy {
    /// Resolve a user-supplied name; anything unrecognised means `Extractive`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "abstractive" => Self::Abstractive,
            "hybrid" => Self::Hybrid,
            _ => Self::Extractive,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Extractive => "extractive",
            Self::Abstractive => "abstractive",
            Self::Hybrid => "hybrid",
        }
    }
}

/// What part of the content a focused summary concentrates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Focus {
    #[default]
    Main,
    Conclusion,
    KeyPoints,
}

impl Focus {
    /// Resolve a user-supplied name; anything unrecognised means `Main`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "conclusion" => Self::Conclusion,
            "key_points" => Self::KeyPoints,
            _ => Self::Main,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Conclusion => "conclusion",
            Self::KeyPoints => "key_points",
        }
    }
}

macro_rules! named_enum_conversions {
    ($($ty:ty),*) => {$(
        impl From<String> for $ty {
            fn from(name: String) -> Self {
                Self::from_name(&name)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    )*};
}

named_enum_conversions!(LengthPreference, Strategy, Focus);

/// A sentence as produced by the segmenter.
///
/// `original_index` is its rank in segmentation order and is the only key
/// used to restore reading order after ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    pub original_index: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, original_index: usize) -> Self {
        Self {
            text: text.into(),
            original_index,
        }
    }
}

/// A sentence together with its heuristic importance.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    pub score: f64,
}

impl ScoredSentence {
    pub fn text(&self) -> &str {
        &self.sentence.text
    }

    pub fn original_index(&self) -> usize {
        self.sentence.original_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_maps_to_sentence_count() {
        assert_eq!(LengthPreference::Short.sentence_count(), 1);
        assert_eq!(LengthPreference::Medium.sentence_count(), 3);
        assert_eq!(LengthPreference::Long.sentence_count(), 5);
    }

    #[test]
    fn unknown_names_degrade_to_defaults() {
        assert_eq!(LengthPreference::from_name("huge"), LengthPreference::Medium);
        assert_eq!(Strategy::from_name("magic"), Strategy::Extractive);
        assert_eq!(Focus::from_name(""), Focus::Main);
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(LengthPreference::from_name(" LONG "), LengthPreference::Long);
        assert_eq!(Strategy::from_name("Hybrid"), Strategy::Hybrid);
        assert_eq!(Focus::from_name("key-points"), Focus::KeyPoints);
    }

    #[test]
    fn display_round_trips_through_from_name() {
        for s in [Strategy::Extractive, Strategy::Abstractive, Strategy::Hybrid] {
            assert_eq!(Strategy::from_name(&s.to_string()), s);
        }
    }
}
