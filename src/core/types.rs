// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Override table for words the vowel-run heuristic miscounts.
/// Keys are lower-case ASCII words, values their true syllable count.
///
/// Backed by a `BTreeMap` so the serialized artifact is stable across builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyllableDictionary {
    entries: BTreeMap<String, usize>,
}

impl SyllableDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(word, &count)| (word.as_str(), count))
    }

    pub(crate) fn insert(&mut self, word: String, syllables: usize) {
        self.entries.insert(word, syllables);
    }
}

impl FromIterator<(String, usize)> for SyllableDictionary {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// Categorical reading of a Flesch Reading Ease score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadabilityRating {
    #[serde(rename = "Very easy to read")]
    VeryEasy,
    #[serde(rename = "Easy to read")]
    Easy,
    #[serde(rename = "Fairly easy to read")]
    FairlyEasy,
    #[serde(rename = "Plain English")]
    PlainEnglish,
    #[serde(rename = "Fairly difficult to read")]
    FairlyDifficult,
    #[serde(rename = "Difficult to read")]
    Difficult,
    #[serde(rename = "Very difficult to read")]
    VeryDifficult,
    #[serde(rename = "Extremely difficult to read")]
    ExtremelyDifficult,
    /// The score was NaN: no words or no sentences.
    #[serde(rename = "Nothing to read")]
    NothingToRead,
}

impl ReadabilityRating {
    /// Maps a raw score onto the fixed threshold ladder.
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() {
            return Self::NothingToRead;
        }
        match score {
            s if s >= 90.0 => Self::VeryEasy,
            s if s >= 80.0 => Self::Easy,
            s if s >= 70.0 => Self::FairlyEasy,
            s if s >= 60.0 => Self::PlainEnglish,
            s if s >= 50.0 => Self::FairlyDifficult,
            s if s >= 30.0 => Self::Difficult,
            s if s >= 10.0 => Self::VeryDifficult,
            _ => Self::ExtremelyDifficult,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryEasy => "Very easy to read",
            Self::Easy => "Easy to read",
            Self::FairlyEasy => "Fairly easy to read",
            Self::PlainEnglish => "Plain English",
            Self::FairlyDifficult => "Fairly difficult to read",
            Self::Difficult => "Difficult to read",
            Self::VeryDifficult => "Very difficult to read",
            Self::ExtremelyDifficult => "Extremely difficult to read",
            Self::NothingToRead => "Nothing to read",
        }
    }
}

impl fmt::Display for ReadabilityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_boundaries() {
        assert_eq!(ReadabilityRating::from_score(120.0), ReadabilityRating::VeryEasy);
        assert_eq!(ReadabilityRating::from_score(90.0), ReadabilityRating::VeryEasy);
        assert_eq!(ReadabilityRating::from_score(89.99), ReadabilityRating::Easy);
        assert_eq!(ReadabilityRating::from_score(80.0), ReadabilityRating::Easy);
        assert_eq!(ReadabilityRating::from_score(70.0), ReadabilityRating::FairlyEasy);
        assert_eq!(ReadabilityRating::from_score(65.0), ReadabilityRating::PlainEnglish);
        assert_eq!(ReadabilityRating::from_score(50.0), ReadabilityRating::FairlyDifficult);
        assert_eq!(ReadabilityRating::from_score(30.0), ReadabilityRating::Difficult);
        assert_eq!(ReadabilityRating::from_score(29.9), ReadabilityRating::VeryDifficult);
        assert_eq!(ReadabilityRating::from_score(10.0), ReadabilityRating::VeryDifficult);
        assert_eq!(ReadabilityRating::from_score(9.9), ReadabilityRating::ExtremelyDifficult);
        assert_eq!(ReadabilityRating::from_score(-40.0), ReadabilityRating::ExtremelyDifficult);
    }

    #[test]
    fn nan_is_nothing_to_read() {
        let rating = ReadabilityRating::from_score(f64::NAN);
        assert_eq!(rating, ReadabilityRating::NothingToRead);
        assert_eq!(rating.to_string(), "Nothing to read");
    }

    #[test]
    fn dictionary_serializes_as_plain_sorted_object() {
        let dict: SyllableDictionary =
            vec![("every".to_string(), 3), ("area".to_string(), 3)].into_iter().collect();
        let json = serde_json::to_string(&dict).unwrap();
        assert_eq!(json, r#"{"area":3,"every":3}"#);
        let back: SyllableDictionary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dict);
        assert_eq!(back.get("every"), Some(3));
        assert!(!back.contains("the"));
    }
}
