// File: src/core/syllables.rs
use crate::core::types::SyllableDictionary;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

static VOWEL_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]+").unwrap());

/// Number of maximal vowel runs in `word`, the raw syllable-nucleus guess.
pub fn count_vowel_clusters(word: &str) -> usize {
    VOWEL_RUN_RE.find_iter(word).count()
}

/// Vowel-run count with the silent trailing `e` and `ed` corrections.
/// Never consults a dictionary.
pub fn heuristic(word: &str) -> usize {
    let mut word = word;
    loop {
        let clusters = count_vowel_clusters(word);
        if clusters < 2 {
            return clusters;
        }
        // Each correction strictly shortens the word, so this terminates.
        if let Some(stripped) = word.strip_suffix('e') {
            word = stripped;
        } else if let Some(stripped) = word.strip_suffix("ed") {
            word = stripped;
        } else {
            return clusters;
        }
    }
}

/// Estimates syllables per word. Known heuristic failures are answered from
/// the dictionary; every other word falls through to [`heuristic`].
///
/// Cloning is cheap: clones share one immutable dictionary.
#[derive(Debug, Clone, Default)]
pub struct SyllableEstimator {
    dictionary: Arc<SyllableDictionary>,
}

impl SyllableEstimator {
    pub fn new(dictionary: SyllableDictionary) -> Self {
        Self { dictionary: Arc::new(dictionary) }
    }

    pub fn with_shared(dictionary: Arc<SyllableDictionary>) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &SyllableDictionary {
        &self.dictionary
    }

    /// Dictionary first unless `bypass_dictionary` is set, then the heuristic.
    pub fn estimate(&self, word: &str, bypass_dictionary: bool) -> usize {
        if word.is_empty() {
            return 0;
        }
        if !bypass_dictionary {
            if let Some(count) = self.dictionary.get(word) {
                return count;
            }
        }
        heuristic(word)
    }
}
