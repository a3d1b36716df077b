use crate::core::scorer::{self, ReadabilityResult};
use crate::core::syllables::SyllableEstimator;
use crate::core::types::SyllableDictionary;
use crate::error::Result;
use crate::persistence::load_dictionary;
use std::path::Path;
use std::sync::Arc;

// The engine is the whole public surface for rendering layers: it owns one
// estimator whose dictionary is loaded once and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct ReadabilityEngine {
    estimator: SyllableEstimator,
}

impl ReadabilityEngine {
    /// Heuristic-only engine.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dictionary(dictionary: SyllableDictionary) -> Self {
        Self { estimator: SyllableEstimator::new(dictionary) }
    }

    pub fn with_shared_dictionary(dictionary: Arc<SyllableDictionary>) -> Self {
        Self { estimator: SyllableEstimator::with_shared(dictionary) }
    }

    /// Strict load: a missing or malformed dictionary is an error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let dictionary = load_dictionary(path.as_ref())?;
        tracing::info!(
            path = %path.as_ref().display(),
            entries = dictionary.len(),
            "loaded syllable dictionary"
        );
        Ok(Self::with_dictionary(dictionary))
    }

    /// Loads the dictionary if possible, otherwise runs heuristic-only.
    pub fn from_file_or_new(path: impl AsRef<Path>) -> Self {
        Self::from_file(path.as_ref()).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to heuristic-only syllable counts");
            Self::new()
        })
    }

    pub fn dictionary(&self) -> &SyllableDictionary {
        self.estimator.dictionary()
    }

    pub fn estimator(&self) -> &SyllableEstimator {
        &self.estimator
    }

    pub fn estimate(&self, word: &str, bypass_dictionary: bool) -> usize {
        self.estimator.estimate(word, bypass_dictionary)
    }

    pub fn score(&self, text: &str) -> ReadabilityResult {
        scorer::score(&self.estimator, text)
    }
}
