// File: src/config.rs
use crate::error::{ReadabilityError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Syllable boundary marker used by the published hyphenation list.
pub const DEFAULT_DELIMITER: char = '\u{a5}';
/// Corpus words with more syllables than this are left out of the build.
pub const DEFAULT_MAX_SYLLABLES: usize = 6;

/// Settings for one dictionary build. Every field has a default, so a config
/// file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub corpus_path: PathBuf,
    pub common_words_path: PathBuf,
    pub output_path: PathBuf,
    pub delimiter: char,
    pub max_syllables: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from("data/moby-hyphenation-list.txt"),
            common_words_path: PathBuf::from("data/common-english-words.txt"),
            output_path: PathBuf::from("data/syllable-count.json"),
            delimiter: DEFAULT_DELIMITER,
            max_syllables: DEFAULT_MAX_SYLLABLES,
        }
    }
}

impl BuildConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ReadabilityError::io(path, e))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| ReadabilityError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_syllables == 0 {
            return Err(ReadabilityError::Config(
                "max_syllables must be at least 1".to_string(),
            ));
        }
        // The delimiter must survive corpus normalization without colliding
        // with letters or with the compound-word markers the filter looks for.
        if self.delimiter.is_ascii_alphabetic()
            || self.delimiter.is_uppercase()
            || self.delimiter.is_whitespace()
            || self.delimiter == '-'
        {
            return Err(ReadabilityError::Config(format!(
                "delimiter {:?} collides with word characters",
                self.delimiter
            )));
        }
        Ok(())
    }
}
