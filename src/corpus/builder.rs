// File: src/corpus/builder.rs
use crate::config::{BuildConfig, DEFAULT_DELIMITER, DEFAULT_MAX_SYLLABLES};
use crate::core::syllables::SyllableEstimator;
use crate::core::types::SyllableDictionary;
use crate::corpus::entry::CorpusNormalizer;
use crate::corpus::stats::BuildStats;
use crate::error::Result;
use crate::persistence::{read_word_list, save_dictionary};
use std::collections::{BTreeMap, HashSet};

/// A finished build: the override table and how the heuristic fared.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub dictionary: SyllableDictionary,
    pub stats: BuildStats,
}

/// A corpus word the estimator got wrong, with its true count and how many
/// times it was scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Miss {
    pub syllables: usize,
    pub occurrences: usize,
}

/// Result of scoring a corpus with some estimator.
#[derive(Debug, Clone, Default)]
pub struct CorpusTally {
    /// Every scored word whose estimate disagreed with the corpus.
    pub misses: BTreeMap<String, Miss>,
    pub stats: BuildStats,
}

/// Turns a hyphenation list into a syllable dictionary of the common words
/// the heuristic miscounts.
#[derive(Debug, Clone)]
pub struct CorpusBuilder {
    normalizer: CorpusNormalizer,
    max_syllables: usize,
}

impl Default for CorpusBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER, DEFAULT_MAX_SYLLABLES)
    }
}

impl CorpusBuilder {
    pub fn new(delimiter: char, max_syllables: usize) -> Self {
        Self { normalizer: CorpusNormalizer::new(delimiter), max_syllables }
    }

    pub fn from_config(config: &BuildConfig) -> Self {
        Self::new(config.delimiter, config.max_syllables)
    }

    /// Scores every usable corpus word with `estimator`. Filtered words are
    /// only counted; blank lines are skipped entirely.
    pub fn tally(
        &self,
        estimator: &SyllableEstimator,
        corpus_text: &str,
        bypass_dictionary: bool,
    ) -> CorpusTally {
        let mut tally = CorpusTally::default();

        for line in corpus_text.lines() {
            let Some(word) = self.normalizer.parse_line(line) else {
                continue;
            };
            if let Some(reason) = word.filter_reason(self.max_syllables) {
                tracing::trace!(word = %word.key, %reason, "filtered corpus entry");
                tally.stats.num_filtered_out += 1;
                continue;
            }

            let estimated = estimator.estimate(&word.key, bypass_dictionary);
            if estimated == word.syllables {
                tally.stats.num_correct += 1;
            } else {
                tally.stats.num_incorrect += 1;
                tally.stats.total_absolute_syllable_error += estimated.abs_diff(word.syllables);
                let miss = tally
                    .misses
                    .entry(word.key)
                    .or_insert(Miss { syllables: word.syllables, occurrences: 0 });
                miss.syllables = word.syllables;
                miss.occurrences += 1;
            }
            tally.stats.num_words += 1;
        }

        tally
    }

    /// Normalized common-word keys. Entries normalize the same way corpus
    /// lines do, so `Don't` becomes `dont`.
    pub fn common_words(&self, common_words_text: &str) -> HashSet<String> {
        common_words_text
            .lines()
            .filter_map(|line| self.normalizer.parse_line(line))
            .map(|word| word.key)
            .collect()
    }

    /// Runs the heuristic alone over the corpus and keeps the misses that are
    /// also common words.
    pub fn build(&self, corpus_text: &str, common_words_text: &str) -> BuildOutput {
        let heuristic_only = SyllableEstimator::default();
        let CorpusTally { misses, mut stats } = self.tally(&heuristic_only, corpus_text, true);
        tracing::debug!(
            scored = stats.num_words,
            misses = misses.len(),
            filtered = stats.num_filtered_out,
            "scored hyphenation corpus"
        );

        let common = self.common_words(common_words_text);
        let mut dictionary = SyllableDictionary::new();
        for (key, miss) in misses {
            if common.contains(&key) {
                stats.num_common_words_wrong += miss.occurrences;
                dictionary.insert(key, miss.syllables);
            } else {
                stats.num_uncommon_wrong += miss.occurrences;
            }
        }

        tracing::info!(
            entries = dictionary.len(),
            accuracy = stats.accuracy(),
            "built syllable dictionary"
        );
        BuildOutput { dictionary, stats }
    }

    /// Re-scores the corpus with a dictionary-backed estimator.
    pub fn evaluate(&self, estimator: &SyllableEstimator, corpus_text: &str) -> CorpusTally {
        self.tally(estimator, corpus_text, false)
    }
}

/// Reads both inputs, builds, and writes the artifact atomically. Any read or
/// write failure aborts before the destination is touched.
pub fn run_build(config: &BuildConfig) -> Result<BuildOutput> {
    config.validate()?;
    let corpus_text = read_word_list(&config.corpus_path)?;
    let common_words_text = read_word_list(&config.common_words_path)?;

    let output = CorpusBuilder::from_config(config).build(&corpus_text, &common_words_text);
    save_dictionary(&output.dictionary, &config.output_path)?;
    Ok(output)
}
