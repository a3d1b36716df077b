// File: src/corpus/stats.rs
use serde::Serialize;
use std::fmt;

/// Counters gathered over one pass through the hyphenation list.
///
/// Filtered words are never scored, so they appear only in
/// `num_filtered_out` and in [`total_corpus_words`](Self::total_corpus_words).
/// Every counter is per occurrence. The common/uncommon split is only filled
/// in by a build; a plain tally leaves both at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    pub num_words: usize,
    pub num_correct: usize,
    pub num_incorrect: usize,
    pub num_filtered_out: usize,
    pub num_common_words_wrong: usize,
    /// Misses left out of the dictionary because the word is not common.
    pub num_uncommon_wrong: usize,
    pub total_absolute_syllable_error: usize,
}

impl BuildStats {
    pub fn total_corpus_words(&self) -> usize {
        self.num_words + self.num_filtered_out
    }

    /// Fraction of scored words the estimator got right; NaN for an empty corpus.
    pub fn accuracy(&self) -> f64 {
        self.num_correct as f64 / self.num_words as f64
    }

    /// Mean absolute syllable error over the misses; NaN when there were none.
    pub fn average_error(&self) -> f64 {
        self.total_absolute_syllable_error as f64 / self.num_incorrect as f64
    }
}

impl fmt::Display for BuildStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# correct:                      {}", self.num_correct)?;
        writeln!(f, "# wrong:                        {}", self.num_incorrect)?;
        writeln!(f, "# common words wrong:           {}", self.num_common_words_wrong)?;
        writeln!(f, "# words used for calculation:   {}", self.num_words)?;
        writeln!(f, "# words filtered out:           {}", self.num_filtered_out)?;
        writeln!(f, "# total words in corpus:        {}", self.total_corpus_words())?;
        writeln!(f, "% correct overall:              {:.2}", self.accuracy() * 100.0)?;
        write!(f, "average syllable error (wrong): {:.3}", self.average_error())
    }
}
