// File: src/core/scorer.rs
use crate::core::normalizer::{normalize, SENTENCE_MARKER};
use crate::core::syllables::SyllableEstimator;
use crate::core::types::ReadabilityRating;
use serde::Serialize;

/// Average adult reading speed, words per minute.
pub const AVERAGE_WORDS_PER_MINUTE: usize = 180;

const FLESCH_BASE: f64 = 206.835;
const FLESCH_SENTENCE_LENGTH_WEIGHT: f64 = 1.015;
const FLESCH_SYLLABLES_PER_WORD_WEIGHT: f64 = 84.6;

/// Outcome of one analysis. `raw_score` is NaN when there was nothing to
/// score, which serializes as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct ReadabilityResult {
    pub num_words: usize,
    pub num_sentences: usize,
    pub num_syllables: usize,
    pub raw_score: f64,
    pub rating: ReadabilityRating,
    pub average_time_to_read: String,
}

/// Words of already normalized text. Sentence markers separate words too,
/// so a token that was only a marker is not a word.
pub fn words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized
        .split(|c: char| c.is_whitespace() || c == SENTENCE_MARKER)
        .filter(|word| !word.is_empty())
}

/// Sentences of already normalized text.
pub fn sentences(normalized: &str) -> impl Iterator<Item = &str> {
    normalized
        .split(SENTENCE_MARKER)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
}

/// Flesch Reading Ease. Zero words or sentences yield NaN.
pub fn flesch_reading_ease(num_words: usize, num_sentences: usize, num_syllables: usize) -> f64 {
    let words = num_words as f64;
    let sentences = num_sentences as f64;
    let syllables = num_syllables as f64;
    if num_words == 0 || num_sentences == 0 {
        return f64::NAN;
    }
    FLESCH_BASE
        - FLESCH_SENTENCE_LENGTH_WEIGHT * (words / sentences)
        - FLESCH_SYLLABLES_PER_WORD_WEIGHT * (syllables / words)
}

/// `"N min."` at [`AVERAGE_WORDS_PER_MINUTE`], rounded up.
pub fn average_time_to_read(num_words: usize) -> String {
    format!("{} min.", num_words.div_ceil(AVERAGE_WORDS_PER_MINUTE))
}

/// Scores raw text. Never fails: empty input gives zero counts and a
/// "Nothing to read" rating.
pub fn score(estimator: &SyllableEstimator, raw_text: &str) -> ReadabilityResult {
    let normalized = normalize(raw_text);

    let mut num_words = 0;
    let mut num_syllables = 0;
    for word in words(&normalized) {
        num_words += 1;
        num_syllables += estimator.estimate(word, false);
    }
    let num_sentences = sentences(&normalized).count();

    let raw_score = flesch_reading_ease(num_words, num_sentences, num_syllables);
    tracing::trace!(num_words, num_sentences, num_syllables, raw_score, "scored text");

    ReadabilityResult {
        num_words,
        num_sentences,
        num_syllables,
        raw_score,
        rating: ReadabilityRating::from_score(raw_score),
        average_time_to_read: average_time_to_read(num_words),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SyllableDictionary;

    fn plain() -> SyllableEstimator {
        SyllableEstimator::default()
    }

    #[test]
    fn short_simple_sentence() {
        // "loves" is a silent-e miss the heuristic counts as two.
        let dict: SyllableDictionary = vec![("loves".to_string(), 1)].into_iter().collect();
        let result = score(&SyllableEstimator::new(dict), "John loves Mary.");
        assert_eq!(result.num_words, 3);
        assert_eq!(result.num_sentences, 1);
        assert_eq!(result.num_syllables, 4);
        assert!((result.raw_score - 92.0).abs() / 92.0 < 0.05, "{}", result.raw_score);
        assert_eq!(result.rating, ReadabilityRating::VeryEasy);
        assert_eq!(result.average_time_to_read, "1 min.");

        let heuristic_only = score(&plain(), "John loves Mary.");
        assert_eq!(heuristic_only.num_syllables, 5);
    }

    #[test]
    fn cat_on_the_mat() {
        let result = score(&plain(), "The cat sat on the mat.");
        assert_eq!(result.num_words, 6);
        assert_eq!(result.num_sentences, 1);
        assert_eq!(result.num_syllables, 6);
        assert!((result.raw_score - 116.0).abs() < 1.0, "{}", result.raw_score);
    }

    #[test]
    fn empty_text_is_nothing_to_read() {
        for text in ["", "   ", "...", "1 2 3", None::<&str>.unwrap_or_default()] {
            let result = score(&plain(), text);
            assert_eq!(result.num_words, 0, "{text:?}");
            assert_eq!(result.num_sentences, 0, "{text:?}");
            assert_eq!(result.num_syllables, 0);
            assert!(result.raw_score.is_nan());
            assert_eq!(result.rating, ReadabilityRating::NothingToRead);
            assert_eq!(result.average_time_to_read, "0 min.");
        }
    }

    #[test]
    fn lone_markers_are_not_words() {
        let normalized = normalize("This is a test .");
        assert_eq!(words(&normalized).count(), 4);
        assert_eq!(sentences(&normalized).count(), 1);
    }

    #[test]
    fn unterminated_text_is_one_sentence() {
        let result = score(&plain(), "no full stop here");
        assert_eq!(result.num_sentences, 1);
        assert_eq!(result.num_words, 4);
    }

    #[test]
    fn newlines_split_sentences() {
        let result = score(&plain(), "Roses are red\nViolets are blue\n");
        assert_eq!(result.num_sentences, 2);
        assert_eq!(result.num_words, 6);
    }

    #[test]
    fn dictionary_feeds_the_syllable_total() {
        let dict: SyllableDictionary = vec![("people".to_string(), 2)].into_iter().collect();
        let with_dict = score(&SyllableEstimator::new(dict), "People talk.");
        let without = score(&plain(), "People talk.");
        assert_eq!(with_dict.num_syllables, 3);
        assert_eq!(without.num_syllables, 2);
        assert!(with_dict.raw_score < without.raw_score);
    }

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(average_time_to_read(0), "0 min.");
        assert_eq!(average_time_to_read(1), "1 min.");
        assert_eq!(average_time_to_read(180), "1 min.");
        assert_eq!(average_time_to_read(181), "2 min.");
    }

    #[test]
    fn nan_score_serializes_as_null() {
        let result = score(&plain(), "");
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["raw_score"].is_null());
        assert_eq!(json["rating"], "Nothing to read");
        assert_eq!(json["average_time_to_read"], "0 min.");
    }
}
