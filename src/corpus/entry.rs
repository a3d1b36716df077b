// File: src/corpus/entry.rs
use std::fmt;

/// One usable line of the hyphenation list: the joined word and the number
/// of syllables its boundary markers describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyphenatedWord {
    pub key: String,
    pub syllables: usize,
}

/// Why a corpus word is kept out of both the dictionary and the statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterReason {
    /// The word still holds a hyphen or a space.
    Compound,
    /// More syllables than the configured ceiling.
    TooManySyllables(usize),
}

impl fmt::Display for FilterReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound => f.write_str("compound word"),
            Self::TooManySyllables(n) => write!(f, "{n} syllables"),
        }
    }
}

impl HyphenatedWord {
    pub fn filter_reason(&self, max_syllables: usize) -> Option<FilterReason> {
        if self.key.contains(|c: char| c == '-' || c == ' ') {
            Some(FilterReason::Compound)
        } else if self.syllables > max_syllables {
            Some(FilterReason::TooManySyllables(self.syllables))
        } else {
            None
        }
    }
}

/// Cleans hyphenation list lines. Unlike the prose normalizer this keeps the
/// boundary marker, hyphens and spaces, and drops every other non-letter.
///
/// Keeping `-` departs from generators that strip it and score `a-bomb` as
/// `abomb`. Here such entries fall to the compound filter, so scored and total
/// counts over the Moby list come out lower than theirs.
#[derive(Debug, Clone, Copy)]
pub struct CorpusNormalizer {
    delimiter: char,
}

impl CorpusNormalizer {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn normalize(&self, line: &str) -> String {
        let kept: String = line
            .to_lowercase()
            .chars()
            .filter(|&c| c.is_ascii_lowercase() || c == ' ' || c == '-' || c == self.delimiter)
            .collect();
        kept.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// `None` for lines with nothing left after cleaning.
    pub fn parse_line(&self, line: &str) -> Option<HyphenatedWord> {
        let normalized = self.normalize(line);
        let tokens: Vec<&str> = normalized
            .split(self.delimiter)
            .filter(|token| !token.is_empty())
            .collect();
        if tokens.is_empty() {
            return None;
        }
        Some(HyphenatedWord { key: tokens.concat(), syllables: tokens.len() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DELIMITER;

    fn normalizer() -> CorpusNormalizer {
        CorpusNormalizer::new(DEFAULT_DELIMITER)
    }

    #[test]
    fn counts_boundary_tokens() {
        let word = normalizer().parse_line("syl¥la¥ble").unwrap();
        assert_eq!(word.key, "syllable");
        assert_eq!(word.syllables, 3);
    }

    #[test]
    fn single_syllable_words_have_no_markers() {
        let word = normalizer().parse_line("Cat\r").unwrap();
        assert_eq!(word, HyphenatedWord { key: "cat".into(), syllables: 1 });
    }

    #[test]
    fn consecutive_markers_do_not_add_syllables() {
        let word = normalizer().parse_line("¥a¥¥bout¥").unwrap();
        assert_eq!(word.key, "about");
        assert_eq!(word.syllables, 2);
    }

    #[test]
    fn noise_is_stripped_but_compounds_survive() {
        let n = normalizer();
        assert_eq!(n.normalize("  Don't¥stop  "), "dont¥stop");
        assert_eq!(n.normalize("a-bomb"), "a-bomb");
        assert_eq!(n.normalize("ice   cream"), "ice cream");
        assert_eq!(n.normalize("caf\u{e9}"), "caf");
    }

    #[test]
    fn blank_lines_yield_nothing() {
        let n = normalizer();
        assert_eq!(n.parse_line(""), None);
        assert_eq!(n.parse_line("   "), None);
        assert_eq!(n.parse_line("¥¥"), None);
        assert_eq!(n.parse_line("123"), None);
    }

    #[test]
    fn filter_reasons() {
        let n = normalizer();
        assert_eq!(n.parse_line("a-bomb").unwrap().filter_reason(6), Some(FilterReason::Compound));
        assert_eq!(n.parse_line("ice cream").unwrap().filter_reason(6), Some(FilterReason::Compound));
        let long = n.parse_line("in¥ter¥na¥tion¥al¥i¥za¥tion").unwrap();
        assert_eq!(long.filter_reason(6), Some(FilterReason::TooManySyllables(8)));
        assert_eq!(n.parse_line("hap¥py").unwrap().filter_reason(6), None);
    }

    #[test]
    fn alternate_delimiter() {
        let n = CorpusNormalizer::new('*');
        let word = n.parse_line("hap*py").unwrap();
        assert_eq!(word.key, "happy");
        assert_eq!(word.syllables, 2);
    }
}
