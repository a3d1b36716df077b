// File: src/core/normalizer.rs
use once_cell::sync::Lazy;
use regex::Regex;

/// The single marker left between sentences after normalization.
pub const SENTENCE_MARKER: char = '.';

static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());
// Ellipses and slashes separate words, they never end a sentence.
static WORD_SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/|\.{2,4}").unwrap());
static DROPPED_PUNCTUATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["'“”‘’,;:\-_\[\](){}<>]"#).unwrap());
static TERMINAL_PUNCTUATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.?!\n]").unwrap());
static DOT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.+").unwrap());
static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());

/// Canonicalizes raw text for word and sentence segmentation.
///
/// Lower-cases, strips digits, turns ellipses and slashes into spaces, drops
/// quoting and bracketing punctuation, folds `?`, `!` and newlines into a
/// single `.` per boundary and collapses blanks. Total and idempotent.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let text = lowered.trim();
    let text = DIGIT_RE.replace_all(text, "");
    let text = WORD_SEPARATOR_RE.replace_all(&text, " ");
    let text = DROPPED_PUNCTUATION_RE.replace_all(&text, "");
    let text = TERMINAL_PUNCTUATION_RE.replace_all(&text, ".");
    let text = DOT_RUN_RE.replace_all(&text, ".");
    let text = BLANK_RUN_RE.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t "), "");
        assert_eq!(normalize(None::<&str>.unwrap_or_default()), "");
    }

    #[test]
    fn already_normalized_text_is_untouched() {
        assert_eq!(normalize("hello world"), "hello world");
    }

    #[test]
    fn lower_cases() {
        assert_eq!(normalize("HelLO wOrLD"), "hello world");
    }

    #[test]
    fn strips_digits() {
        assert_eq!(normalize("Number 1 and Number 2"), "number and number");
    }

    #[test]
    fn non_terminal_punctuation_is_removed() {
        let text = ",;:-_\"'[](){}<>.?\n!,;:-_\"'[](){}<>/";
        assert_eq!(normalize(text), ".");
    }

    #[test]
    fn typographic_quotes_are_removed() {
        assert_eq!(normalize("“Hello,” she said. Don’t ‘go’."), "hello she said. dont go.");
    }

    #[test]
    fn slashes_and_ellipses_become_spaces() {
        assert_eq!(
            normalize("a this/that or...nick/nack"),
            "a this that or nick nack"
        );
    }

    #[test]
    fn surrounding_newlines_are_trimmed() {
        let text = "\n             hello world.\n                 ";
        assert_eq!(normalize(text), "hello world.");
    }

    #[test]
    fn blank_runs_collapse() {
        assert_eq!(
            normalize("This      is \t\t   a            test  ."),
            "this is a test ."
        );
    }

    #[test]
    fn terminal_punctuation_becomes_periods() {
        let text = "Sentence one\n         Sentence two! Sentence three? Sentence four.";
        assert_eq!(
            normalize(text),
            "sentence one. sentence two. sentence three. sentence four."
        );
    }

    #[test]
    fn line_broken_verse() {
        let text = "
            This is a line
            This is another
            On and on
            Rolling over
            With tumbles
        ";
        assert_eq!(
            normalize(text),
            "this is a line. this is another. on and on. rolling over. with tumbles"
        );
    }

    #[test]
    fn repeated_terminators_collapse() {
        assert_eq!(normalize("Really?! Yes!!!"), "really. yes.");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(text in "[ -~\n\t]{0,64}") {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn output_has_no_digits_or_uppercase(text in "[ -~\n\t]{0,64}") {
            let out = normalize(&text);
            prop_assert!(!out.chars().any(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
            prop_assert!(!out.contains(".."));
            prop_assert_eq!(out.trim(), out.as_str());
        }
    }
}
