//! Lexical splitting and counting.
//!
//! Provides word, sentence, and paragraph splitting, the whole-text syllable
//! estimate used by readability scoring, and [`LexicalStats`], the count
//! summary every downstream analysis consumes.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Assumed reading speed in words per minute.
pub const READING_SPEED_WPM: usize = 200;

/// Words longer than this many characters count toward complexity.
pub const LONG_WORD_CHARS: usize = 6;

/// Runs of sentence terminators.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// A newline, optional whitespace, then another newline.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

static NON_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z]").expect("valid regex"));

static VOWEL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{2,}").expect("valid regex"));

/// Count summary derived once per input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LexicalStats {
    /// Whitespace-separated tokens.
    pub words: usize,
    /// Non-blank segments between runs of `.`, `!`, `?`.
    pub sentences: usize,
    /// Non-blank segments between blank lines.
    pub paragraphs: usize,
    /// Unicode scalar values in the input.
    pub characters: usize,
    /// `words / sentences`, rounded; 0 without sentences.
    pub avg_words_per_sentence: usize,
    /// `ceil(words / 200)`.
    pub reading_time_minutes: usize,
    /// Percentage of words longer than six characters, rounded.
    pub complexity_percent: usize,
}

/// Split text into words on runs of whitespace.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split text into sentences on runs of `.`, `!` and `?`.
///
/// Segments that are blank after trimming are dropped. The returned slices
/// are trimmed and exclude the terminators.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into paragraphs separated by one or more blank lines.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Estimate the syllable count of a whole text.
///
/// The text is lower-cased and reduced to its ASCII letters, so the estimate
/// runs over one concatenated letter stream rather than word by word. A
/// single trailing `e` is dropped, vowel runs collapse to one vowel, and the
/// remaining vowels are counted. The result is never below 1.
pub fn count_syllables(text: &str) -> usize {
    let lower = text.to_lowercase();
    let stripped = NON_LETTER.replace_all(&lower, "");
    let letters: &str = &stripped;
    let letters = letters.strip_suffix('e').unwrap_or(letters);
    let collapsed = VOWEL_RUN.replace_all(letters, "a");

    let vowels = collapsed
        .chars()
        .filter(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
        .count();

    vowels.max(1)
}

/// Compute the lexical statistics of a text.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn lexical_stats(text: &str) -> LexicalStats {
    let words = split_words(text);
    let word_count = words.len();
    let sentences = split_sentences(text).len();
    let paragraphs = split_paragraphs(text).len();

    let avg_words_per_sentence = if sentences > 0 {
        round_half_up(word_count as f64 / sentences as f64) as usize
    } else {
        0
    };

    let long_words = words
        .iter()
        .filter(|w| w.chars().count() > LONG_WORD_CHARS)
        .count();
    let complexity_percent = if word_count > 0 {
        round_half_up(long_words as f64 / word_count as f64 * 100.0) as usize
    } else {
        0
    };

    let stats = LexicalStats {
        words: word_count,
        sentences,
        paragraphs,
        characters: text.chars().count(),
        avg_words_per_sentence,
        reading_time_minutes: word_count.div_ceil(READING_SPEED_WPM),
        complexity_percent,
    };
    tracing::debug!(
        words = stats.words,
        sentences = stats.sentences,
        paragraphs = stats.paragraphs,
        "lexical stats computed"
    );
    stats
}

/// Round to the nearest integer, with halves rounding toward positive infinity.
///
/// Unlike [`f64::round`], `-2.5` rounds to `-2`.
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_on_whitespace_runs() {
        assert_eq!(split_words("  one\ttwo \n\n three  "), vec!["one", "two", "three"]);
        assert!(split_words("").is_empty());
    }

    #[test]
    fn sentences_split_on_terminator_runs() {
        let sentences = split_sentences("Wait... What?! Yes. ");
        assert_eq!(sentences, vec!["Wait", "What", "Yes"]);
    }

    #[test]
    fn sentences_without_terminator_still_count() {
        assert_eq!(split_sentences("no punctuation here"), vec!["no punctuation here"]);
        assert!(split_sentences(" ... !!! ").is_empty());
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let text = "First paragraph.\n\nSecond paragraph.\n   \n\nThird.\nStill third.";
        let paras = split_paragraphs(text);
        assert_eq!(paras.len(), 3);
        assert_eq!(paras[2], "Third.\nStill third.");
    }

    #[test]
    fn syllables_collapse_vowel_runs() {
        // "beautiful" -> "b" + "a" (eau) + "t" + "i" + "f" + "u" + "l"
        assert_eq!(count_syllables("beautiful"), 3);
    }

    #[test]
    fn syllables_strip_one_trailing_e() {
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("the"), 1);
    }

    #[test]
    fn syllables_run_over_concatenated_letters() {
        // "see apple" -> "seeappl": "eea" collapses to one vowel.
        assert_eq!(count_syllables("see apple"), 1);
    }

    #[test]
    fn syllables_floor_at_one() {
        assert_eq!(count_syllables(""), 1);
        assert_eq!(count_syllables("123 !!! rhythm"), 1);
        assert_eq!(count_syllables("brr"), 1);
    }

    #[test]
    fn empty_input_yields_zero_stats() {
        assert_eq!(lexical_stats(""), LexicalStats::default());
    }

    #[test]
    fn stats_for_simple_text() {
        let stats = lexical_stats("The cat sat on the mat. The dog ran fast.\n\nAnother paragraph here!");
        assert_eq!(stats.words, 13);
        assert_eq!(stats.sentences, 3);
        assert_eq!(stats.paragraphs, 2);
        assert_eq!(stats.avg_words_per_sentence, 4);
        assert_eq!(stats.reading_time_minutes, 1);
        // "Another", "paragraph" are the only words over six characters.
        assert_eq!(stats.complexity_percent, 15);
    }

    #[test]
    fn reading_time_rounds_up() {
        let text = "word ".repeat(201);
        assert_eq!(lexical_stats(&text).reading_time_minutes, 2);
        let text = "word ".repeat(200);
        assert_eq!(lexical_stats(&text).reading_time_minutes, 1);
    }

    #[test]
    fn characters_count_scalar_values() {
        assert_eq!(lexical_stats("café 📷").characters, 6);
    }

    #[test]
    fn round_half_up_matches_expected_halves() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.49), 0.0);
    }
}
