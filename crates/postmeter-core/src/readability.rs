//! Readability scoring using Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher score = easier to read. The score maps onto a school grade band;
//! anything under 30 reads at graduate level.
//!
//! Sentences and words follow the lexical splitter in [`text`]; syllables
//! use the whole-text estimate from [`text::count_syllables`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Coarse schooling level derived from a Flesch Reading Ease score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum GradeBand {
    /// Score 90 and above.
    #[serde(rename = "5th")]
    Fifth,
    /// Score 80 to 89.
    #[serde(rename = "6th")]
    Sixth,
    /// Score 70 to 79.
    #[serde(rename = "7th")]
    Seventh,
    /// Score 60 to 69.
    #[serde(rename = "8-9th")]
    EighthNinth,
    /// Score 50 to 59.
    #[serde(rename = "10-12th")]
    TenthTwelfth,
    /// Score 30 to 49.
    College,
    /// Score under 30.
    Graduate,
    /// No words or no sentences to score.
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl GradeBand {
    /// Map a raw (unclamped) Flesch score onto its band.
    pub const fn from_score(score: i32) -> Self {
        match score {
            90.. => Self::Fifth,
            80..=89 => Self::Sixth,
            70..=79 => Self::Seventh,
            60..=69 => Self::EighthNinth,
            50..=59 => Self::TenthTwelfth,
            30..=49 => Self::College,
            _ => Self::Graduate,
        }
    }

    /// Returns the band label used in reports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fifth => "5th",
            Self::Sixth => "6th",
            Self::Seventh => "7th",
            Self::EighthNinth => "8-9th",
            Self::TenthTwelfth => "10-12th",
            Self::College => "College",
            Self::Graduate => "Graduate",
            Self::NotApplicable => "N/A",
        }
    }
}

impl std::fmt::Display for GradeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Flesch Reading Ease score for display, never below 0.
    pub score: i32,
    /// Rounded Flesch score before clamping; may be negative.
    pub raw_score: i32,
    /// Grade band derived from the unclamped score.
    pub grade: GradeBand,
    /// Number of sentences detected.
    pub sentences: usize,
    /// Number of words detected.
    pub words: usize,
    /// Whole-text syllable estimate.
    pub syllables: usize,
}

impl ReadabilityReport {
    fn not_applicable(sentences: usize, words: usize, syllables: usize) -> Self {
        Self {
            score: 0,
            raw_score: 0,
            grade: GradeBand::NotApplicable,
            sentences,
            words,
            syllables,
        }
    }
}

/// Score readability of text using Flesch Reading Ease.
///
/// Text with no words or no sentences scores 0 with band `N/A`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn score_readability(text: &str) -> ReadabilityReport {
    let sentences = text::split_sentences(text).len();
    let words = text::split_words(text).len();
    let syllables = text::count_syllables(text);

    if sentences == 0 || words == 0 {
        return ReadabilityReport::not_applicable(sentences, words, syllables);
    }

    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    let flesch = 1.015f64.mul_add(-words_per_sentence, 206.835) - 84.6 * syllables_per_word;
    let raw_score = text::round_half_up(flesch) as i32;

    ReadabilityReport {
        score: raw_score.max(0),
        raw_score,
        grade: GradeBand::from_score(raw_score),
        sentences,
        words,
        syllables,
    }
}
