//! Lexicon-based sentiment classification.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;
use crate::word_lists::{NEGATIVE_WORDS, NEUTRAL_WORDS, POSITIVE_WORDS};

/// Score reported when no sentiment-bearing words are found.
pub const NEUTRAL_SCORE: u8 = 50;

/// Overall polarity of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum SentimentLabel {
    /// Score above 60.
    Positive,
    /// Score from 40 to 60.
    Neutral,
    /// Score below 40.
    Negative,
}

impl SentimentLabel {
    /// Classify a 0–100 sentiment score.
    pub const fn from_score(score: u8) -> Self {
        if score > 60 {
            Self::Positive
        } else if score < 40 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Returns the label as a string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment classification of a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentReport {
    /// Share of positive hits among all hits, 0–100.
    pub score: u8,
    /// Polarity derived from the score.
    pub label: SentimentLabel,
    /// Distinct positive vocabulary terms present.
    pub positive: usize,
    /// Distinct negative vocabulary terms present.
    pub negative: usize,
    /// Distinct neutral vocabulary terms present.
    pub neutral: usize,
}

/// Classify the sentiment of a text.
///
/// Each vocabulary term counts once if it appears anywhere in the text,
/// no matter how often. Tokens are lower-cased and stripped of surrounding
/// punctuation before lookup. Hashtags and mentions are not vocabulary.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze_sentiment(text: &str) -> SentimentReport {
    let lower = text.to_lowercase();
    let tokens: HashSet<&str> = text::split_words(&lower)
        .into_iter()
        .filter(|w| !is_tag(w))
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect();

    let positive = tokens.iter().filter(|t| POSITIVE_WORDS.contains(**t)).count();
    let negative = tokens.iter().filter(|t| NEGATIVE_WORDS.contains(**t)).count();
    let neutral = tokens.iter().filter(|t| NEUTRAL_WORDS.contains(**t)).count();

    let total = positive + negative + neutral;
    let score = if total > 0 {
        text::round_half_up(positive as f64 / total as f64 * 100.0) as u8
    } else {
        NEUTRAL_SCORE
    };

    tracing::debug!(positive, negative, neutral, score, "sentiment scored");

    SentimentReport {
        score,
        label: SentimentLabel::from_score(score),
        positive,
        negative,
        neutral,
    }
}

fn is_tag(token: &str) -> bool {
    token
        .trim_start_matches(|c: char| !c.is_alphanumeric() && c != '#' && c != '@')
        .starts_with(['#', '@'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_neutral() {
        let report = analyze_sentiment("");
        assert_eq!(report.score, 50);
        assert_eq!(report.label, SentimentLabel::Neutral);
        assert_eq!((report.positive, report.negative, report.neutral), (0, 0, 0));
    }

    #[test]
    fn positive_words_with_punctuation_count() {
        let report = analyze_sentiment("This is amazing! I love it. #great");
        assert_eq!(report.positive, 2);
        assert_eq!(report.score, 100);
        assert_eq!(report.label, SentimentLabel::Positive);
    }

    #[test]
    fn hashtags_and_mentions_are_not_vocabulary() {
        let report = analyze_sentiment("Launch day #awful #bad @wrong (#terrible)");
        assert_eq!((report.positive, report.negative, report.neutral), (0, 0, 0));
        assert_eq!(report.score, 50);
        assert_eq!(report.label, SentimentLabel::Neutral);
    }

    #[test]
    fn negative_text_scores_low() {
        let report = analyze_sentiment("Bad. Bad. Terrible. Awful.");
        assert_eq!(report.negative, 3);
        assert_eq!(report.score, 0);
        assert_eq!(report.label, SentimentLabel::Negative);
    }

    #[test]
    fn repeated_terms_count_once() {
        let report = analyze_sentiment("great great great but bad");
        assert_eq!(report.positive, 1);
        assert_eq!(report.negative, 1);
        assert_eq!(report.score, 50);
        assert_eq!(report.label, SentimentLabel::Neutral);
    }

    #[test]
    fn neutral_terms_dilute_the_score() {
        // 1 positive of 3 hits -> 33
        let report = analyze_sentiment("A great but average and typical day");
        assert_eq!(report.neutral, 2);
        assert_eq!(report.score, 33);
        assert_eq!(report.label, SentimentLabel::Negative);
    }

    #[test]
    fn embedded_terms_do_not_match() {
        let report = analyze_sentiment("greatness badge lovely");
        assert_eq!(report.score, 50);
    }

    #[test]
    fn label_thresholds() {
        assert_eq!(SentimentLabel::from_score(61), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(60), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(40), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(39), SentimentLabel::Negative);
    }
}
