//! Fixed vocabularies for text analytics.
//!
//! Sentiment word sets, keyword stop words, and call-to-action terms. All
//! sets are closed and built once on first use.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Words that signal positive sentiment.
pub static POSITIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "amazing",
        "awesome",
        "excellent",
        "fantastic",
        "great",
        "wonderful",
        "perfect",
        "outstanding",
        "superb",
        "brilliant",
        "love",
        "best",
        "incredible",
        "remarkable",
        "exceptional",
    ]
    .into_iter()
    .collect()
});

/// Words that signal negative sentiment.
pub static NEGATIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "terrible",
        "awful",
        "horrible",
        "bad",
        "worst",
        "hate",
        "disappointing",
        "frustrating",
        "annoying",
        "pathetic",
        "useless",
        "failed",
        "broken",
        "wrong",
    ]
    .into_iter()
    .collect()
});

/// Words that signal a flat, neutral register.
pub static NEUTRAL_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "okay", "average", "normal", "standard", "typical", "regular", "common", "usual",
    ]
    .into_iter()
    .collect()
});

/// Function words excluded from keyword ranking.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did",
        "will", "would", "could", "should", "may", "might", "must", "can", "this", "that",
        "these", "those",
    ]
    .into_iter()
    .collect()
});

/// Terms and phrases that count as a call to action.
pub const CALL_TO_ACTION_TERMS: &[&str] = &[
    "comment",
    "share",
    "like",
    "follow",
    "click",
    "visit",
    "check out",
    "learn more",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_sizes() {
        assert_eq!(POSITIVE_WORDS.len(), 15);
        assert_eq!(NEGATIVE_WORDS.len(), 14);
        assert_eq!(NEUTRAL_WORDS.len(), 8);
        assert_eq!(STOP_WORDS.len(), 38);
    }

    #[test]
    fn sentiment_sets_are_disjoint() {
        assert!(POSITIVE_WORDS.is_disjoint(&NEGATIVE_WORDS));
        assert!(POSITIVE_WORDS.is_disjoint(&NEUTRAL_WORDS));
        assert!(NEGATIVE_WORDS.is_disjoint(&NEUTRAL_WORDS));
    }
}
