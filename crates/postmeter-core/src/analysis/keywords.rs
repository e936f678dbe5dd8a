//! Keyword extraction by frequency.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::word_lists::STOP_WORDS;

/// Maximum number of keywords returned.
pub const MAX_KEYWORDS: usize = 20;

/// Words at or below this many characters are never keywords.
pub const MIN_KEYWORD_CHARS: usize = 3;

/// Upper bound of a keyword's display weight.
pub const MAX_WEIGHT: f64 = 2.0;

/// Anything that is neither a word character nor whitespace.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// A ranked keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Keyword {
    /// The lower-cased word.
    pub word: String,
    /// Number of occurrences in the text.
    pub count: usize,
    /// Presentation weight in `[0, 2]`, relative to the most frequent word.
    pub weight: f64,
}

/// Extract up to [`MAX_KEYWORDS`] keywords, most frequent first.
///
/// Words are lower-cased and stripped of punctuation. Stop words and words of
/// three characters or fewer are skipped. Equal counts keep first-occurrence
/// order.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn extract_keywords(text: &str) -> Vec<Keyword> {
    let lower = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lower, "");

    // Tally in first-occurrence order.
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for word in cleaned.split_whitespace() {
        if word.chars().count() <= MIN_KEYWORD_CHARS || STOP_WORDS.contains(word) {
            continue;
        }
        match index.get(word) {
            Some(&i) => tally[i].1 += 1,
            None => {
                index.insert(word, tally.len());
                tally.push((word, 1));
            }
        }
    }

    let Some(max_count) = tally.iter().map(|&(_, count)| count).max() else {
        return Vec::new();
    };
    let scale = (max_count as f64 / 10.0).max(1.0);

    // Stable sort keeps first-occurrence order among equal counts.
    tally.sort_by(|a, b| b.1.cmp(&a.1));

    tracing::debug!(
        distinct = tally.len(),
        max_count,
        "keywords tallied"
    );

    tally
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, count)| Keyword {
            word: word.to_string(),
            count,
            weight: (count as f64 / scale).min(MAX_WEIGHT),
        })
        .collect()
}
