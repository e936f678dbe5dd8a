//! Rule-based optimization suggestions.
//!
//! Every rule is checked independently against the combined analysis
//! results; all matching rules fire, in a fixed order. When none fire, a
//! single success suggestion is returned, so the list is never empty.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::readability::ReadabilityReport;
use crate::text::LexicalStats;
use crate::word_lists::CALL_TO_ACTION_TERMS;

use super::sentiment::SentimentReport;

/// Word counts above this suggest splitting the content.
pub const LONG_CONTENT_WORDS: usize = 300;

/// Word counts below this suggest expanding the content.
pub const SHORT_CONTENT_WORDS: usize = 25;

/// Sentiment scores below this suggest more positive language.
pub const LOW_SENTIMENT_SCORE: u8 = 40;

/// Readability scores below this suggest simpler language.
pub const LOW_READABILITY_SCORE: i32 = 50;

/// Whole-word, case-insensitive call-to-action terms.
///
/// Word boundaries and case folding are ASCII-only, so a term next to an
/// accented letter still counts as a whole word.
static CALL_TO_ACTION: LazyLock<Regex> = LazyLock::new(|| {
    let terms = CALL_TO_ACTION_TERMS
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i-u)\b(?:{terms})\b")).expect("valid regex")
});

/// How a suggestion should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Nothing to improve.
    Success,
    /// Likely hurting engagement.
    Warning,
    /// Worth considering.
    Info,
    /// Optional improvement.
    Tip,
}

impl Severity {
    /// Returns the severity as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Tip => "tip",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A human-readable recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Suggestion {
    /// Short heading.
    pub title: String,
    /// What to do about it.
    pub description: String,
    /// Presentation severity.
    pub severity: Severity,
}

impl Suggestion {
    fn new(title: &str, description: &str, severity: Severity) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            severity,
        }
    }
}

/// Inputs every rule can look at.
struct RuleContext<'a> {
    text: &'a str,
    stats: &'a LexicalStats,
    sentiment: &'a SentimentReport,
    readability: &'a ReadabilityReport,
}

/// A suggestion rule: a predicate plus the suggestion it emits.
struct Rule {
    applies: fn(&RuleContext<'_>) -> bool,
    title: &'static str,
    description: &'static str,
    severity: Severity,
}

const RULES: &[Rule] = &[
    Rule {
        applies: |c| c.stats.words > LONG_CONTENT_WORDS,
        title: "Content Length Optimization",
        description: "Consider breaking this into multiple posts for better digestibility and engagement",
        severity: Severity::Warning,
    },
    Rule {
        applies: |c| c.stats.words < SHORT_CONTENT_WORDS,
        title: "Expand Your Content",
        description: "Add more context, examples, or call-to-actions to improve engagement",
        severity: Severity::Info,
    },
    Rule {
        applies: |c| !c.text.contains('#'),
        title: "Add Strategic Hashtags",
        description: "Include 3-5 relevant hashtags to increase discoverability across platforms",
        severity: Severity::Tip,
    },
    Rule {
        applies: |c| !c.text.contains(['?', '!']),
        title: "Encourage Interaction",
        description: "Add questions or exclamations to prompt user engagement and comments",
        severity: Severity::Tip,
    },
    Rule {
        applies: |c| c.sentiment.score < LOW_SENTIMENT_SCORE,
        title: "Boost Positivity",
        description: "Consider adding more positive language to improve audience reception",
        severity: Severity::Warning,
    },
    Rule {
        applies: |c| c.readability.score < LOW_READABILITY_SCORE,
        title: "Improve Readability",
        description: "Simplify language and use shorter sentences for better comprehension",
        severity: Severity::Info,
    },
    Rule {
        applies: |c| !CALL_TO_ACTION.is_match(c.text),
        title: "Add Call-to-Action",
        description: "Include clear instructions on what you want your audience to do next",
        severity: Severity::Tip,
    },
];

/// Generate suggestions from the combined analysis of a text.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn generate_suggestions(
    text: &str,
    stats: &LexicalStats,
    sentiment: &SentimentReport,
    readability: &ReadabilityReport,
) -> Vec<Suggestion> {
    let ctx = RuleContext {
        text,
        stats,
        sentiment,
        readability,
    };

    let mut suggestions: Vec<Suggestion> = RULES
        .iter()
        .filter(|rule| (rule.applies)(&ctx))
        .map(|rule| Suggestion::new(rule.title, rule.description, rule.severity))
        .collect();

    if suggestions.is_empty() {
        suggestions.push(Suggestion::new(
            "Excellent Content!",
            "Your content is well-optimized for social media engagement",
            Severity::Success,
        ));
    }

    tracing::debug!(count = suggestions.len(), "suggestions generated");
    suggestions
}
