//! Text analytics engine.
//!
//! Decomposes the analysis into independent features, orchestrated by
//! [`analyze`]. The lexical stats are computed once; sentiment, keywords, and
//! readability read only the text; platform scoring and suggestions consume
//! the earlier results.
//!
//! Each feature is a pure function in its own module. Callers can also
//! invoke features individually.

pub mod keywords;
pub mod platforms;
pub mod reports;
pub mod sentiment;
pub mod suggestions;

pub use reports::{AnalysisReport, FileReport};

use crate::readability;
use crate::text;

/// Run the full analysis of a text.
///
/// Total over any input: empty or degenerate text yields zero counts,
/// neutral sentiment, no keywords, and an `N/A` readability band.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str) -> AnalysisReport {
    let stats = text::lexical_stats(text);

    let sentiment = sentiment::analyze_sentiment(text);
    let keywords = keywords::extract_keywords(text);
    let readability = readability::score_readability(text);

    let platforms = platforms::evaluate_platforms(text, &stats);
    let suggestions = suggestions::generate_suggestions(text, &stats, &sentiment, &readability);

    tracing::debug!(
        words = stats.words,
        sentiment = sentiment.label.as_str(),
        readability = readability.score,
        suggestions = suggestions.len(),
        "analysis complete"
    );

    AnalysisReport {
        stats,
        sentiment,
        keywords,
        readability,
        platforms,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readability::GradeBand;
    use crate::text::LexicalStats;
    use sentiment::SentimentLabel;

    const SAMPLES: &[&str] = &[
        "",
        "   \n\n  ",
        "This is amazing! I love it. #great",
        "Bad. Bad. Terrible. Awful.",
        "???!!!...",
        "Institutionalization internationalization telecommunications",
        "Hey @team, what do you think about our professional business update? #work #news",
        "📷🎨 #a #b #c #d #e #f #g",
    ];

    fn has_title(report: &AnalysisReport, title: &str) -> bool {
        report.suggestions.iter().any(|s| s.title == title)
    }

    #[test]
    fn empty_input_yields_degenerate_report() {
        let report = analyze("");
        assert_eq!(report.stats, LexicalStats::default());
        assert_eq!(report.sentiment.score, 50);
        assert_eq!(report.sentiment.label, SentimentLabel::Neutral);
        assert!(report.keywords.is_empty());
        assert_eq!(report.readability.score, 0);
        assert_eq!(report.readability.grade, GradeBand::NotApplicable);
        assert_eq!(report.platforms.len(), platforms::PLATFORMS.len());
        assert!(!report.suggestions.is_empty());
    }

    #[test]
    fn positive_scenario() {
        let report = analyze("This is amazing! I love it. #great");
        assert_eq!(report.sentiment.label, SentimentLabel::Positive);
        assert!(!has_title(&report, "Add Strategic Hashtags"));
        assert!(!has_title(&report, "Encourage Interaction"));
    }

    #[test]
    fn long_unpunctuated_scenario() {
        let text: String = (0..350).map(|i| format!("term{i} ")).collect();
        let report = analyze(&text);
        assert_eq!(report.stats.words, 350);
        assert!(has_title(&report, "Content Length Optimization"));
        assert!(has_title(&report, "Add Strategic Hashtags"));
    }

    #[test]
    fn negative_scenario() {
        let report = analyze("Bad. Bad. Terrible. Awful.");
        assert_eq!(report.sentiment.label, SentimentLabel::Negative);
        assert!(report.sentiment.score < 40);
        assert!(has_title(&report, "Boost Positivity"));
    }

    #[test]
    fn scores_stay_in_range() {
        for text in SAMPLES {
            let report = analyze(text);
            assert!(report.sentiment.score <= 100, "sentiment for {text:?}");
            assert!(report.readability.score >= 0, "readability for {text:?}");
            assert!(
                report.platforms.iter().all(|p| p.suitability <= 100),
                "platforms for {text:?}"
            );
            assert!(report.keywords.len() <= keywords::MAX_KEYWORDS);
            assert!(!report.suggestions.is_empty());
        }
    }

    #[test]
    fn keywords_are_ordered_by_count() {
        for text in SAMPLES {
            let report = analyze(text);
            assert!(
                report.keywords.windows(2).all(|w| w[0].count >= w[1].count),
                "keyword order for {text:?}"
            );
        }
    }

    #[test]
    fn analysis_is_deterministic() {
        for text in SAMPLES {
            assert_eq!(analyze(text), analyze(text));
        }
    }

    #[test]
    fn report_serializes_with_expected_shape() {
        let report = analyze("Check out our launch! #rust");
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["stats"]["words"].is_u64());
        assert_eq!(json["sentiment"]["label"], "Neutral");
        assert_eq!(json["platforms"][0]["platform"], "twitter");
        assert!(json["suggestions"].is_array());
    }
}
