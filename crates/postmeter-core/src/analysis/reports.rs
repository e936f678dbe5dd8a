//! Report structs for the full analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::extract::{SourceFile, SourceKind};
use crate::readability::ReadabilityReport;
use crate::text::LexicalStats;

use super::keywords::Keyword;
use super::platforms::PlatformReport;
use super::sentiment::SentimentReport;
use super::suggestions::Suggestion;

/// Full analysis of one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Word, sentence, and paragraph counts.
    pub stats: LexicalStats,
    /// Sentiment classification.
    pub sentiment: SentimentReport,
    /// Most frequent keywords, at most 20.
    pub keywords: Vec<Keyword>,
    /// Flesch Reading Ease score and grade band.
    pub readability: ReadabilityReport,
    /// Suitability per platform, in registry order.
    pub platforms: Vec<PlatformReport>,
    /// Recommendations, never empty.
    pub suggestions: Vec<Suggestion>,
}

/// Analysis of one source file, as exported by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FileReport {
    /// Name of the analyzed file.
    pub filename: String,
    /// What kind of source the text came from.
    pub source_kind: SourceKind,
    /// MIME type guessed from the file extension.
    pub mime: String,
    /// Size of the raw file in bytes.
    pub size_bytes: u64,
    /// When the report was generated (RFC 3339, UTC).
    pub timestamp: DateTime<Utc>,
    /// One-line summary.
    pub summary: String,
    /// The analysis itself.
    pub analysis: AnalysisReport,
}

impl FileReport {
    /// Wrap an analysis with its source file metadata.
    ///
    /// The caller supplies the generation time, usually `Utc::now()`.
    pub fn new(source: SourceFile, timestamp: DateTime<Utc>, analysis: AnalysisReport) -> Self {
        let SourceFile {
            filename,
            kind,
            mime,
            size_bytes,
        } = source;
        let summary = format!(
            "{filename}: {} words, {} sentiment, readability {} ({}), {} suggestion(s)",
            analysis.stats.words,
            analysis.sentiment.label,
            analysis.readability.score,
            analysis.readability.grade,
            analysis.suggestions.len(),
        );
        Self {
            filename,
            source_kind: kind,
            mime: mime.to_string(),
            size_bytes,
            timestamp,
            summary,
            analysis,
        }
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;
    use chrono::TimeZone;

    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn file_report_carries_source_metadata_and_timestamp() {
        let text = "Bad. Bad. Terrible. Awful.";
        let source = SourceFile::new(Utf8Path::new("post.md"), SourceKind::Text, text.as_bytes());
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        let report = FileReport::new(source, at, analyze(text));

        assert_eq!(report.mime, "text/markdown");
        assert_eq!(report.size_bytes, text.len() as u64);
        assert!(report.summary.starts_with("post.md: 4 words, Negative sentiment"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["timestamp"], "2025-03-14T09:30:00Z");
        assert_eq!(json["source_kind"], "text");
        assert_eq!(json["mime"], "text/markdown");
    }
}
