//! Core library for postmeter.
//!
//! This crate provides the text analytics engine used by the `postmeter` CLI
//! and MCP server: lexical statistics, sentiment, keywords, readability,
//! platform suitability, and rule-based suggestions.
//!
//! # Modules
//!
//! - [`analysis`] - Full analysis orchestration and the individual features
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//! - [`extract`] - Source classification and text extraction
//! - [`readability`] - Flesch Reading Ease scoring
//! - [`text`] - Tokenization and lexical statistics
//!
//! # Quick Start
//!
//! ```
//! use postmeter_core::analyze;
//!
//! let report = analyze("This is amazing! I love it. #great");
//! assert_eq!(report.sentiment.label.as_str(), "Positive");
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod extract;
pub mod readability;
pub mod text;
pub mod word_lists;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

pub use analysis::keywords::{Keyword, extract_keywords};
pub use analysis::platforms::{Platform, PlatformReport, evaluate_platform, evaluate_platforms};
pub use analysis::sentiment::{SentimentLabel, SentimentReport, analyze_sentiment};
pub use analysis::suggestions::{Severity, Suggestion, generate_suggestions};
pub use analysis::{AnalysisReport, FileReport, analyze};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, ExtractionError, ExtractionResult};
pub use extract::{PlainTextExtractor, SourceFile, SourceKind, TextExtractor};
pub use readability::{GradeBand, ReadabilityReport, score_readability};
pub use text::{LexicalStats, lexical_stats};
