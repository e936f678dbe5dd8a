//! Analyze command: the full analysis over one or more files.

use std::time::Duration;

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use postmeter_core::analysis::{self, FileReport};
use postmeter_core::analysis::suggestions::Severity;
use postmeter_core::config::Config;

use super::keywords::{display_limit, print_keywords};
use super::platforms::{print_platforms, select};
use super::readability::print_readability;
use super::sentiment::print_sentiment;
use super::load_text;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Files to analyze.
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Minimum acceptable readability score.
    #[arg(long)]
    pub min_readability: Option<i32>,

    /// Minimum acceptable sentiment score (0-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_sentiment: Option<u8>,
}

/// Quality gates applied to every analyzed file.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Gates {
    min_readability: Option<i32>,
    min_sentiment: Option<u8>,
}

impl Gates {
    /// Check a report, returning one message per failed gate.
    pub(crate) fn check(&self, report: &FileReport) -> Vec<String> {
        let mut failed = Vec::new();
        let analysis = &report.analysis;
        if let Some(min) = self.min_readability
            && analysis.readability.score < min
        {
            failed.push(format!(
                "{} readability {} is below minimum {min}",
                report.filename, analysis.readability.score
            ));
        }
        if let Some(min) = self.min_sentiment
            && analysis.sentiment.score < min
        {
            failed.push(format!(
                "{} sentiment {} is below minimum {min}",
                report.filename, analysis.sentiment.score
            ));
        }
        failed
    }
}

/// Extract and analyze a single file.
pub(crate) fn analyze_file(path: &Utf8Path, max_input_bytes: Option<usize>) -> anyhow::Result<FileReport> {
    let (source, text) = load_text(path, max_input_bytes)?;
    let analysis = analysis::analyze(&text);
    Ok(FileReport::new(source, Utc::now(), analysis))
}

fn spinner(total: usize) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .context("invalid progress template")?,
    );
    pb.set_message(format!("analyzing {total} files"));
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

/// Run the full analysis on each file.
///
/// Files are processed in order. A file that cannot be read or extracted is
/// reported and skipped; the command fails at the end if any file failed or
/// fell below a gate.
#[instrument(name = "cmd_analyze", skip_all, fields(files = args.files.len()))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(files = ?args.files, "executing analyze command");

    let gates = Gates {
        min_readability: args.min_readability.or(config.min_readability),
        min_sentiment: args.min_sentiment.or(config.min_sentiment),
    };
    let total = args.files.len();
    let progress = if !global_json && total > 1 {
        Some(spinner(total)?)
    } else {
        None
    };

    let mut reports = Vec::with_capacity(total);
    let mut failures = Vec::new();
    for (i, file) in args.files.iter().enumerate() {
        if let Some(ref pb) = progress {
            pb.set_message(format!("[{}/{total}] {file}", i + 1));
        }
        match analyze_file(file, max_input_bytes) {
            Ok(report) => reports.push(report),
            Err(err) => {
                let message = format!("{err:#}");
                debug!(file = %file, error = %message, "file failed");
                failures.push(message);
            }
        }
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        let limit = display_limit(None, config.keyword_limit);
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_report(report, limit, config);
        }
    }

    for failure in &failures {
        eprintln!("{} {failure}", "error:".red().bold());
    }
    let gate_failures: Vec<String> = reports.iter().flat_map(|r| gates.check(r)).collect();

    if !failures.is_empty() {
        bail!("{} of {total} file(s) could not be analyzed", failures.len());
    }
    if !gate_failures.is_empty() {
        bail!("{}", gate_failures.join("; "));
    }

    Ok(())
}

fn print_report(report: &FileReport, keyword_limit: usize, config: &Config) {
    let a = &report.analysis;
    println!(
        "{} {}",
        report.filename.bold(),
        format!("({}, {}, {} bytes)", report.source_kind, report.mime, report.size_bytes).dimmed()
    );
    println!(
        "  {} {} words, {} sentences, {} paragraphs, {} characters",
        "Stats:".cyan(),
        a.stats.words,
        a.stats.sentences,
        a.stats.paragraphs,
        a.stats.characters,
    );
    println!(
        "  {} {} words/sentence, {}% complex words, ~{} min read",
        "Style:".cyan(),
        a.stats.avg_words_per_sentence,
        a.stats.complexity_percent,
        a.stats.reading_time_minutes,
    );
    print_sentiment(&a.sentiment);
    print_readability(&a.readability);

    if !a.keywords.is_empty() {
        let shown = &a.keywords[..a.keywords.len().min(keyword_limit)];
        print_keywords(shown);
    }

    let platforms = select(a.platforms.clone(), config.platforms.as_deref());
    print_platforms(&platforms, false);

    println!("  {}", "Suggestions:".cyan());
    for s in &a.suggestions {
        let tag = match s.severity {
            Severity::Success => s.severity.green().to_string(),
            Severity::Warning => s.severity.red().to_string(),
            Severity::Info => s.severity.yellow().to_string(),
            Severity::Tip => s.severity.blue().to_string(),
        };
        println!("    [{tag}] {}: {}", s.title.bold(), s.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postmeter_core::extract::{SourceFile, SourceKind};

    fn report(text: &str) -> FileReport {
        let source = SourceFile::new(Utf8Path::new("post.txt"), SourceKind::Text, text.as_bytes());
        FileReport::new(source, Utc::now(), analysis::analyze(text))
    }

    #[test]
    fn no_gates_never_fail() {
        assert!(Gates::default().check(&report("Bad. Awful.")).is_empty());
    }

    #[test]
    fn sentiment_gate_fails_negative_text() {
        let gates = Gates {
            min_readability: None,
            min_sentiment: Some(40),
        };
        let failed = gates.check(&report("Bad. Bad. Terrible. Awful."));
        assert_eq!(failed.len(), 1);
        assert!(failed[0].contains("sentiment 0 is below minimum 40"));
        assert!(gates.check(&report("This is amazing! I love it.")).is_empty());
    }

    #[test]
    fn readability_gate_uses_display_score() {
        let gates = Gates {
            min_readability: Some(1),
            min_sentiment: None,
        };
        let failed = gates.check(&report(""));
        assert_eq!(failed.len(), 1);
        assert!(failed[0].contains("readability 0"));
    }
}
