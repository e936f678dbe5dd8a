//! Sentiment command.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use postmeter_core::analysis::sentiment::{self, SentimentLabel, SentimentReport};

use super::load_text;

/// Arguments for the `sentiment` subcommand.
#[derive(Args, Debug)]
pub struct SentimentArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,
}

/// Classify the sentiment of a file.
#[instrument(name = "cmd_sentiment", skip_all, fields(file = %args.file))]
pub fn cmd_sentiment(
    args: SentimentArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing sentiment command");

    let (_source, text) = load_text(&args.file, max_input_bytes)?;
    let report = sentiment::analyze_sentiment(&text);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_sentiment(&report);
    }

    Ok(())
}

/// Print a one-line sentiment summary.
pub(crate) fn print_sentiment(report: &SentimentReport) {
    let label = match report.label {
        SentimentLabel::Positive => report.label.green().to_string(),
        SentimentLabel::Neutral => report.label.yellow().to_string(),
        SentimentLabel::Negative => report.label.red().to_string(),
    };
    println!(
        "  {} {} ({}/100), {} positive, {} negative, {} neutral terms",
        "Sentiment:".cyan(),
        label,
        report.score,
        report.positive,
        report.negative,
        report.neutral,
    );
}
