//! Readability command: Flesch Reading Ease scoring.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use postmeter_core::readability::{self, ReadabilityReport};

use super::{load_text, paint_score};

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,
}

/// Score readability of a file using Flesch Reading Ease.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing readability command");

    let (_source, text) = load_text(&args.file, max_input_bytes)?;
    let report = readability::score_readability(&text);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_readability(&report);
    }

    Ok(())
}

/// Print a one-line readability summary.
pub(crate) fn print_readability(report: &ReadabilityReport) {
    println!(
        "  {} {} ({}), {} sentences, {} words, {} syllables",
        "Readability:".cyan(),
        paint_score(report.score, 60, 30),
        report.grade,
        report.sentences,
        report.words,
        report.syllables,
    );
}
