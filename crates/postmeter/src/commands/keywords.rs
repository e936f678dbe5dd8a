//! Keywords command.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use postmeter_core::analysis::keywords::{self, Keyword, MAX_KEYWORDS};

use super::load_text;

/// Keywords shown when neither `--limit` nor `keyword_limit` is set.
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Number of keywords to show (1-20).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=20))]
    pub limit: Option<u8>,
}

/// Resolve the display limit from the CLI flag and config, capped at the extraction limit.
pub(crate) fn display_limit(cli: Option<u8>, config: Option<usize>) -> usize {
    cli.map(usize::from)
        .or(config)
        .unwrap_or(DEFAULT_DISPLAY_LIMIT)
        .min(MAX_KEYWORDS)
}

/// List the most frequent keywords in a file.
#[instrument(name = "cmd_keywords", skip_all, fields(file = %args.file))]
pub fn cmd_keywords(
    args: KeywordsArgs,
    global_json: bool,
    config_limit: Option<usize>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, limit = ?args.limit, "executing keywords command");

    let (_source, text) = load_text(&args.file, max_input_bytes)?;
    let limit = display_limit(args.limit, config_limit);
    let mut ranked = keywords::extract_keywords(&text);
    ranked.truncate(limit);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else if ranked.is_empty() {
        println!("  {} none", "Keywords:".cyan());
    } else {
        print_keywords(&ranked);
    }

    Ok(())
}

/// Print keywords as a ranked list.
pub(crate) fn print_keywords(ranked: &[Keyword]) {
    println!("  {}", "Keywords:".cyan());
    for (rank, kw) in ranked.iter().enumerate() {
        println!(
            "    {:>2}. {:<20} {:>3}x  {}",
            rank + 1,
            kw.word.bold(),
            kw.count,
            format!("weight {:.2}", kw.weight).dimmed(),
        );
    }
}
