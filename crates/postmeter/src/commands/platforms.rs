//! Platforms command: suitability per social platform.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use postmeter_core::analysis::platforms::{self, Platform, PlatformReport};
use postmeter_core::text;

use super::{load_text, paint_score};

/// Arguments for the `platforms` subcommand.
#[derive(Args, Debug)]
pub struct PlatformsArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Only show these platforms (repeatable). Omit for all.
    #[arg(long = "platform", value_enum)]
    pub platforms: Vec<Platform>,

    /// Show the fitted preview for each platform.
    #[arg(long)]
    pub preview: bool,
}

/// Keep only the selected platforms; an empty or missing selection keeps all.
pub(crate) fn select(reports: Vec<PlatformReport>, selected: Option<&[Platform]>) -> Vec<PlatformReport> {
    match selected {
        Some(wanted) if !wanted.is_empty() => reports
            .into_iter()
            .filter(|r| wanted.contains(&r.platform))
            .collect(),
        _ => reports,
    }
}

/// Score a file's suitability for each platform.
#[instrument(name = "cmd_platforms", skip_all, fields(file = %args.file))]
pub fn cmd_platforms(
    args: PlatformsArgs,
    global_json: bool,
    config_platforms: Option<&[Platform]>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, platforms = ?args.platforms, "executing platforms command");

    let (_source, text) = load_text(&args.file, max_input_bytes)?;
    let stats = text::lexical_stats(&text);
    let selected = if args.platforms.is_empty() {
        config_platforms
    } else {
        Some(args.platforms.as_slice())
    };
    let reports = select(platforms::evaluate_platforms(&text, &stats), selected);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_platforms(&reports, args.preview);
    }

    Ok(())
}

/// Print one line per platform, with an optional preview.
pub(crate) fn print_platforms(reports: &[PlatformReport], show_preview: bool) {
    println!("  {}", "Platforms:".cyan());
    for r in reports {
        let length = format!("{}/{} chars", r.characters, r.max_chars);
        let length = if r.truncated {
            length.red().to_string()
        } else {
            length.dimmed().to_string()
        };
        println!(
            "    {:<10} {:>3}  {}  {}",
            r.platform.as_str().bold(),
            paint_score(i32::from(r.suitability), 80, 60),
            length,
            r.tip,
        );
        if show_preview {
            println!("      {}", r.preview.dimmed());
        }
    }
}
