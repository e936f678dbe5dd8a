//! Extract command: print the text postmeter would analyze.

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use postmeter_core::extract::SourceKind;

use super::load_text;

/// Arguments for the `extract` subcommand.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// File to extract text from.
    pub file: Utf8PathBuf,
}

#[derive(Serialize)]
struct Extracted<'a> {
    filename: &'a str,
    source_kind: SourceKind,
    characters: usize,
    text: &'a str,
}

/// Print the extracted text of a file.
#[instrument(name = "cmd_extract", skip_all, fields(file = %args.file))]
pub fn cmd_extract(
    args: ExtractArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing extract command");

    let (source, text) = load_text(&args.file, max_input_bytes)?;

    if global_json {
        let extracted = Extracted {
            filename: args.file.file_name().unwrap_or(args.file.as_str()),
            source_kind: source.kind,
            characters: text.chars().count(),
            text: &text,
        };
        println!("{}", serde_json::to_string_pretty(&extracted)?);
    } else {
        print!("{text}");
        if !text.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}
