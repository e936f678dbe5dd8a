//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use owo_colors::OwoColorize;
use postmeter_core::extract::{PlainTextExtractor, SourceFile, extract_file};

pub mod analyze;
pub mod extract;
pub mod info;
pub mod keywords;
pub mod platforms;
pub mod readability;
pub mod sentiment;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
///
/// The size is checked from metadata before anything is read into memory.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<Vec<u8>> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

/// Read a file and extract its text.
pub fn load_text(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<(SourceFile, String)> {
    let bytes = read_input_file(path, max_bytes)?;
    let (kind, text) = extract_file(&PlainTextExtractor, path, &bytes)
        .with_context(|| format!("failed to extract text from {path}"))?;
    let source = SourceFile::new(path, kind, &bytes);
    tracing::debug!(
        %path,
        kind = kind.as_str(),
        mime = source.mime,
        size_bytes = source.size_bytes,
        text_len = text.len(),
        "input loaded"
    );
    Ok((source, text))
}

/// Color a 0-100 style score: green when high, yellow in the middle, red when low.
pub(crate) fn paint_score(score: i32, good: i32, fair: i32) -> String {
    if score >= good {
        score.green().to_string()
    } else if score >= fair {
        score.yellow().to_string()
    } else {
        score.red().to_string()
    }
}
