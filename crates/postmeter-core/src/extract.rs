//! Source classification and text extraction.
//!
//! The analysis engine only ever sees decoded text. This module decides what
//! kind of source a file is from its MIME type and name, and decodes the
//! kinds it can. PDF and image decoding are left to external tools: those
//! kinds are recognised but report [`ExtractionError::NoDecoder`].

use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ExtractionError, ExtractionResult};

/// MIME type reported for unknown extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// What a source file contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A PDF document.
    Pdf,
    /// A raster image that needs OCR.
    Image,
    /// Plain text.
    Text,
}

impl SourceKind {
    /// Classify a source by MIME type, falling back to the file name.
    ///
    /// Returns `None` for unsupported sources.
    pub fn classify(mime: &str, file_name: &str) -> Option<Self> {
        if mime == "application/pdf" {
            Some(Self::Pdf)
        } else if mime.starts_with("image/") {
            Some(Self::Image)
        } else if mime.contains("text") || file_name.ends_with(".txt") {
            Some(Self::Text)
        } else {
            None
        }
    }

    /// Returns the kind as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Image => "image",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guess a MIME type from a path's extension.
pub fn mime_from_path(path: &Utf8Path) -> &'static str {
    let ext = path.extension().map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        Some("tif" | "tiff") => "image/tiff",
        Some("txt" | "text" | "log") => "text/plain",
        Some("md" | "markdown") => "text/markdown",
        Some("csv") => "text/csv",
        Some("html" | "htm") => "text/html",
        _ => OCTET_STREAM,
    }
}

/// Identity of a loaded source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Name or path the file was loaded from.
    pub filename: String,
    /// Classified kind.
    pub kind: SourceKind,
    /// MIME type guessed from the extension.
    pub mime: &'static str,
    /// Size of the raw file in bytes.
    pub size_bytes: u64,
}

impl SourceFile {
    /// Describe a file from its path and raw bytes.
    pub fn new(path: &Utf8Path, kind: SourceKind, bytes: &[u8]) -> Self {
        Self {
            filename: path.to_string(),
            kind,
            mime: mime_from_path(path),
            size_bytes: bytes.len() as u64,
        }
    }
}

/// Turns raw file bytes into text.
pub trait TextExtractor {
    /// Extract the text of a source.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::UnsupportedType`] when the source cannot be
    /// classified, and an extractor-specific error when decoding fails.
    fn extract_text(&self, bytes: &[u8], mime: &str, file_name: &str) -> ExtractionResult<String>;
}

/// Extractor for plain text sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    #[tracing::instrument(skip(self, bytes), fields(bytes = bytes.len()))]
    fn extract_text(&self, bytes: &[u8], mime: &str, file_name: &str) -> ExtractionResult<String> {
        let kind = SourceKind::classify(mime, file_name).ok_or_else(|| {
            ExtractionError::UnsupportedType {
                mime: mime.to_string(),
            }
        })?;

        match kind {
            SourceKind::Text => {
                let text = std::str::from_utf8(bytes)?;
                let text = text.strip_prefix('\u{feff}').unwrap_or(text);
                tracing::debug!(text_len = text.len(), "text source decoded");
                Ok(text.to_string())
            }
            SourceKind::Pdf | SourceKind::Image => Err(ExtractionError::NoDecoder { kind }),
        }
    }
}

/// Read and extract a file with the given extractor.
///
/// The MIME type is guessed from the file extension.
pub fn extract_file(
    extractor: &impl TextExtractor,
    path: &Utf8Path,
    bytes: &[u8],
) -> ExtractionResult<(SourceKind, String)> {
    let mime = mime_from_path(path);
    let file_name = path.file_name().unwrap_or(path.as_str());
    let kind = SourceKind::classify(mime, file_name).ok_or_else(|| {
        ExtractionError::UnsupportedType {
            mime: mime.to_string(),
        }
    })?;
    let text = extractor.extract_text(bytes, mime, file_name)?;
    Ok((kind, text))
}
