//! Error types for postmeter-core.
//!
//! The analysis engine itself is total over string input and has no error
//! type. Errors only arise while loading configuration or turning a source
//! file into text.

use thiserror::Error;

use crate::extract::SourceKind;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while extracting text from a source.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The MIME type is not one of the supported source kinds.
    #[error("Unsupported file type: {mime}")]
    UnsupportedType {
        /// The MIME type that was offered.
        mime: String,
    },

    /// The source kind is recognised but no decoder is available for it.
    #[error("no {kind} decoder available; convert the document to plain text first")]
    NoDecoder {
        /// The recognised source kind.
        kind: SourceKind,
    },

    /// A text source was not valid UTF-8.
    #[error("text source is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Result type alias using [`ExtractionError`].
pub type ExtractionResult<T> = Result<T, ExtractionError>;
