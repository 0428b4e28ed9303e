//! Error types for context resolution.

use thiserror::Error;

/// Errors that can occur while parsing or configuring context resolution.
///
/// The public query operations of [`crate::ContextAnalyzer`] never return
/// these; they degrade to an empty or invalid result instead.
#[derive(Error, Debug)]
pub enum ContextError {
    /// The grammar could not produce any tree for the source
    #[error("Failed to parse {language} source: {message}")]
    Parse { language: String, message: String },

    /// Language not supported
    #[error("Language '{language}' is not supported")]
    UnsupportedLanguage { language: String },

    /// Line interval is not a 1-based, ordered pair
    #[error("Invalid line interval {start}..={end}: lines are 1-based and start must not exceed end")]
    InvalidInterval { start: usize, end: usize },

    /// Configuration could not be read or is malformed
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for context operations.
pub type ContextResult<T> = Result<T, ContextError>;
