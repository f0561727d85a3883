//! Error types for hilite

use thiserror::Error;

/// Result type alias for highlighting operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighting error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid pattern for category `{category}`: {source}")]
    Pattern {
        category: String,
        #[source]
        source: regex::Error,
    },

    #[error("Category `{0}` has no style")]
    MissingStyle(String),

    #[error("Range {start}..{end} is outside the buffer (length {len})")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("Position {line}:{column} is outside the buffer")]
    InvalidPosition { line: usize, column: usize },

    #[error("{0}")]
    Message(String),
}
