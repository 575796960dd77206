//! Error types for unet-highlight

use thiserror::Error;

/// Result type alias for highlighting operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighting error types
///
/// All variants are configuration-time errors: once a ruleset has
/// compiled, scanning itself never fails for any input.
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("rule '{rule}': invalid pattern: {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("No lexer registered under tag: {0}")]
    UnknownLexer(String),

    #[error("Unknown token type: {0}")]
    UnknownToken(String),

    #[error("Invalid lexer definition: {0}")]
    InvalidDefinition(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
