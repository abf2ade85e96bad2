//! errors.rs - Custom error types for the jsqueeze-core library.
//!
//! This module defines a structured error enum for the library, so callers can
//! tell a malformed source file apart from a broken cache or config.
//!
//! License: MIT OR APACHE 2.0

use jsqueeze_lexer::MinifyError;
use thiserror::Error;

/// This enum represents all possible error types in the `jsqueeze-core` library.
///
/// `#[non_exhaustive]` leaves room for new variants without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum JsqueezeError {
    #[error("Minification failed: {0}")]
    Minify(#[from] MinifyError),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to (de)serialize cache metadata: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}

impl JsqueezeError {
    /// Returns the lexer failure when the source itself was malformed.
    pub fn as_minify_error(&self) -> Option<&MinifyError> {
        match self {
            JsqueezeError::Minify(err) => Some(err),
            _ => None,
        }
    }
}
