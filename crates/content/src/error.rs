// ABOUTME: Error types for the bootstrapify content pipeline.
// ABOUTME: Provides BootstrapifyError with UnknownPass and InvalidUtf8 variants.

use std::str::Utf8Error;

use thiserror::Error;

/// Errors surfaced at the edges of the pipeline.
///
/// Rewriting markup never fails; these only come from selecting passes by
/// name or from handing the pipeline raw bytes.
#[derive(Debug, Error)]
pub enum BootstrapifyError {
    /// A pass name did not match any pipeline pass.
    #[error("unknown pass {0:?}: expected one of blockquote, heading, image, video")]
    UnknownPass(String),

    /// The content bytes were not UTF-8.
    #[error("content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

impl BootstrapifyError {
    /// Creates an UnknownPass error for the given name.
    pub fn unknown_pass(name: impl Into<String>) -> Self {
        BootstrapifyError::UnknownPass(name.into())
    }

    /// Returns true if this is an UnknownPass error.
    pub fn is_unknown_pass(&self) -> bool {
        matches!(self, BootstrapifyError::UnknownPass(_))
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, BootstrapifyError>;
