//! Error types for hint parsing.

use thiserror::Error;

use crate::hint::HintType;

/// Errors that can occur while parsing a hint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HintError {
    /// The hint text is malformed: its type name is unknown, or an opening
    /// parenthesis has no closing one.
    #[error("invalid hint: '{0}'")]
    InvalidHint(String),

    /// The hint is well-formed but its type is disabled by the parser configuration.
    #[error("hint type {kind} is disabled: '{input}'")]
    Disabled {
        /// The disabled hint type.
        kind: HintType,
        /// The original hint text.
        input: String,
    },
}

impl HintError {
    /// Creates an invalid hint error for the given input.
    #[must_use]
    pub fn invalid(input: impl Into<String>) -> Self {
        Self::InvalidHint(input.into())
    }

    /// Returns the original hint text that caused the error.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidHint(input) | Self::Disabled { input, .. } => input,
        }
    }
}

/// Result type for hint operations.
pub type HintResult<T> = Result<T, HintError>;
