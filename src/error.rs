// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for the language registry.

use std::path::PathBuf;

/// Errors raised by record construction, registry validation and table parsing.
///
/// Lookups never produce an error for an unknown or malformed code; they
/// return `None` instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required argument was empty or blank.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        argument: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A code field does not have its fixed length.
    #[error("language `{part3}` has invalid {field} code `{code}` (expected {expected} characters)")]
    InvalidCode {
        part3: String,
        field: &'static str,
        code: String,
        expected: usize,
    },

    /// Two records share the same ISO 639-3 identifier.
    #[error("duplicate ISO 639-3 code `{0}`")]
    DuplicatePart3(String),

    /// A line of an upstream code table could not be parsed.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Reading a code table from disk failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_argument(argument: &'static str, reason: &'static str) -> Self {
        Error::InvalidArgument { argument, reason }
    }

    /// True for [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}
