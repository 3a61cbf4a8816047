//! Error types for the line matcher.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GrepError>;

/// Errors surfaced by the matcher.
///
/// Malformed patterns are not errors: an unmatched `(` or `[`, a trailing
/// backslash or an unknown escape letter only make the affected match attempt
/// fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrepError {
    #[error("invalid pattern: pattern must not be empty")]
    InvalidPattern,
}
