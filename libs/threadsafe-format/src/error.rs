//! # Errors
//!
//! Error type returned by the thread-safe facades.
//!
//! ## Error Policy
//!
//! - Configuration after first use is rejected, never ignored
//! - Engine errors are passed through unchanged

use decimal_format::{FormatError, ParseError, PatternError};
use thiserror::Error;

/// Errors raised by [`ThreadSafeNumberFormat`](crate::ThreadSafeNumberFormat)
/// and [`ThreadSafeDecimalFormat`](crate::ThreadSafeDecimalFormat).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A setter was called after the first `format` or `parse`.
    #[error("configuration is locked: the format has already been used")]
    ConfigurationLocked,

    /// The engine could not render the value.
    #[error("format failed: {0}")]
    Format(#[from] FormatError),

    /// The text is not a number in the configured format.
    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),

    /// The construction pattern is invalid.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] PatternError),
}

/// Result alias for facade operations.
pub type Result<T> = std::result::Result<T, Error>;
