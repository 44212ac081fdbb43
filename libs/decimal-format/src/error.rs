//! # Errors
//!
//! Error types for pattern compilation, formatting and parsing.
//!
//! ## Error Policy
//!
//! - NO fallback formatting or silent defaulting
//! - Every failure is returned to the caller
//! - Parse errors carry the byte index where the input stopped matching
//!
//! ## Example
//!
//! ```rust
//! use decimal_format::{DecimalFormat, ParseErrorKind};
//!
//! let mut format = DecimalFormat::with_pattern("0.00").unwrap();
//! let error = format.parse("12x").unwrap_err();
//! assert_eq!(error.kind, ParseErrorKind::TrailingInput);
//! assert_eq!(error.index, 2);
//! ```

use config::constants::ConfigError;
use std::fmt;
use thiserror::Error;

// =============================================================================
// PATTERN ERROR
// =============================================================================

/// Errors raised while compiling a decimal pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A `0` followed a `#` in the fraction part, as in `"0.#0"`.
    #[error("unexpected '0' at byte {index}")]
    UnexpectedZero {
        /// Byte offset in the pattern.
        index: usize,
    },

    /// More than one decimal separator in one subpattern.
    #[error("multiple decimal separators at byte {index}")]
    MultipleDecimalSeparators {
        /// Byte offset of the second separator.
        index: usize,
    },

    /// A grouping separator appeared after the decimal separator.
    #[error("grouping separator in fraction at byte {index}")]
    GroupingInFraction {
        /// Byte offset in the pattern.
        index: usize,
    },

    /// A digit character appeared after the suffix started.
    #[error("unquoted special character '{found}' at byte {index}")]
    MisplacedSpecial {
        /// The offending character.
        found: char,
        /// Byte offset in the pattern.
        index: usize,
    },

    /// Exponent notation is not supported.
    #[error("exponent notation is not supported (byte {index})")]
    UnsupportedExponent {
        /// Byte offset of the `E`.
        index: usize,
    },

    /// A quote was opened and never closed.
    #[error("unterminated quote in pattern")]
    UnterminatedQuote,

    /// Both percent and per-mille appear in the pattern.
    #[error("pattern mixes percent and per-mille")]
    MixedMultipliers,

    /// A non-empty pattern without any `#` or `0`.
    #[error("pattern has no digit characters")]
    MissingDigits,

    /// Digit characters in an order the grammar does not allow.
    #[error("malformed pattern: {reason}")]
    Malformed {
        /// What was wrong.
        reason: &'static str,
    },

    /// Grouping size does not fit the supported range.
    #[error("grouping size {size} is larger than {max}", max = config::constants::MAXIMUM_GROUPING_SIZE)]
    GroupingTooLarge {
        /// Number of digits in the last group.
        size: usize,
    },

    /// Digit counts outside the supported limits.
    #[error(transparent)]
    Bounds(#[from] ConfigError),
}

// =============================================================================
// FORMAT ERROR
// =============================================================================

/// Errors raised while formatting a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The value needs rounding but the rounding mode is
    /// [`RoundingMode::Unnecessary`](crate::RoundingMode::Unnecessary).
    #[error("rounding needed to fit {max_fraction_digits} fraction digits with rounding mode UNNECESSARY")]
    RoundingNecessary {
        /// The formatter's maximum fraction digits at the time of the call.
        max_fraction_digits: usize,
    },
}

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with the byte index where matching stopped.
///
/// ## Example
///
/// ```rust
/// use decimal_format::{ParseError, ParseErrorKind};
///
/// let error = ParseError::new(ParseErrorKind::MissingDigits, 3);
/// assert_eq!(error.to_string(), "expected digits at byte 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Error kind.
    pub kind: ParseErrorKind,
    /// Byte offset into the parsed text.
    pub index: usize,
}

impl ParseError {
    /// Create a new parse error.
    pub const fn new(kind: ParseErrorKind, index: usize) -> Self {
        Self { kind, index }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.index)
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Nothing to parse.
    #[error("empty input")]
    Empty,

    /// Neither the positive nor the negative prefix matched.
    #[error("expected positive or negative prefix")]
    MissingPrefix,

    /// No digit where the number should start.
    #[error("expected digits")]
    MissingDigits,

    /// The suffix did not match, or both signs matched equally.
    #[error("expected positive or negative suffix")]
    MissingSuffix,

    /// Text remained after a complete number.
    #[error("unexpected trailing input")]
    TrailingInput,
}

// =============================================================================
// TESTS
// =============================================================================
