//! # Decimal Format
//!
//! Pattern-driven formatting and parsing of decimal numbers.
//!
//! ## Architecture
//!
//! ```text
//! pattern text → pattern::compile → DecimalFormat ← DecimalFormatSymbols (Locale)
//!                                        │
//!                     Number ──format──▶ String ──parse──▶ Number
//! ```
//!
//! A [`DecimalFormat`] is mutable and reuses an internal digit buffer, so it
//! is `Send` but must be used by one thread at a time. The `threadsafe-format`
//! crate wraps it for shared use.
//!
//! ## Usage
//!
//! ```rust
//! use decimal_format::{DecimalFormat, Locale, Number, RoundingMode};
//!
//! let mut format = DecimalFormat::currency_for_locale(&Locale::GERMANY)?;
//! format.set_rounding_mode(RoundingMode::HalfUp);
//! assert_eq!(format.format(&Number::from(1234.565))?, "1.234,57\u{a0}\u{20ac}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod digits;
pub mod error;
mod format;
pub mod locale;
pub mod number;
mod pattern;
pub mod rounding;
pub mod symbols;

pub use error::{FormatError, ParseError, ParseErrorKind, PatternError};
pub use format::DecimalFormat;
pub use locale::Locale;
pub use number::{Decimal, DecimalParseError, Number};
pub use rounding::RoundingMode;
pub use symbols::DecimalFormatSymbols;
