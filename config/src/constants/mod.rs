//! Centralized configuration values shared across the formatting workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PATTERN DEFAULTS
// =============================================================================

/// Pattern used by formatters constructed without an explicit pattern.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_NUMBER_PATTERN;
/// assert!(DEFAULT_NUMBER_PATTERN.contains(','));
/// ```
pub const DEFAULT_NUMBER_PATTERN: &str = "#,##0.###";

/// Number of integer digits between grouping separators in the default
/// pattern.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_GROUPING_SIZE;
/// assert_eq!(DEFAULT_GROUPING_SIZE, 3);
/// ```
pub const DEFAULT_GROUPING_SIZE: u8 = 3;

/// Maximum number of fraction digits rendered by the default pattern.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MAXIMUM_FRACTION_DIGITS;
/// assert_eq!(DEFAULT_MAXIMUM_FRACTION_DIGITS, 3);
/// ```
pub const DEFAULT_MAXIMUM_FRACTION_DIGITS: usize = 3;

// =============================================================================
// LIMITS
// =============================================================================

/// Upper bound for integer digits. Large enough for the integer part of any
/// finite `f64`.
///
/// # Examples
/// ```
/// use config::constants::MAXIMUM_INTEGER_DIGITS;
/// assert!(f64::MAX.log10() < MAXIMUM_INTEGER_DIGITS as f64);
/// ```
pub const MAXIMUM_INTEGER_DIGITS: usize = 309;

/// Upper bound for fraction digits. Large enough for the smallest subnormal
/// `f64`.
///
/// # Examples
/// ```
/// use config::constants::MAXIMUM_FRACTION_DIGITS;
/// assert!(MAXIMUM_FRACTION_DIGITS > 324);
/// ```
pub const MAXIMUM_FRACTION_DIGITS: usize = 340;

/// Largest grouping size a pattern may declare.
///
/// # Examples
/// ```
/// use config::constants::MAXIMUM_GROUPING_SIZE;
/// assert_eq!(MAXIMUM_GROUPING_SIZE, u8::MAX as usize);
/// ```
pub const MAXIMUM_GROUPING_SIZE: usize = u8::MAX as usize;

// =============================================================================
// DIGIT BOUNDS
// =============================================================================

/// Validated minimum/maximum digit counts for the integer and fraction parts
/// of a formatted number.
///
/// # Examples
/// ```
/// use config::constants::DigitBounds;
/// let bounds = DigitBounds::default();
/// assert_eq!(bounds.min_integer, 1);
/// assert_eq!(bounds.max_fraction, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitBounds {
    /// Integer digits always rendered, zero-padded on the left.
    pub min_integer: usize,
    /// Integer digits kept; higher-order digits are dropped.
    pub max_integer: usize,
    /// Fraction digits always rendered, zero-padded on the right.
    pub min_fraction: usize,
    /// Fraction digits kept after rounding.
    pub max_fraction: usize,
}

impl DigitBounds {
    /// Builds bounds enforcing `min <= max` and the global limits.
    ///
    /// # Examples
    /// ```
    /// use config::constants::DigitBounds;
    /// let bounds = DigitBounds::new(1, 10, 2, 2).expect("valid bounds");
    /// assert_eq!(bounds.min_fraction, 2);
    /// assert!(DigitBounds::new(3, 2, 0, 0).is_err());
    /// ```
    pub fn new(
        min_integer: usize,
        max_integer: usize,
        min_fraction: usize,
        max_fraction: usize,
    ) -> Result<Self, ConfigError> {
        if max_integer > MAXIMUM_INTEGER_DIGITS {
            return Err(ConfigError::IntegerDigitsOutOfRange(max_integer));
        }
        if max_fraction > MAXIMUM_FRACTION_DIGITS {
            return Err(ConfigError::FractionDigitsOutOfRange(max_fraction));
        }
        if min_integer > max_integer {
            return Err(ConfigError::InvertedIntegerBounds {
                min: min_integer,
                max: max_integer,
            });
        }
        if min_fraction > max_fraction {
            return Err(ConfigError::InvertedFractionBounds {
                min: min_fraction,
                max: max_fraction,
            });
        }
        Ok(Self {
            min_integer,
            max_integer,
            min_fraction,
            max_fraction,
        })
    }

    /// Returns bounds with a new integer minimum, clamped to the limit. The
    /// maximum is raised when it would fall below the new minimum.
    ///
    /// # Examples
    /// ```
    /// use config::constants::DigitBounds;
    /// let bounds = DigitBounds::new(1, 2, 0, 0).unwrap().with_min_integer(4);
    /// assert_eq!((bounds.min_integer, bounds.max_integer), (4, 4));
    /// ```
    pub fn with_min_integer(mut self, value: usize) -> Self {
        self.min_integer = value.min(MAXIMUM_INTEGER_DIGITS);
        if self.min_integer > self.max_integer {
            self.max_integer = self.min_integer;
        }
        self
    }

    /// Returns bounds with a new integer maximum, clamped to the limit. The
    /// minimum is lowered when it would exceed the new maximum.
    pub fn with_max_integer(mut self, value: usize) -> Self {
        self.max_integer = value.min(MAXIMUM_INTEGER_DIGITS);
        if self.min_integer > self.max_integer {
            self.min_integer = self.max_integer;
        }
        self
    }

    /// Returns bounds with a new fraction minimum, clamped to the limit.
    pub fn with_min_fraction(mut self, value: usize) -> Self {
        self.min_fraction = value.min(MAXIMUM_FRACTION_DIGITS);
        if self.min_fraction > self.max_fraction {
            self.max_fraction = self.min_fraction;
        }
        self
    }

    /// Returns bounds with a new fraction maximum, clamped to the limit.
    pub fn with_max_fraction(mut self, value: usize) -> Self {
        self.max_fraction = value.min(MAXIMUM_FRACTION_DIGITS);
        if self.min_fraction > self.max_fraction {
            self.min_fraction = self.max_fraction;
        }
        self
    }
}

impl Default for DigitBounds {
    fn default() -> Self {
        Self {
            min_integer: 1,
            max_integer: MAXIMUM_INTEGER_DIGITS,
            min_fraction: 0,
            max_fraction: DEFAULT_MAXIMUM_FRACTION_DIGITS,
        }
    }
}

/// Error returned when invalid digit bounds are provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the integer maximum exceeds [`MAXIMUM_INTEGER_DIGITS`].
    IntegerDigitsOutOfRange(usize),
    /// Raised when the fraction maximum exceeds [`MAXIMUM_FRACTION_DIGITS`].
    FractionDigitsOutOfRange(usize),
    /// Raised when the integer minimum is larger than the maximum.
    InvertedIntegerBounds { min: usize, max: usize },
    /// Raised when the fraction minimum is larger than the maximum.
    InvertedFractionBounds { min: usize, max: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IntegerDigitsOutOfRange(value) => {
                write!(f, "integer digits must be <= {MAXIMUM_INTEGER_DIGITS}: {value}")
            }
            ConfigError::FractionDigitsOutOfRange(value) => {
                write!(f, "fraction digits must be <= {MAXIMUM_FRACTION_DIGITS}: {value}")
            }
            ConfigError::InvertedIntegerBounds { min, max } => {
                write!(f, "minimum integer digits {min} exceed maximum {max}")
            }
            ConfigError::InvertedFractionBounds { min, max } => {
                write!(f, "minimum fraction digits {min} exceed maximum {max}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
