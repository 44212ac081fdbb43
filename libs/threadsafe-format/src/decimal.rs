//! # Thread-Safe Decimal Format
//!
//! Facade with the decimal-specific settings: grouping size and exact
//! parsing on top of the common number settings.

use crate::deferred::DeferredFormat;
use crate::error::Result;
use crate::setting::{DecimalSetting, NumberSetting};
use decimal_format::{DecimalFormat, DecimalFormatSymbols, Locale, Number, RoundingMode};

/// A [`DecimalFormat`] that can be shared between threads, with every
/// decimal setting available.
///
/// ## Example
///
/// ```rust
/// use decimal_format::{DecimalFormatSymbols, Locale, Number};
/// use threadsafe_format::ThreadSafeDecimalFormat;
///
/// let symbols = DecimalFormatSymbols::for_locale(&Locale::GERMAN);
/// let format = ThreadSafeDecimalFormat::with_pattern_and_symbols("##0.00", symbols)?;
/// format.set_parse_big_decimal(true)?;
///
/// assert_eq!(format.format(10.149)?, "10,15");
/// assert_eq!(format.parse("10,15")?, Number::Decimal("10.15".parse().unwrap()));
/// # Ok::<(), threadsafe_format::Error>(())
/// ```
#[derive(Debug)]
pub struct ThreadSafeDecimalFormat {
    inner: DeferredFormat<DecimalFormat, DecimalSetting>,
}

impl ThreadSafeDecimalFormat {
    /// Root-locale default format.
    pub fn new() -> Self {
        Self {
            inner: DeferredFormat::with_builder(DecimalFormat::new),
        }
    }

    /// Format for `pattern` with root-locale symbols. The pattern is checked
    /// immediately.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(Self::prototype(DecimalFormat::with_pattern(pattern)?))
    }

    /// Number format of `locale`.
    pub fn with_locale(locale: &Locale) -> Result<Self> {
        Ok(Self::prototype(DecimalFormat::for_locale(locale)?))
    }

    /// Format for `pattern` with explicit symbols.
    pub fn with_pattern_and_symbols(pattern: &str, symbols: DecimalFormatSymbols) -> Result<Self> {
        Ok(Self::prototype(DecimalFormat::with_symbols(pattern, symbols)?))
    }

    fn prototype(format: DecimalFormat) -> Self {
        Self {
            inner: DeferredFormat::from_prototype(format),
        }
    }

    pub fn set_rounding_mode(&self, mode: RoundingMode) -> Result<()> {
        self.record(NumberSetting::RoundingMode(mode))
    }

    pub fn set_minimum_integer_digits(&self, digits: usize) -> Result<()> {
        self.record(NumberSetting::MinimumIntegerDigits(digits))
    }

    pub fn set_maximum_integer_digits(&self, digits: usize) -> Result<()> {
        self.record(NumberSetting::MaximumIntegerDigits(digits))
    }

    pub fn set_minimum_fraction_digits(&self, digits: usize) -> Result<()> {
        self.record(NumberSetting::MinimumFractionDigits(digits))
    }

    pub fn set_maximum_fraction_digits(&self, digits: usize) -> Result<()> {
        self.record(NumberSetting::MaximumFractionDigits(digits))
    }

    pub fn set_grouping_used(&self, used: bool) -> Result<()> {
        self.record(NumberSetting::GroupingUsed(used))
    }

    /// Digits per group; zero turns grouping output off.
    pub fn set_grouping_size(&self, size: u8) -> Result<()> {
        self.record(DecimalSetting::GroupingSize(size))
    }

    /// When set, `parse` returns [`Number::Decimal`] with the parsed scale.
    pub fn set_parse_big_decimal(&self, exact: bool) -> Result<()> {
        self.record(DecimalSetting::ParseBigDecimal(exact))
    }

    fn record(&self, setting: impl Into<DecimalSetting>) -> Result<()> {
        self.inner.record(setting.into())
    }

    /// Formats `value`; locks the configuration.
    pub fn format(&self, value: impl Into<Number>) -> Result<String> {
        self.inner.format(&value.into())
    }

    /// Parses the whole of `text`; locks the configuration.
    pub fn parse(&self, text: &str) -> Result<Number> {
        self.inner.parse(text)
    }

    pub fn is_locked(&self) -> bool {
        self.inner.is_locked()
    }

    /// Settings recorded so far, oldest first.
    pub fn pending(&self) -> Vec<DecimalSetting> {
        self.inner.pending()
    }

    /// Copy of this thread's fully configured engine; locks the
    /// configuration.
    pub fn configured_engine(&self) -> DecimalFormat {
        self.inner.configured_engine()
    }
}

impl Default for ThreadSafeDecimalFormat {
    fn default() -> Self {
        Self::new()
    }
}
