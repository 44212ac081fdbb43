//! # Thread-Safe Number Format
//!
//! General-purpose facade exposing the settings every number engine shares.

use crate::deferred::DeferredFormat;
use crate::error::Result;
use crate::setting::NumberSetting;
use decimal_format::{DecimalFormat, DecimalFormatSymbols, Locale, Number, RoundingMode};

/// A [`DecimalFormat`] that can be shared between threads.
///
/// Setters only record the change. The first `format` or `parse` on any
/// thread locks the configuration; from then on every setter returns
/// [`Error::ConfigurationLocked`](crate::Error::ConfigurationLocked).
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use threadsafe_format::ThreadSafeNumberFormat;
///
/// let format = Arc::new(ThreadSafeNumberFormat::with_pattern("#,##0.00")?);
/// format.set_grouping_used(false)?;
///
/// let worker = Arc::clone(&format);
/// let text = std::thread::spawn(move || worker.format(1234.5))
///     .join()
///     .unwrap()?;
/// assert_eq!(text, "1234.50");
/// assert!(format.set_grouping_used(true).is_err());
/// # Ok::<(), threadsafe_format::Error>(())
/// ```
#[derive(Debug)]
pub struct ThreadSafeNumberFormat {
    inner: DeferredFormat<DecimalFormat, NumberSetting>,
}

impl ThreadSafeNumberFormat {
    /// Root-locale default format.
    pub fn new() -> Self {
        Self {
            inner: DeferredFormat::with_builder(DecimalFormat::new),
        }
    }

    /// Format for `pattern` with root-locale symbols. The pattern is checked
    /// immediately.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(Self::from_format(DecimalFormat::with_pattern(pattern)?))
    }

    /// Number format of `locale`.
    pub fn with_locale(locale: &Locale) -> Result<Self> {
        Ok(Self::from_format(DecimalFormat::for_locale(locale)?))
    }

    /// Format for `pattern` with explicit symbols.
    pub fn with_pattern_and_symbols(pattern: &str, symbols: DecimalFormatSymbols) -> Result<Self> {
        Ok(Self::from_format(DecimalFormat::with_symbols(pattern, symbols)?))
    }

    /// Shares a prebuilt format; each thread works on its own copy.
    ///
    /// ```rust
    /// use decimal_format::{DecimalFormat, Locale};
    /// use threadsafe_format::ThreadSafeNumberFormat;
    ///
    /// let euro = DecimalFormat::currency_for_locale(&Locale::GERMANY)?;
    /// let format = ThreadSafeNumberFormat::from_format(euro);
    /// assert_eq!(format.format(2.5).unwrap(), "2,50\u{a0}\u{20ac}");
    /// # Ok::<(), decimal_format::PatternError>(())
    /// ```
    pub fn from_format(format: DecimalFormat) -> Self {
        Self {
            inner: DeferredFormat::from_prototype(format),
        }
    }

    pub fn set_rounding_mode(&self, mode: RoundingMode) -> Result<()> {
        self.inner.record(NumberSetting::RoundingMode(mode))
    }

    pub fn set_minimum_integer_digits(&self, digits: usize) -> Result<()> {
        self.inner.record(NumberSetting::MinimumIntegerDigits(digits))
    }

    pub fn set_maximum_integer_digits(&self, digits: usize) -> Result<()> {
        self.inner.record(NumberSetting::MaximumIntegerDigits(digits))
    }

    pub fn set_minimum_fraction_digits(&self, digits: usize) -> Result<()> {
        self.inner.record(NumberSetting::MinimumFractionDigits(digits))
    }

    pub fn set_maximum_fraction_digits(&self, digits: usize) -> Result<()> {
        self.inner.record(NumberSetting::MaximumFractionDigits(digits))
    }

    pub fn set_grouping_used(&self, used: bool) -> Result<()> {
        self.inner.record(NumberSetting::GroupingUsed(used))
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
    pub fn pending(&self) -> Vec<NumberSetting> {
        self.inner.pending()
    }

    /// Copy of this thread's fully configured engine; locks the
    /// configuration.
    pub fn configured_engine(&self) -> DecimalFormat {
        self.inner.configured_engine()
    }
}

impl Default for ThreadSafeNumberFormat {
    fn default() -> Self {
        Self::new()
    }
}
