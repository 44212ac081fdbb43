//! # Decimal Format
//!
//! The mutable formatter. Every setter changes the instance in place and
//! `format`/`parse` reuse an internal digit buffer, so one instance serves one
//! thread at a time.
//!
//! ## Example
//!
//! ```rust
//! use decimal_format::{DecimalFormat, DecimalFormatSymbols, Locale, Number};
//!
//! let symbols = DecimalFormatSymbols::for_locale(&Locale::GERMAN);
//! let mut format = DecimalFormat::with_symbols("##0.00", symbols).unwrap();
//! assert_eq!(format.format(&Number::from(10.149)).unwrap(), "10,15");
//! assert_eq!(format.parse("10,15").unwrap(), Number::Float(10.15));
//! ```

mod parse;

use crate::digits::DigitList;
use crate::error::{FormatError, PatternError};
use crate::locale::{self, Locale};
use crate::number::Number;
use crate::pattern::{self, Affix, AffixToken, CompiledPattern, PatternView};
use crate::rounding::RoundingMode;
use crate::symbols::DecimalFormatSymbols;
use config::constants::{DigitBounds, DEFAULT_GROUPING_SIZE};

/// Pattern-driven number formatter and parser.
#[derive(Debug, Clone)]
pub struct DecimalFormat {
    symbols: DecimalFormatSymbols,
    positive_prefix: Affix,
    positive_suffix: Affix,
    negative_prefix: Affix,
    negative_suffix: Affix,
    multiplier_exponent: u32,
    bounds: DigitBounds,
    grouping_size: u8,
    grouping_used: bool,
    decimal_separator_always_shown: bool,
    currency: bool,
    rounding_mode: RoundingMode,
    parse_big_decimal: bool,
    /// Scratch buffer shared by format and parse.
    digit_list: DigitList,
}

impl DecimalFormat {
    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Root-locale formatter with the pattern `#,##0.###`.
    ///
    /// ```rust
    /// use decimal_format::DecimalFormat;
    /// let mut format = DecimalFormat::new();
    /// assert_eq!(format.format(&1234.5678.into()).unwrap(), "1,234.568");
    /// ```
    pub fn new() -> Self {
        Self {
            symbols: DecimalFormatSymbols::default(),
            positive_prefix: Affix::default(),
            positive_suffix: Affix::default(),
            negative_prefix: Affix(vec![AffixToken::Minus]),
            negative_suffix: Affix::default(),
            multiplier_exponent: 0,
            bounds: DigitBounds::default(),
            grouping_size: DEFAULT_GROUPING_SIZE,
            grouping_used: true,
            decimal_separator_always_shown: false,
            currency: false,
            rounding_mode: RoundingMode::default(),
            parse_big_decimal: false,
            digit_list: DigitList::default(),
        }
    }

    /// Formatter for `pattern` with root-locale symbols.
    pub fn with_pattern(pattern: &str) -> Result<Self, PatternError> {
        Self::with_symbols(pattern, DecimalFormatSymbols::default())
    }

    /// Formatter for `pattern` with explicit symbols.
    pub fn with_symbols(pattern: &str, symbols: DecimalFormatSymbols) -> Result<Self, PatternError> {
        let mut format = Self::new();
        format.symbols = symbols;
        format.apply_pattern(pattern)?;
        Ok(format)
    }

    /// General-purpose number formatter of `locale`.
    pub fn for_locale(locale: &Locale) -> Result<Self, PatternError> {
        let data = locale::lookup(locale);
        Self::with_symbols(data.number_pattern, DecimalFormatSymbols::for_locale(locale))
    }

    /// Currency formatter of `locale`.
    ///
    /// ```rust
    /// use decimal_format::{DecimalFormat, Locale};
    /// let mut format = DecimalFormat::currency_for_locale(&Locale::US).unwrap();
    /// assert_eq!(format.format(&1234.5.into()).unwrap(), "$1,234.50");
    /// ```
    pub fn currency_for_locale(locale: &Locale) -> Result<Self, PatternError> {
        let data = locale::lookup(locale);
        Self::with_symbols(data.currency_pattern, DecimalFormatSymbols::for_locale(locale))
    }

    /// Percent formatter of `locale`.
    ///
    /// ```rust
    /// use decimal_format::{DecimalFormat, Locale};
    /// let mut format = DecimalFormat::percent_for_locale(&Locale::ENGLISH).unwrap();
    /// assert_eq!(format.format(&0.256.into()).unwrap(), "26%");
    /// ```
    pub fn percent_for_locale(locale: &Locale) -> Result<Self, PatternError> {
        let data = locale::lookup(locale);
        Self::with_symbols(data.percent_pattern, DecimalFormatSymbols::for_locale(locale))
    }

    /// Replaces affixes, digit bounds and grouping with those of `pattern`.
    /// Symbols, rounding mode and parse mode are kept. On error the formatter
    /// is unchanged.
    pub fn apply_pattern(&mut self, pattern: &str) -> Result<(), PatternError> {
        let CompiledPattern {
            positive_prefix,
            positive_suffix,
            negative_prefix,
            negative_suffix,
            multiplier_exponent,
            bounds,
            grouping_size,
            grouping_used,
            decimal_separator_always_shown,
            currency,
        } = pattern::compile(pattern)?;
        self.positive_prefix = positive_prefix;
        self.positive_suffix = positive_suffix;
        self.negative_prefix = negative_prefix;
        self.negative_suffix = negative_suffix;
        self.multiplier_exponent = multiplier_exponent;
        self.bounds = bounds;
        self.grouping_size = grouping_size;
        self.grouping_used = grouping_used;
        self.decimal_separator_always_shown = decimal_separator_always_shown;
        self.currency = currency;
        Ok(())
    }

    /// Renders the current configuration as a pattern.
    ///
    /// ```rust
    /// use decimal_format::DecimalFormat;
    /// let mut format = DecimalFormat::with_pattern("0.00").unwrap();
    /// format.set_maximum_fraction_digits(4);
    /// assert_eq!(format.to_pattern(), "#0.00##");
    /// ```
    pub fn to_pattern(&self) -> String {
        PatternView {
            positive_prefix: &self.positive_prefix,
            positive_suffix: &self.positive_suffix,
            negative_prefix: &self.negative_prefix,
            negative_suffix: &self.negative_suffix,
            bounds: self.bounds,
            grouping_size: self.grouping_size,
            grouping_used: self.grouping_used,
            decimal_separator_always_shown: self.decimal_separator_always_shown,
        }
        .render()
    }

    // =========================================================================
    // SETTERS
    // =========================================================================

    pub fn set_rounding_mode(&mut self, mode: RoundingMode) {
        self.rounding_mode = mode;
    }

    /// Clamped to the integer digit limit; raises the maximum if needed.
    pub fn set_minimum_integer_digits(&mut self, digits: usize) {
        self.bounds = self.bounds.with_min_integer(digits);
    }

    /// Clamped to the integer digit limit; lowers the minimum if needed.
    pub fn set_maximum_integer_digits(&mut self, digits: usize) {
        self.bounds = self.bounds.with_max_integer(digits);
    }

    /// Clamped to the fraction digit limit; raises the maximum if needed.
    pub fn set_minimum_fraction_digits(&mut self, digits: usize) {
        self.bounds = self.bounds.with_min_fraction(digits);
    }

    /// Clamped to the fraction digit limit; lowers the minimum if needed.
    pub fn set_maximum_fraction_digits(&mut self, digits: usize) {
        self.bounds = self.bounds.with_max_fraction(digits);
    }

    pub fn set_grouping_used(&mut self, used: bool) {
        self.grouping_used = used;
    }

    /// Number of integer digits per group. Zero disables grouping output even
    /// when grouping is used.
    pub fn set_grouping_size(&mut self, size: u8) {
        self.grouping_size = size;
    }

    /// When set, `parse` returns [`Number::Decimal`] with the parsed scale.
    pub fn set_parse_big_decimal(&mut self, exact: bool) {
        self.parse_big_decimal = exact;
    }

    pub fn set_decimal_separator_always_shown(&mut self, shown: bool) {
        self.decimal_separator_always_shown = shown;
    }

    pub fn set_symbols(&mut self, symbols: DecimalFormatSymbols) {
        self.symbols = symbols;
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }

    pub fn minimum_integer_digits(&self) -> usize {
        self.bounds.min_integer
    }

    pub fn maximum_integer_digits(&self) -> usize {
        self.bounds.max_integer
    }

    pub fn minimum_fraction_digits(&self) -> usize {
        self.bounds.min_fraction
    }

    pub fn maximum_fraction_digits(&self) -> usize {
        self.bounds.max_fraction
    }

    pub fn digit_bounds(&self) -> DigitBounds {
        self.bounds
    }

    pub fn is_grouping_used(&self) -> bool {
        self.grouping_used
    }

    pub fn grouping_size(&self) -> u8 {
        self.grouping_size
    }

    pub fn is_parse_big_decimal(&self) -> bool {
        self.parse_big_decimal
    }

    pub fn is_decimal_separator_always_shown(&self) -> bool {
        self.decimal_separator_always_shown
    }

    pub fn symbols(&self) -> &DecimalFormatSymbols {
        &self.symbols
    }

    // =========================================================================
    // FORMAT
    // =========================================================================

    /// Formats `value`.
    ///
    /// NaN renders as the NaN symbol without affixes. Values that round to
    /// zero render without a minus sign.
    ///
    /// ## Errors
    ///
    /// [`FormatError::RoundingNecessary`] when the rounding mode is
    /// `Unnecessary` and `value` has more fraction digits than allowed.
    pub fn format(&mut self, value: &Number) -> Result<String, FormatError> {
        let negative = match value {
            Number::Float(v) if v.is_nan() => return Ok(self.symbols.nan.clone()),
            Number::Float(v) if v.is_infinite() => {
                let mut out = String::new();
                self.push_prefix(&mut out, v.is_sign_negative());
                out.push_str(&self.symbols.infinity);
                self.push_suffix(&mut out, v.is_sign_negative());
                return Ok(out);
            }
            Number::Float(v) => {
                self.digit_list.set_f64(*v);
                v.is_sign_negative()
            }
            Number::Integer(v) => {
                self.digit_list.set_u64(v.unsigned_abs());
                *v < 0
            }
            Number::Decimal(v) => {
                self.digit_list.set_decimal(v.digits(), v.scale());
                v.is_negative()
            }
        };
        self.digit_list.shift(i64::from(self.multiplier_exponent));
        self.digit_list
            .round(self.bounds.max_fraction, self.rounding_mode, negative)?;
        let negative = negative && !self.digit_list.is_zero();

        let mut out = String::new();
        self.push_prefix(&mut out, negative);
        self.push_digits(&mut out);
        self.push_suffix(&mut out, negative);
        Ok(out)
    }

    fn push_prefix(&self, out: &mut String, negative: bool) {
        let affix = if negative { &self.negative_prefix } else { &self.positive_prefix };
        out.push_str(&affix.expand(&self.symbols));
    }

    fn push_suffix(&self, out: &mut String, negative: bool) {
        let affix = if negative { &self.negative_suffix } else { &self.positive_suffix };
        out.push_str(&affix.expand(&self.symbols));
    }

    fn decimal_separator(&self) -> char {
        if self.currency {
            self.symbols.monetary_decimal_separator
        } else {
            self.symbols.decimal_separator
        }
    }

    /// Writes the rounded digit list: integer part, then fraction.
    fn push_digits(&self, out: &mut String) {
        let digits = &self.digit_list.digits;
        let decimal_at = self.digit_list.decimal_at;
        let grouping = usize::from(self.grouping_size);

        let mut count = self.bounds.min_integer;
        let mut index = 0usize;
        if decimal_at > self.bounds.max_integer as i64 {
            // High-order digits beyond the maximum are dropped
            index = usize::try_from(decimal_at - self.bounds.max_integer as i64).unwrap_or(usize::MAX);
            count = self.bounds.max_integer;
        } else if decimal_at > count as i64 {
            count = decimal_at as usize;
        }

        let integer_start = out.len();
        for i in (0..count).rev() {
            if (i as i64) < decimal_at && index < digits.len() {
                out.push(self.symbols.digit_char(digits[index]));
                index += 1;
            } else {
                out.push(self.symbols.digit_char(0));
            }
            if self.grouping_used && i > 0 && grouping != 0 && i % grouping == 0 {
                out.push(self.symbols.grouping_separator);
            }
        }

        let fraction_present = self.bounds.min_fraction > 0 || index < digits.len();
        if !fraction_present && out.len() == integer_start {
            out.push(self.symbols.digit_char(0));
        }
        if self.decimal_separator_always_shown || fraction_present {
            out.push(self.decimal_separator());
        }

        for i in 0..self.bounds.max_fraction {
            if i >= self.bounds.min_fraction && index >= digits.len() {
                break;
            }
            // Leading fraction zeros of values below 0.1
            if -1 - (i as i64) > decimal_at - 1 {
                out.push(self.symbols.digit_char(0));
                continue;
            }
            if index < digits.len() {
                out.push(self.symbols.digit_char(digits[index]));
                index += 1;
            } else {
                out.push(self.symbols.digit_char(0));
            }
        }
    }
}

impl Default for DecimalFormat {
    fn default() -> Self {
        Self::new()
    }
}
