//! # Format Symbols
//!
//! The characters and strings a formatter substitutes for the pattern's
//! placeholders: separators, signs, currency and special values.

use crate::locale::{self, Locale};
use serde::{Deserialize, Serialize};

/// Localized symbols used by [`DecimalFormat`](crate::DecimalFormat).
///
/// ## Example
///
/// ```rust
/// use decimal_format::{DecimalFormatSymbols, Locale};
///
/// let german = DecimalFormatSymbols::for_locale(&Locale::GERMAN);
/// assert_eq!(german.decimal_separator, ',');
/// assert_eq!(german.grouping_separator, '.');
///
/// let custom = DecimalFormatSymbols::default()
///     .with_decimal_separator(',')
///     .with_grouping_separator('\'');
/// assert_eq!(custom.grouping_separator, '\'');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecimalFormatSymbols {
    /// Character for digit zero; digits one to nine follow it.
    pub zero_digit: char,
    /// Separator between integer digit groups.
    pub grouping_separator: char,
    /// Separator between integer and fraction.
    pub decimal_separator: char,
    /// Decimal separator used by currency patterns.
    pub monetary_decimal_separator: char,
    /// Minus sign substituted for `-` in affixes.
    pub minus_sign: char,
    /// Percent sign substituted for `%` in affixes.
    pub percent: char,
    /// Per-mille sign substituted for `‰` in affixes.
    pub per_mille: char,
    /// Rendered for infinite values.
    pub infinity: String,
    /// Rendered for NaN.
    pub nan: String,
    /// Substituted for `¤` in affixes.
    pub currency_symbol: String,
    /// Substituted for `¤¤` in affixes.
    pub international_currency_symbol: String,
}

impl DecimalFormatSymbols {
    /// Symbols of `locale`, falling back to the language and then to root.
    pub fn for_locale(locale: &Locale) -> Self {
        let data = locale::lookup(locale);
        Self {
            grouping_separator: data.grouping_separator,
            decimal_separator: data.decimal_separator,
            monetary_decimal_separator: data.decimal_separator,
            currency_symbol: data.currency_symbol.to_string(),
            international_currency_symbol: data.international_currency_symbol.to_string(),
            ..Self::default()
        }
    }

    /// Replaces the decimal and monetary decimal separators.
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self.monetary_decimal_separator = separator;
        self
    }

    /// Replaces the grouping separator.
    pub fn with_grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separator = separator;
        self
    }

    /// Replaces the minus sign.
    pub fn with_minus_sign(mut self, minus: char) -> Self {
        self.minus_sign = minus;
        self
    }

    /// Replaces both currency symbols.
    pub fn with_currency(mut self, symbol: &str, international: &str) -> Self {
        self.currency_symbol = symbol.to_string();
        self.international_currency_symbol = international.to_string();
        self
    }

    /// Replaces the zero digit, e.g. `'\u{660}'` for Arabic-Indic digits.
    pub fn with_zero_digit(mut self, zero: char) -> Self {
        self.zero_digit = zero;
        self
    }

    /// Character for a digit value in `0..=9`.
    pub(crate) fn digit_char(&self, digit: u8) -> char {
        char::from_u32(self.zero_digit as u32 + u32::from(digit))
            .unwrap_or(char::from(b'0' + digit))
    }

    /// Digit value of `ch`, accepting both ASCII digits and this zero digit's
    /// range.
    pub(crate) fn digit_value(&self, ch: char) -> Option<u8> {
        let offset = (ch as u32).wrapping_sub(self.zero_digit as u32);
        if offset < 10 {
            return Some(offset as u8);
        }
        ch.to_digit(10).map(|d| d as u8)
    }
}

impl Default for DecimalFormatSymbols {
    fn default() -> Self {
        Self {
            zero_digit: '0',
            grouping_separator: ',',
            decimal_separator: '.',
            monetary_decimal_separator: '.',
            minus_sign: '-',
            percent: '%',
            per_mille: '\u{2030}',
            infinity: "\u{221e}".to_string(),
            nan: "NaN".to_string(),
            currency_symbol: "\u{a4}".to_string(),
            international_currency_symbol: "XXX".to_string(),
        }
    }
}
