//! Text to number conversion for [`DecimalFormat`].

use super::DecimalFormat;
use crate::error::{ParseError, ParseErrorKind};
use crate::number::{Decimal, Number};

/// Which sign's affixes are still candidates.
#[derive(Debug, Clone, Copy)]
struct SignMatch {
    positive: bool,
    negative: bool,
}

impl SignMatch {
    /// Keeps the candidates whose affix matches at `rest`; on a tie the
    /// longer affix wins.
    fn narrow(self, rest: &str, positive: &str, negative: &str) -> Self {
        let mut next = Self {
            positive: self.positive && rest.starts_with(positive),
            negative: self.negative && rest.starts_with(negative),
        };
        if next.positive && next.negative {
            if positive.len() > negative.len() {
                next.negative = false;
            } else if positive.len() < negative.len() {
                next.positive = false;
            }
        }
        next
    }
}

impl DecimalFormat {
    /// Parses the whole of `text`.
    ///
    /// Integral values that fit in `i64` become [`Number::Integer`], anything
    /// else [`Number::Float`]; with parse-big-decimal set the result is always
    /// [`Number::Decimal`]. `"-0"` parses to `Float(-0.0)`.
    ///
    /// ```rust
    /// use decimal_format::{DecimalFormat, Number};
    ///
    /// let mut format = DecimalFormat::new();
    /// assert_eq!(format.parse("1,234").unwrap(), Number::Integer(1234));
    /// assert_eq!(format.parse("-1.5").unwrap(), Number::Float(-1.5));
    /// assert!(format.parse("1.5 apples").is_err());
    /// ```
    ///
    /// ## Errors
    ///
    /// A [`ParseError`] whose index is the byte where matching stopped,
    /// including [`ParseErrorKind::TrailingInput`] when a number was read but
    /// text remains.
    pub fn parse(&mut self, text: &str) -> Result<Number, ParseError> {
        let (number, consumed) = self.parse_partial(text)?;
        if consumed != text.len() {
            return Err(ParseError::new(ParseErrorKind::TrailingInput, consumed));
        }
        Ok(number)
    }

    /// Parses the longest number at the start of `text` and returns it with
    /// the number of bytes consumed.
    ///
    /// ```rust
    /// use decimal_format::{DecimalFormat, Number};
    ///
    /// let mut format = DecimalFormat::new();
    /// assert_eq!(format.parse_partial("42 apples").unwrap(), (Number::Integer(42), 2));
    /// ```
    pub fn parse_partial(&mut self, text: &str) -> Result<(Number, usize), ParseError> {
        if text.is_empty() {
            return Err(ParseError::new(ParseErrorKind::Empty, 0));
        }
        if !self.symbols.nan.is_empty() && text.starts_with(self.symbols.nan.as_str()) {
            return Ok((Number::Float(f64::NAN), self.symbols.nan.len()));
        }

        let positive_prefix = self.positive_prefix.expand(&self.symbols);
        let negative_prefix = self.negative_prefix.expand(&self.symbols);
        let positive_suffix = self.positive_suffix.expand(&self.symbols);
        let negative_suffix = self.negative_suffix.expand(&self.symbols);

        let sign = SignMatch {
            positive: true,
            negative: true,
        }
        .narrow(text, &positive_prefix, &negative_prefix);
        let mut position = if sign.positive {
            positive_prefix.len()
        } else if sign.negative {
            negative_prefix.len()
        } else {
            return Err(ParseError::new(ParseErrorKind::MissingPrefix, 0));
        };

        let infinite = !self.symbols.infinity.is_empty()
            && text[position..].starts_with(self.symbols.infinity.as_str());
        let mut fraction_digits = 0i32;
        if infinite {
            position += self.symbols.infinity.len();
        } else {
            position = self.scan_digits(text, position, &mut fraction_digits)?;
        }

        let sign = sign.narrow(&text[position..], &positive_suffix, &negative_suffix);
        position += match (sign.positive, sign.negative) {
            (true, false) => positive_suffix.len(),
            (false, true) => negative_suffix.len(),
            _ => return Err(ParseError::new(ParseErrorKind::MissingSuffix, position)),
        };
        let negative = sign.negative;

        let number = if infinite {
            Number::Float(if negative { f64::NEG_INFINITY } else { f64::INFINITY })
        } else {
            let scale = fraction_digits + self.multiplier_exponent as i32;
            let exact = Decimal::from_parts(negative, &self.digit_list.digits, scale);
            self.digit_list.clear();
            if self.parse_big_decimal {
                Number::Decimal(exact)
            } else if negative && exact.is_zero() {
                Number::Float(-0.0)
            } else {
                match exact.to_i64() {
                    Some(value) => Number::Integer(value),
                    None => Number::Float(exact.to_f64()),
                }
            }
        };
        Ok((number, position))
    }

    /// Reads digits, grouping and decimal separators starting at `start` into
    /// the digit buffer. Returns the position after the last consumed
    /// character. A grouping separator is only consumed when a digit follows.
    fn scan_digits(
        &mut self,
        text: &str,
        start: usize,
        fraction_digits: &mut i32,
    ) -> Result<usize, ParseError> {
        let decimal_separator = self.decimal_separator();
        let grouping_separator = self.symbols.grouping_separator;
        let grouping_used = self.grouping_used;
        let symbols = &self.symbols;
        let digits = &mut self.digit_list.digits;
        digits.clear();

        let mut position = start;
        let mut saw_digit = false;
        let mut saw_decimal = false;
        let mut backup: Option<usize> = None;

        for (offset, ch) in text[start..].char_indices() {
            let index = start + offset;
            if let Some(digit) = symbols.digit_value(ch) {
                saw_digit = true;
                backup = None;
                digits.push(digit);
                if saw_decimal {
                    *fraction_digits += 1;
                }
            } else if ch == decimal_separator {
                if saw_decimal {
                    break;
                }
                saw_decimal = true;
            } else if grouping_used && ch == grouping_separator && !saw_decimal {
                backup.get_or_insert(index);
            } else {
                break;
            }
            position = index + ch.len_utf8();
        }

        if let Some(backup) = backup {
            position = backup;
        }
        if !saw_digit {
            digits.clear();
            return Err(ParseError::new(ParseErrorKind::MissingDigits, start));
        }
        Ok(position)
    }
}
