//! # Digit List
//!
//! Scratch representation of a non-negative value as `0.d1d2...dn × 10^decimal_at`.
//! The formatter owns one list and reuses it for every call.

use crate::error::FormatError;
use crate::rounding::RoundingMode;

/// Decimal digits of a magnitude.
///
/// Invariant after every setter: no leading or trailing zeros; an empty list
/// is zero and has `decimal_at == 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DigitList {
    pub(crate) digits: Vec<u8>,
    pub(crate) decimal_at: i64,
}

impl DigitList {
    pub(crate) fn clear(&mut self) {
        self.digits.clear();
        self.decimal_at = 0;
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Loads a finite, non-negative float using its shortest round-trip
    /// decimal representation.
    pub(crate) fn set_f64(&mut self, value: f64) {
        self.clear();
        // `{:e}` yields e.g. "1.0149e1", "5e-324", "0e0"
        let text = format!("{:e}", value.abs());
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
        let exponent: i64 = exponent.parse().unwrap_or(0);
        self.digits
            .extend(mantissa.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0'));
        self.decimal_at = exponent + 1;
        self.normalize();
    }

    pub(crate) fn set_u64(&mut self, value: u64) {
        self.clear();
        self.digits
            .extend(value.to_string().bytes().map(|b| b - b'0'));
        self.decimal_at = self.digits.len() as i64;
        self.normalize();
    }

    /// Loads `coefficient × 10^-scale`. Any `i32` scale fits: the position
    /// is tracked as `i64`.
    pub(crate) fn set_decimal(&mut self, coefficient: &[u8], scale: i32) {
        self.clear();
        self.digits.extend_from_slice(coefficient);
        self.decimal_at = coefficient.len() as i64 - i64::from(scale);
        self.normalize();
    }

    /// Multiplies by `10^exponent`.
    pub(crate) fn shift(&mut self, exponent: i64) {
        if !self.is_zero() {
            self.decimal_at = self.decimal_at.saturating_add(exponent);
        }
    }

    /// Rounds to at most `max_fraction` digits after the decimal point.
    pub(crate) fn round(
        &mut self,
        max_fraction: usize,
        mode: RoundingMode,
        negative: bool,
    ) -> Result<(), FormatError> {
        if self.is_zero() {
            return Ok(());
        }
        let keep = self.decimal_at.saturating_add(max_fraction as i64);
        if keep >= self.digits.len() as i64 {
            return Ok(());
        }
        let (kept, first_dropped, rest_nonzero) = if keep < 0 {
            // Every digit lies below the first dropped position, which is zero
            (0, 0, true)
        } else {
            let kept = keep as usize;
            let rest_nonzero = self.digits[kept + 1..].iter().any(|&d| d != 0);
            (kept, self.digits[kept], rest_nonzero)
        };
        let last_kept_odd = kept > 0 && self.digits[kept - 1] % 2 == 1;
        let round_up = mode
            .rounds_up(negative, last_kept_odd, first_dropped, rest_nonzero)
            .ok_or(FormatError::RoundingNecessary {
                max_fraction_digits: max_fraction,
            })?;

        self.digits.truncate(kept);
        if round_up {
            self.increment(keep);
        }
        self.normalize();
        Ok(())
    }

    /// Adds one unit in the last kept position. `keep` is the number of
    /// significant digits that survived truncation (possibly negative).
    fn increment(&mut self, keep: i64) {
        if self.digits.is_empty() {
            self.digits.push(1);
            self.decimal_at = self.decimal_at - keep + 1;
            return;
        }
        for digit in self.digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                return;
            }
        }
        // Carry out of the most significant digit: 99.9 -> 100
        self.digits.clear();
        self.digits.push(1);
        self.decimal_at += 1;
    }

    fn normalize(&mut self) {
        let leading = self.digits.iter().take_while(|&&d| d == 0).count();
        if leading > 0 {
            self.digits.drain(..leading);
            self.decimal_at -= leading as i64;
        }
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.decimal_at = 0;
        }
    }
}
