//! # Numbers
//!
//! Values accepted by [`DecimalFormat::format`](crate::DecimalFormat::format)
//! and produced by [`DecimalFormat::parse`](crate::DecimalFormat::parse).
//!
//! ## Example
//!
//! ```rust
//! use decimal_format::{Decimal, Number};
//!
//! let exact: Decimal = "1234567.894".parse().unwrap();
//! assert_eq!(exact.scale(), 3);
//! assert_eq!(Number::from(exact.clone()), Number::Decimal(exact));
//! assert_eq!(Number::from(7_i32), Number::Integer(7));
//! ```

use std::fmt;
use std::str::FromStr;

// =============================================================================
// NUMBER
// =============================================================================

/// A number that can be formatted or that was parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// Integral value that fits in 64 bits.
    Integer(i64),
    /// Binary floating point value, including NaN and infinities.
    Float(f64),
    /// Exact decimal value.
    Decimal(Decimal),
}

impl Number {
    /// Lossy conversion to `f64`.
    ///
    /// ```rust
    /// use decimal_format::Number;
    /// assert_eq!(Number::Integer(3).as_f64(), 3.0);
    /// ```
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(value) => *value as f64,
            Number::Float(value) => *value,
            Number::Decimal(value) => value.to_f64(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(value) => write!(f, "{value}"),
            Number::Float(value) => write!(f, "{value}"),
            Number::Decimal(value) => write!(f, "{value}"),
        }
    }
}

macro_rules! integer_from {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Number {
            fn from(value: $ty) -> Self {
                Number::Integer(i64::from(value))
            }
        })*
    };
}

integer_from!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(value) => Number::Integer(value),
            Err(_) => Number::Decimal(Decimal::from_parts(false, &digits_of(value), 0)),
        }
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number::from(value as u64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}

fn digits_of(value: u64) -> Vec<u8> {
    value.to_string().bytes().map(|b| b - b'0').collect()
}

// =============================================================================
// DECIMAL
// =============================================================================

/// Arbitrary-precision decimal: `coefficient × 10^-scale`.
///
/// Equality is scale-sensitive, so `1.50` and `1.5` are different values.
///
/// ```rust
/// use decimal_format::Decimal;
///
/// let a: Decimal = "1.50".parse().unwrap();
/// let b: Decimal = "1.5".parse().unwrap();
/// assert_ne!(a, b);
/// assert_eq!(a.to_f64(), b.to_f64());
/// assert_eq!(a.to_string(), "1.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    negative: bool,
    /// Most significant digit first, no leading zeros. Empty means zero.
    digits: Vec<u8>,
    scale: i32,
}

impl Decimal {
    /// Creates a decimal from an unscaled integer and a scale.
    ///
    /// ```rust
    /// use decimal_format::Decimal;
    /// assert_eq!(Decimal::new(-1015, 2).to_string(), "-10.15");
    /// ```
    pub fn new(unscaled: i64, scale: i32) -> Self {
        Self::from_parts(unscaled < 0, &digits_of(unscaled.unsigned_abs()), scale)
    }

    /// Builds a decimal from raw digits, dropping leading zeros.
    pub(crate) fn from_parts(negative: bool, digits: &[u8], scale: i32) -> Self {
        let start = digits.iter().position(|&d| d != 0).unwrap_or(digits.len());
        let digits = digits[start..].to_vec();
        Self {
            negative: negative && !digits.is_empty(),
            digits,
            scale,
        }
    }

    /// Coefficient digits, most significant first.
    pub(crate) fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits after the decimal point (negative for multiples of
    /// powers of ten written in exponent form).
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Returns `true` for any zero, regardless of scale.
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns `true` for values strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        if self.digits.is_empty() {
            return 0.0;
        }
        let mut text = String::with_capacity(self.digits.len() + 8);
        if self.negative {
            text.push('-');
        }
        text.extend(self.digits.iter().map(|&d| char::from(b'0' + d)));
        text.push('e');
        text.push_str(&(-i64::from(self.scale)).to_string());
        // Rust's float parser accepts any digit count and exponent and rounds
        // correctly; overflow saturates to infinity.
        text.parse().unwrap_or(f64::NAN)
    }

    /// Exact conversion to `i64`; `None` when the value has a fractional part
    /// or does not fit.
    ///
    /// ```rust
    /// use decimal_format::Decimal;
    /// assert_eq!("12.00".parse::<Decimal>().unwrap().to_i64(), Some(12));
    /// assert_eq!("12.5".parse::<Decimal>().unwrap().to_i64(), None);
    /// ```
    pub fn to_i64(&self) -> Option<i64> {
        if self.digits.is_empty() {
            return Some(0);
        }
        let len = self.digits.len() as i64;
        let integer_len = len - i64::from(self.scale);
        let fraction_start = integer_len.clamp(0, len) as usize;
        if self.digits[fraction_start..].iter().any(|&d| d != 0) {
            return None;
        }
        let limit = i128::from(i64::MAX) + 1;
        let mut value: i128 = 0;
        for index in 0..integer_len.max(0) {
            let digit = if index < len { self.digits[index as usize] } else { 0 };
            value = value * 10 + i128::from(digit);
            if value > limit {
                return None;
            }
        }
        if self.negative {
            value = -value;
        }
        i64::try_from(value).ok()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::new();
        if self.negative {
            text.push('-');
        }
        let digits: String = self.digits.iter().map(|&d| char::from(b'0' + d)).collect();
        if self.digits.is_empty() {
            text.push('0');
            if self.scale > 0 {
                text.push('.');
                text.extend(std::iter::repeat('0').take(self.scale as usize));
            }
        } else if self.scale <= 0 {
            text.push_str(&digits);
            text.extend(std::iter::repeat('0').take(self.scale.unsigned_abs() as usize));
        } else {
            let scale = self.scale as usize;
            if digits.len() > scale {
                let (integer, fraction) = digits.split_at(digits.len() - scale);
                text.push_str(integer);
                text.push('.');
                text.push_str(fraction);
            } else {
                text.push_str("0.");
                text.extend(std::iter::repeat('0').take(scale - digits.len()));
                text.push_str(&digits);
            }
        }
        f.pad(&text)
    }
}

/// Error returned when a string is not a plain or exponent-form decimal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid decimal literal '{0}'")]
pub struct DecimalParseError(pub String);

impl FromStr for Decimal {
    type Err = DecimalParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || DecimalParseError(text.to_string());
        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let (mantissa, exponent) = match body.find(['e', 'E']) {
            Some(at) => {
                let exponent: i32 = body[at + 1..].parse().map_err(|_| invalid())?;
                (&body[..at], exponent)
            }
            None => (body, 0),
        };
        let mut digits = Vec::with_capacity(mantissa.len());
        let mut fraction_digits: i32 = 0;
        let mut seen_point = false;
        for ch in mantissa.chars() {
            match ch {
                '0'..='9' => {
                    digits.push(ch as u8 - b'0');
                    if seen_point {
                        fraction_digits = fraction_digits.checked_add(1).ok_or_else(invalid)?;
                    }
                }
                '.' if !seen_point => seen_point = true,
                _ => return Err(invalid()),
            }
        }
        if digits.is_empty() {
            return Err(invalid());
        }
        let scale = fraction_digits.checked_sub(exponent).ok_or_else(invalid)?;
        Ok(Self::from_parts(negative, &digits, scale))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_display_keeps_scale() {
        assert_eq!("10.150".parse::<Decimal>().unwrap().to_string(), "10.150");
        assert_eq!("0.05".parse::<Decimal>().unwrap().to_string(), "0.05");
        assert_eq!("-0.5".parse::<Decimal>().unwrap().to_string(), "-0.5");
        assert_eq!("0.00".parse::<Decimal>().unwrap().to_string(), "0.00");
        assert_eq!("12e2".parse::<Decimal>().unwrap().to_string(), "1200");
        assert_eq!("0".parse::<Decimal>().unwrap().to_string(), "0");
    }

    #[test]
    fn test_decimal_rejects_garbage() {
        assert!("".parse::<Decimal>().is_err());
        assert!("1.2.3".parse::<Decimal>().is_err());
        assert!("1,5".parse::<Decimal>().is_err());
        assert!("e5".parse::<Decimal>().is_err());
    }

    #[test]
    fn test_decimal_rejects_scale_overflow() {
        assert!("1e-2147483648".parse::<Decimal>().is_err());
        assert!("1.5e-2147483647".parse::<Decimal>().is_err());
        assert!("1e99999999999".parse::<Decimal>().is_err());

        let huge: Decimal = "1e2147483647".parse().unwrap();
        assert_eq!(huge.scale(), -2147483647);
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let zero: Decimal = "-0.0".parse().unwrap();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
    }

    #[test]
    fn test_decimal_to_i64_bounds() {
        let max: Decimal = i64::MAX.to_string().parse().unwrap();
        assert_eq!(max.to_i64(), Some(i64::MAX));
        let min: Decimal = i64::MIN.to_string().parse().unwrap();
        assert_eq!(min.to_i64(), Some(i64::MIN));
        let over: Decimal = "9223372036854775808".parse().unwrap();
        assert_eq!(over.to_i64(), None);
        assert_eq!("1e3".parse::<Decimal>().unwrap().to_i64(), Some(1000));
        assert_eq!("0.000".parse::<Decimal>().unwrap().to_i64(), Some(0));
        assert_eq!("0e2000000000".parse::<Decimal>().unwrap().to_i64(), Some(0));
        assert_eq!("1e2000000000".parse::<Decimal>().unwrap().to_i64(), None);
    }

    #[test]
    fn test_decimal_to_f64() {
        assert_eq!(Decimal::new(1015, 2).to_f64(), 10.15);
        assert_eq!(Decimal::new(-11, 0).to_f64(), -11.0);
        assert_eq!(Decimal::new(0, 3).to_f64(), 0.0);
    }

    #[test]
    fn test_number_from_large_u64_is_exact() {
        assert_eq!(
            Number::from(u64::MAX),
            Number::Decimal("18446744073709551615".parse().unwrap())
        );
        assert_eq!(Number::from(5_u64), Number::Integer(5));
    }
}
