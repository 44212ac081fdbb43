//! # Engine Capabilities
//!
//! What the facade needs from a formatter. The engine may be mutable and
//! non-`Sync`; it only has to move between threads.

use decimal_format::{DecimalFormat, FormatError, Number, ParseError, RoundingMode};

/// A mutable number formatter with the common configuration setters.
pub trait NumberEngine: Send {
    fn format(&mut self, value: &Number) -> Result<String, FormatError>;
    fn parse(&mut self, text: &str) -> Result<Number, ParseError>;

    fn set_rounding_mode(&mut self, mode: RoundingMode);
    fn set_minimum_integer_digits(&mut self, digits: usize);
    fn set_maximum_integer_digits(&mut self, digits: usize);
    fn set_minimum_fraction_digits(&mut self, digits: usize);
    fn set_maximum_fraction_digits(&mut self, digits: usize);
    fn set_grouping_used(&mut self, used: bool);
}

/// A [`NumberEngine`] with decimal-specific options.
pub trait DecimalEngine: NumberEngine {
    fn set_grouping_size(&mut self, size: u8);
    /// Makes `parse` return exact decimals.
    fn set_parse_big_decimal(&mut self, exact: bool);
}

impl NumberEngine for DecimalFormat {
    fn format(&mut self, value: &Number) -> Result<String, FormatError> {
        DecimalFormat::format(self, value)
    }

    fn parse(&mut self, text: &str) -> Result<Number, ParseError> {
        DecimalFormat::parse(self, text)
    }

    fn set_rounding_mode(&mut self, mode: RoundingMode) {
        DecimalFormat::set_rounding_mode(self, mode);
    }

    fn set_minimum_integer_digits(&mut self, digits: usize) {
        DecimalFormat::set_minimum_integer_digits(self, digits);
    }

    fn set_maximum_integer_digits(&mut self, digits: usize) {
        DecimalFormat::set_maximum_integer_digits(self, digits);
    }

    fn set_minimum_fraction_digits(&mut self, digits: usize) {
        DecimalFormat::set_minimum_fraction_digits(self, digits);
    }

    fn set_maximum_fraction_digits(&mut self, digits: usize) {
        DecimalFormat::set_maximum_fraction_digits(self, digits);
    }

    fn set_grouping_used(&mut self, used: bool) {
        DecimalFormat::set_grouping_used(self, used);
    }
}

impl DecimalEngine for DecimalFormat {
    fn set_grouping_size(&mut self, size: u8) {
        DecimalFormat::set_grouping_size(self, size);
    }

    fn set_parse_big_decimal(&mut self, exact: bool) {
        DecimalFormat::set_parse_big_decimal(self, exact);
    }
}
