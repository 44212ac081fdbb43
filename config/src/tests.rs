//! # Tests for Config Constants
//!
//! Sanity checks on the relationships between limits and defaults.

use crate::constants::*;

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_integer_limit_covers_f64() {
    // f64::MAX has 309 integer digits
    assert_eq!(format!("{:.0}", f64::MAX).len(), MAXIMUM_INTEGER_DIGITS);
}

#[test]
fn test_fraction_limit_covers_subnormals() {
    assert!(MAXIMUM_FRACTION_DIGITS >= 324);
}

#[test]
fn test_grouping_limit_fits_u8() {
    assert!(MAXIMUM_GROUPING_SIZE <= u8::MAX as usize);
    assert!(DEFAULT_GROUPING_SIZE as usize <= MAXIMUM_GROUPING_SIZE);
}

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_pattern_fraction_matches_constant() {
    let fraction = DEFAULT_NUMBER_PATTERN
        .split('.')
        .nth(1)
        .unwrap_or_default();
    assert_eq!(fraction.len(), DEFAULT_MAXIMUM_FRACTION_DIGITS);
}

#[test]
fn test_default_pattern_grouping_matches_constant() {
    let integer = DEFAULT_NUMBER_PATTERN.split('.').next().unwrap_or_default();
    let group = integer.rsplit(',').next().unwrap_or_default();
    assert_eq!(group.len(), DEFAULT_GROUPING_SIZE as usize);
}
