mod common;

use common::{german_symbols, run_in_new_thread};
use decimal_format::{DecimalFormat, Locale, Number, RoundingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use threadsafe_format::{
    DecimalSetting, Error, NumberSetting, ThreadSafeDecimalFormat, ThreadSafeNumberFormat,
};

fn number_format() -> ThreadSafeNumberFormat {
    ThreadSafeNumberFormat::with_pattern_and_symbols("##0.00", german_symbols()).unwrap()
}

fn decimal_format() -> ThreadSafeDecimalFormat {
    ThreadSafeDecimalFormat::with_pattern_and_symbols("##0.00", german_symbols()).unwrap()
}

#[test]
fn formats_in_current_thread() {
    let format = number_format();
    assert_eq!(format.format(10.149).unwrap(), "10,15");
    assert_eq!(format.format(10.151).unwrap(), "10,15");
    assert_eq!(format.format(11).unwrap(), "11,00");
}

#[test]
fn parses_in_current_thread() {
    let format = decimal_format();
    assert_eq!(format.parse("10,15").unwrap(), Number::Float(10.15));
    assert_eq!(format.parse("10,161").unwrap(), Number::Float(10.161));
    assert_eq!(format.parse("11,01").unwrap(), Number::Float(11.01));
}

#[test]
fn formats_and_parses_in_new_thread() {
    let format = decimal_format();
    let (formatted, parsed) = run_in_new_thread(|| {
        (format.format(10.149).unwrap(), format.parse("11,01").unwrap())
    });
    assert_eq!(formatted, "10,15");
    assert_eq!(parsed, Number::Float(11.01));
}

#[test]
fn parse_recovers_formatted_value() {
    let format = number_format();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let cents: i64 = rng.random_range(-1_000_000..1_000_000);
        let value = Number::Float(cents as f64 / 100.0);
        let text = format.format(value.clone()).unwrap();
        assert_eq!(format.parse(&text).unwrap().as_f64(), value.as_f64(), "{text}");
    }
}

#[test]
fn consecutive_calls_do_not_leak_state() {
    let format = number_format();
    assert_eq!(format.format(123456.789).unwrap(), "123456,79");
    assert_eq!(format.format(1).unwrap(), "1,00");
    assert!(format.parse("12,3x").is_err());
    assert_eq!(format.format(-0.5).unwrap(), "-0,50");
}

#[test]
fn setters_are_visible_from_a_fresh_thread() {
    let mut rng = StdRng::seed_from_u64(42);
    let mode = RoundingMode::ALL[rng.random_range(0..RoundingMode::ALL.len())];
    let min_integer = rng.random_range(1..20);
    let max_integer = rng.random_range(20..40);
    let min_fraction = rng.random_range(0..5);
    let max_fraction = rng.random_range(5..10);
    let grouping_used: bool = rng.random();
    let grouping_size: u8 = rng.random_range(1..=9);
    let big_decimal: bool = rng.random();

    let format = decimal_format();
    format.set_rounding_mode(mode).unwrap();
    format.set_minimum_integer_digits(min_integer).unwrap();
    format.set_maximum_integer_digits(max_integer).unwrap();
    format.set_minimum_fraction_digits(min_fraction).unwrap();
    format.set_maximum_fraction_digits(max_fraction).unwrap();
    format.set_grouping_used(grouping_used).unwrap();
    format.set_grouping_size(grouping_size).unwrap();
    format.set_parse_big_decimal(big_decimal).unwrap();

    let engine = run_in_new_thread(|| format.configured_engine());
    assert_eq!(engine.rounding_mode(), mode);
    assert_eq!(engine.minimum_integer_digits(), min_integer);
    assert_eq!(engine.maximum_integer_digits(), max_integer);
    assert_eq!(engine.minimum_fraction_digits(), min_fraction);
    assert_eq!(engine.maximum_fraction_digits(), max_fraction);
    assert_eq!(engine.is_grouping_used(), grouping_used);
    assert_eq!(engine.grouping_size(), grouping_size);
    assert_eq!(engine.is_parse_big_decimal(), big_decimal);
}

#[test]
fn format_locks_configuration() {
    let format = number_format();
    assert!(!format.is_locked());
    format.format(1.0).unwrap();
    assert!(format.is_locked());
    assert_eq!(format.set_grouping_used(true), Err(Error::ConfigurationLocked));
    assert_eq!(
        format.set_rounding_mode(RoundingMode::Up),
        Err(Error::ConfigurationLocked)
    );
}

#[test]
fn format_in_other_thread_locks_configuration() {
    let format = decimal_format();
    run_in_new_thread(|| format.format(1.0).unwrap());
    assert!(format.is_locked());
    assert_eq!(format.set_grouping_size(2), Err(Error::ConfigurationLocked));
}

#[test]
fn parse_locks_configuration() {
    let format = decimal_format();
    format.parse("1,00").unwrap();
    assert_eq!(
        format.set_parse_big_decimal(true),
        Err(Error::ConfigurationLocked)
    );
}

#[test]
fn failed_parse_still_locks_configuration() {
    let format = number_format();
    assert!(matches!(format.parse("abc"), Err(Error::Parse(_))));
    assert_eq!(
        format.set_minimum_integer_digits(2),
        Err(Error::ConfigurationLocked)
    );
}

#[test]
fn rejected_setter_leaves_settings_unchanged() {
    let format = decimal_format();
    format.set_maximum_fraction_digits(3).unwrap();
    format.set_grouping_size(4).unwrap();
    let before = format.pending();
    format.format(1).unwrap();

    assert!(format.set_maximum_fraction_digits(1).is_err());
    assert!(format.set_grouping_size(2).is_err());
    assert_eq!(format.pending(), before);
    assert_eq!(
        before,
        vec![
            DecimalSetting::Number(NumberSetting::MaximumFractionDigits(3)),
            DecimalSetting::GroupingSize(4),
        ]
    );
}

#[test]
fn facades_are_independent() {
    let used = number_format();
    let fresh = number_format();
    used.format(1).unwrap();
    assert!(!fresh.is_locked());
    fresh.set_maximum_fraction_digits(0).unwrap();
    assert_eq!(fresh.format(2.5).unwrap(), "2");
    assert_eq!(used.format(2.5).unwrap(), "2,50");
}

#[test]
fn last_setter_call_wins() {
    let euro = DecimalFormat::currency_for_locale(&Locale::GERMANY).unwrap();
    let format = ThreadSafeNumberFormat::from_format(euro);
    format.set_grouping_used(false).unwrap();
    format.set_grouping_used(true).unwrap();
    format.set_grouping_used(true).unwrap();
    assert_eq!(format.pending().len(), 3);
    assert_eq!(
        format.format(1234567.894).unwrap(),
        "1.234.567,89\u{a0}\u{20ac}"
    );
}

#[test]
fn unnecessary_rounding_is_a_format_error() {
    let format = number_format();
    format.set_rounding_mode(RoundingMode::Unnecessary).unwrap();
    assert_eq!(format.format(1.5).unwrap(), "1,50");
    assert!(matches!(format.format(1.555), Err(Error::Format(_))));
}

#[test]
fn invalid_pattern_fails_construction() {
    assert!(matches!(
        ThreadSafeDecimalFormat::with_pattern("0.#0"),
        Err(Error::Pattern(_))
    ));
    assert!(matches!(
        ThreadSafeNumberFormat::with_pattern("'0"),
        Err(Error::Pattern(_))
    ));
}

#[test]
fn big_decimal_parse_keeps_scale() {
    let format = decimal_format();
    format.set_parse_big_decimal(true).unwrap();
    let parsed = format.parse("1234,50").unwrap();
    assert_eq!(parsed, Number::Decimal("1234.50".parse().unwrap()));
}

#[test]
fn locale_constructors() {
    let number = ThreadSafeNumberFormat::with_locale(&Locale::FRANCE).unwrap();
    assert_eq!(number.format(1234.5).unwrap(), "1\u{a0}234,5");

    let decimal = ThreadSafeDecimalFormat::with_locale(&Locale::US).unwrap();
    decimal.set_grouping_size(2).unwrap();
    assert_eq!(decimal.format(123456).unwrap(), "12,34,56");

    let default = ThreadSafeDecimalFormat::new();
    assert_eq!(default.format(1234.5678).unwrap(), "1,234.568");
}

#[test]
fn settings_serialize_as_data() {
    let format = decimal_format();
    format.set_rounding_mode(RoundingMode::HalfDown).unwrap();
    format.set_parse_big_decimal(true).unwrap();
    let json = serde_json::to_string(&format.pending()).unwrap();
    assert_eq!(
        json,
        r#"[{"setting":"number","value":{"setting":"rounding_mode","value":"HALF_DOWN"}},{"setting":"parse_big_decimal","value":true}]"#
    );
}
