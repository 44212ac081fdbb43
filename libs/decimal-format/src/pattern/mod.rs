//! # Pattern Compiler
//!
//! Turns a decimal pattern into affixes, digit bounds and grouping settings.
//!
//! ## Grammar
//!
//! ```text
//! pattern    := subpattern (';' subpattern)?
//! subpattern := prefix integer ('.' fraction)? suffix
//! integer    := ('#' | ',')* ('0' | ',')*
//! fraction   := '0'* '#'*
//! ```
//!
//! Affix specials: `%` (×100), `‰` (×1000), `¤` (currency symbol), `¤¤`
//! (international currency symbol), `-` (minus sign), `'...'` (quoted
//! literal), `''` (a single quote).
//!
//! Only the affixes of the negative subpattern are used; when it is missing
//! the negative prefix is the minus sign followed by the positive prefix.

use crate::error::PatternError;
use crate::symbols::DecimalFormatSymbols;
use config::constants::{DigitBounds, MAXIMUM_FRACTION_DIGITS, MAXIMUM_GROUPING_SIZE, MAXIMUM_INTEGER_DIGITS};
use tracing::trace;

const PERCENT: char = '%';
const PER_MILLE: char = '\u{2030}';
const CURRENCY: char = '\u{a4}';
const QUOTE: char = '\'';

// =============================================================================
// AFFIXES
// =============================================================================

/// One element of a prefix or suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AffixToken {
    Literal(String),
    Minus,
    Percent,
    PerMille,
    Currency,
    InternationalCurrency,
}

/// A prefix or suffix, expanded against the symbols at format time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Affix(pub(crate) Vec<AffixToken>);

impl Affix {
    fn push_literal(&mut self, ch: char) {
        match self.0.last_mut() {
            Some(AffixToken::Literal(text)) => text.push(ch),
            _ => self.0.push(AffixToken::Literal(ch.to_string())),
        }
    }

    fn has_currency(&self) -> bool {
        self.0.iter().any(|token| {
            matches!(
                token,
                AffixToken::Currency | AffixToken::InternationalCurrency
            )
        })
    }

    pub(crate) fn expand(&self, symbols: &DecimalFormatSymbols) -> String {
        let mut out = String::new();
        for token in &self.0 {
            match token {
                AffixToken::Literal(text) => out.push_str(text),
                AffixToken::Minus => out.push(symbols.minus_sign),
                AffixToken::Percent => out.push(symbols.percent),
                AffixToken::PerMille => out.push(symbols.per_mille),
                AffixToken::Currency => out.push_str(&symbols.currency_symbol),
                AffixToken::InternationalCurrency => {
                    out.push_str(&symbols.international_currency_symbol)
                }
            }
        }
        out
    }

    fn write_pattern(&self, out: &mut String) {
        for token in &self.0 {
            match token {
                AffixToken::Literal(text) => {
                    for ch in text.chars() {
                        match ch {
                            QUOTE => out.push_str("''"),
                            '#' | '0' | ',' | '.' | ';' | '-' | PERCENT | PER_MILLE | CURRENCY => {
                                out.push(QUOTE);
                                out.push(ch);
                                out.push(QUOTE);
                            }
                            _ => out.push(ch),
                        }
                    }
                }
                AffixToken::Minus => out.push('-'),
                AffixToken::Percent => out.push(PERCENT),
                AffixToken::PerMille => out.push(PER_MILLE),
                AffixToken::Currency => out.push(CURRENCY),
                AffixToken::InternationalCurrency => {
                    out.push(CURRENCY);
                    out.push(CURRENCY);
                }
            }
        }
    }
}

// =============================================================================
// COMPILED PATTERN
// =============================================================================

/// Everything a pattern sets on a formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompiledPattern {
    pub(crate) positive_prefix: Affix,
    pub(crate) positive_suffix: Affix,
    pub(crate) negative_prefix: Affix,
    pub(crate) negative_suffix: Affix,
    /// Power of ten the value is multiplied by before formatting.
    pub(crate) multiplier_exponent: u32,
    pub(crate) bounds: DigitBounds,
    pub(crate) grouping_size: u8,
    pub(crate) grouping_used: bool,
    pub(crate) decimal_separator_always_shown: bool,
    pub(crate) currency: bool,
}

impl CompiledPattern {
    /// The legal empty pattern: no affixes, no grouping, unbounded digits.
    fn empty() -> Self {
        Self {
            positive_prefix: Affix::default(),
            positive_suffix: Affix::default(),
            negative_prefix: Affix(vec![AffixToken::Minus]),
            negative_suffix: Affix::default(),
            multiplier_exponent: 0,
            bounds: DigitBounds {
                min_integer: 0,
                max_integer: MAXIMUM_INTEGER_DIGITS,
                min_fraction: 0,
                max_fraction: MAXIMUM_FRACTION_DIGITS,
            },
            grouping_size: 0,
            grouping_used: false,
            decimal_separator_always_shown: false,
            currency: false,
        }
    }
}

/// Digit counters of one subpattern's number part.
#[derive(Debug, Default)]
struct NumberPart {
    digit_left: usize,
    zero_digits: usize,
    digit_right: usize,
    /// `None` until a grouping separator is seen.
    grouping_count: Option<usize>,
    decimal_pos: Option<usize>,
}

#[derive(Debug, Default)]
struct Subpattern {
    prefix: Affix,
    suffix: Affix,
    number: NumberPart,
    multiplier_exponent: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Prefix,
    Number,
    Suffix,
}

/// Compiles `pattern`.
pub(crate) fn compile(pattern: &str) -> Result<CompiledPattern, PatternError> {
    if pattern.is_empty() {
        return Ok(CompiledPattern::empty());
    }
    let chars: Vec<(usize, char)> = pattern.char_indices().collect();
    let mut pos = 0;
    let positive = parse_subpattern(&chars, &mut pos)?;
    let negative = if pos < chars.len() {
        // Stopped on ';'
        pos += 1;
        if pos < chars.len() {
            let negative = parse_subpattern(&chars, &mut pos)?;
            if pos < chars.len() {
                return Err(PatternError::MisplacedSpecial {
                    found: ';',
                    index: chars[pos].0,
                });
            }
            Some(negative)
        } else {
            None
        }
    } else {
        None
    };

    let part = &positive.number;
    let (mut digit_left, mut zero_digits, mut digit_right) =
        (part.digit_left, part.zero_digits, part.digit_right);

    // "##.###" means "#0.###" and ".###" means ".0##"
    if zero_digits == 0 && digit_left > 0 {
        if let Some(decimal_pos) = part.decimal_pos {
            let n = decimal_pos.max(1);
            digit_right = digit_left - n;
            digit_left = n - 1;
            zero_digits = 1;
        }
    }

    let total = digit_left + zero_digits + digit_right;
    if total == 0 {
        return Err(PatternError::MissingDigits);
    }
    if part.decimal_pos.is_none() && digit_right > 0 {
        return Err(PatternError::Malformed {
            reason: "'#' after '0' in the integer part",
        });
    }
    if let Some(decimal_pos) = part.decimal_pos {
        if decimal_pos < digit_left || decimal_pos > digit_left + zero_digits {
            return Err(PatternError::Malformed {
                reason: "decimal separator inside the digit run",
            });
        }
    }
    if part.grouping_count == Some(0) {
        return Err(PatternError::Malformed {
            reason: "grouping separator not followed by digits",
        });
    }
    let grouping_size = part.grouping_count.unwrap_or(0);
    if grouping_size > MAXIMUM_GROUPING_SIZE {
        return Err(PatternError::GroupingTooLarge {
            size: grouping_size,
        });
    }

    let effective_decimal_pos = part.decimal_pos.unwrap_or(total);
    let min_integer = effective_decimal_pos - digit_left;
    let (min_fraction, max_fraction) = match part.decimal_pos {
        Some(decimal_pos) => (digit_left + zero_digits - decimal_pos, total - decimal_pos),
        None => (0, 0),
    };
    let bounds = DigitBounds::new(min_integer, MAXIMUM_INTEGER_DIGITS, min_fraction, max_fraction)?;

    let multiplier_exponent = match negative.as_ref() {
        Some(negative) if positive.multiplier_exponent == 0 => negative.multiplier_exponent,
        _ => positive.multiplier_exponent,
    };
    let currency = positive.prefix.has_currency()
        || positive.suffix.has_currency()
        || negative
            .as_ref()
            .is_some_and(|n| n.prefix.has_currency() || n.suffix.has_currency());

    let (negative_prefix, negative_suffix) = match negative {
        Some(negative) if negative.prefix != positive.prefix || negative.suffix != positive.suffix => {
            (negative.prefix, negative.suffix)
        }
        _ => {
            let mut prefix = Affix(vec![AffixToken::Minus]);
            prefix.0.extend(positive.prefix.0.iter().cloned());
            (prefix, positive.suffix.clone())
        }
    };

    let compiled = CompiledPattern {
        positive_prefix: positive.prefix,
        positive_suffix: positive.suffix,
        negative_prefix,
        negative_suffix,
        multiplier_exponent,
        bounds,
        grouping_size: grouping_size as u8,
        grouping_used: grouping_size > 0,
        decimal_separator_always_shown: part.decimal_pos.is_some_and(|p| p == 0 || p == total),
        currency,
    };
    trace!(pattern, ?compiled.bounds, "compiled decimal pattern");
    Ok(compiled)
}

/// Parses one subpattern starting at `pos`, leaving `pos` on the terminating
/// `;` or at the end.
fn parse_subpattern(chars: &[(usize, char)], pos: &mut usize) -> Result<Subpattern, PatternError> {
    let mut sub = Subpattern::default();
    let mut phase = Phase::Prefix;
    let mut in_quote = false;

    while *pos < chars.len() {
        let (index, ch) = chars[*pos];
        let next = chars.get(*pos + 1).map(|&(_, c)| c);

        if phase == Phase::Number {
            let part = &mut sub.number;
            match ch {
                '#' => {
                    if part.zero_digits > 0 {
                        part.digit_right += 1;
                    } else {
                        part.digit_left += 1;
                    }
                    if part.decimal_pos.is_none() {
                        if let Some(count) = part.grouping_count.as_mut() {
                            *count += 1;
                        }
                    }
                }
                '0' => {
                    if part.digit_right > 0 {
                        return Err(PatternError::UnexpectedZero { index });
                    }
                    part.zero_digits += 1;
                    if part.decimal_pos.is_none() {
                        if let Some(count) = part.grouping_count.as_mut() {
                            *count += 1;
                        }
                    }
                }
                ',' => {
                    if part.decimal_pos.is_some() {
                        return Err(PatternError::GroupingInFraction { index });
                    }
                    part.grouping_count = Some(0);
                }
                '.' => {
                    if part.decimal_pos.is_some() {
                        return Err(PatternError::MultipleDecimalSeparators { index });
                    }
                    part.decimal_pos = Some(part.digit_left + part.zero_digits + part.digit_right);
                }
                'E' => return Err(PatternError::UnsupportedExponent { index }),
                _ => {
                    phase = Phase::Suffix;
                    continue;
                }
            }
            *pos += 1;
            continue;
        }

        let affix = if phase == Phase::Prefix {
            &mut sub.prefix
        } else {
            &mut sub.suffix
        };

        if in_quote {
            if ch == QUOTE {
                if next == Some(QUOTE) {
                    affix.push_literal(QUOTE);
                    *pos += 1;
                } else {
                    in_quote = false;
                }
            } else {
                affix.push_literal(ch);
            }
            *pos += 1;
            continue;
        }

        match ch {
            '#' | '0' | ',' | '.' => {
                if phase == Phase::Prefix {
                    phase = Phase::Number;
                    continue;
                }
                return Err(PatternError::MisplacedSpecial { found: ch, index });
            }
            ';' => {
                if phase == Phase::Prefix {
                    return Err(PatternError::MisplacedSpecial { found: ch, index });
                }
                break;
            }
            QUOTE => {
                if next == Some(QUOTE) {
                    affix.push_literal(QUOTE);
                    *pos += 1;
                } else {
                    in_quote = true;
                }
            }
            PERCENT => {
                if sub.multiplier_exponent == 3 {
                    return Err(PatternError::MixedMultipliers);
                }
                sub.multiplier_exponent = 2;
                affix.0.push(AffixToken::Percent);
            }
            PER_MILLE => {
                if sub.multiplier_exponent == 2 {
                    return Err(PatternError::MixedMultipliers);
                }
                sub.multiplier_exponent = 3;
                affix.0.push(AffixToken::PerMille);
            }
            CURRENCY => {
                if next == Some(CURRENCY) {
                    affix.0.push(AffixToken::InternationalCurrency);
                    *pos += 1;
                } else {
                    affix.0.push(AffixToken::Currency);
                }
            }
            '-' => affix.0.push(AffixToken::Minus),
            _ => affix.push_literal(ch),
        }
        *pos += 1;
    }

    if in_quote {
        return Err(PatternError::UnterminatedQuote);
    }
    Ok(sub)
}

// =============================================================================
// RENDERING
// =============================================================================

/// Settings needed to render a pattern back to text.
pub(crate) struct PatternView<'a> {
    pub(crate) positive_prefix: &'a Affix,
    pub(crate) positive_suffix: &'a Affix,
    pub(crate) negative_prefix: &'a Affix,
    pub(crate) negative_suffix: &'a Affix,
    pub(crate) bounds: DigitBounds,
    pub(crate) grouping_size: u8,
    pub(crate) grouping_used: bool,
    pub(crate) decimal_separator_always_shown: bool,
}

impl PatternView<'_> {
    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        self.positive_prefix.write_pattern(&mut out);
        self.write_number(&mut out);
        self.positive_suffix.write_pattern(&mut out);

        let mut default_negative = Affix(vec![AffixToken::Minus]);
        default_negative.0.extend(self.positive_prefix.0.iter().cloned());
        if *self.negative_prefix != default_negative || self.negative_suffix != self.positive_suffix {
            out.push(';');
            self.negative_prefix.write_pattern(&mut out);
            self.write_number(&mut out);
            self.negative_suffix.write_pattern(&mut out);
        }
        out
    }

    fn write_number(&self, out: &mut String) {
        let grouping = usize::from(self.grouping_size);
        let digit_count = grouping.max(self.bounds.min_integer) + 1;
        for i in (1..=digit_count).rev() {
            if i != digit_count && self.grouping_used && grouping != 0 && i % grouping == 0 {
                out.push(',');
            }
            out.push(if i <= self.bounds.min_integer { '0' } else { '#' });
        }
        if self.bounds.max_fraction > 0 || self.decimal_separator_always_shown {
            out.push('.');
        }
        for i in 0..self.bounds.max_fraction {
            out.push(if i < self.bounds.min_fraction { '0' } else { '#' });
        }
    }
}
