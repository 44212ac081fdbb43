//! # Settings
//!
//! Recorded configuration changes. Settings are plain data so a facade's
//! configuration can be compared, logged and serialized.
//!
//! ## Example
//!
//! ```rust
//! use decimal_format::{DecimalFormat, RoundingMode};
//! use threadsafe_format::{NumberSetting, Setting};
//!
//! let mut format = DecimalFormat::new();
//! NumberSetting::RoundingMode(RoundingMode::Floor).apply(&mut format);
//! assert_eq!(format.rounding_mode(), RoundingMode::Floor);
//! ```

use crate::engine::{DecimalEngine, NumberEngine};
use decimal_format::RoundingMode;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A configuration change that can be replayed onto an engine.
pub trait Setting<E>: Clone + Debug + Send + Sync {
    fn apply(&self, engine: &mut E);
}

/// Settings understood by every [`NumberEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "setting", content = "value", rename_all = "snake_case")]
pub enum NumberSetting {
    RoundingMode(RoundingMode),
    MinimumIntegerDigits(usize),
    MaximumIntegerDigits(usize),
    MinimumFractionDigits(usize),
    MaximumFractionDigits(usize),
    GroupingUsed(bool),
}

impl<E: NumberEngine> Setting<E> for NumberSetting {
    fn apply(&self, engine: &mut E) {
        match *self {
            NumberSetting::RoundingMode(mode) => engine.set_rounding_mode(mode),
            NumberSetting::MinimumIntegerDigits(digits) => engine.set_minimum_integer_digits(digits),
            NumberSetting::MaximumIntegerDigits(digits) => engine.set_maximum_integer_digits(digits),
            NumberSetting::MinimumFractionDigits(digits) => engine.set_minimum_fraction_digits(digits),
            NumberSetting::MaximumFractionDigits(digits) => engine.set_maximum_fraction_digits(digits),
            NumberSetting::GroupingUsed(used) => engine.set_grouping_used(used),
        }
    }
}

/// Settings understood by a [`DecimalEngine`]: the number settings plus
/// grouping size and exact parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "setting", content = "value", rename_all = "snake_case")]
pub enum DecimalSetting {
    Number(NumberSetting),
    GroupingSize(u8),
    ParseBigDecimal(bool),
}

impl From<NumberSetting> for DecimalSetting {
    fn from(setting: NumberSetting) -> Self {
        DecimalSetting::Number(setting)
    }
}

impl<E: DecimalEngine> Setting<E> for DecimalSetting {
    fn apply(&self, engine: &mut E) {
        match self {
            DecimalSetting::Number(setting) => setting.apply(engine),
            DecimalSetting::GroupingSize(size) => engine.set_grouping_size(*size),
            DecimalSetting::ParseBigDecimal(exact) => engine.set_parse_big_decimal(*exact),
        }
    }
}
