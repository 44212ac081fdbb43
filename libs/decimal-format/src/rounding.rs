//! # Rounding Modes
//!
//! How discarded fraction digits affect the last kept digit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rounding behavior applied when a value has more fraction digits than the
/// formatter's maximum.
///
/// ## Example
///
/// ```rust
/// use decimal_format::{DecimalFormat, RoundingMode};
///
/// let mut format = DecimalFormat::with_pattern("0.0").unwrap();
/// format.set_rounding_mode(RoundingMode::HalfUp);
/// assert_eq!(format.format(&0.25.into()).unwrap(), "0.3");
/// format.set_rounding_mode(RoundingMode::HalfEven);
/// assert_eq!(format.format(&0.25.into()).unwrap(), "0.2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Towards zero (truncation).
    Down,
    /// Towards positive infinity.
    Ceiling,
    /// Towards negative infinity.
    Floor,
    /// To nearest, ties away from zero.
    HalfUp,
    /// To nearest, ties towards zero.
    HalfDown,
    /// To nearest, ties to the even neighbour.
    #[default]
    HalfEven,
    /// Rounding is an error.
    Unnecessary,
}

impl RoundingMode {
    /// Every rounding mode, in declaration order.
    pub const ALL: [RoundingMode; 8] = [
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::Unnecessary,
    ];

    /// Decides whether the kept digits must be incremented.
    ///
    /// `first_dropped` is the most significant discarded digit, `rest_nonzero`
    /// tells whether any later discarded digit is non-zero. Returns `None` for
    /// [`RoundingMode::Unnecessary`].
    pub(crate) fn rounds_up(
        self,
        negative: bool,
        last_kept_odd: bool,
        first_dropped: u8,
        rest_nonzero: bool,
    ) -> Option<bool> {
        let round_up = match self {
            RoundingMode::Up => true,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => !negative,
            RoundingMode::Floor => negative,
            RoundingMode::HalfUp => first_dropped >= 5,
            RoundingMode::HalfDown => first_dropped > 5 || (first_dropped == 5 && rest_nonzero),
            RoundingMode::HalfEven => {
                first_dropped > 5 || (first_dropped == 5 && (rest_nonzero || last_kept_odd))
            }
            RoundingMode::Unnecessary => return None,
        };
        Some(round_up)
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMode::Up => "UP",
            RoundingMode::Down => "DOWN",
            RoundingMode::Ceiling => "CEILING",
            RoundingMode::Floor => "FLOOR",
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::HalfEven => "HALF_EVEN",
            RoundingMode::Unnecessary => "UNNECESSARY",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_half_even() {
        assert_eq!(RoundingMode::default(), RoundingMode::HalfEven);
    }

    #[test]
    fn test_ties() {
        assert_eq!(RoundingMode::HalfUp.rounds_up(false, false, 5, false), Some(true));
        assert_eq!(RoundingMode::HalfDown.rounds_up(false, false, 5, false), Some(false));
        assert_eq!(RoundingMode::HalfEven.rounds_up(false, false, 5, false), Some(false));
        assert_eq!(RoundingMode::HalfEven.rounds_up(false, true, 5, false), Some(true));
        assert_eq!(RoundingMode::HalfDown.rounds_up(false, false, 5, true), Some(true));
    }

    #[test]
    fn test_directed_modes_follow_sign() {
        assert_eq!(RoundingMode::Ceiling.rounds_up(true, false, 1, false), Some(false));
        assert_eq!(RoundingMode::Floor.rounds_up(true, false, 1, false), Some(true));
        assert_eq!(RoundingMode::Unnecessary.rounds_up(false, false, 1, false), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&RoundingMode::HalfEven).unwrap();
        assert_eq!(json, "\"HALF_EVEN\"");
        let mode: RoundingMode = serde_json::from_str("\"CEILING\"").unwrap();
        assert_eq!(mode, RoundingMode::Ceiling);
    }
}
