//! # Config Crate
//!
//! Centralized configuration constants for the number formatting workspace.
//! Pattern defaults and digit-count limits are defined here so the engine and
//! the thread-safe facade agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DigitBounds, DEFAULT_NUMBER_PATTERN, MAXIMUM_FRACTION_DIGITS};
//!
//! assert_eq!(DEFAULT_NUMBER_PATTERN, "#,##0.###");
//!
//! // Setters clamp instead of failing
//! let bounds = DigitBounds::default().with_max_fraction(10_000);
//! assert_eq!(bounds.max_fraction, MAXIMUM_FRACTION_DIGITS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure configuration, nothing to resolve at runtime
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
