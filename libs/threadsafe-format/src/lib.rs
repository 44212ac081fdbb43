//! # Thread-Safe Format
//!
//! Share one number format configuration between threads without sharing the
//! formatter itself.
//!
//! ## Architecture
//!
//! ```text
//! set_*() ──▶ pending settings (Mutex<Vec<S>>)
//!                    │ replayed once per thread
//!                    ▼
//! format()/parse() ──▶ ThreadLocal<RefCell<DecimalFormat>>
//! ```
//!
//! - **Deferred**: setters record a [`Setting`] instead of touching an engine
//! - **Per-thread**: each thread lazily builds its own engine
//! - **Configure before use**: the first `format`/`parse` on any thread locks
//!   the settings for every thread
//!
//! ## Usage
//!
//! ```rust
//! use decimal_format::{Locale, RoundingMode};
//! use threadsafe_format::{Error, ThreadSafeDecimalFormat};
//!
//! let format = ThreadSafeDecimalFormat::with_locale(&Locale::GERMANY)?;
//! format.set_rounding_mode(RoundingMode::HalfUp)?;
//! format.set_maximum_fraction_digits(1)?;
//!
//! assert_eq!(format.format(1234.25)?, "1.234,3");
//! assert_eq!(format.set_grouping_size(4), Err(Error::ConfigurationLocked));
//! # Ok::<(), Error>(())
//! ```

pub mod decimal;
pub mod deferred;
pub mod engine;
pub mod error;
pub mod number;
pub mod setting;

pub use decimal::ThreadSafeDecimalFormat;
pub use deferred::DeferredFormat;
pub use engine::{DecimalEngine, NumberEngine};
pub use error::{Error, Result};
pub use number::ThreadSafeNumberFormat;
pub use setting::{DecimalSetting, NumberSetting, Setting};
