//! Helpers shared by the integration tests.
#![allow(dead_code)]

use decimal_format::{DecimalFormatSymbols, Locale};
use std::thread;

/// Runs `f` on a freshly spawned thread and returns its result.
pub fn run_in_new_thread<T, F>(f: F) -> T
where
    T: Send,
    F: FnOnce() -> T + Send,
{
    thread::scope(|scope| scope.spawn(f).join().unwrap())
}

pub fn german_symbols() -> DecimalFormatSymbols {
    DecimalFormatSymbols::for_locale(&Locale::GERMAN)
}
