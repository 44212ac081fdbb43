mod common;

use approx::assert_abs_diff_eq;
use common::german_symbols;
use decimal_format::{DecimalFormat, Number};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::sync::atomic::{AtomicUsize, Ordering};
use threadsafe_format::{ThreadSafeDecimalFormat, ThreadSafeNumberFormat};

const THREADS: usize = 20;
const CALLS: usize = 2_000;

fn pool() -> rayon::ThreadPool {
    ThreadPoolBuilder::new()
        .num_threads(THREADS)
        .thread_name(|i| format!("format-worker-{i}"))
        .build()
        .unwrap()
}

/// Reference output computed by a private, single-threaded engine.
fn expected(value: f64) -> String {
    DecimalFormat::with_symbols("##0.00", german_symbols())
        .unwrap()
        .format(&Number::from(value))
        .unwrap()
}

#[test]
fn shared_format_on_twenty_threads() {
    let format = ThreadSafeNumberFormat::with_pattern_and_symbols("##0.00", german_symbols()).unwrap();
    let completed = AtomicUsize::new(0);

    pool().install(|| {
        (0..CALLS).into_par_iter().for_each(|seed| {
            let mut rng = StdRng::seed_from_u64(seed as u64);
            let value: f64 = rng.random_range(-1.0e6..1.0e6);
            let text = format.format(value).unwrap();
            assert_eq!(text, expected(value));
            completed.fetch_add(1, Ordering::Relaxed);
        });
    });

    assert_eq!(completed.load(Ordering::Relaxed), CALLS);
}

#[test]
fn random_choice_of_four_formats() {
    let formats: Vec<ThreadSafeDecimalFormat> = (0..4)
        .map(|_| ThreadSafeDecimalFormat::with_pattern_and_symbols("##0.00", german_symbols()).unwrap())
        .collect();

    pool().install(|| {
        (0..CALLS).into_par_iter().for_each(|seed| {
            let mut rng = StdRng::seed_from_u64(seed as u64);
            let format = &formats[rng.random_range(0..formats.len())];
            let value: f64 = rng.random();
            let text = format.format(value).unwrap();
            let parsed = format.parse(&text).unwrap();
            assert_abs_diff_eq!(parsed.as_f64(), value, epsilon = 0.0051);
        });
    });

    assert!(formats.iter().all(ThreadSafeDecimalFormat::is_locked));
}

#[test]
fn configuration_converges_across_threads() {
    let format = ThreadSafeDecimalFormat::new();
    format.set_maximum_fraction_digits(1).unwrap();
    format.set_grouping_size(2).unwrap();

    let outputs: Vec<String> = pool().install(|| {
        (0..THREADS * 10)
            .into_par_iter()
            .map(|_| format.format(123456.78).unwrap())
            .collect()
    });
    assert!(outputs.iter().all(|text| text == "12,34,56.8"));
}
