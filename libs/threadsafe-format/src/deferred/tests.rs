//! Tests for the deferred format mechanism, using an engine that records
//! what was applied to it.

use super::*;
use crate::setting::NumberSetting;
use decimal_format::{FormatError, ParseError, ParseErrorKind, RoundingMode};
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

/// Engine that echoes the settings it received.
#[derive(Debug, Clone, Default)]
struct RecordingEngine {
    applied: Vec<String>,
    calls: usize,
}

impl NumberEngine for RecordingEngine {
    fn format(&mut self, _value: &Number) -> std::result::Result<String, FormatError> {
        self.calls += 1;
        Ok(self.applied.join(","))
    }

    fn parse(&mut self, text: &str) -> std::result::Result<Number, ParseError> {
        self.calls += 1;
        text.parse::<i64>()
            .map(Number::Integer)
            .map_err(|_| ParseError::new(ParseErrorKind::MissingDigits, 0))
    }

    fn set_rounding_mode(&mut self, mode: RoundingMode) {
        self.applied.push(format!("rounding={mode}"));
    }

    fn set_minimum_integer_digits(&mut self, digits: usize) {
        self.applied.push(format!("min_int={digits}"));
    }

    fn set_maximum_integer_digits(&mut self, digits: usize) {
        self.applied.push(format!("max_int={digits}"));
    }

    fn set_minimum_fraction_digits(&mut self, digits: usize) {
        self.applied.push(format!("min_frac={digits}"));
    }

    fn set_maximum_fraction_digits(&mut self, digits: usize) {
        self.applied.push(format!("max_frac={digits}"));
    }

    fn set_grouping_used(&mut self, used: bool) {
        self.applied.push(format!("grouping={used}"));
    }
}

type Recording = DeferredFormat<RecordingEngine, NumberSetting>;

fn counting() -> (Recording, Arc<AtomicUsize>) {
    let builds = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&builds);
    let deferred = DeferredFormat::with_builder(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        RecordingEngine::default()
    });
    (deferred, builds)
}

#[test]
fn test_settings_replay_in_recorded_order() {
    let (deferred, _) = counting();
    deferred.record(NumberSetting::MaximumFractionDigits(2)).unwrap();
    deferred.record(NumberSetting::RoundingMode(RoundingMode::Floor)).unwrap();
    deferred.record(NumberSetting::MaximumFractionDigits(4)).unwrap();

    assert_eq!(
        deferred.format(&Number::Integer(0)).unwrap(),
        "max_frac=2,rounding=FLOOR,max_frac=4"
    );
}

#[test]
fn test_engine_built_once_per_thread() {
    let (deferred, builds) = counting();
    deferred.format(&Number::Integer(1)).unwrap();
    deferred.format(&Number::Integer(2)).unwrap();
    deferred.parse("3").unwrap();
    assert_eq!(builds.load(Ordering::SeqCst), 1);
    assert_eq!(deferred.configured_engine().calls, 3);

    std::thread::scope(|scope| {
        scope.spawn(|| deferred.format(&Number::Integer(4)).unwrap());
    });
    assert_eq!(builds.load(Ordering::SeqCst), 2);
}

#[test]
fn test_nothing_is_built_before_use() {
    let (deferred, builds) = counting();
    deferred.record(NumberSetting::GroupingUsed(false)).unwrap();
    assert_eq!(builds.load(Ordering::SeqCst), 0);
    assert!(!deferred.is_locked());
}

#[test]
fn test_lock_rejects_and_preserves_settings() {
    let (deferred, _) = counting();
    deferred.record(NumberSetting::MinimumIntegerDigits(3)).unwrap();
    deferred.parse("7").unwrap();
    assert!(deferred.is_locked());

    assert_eq!(
        deferred.record(NumberSetting::MinimumIntegerDigits(5)),
        Err(Error::ConfigurationLocked)
    );
    assert_eq!(deferred.pending(), vec![NumberSetting::MinimumIntegerDigits(3)]);
}

#[test]
fn test_parse_error_still_locks() {
    let (deferred, _) = counting();
    assert!(matches!(deferred.parse("x"), Err(Error::Parse(_))));
    assert!(deferred.is_locked());
}

#[test]
fn test_lock_is_visible_to_other_threads() {
    let (deferred, _) = counting();
    std::thread::scope(|scope| {
        scope.spawn(|| deferred.format(&Number::Integer(1)).unwrap());
    });
    assert!(deferred.is_locked());
    assert_eq!(
        deferred.record(NumberSetting::GroupingUsed(true)),
        Err(Error::ConfigurationLocked)
    );
}

#[test]
fn test_every_thread_sees_the_same_configuration() {
    let (deferred, _) = counting();
    deferred.record(NumberSetting::MaximumIntegerDigits(9)).unwrap();
    deferred.record(NumberSetting::MinimumFractionDigits(1)).unwrap();

    let results: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| deferred.format(&Number::Integer(0)).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(results.iter().all(|r| r == "max_int=9,min_frac=1"));
}

#[test]
fn test_prototype_is_cloned_per_thread() {
    let prototype = RecordingEngine {
        applied: vec!["prototype".to_string()],
        calls: 0,
    };
    let deferred: Recording = DeferredFormat::from_prototype(prototype);
    deferred.record(NumberSetting::GroupingUsed(false)).unwrap();
    assert_eq!(
        deferred.format(&Number::Integer(0)).unwrap(),
        "prototype,grouping=false"
    );
}

#[test]
fn test_debug_shows_pending_settings() {
    let (deferred, _) = counting();
    deferred.record(NumberSetting::GroupingUsed(false)).unwrap();
    let debug = format!("{deferred:?}");
    assert!(debug.contains("GroupingUsed(false)"));
    assert!(debug.contains("locked: false"));
}

fn rendered(settings: &[NumberSetting]) -> String {
    settings
        .iter()
        .map(|setting| match setting {
            NumberSetting::MaximumFractionDigits(digits) => format!("max_frac={digits}"),
            other => panic!("unexpected setting {other:?}"),
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[test]
fn test_concurrent_recording_keeps_every_setting() {
    let (deferred, builds) = counting();
    std::thread::scope(|scope| {
        for thread in 0..8 {
            let deferred = &deferred;
            scope.spawn(move || {
                for i in 0..50 {
                    deferred
                        .record(NumberSetting::MaximumFractionDigits(thread * 1000 + i))
                        .unwrap();
                }
            });
        }
    });

    let pending = deferred.pending();
    assert_eq!(pending.len(), 400);
    assert_eq!(builds.load(Ordering::SeqCst), 0);
    for thread in 0..8 {
        let own: Vec<usize> = pending
            .iter()
            .filter_map(|setting| match setting {
                NumberSetting::MaximumFractionDigits(d) if d / 1000 == thread => Some(d % 1000),
                _ => None,
            })
            .collect();
        assert_eq!(own, (0..50).collect::<Vec<_>>());
    }
    assert_eq!(deferred.format(&Number::Integer(0)).unwrap(), rendered(&pending));
}

#[test]
fn test_setters_racing_first_use_are_all_or_nothing() {
    let (deferred, _) = counting();
    let (outcomes, outputs) = std::thread::scope(|scope| {
        let setters: Vec<_> = (0..4)
            .map(|thread| {
                let deferred = &deferred;
                scope.spawn(move || {
                    (0..200)
                        .map(|i| {
                            let setting = NumberSetting::MaximumFractionDigits(thread * 1000 + i);
                            (setting, deferred.record(setting))
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        let users: Vec<_> = (0..4)
            .map(|_| {
                let deferred = &deferred;
                scope.spawn(move || deferred.format(&Number::Integer(0)).unwrap())
            })
            .collect();
        let outcomes: Vec<_> = setters
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        let outputs: Vec<String> = users.into_iter().map(|h| h.join().unwrap()).collect();
        (outcomes, outputs)
    });

    let pending = deferred.pending();
    let expected = rendered(&pending);
    assert!(outputs.iter().all(|output| *output == expected));
    assert!(deferred.is_locked());

    let mut accepted = 0;
    for (setting, result) in &outcomes {
        match result {
            Ok(()) => {
                accepted += 1;
                assert!(pending.contains(setting), "{setting:?} accepted but not applied");
            }
            Err(Error::ConfigurationLocked) => {
                assert!(!pending.contains(setting), "{setting:?} rejected but applied");
            }
            Err(other) => panic!("unexpected error {other}"),
        }
    }
    assert_eq!(accepted, pending.len());
}
