//! # Deferred Format
//!
//! The mechanism behind both public facades.
//!
//! ## Lifecycle
//!
//! ```text
//! unlocked ──record()──▶ unlocked        (setting appended)
//! unlocked ──format()/parse()──▶ locked  (one-way, facade-wide)
//! locked   ──record()──▶ Error::ConfigurationLocked
//! ```
//!
//! Each thread builds its own engine on first use and replays the recorded
//! settings onto it. The lock transition and every append happen while the
//! settings mutex is held, so a thread that builds an engine always sees the
//! final list.

use crate::engine::NumberEngine;
use crate::error::{Error, Result};
use crate::setting::Setting;
use decimal_format::Number;
use parking_lot::Mutex;
use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use thread_local::ThreadLocal;
use tracing::{debug, trace, warn};

type Builder<E> = Box<dyn Fn() -> E + Send + Sync>;

/// Per-thread engines configured by a shared, replayable list of settings.
///
/// `E` is the engine, `S` the setting type accepted by [`record`](Self::record).
///
/// ## Example
///
/// ```rust
/// use decimal_format::{DecimalFormat, Number};
/// use threadsafe_format::{DeferredFormat, Error, NumberSetting};
///
/// let deferred: DeferredFormat<DecimalFormat, NumberSetting> =
///     DeferredFormat::with_builder(DecimalFormat::new);
/// deferred.record(NumberSetting::MaximumFractionDigits(1)).unwrap();
/// assert_eq!(deferred.format(&Number::from(2.25)).unwrap(), "2.2");
/// assert_eq!(
///     deferred.record(NumberSetting::GroupingUsed(false)),
///     Err(Error::ConfigurationLocked)
/// );
/// ```
pub struct DeferredFormat<E: Send, S> {
    build: Builder<E>,
    pending: Mutex<Vec<S>>,
    locked: AtomicBool,
    instances: ThreadLocal<RefCell<E>>,
    _setting: PhantomData<fn(S)>,
}

impl<E, S> DeferredFormat<E, S>
where
    E: NumberEngine,
    S: Setting<E>,
{
    /// Builds each thread's engine by calling `build`.
    pub fn with_builder<F>(build: F) -> Self
    where
        F: Fn() -> E + Send + Sync + 'static,
    {
        Self {
            build: Box::new(build),
            pending: Mutex::new(Vec::new()),
            locked: AtomicBool::new(false),
            instances: ThreadLocal::new(),
            _setting: PhantomData,
        }
    }

    /// Gives each thread its own clone of `prototype`.
    pub fn from_prototype(prototype: E) -> Self
    where
        E: Clone + Sync + 'static,
    {
        Self::with_builder(move || prototype.clone())
    }

    /// Appends `setting` to the replay list.
    ///
    /// ## Errors
    ///
    /// [`Error::ConfigurationLocked`] once any thread has formatted or parsed.
    /// Nothing is recorded in that case.
    pub fn record(&self, setting: S) -> Result<()> {
        let mut pending = self.pending.lock();
        if self.locked.load(Ordering::Acquire) {
            warn!(?setting, "rejected setting on a locked format");
            return Err(Error::ConfigurationLocked);
        }
        trace!(?setting, position = pending.len(), "recorded setting");
        pending.push(setting);
        Ok(())
    }

    /// Formats `value` with this thread's engine, locking the configuration.
    pub fn format(&self, value: &Number) -> Result<String> {
        let engine = self.instance();
        let formatted = engine.borrow_mut().format(value)?;
        Ok(formatted)
    }

    /// Parses `text` with this thread's engine, locking the configuration.
    pub fn parse(&self, text: &str) -> Result<Number> {
        let engine = self.instance();
        let parsed = engine.borrow_mut().parse(text)?;
        Ok(parsed)
    }

    /// Locks the configuration and returns a copy of this thread's engine.
    pub fn configured_engine(&self) -> E
    where
        E: Clone,
    {
        self.instance().borrow().clone()
    }

    /// Returns `true` after the first `format`, `parse` or
    /// `configured_engine` call on any thread.
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }

    /// Snapshot of the recorded settings, in replay order.
    pub fn pending(&self) -> Vec<S> {
        self.pending.lock().clone()
    }

    fn lock(&self) {
        if self.locked.load(Ordering::Acquire) {
            return;
        }
        let pending = self.pending.lock();
        if !self.locked.swap(true, Ordering::AcqRel) {
            debug!(settings = pending.len(), "format configuration locked");
        }
    }

    /// This thread's engine, built and configured on first access.
    fn instance(&self) -> &RefCell<E> {
        self.lock();
        self.instances.get_or(|| {
            let pending = self.pending.lock();
            let mut engine = (self.build)();
            for setting in pending.iter() {
                setting.apply(&mut engine);
            }
            debug!(
                thread = ?std::thread::current().id(),
                replayed = pending.len(),
                "built per-thread format instance"
            );
            RefCell::new(engine)
        })
    }
}

impl<E: Send, S: fmt::Debug> fmt::Debug for DeferredFormat<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredFormat")
            .field("pending", &*self.pending.lock())
            .field("locked", &self.locked.load(Ordering::Acquire))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
