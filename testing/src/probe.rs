//! Call probes for observing reducer invocation order
//!
//! Combinators decide which reducers run and in which order. A [`CallLog`]
//! records every call made through the probes it hands out, so tests can
//! assert that a reducer ran (or was skipped) without changing what it
//! returns.

#![allow(clippy::unwrap_used)] // Mutex poison is unrecoverable in tests
#![allow(clippy::missing_panics_doc)] // Only panics on a poisoned mutex

use mixn_core::Reducer;
use std::sync::{Arc, Mutex};

/// Shared, ordered record of probe invocations
///
/// # Example
///
/// ```
/// use mixn_core::Reducer;
/// use mixn_testing::CallLog;
///
/// let log = CallLog::new();
/// let probed = log.probe("double", |state: i32, _: &()| state * 2);
///
/// assert_eq!(probed.reduce(2, &()), 4);
/// assert_eq!(log.calls(), vec!["double"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl CallLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `reducer` so that each call is recorded under `name`
    #[must_use]
    pub fn probe<R>(&self, name: &'static str, reducer: R) -> Probe<R> {
        Probe {
            name,
            reducer,
            log: self.clone(),
        }
    }

    /// A reducer that records `name` and returns its input state
    #[must_use]
    pub fn passthrough<S, A>(&self, name: &'static str) -> Probe<fn(S, &A) -> S> {
        let reducer: fn(S, &A) -> S = |state, _| state;
        self.probe(name, reducer)
    }

    /// Names of probes called so far, in call order
    #[must_use]
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    /// How many times the probe named `name` was called
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| **call == name)
            .count()
    }

    /// Forget all recorded calls
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }
}

/// A reducer that records its calls in a [`CallLog`] before delegating
///
/// Created by [`CallLog::probe`].
#[derive(Debug, Clone)]
pub struct Probe<R> {
    name: &'static str,
    reducer: R,
    log: CallLog,
}

impl<S, A, R> Reducer<S, A> for Probe<R>
where
    R: Reducer<S, A>,
{
    fn reduce(&self, state: S, action: &A) -> S {
        self.log.record(self.name);
        self.reducer.reduce(state, action)
    }
}
