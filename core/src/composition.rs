//! Reducer composition utilities
//!
//! This module provides two ways of composing reducers that share the same
//! state and action types:
//! - **`mixn`**: Try reducers in order until one changes the state
//! - **`muxn`**: Merge handler tables and dispatch on the action type key
//!
//! Both validate eagerly. An empty list is rejected when the composed
//! reducer is built, and the composed reducer itself never fails.
//!
//! # Examples
//!
//! ## Trying Reducers In Order
//!
//! ```
//! use mixn_core::{Reducer, mixn};
//!
//! #[derive(Clone, Copy)]
//! enum CounterAction {
//!     Increment,
//!     Double,
//! }
//!
//! fn increment(state: i32, action: &CounterAction) -> i32 {
//!     match action {
//!         CounterAction::Increment => state + 1,
//!         CounterAction::Double => state,
//!     }
//! }
//!
//! fn double(state: i32, action: &CounterAction) -> i32 {
//!     match action {
//!         CounterAction::Double => state * 2,
//!         CounterAction::Increment => state,
//!     }
//! }
//!
//! let reducer = mixn![increment, double]?;
//!
//! let state = reducer.reduce(1, &CounterAction::Increment);
//! let state = reducer.reduce(state, &CounterAction::Double);
//! assert_eq!(state, 4);
//! # Ok::<(), mixn_core::ConfigurationError>(())
//! ```
//!
//! ## Dispatching On The Action Type
//!
//! ```
//! use mixn_core::{Reducer, TypedAction, handlers, muxn};
//!
//! type Op = TypedAction<&'static str, i32>;
//!
//! let base = handlers! {
//!     "add" => |state: i32, action: &Op| state + action.payload().copied().unwrap_or(0),
//!     "reset" => |_: i32, _: &Op| 0,
//! };
//! let overrides = handlers! {
//!     "reset" => |_: i32, _: &Op| 100,
//! };
//!
//! let reducer = muxn![base, overrides]?;
//!
//! assert_eq!(reducer.reduce(1, &TypedAction::with_payload("add", 2)), 3);
//! assert_eq!(reducer.reduce(1, &TypedAction::new("reset")), 100);
//! assert_eq!(reducer.reduce(1, &TypedAction::new("unknown")), 1);
//! # Ok::<(), mixn_core::ConfigurationError>(())
//! ```
//!
//! Elements that are not reducers are rejected by the compiler:
//!
//! ```compile_fail
//! use mixn_core::mixn;
//!
//! let reducer = mixn![1, 2, 3];
//! ```
//!
//! So are handler tables that are not tables, and table values that are
//! not reducers:
//!
//! ```compile_fail
//! use mixn_core::muxn;
//!
//! let reducer = muxn![|state: i32, _: &()| state];
//! ```
//!
//! ```compile_fail
//! use mixn_core::{HandlerTable, TypedAction};
//!
//! let table: HandlerTable<&str, i32, TypedAction<&str>> = HandlerTable::new().on("add", 1);
//! ```

use crate::action::Action;
use crate::error::ConfigurationError;
use crate::handlers::HandlerTable;
use crate::identity::Identity;
use crate::reducer::{BoxedReducer, Reducer};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Composes reducers into one that tries each in turn until the state changes.
///
/// On every call the composed reducer hands each reducer, in order, the
/// same input state and action. The first result that is not
/// [`same_as`](Identity::same_as) the input is returned and the remaining
/// reducers are skipped. When no reducer changes the state, the last
/// reducer's result is returned.
///
/// The variadic form `mixn![r1, r2, ...]` boxes each element and calls
/// this function; both forms behave identically.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
///
/// # Errors
///
/// Returns [`ConfigurationError::NoReducers`] if `reducers` is empty.
///
/// # Examples
///
/// ```
/// use mixn_core::{BoxedReducer, Reducer, boxed, mixn};
///
/// let reducers: Vec<BoxedReducer<u8, char>> = vec![
///     boxed(|state: u8, action: &char| if *action == 'a' { state + 1 } else { state }),
///     boxed(|state: u8, action: &char| if *action == 'b' { state + 2 } else { state }),
/// ];
///
/// let reducer = mixn(reducers)?;
/// assert_eq!(reducer.reduce(0, &'b'), 2);
/// assert_eq!(reducer.reduce(0, &'z'), 0);
/// # Ok::<(), mixn_core::ConfigurationError>(())
/// ```
pub fn mixn<S, A, I>(reducers: I) -> Result<Mixed<S, A>, ConfigurationError>
where
    I: IntoIterator<Item = BoxedReducer<S, A>>,
{
    let mut reducers = reducers.into_iter();
    let Some(head) = reducers.next() else {
        return Err(ConfigurationError::NoReducers);
    };
    let tail: SmallVec<[BoxedReducer<S, A>; 4]> = reducers.collect();

    tracing::debug!(reducers = tail.len() + 1, "Composed sequential reducer");

    Ok(Mixed { head, tail })
}

/// A reducer that tries its reducers in order until the state changes.
///
/// Created by [`mixn`].
pub struct Mixed<S, A> {
    head: BoxedReducer<S, A>,
    tail: SmallVec<[BoxedReducer<S, A>; 4]>,
}

impl<S, A> Mixed<S, A> {
    /// Number of composed reducers
    #[must_use]
    pub fn reducer_count(&self) -> usize {
        self.tail.len() + 1
    }
}

impl<S, A> fmt::Debug for Mixed<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mixed")
            .field("reducers", &self.reducer_count())
            .finish()
    }
}

impl<S, A> Reducer<S, A> for Mixed<S, A>
where
    S: Identity + Clone,
{
    fn reduce(&self, state: S, action: &A) -> S {
        let mut next = self.head.reduce(state.clone(), action);

        for (position, reducer) in self.tail.iter().enumerate() {
            if !next.same_as(&state) {
                tracing::trace!(position, "State changed");
                return next;
            }
            next = reducer.reduce(state.clone(), action);
        }

        tracing::trace!(
            position = self.tail.len(),
            changed = !next.same_as(&state),
            "Tried all reducers"
        );
        next
    }
}

/// Merges handler tables into one reducer that dispatches on the action type.
///
/// Tables are merged once, here, in the order given: when two tables
/// register the same key, the later table wins. The composed reducer looks
/// up the action's [`action_type`](Action::action_type) and calls the
/// matching handler. Actions with no type key, or a key nobody handles,
/// leave the state untouched so the result composes with [`mixn`].
///
/// The variadic form `muxn![t1, t2, ...]` calls this function with the
/// same tables; both forms behave identically.
///
/// # Type Parameters
///
/// - `K`: The action type key
/// - `S`: The state type
/// - `A`: The action type
///
/// # Errors
///
/// Returns [`ConfigurationError::NoHandlers`] if `tables` is empty. Empty
/// tables within a non-empty list are accepted.
///
/// # Examples
///
/// ```
/// use mixn_core::{HandlerTable, Reducer, TypedAction, muxn};
///
/// type Op = TypedAction<u8>;
///
/// let first: HandlerTable<u8, &'static str, Op> = HandlerTable::new()
///     .on(1, |_: &'static str, _: &Op| "first");
/// let second: HandlerTable<u8, &'static str, Op> = HandlerTable::new()
///     .on(1, |_: &'static str, _: &Op| "second");
///
/// let reducer = muxn(vec![first, second])?;
/// assert_eq!(reducer.reduce("initial", &TypedAction::new(1)), "second");
/// assert_eq!(reducer.reduce("initial", &TypedAction::new(2)), "initial");
/// # Ok::<(), mixn_core::ConfigurationError>(())
/// ```
pub fn muxn<K, S, A, I>(tables: I) -> Result<Muxed<K, S, A>, ConfigurationError>
where
    K: Eq + Hash,
    I: IntoIterator,
    I::Item: Into<HandlerTable<K, S, A>>,
{
    let mut handlers = HashMap::new();
    let mut table_count = 0_usize;

    for table in tables {
        table_count += 1;
        handlers.extend(table.into());
    }

    if table_count == 0 {
        return Err(ConfigurationError::NoHandlers);
    }

    tracing::debug!(
        tables = table_count,
        handlers = handlers.len(),
        "Composed keyed reducer"
    );

    Ok(Muxed { handlers })
}

/// A reducer that dispatches on the action type key.
///
/// Created by [`muxn`].
pub struct Muxed<K, S, A> {
    handlers: HashMap<K, BoxedReducer<S, A>>,
}

impl<K, S, A> Muxed<K, S, A>
where
    K: Eq + Hash,
{
    /// Whether an action of type `key` reaches a handler
    #[must_use]
    pub fn handles(&self, key: &K) -> bool {
        self.handlers.contains_key(key)
    }

    /// Number of distinct keys after merging
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl<K: fmt::Debug, S, A> fmt::Debug for Muxed<K, S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Muxed")
            .field("keys", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<K, S, A> Reducer<S, A> for Muxed<K, S, A>
where
    K: Eq + Hash,
    A: Action<Type = K>,
{
    fn reduce(&self, state: S, action: &A) -> S {
        match action.action_type().and_then(|key| self.handlers.get(key)) {
            Some(handler) => {
                tracing::trace!("Dispatching to handler");
                handler.reduce(state, action)
            },
            None => {
                tracing::trace!("No handler, passing state through");
                state
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can unwrap
mod tests {
    use super::*;
    use crate::action::TypedAction;
    use crate::reducer::boxed;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    type Op = TypedAction<&'static str, i32>;

    fn payload(action: &Op) -> i32 {
        action.payload().copied().unwrap_or_default()
    }

    fn add(state: i32, action: &Op) -> i32 {
        if action.kind == "+" {
            state + payload(action)
        } else {
            state
        }
    }

    fn multiply(state: i32, action: &Op) -> i32 {
        if action.kind == "*" {
            state * payload(action)
        } else {
            state
        }
    }

    fn counting(calls: &Arc<AtomicUsize>) -> BoxedReducer<i32, Op> {
        let calls = Arc::clone(calls);
        boxed(move |state: i32, _: &Op| {
            calls.fetch_add(1, Ordering::SeqCst);
            state
        })
    }

    #[test]
    fn test_mixn_rejects_empty_list() {
        let result = mixn::<i32, Op, _>(Vec::new());
        assert_eq!(result.err(), Some(ConfigurationError::NoReducers));
    }

    #[test]
    fn test_mixn_returns_first_changed_state() {
        let reducer = mixn(vec![boxed(add), boxed(multiply)]).unwrap();

        assert_eq!(reducer.reduce(3, &Op::with_payload("+", 2)), 5);
        assert_eq!(reducer.reduce(3, &Op::with_payload("*", 2)), 6);
        assert_eq!(reducer.reduce(3, &Op::with_payload("/", 2)), 3);
    }

    #[test]
    fn test_mixn_skips_reducers_after_change() {
        let calls = Arc::new(AtomicUsize::new(0));
        let reducer = mixn(vec![boxed(add), counting(&calls)]).unwrap();

        let _ = reducer.reduce(0, &Op::with_payload("+", 1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let _ = reducer.reduce(0, &Op::with_payload("-", 1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_mixn_gives_every_reducer_the_input_state() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let recorder = {
            let seen = Arc::clone(&seen);
            move |state: i32, _: &Op| {
                seen.lock().unwrap().push(state);
                state
            }
        };
        let reducer = mixn(vec![boxed(recorder.clone()), boxed(recorder)]).unwrap();

        assert_eq!(reducer.reduce(7, &Op::new("noop")), 7);
        assert_eq!(*seen.lock().unwrap(), vec![7, 7]);
    }

    #[test]
    fn test_mixn_reports_reducer_count() {
        let reducer = mixn(vec![boxed(add), boxed(multiply), boxed(add)]).unwrap();
        assert_eq!(reducer.reducer_count(), 3);
        assert_eq!(format!("{reducer:?}"), "Mixed { reducers: 3 }");
    }

    #[test]
    fn test_muxn_rejects_empty_list() {
        let tables: Vec<HandlerTable<&str, i32, Op>> = Vec::new();
        let result = muxn(tables);
        assert_eq!(result.err(), Some(ConfigurationError::NoHandlers));
    }

    #[test]
    fn test_muxn_accepts_empty_table() {
        let reducer = muxn(vec![HandlerTable::<&str, i32, Op>::new()]).unwrap();
        assert_eq!(reducer.handler_count(), 0);
        assert_eq!(reducer.reduce(4, &Op::new("+")), 4);
    }

    #[test]
    fn test_muxn_last_table_wins() {
        let first = HandlerTable::new().on("+", add);
        let second = HandlerTable::new().on("+", |state: i32, _: &Op| state - 100);

        let reducer = muxn(vec![first, second]).unwrap();

        assert_eq!(reducer.reduce(0, &Op::with_payload("+", 1)), -100);
    }

    #[test]
    fn test_muxn_merges_disjoint_keys() {
        let first = HandlerTable::new().on("+", add);
        let second = HandlerTable::new().on("*", multiply);

        let reducer = muxn(vec![first, second]).unwrap();

        assert!(reducer.handles(&"+"));
        assert!(reducer.handles(&"*"));
        assert!(!reducer.handles(&"-"));
        assert_eq!(reducer.reduce(2, &Op::with_payload("+", 3)), 5);
        assert_eq!(reducer.reduce(2, &Op::with_payload("*", 3)), 6);
    }

    #[test]
    fn test_muxn_missing_action_passes_through() {
        let table: HandlerTable<&str, i32, Option<Op>> =
            HandlerTable::new().on("+", |state: i32, _: &Option<Op>| state + 1);
        let reducer = muxn(vec![table]).unwrap();

        assert_eq!(reducer.reduce(9, &None), 9);
        assert_eq!(reducer.reduce(9, &Some(Op::new("+"))), 10);
    }

    #[test]
    fn test_muxn_composes_inside_mixn() {
        let calls = Arc::new(AtomicUsize::new(0));
        let keyed = muxn(vec![HandlerTable::new().on("+", add)]).unwrap();
        let reducer = mixn(vec![boxed(keyed), counting(&calls), boxed(multiply)]).unwrap();

        assert_eq!(reducer.reduce(2, &Op::with_payload("+", 3)), 5);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(reducer.reduce(2, &Op::with_payload("*", 3)), 6);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
