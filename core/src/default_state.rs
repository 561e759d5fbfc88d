//! Default-state decorator
//!
//! An absent state is modeled as `None`. Wrapping a reducer with a default
//! makes it substitute that default before delegating, so a store can be
//! initialized by calling the reducer once with no state at all.
//!
//! # Example
//!
//! ```
//! use mixn_core::{Reducer, with_default_state};
//!
//! fn count(state: Option<u32>, _action: &()) -> Option<u32> {
//!     state.map(|n| n + 1)
//! }
//!
//! let reducer = with_default_state(10).wrap(count);
//!
//! assert_eq!(reducer.reduce(None, &()), Some(11));
//! assert_eq!(reducer.reduce(Some(1), &()), Some(2));
//! ```

use crate::reducer::Reducer;

/// Create a decorator that substitutes `default` for an absent state
///
/// This is the first stage of a two-stage factory: the returned
/// [`DefaultState`] wraps any number of reducers with
/// [`wrap`](DefaultState::wrap). The default is captured once and handed
/// out by [`Clone`], so an `Arc` default is shared rather than copied.
#[must_use]
pub const fn with_default_state<T>(default: T) -> DefaultState<T> {
    DefaultState { default }
}

/// A captured default state, ready to wrap reducers
///
/// Created by [`with_default_state`].
#[derive(Debug, Clone)]
pub struct DefaultState<T> {
    default: T,
}

impl<T: Clone> DefaultState<T> {
    /// Wrap `reducer` so that it never sees an absent state
    #[must_use]
    pub fn wrap<R>(&self, reducer: R) -> WithDefaultState<T, R> {
        WithDefaultState::new(self.default.clone(), reducer)
    }
}

/// A reducer that substitutes a default for an absent state.
///
/// Has the same signature as the reducer it wraps.
#[derive(Debug, Clone)]
pub struct WithDefaultState<T, R> {
    default: T,
    reducer: R,
}

impl<T, R> WithDefaultState<T, R> {
    /// Wrap `reducer` with `default`
    #[must_use]
    pub const fn new(default: T, reducer: R) -> Self {
        Self { default, reducer }
    }

    /// The state substituted when none is given
    #[must_use]
    pub const fn default_state(&self) -> &T {
        &self.default
    }
}

impl<T, A, R> Reducer<Option<T>, A> for WithDefaultState<T, R>
where
    T: Clone,
    R: Reducer<Option<T>, A>,
{
    fn reduce(&self, state: Option<T>, action: &A) -> Option<T> {
        let state = state.or_else(|| Some(self.default.clone()));
        self.reducer.reduce(state, action)
    }
}
