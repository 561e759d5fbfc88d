//! Handler tables for keyed dispatch
//!
//! A handler table maps an action type key to the reducer responsible for
//! that type. Tables are built once, handed to [`muxn`](crate::muxn) and
//! never touched again.
//!
//! # Example
//!
//! ```
//! use mixn_core::{HandlerTable, TypedAction, handlers};
//!
//! type Op = TypedAction<&'static str, i64>;
//!
//! let by_builder: HandlerTable<&str, i64, Op> = HandlerTable::new()
//!     .on("inc", |state: i64, _: &Op| state + 1)
//!     .on("dec", |state: i64, _: &Op| state - 1);
//!
//! let by_macro: HandlerTable<&str, i64, Op> = handlers! {
//!     "inc" => |state: i64, _: &Op| state + 1,
//!     "dec" => |state: i64, _: &Op| state - 1,
//! };
//!
//! assert_eq!(by_builder.len(), by_macro.len());
//! ```

use crate::reducer::{BoxedReducer, Reducer};
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;

/// Mapping from action type key to the reducer handling it
///
/// Registering the same key twice keeps the last reducer.
pub struct HandlerTable<K, S, A> {
    handlers: HashMap<K, BoxedReducer<S, A>>,
}

impl<K, S, A> HandlerTable<K, S, A>
where
    K: Eq + Hash,
{
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register `reducer` for actions of type `key`
    #[must_use]
    pub fn on<R>(mut self, key: K, reducer: R) -> Self
    where
        R: Reducer<S, A> + Send + Sync + 'static,
    {
        self.insert(key, Box::new(reducer));
        self
    }

    /// Register an already boxed reducer, returning the one it replaces
    pub fn insert(&mut self, key: K, reducer: BoxedReducer<S, A>) -> Option<BoxedReducer<S, A>> {
        self.handlers.insert(key, reducer)
    }

    /// Whether a reducer is registered for `key`
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.handlers.contains_key(key)
    }

    /// Registered keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.handlers.keys()
    }
}

impl<K, S, A> HandlerTable<K, S, A> {
    /// Number of registered keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no key is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<K, S, A> Default for HandlerTable<K, S, A>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, S, A> fmt::Debug for HandlerTable<K, S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerTable")
            .field("keys", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<K, S, A> From<HashMap<K, BoxedReducer<S, A>>> for HandlerTable<K, S, A> {
    fn from(handlers: HashMap<K, BoxedReducer<S, A>>) -> Self {
        Self { handlers }
    }
}

impl<K, S, A> FromIterator<(K, BoxedReducer<S, A>)> for HandlerTable<K, S, A>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, BoxedReducer<S, A>)>>(iter: I) -> Self {
        Self {
            handlers: iter.into_iter().collect(),
        }
    }
}

impl<K, S, A> IntoIterator for HandlerTable<K, S, A> {
    type Item = (K, BoxedReducer<S, A>);
    type IntoIter = hash_map::IntoIter<K, BoxedReducer<S, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.handlers.into_iter()
    }
}
