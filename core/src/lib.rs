//! # mixn Core
//!
//! Combinators for building a single reducer out of several smaller reducers
//! or handler tables.
//!
//! ## Core Concepts
//!
//! - **Reducer**: Pure function `(State, Action) → State`
//! - **Identity**: How a reducer's result is compared with its input state
//! - **Action**: Input to a reducer, optionally tagged with a type key
//! - **Handler table**: Mapping from action type key to the reducer handling it
//!
//! ## Combinators
//!
//! - [`mixn`] tries reducers in order until one returns a state that is not
//!   identical to its input
//! - [`muxn`] merges handler tables and dispatches on the action type key,
//!   later tables overriding earlier ones
//! - [`with_default_state`] substitutes a default for an absent state
//!
//! ## Example
//!
//! ```
//! use mixn_core::{Action, Reducer, TypedAction, mixn, with_default_state};
//!
//! type Op = Option<TypedAction<&'static str, f64>>;
//!
//! fn add(state: Option<f64>, action: &Op) -> Option<f64> {
//!     match (state, action.action_type(), action.as_ref().and_then(TypedAction::payload)) {
//!         (Some(value), Some(&"+"), Some(n)) => Some(value + n),
//!         _ => state,
//!     }
//! }
//!
//! fn multiply(state: Option<f64>, action: &Op) -> Option<f64> {
//!     match (state, action.action_type(), action.as_ref().and_then(TypedAction::payload)) {
//!         (Some(value), Some(&"*"), Some(n)) => Some(value * n),
//!         _ => state,
//!     }
//! }
//!
//! let zero = with_default_state(0.0);
//! let reduce = mixn![zero.wrap(add), zero.wrap(multiply)]?;
//!
//! let state = reduce.reduce(None, &None);
//! assert_eq!(state, Some(0.0));
//!
//! let state = reduce.reduce(state, &Some(TypedAction::with_payload("+", 3.0)));
//! let state = reduce.reduce(state, &Some(TypedAction::with_payload("*", 2.0)));
//! assert_eq!(state, Some(6.0));
//! # Ok::<(), mixn_core::ConfigurationError>(())
//! ```

/// Action trait and the ready-made [`TypedAction`] record
pub mod action;

/// Sequential-try and keyed-merge combinators
pub mod composition;

/// Default-state decorator
pub mod default_state;

/// Configuration errors raised while composing reducers
pub mod error;

/// Handler tables for keyed dispatch
pub mod handlers;

/// Identity comparison used to detect "no change"
pub mod identity;

/// Declarative macros for the variadic call forms
mod macros;

/// The Reducer trait and boxed reducers
pub mod reducer;

pub use action::{Action, TypedAction};
pub use composition::{Mixed, Muxed, mixn, muxn};
pub use default_state::{DefaultState, WithDefaultState, with_default_state};
pub use error::ConfigurationError;
pub use handlers::HandlerTable;
pub use identity::Identity;
pub use reducer::{BoxedReducer, Reducer, boxed};
