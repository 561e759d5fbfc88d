//! Actions and their type keys
//!
//! The keyed-merge combinator only ever looks at an action's type key.
//! Application action enums implement [`Action`] directly; the generic
//! [`TypedAction`] record covers the conventional `{ type, payload }` shape.
//!
//! # Example
//!
//! ```
//! use mixn_core::Action;
//!
//! enum TodoAction {
//!     Add(String),
//!     Clear,
//!     Noop,
//! }
//!
//! impl Action for TodoAction {
//!     type Type = &'static str;
//!
//!     fn action_type(&self) -> Option<&Self::Type> {
//!         match self {
//!             TodoAction::Add(_) => Some(&"todo/add"),
//!             TodoAction::Clear => Some(&"todo/clear"),
//!             TodoAction::Noop => None,
//!         }
//!     }
//! }
//!
//! assert_eq!(TodoAction::Clear.action_type(), Some(&"todo/clear"));
//! assert_eq!(TodoAction::Noop.action_type(), None);
//! ```

use std::hash::Hash;

/// An input to a reducer that may carry a type key
pub trait Action {
    /// The key handlers are registered under
    type Type: Eq + Hash;

    /// The type key of this action
    ///
    /// `None` means the action carries no type key; keyed dispatch then
    /// finds no handler and leaves the state untouched.
    fn action_type(&self) -> Option<&Self::Type>;
}

/// A missing action has no type key
impl<A: Action> Action for Option<A> {
    type Type = A::Type;

    fn action_type(&self) -> Option<&Self::Type> {
        self.as_ref().and_then(Action::action_type)
    }
}

/// The conventional action record: a type key plus an optional payload
///
/// # Example
///
/// ```
/// use mixn_core::{Action, TypedAction};
///
/// let action = TypedAction::with_payload("+", 2.0);
/// assert_eq!(action.action_type(), Some(&"+"));
/// assert_eq!(action.payload(), Some(&2.0));
///
/// let bare: TypedAction<&str, f64> = TypedAction::new("reset");
/// assert_eq!(bare.payload(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypedAction<K, P = ()> {
    /// Type key used for dispatch
    pub kind: K,
    /// Data consumed by reducer bodies
    pub payload: Option<P>,
}

impl<K, P> TypedAction<K, P> {
    /// Create an action without a payload
    #[must_use]
    pub const fn new(kind: K) -> Self {
        Self {
            kind,
            payload: None,
        }
    }

    /// Create an action carrying a payload
    #[must_use]
    pub const fn with_payload(kind: K, payload: P) -> Self {
        Self {
            kind,
            payload: Some(payload),
        }
    }

    /// The payload, if any
    #[must_use]
    pub const fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }
}

impl<K: Eq + Hash, P> Action for TypedAction<K, P> {
    type Type = K;

    fn action_type(&self) -> Option<&K> {
        Some(&self.kind)
    }
}
