//! Identity comparison for "did the state change" detection
//!
//! The sequential-try combinator never compares states structurally. Shared
//! pointers compare by address, so a reducer that builds a new, value-equal
//! state still counts as a change. Plain value types such as numbers compare
//! by value, which is the only identity they have.
//!
//! # Example
//!
//! ```
//! use mixn_core::Identity;
//! use std::sync::Arc;
//!
//! let state = Arc::new(vec![1, 2, 3]);
//! let same = Arc::clone(&state);
//! let copy = Arc::new(vec![1, 2, 3]);
//!
//! assert!(state.same_as(&same));
//! assert!(!state.same_as(&copy));
//! ```

use std::rc::Rc;
use std::sync::Arc;

/// Identity equality between two states
///
/// Implement this for your own state types only when their notion of
/// identity is not pointer identity. Prefer wrapping compound state in
/// [`Arc`] so that it compares by reference.
pub trait Identity {
    /// Whether `self` and `other` are the same underlying value
    fn same_as(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Identity for Arc<T> {
    fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for &T {
    fn same_as(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

impl<T: Identity> Identity for Option<T> {
    fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.same_as(b),
            _ => false,
        }
    }
}

macro_rules! value_identity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identity for $ty {
                #[allow(clippy::float_cmp)]
                fn same_as(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

value_identity!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
);
