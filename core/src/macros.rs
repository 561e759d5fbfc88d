//! Declarative macros for the variadic call forms
//!
//! These expand into the sequence forms ([`mixn`](crate::mixn),
//! [`muxn`](crate::muxn)), so `mixn![a, b]` and `mixn(vec![boxed(a), boxed(b)])`
//! are the same composition.

/// Compose reducers with [`mixn`](crate::mixn), boxing each element
///
/// # Example
///
/// ```rust
/// use mixn_core::{Reducer, mixn};
///
/// fn inc(state: i32, _: &()) -> i32 {
///     state + 1
/// }
///
/// let reducer = mixn![inc, |state: i32, _: &()| state * 10]?;
/// assert_eq!(reducer.reduce(1, &()), 2);
/// # Ok::<(), mixn_core::ConfigurationError>(())
/// ```
#[macro_export]
macro_rules! mixn {
    ($($reducer:expr),* $(,)?) => {
        $crate::mixn(::std::vec![$($crate::boxed($reducer)),*])
    };
}

/// Compose handler tables with [`muxn`](crate::muxn)
///
/// Each element may be a [`HandlerTable`](crate::HandlerTable) or anything
/// that converts into one.
///
/// # Example
///
/// ```rust
/// use mixn_core::{Reducer, TypedAction, handlers, muxn};
///
/// type Op = TypedAction<char>;
///
/// let reducer = muxn![
///     handlers! { 'i' => |state: i32, _: &Op| state + 1 },
///     handlers! { 'd' => |state: i32, _: &Op| state - 1 },
/// ]?;
/// assert_eq!(reducer.reduce(0, &TypedAction::new('d')), -1);
/// # Ok::<(), mixn_core::ConfigurationError>(())
/// ```
#[macro_export]
macro_rules! muxn {
    () => {
        $crate::muxn(::std::vec::Vec::<$crate::HandlerTable<_, _, _>>::new())
    };
    ($($table:expr),+ $(,)?) => {
        $crate::muxn(::std::vec![$($crate::HandlerTable::from($table)),*])
    };
}

/// Build a [`HandlerTable`](crate::HandlerTable) from `key => reducer` pairs
///
/// A repeated key keeps the last reducer.
///
/// # Example
///
/// ```rust
/// use mixn_core::{HandlerTable, TypedAction, handlers};
///
/// type Op = TypedAction<&'static str>;
///
/// let table: HandlerTable<&str, u8, Op> = handlers! {
///     "inc" => |state: u8, _: &Op| state + 1,
///     "inc" => |state: u8, _: &Op| state + 2,
/// };
/// assert_eq!(table.len(), 1);
/// ```
#[macro_export]
macro_rules! handlers {
    ($($key:expr => $reducer:expr),* $(,)?) => {
        $crate::HandlerTable::new()$(.on($key, $reducer))*
    };
}
