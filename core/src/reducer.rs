//! The Reducer trait - core abstraction for state transitions
//!
//! Reducers are pure functions: `(State, Action) → State`. Any function or
//! closure with that shape is a reducer through the blanket implementation,
//! so the combinators accept plain `fn` items, closures and the composed
//! reducers they produce interchangeably.
//!
//! # Example
//!
//! ```
//! use mixn_core::Reducer;
//!
//! fn double(state: i64, _action: &()) -> i64 {
//!     state * 2
//! }
//!
//! assert_eq!(double.reduce(21, &()), 42);
//! ```

/// A pure state transition
///
/// # Type Parameters
///
/// - `S`: The state this reducer operates on
/// - `A`: The action type this reducer processes
///
/// Reducers must not mutate state that is shared with their input. The
/// sequential-try combinator compares a reducer's result with its input by
/// [`Identity`](crate::Identity), so a reducer that hands back its input
/// means "no change".
pub trait Reducer<S, A> {
    /// Reduce an action into the next state
    ///
    /// # Arguments
    ///
    /// - `state`: The current state, owned
    /// - `action`: The action to process
    ///
    /// # Returns
    ///
    /// The next state. Returning `state` itself signals that this reducer
    /// did not handle the action.
    fn reduce(&self, state: S, action: &A) -> S;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(S, &A) -> S,
{
    fn reduce(&self, state: S, action: &A) -> S {
        self(state, action)
    }
}

/// A type-erased reducer that can be shared across threads
pub type BoxedReducer<S, A> = Box<dyn Reducer<S, A> + Send + Sync>;

/// Box a reducer for use in a reducer list or handler table
///
/// This is what the `mixn!` and `handlers!` macros call on each element.
///
/// # Example
///
/// ```
/// use mixn_core::{BoxedReducer, boxed};
///
/// let reducers: Vec<BoxedReducer<u32, ()>> = vec![
///     boxed(|state: u32, _: &()| state + 1),
///     boxed(|state: u32, _: &()| state),
/// ];
/// assert_eq!(reducers.len(), 2);
/// ```
#[must_use]
pub fn boxed<S, A, R>(reducer: R) -> BoxedReducer<S, A>
where
    R: Reducer<S, A> + Send + Sync + 'static,
{
    Box::new(reducer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn increment(state: i32, _action: &()) -> i32 {
        state + 1
    }

    #[test]
    fn test_fn_item_is_reducer() {
        assert_eq!(increment.reduce(1, &()), 2);
    }

    #[test]
    fn test_closure_is_reducer() {
        let step = 5;
        let add_step = move |state: i32, _action: &()| state + step;
        assert_eq!(add_step.reduce(1, &()), 6);
    }

    #[test]
    fn test_boxed_reducer_dispatches_through_trait_object() {
        let reducer: BoxedReducer<i32, ()> = boxed(increment);
        assert_eq!(reducer.reduce(41, &()), 42);
    }

    #[test]
    fn test_action_is_passed_through() {
        let reducer = |state: Vec<&'static str>, action: &&'static str| {
            let mut next = state;
            next.push(*action);
            next
        };
        assert_eq!(reducer.reduce(vec!["a"], &"b"), vec!["a", "b"]);
    }
}
