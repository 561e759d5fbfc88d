//! Property-based testing utilities
//!
//! Strategies for the arithmetic actions used throughout the combinator
//! tests. Payloads are small non-zero integers carried as `f64`, so sums,
//! products and quotients stay exactly comparable across reducers.

use mixn_core::TypedAction;
use proptest::prelude::*;

/// The arithmetic action record
pub type ArithmeticAction = TypedAction<&'static str, f64>;

/// Type keys handled by the arithmetic reducers
pub const ARITHMETIC_KINDS: [&str; 4] = ["+", "-", "*", "/"];

/// One of the handled arithmetic type keys
pub fn arb_arithmetic_kind() -> impl Strategy<Value = &'static str> {
    prop::sample::select(ARITHMETIC_KINDS.to_vec())
}

/// A handled type key or one no reducer knows about
pub fn arb_any_kind() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        4 => arb_arithmetic_kind(),
        1 => prop::sample::select(vec!["%", "noop"]),
    ]
}

/// A small non-zero payload
pub fn arb_payload() -> impl Strategy<Value = f64> {
    (-100_i32..=100)
        .prop_filter("payload must be non-zero", |n| *n != 0)
        .prop_map(f64::from)
}

/// An arithmetic action, possibly of an unhandled type
pub fn arb_arithmetic_action() -> impl Strategy<Value = ArithmeticAction> {
    (arb_any_kind(), arb_payload()).prop_map(|(kind, payload)| TypedAction::with_payload(kind, payload))
}

/// An arithmetic action or no action at all
pub fn arb_maybe_action() -> impl Strategy<Value = Option<ArithmeticAction>> {
    prop::option::of(arb_arithmetic_action())
}

/// A sequence of up to `max_len` actions
pub fn arb_action_sequence(max_len: usize) -> impl Strategy<Value = Vec<ArithmeticAction>> {
    prop::collection::vec(arb_arithmetic_action(), 0..=max_len)
}
