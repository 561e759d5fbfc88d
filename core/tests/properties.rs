//! Property tests for the reducer combinators

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::float_cmp)] // Payloads keep the arithmetic exact

use mixn_core::{Action, HandlerTable, Reducer, boxed, handlers, mixn, muxn};
use mixn_testing::properties::{
    ARITHMETIC_KINDS, ArithmeticAction, arb_action_sequence, arb_arithmetic_action,
    arb_maybe_action, arb_payload,
};
use proptest::prelude::*;

fn amount(action: &ArithmeticAction) -> f64 {
    action.payload().copied().unwrap_or_default()
}

fn add(state: f64, action: &ArithmeticAction) -> f64 {
    if action.kind == "+" { state + amount(action) } else { state }
}

fn subtract(state: f64, action: &ArithmeticAction) -> f64 {
    if action.kind == "-" { state - amount(action) } else { state }
}

fn multiply(state: f64, action: &ArithmeticAction) -> f64 {
    if action.kind == "*" { state * amount(action) } else { state }
}

fn divide(state: f64, action: &ArithmeticAction) -> f64 {
    if action.kind == "/" { state / amount(action) } else { state }
}

fn apply_all<R>(reducer: &R, initial: f64, actions: &[ArithmeticAction]) -> f64
where
    R: Reducer<f64, ArithmeticAction>,
{
    actions
        .iter()
        .fold(initial, |state, action| reducer.reduce(state, action))
}

fn base_table() -> HandlerTable<&'static str, f64, ArithmeticAction> {
    handlers! { "+" => add, "-" => subtract, "*" => multiply }
}

fn override_table() -> HandlerTable<&'static str, f64, ArithmeticAction> {
    handlers! { "*" => |state: f64, _: &ArithmeticAction| -state, "/" => divide }
}

proptest! {
    #[test]
    fn test_mixn_forms_are_equivalent(initial in arb_payload(), actions in arb_action_sequence(16)) {
        let variadic = mixn![add, subtract, multiply, divide].unwrap();
        let sequence = mixn(vec![boxed(add), boxed(subtract), boxed(multiply), boxed(divide)]).unwrap();

        prop_assert_eq!(
            apply_all(&variadic, initial, &actions),
            apply_all(&sequence, initial, &actions)
        );
    }

    #[test]
    fn test_muxn_forms_are_equivalent(initial in arb_payload(), actions in arb_action_sequence(16)) {
        let variadic = muxn![base_table(), override_table()].unwrap();
        let sequence = muxn(vec![base_table(), override_table()]).unwrap();

        prop_assert_eq!(
            apply_all(&variadic, initial, &actions),
            apply_all(&sequence, initial, &actions)
        );
    }

    #[test]
    fn test_mixn_and_muxn_agree_on_disjoint_handlers(initial in arb_payload(), actions in arb_action_sequence(16)) {
        let tried = mixn![add, subtract, multiply, divide].unwrap();
        let keyed = muxn![handlers! { "+" => add, "-" => subtract, "*" => multiply, "/" => divide }].unwrap();

        prop_assert_eq!(
            apply_all(&tried, initial, &actions),
            apply_all(&keyed, initial, &actions)
        );
    }

    #[test]
    fn test_muxn_last_writer_wins(state in arb_payload(), action in arb_arithmetic_action()) {
        let merged = muxn![base_table(), override_table()].unwrap();
        let overrides = override_table();
        let base = base_table();

        let expected = match action.action_type() {
            Some(kind) if overrides.contains_key(kind) => {
                muxn![override_table()].unwrap().reduce(state, &action)
            },
            Some(kind) if base.contains_key(kind) => {
                muxn![base_table()].unwrap().reduce(state, &action)
            },
            _ => state,
        };

        prop_assert_eq!(merged.reduce(state, &action), expected);
    }

    #[test]
    fn test_muxn_unhandled_action_passes_through(state in arb_payload(), action in arb_maybe_action()) {
        let merged = muxn![handlers! {
            "+" => |state: f64, action: &Option<ArithmeticAction>| {
                state + action.as_ref().map_or(0.0, amount)
            },
        }]
        .unwrap();

        let handled = action.action_type() == Some(&"+");
        let next = merged.reduce(state, &action);

        prop_assert_eq!(next.to_bits() == state.to_bits(), !handled);
    }

    #[test]
    fn test_mixn_result_is_first_change(state in arb_payload(), action in arb_arithmetic_action()) {
        let reducer = mixn![add, subtract, multiply, divide].unwrap();
        let next = reducer.reduce(state, &action);

        let expected = match action.kind {
            "+" => add(state, &action),
            "-" => subtract(state, &action),
            "*" => multiply(state, &action),
            "/" => divide(state, &action),
            _ => state,
        };
        prop_assert_eq!(next, expected);
        prop_assert!(ARITHMETIC_KINDS.contains(&action.kind) || next.to_bits() == state.to_bits());
    }
}
