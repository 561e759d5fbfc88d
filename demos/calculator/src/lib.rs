//! # Calculator Demo
//!
//! A four-operation calculator assembled from small reducers.
//!
//! This demo showcases:
//! - Sequential try with [`mixn`]: each reducer handles a few operators and
//!   passes everything else through
//! - Keyed merge with [`muxn`]: operators mapped straight to their reducer,
//!   with a later table overriding `+`
//! - [`with_default_state`]: the calculator starts at `0` when called with no
//!   state and no action
//!
//! ## Example
//!
//! ```
//! use calculator::{Operator, operation, sequential_calculator};
//! use mixn_core::Reducer;
//!
//! let calculator = sequential_calculator()?;
//!
//! let state = calculator.reduce(None, &None);
//! let state = calculator.reduce(state, &operation(Operator::Add, 2.0));
//! let state = calculator.reduce(state, &operation(Operator::Multiply, 4.0));
//! assert_eq!(state, Some(8.0));
//! # Ok::<(), mixn_core::ConfigurationError>(())
//! ```

use mixn_core::{
    Action, ConfigurationError, Mixed, Muxed, Reducer, TypedAction, WithDefaultState, handlers,
    mixn, muxn, with_default_state,
};
use std::fmt;

/// Calculator operators, used as the action type key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Add the payload
    Add,
    /// Subtract the payload
    Subtract,
    /// Multiply by the payload
    Multiply,
    /// Divide by the payload
    Divide,
}

impl Operator {
    /// All operators, in display order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// The operator's symbol
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Parse an operator from its symbol
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Calculator state; `None` until the calculator is initialized
pub type CalculatorState = Option<f64>;

/// Calculator action; `None` is the initialization call
pub type CalculatorAction = Option<TypedAction<Operator, f64>>;

/// The keyed calculator: a handler merge wrapped with a zero default
pub type KeyedCalculator =
    WithDefaultState<f64, Muxed<Operator, CalculatorState, CalculatorAction>>;

/// Build an operation action
#[must_use]
pub const fn operation(operator: Operator, operand: f64) -> CalculatorAction {
    Some(TypedAction::with_payload(operator, operand))
}

fn operand(action: &CalculatorAction) -> f64 {
    action
        .as_ref()
        .and_then(TypedAction::payload)
        .copied()
        .unwrap_or_default()
}

/// Handles `+` and `-`
#[must_use]
pub fn add_subtract(state: CalculatorState, action: &CalculatorAction) -> CalculatorState {
    let Some(value) = state else {
        return state;
    };
    match action.action_type() {
        Some(Operator::Add) => Some(value + operand(action)),
        Some(Operator::Subtract) => Some(value - operand(action)),
        _ => state,
    }
}

/// Handles `*`
#[must_use]
pub fn multiply(state: CalculatorState, action: &CalculatorAction) -> CalculatorState {
    let Some(value) = state else {
        return state;
    };
    match action.action_type() {
        Some(Operator::Multiply) => Some(value * operand(action)),
        _ => state,
    }
}

/// Handles `+` (adding twice the operand) and `/`
///
/// Placed last in the sequential calculator, its `+` is never reached there.
/// In the keyed calculator its table comes last and takes over `+`.
#[must_use]
pub fn double_add_divide(state: CalculatorState, action: &CalculatorAction) -> CalculatorState {
    let Some(value) = state else {
        return state;
    };
    match action.action_type() {
        Some(Operator::Add) => Some(value + operand(action) * 2.0),
        Some(Operator::Divide) => Some(value / operand(action)),
        _ => state,
    }
}

/// Compose the calculator by trying each reducer in turn
///
/// # Errors
///
/// Never fails in practice; the reducer list is non-empty.
pub fn sequential_calculator() -> Result<Mixed<CalculatorState, CalculatorAction>, ConfigurationError>
{
    let zero = with_default_state(0.0);
    mixn![
        zero.wrap(add_subtract),
        zero.wrap(multiply),
        zero.wrap(double_add_divide),
    ]
}

/// Compose the calculator from handler tables keyed by operator
///
/// # Errors
///
/// Never fails in practice; the table list is non-empty.
pub fn keyed_calculator() -> Result<KeyedCalculator, ConfigurationError> {
    let merged = muxn![
        handlers! { Operator::Add => add_subtract, Operator::Subtract => add_subtract },
        handlers! { Operator::Multiply => multiply },
        handlers! { Operator::Add => double_add_divide, Operator::Divide => double_add_divide },
    ]?;
    Ok(with_default_state(0.0).wrap(merged))
}

/// Initialize `calculator` and feed it `actions`, collecting every state
///
/// The first entry is the initialized state; each following entry is the
/// state after the corresponding action.
#[must_use]
pub fn run<R>(calculator: &R, actions: &[CalculatorAction]) -> Vec<CalculatorState>
where
    R: Reducer<CalculatorState, CalculatorAction>,
{
    let initial = calculator.reduce(None, &None);
    tracing::debug!(state = ?initial, "Calculator initialized");

    let mut states = Vec::with_capacity(actions.len() + 1);
    states.push(initial);

    let mut state = initial;
    for action in actions {
        state = calculator.reduce(state, action);
        tracing::debug!(
            operator = ?action.action_type(),
            operand = operand(action),
            state = ?state,
            "Applied operation"
        );
        states.push(state);
    }

    states
}
