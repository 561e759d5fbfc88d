//! Calculator demo binary
//!
//! Runs the same operations through the sequential and the keyed calculator
//! and prints every intermediate state.

use calculator::{Operator, keyed_calculator, operation, run, sequential_calculator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calculator=debug,mixn_core=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Calculator Demo: Composing Reducers ===\n");

    let steps = [
        (Operator::Add, 2.0),
        (Operator::Subtract, 3.0),
        (Operator::Multiply, 4.0),
        (Operator::Divide, 5.0),
    ];
    let actions: Vec<_> = steps
        .iter()
        .map(|&(operator, operand)| operation(operator, operand))
        .collect();

    println!(">>> Sequential try (mixn)");
    let sequential = sequential_calculator()?;
    print_states(&steps, &run(&sequential, &actions));

    println!("\n>>> Keyed merge (muxn), last table redefines +");
    let keyed = keyed_calculator()?;
    print_states(&steps, &run(&keyed, &actions));

    println!("\n=== Demo Complete ===");
    println!("\nKey concepts demonstrated:");
    println!("  • mixn: the first reducer that changes the state wins");
    println!("  • muxn: operators dispatch to a handler; later tables override earlier ones");
    println!("  • with_default_state: calling with no state starts from 0");

    Ok(())
}

fn print_states(steps: &[(Operator, f64)], states: &[Option<f64>]) {
    let Some((initial, rest)) = states.split_first() else {
        return;
    };
    println!("  initial: {}", format_state(*initial));
    for ((operator, operand), state) in steps.iter().zip(rest) {
        println!("  {operator} {operand} -> {}", format_state(*state));
    }
}

fn format_state(state: Option<f64>) -> String {
    state.map_or_else(|| String::from("(none)"), |value| value.to_string())
}
