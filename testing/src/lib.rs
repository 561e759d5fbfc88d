//! # mixn Testing
//!
//! Testing utilities and helpers for mixn reducer combinators.
//!
//! This crate provides:
//! - A Given-When-Then harness for reducers ([`ReducerTest`])
//! - Call probes that record which reducers ran, and in what order ([`CallLog`])
//! - Property-based testing strategies for arithmetic actions
//! - Tracing setup for tests
//!
//! ## Example
//!
//! ```
//! use mixn_core::mixn;
//! use mixn_testing::{CallLog, ReducerTest};
//!
//! let log = CallLog::new();
//! let reducer = mixn![
//!     log.passthrough::<i32, ()>("first"),
//!     log.probe("second", |state: i32, _: &()| state + 1),
//! ]?;
//!
//! ReducerTest::new(reducer)
//!     .given_state(1)
//!     .when_action(())
//!     .then_state(|state| assert_eq!(*state, 2))
//!     .run();
//!
//! assert_eq!(log.calls(), vec!["first", "second"]);
//! # Ok::<(), mixn_core::ConfigurationError>(())
//! ```


/// Call probes for observing reducer invocation order
pub mod probe;

/// Property-based testing utilities using proptest
pub mod properties;

/// Test helpers and utilities
pub mod helpers {
    use tracing_subscriber::EnvFilter;

    /// Install a tracing subscriber that writes through the test harness
    ///
    /// Honors `RUST_LOG`, defaulting to `mixn_core=trace`. Safe to call from
    /// every test: only the first call installs the subscriber.
    pub fn init_test_tracing() {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mixn_core=trace"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use helpers::init_test_tracing;
pub use probe::{CallLog, Probe};
pub use reducer_test::{ReducerTest, assertions};
