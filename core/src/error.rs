//! Error types for reducer composition
//!
//! Composition is validated eagerly: a misconfigured combinator fails when
//! it is built, never when the composed reducer is later called. Element
//! shapes (a reducer where a reducer is expected, a handler table where a
//! table is expected) are checked by the compiler through the `Reducer` and
//! `Into<HandlerTable>` bounds, which leaves emptiness as the only runtime
//! check.

use thiserror::Error;

/// Errors raised while composing reducers
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// `mixn` was given an empty reducer list
    #[error("The reducers list needs at least one function")]
    NoReducers,

    /// `muxn` was given an empty handler table list
    #[error("The handlers list needs at least one function")]
    NoHandlers,
}
