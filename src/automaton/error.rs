//! Runtime errors.

use crate::core::Symbol;
use thiserror::Error;

/// Errors returned by the automaton runtime.
///
/// Every error leaves the run state exactly as it was before the failing call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AutomatonError {
    #[error(
        "Invalid character within input string, {symbol} is not listed as part of the allowing alphabet"
    )]
    InvalidAlphabetSymbol { symbol: Symbol },

    #[error("Invalid, no transition rules defined for event {symbol} from state {state}")]
    NoTransitionRule { symbol: Symbol, state: String },

    #[error(
        "no alphabet defined, use define_alphabet to define at least one acceptable input symbol"
    )]
    NoAlphabetDefined,

    #[error("no state defined, use define_states to define a minimum of two states")]
    NoStatesDefined,

    #[error(
        "no transition rules defined, use define_transitions to define at least one valid transition rule"
    )]
    NoTransitionDefined,

    #[error("transitions did not end in a final state")]
    NoFinalState,
}
