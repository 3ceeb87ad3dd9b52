//! The automaton runtime.
//!
//! Owns the alphabet, the state map and the transition table, plus the run
//! state (current state, previous state and transition log).
//!
//! # Key Concepts
//!
//! - **Setup**: `define_alphabet`, `define_states` and `define_transitions`
//!   are additive and never fail
//! - **Step**: `process` consumes one symbol or returns an `AutomatonError`
//!   without changing the run
//! - **Readiness**: `validate` checks only that the three tables are populated
//! - **Result**: `final_state` reports `"<name>=<value>"` for a terminal state

mod error;
mod machine;

pub use error::AutomatonError;
pub use machine::{Automaton, MIN_STATES};
