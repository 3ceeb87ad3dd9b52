//! Core automaton data model.
//!
//! This module contains the plain data the runtime is built from:
//! - Input symbols and the `Alphabet`
//! - Named `State` records with output values
//! - `TransitionRule` triples
//! - The append-only `TransitionLog`

mod alphabet;
mod history;
mod rule;
mod state;

pub use alphabet::{Alphabet, Symbol};
pub use history::{TransitionLog, TransitionRecord};
pub use rule::TransitionRule;
pub use state::{State, StateValue};
