//! fsa: a deterministic finite state automaton library
//!
//! Callers define an alphabet of input symbols, a set of named states (each
//! carrying an output value and optionally marked terminal) and a transition
//! table keyed by `(state, symbol)`. Symbols are then fed one at a time; at the
//! end of input the automaton reports the label of the state it rests in.
//!
//! # Core Concepts
//!
//! - **Alphabet**: the symbols an automaton accepts
//! - **State**: a named node with an output value and a terminal flag
//! - **Transition rule**: `(source, trigger) -> destination`, last write wins
//! - **Run state**: current state, previous state and the transition log
//!
//! # Example
//!
//! ```rust
//! use fsa::automaton::{Automaton, AutomatonError};
//! use fsa::core::{State, StateValue};
//! use fsa::rules;
//!
//! let mut automaton: Automaton = Automaton::new();
//! automaton.define_alphabet(["0", "1"]);
//! automaton.define_states(
//!     "S0",
//!     vec![
//!         State::terminal("S0", StateValue::Integer(0)),
//!         State::terminal("S1", StateValue::Integer(1)),
//!         State::terminal("S2", StateValue::Integer(2)),
//!     ],
//! );
//! automaton.define_transitions(rules![
//!     ("S0", "0") => "S0",
//!     ("S0", "1") => "S1",
//!     ("S1", "0") => "S2",
//!     ("S1", "1") => "S0",
//!     ("S2", "0") => "S1",
//!     ("S2", "1") => "S2",
//! ]);
//!
//! automaton.validate().unwrap();
//! for symbol in ["1", "0", "1", "0"] {
//!     automaton.process(symbol).unwrap();
//! }
//! assert_eq!(automaton.final_state().unwrap(), "S1=1");
//!
//! assert_eq!(
//!     automaton.process("2"),
//!     Err(AutomatonError::InvalidAlphabetSymbol { symbol: "2".to_string() })
//! );
//! ```

pub mod audit;
pub mod automaton;
pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod definition;
pub mod sync;

// Re-export commonly used types
pub use crate::automaton::{Automaton, AutomatonError};
pub use crate::core::{State, StateValue, TransitionRule};
