//! Serializable automaton definitions.
//!
//! A definition is the setup half of an automaton (alphabet, initial state,
//! states and rules) without any run state. Definitions load from JSON:
//!
//! ```json
//! {
//!   "alphabet": ["0", "1"],
//!   "initial": "S0",
//!   "states": [
//!     { "name": "S0", "value": 0, "final": true },
//!     { "name": "S1", "value": 1, "final": true }
//!   ],
//!   "transitions": [
//!     { "source": "S0", "destination": "S1", "trigger": "1" }
//!   ]
//! }
//! ```

use crate::automaton::Automaton;
use crate::core::{State, StateValue, Symbol, TransitionRule};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod error;

pub use error::DefinitionError;

/// Setup data for an [`Automaton`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AutomatonDefinition<V = StateValue> {
    pub alphabet: Vec<Symbol>,
    pub initial: String,
    pub states: Vec<State<V>>,
    #[serde(default)]
    pub transitions: Vec<TransitionRule>,
}

impl AutomatonDefinition {
    /// The binary remainder-mod-3 automaton.
    ///
    /// Reads a binary number most significant bit first; the final state
    /// `S<n>` carries the remainder `n`. Every state is terminal.
    pub fn binary_mod_three() -> Self {
        Self {
            alphabet: vec!["0".to_string(), "1".to_string()],
            initial: "S0".to_string(),
            states: vec![
                State::terminal("S0", StateValue::Integer(0)),
                State::terminal("S1", StateValue::Integer(1)),
                State::terminal("S2", StateValue::Integer(2)),
            ],
            transitions: crate::rules![
                ("S0", "0") => "S0",
                ("S0", "1") => "S1",
                ("S1", "0") => "S2",
                ("S1", "1") => "S0",
                ("S2", "0") => "S1",
                ("S2", "1") => "S2",
            ],
        }
    }
}

impl<V> AutomatonDefinition<V> {
    /// Build a fresh automaton with the run at the initial state.
    ///
    /// No checks are made; call [`Automaton::validate`] or
    /// [`Automaton::audit`] on the result as needed.
    pub fn into_automaton(self) -> Automaton<V> {
        let mut automaton = Automaton::new();
        automaton.define_alphabet(self.alphabet);
        automaton.define_states(self.initial, self.states);
        automaton.define_transitions(self.transitions);
        automaton
    }
}

impl<V: Clone> AutomatonDefinition<V> {
    /// Capture the setup of an existing automaton.
    pub fn from_automaton(automaton: &Automaton<V>) -> Self {
        Self {
            alphabet: automaton.alphabet().iter().map(str::to_string).collect(),
            initial: automaton.initial_state().to_string(),
            states: automaton.states().cloned().collect(),
            transitions: automaton.rules().collect(),
        }
    }
}

impl<V> AutomatonDefinition<V>
where
    V: for<'de> Deserialize<'de>,
{
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON definition file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DefinitionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

impl<V: Serialize> AutomatonDefinition<V> {
    pub fn to_json(&self) -> Result<String, DefinitionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
