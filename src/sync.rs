//! Thread-safe handle around an automaton.
//!
//! The runtime itself is single-threaded. `SharedAutomaton` puts the whole
//! automaton behind one mutex and holds it for exactly one public operation
//! at a time, so a symbol is never processed against half-applied setup.

use crate::automaton::{Automaton, AutomatonError};
use crate::core::{State, StateValue, Symbol, TransitionRule};
use std::fmt::Display;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, lock-guarded handle to a single [`Automaton`].
///
/// # Example
///
/// ```rust
/// use fsa::definition::AutomatonDefinition;
/// use fsa::sync::SharedAutomaton;
/// use std::thread;
///
/// let shared = SharedAutomaton::new(AutomatonDefinition::binary_mod_three().into_automaton());
///
/// let worker = shared.clone();
/// thread::spawn(move || worker.process("1")).join().unwrap().unwrap();
///
/// assert_eq!(shared.final_state().unwrap(), "S1=1");
/// ```
pub struct SharedAutomaton<V = StateValue> {
    inner: Arc<Mutex<Automaton<V>>>,
}

impl<V> Clone for SharedAutomaton<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> SharedAutomaton<V> {
    pub fn new(automaton: Automaton<V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(automaton)),
        }
    }

    // Every operation either completes or returns an error without touching
    // run state, so a poisoned lock still guards a consistent automaton.
    fn lock(&self) -> MutexGuard<'_, Automaton<V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn define_alphabet<I, S>(&self, symbols: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.lock().define_alphabet(symbols);
    }

    pub fn define_states<I>(&self, initial: impl Into<String>, states: I)
    where
        I: IntoIterator<Item = State<V>>,
    {
        self.lock().define_states(initial, states);
    }

    pub fn define_transitions<I>(&self, rules: I)
    where
        I: IntoIterator<Item = TransitionRule>,
    {
        self.lock().define_transitions(rules);
    }

    pub fn process(&self, symbol: &str) -> Result<(), AutomatonError> {
        self.lock().process(symbol)
    }

    pub fn validate(&self) -> Result<(), AutomatonError> {
        self.lock().validate()
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn current_state(&self) -> String {
        self.lock().current_state().to_string()
    }

    pub fn previous_state(&self) -> Option<String> {
        self.lock().previous_state().map(str::to_string)
    }

    /// Rendered transition log entries.
    pub fn transition_log(&self) -> Vec<String> {
        self.lock().transition_log().entries()
    }

    /// Run `f` with exclusive access, for operations that must not interleave.
    pub fn with<R>(&self, f: impl FnOnce(&mut Automaton<V>) -> R) -> R {
        f(&mut self.lock())
    }
}

impl<V: Display> SharedAutomaton<V> {
    pub fn final_state(&self) -> Result<String, AutomatonError> {
        self.lock().final_state()
    }
}

impl<V: Clone> SharedAutomaton<V> {
    /// Copy of the automaton as it is right now.
    pub fn snapshot(&self) -> Automaton<V> {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::AutomatonDefinition;
    use std::thread;

    fn shared() -> SharedAutomaton {
        SharedAutomaton::new(AutomatonDefinition::binary_mod_three().into_automaton())
    }

    #[test]
    fn clones_share_one_automaton() {
        let a = shared();
        let b = a.clone();

        a.process("1").unwrap();

        assert_eq!(b.current_state(), "S1");
        assert_eq!(b.previous_state().as_deref(), Some("S0"));
    }

    #[test]
    fn errors_pass_through() {
        let automaton = shared();
        assert_eq!(
            automaton.process("7"),
            Err(AutomatonError::InvalidAlphabetSymbol {
                symbol: "7".to_string()
            })
        );
        assert_eq!(automaton.current_state(), "S0");
    }

    #[test]
    fn concurrent_symbols_are_all_applied() {
        let automaton = shared();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let worker = automaton.clone();
                thread::spawn(move || worker.process("0"))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert_eq!(automaton.transition_log().len(), 8);
        assert_eq!(automaton.final_state().unwrap(), "S0=0");
    }

    #[test]
    fn with_runs_under_one_lock() {
        let automaton = shared();
        let label = automaton.with(|inner| inner.run_str("1010"));
        assert_eq!(label.unwrap(), "S1=1");
    }

    #[test]
    fn setup_through_handle() {
        let automaton: SharedAutomaton = SharedAutomaton::new(Automaton::new());
        assert_eq!(automaton.validate(), Err(AutomatonError::NoAlphabetDefined));

        automaton.define_alphabet(["a"]);
        automaton.define_states(
            "A",
            vec![
                State::terminal("A", StateValue::Integer(0)),
                State::terminal("B", StateValue::Integer(1)),
            ],
        );
        automaton.define_transitions(vec![TransitionRule::new("A", "B", "a")]);

        assert_eq!(automaton.validate(), Ok(()));
        automaton.process("a").unwrap();
        automaton.reset();
        assert_eq!(automaton.current_state(), "A");
        assert_eq!(automaton.snapshot().transition_log().len(), 0);
    }
}
