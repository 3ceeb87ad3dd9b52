//! Builder for constructing automata.

use crate::automaton::Automaton;
use crate::builder::error::BuildError;
use crate::core::{State, StateValue, Symbol, TransitionRule};
use stillwater::validation::Validation;

/// Builder for constructing an [`Automaton`] with a fluent API.
///
/// Unlike the additive `define_*` calls, `build` checks the result: the
/// automaton must pass [`Automaton::validate`], and in strict mode also
/// [`Automaton::audit`].
pub struct AutomatonBuilder<V = StateValue> {
    alphabet: Vec<Symbol>,
    initial: Option<String>,
    states: Vec<State<V>>,
    rules: Vec<TransitionRule>,
    strict: bool,
}

impl<V> AutomatonBuilder<V> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            alphabet: Vec::new(),
            initial: None,
            states: Vec::new(),
            rules: Vec::new(),
            strict: false,
        }
    }

    /// Add input symbols.
    pub fn alphabet<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.alphabet.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Set the initial state name (required).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Add one state.
    pub fn state(mut self, state: State<V>) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = State<V>>) -> Self {
        self.states.extend(states);
        self
    }

    /// Add one rule: `trigger` moves `source` to `destination`.
    pub fn rule(
        mut self,
        source: impl Into<String>,
        destination: impl Into<String>,
        trigger: impl Into<Symbol>,
    ) -> Self {
        self.rules
            .push(TransitionRule::new(source, destination, trigger));
        self
    }

    /// Add multiple rules at once.
    pub fn rules(mut self, rules: impl IntoIterator<Item = TransitionRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Reject automata with dangling references or no terminal state.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Build the automaton.
    /// Returns an error if the initial state is missing or the result is
    /// not usable.
    pub fn build(self) -> Result<Automaton<V>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut automaton = Automaton::new();
        automaton.define_alphabet(self.alphabet);
        automaton.define_states(initial, self.states);
        automaton.define_transitions(self.rules);
        automaton.validate()?;

        if self.strict {
            if let Validation::Failure(issues) = automaton.audit() {
                return Err(BuildError::Audit(issues.iter().cloned().collect()));
            }
        }

        Ok(automaton)
    }
}

impl<V> Default for AutomatonBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
