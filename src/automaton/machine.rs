//! Deterministic automaton runtime.

use crate::automaton::error::AutomatonError;
use crate::core::{
    Alphabet, State, StateValue, Symbol, TransitionLog, TransitionRecord, TransitionRule,
};
use chrono::Utc;
use std::collections::BTreeMap;
use std::fmt::Display;
use tracing::{debug, trace};

/// Minimum number of registered states for a usable automaton.
pub const MIN_STATES: usize = 2;

/// A deterministic finite state automaton keyed by state name and symbol.
///
/// Setup is additive: [`define_alphabet`](Self::define_alphabet),
/// [`define_states`](Self::define_states) and
/// [`define_transitions`](Self::define_transitions) only ever add or
/// overwrite entries. Each accepted symbol passed to
/// [`process`](Self::process) moves the run one step.
///
/// Cross references are not checked here. Rules may name undefined states and
/// the initial state need not exist; such gaps surface as
/// [`AutomatonError::NoTransitionRule`] or [`AutomatonError::NoFinalState`]
/// once a run reaches them. See [`audit`](Self::audit) for a strict check.
///
/// # Example
///
/// ```rust
/// use fsa::automaton::{Automaton, AutomatonError};
/// use fsa::core::{State, StateValue, TransitionRule};
///
/// let mut automaton: Automaton = Automaton::new();
/// automaton.define_alphabet(["a", "b"]);
/// automaton.define_states(
///     "Even",
///     vec![
///         State::terminal("Even", StateValue::from("even")),
///         State::transient("Odd", StateValue::from("odd")),
///     ],
/// );
/// automaton.define_transitions(vec![
///     TransitionRule::new("Even", "Odd", "a"),
///     TransitionRule::new("Odd", "Even", "a"),
///     TransitionRule::new("Even", "Even", "b"),
///     TransitionRule::new("Odd", "Odd", "b"),
/// ]);
///
/// automaton.validate().unwrap();
/// automaton.process("a").unwrap();
/// automaton.process("b").unwrap();
/// assert_eq!(automaton.final_state(), Err(AutomatonError::NoFinalState));
///
/// automaton.process("a").unwrap();
/// assert_eq!(automaton.final_state().unwrap(), "Even=even");
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<V = StateValue> {
    alphabet: Alphabet,
    states: BTreeMap<String, State<V>>,
    /// source -> trigger -> destination
    transitions: BTreeMap<String, BTreeMap<Symbol, String>>,
    initial: String,
    current: String,
    previous: Option<String>,
    log: TransitionLog,
}

impl<V> Default for Automaton<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Automaton<V> {
    /// Create an empty automaton. It fails [`validate`](Self::validate) until
    /// an alphabet, states and transitions are defined.
    pub fn new() -> Self {
        Self {
            alphabet: Alphabet::new(),
            states: BTreeMap::new(),
            transitions: BTreeMap::new(),
            initial: String::new(),
            current: String::new(),
            previous: None,
            log: TransitionLog::new(),
        }
    }

    /// Merge symbols into the alphabet.
    pub fn define_alphabet<I, S>(&mut self, symbols: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.alphabet.extend(symbols);
        debug!(size = self.alphabet.len(), "alphabet defined");
    }

    /// Register states by name and move the run to `initial`.
    ///
    /// A later state with an already registered name replaces the earlier one.
    /// `initial` is taken as given, even if no state carries that name. The
    /// previous state is left untouched.
    pub fn define_states<I>(&mut self, initial: impl Into<String>, states: I)
    where
        I: IntoIterator<Item = State<V>>,
    {
        for state in states {
            self.states.insert(state.name.clone(), state);
        }
        self.initial = initial.into();
        self.current = self.initial.clone();
        debug!(
            count = self.states.len(),
            initial = %self.initial,
            "states defined"
        );
    }

    /// Register transition rules. A rule for an existing `(source, trigger)`
    /// pair replaces the old destination.
    pub fn define_transitions<I>(&mut self, rules: I)
    where
        I: IntoIterator<Item = TransitionRule>,
    {
        for rule in rules {
            let replaced = self
                .transitions
                .entry(rule.source)
                .or_default()
                .insert(rule.trigger, rule.destination);
            if let Some(old) = replaced {
                trace!(destination = %old, "transition rule overwritten");
            }
        }
        debug!(count = self.transition_count(), "transitions defined");
    }

    /// Feed one input symbol.
    ///
    /// On success the previous state becomes the current one, the current
    /// state becomes the rule's destination and the move is logged. On error
    /// nothing changes, so a caller may keep feeding symbols from the last
    /// valid state.
    pub fn process(&mut self, symbol: &str) -> Result<(), AutomatonError> {
        if !self.alphabet.contains(symbol) {
            return Err(AutomatonError::InvalidAlphabetSymbol {
                symbol: symbol.to_string(),
            });
        }

        let destination = self
            .destination(&self.current, symbol)
            .ok_or_else(|| AutomatonError::NoTransitionRule {
                symbol: symbol.to_string(),
                state: self.current.clone(),
            })?
            .to_string();

        self.set_state(destination, symbol);
        Ok(())
    }

    fn set_state(&mut self, next: String, symbol: &str) {
        let from = std::mem::replace(&mut self.current, next);
        trace!(from = %from, to = %self.current, symbol, "transition");
        self.log.record(TransitionRecord {
            from: from.clone(),
            to: self.current.clone(),
            symbol: symbol.to_string(),
            timestamp: Utc::now(),
        });
        self.previous = Some(from);
    }

    /// Check that the automaton is usable: a non-empty alphabet, at least two
    /// states and at least one transition rule, checked in that order.
    ///
    /// Run state and cross references are not inspected.
    pub fn validate(&self) -> Result<(), AutomatonError> {
        if self.alphabet.is_empty() {
            return Err(AutomatonError::NoAlphabetDefined);
        }
        if self.states.len() < MIN_STATES {
            return Err(AutomatonError::NoStatesDefined);
        }
        if self.transition_count() == 0 {
            return Err(AutomatonError::NoTransitionDefined);
        }
        Ok(())
    }

    /// Return the run to the initial state of the latest
    /// [`define_states`](Self::define_states) call and clear the log.
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
        self.previous = None;
        self.log.clear();
        debug!(initial = %self.initial, "run reset");
    }

    /// Whether the current state is registered and terminal.
    pub fn is_final(&self) -> bool {
        self.states
            .get(&self.current)
            .is_some_and(|state| state.is_final)
    }

    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// The state left by the latest accepted transition.
    pub fn previous_state(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Name given to the latest [`define_states`](Self::define_states) call.
    pub fn initial_state(&self) -> &str {
        &self.initial
    }

    pub fn transition_log(&self) -> &TransitionLog {
        &self.log
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Registered states in name order.
    pub fn states(&self) -> impl Iterator<Item = &State<V>> {
        self.states.values()
    }

    pub fn state(&self, name: &str) -> Option<&State<V>> {
        self.states.get(name)
    }

    /// Destination for `(source, trigger)`, if a rule exists.
    pub fn destination(&self, source: &str, trigger: &str) -> Option<&str> {
        self.transitions
            .get(source)
            .and_then(|by_trigger| by_trigger.get(trigger))
            .map(String::as_str)
    }

    /// Registered rules, ordered by source then trigger.
    pub fn rules(&self) -> impl Iterator<Item = TransitionRule> + '_ {
        self.transitions.iter().flat_map(|(source, by_trigger)| {
            by_trigger
                .iter()
                .map(move |(trigger, destination)| {
                    TransitionRule::new(source.as_str(), destination.as_str(), trigger.as_str())
                })
        })
    }

    /// Number of distinct `(source, trigger)` keys.
    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(BTreeMap::len).sum()
    }

    /// Overwrite the run state. Used when resuming from a checkpoint.
    pub(crate) fn restore_run(
        &mut self,
        current: String,
        previous: Option<String>,
        log: TransitionLog,
    ) {
        self.current = current;
        self.previous = previous;
        self.log = log;
    }
}

impl<V: Display> Automaton<V> {
    /// Label of the current state as `"<name>=<value>"`.
    ///
    /// Fails with [`AutomatonError::NoFinalState`] if the current state is
    /// not terminal, including when no state of that name is registered.
    pub fn final_state(&self) -> Result<String, AutomatonError> {
        match self.states.get(&self.current) {
            Some(state) if state.is_final => Ok(state.label()),
            _ => Err(AutomatonError::NoFinalState),
        }
    }

    /// Drive a whole input sequence and report the final label.
    ///
    /// The automaton is validated once before the first symbol; an empty
    /// input skips validation. Processing stops at the first error, leaving
    /// the run at the last valid state.
    pub fn run<I, S>(&mut self, symbols: I) -> Result<String, AutomatonError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (index, symbol) in symbols.into_iter().enumerate() {
            if index == 0 {
                self.validate()?;
            }
            self.process(symbol.as_ref())?;
        }
        self.final_state()
    }

    /// [`run`](Self::run) over the characters of `input`, one symbol each.
    pub fn run_str(&mut self, input: &str) -> Result<String, AutomatonError> {
        self.run(input.chars().map(String::from))
    }
}

impl<V: Clone + Display> Automaton<V> {
    /// Whether `input` drives a copy of this automaton, from its current
    /// state, to a terminal state without error. `self` is left untouched.
    pub fn accepts(&self, input: &str) -> bool {
        self.clone().run_str(input).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_state_automaton() -> Automaton {
        let mut automaton = Automaton::new();
        automaton.define_alphabet(["0", "1"]);
        automaton.define_states(
            "S0",
            vec![
                State::terminal("S0", StateValue::Integer(0)),
                State::terminal("S1", StateValue::Integer(1)),
            ],
        );
        automaton.define_transitions(vec![
            TransitionRule::new("S0", "S0", "0"),
            TransitionRule::new("S0", "S1", "1"),
        ]);
        automaton
    }

    #[test]
    fn define_alphabet_merges_symbols() {
        let mut automaton: Automaton = Automaton::new();
        automaton.define_alphabet(["0", "1"]);
        automaton.define_alphabet(["1", "2"]);

        assert_eq!(automaton.alphabet().iter().collect::<Vec<_>>(), vec!["0", "1", "2"]);
    }

    #[test]
    fn define_states_registers_by_name() {
        let mut automaton: Automaton = Automaton::new();
        automaton.define_states(
            "S0",
            vec![
                State::terminal("S0", StateValue::Integer(0)),
                State::terminal("S1", StateValue::Integer(1)),
                State::terminal("S2", StateValue::Integer(2)),
            ],
        );

        let names: Vec<_> = automaton.states().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["S0", "S1", "S2"]);
        assert_eq!(automaton.current_state(), "S0");
        assert_eq!(automaton.initial_state(), "S0");
        assert_eq!(automaton.previous_state(), None);
    }

    #[test]
    fn define_states_last_write_wins() {
        let mut automaton: Automaton = Automaton::new();
        automaton.define_states(
            "A",
            vec![
                State::transient("A", StateValue::Integer(1)),
                State::terminal("A", StateValue::Integer(2)),
            ],
        );

        assert_eq!(automaton.states().count(), 1);
        assert_eq!(automaton.final_state().unwrap(), "A=2");
    }

    #[test]
    fn define_states_keeps_previous_state() {
        let mut automaton = two_state_automaton();
        automaton.process("1").unwrap();

        automaton.define_states("S0", Vec::new());

        assert_eq!(automaton.current_state(), "S0");
        assert_eq!(automaton.previous_state(), Some("S0"));
    }

    #[test]
    fn define_transitions_keys_by_source_and_trigger() {
        let automaton = two_state_automaton();

        assert_eq!(automaton.transition_count(), 2);
        assert_eq!(automaton.destination("S0", "0"), Some("S0"));
        assert_eq!(automaton.destination("S0", "1"), Some("S1"));
        assert_eq!(automaton.destination("S1", "0"), None);
    }

    #[test]
    fn duplicate_rule_overwrites_destination() {
        let mut automaton = two_state_automaton();
        automaton.define_transitions(vec![TransitionRule::new("S0", "S0", "1")]);

        assert_eq!(automaton.transition_count(), 2);
        assert_eq!(automaton.destination("S0", "1"), Some("S0"));
    }

    #[test]
    fn rules_lists_registered_keys() {
        let automaton = two_state_automaton();
        let rules: Vec<_> = automaton.rules().collect();
        assert_eq!(
            rules,
            vec![
                TransitionRule::new("S0", "S0", "0"),
                TransitionRule::new("S0", "S1", "1"),
            ]
        );
    }

    #[test]
    fn process_follows_rules() {
        let mut automaton = two_state_automaton();

        automaton.process("1").unwrap();

        assert_eq!(automaton.current_state(), "S1");
        assert_eq!(automaton.previous_state(), Some("S0"));
        assert_eq!(automaton.transition_log().entries(), vec!["S0 -> S1"]);
    }

    #[test]
    fn process_rejects_symbols_outside_alphabet() {
        let mut automaton = two_state_automaton();
        automaton.process("1").unwrap();

        let err = automaton.process("2").unwrap_err();

        assert_eq!(
            err,
            AutomatonError::InvalidAlphabetSymbol {
                symbol: "2".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid character within input string, 2 is not listed as part of the allowing alphabet"
        );
        assert_eq!(automaton.current_state(), "S1");
        assert_eq!(automaton.previous_state(), Some("S0"));
        assert_eq!(automaton.transition_log().len(), 1);
    }

    #[test]
    fn process_fails_without_rule() {
        let mut automaton = two_state_automaton();
        automaton.process("1").unwrap();

        let err = automaton.process("1").unwrap_err();

        assert_eq!(
            err,
            AutomatonError::NoTransitionRule {
                symbol: "1".to_string(),
                state: "S1".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid, no transition rules defined for event 1 from state S1"
        );
        assert_eq!(automaton.current_state(), "S1");
        assert_eq!(automaton.transition_log().len(), 1);
    }

    #[test]
    fn process_can_continue_after_failure() {
        let mut automaton = two_state_automaton();

        assert!(automaton.process("x").is_err());
        automaton.process("0").unwrap();
        automaton.process("1").unwrap();

        assert_eq!(automaton.current_state(), "S1");
    }

    #[test]
    fn unknown_initial_state_is_accepted() {
        let mut automaton = two_state_automaton();
        automaton.define_states("Nowhere", Vec::new());

        assert_eq!(automaton.current_state(), "Nowhere");
        assert_eq!(automaton.validate(), Ok(()));
        assert_eq!(
            automaton.process("0"),
            Err(AutomatonError::NoTransitionRule {
                symbol: "0".to_string(),
                state: "Nowhere".to_string()
            })
        );
        assert_eq!(automaton.final_state(), Err(AutomatonError::NoFinalState));
    }

    #[test]
    fn validate_checks_in_order() {
        let mut automaton: Automaton = Automaton::new();
        assert_eq!(automaton.validate(), Err(AutomatonError::NoAlphabetDefined));

        automaton.define_alphabet(["0", "1"]);
        assert_eq!(automaton.validate(), Err(AutomatonError::NoStatesDefined));

        automaton.define_states("S0", vec![State::terminal("S0", StateValue::Integer(0))]);
        assert_eq!(automaton.validate(), Err(AutomatonError::NoStatesDefined));

        automaton.define_states("S0", vec![State::terminal("S1", StateValue::Integer(1))]);
        assert_eq!(automaton.validate(), Err(AutomatonError::NoTransitionDefined));

        automaton.define_transitions(vec![TransitionRule::new("S0", "S1", "1")]);
        assert_eq!(automaton.validate(), Ok(()));
    }

    #[test]
    fn validate_ignores_missing_alphabet_even_with_states() {
        let mut automaton: Automaton = Automaton::new();
        automaton.define_states(
            "S0",
            vec![
                State::terminal("S0", StateValue::Integer(0)),
                State::terminal("S1", StateValue::Integer(1)),
            ],
        );
        automaton.define_transitions(vec![TransitionRule::new("S0", "S1", "1")]);

        assert_eq!(automaton.validate(), Err(AutomatonError::NoAlphabetDefined));
    }

    #[test]
    fn final_state_reports_terminal_label() {
        let mut automaton: Automaton = Automaton::new();
        automaton.define_alphabet(["0", "1"]);
        automaton.define_states(
            "S0",
            vec![
                State::transient("S0", StateValue::Integer(0)),
                State::terminal("S1", StateValue::Integer(1)),
            ],
        );
        automaton.define_transitions(vec![
            TransitionRule::new("S0", "S1", "1"),
            TransitionRule::new("S1", "S0", "0"),
        ]);

        assert!(!automaton.is_final());
        automaton.process("1").unwrap();
        assert!(automaton.is_final());
        assert_eq!(automaton.final_state().unwrap(), "S1=1");

        automaton.process("0").unwrap();
        let err = automaton.final_state().unwrap_err();
        assert_eq!(err, AutomatonError::NoFinalState);
        assert_eq!(err.to_string(), "transitions did not end in a final state");
    }

    #[test]
    fn reset_restores_initial_run_state() {
        let mut automaton = two_state_automaton();
        automaton.process("1").unwrap();

        automaton.reset();

        assert_eq!(automaton.current_state(), "S0");
        assert_eq!(automaton.previous_state(), None);
        assert!(automaton.transition_log().is_empty());
        assert_eq!(automaton.transition_count(), 2);
    }

    #[test]
    fn run_validates_before_first_symbol() {
        let mut automaton: Automaton = Automaton::new();
        automaton.define_alphabet(["0"]);

        assert_eq!(automaton.run(["0"]), Err(AutomatonError::NoStatesDefined));
    }

    #[test]
    fn run_with_empty_input_skips_validation() {
        let mut automaton: Automaton = Automaton::new();
        automaton.define_states("S0", vec![State::terminal("S0", StateValue::Integer(0))]);

        assert_eq!(automaton.run(Vec::<String>::new()).unwrap(), "S0=0");
    }

    #[test]
    fn run_stops_at_first_error() {
        let mut automaton = two_state_automaton();

        let result = automaton.run(["0", "1", "1", "0"]);

        assert_eq!(
            result,
            Err(AutomatonError::NoTransitionRule {
                symbol: "1".to_string(),
                state: "S1".to_string()
            })
        );
        assert_eq!(automaton.transition_log().len(), 2);
    }

    #[test]
    fn run_accepts_multi_character_symbols() {
        let mut automaton: Automaton = Automaton::new();
        automaton.define_alphabet(["push", "pop"]);
        automaton.define_states(
            "Empty",
            vec![
                State::terminal("Empty", StateValue::from("empty")),
                State::transient("Full", StateValue::from("full")),
            ],
        );
        automaton.define_transitions(vec![
            TransitionRule::new("Empty", "Full", "push"),
            TransitionRule::new("Full", "Empty", "pop"),
        ]);

        assert_eq!(automaton.run(["push", "pop"]).unwrap(), "Empty=empty");
    }

    #[test]
    fn accepts_does_not_mutate() {
        let automaton = two_state_automaton();

        assert!(automaton.accepts("001"));
        assert!(!automaton.accepts("11"));
        assert!(!automaton.accepts("0a"));
        assert_eq!(automaton.current_state(), "S0");
        assert!(automaton.transition_log().is_empty());
    }
}
