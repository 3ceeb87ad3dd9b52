//! Strict consistency audit for an automaton definition.
//!
//! The runtime is deliberately permissive: rules may reference undefined
//! states, the initial state need not exist and triggers need not belong to
//! the alphabet. `Automaton::audit` reports every such gap at once using
//! Stillwater's `Validation`, instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use fsa::automaton::Automaton;
//! use fsa::core::{State, StateValue, TransitionRule};
//! use stillwater::validation::Validation;
//!
//! let mut automaton: Automaton = Automaton::new();
//! automaton.define_alphabet(["0"]);
//! automaton.define_states("Start", vec![
//!     State::transient("A", StateValue::Integer(0)),
//!     State::transient("B", StateValue::Integer(1)),
//! ]);
//! automaton.define_transitions(vec![TransitionRule::new("A", "C", "1")]);
//!
//! match automaton.audit() {
//!     Validation::Failure(issues) => assert_eq!(issues.len(), 4),
//!     Validation::Success(_) => panic!("expected audit issues"),
//! }
//! ```

mod checks;
mod issue;

pub use checks::AuditResult;
pub use issue::AuditIssue;
