//! Transition rules.

use super::alphabet::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Deterministic rule: reading `trigger` in `source` moves to `destination`.
///
/// Rules are keyed by `(source, trigger)`. Registering a second rule for the
/// same key replaces the first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionRule {
    pub source: String,
    pub destination: String,
    pub trigger: Symbol,
}

impl TransitionRule {
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        trigger: impl Into<Symbol>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            trigger: trigger.into(),
        }
    }
}

impl fmt::Display for TransitionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) -> {}", self.source, self.trigger, self.destination)
    }
}
