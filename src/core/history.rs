//! Transition log.
//!
//! Every accepted input symbol appends one record. The log exists for
//! introspection and debugging; the runtime never reads it back.

use super::alphabet::Symbol;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Record of a single accepted transition.
///
/// Renders as `"<from> -> <to>"`.
///
/// # Example
///
/// ```rust
/// use fsa::core::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: "S0".to_string(),
///     to: "S1".to_string(),
///     symbol: "1".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to_string(), "S0 -> S1");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being left
    pub from: String,
    /// The state being entered
    pub to: String,
    /// The input symbol that triggered the move
    pub symbol: Symbol,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl fmt::Display for TransitionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Ordered, append-only log of accepted transitions.
///
/// # Example
///
/// ```rust
/// use fsa::core::{TransitionLog, TransitionRecord};
/// use chrono::Utc;
///
/// let mut log = TransitionLog::new();
/// log.record(TransitionRecord {
///     from: "Start".to_string(),
///     to: "Middle".to_string(),
///     symbol: "a".to_string(),
///     timestamp: Utc::now(),
/// });
/// log.record(TransitionRecord {
///     from: "Middle".to_string(),
///     to: "End".to_string(),
///     symbol: "b".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.entries(), vec!["Start -> Middle", "Middle -> End"]);
/// assert_eq!(log.path(), vec!["Start", "Middle", "End"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn record(&mut self, record: TransitionRecord) {
        self.records.push(record);
    }

    /// The `"A -> B"` rendering of every record, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.records.iter().map(ToString::to_string).collect()
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// Names of the states visited: the first source, then each destination.
    ///
    /// Empty when nothing has been recorded.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        path.extend(self.records.iter().map(|r| r.to.as_str()));
        path
    }

    /// Elapsed time between the first and last record.
    ///
    /// Returns `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}
