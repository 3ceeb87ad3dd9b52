//! Checkpoint and resume functionality for automata.
//!
//! A checkpoint captures both the setup (as an [`AutomatonDefinition`]) and
//! the run state, so a partially consumed input can resume in another
//! process. JSON is available for inspection, bincode for compact storage.

use crate::automaton::Automaton;
use crate::core::TransitionLog;
use crate::definition::AutomatonDefinition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of an automaton.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint<V> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Alphabet, states, rules and initial state name
    pub definition: AutomatonDefinition<V>,

    /// Current state name of the run
    pub current_state: String,

    /// State left by the latest accepted transition
    pub previous_state: Option<String>,

    /// Complete transition log
    pub log: TransitionLog,
}

impl<V: Clone> Automaton<V> {
    /// Snapshot the automaton.
    pub fn checkpoint(&self) -> Checkpoint<V> {
        let checkpoint = Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            definition: AutomatonDefinition::from_automaton(self),
            current_state: self.current_state().to_string(),
            previous_state: self.previous_state().map(str::to_string),
            log: self.transition_log().clone(),
        };
        debug!(id = %checkpoint.id, current = %checkpoint.current_state, "checkpoint created");
        checkpoint
    }
}

impl<V> Automaton<V> {
    /// Rebuild an automaton from a checkpoint, run state included.
    pub fn restore(checkpoint: Checkpoint<V>) -> Result<Self, CheckpointError> {
        checkpoint.check_version()?;
        let Checkpoint {
            id,
            definition,
            current_state,
            previous_state,
            log,
            ..
        } = checkpoint;

        let mut automaton = definition.into_automaton();
        automaton.restore_run(current_state, previous_state, log);
        debug!(id = %id, current = %automaton.current_state(), "checkpoint restored");
        Ok(automaton)
    }
}

impl<V> Checkpoint<V> {
    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }
}

impl<V: Serialize> Checkpoint<V> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }
}

impl<V> Checkpoint<V>
where
    V: for<'de> Deserialize<'de>,
{
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }
}
