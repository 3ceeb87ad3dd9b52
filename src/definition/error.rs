//! Definition loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an automaton definition
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The definition file could not be read
    #[error("Failed to read definition {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The definition is not valid JSON for this schema
    #[error("Failed to parse definition: {0}")]
    Parse(#[from] serde_json::Error),
}
