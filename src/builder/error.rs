//! Build errors for the automaton builder.

use crate::audit::AuditIssue;
use crate::automaton::AutomatonError;
use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(name) before .build()")]
    MissingInitialState,

    #[error("Automaton is not usable: {0}")]
    Unusable(#[from] AutomatonError),

    #[error("Strict audit failed with {} issue(s)", .0.len())]
    Audit(Vec<AuditIssue>),
}
