//! Consistency issues reported by the audit.

use crate::core::Symbol;
use thiserror::Error;

/// A cross-reference problem the runtime tolerates but a strict check flags.
///
/// `origin` is the source state of the offending rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuditIssue {
    #[error("initial state '{name}' is not a registered state")]
    UnknownInitialState { name: String },

    #[error("rule ({origin}, {trigger}) starts from unregistered state '{origin}'")]
    UnknownSource { origin: String, trigger: Symbol },

    #[error("rule ({origin}, {trigger}) leads to unregistered state '{destination}'")]
    UnknownDestination {
        origin: String,
        trigger: Symbol,
        destination: String,
    },

    #[error("rule ({origin}, {trigger}) is triggered by '{trigger}', which is not in the alphabet")]
    TriggerOutsideAlphabet { origin: String, trigger: Symbol },

    #[error("no registered state is terminal")]
    NoTerminalState,
}
