//! Audit checks, accumulated with `Validation`.

use crate::audit::issue::AuditIssue;
use crate::automaton::Automaton;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of [`Automaton::audit`].
pub type AuditResult = Validation<(), NonEmptyVec<AuditIssue>>;

fn check(ok: bool, issue: impl FnOnce() -> AuditIssue) -> AuditResult {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(issue())
    }
}

impl<V> Automaton<V> {
    /// Check every cross reference, accumulating ALL issues.
    ///
    /// Returns `Validation::Success(())` when the initial state exists, every
    /// rule connects registered states through an alphabet symbol and at least
    /// one state is terminal. Independent of [`validate`](Self::validate) and
    /// of the current run state.
    pub fn audit(&self) -> AuditResult {
        let mut checks: Vec<AuditResult> = Vec::new();

        checks.push(check(self.state(self.initial_state()).is_some(), || {
            AuditIssue::UnknownInitialState {
                name: self.initial_state().to_string(),
            }
        }));

        for rule in self.rules() {
            checks.push(check(self.state(&rule.source).is_some(), || {
                AuditIssue::UnknownSource {
                    origin: rule.source.clone(),
                    trigger: rule.trigger.clone(),
                }
            }));
            checks.push(check(self.state(&rule.destination).is_some(), || {
                AuditIssue::UnknownDestination {
                    origin: rule.source.clone(),
                    trigger: rule.trigger.clone(),
                    destination: rule.destination.clone(),
                }
            }));
            checks.push(check(self.alphabet().contains(&rule.trigger), || {
                AuditIssue::TriggerOutsideAlphabet {
                    origin: rule.source.clone(),
                    trigger: rule.trigger.clone(),
                }
            }));
        }

        checks.push(check(self.states().any(|s| s.is_final), || {
            AuditIssue::NoTerminalState
        }));

        Validation::all_vec(checks).map(|_| ())
    }
}
