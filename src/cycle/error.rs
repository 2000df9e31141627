//! Errors raised while building or stepping a cycle machine.

use thiserror::Error;

/// Errors that can occur when building a cycle machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition from '{state}' leads back to itself")]
    SelfTransition { state: String },

    #[error("More than one transition leaves '{state}'")]
    DuplicateSource { state: String },

    #[error("State '{state}' has no outgoing transition, the cycle would stop there")]
    DeadEnd { state: String },
}

/// Errors that can occur while stepping a built machine.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("No transition available from state '{from}'")]
    NoTransition { from: String },

    #[error("Transition action failed: {0}")]
    ActionFailed(String),
}
