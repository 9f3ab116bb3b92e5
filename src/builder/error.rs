//! Build errors for the machine builder.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No states defined. Add at least one state with .state(name, targets)")]
    NoStates,

    #[error("Initial state {0:?} is not among the declared states")]
    UnknownInitialState(String),
}
