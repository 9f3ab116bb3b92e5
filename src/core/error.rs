//! Engine errors.

use thiserror::Error;

/// Errors raised for structurally invalid use of a machine.
///
/// These are caller-input errors and leave the machine completely
/// unchanged. A normal, expected rejected move is not an error; it is
/// reported as `Ok(false)` by [`StateMachine::transition`](crate::StateMachine::transition).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// `start` was given a name with no registered definition.
    #[error("Unknown state: {0}")]
    UnknownState(String),

    /// `transition` was called before any successful `start`.
    #[error("Machine not started")]
    NotStarted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_state_names_the_offender() {
        let err = MachineError::UnknownState("Limbo".to_string());
        assert_eq!(err.to_string(), "Unknown state: Limbo");
    }

    #[test]
    fn not_started_message() {
        assert_eq!(MachineError::NotStarted.to_string(), "Machine not started");
    }
}
