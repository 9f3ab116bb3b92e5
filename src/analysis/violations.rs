//! Graph violations surfaced by static analysis.

use thiserror::Error;

/// Structural defects in a machine's transition graph.
///
/// None of these stop the engine from running. A dangling target simply
/// rejects at request time and an unreachable state is never entered, but
/// both usually indicate a mistake in the declarations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphViolation {
    /// A state declares a destination that is not itself registered.
    #[error("State {state:?} allows transition to unregistered state {target:?}")]
    DanglingTarget { state: String, target: String },

    /// A registered state cannot be reached from the analysis root by
    /// following allowed transitions.
    #[error("State {state:?} is unreachable from the analysis root")]
    Unreachable { state: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dangling_target_message_names_both_ends() {
        let violation = GraphViolation::DanglingTarget {
            state: "Draft".to_string(),
            target: "Limbo".to_string(),
        };
        assert_eq!(
            violation.to_string(),
            "State \"Draft\" allows transition to unregistered state \"Limbo\""
        );
    }

    #[test]
    fn unreachable_message_names_the_state() {
        let violation = GraphViolation::Unreachable {
            state: "Orphan".to_string(),
        };
        assert_eq!(
            violation.to_string(),
            "State \"Orphan\" is unreachable from the analysis root"
        );
    }
}
