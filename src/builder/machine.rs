//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{StateDefinition, StateMachine};

/// Builder for constructing state machines with a fluent API.
///
/// Declares states in order and, optionally, the state to start in. A
/// machine built with an initial state is already started there with an
/// empty history; without one it is unstarted.
///
/// # Example
///
/// ```rust
/// use lockstep::builder::StateMachineBuilder;
///
/// let machine = StateMachineBuilder::new()
///     .state("Red", ["Green"])
///     .state("Green", ["Yellow"])
///     .state("Yellow", ["Red"])
///     .initial("Red")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current(), Some("Red"));
/// assert!(machine.can_transition("Green"));
/// ```
#[derive(Default)]
pub struct StateMachineBuilder {
    states: Vec<StateDefinition>,
    initial: Option<String>,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state by name with its allowed destination names.
    ///
    /// Declaring a name twice replaces the earlier declaration, matching
    /// [`StateMachine::register`] semantics.
    pub fn state<N, I, T>(mut self, name: N, allowed_transitions: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.states.push(StateDefinition::new(name, allowed_transitions));
        self
    }

    /// Add a pre-built definition.
    pub fn definition(mut self, definition: StateDefinition) -> Self {
        self.states.push(definition);
        self
    }

    /// Set the state to start the machine in (optional).
    pub fn initial<N: Into<String>>(mut self, name: N) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Build the machine.
    ///
    /// Fails with [`BuildError::NoStates`] when nothing was declared, or
    /// [`BuildError::UnknownInitialState`] when the requested initial
    /// state is not among the declarations.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut machine = StateMachine::new();
        for definition in self.states {
            machine.register(definition);
        }

        if let Some(initial) = self.initial {
            machine
                .start(&initial)
                .map_err(|_| BuildError::UnknownInitialState(initial))?;
        }

        Ok(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_registers_declared_states() {
        let machine = StateMachineBuilder::new()
            .state("A", ["B"])
            .state("B", Vec::<String>::new())
            .build()
            .unwrap();

        assert_eq!(machine.states(), vec!["A", "B"]);
        assert_eq!(machine.current(), None);
    }

    #[test]
    fn builder_with_initial_starts_the_machine() {
        let machine = StateMachineBuilder::new()
            .state("A", ["B"])
            .state("B", Vec::<String>::new())
            .initial("A")
            .build()
            .unwrap();

        assert_eq!(machine.current(), Some("A"));
        assert!(machine.history().is_empty());
    }

    #[test]
    fn empty_builder_fails() {
        let err = StateMachineBuilder::new().build().unwrap_err();
        assert_eq!(err, BuildError::NoStates);
    }

    #[test]
    fn unknown_initial_state_fails() {
        let err = StateMachineBuilder::new()
            .state("A", Vec::<String>::new())
            .initial("Z")
            .build()
            .unwrap_err();

        assert_eq!(err, BuildError::UnknownInitialState("Z".to_string()));
    }

    #[test]
    fn later_declaration_wins() {
        let machine = StateMachineBuilder::new()
            .state("A", ["B"])
            .state("B", Vec::<String>::new())
            .state("A", Vec::<String>::new())
            .build()
            .unwrap();

        assert_eq!(machine.states(), vec!["A", "B"]);
        assert!(!machine.definition("A").unwrap().allows("B"));
    }

    #[test]
    fn prebuilt_definitions_are_accepted() {
        let machine = StateMachineBuilder::new()
            .definition(StateDefinition::new("A", ["B"]))
            .definition(StateDefinition::terminal("B"))
            .initial("A")
            .build()
            .unwrap();

        assert!(machine.can_transition("B"));
    }
}
