//! Macros for declarative state machine construction.

/// Build a [`StateMachine`](crate::StateMachine) from an adjacency listing.
///
/// Each arm declares one state and the names it may transition to. The
/// resulting machine is unstarted; call `start` to pick the entry state.
///
/// # Example
///
/// ```
/// use lockstep::state_graph;
///
/// let mut machine = state_graph! {
///     "Idle" => ["Running"],
///     "Running" => ["Idle", "Done"],
///     "Done" => [],
/// };
///
/// assert_eq!(machine.states(), vec!["Idle", "Running", "Done"]);
/// machine.start("Idle").unwrap();
/// assert!(machine.can_transition("Running"));
/// ```
#[macro_export]
macro_rules! state_graph {
    (
        $($name:expr => [$($target:expr),* $(,)?]),* $(,)?
    ) => {{
        let mut machine = $crate::StateMachine::new();
        $(
            let targets: ::std::vec::Vec<::std::string::String> =
                ::std::vec![$(::std::convert::Into::into($target)),*];
            machine.register($crate::StateDefinition::new($name, targets));
        )*
        machine
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn state_graph_macro_registers_all_states() {
        let machine = state_graph! {
            "A" => ["B", "C"],
            "B" => ["C"],
            "C" => [],
        };

        assert_eq!(machine.states(), vec!["A", "B", "C"]);
        assert!(machine.definition("A").unwrap().allows("C"));
        assert!(machine.definition("C").unwrap().allowed_transitions().is_empty());
    }

    #[test]
    fn state_graph_machine_is_unstarted() {
        let machine = state_graph! {
            "Only" => [],
        };

        assert_eq!(machine.current(), None);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn state_graph_supports_trailing_commas() {
        let machine = state_graph! {
            "A" => ["B",],
            "B" => [],
        };

        assert_eq!(machine.states().len(), 2);
    }
}
