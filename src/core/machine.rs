//! The state machine engine.
//!
//! A [`StateMachine`] owns four things: the state registry, the current
//! state (or none, when unstarted), the transition history, and the
//! observer list. All operations are synchronous and run to completion;
//! observer notification for a transition finishes before `transition`
//! returns. The machine provides no internal locking. For shared access,
//! wrap it in a `Mutex` or give it a single owning thread.

use super::error::MachineError;
use super::history::{TransitionEvent, TransitionHistory};
use super::state::StateDefinition;

/// Observer invoked synchronously on every accepted transition.
pub type TransitionHook = Box<dyn Fn(&TransitionEvent) + Send + Sync>;

/// Outcome of validating a requested move against the registry.
///
/// Shared by `transition` and `can_transition` so the two can never
/// disagree about the same request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TransitionCheck {
    /// The move is valid and may be committed.
    Allowed,
    /// The current state has no definition in the registry. Only reachable
    /// if the registry was mutated to drop the active state after `start`.
    MissingSource,
    /// The target is not in the current state's allowed-transitions list.
    NotAllowed,
    /// The target is listed as allowed but is not itself registered.
    UnknownTarget,
}

/// A name-keyed finite-state machine with an audit trail and observers.
///
/// States are registered individually; registering a name twice replaces
/// the earlier definition (last write wins) while keeping its original
/// position in enumeration order. The machine is constructed unstarted:
/// no current state, no history, no observers.
///
/// # Example
///
/// ```rust
/// use lockstep::{StateDefinition, StateMachine};
///
/// let mut machine = StateMachine::new();
/// machine.register_state("Idle", ["Running"]);
/// machine.register_state("Running", ["Idle", "Done"]);
/// machine.register(StateDefinition::terminal("Done"));
///
/// machine.start("Idle")?;
/// assert!(machine.transition("Running")?);
/// assert_eq!(machine.current(), Some("Running"));
/// assert_eq!(machine.history().len(), 1);
/// # Ok::<(), lockstep::MachineError>(())
/// ```
#[derive(Default)]
pub struct StateMachine {
    states: Vec<StateDefinition>,
    current: Option<String>,
    history: TransitionHistory,
    hooks: Vec<TransitionHook>,
}

impl StateMachine {
    /// Create an empty, unstarted machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state definition, inserting or overwriting by name.
    ///
    /// Always succeeds. Re-registering keeps the name's original position
    /// in [`states`](Self::states) order. Overwriting the definition of the
    /// machine's active state is legal and takes effect immediately for
    /// future transition checks.
    pub fn register(&mut self, definition: StateDefinition) {
        match self.states.iter_mut().find(|s| s.name() == definition.name()) {
            Some(existing) => *existing = definition,
            None => self.states.push(definition),
        }
    }

    /// Register a state from a name and its allowed destination names.
    ///
    /// Shorthand for [`register`](Self::register) with a
    /// [`StateDefinition`] built inline.
    pub fn register_state<N, I, T>(&mut self, name: N, allowed_transitions: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.register(StateDefinition::new(name, allowed_transitions));
    }

    /// Set the machine's current state and clear the history.
    ///
    /// May be called repeatedly; every successful call re-enters the
    /// started condition with a fresh, empty history. Fails with
    /// [`MachineError::UnknownState`] if `name` has no registered
    /// definition, in which case the prior current state and history are
    /// left untouched.
    pub fn start(&mut self, name: &str) -> Result<(), MachineError> {
        if self.definition(name).is_none() {
            return Err(MachineError::UnknownState(name.to_string()));
        }
        self.current = Some(name.to_string());
        self.history.clear();
        Ok(())
    }

    /// Attempt to move from the current state to `target`.
    ///
    /// Returns `Ok(true)` and commits the move when `target` is registered
    /// and listed in the current state's allowed transitions: the current
    /// state becomes `target`, a [`TransitionEvent`] is appended to the
    /// history, and every registered hook runs synchronously in
    /// subscription order with that event.
    ///
    /// Returns `Ok(false)` with no side effects at all when the move is
    /// rejected: the target is not allowed from here, the target is not
    /// registered, or the current state's own definition has been removed
    /// from the registry since `start`. All checks run before any mutation,
    /// so a rejected transition never has partial effects.
    ///
    /// Fails with [`MachineError::NotStarted`] when the machine is
    /// unstarted.
    ///
    /// A hook that panics unwinds out of this call *after* the transition
    /// has been committed; see [`on_transition`](Self::on_transition).
    pub fn transition(&mut self, target: &str) -> Result<bool, MachineError> {
        let Some(from) = self.current.clone() else {
            return Err(MachineError::NotStarted);
        };

        if self.check(&from, target) != TransitionCheck::Allowed {
            return Ok(false);
        }

        let event = TransitionEvent::now(from, target);
        self.current = Some(target.to_string());
        self.history.record(event.clone());

        for hook in &self.hooks {
            hook(&event);
        }

        Ok(true)
    }

    /// Whether a `transition(target)` call would be accepted right now.
    ///
    /// Pure query, no side effects. Returns `false` when the machine is
    /// unstarted or the current state's definition is missing; otherwise
    /// returns exactly the accept/reject outcome a subsequent
    /// [`transition`](Self::transition) would produce, absent intervening
    /// mutation.
    pub fn can_transition(&self, target: &str) -> bool {
        match &self.current {
            Some(from) => self.check(from, target) == TransitionCheck::Allowed,
            None => false,
        }
    }

    /// The current state name, or `None` when unstarted.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Whether the machine has a current state.
    pub fn is_started(&self) -> bool {
        self.current.is_some()
    }

    /// A detached copy of the transition trail accumulated since the last
    /// `start` or `reset`.
    ///
    /// Mutating the returned vector has no effect on the machine.
    pub fn history(&self) -> Vec<TransitionEvent> {
        self.history.snapshot()
    }

    /// The sequence of states traversed since the last `start` or `reset`.
    pub fn path(&self) -> Vec<&str> {
        self.history.path()
    }

    /// Register an observer to run on every future accepted transition.
    ///
    /// Hooks run synchronously, in subscription order, after the
    /// transition has been committed to the current state and the history.
    /// There is no unsubscription; hooks live as long as the machine.
    ///
    /// A panicking hook propagates to the `transition` caller and skips
    /// any hooks registered after it, but the transition itself stands:
    /// the current state and history already reflect it. Notification is
    /// deliberately not atomic with the commit.
    pub fn on_transition<F>(&mut self, hook: F)
    where
        F: Fn(&TransitionEvent) + Send + Sync + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Return the machine to the unstarted condition.
    ///
    /// Clears the current state and the history. The state registry and
    /// the observer list are untouched. Always succeeds.
    pub fn reset(&mut self) {
        self.current = None;
        self.history.clear();
    }

    /// All registered state names, in registration order.
    pub fn states(&self) -> Vec<&str> {
        self.states.iter().map(|s| s.name()).collect()
    }

    /// Whether `name` has a registered definition.
    pub fn contains(&self, name: &str) -> bool {
        self.definition(name).is_some()
    }

    /// Look up a state's definition by name.
    pub fn definition(&self, name: &str) -> Option<&StateDefinition> {
        self.states.iter().find(|s| s.name() == name)
    }

    /// Remove a state's definition from the registry.
    ///
    /// Returns the removed definition, if any. Removing the active state
    /// is legal; the machine stays in it, but every subsequent transition
    /// request is rejected until the definition is re-registered or the
    /// machine is restarted.
    pub fn unregister(&mut self, name: &str) -> Option<StateDefinition> {
        let index = self.states.iter().position(|s| s.name() == name)?;
        Some(self.states.remove(index))
    }

    fn check(&self, from: &str, target: &str) -> TransitionCheck {
        let Some(source) = self.definition(from) else {
            return TransitionCheck::MissingSource;
        };
        if !source.allows(target) {
            return TransitionCheck::NotAllowed;
        }
        if self.definition(target).is_none() {
            return TransitionCheck::UnknownTarget;
        }
        TransitionCheck::Allowed
    }
}

impl std::fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("states", &self.states)
            .field("current", &self.current)
            .field("history", &self.history)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
