//! State definitions for the transition registry.
//!
//! A state is identified by a unique name and carries the ordered list of
//! names it may transition to directly. Definitions are plain values; they
//! only acquire behavior once registered on a [`StateMachine`](crate::StateMachine).

use serde::{Deserialize, Serialize};

/// A named state together with its allowed destination names.
///
/// Destinations are declared by name and need not be registered at the time
/// the definition is created. A transition to a destination that is never
/// registered is simply rejected at request time.
///
/// # Example
///
/// ```rust
/// use lockstep::core::StateDefinition;
///
/// let idle = StateDefinition::new("Idle", ["Running"]);
/// assert_eq!(idle.name(), "Idle");
/// assert!(idle.allows("Running"));
/// assert!(!idle.allows("Done"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    name: String,
    allowed_transitions: Vec<String>,
}

impl StateDefinition {
    /// Create a definition from a name and its allowed destination names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lockstep::core::StateDefinition;
    ///
    /// let running = StateDefinition::new("Running", ["Idle", "Done"]);
    /// assert_eq!(running.allowed_transitions(), &["Idle", "Done"]);
    /// ```
    pub fn new<N, I, T>(name: N, allowed_transitions: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            allowed_transitions: allowed_transitions.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a definition with no outgoing transitions.
    ///
    /// Useful for terminal states of a graph.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lockstep::core::StateDefinition;
    ///
    /// let done = StateDefinition::terminal("Done");
    /// assert!(done.allowed_transitions().is_empty());
    /// ```
    pub fn terminal<N: Into<String>>(name: N) -> Self {
        Self::new(name, Vec::<String>::new())
    }

    /// The state's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared destination names, in declaration order.
    pub fn allowed_transitions(&self) -> &[String] {
        &self.allowed_transitions
    }

    /// Whether this state declares `target` as a direct destination.
    ///
    /// This is a membership query on the declaration only; it says nothing
    /// about whether `target` is itself registered.
    pub fn allows(&self, target: &str) -> bool {
        self.allowed_transitions.iter().any(|t| t == target)
    }
}
