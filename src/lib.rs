//! Lockstep: a small, embeddable, synchronous state machine engine.
//!
//! Callers declare named states with per-state allowed-transition lists,
//! start the machine in one of them, and request moves that are accepted
//! or rejected against the declared adjacency. Every accepted move is
//! recorded in a timestamped audit trail and dispatched, synchronously and
//! in subscription order, to registered observers.
//!
//! # Core Concepts
//!
//! - **Registry**: name-keyed [`StateDefinition`]s, last write wins
//! - **History**: append-only [`TransitionEvent`] trail, cleared on
//!   `start` and `reset`
//! - **Hooks**: observers notified after each committed transition
//!
//! Structurally invalid usage (starting in an unknown state, transitioning
//! before start) raises a [`MachineError`]; a normal rejected move is just
//! `Ok(false)`.
//!
//! # Example
//!
//! ```rust
//! use lockstep::{MachineError, StateMachine};
//!
//! let mut machine = StateMachine::new();
//! machine.register_state("Idle", ["Running"]);
//! machine.register_state("Running", ["Idle", "Done"]);
//! machine.register_state("Done", ["Idle"]);
//!
//! machine.on_transition(|event| {
//!     println!("{} -> {} at {}", event.from(), event.to(), event.timestamp_millis());
//! });
//!
//! machine.start("Idle")?;
//! assert!(machine.transition("Running")?);
//! assert!(!machine.transition("Running")?); // not in Running's allowed list
//! assert!(machine.transition("Done")?);
//!
//! assert_eq!(machine.current(), Some("Done"));
//! assert_eq!(machine.history().len(), 2);
//! # Ok::<(), MachineError>(())
//! ```
//!
//! The engine is single-owner and lock-free; see
//! [`StateMachine`] for the concurrency contract.

pub mod analysis;
pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::core::{
    MachineError, StateDefinition, StateMachine, TransitionEvent, TransitionHistory,
    TransitionHook,
};
pub use crate::builder::{BuildError, StateMachineBuilder};
