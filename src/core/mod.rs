//! Core engine types.
//!
//! This module contains the whole of the engine:
//! - State definitions via [`StateDefinition`]
//! - The [`StateMachine`] itself: registry, current state, history, hooks
//! - The audit trail via [`TransitionEvent`] and [`TransitionHistory`]
//! - Structural-use errors via [`MachineError`]
//!
//! Everything here is synchronous and in-process; no background work, no
//! timers, no I/O.

mod error;
mod history;
mod machine;
mod state;

pub use error::MachineError;
pub use history::{TransitionEvent, TransitionHistory};
pub use machine::{StateMachine, TransitionHook};
pub use state::StateDefinition;
