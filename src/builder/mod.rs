//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and a declarative macro for
//! creating machines with minimal boilerplate. Both are thin layers over
//! [`StateMachine::register`](crate::StateMachine::register) and carry the
//! same last-write-wins semantics.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
