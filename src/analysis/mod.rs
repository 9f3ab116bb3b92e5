//! Static analysis of transition graphs.
//!
//! The engine tolerates dangling targets and unreachable states at run
//! time; this module surfaces them ahead of time as [`GraphViolation`]s.
//! All functions here are pure queries over a machine's registry.
//!
//! # Example
//!
//! ```rust
//! use lockstep::analysis::{analyze_from, GraphViolation};
//! use lockstep::state_graph;
//!
//! let machine = state_graph! {
//!     "Start" => ["Finish", "Missing"],
//!     "Finish" => [],
//! };
//!
//! let violations = analyze_from(&machine, "Start");
//! assert_eq!(violations.len(), 1);
//! assert!(matches!(violations[0], GraphViolation::DanglingTarget { .. }));
//! ```

mod rules;
mod violations;

pub use rules::{analyze, analyze_from, reachable_from};
pub use violations::GraphViolation;
