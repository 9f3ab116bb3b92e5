//! Transition events and the audit trail.
//!
//! Every accepted transition produces an immutable [`TransitionEvent`] that
//! is appended to the machine's [`TransitionHistory`]. The history only ever
//! grows by appending; it is cleared exactly on `start` and `reset`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Immutable record of one accepted transition.
///
/// Timestamps come from the process wall clock and are non-decreasing with
/// it; two transitions inside the same clock tick may carry equal values.
///
/// # Example
///
/// ```rust
/// use lockstep::core::TransitionEvent;
///
/// let event = TransitionEvent::now("Idle", "Running");
/// assert_eq!(event.from(), "Idle");
/// assert_eq!(event.to(), "Running");
/// assert!(event.timestamp_millis() > 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEvent {
    from: String,
    to: String,
    timestamp: DateTime<Utc>,
}

impl TransitionEvent {
    /// Create an event stamped with the current wall-clock time.
    pub fn now<F: Into<String>, T: Into<String>>(from: F, to: T) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create an event with an explicit timestamp.
    pub fn at<F: Into<String>, T: Into<String>>(from: F, to: T, timestamp: DateTime<Utc>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            timestamp,
        }
    }

    /// The source state name.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// The destination state name.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// When the transition occurred.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The timestamp as milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }
}

/// Ordered, append-only trail of accepted transitions.
///
/// # Example
///
/// ```rust
/// use lockstep::core::{TransitionEvent, TransitionHistory};
///
/// let mut history = TransitionHistory::new();
/// history.record(TransitionEvent::now("Idle", "Running"));
/// history.record(TransitionEvent::now("Running", "Done"));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.path(), vec!["Idle", "Running", "Done"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionHistory {
    events: Vec<TransitionEvent>,
}

impl TransitionHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event to the trail.
    pub fn record(&mut self, event: TransitionEvent) {
        self.events.push(event);
    }

    /// All recorded events, in order.
    pub fn events(&self) -> &[TransitionEvent] {
        &self.events
    }

    /// A detached copy of the trail.
    ///
    /// Mutating the returned vector has no effect on this history.
    pub fn snapshot(&self) -> Vec<TransitionEvent> {
        self.events.clone()
    }

    /// The sequence of states traversed: the source of the first event,
    /// then the destination of every event.
    ///
    /// Empty when nothing has been recorded.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.events.len() + 1);
        if let Some(first) = self.events.first() {
            path.push(first.from());
        }
        for event in &self.events {
            path.push(event.to());
        }
        path
    }

    /// Elapsed time between the first and last recorded event.
    ///
    /// `None` when the trail is empty; zero for a single event.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.events.first()?, self.events.last()?);
        last.timestamp()
            .signed_duration_since(first.timestamp())
            .to_std()
            .ok()
    }

    /// Drop every recorded event.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
