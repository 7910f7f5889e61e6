//! State transition history tracking.
//!
//! Every transition a context performs is recorded here. Actions that leave
//! the state alone (handled, ignored or rejected) are not transitions and
//! leave no trace in the history.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use statecraft::core::StateTransition;
/// use statecraft::traffic_light::Light;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Light::Red,
///     to: Light::Green,
///     trigger: "advance".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.trigger, "advance");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Name of the action that caused the transition
    pub trigger: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// History is immutable: `record` returns a new history with the
/// transition appended and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{StateHistory, StateTransition};
/// use statecraft::document::DocumentState;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: DocumentState::Draft,
///         to: DocumentState::InReview,
///         trigger: "publish".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: DocumentState::InReview,
///         to: DocumentState::Published,
///         trigger: "review_passed".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Draft -> InReview -> Published
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// The first element is the `from` of the first transition, followed by
    /// the `to` of every transition. An empty history has an empty path.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// States entered, in order, without the starting state.
    pub fn visited(&self) -> Vec<&S> {
        self.transitions.iter().map(|t| &t.to).collect()
    }

    /// Time between the first and last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether no transition has happened yet.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traffic_light::Light;

    fn step(from: Light, to: Light) -> StateTransition<Light> {
        StateTransition {
            from,
            to,
            trigger: "advance".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Light> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.visited().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(step(Light::Red, Light::Green));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(step(Light::Red, Light::Green))
            .record(step(Light::Green, Light::Yellow));

        assert_eq!(
            history.get_path(),
            vec![&Light::Red, &Light::Green, &Light::Yellow]
        );
        assert_eq!(history.visited(), vec![&Light::Green, &Light::Yellow]);
        assert_eq!(history.last().map(|t| &t.to), Some(&Light::Yellow));
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history = StateHistory::new().record(step(Light::Red, Light::Green));

        std::thread::sleep(std::time::Duration::from_millis(10));

        let history = history.record(step(Light::Green, Light::Yellow));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(step(Light::Yellow, Light::Red));
        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(step(Light::Red, Light::Green));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<Light> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.transitions()[0].trigger, "advance");
        assert_eq!(deserialized.transitions()[0].to, Light::Green);
    }
}
