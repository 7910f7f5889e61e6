//! Point-in-time snapshots of a context.
//!
//! A snapshot records which machine it came from, the state it started in,
//! the state it is in now and every transition in between. Snapshots are
//! for inspection and logging; a context is never rebuilt from one.

use crate::core::{State, StateHistory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable view of a context's state.
/// Does not include the workflow's data.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<S: State> {
    /// Snapshot format version
    pub version: u32,

    /// Name of the workflow the context runs
    pub machine: String,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// State the context was created in
    pub initial_state: S,

    /// State the context was in when the snapshot was taken
    pub current_state: S,

    /// Every transition since creation
    pub history: StateHistory<S>,
}

impl<S: State> Snapshot<S> {
    pub fn new(
        machine: impl Into<String>,
        initial_state: S,
        current_state: S,
        history: StateHistory<S>,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            machine: machine.into(),
            taken_at: Utc::now(),
            initial_state,
            current_state,
            history,
        }
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Parse and validate a snapshot.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check the version and that the history forms one unbroken path from
    /// `initial_state` to `current_state`.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let path = self.history.get_path();
        let start = path.first().copied().unwrap_or(&self.current_state);
        let end = path.last().copied().unwrap_or(&self.current_state);

        if *start != self.initial_state {
            return Err(SnapshotError::ValidationFailed(format!(
                "history starts at '{}' but the initial state is '{}'",
                start.name(),
                self.initial_state.name()
            )));
        }

        if *end != self.current_state {
            return Err(SnapshotError::ValidationFailed(format!(
                "history ends at '{}' but the current state is '{}'",
                end.name(),
                self.current_state.name()
            )));
        }

        let transitions = self.history.transitions();
        if let Some(i) = transitions
            .windows(2)
            .position(|pair| pair[0].to != pair[1].from)
        {
            return Err(SnapshotError::ValidationFailed(format!(
                "transition {} leaves '{}' but the previous one entered '{}'",
                i + 1,
                transitions[i + 1].from.name(),
                transitions[i].to.name()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateTransition;
    use crate::document::DocumentState;

    fn step(from: DocumentState, to: DocumentState, trigger: &str) -> StateTransition<DocumentState> {
        StateTransition {
            from,
            to,
            trigger: trigger.to_string(),
            timestamp: Utc::now(),
        }
    }

    fn published() -> Snapshot<DocumentState> {
        let history = StateHistory::new()
            .record(step(DocumentState::Draft, DocumentState::InReview, "publish"))
            .record(step(
                DocumentState::InReview,
                DocumentState::Published,
                "review_passed",
            ));
        Snapshot::new(
            "document",
            DocumentState::Draft,
            DocumentState::Published,
            history,
        )
    }

    #[test]
    fn json_roundtrip_keeps_states_and_history() {
        let snapshot = published();

        let json = snapshot.to_json().unwrap();
        let restored: Snapshot<DocumentState> = Snapshot::from_json(&json).unwrap();

        assert_eq!(restored.machine, "document");
        assert_eq!(restored.current_state, DocumentState::Published);
        assert_eq!(restored.history.len(), 2);
        assert_eq!(restored.history.transitions()[1].trigger, "review_passed");
    }

    #[test]
    fn pretty_json_is_also_readable() {
        let json = published().to_json_pretty().unwrap();
        assert!(json.contains('\n'));
        assert!(Snapshot::<DocumentState>::from_json(&json).is_ok());
    }

    #[test]
    fn empty_history_requires_initial_equal_current() {
        let fresh = Snapshot::new(
            "document",
            DocumentState::Draft,
            DocumentState::Draft,
            StateHistory::new(),
        );
        assert!(fresh.validate().is_ok());

        let moved = Snapshot::new(
            "document",
            DocumentState::Draft,
            DocumentState::InReview,
            StateHistory::new(),
        );
        assert!(matches!(
            moved.validate(),
            Err(SnapshotError::ValidationFailed(_))
        ));
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut snapshot = published();
        snapshot.version = SNAPSHOT_VERSION + 1;
        let json = serde_json::to_string(&snapshot).unwrap();

        let result = Snapshot::<DocumentState>::from_json(&json);

        assert!(matches!(
            result,
            Err(SnapshotError::UnsupportedVersion { found, supported })
                if found == SNAPSHOT_VERSION + 1 && supported == SNAPSHOT_VERSION
        ));
    }

    #[test]
    fn broken_path_is_rejected() {
        let history = StateHistory::new()
            .record(step(DocumentState::Draft, DocumentState::InReview, "publish"))
            .record(step(DocumentState::Draft, DocumentState::InReview, "publish"));
        let snapshot = Snapshot::new(
            "document",
            DocumentState::Draft,
            DocumentState::InReview,
            history,
        );

        let err = snapshot.validate().unwrap_err();
        assert!(err.to_string().contains("transition 1"));
    }

    #[test]
    fn garbage_is_a_deserialization_error() {
        let result = Snapshot::<DocumentState>::from_json("{not json");
        assert!(matches!(
            result,
            Err(SnapshotError::DeserializationFailed(_))
        ));
    }
}
