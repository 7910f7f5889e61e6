//! What a state does in response to an action.

use super::state::State;

/// Outcome of handling one action in one state.
///
/// Handlers never fail. An action that makes no sense for the current state
/// comes back as [`Reaction::Rejected`] or [`Reaction::Ignored`], and the
/// context stays where it is.
#[derive(Clone, Debug, PartialEq)]
pub enum Reaction<S: State> {
    /// The handler did its work and the context moves to `to`.
    Transition { to: S, message: String },

    /// The action was accepted without a state change.
    Handled { message: String },

    /// Informational no-op: the action is redundant in this state.
    Ignored { message: String },

    /// The action is not allowed in this state. Nothing changed.
    Rejected { message: String },
}

impl<S: State> Reaction<S> {
    /// Move to `to`, printing `message`.
    pub fn transition(to: S, message: impl Into<String>) -> Self {
        Self::Transition {
            to,
            message: message.into(),
        }
    }

    /// Accept the action in place.
    pub fn handled(message: impl Into<String>) -> Self {
        Self::Handled {
            message: message.into(),
        }
    }

    /// Answer a redundant action with an informational message.
    pub fn ignored(message: impl Into<String>) -> Self {
        Self::Ignored {
            message: message.into(),
        }
    }

    /// Refuse the action, explaining why.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// The console line this reaction produces.
    pub fn message(&self) -> &str {
        match self {
            Self::Transition { message, .. }
            | Self::Handled { message }
            | Self::Ignored { message }
            | Self::Rejected { message } => message,
        }
    }

    /// Target state, if the reaction moves the context.
    pub fn next_state(&self) -> Option<&S> {
        match self {
            Self::Transition { to, .. } => Some(to),
            _ => None,
        }
    }

    /// Whether the context changes state.
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transition { .. })
    }

    /// Whether the action was refused.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Short tag used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transition { .. } => "transition",
            Self::Handled { .. } => "handled",
            Self::Ignored { .. } => "ignored",
            Self::Rejected { .. } => "rejected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Door {
        Ajar,
    }

    impl State for Door {
        fn name(&self) -> &str {
            match self {
                Self::Ajar => "Ajar",
            }
        }
    }

    #[test]
    fn transition_exposes_target_and_message() {
        let reaction = Reaction::transition(Door::Ajar, "door opened");

        assert!(reaction.is_transition());
        assert_eq!(reaction.next_state(), Some(&Door::Ajar));
        assert_eq!(reaction.message(), "door opened");
        assert_eq!(reaction.kind(), "transition");
    }

    #[test]
    fn non_transitions_have_no_target() {
        let handled: Reaction<Door> = Reaction::handled("creak");
        let ignored: Reaction<Door> = Reaction::ignored("already shut");
        let rejected: Reaction<Door> = Reaction::rejected("door is locked");

        for reaction in [&handled, &ignored, &rejected] {
            assert!(reaction.next_state().is_none());
            assert!(!reaction.is_transition());
        }
        assert!(rejected.is_rejected());
        assert!(!ignored.is_rejected());
        assert_eq!(ignored.message(), "already shut");
        assert_eq!(handled.kind(), "handled");
    }
}
