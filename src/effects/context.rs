//! Context that holds the current state and delegates actions to it.

use crate::core::{Action, Reaction, State, StateHistory, StateTransition, Workflow};
use crate::effects::console::{Console, Stdout};
use crate::snapshot::Snapshot;
use chrono::Utc;
use tracing::{debug, info};

/// Trigger recorded for transitions requested through
/// [`Context::transition_to`] rather than by an action.
pub const DIRECT_TRIGGER: &str = "transition_to";

/// Long-lived owner of a workflow's current state and data.
///
/// The context is built already holding `W::initial_state()`, so there is no
/// moment at which an action can reach a context without a state.
/// Every action goes through [`dispatch`](Self::dispatch): the workflow
/// decides the reaction, the context prints its message and applies the
/// transition, if any.
pub struct Context<W: Workflow, C: Console = Stdout> {
    current: W::State,
    data: W::Data,
    history: StateHistory<W::State>,
    console: C,
}

impl<W: Workflow> Context<W, Stdout> {
    /// Create a context that prints to standard output.
    pub fn new(data: W::Data) -> Self {
        Self::with_console(data, Stdout)
    }
}

impl<W: Workflow, C: Console> Context<W, C> {
    /// Create a context writing its messages to `console`.
    pub fn with_console(data: W::Data, console: C) -> Self {
        let current = W::initial_state();
        debug!(machine = W::NAME, state = current.name(), "context created");
        Self {
            current,
            data,
            history: StateHistory::new(),
            console,
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &W::State {
        &self.current
    }

    /// Name of the current state.
    pub fn state_name(&self) -> &str {
        self.current.name()
    }

    /// Check if the context is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Data the workflow's handlers operate on.
    pub fn data(&self) -> &W::Data {
        &self.data
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<W::State> {
        &self.history
    }

    /// Console the context writes its messages to.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Mutable access to the console, e.g. to clear a [`Transcript`](crate::effects::Transcript).
    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Forward `action` to the current state's handler.
    ///
    /// The reaction's message goes to the console (empty messages are
    /// skipped); a `Transition` reaction then replaces the current state.
    pub fn dispatch(&mut self, action: W::Action) -> Reaction<W::State> {
        let reaction = W::react(&self.current, &action, &mut self.data);

        debug!(
            machine = W::NAME,
            state = self.current.name(),
            action = action.name(),
            outcome = reaction.kind(),
            "action dispatched"
        );

        if !reaction.message().is_empty() {
            self.console.line(reaction.message());
        }

        if let Reaction::Transition { to, .. } = &reaction {
            self.enter(to.clone(), action.name());
        }

        reaction
    }

    /// Replace the current state.
    ///
    /// Workflows move the context by returning a transition from their
    /// handlers; this is the same operation made available to callers.
    pub fn transition_to(&mut self, state: W::State) {
        self.enter(state, DIRECT_TRIGGER);
    }

    /// Capture the current state and history.
    pub fn snapshot(&self) -> Snapshot<W::State> {
        Snapshot::new(
            W::NAME,
            W::initial_state(),
            self.current.clone(),
            self.history.clone(),
        )
    }

    fn enter(&mut self, state: W::State, trigger: &str) {
        info!(
            machine = W::NAME,
            from = self.current.name(),
            to = state.name(),
            trigger = trigger,
            "state transition"
        );

        let record = StateTransition {
            from: self.current.clone(),
            to: state.clone(),
            trigger: trigger.to_string(),
            timestamp: Utc::now(),
        };
        self.history = self.history.record(record);
        self.current = state;
    }
}
