//! The state contract: one handler per action, for every state.

use super::reaction::Reaction;
use super::state::State;
use std::fmt::Debug;

/// An action a context exposes.
pub trait Action: Debug {
    /// Name used in history records and logs.
    fn name(&self) -> &str;
}

/// Behavior of a state machine, written as a single match over
/// `(state, action)`.
///
/// `react` must be total: every state answers every action, either by
/// returning a [`Reaction::Transition`] or by handling, ignoring or
/// rejecting the action in place. Side effects on the context's data are
/// performed through `data`; state changes are requested through the
/// returned reaction and applied by the context.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{Action, Reaction, Workflow};
/// use statecraft::state_enum;
///
/// state_enum! {
///     pub enum Switch {
///         Off,
///         On,
///     }
/// }
///
/// #[derive(Debug)]
/// struct Toggle;
///
/// impl Action for Toggle {
///     fn name(&self) -> &str {
///         "toggle"
///     }
/// }
///
/// struct LightSwitch;
///
/// impl Workflow for LightSwitch {
///     type State = Switch;
///     type Action = Toggle;
///     type Data = u32;
///
///     const NAME: &'static str = "light-switch";
///
///     fn initial_state() -> Switch {
///         Switch::Off
///     }
///
///     fn react(state: &Switch, _action: &Toggle, flips: &mut u32) -> Reaction<Switch> {
///         *flips += 1;
///         match state {
///             Switch::Off => Reaction::transition(Switch::On, "click: on"),
///             Switch::On => Reaction::transition(Switch::Off, "click: off"),
///         }
///     }
/// }
///
/// let mut flips = 0;
/// let reaction = LightSwitch::react(&Switch::Off, &Toggle, &mut flips);
/// assert_eq!(reaction.next_state(), Some(&Switch::On));
/// assert_eq!(flips, 1);
/// ```
pub trait Workflow {
    type State: State;
    type Action: Action;
    /// Data owned by the context and visible to handlers.
    type Data;

    /// Machine name used in logs and snapshots.
    const NAME: &'static str;

    /// State every new context starts in.
    fn initial_state() -> Self::State;

    /// Handle `action` while in `state`.
    fn react(
        state: &Self::State,
        action: &Self::Action,
        data: &mut Self::Data,
    ) -> Reaction<Self::State>;
}

/// Apply `actions` in order starting from `state`, without a context.
///
/// Returns the final state. Handy for checking a transition table in
/// isolation.
pub fn replay<'a, W, I>(mut state: W::State, actions: I, data: &mut W::Data) -> W::State
where
    W: Workflow,
    W::Action: 'a,
    I: IntoIterator<Item = &'a W::Action>,
{
    for action in actions {
        if let Reaction::Transition { to, .. } = W::react(&state, action, data) {
            state = to;
        }
    }
    state
}
