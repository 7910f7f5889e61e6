//! Traffic light: three states cycling in a fixed loop.
//!
//! ```text
//!   Red --advance--> Green --advance--> Yellow --advance--> Red
//! ```
//!
//! The light always starts at `Red`. `show_color` reports the active light
//! and never changes it.

use crate::core::{Action, Reaction, StateHistory, Workflow};
use crate::effects::{Console, Context, Stdout};
use crate::snapshot::Snapshot;
use crate::state_enum;

state_enum! {
    /// Lamp currently lit.
    pub enum Light {
        Red,
        Green,
        Yellow,
    }
}

impl Light {
    /// Fixed label printed by `show_color`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Red => "RED - STOP",
            Self::Green => "GREEN - GO",
            Self::Yellow => "YELLOW - CAUTION",
        }
    }

    /// The light that follows this one.
    pub fn next(&self) -> Light {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Yellow,
            Self::Yellow => Self::Red,
        }
    }
}

/// Actions a traffic light accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightAction {
    Advance,
    ShowColor,
}

impl Action for LightAction {
    fn name(&self) -> &str {
        match self {
            Self::Advance => "advance",
            Self::ShowColor => "show_color",
        }
    }
}

/// Transition table of the traffic light.
pub struct LightCycle;

impl Workflow for LightCycle {
    type State = Light;
    type Action = LightAction;
    type Data = ();

    const NAME: &'static str = "traffic-light";

    fn initial_state() -> Light {
        Light::Red
    }

    fn react(state: &Light, action: &LightAction, _data: &mut ()) -> Reaction<Light> {
        match action {
            LightAction::ShowColor => Reaction::handled(state.label()),
            LightAction::Advance => {
                let narration = match state {
                    Light::Red => "red: waiting, switching to green",
                    Light::Green => "green: proceed, switching to yellow",
                    Light::Yellow => "yellow: caution, switching to red",
                };
                Reaction::transition(state.next(), narration)
            }
        }
    }
}

/// A traffic light whose behavior follows its current [`Light`].
///
/// # Example
///
/// ```rust
/// use statecraft::effects::Transcript;
/// use statecraft::traffic_light::{Light, TrafficLight};
///
/// let mut light = TrafficLight::with_console(Transcript::new());
/// light.show_color();
/// light.advance();
///
/// assert_eq!(light.current_state(), Light::Green);
/// assert_eq!(light.console().lines()[0], "RED - STOP");
/// ```
pub struct TrafficLight<C: Console = Stdout> {
    context: Context<LightCycle, C>,
}

impl TrafficLight<Stdout> {
    /// Create a light at `Red` that prints to standard output.
    pub fn new() -> Self {
        Self::with_console(Stdout)
    }
}

impl Default for TrafficLight<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Console> TrafficLight<C> {
    /// Create a light at `Red` writing to `console`.
    pub fn with_console(console: C) -> Self {
        Self {
            context: Context::with_console((), console),
        }
    }

    /// Narrate the change and move to the next light.
    pub fn advance(&mut self) {
        self.context.dispatch(LightAction::Advance);
    }

    /// Print the current light's label.
    pub fn show_color(&mut self) {
        self.context.dispatch(LightAction::ShowColor);
    }

    /// Switch directly to `light` without narration.
    pub fn transition_to(&mut self, light: Light) {
        self.context.transition_to(light);
    }

    /// Light currently lit.
    pub fn current_state(&self) -> Light {
        *self.context.current_state()
    }

    /// Name of the light currently lit.
    pub fn state_name(&self) -> &str {
        self.context.state_name()
    }

    /// Every light change so far.
    pub fn history(&self) -> &StateHistory<Light> {
        self.context.history()
    }

    /// Console the light prints to.
    pub fn console(&self) -> &C {
        self.context.console()
    }

    /// Capture the current light and history.
    pub fn snapshot(&self) -> Snapshot<Light> {
        self.context.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::replay;
    use crate::effects::Transcript;

    fn light() -> TrafficLight<Transcript> {
        TrafficLight::with_console(Transcript::new())
    }

    #[test]
    fn starts_at_red() {
        assert_eq!(light().current_state(), Light::Red);
        assert_eq!(light().state_name(), "Red");
    }

    #[test]
    fn advance_follows_the_table() {
        let expected = [
            (Light::Red, Light::Green),
            (Light::Green, Light::Yellow),
            (Light::Yellow, Light::Red),
        ];

        for (from, to) in expected {
            let reaction = LightCycle::react(&from, &LightAction::Advance, &mut ());
            assert_eq!(reaction.next_state(), Some(&to), "advance from {from}");
        }
    }

    #[test]
    fn advance_narrates_before_switching() {
        let mut light = light();
        light.advance();

        assert_eq!(
            light.console().lines(),
            ["red: waiting, switching to green"]
        );
        assert_eq!(light.current_state(), Light::Green);
    }

    #[test]
    fn three_advances_close_the_cycle() {
        for &start in Light::ALL {
            let end = replay::<LightCycle, _>(start, &[LightAction::Advance; 3], &mut ());
            assert_eq!(end, start);
        }
    }

    #[test]
    fn show_color_prints_label_and_keeps_state() {
        for &start in Light::ALL {
            let mut light = light();
            light.transition_to(start);

            light.show_color();
            light.show_color();

            assert_eq!(light.current_state(), start);
            assert_eq!(light.console().lines(), [start.label(), start.label()]);
            assert_eq!(light.history().len(), 1);
        }
    }

    #[test]
    fn history_records_advance_trigger() {
        let mut light = light();
        light.advance();
        light.show_color();
        light.advance();

        let triggers: Vec<&str> = light
            .history()
            .transitions()
            .iter()
            .map(|t| t.trigger.as_str())
            .collect();
        assert_eq!(triggers, ["advance", "advance"]);
        assert_eq!(light.history().visited(), [&Light::Green, &Light::Yellow]);
    }

    #[test]
    fn no_light_is_final() {
        assert!(Light::ALL.iter().all(|l| !crate::core::State::is_final(l)));
    }
}
