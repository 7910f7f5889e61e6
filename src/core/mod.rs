//! Core state machine types and logic.
//!
//! This module contains the pure side of the library:
//! - State definitions via the `State` trait
//! - The `Workflow` contract mapping `(state, action)` to a `Reaction`
//! - Immutable history tracking
//!
//! Nothing here prints or logs. The context in [`crate::effects`] does that.

mod history;
mod reaction;
mod state;
mod workflow;

pub use history::{StateHistory, StateTransition};
pub use reaction::Reaction;
pub use state::State;
pub use workflow::{replay, Action, Workflow};
